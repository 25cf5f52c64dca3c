#[cfg(test)]
#[macro_use]
mod common;
#[cfg(test)]
mod test_parser;
#[cfg(test)]
mod test_pretty_idempotence;
