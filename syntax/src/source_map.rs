/// Maps byte offsets in a formula source to line/column positions.
pub struct SourceMap<'a> {
    src: &'a str,
    line_starts: Vec<usize>,
}

impl<'a> SourceMap<'a> {
    pub fn new(src: &'a str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(src.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self { src, line_starts }
    }

    /// Returns (line, col), both 1-based. Columns count characters, not bytes.
    pub fn line_col(&self, byte: u32) -> (usize, usize) {
        let b = (byte as usize).min(self.src.len());
        let line_idx = match self.line_starts.binary_search(&b) {
            Ok(i) => i,
            Err(i) => i.saturating_sub(1),
        };
        let line_start = self.line_starts[line_idx];
        let col = self
            .src
            .get(line_start..b)
            .map_or(b - line_start, |prefix| prefix.chars().count());
        (line_idx + 1, col + 1)
    }
}
