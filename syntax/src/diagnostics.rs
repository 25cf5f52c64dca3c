use std::fmt::Write;

use crate::SyntaxError;
use crate::lexer::{LexError, Span};
use crate::parser::ParseError;
use crate::source_map::SourceMap;

/// A rendered-ready description of an error: the message, where it points, and any
/// secondary locations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub message: String,
    pub span: Span,
    pub labels: Vec<Label>,
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub span: Span,
    pub message: Option<String>,
}

impl Diagnostic {
    pub fn error(span: Span, message: impl Into<String>) -> Self {
        Diagnostic {
            message: message.into(),
            span,
            labels: vec![],
            notes: vec![],
        }
    }

    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label {
            span,
            message: Some(message.into()),
        });
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
}

impl From<&LexError> for Diagnostic {
    fn from(err: &LexError) -> Self {
        Diagnostic::error(err.span(), err.to_string())
    }
}

impl From<&ParseError> for Diagnostic {
    fn from(err: &ParseError) -> Self {
        let diag = Diagnostic::error(err.span(), err.to_string());
        match err {
            ParseError::UnclosedParen { open, .. } => {
                diag.with_label(*open, "this '(' is not closed")
            }
            ParseError::TooDeep { .. } => {
                diag.with_note("split the formula or remove redundant parentheses")
            }
            _ => diag,
        }
    }
}

impl From<&SyntaxError> for Diagnostic {
    fn from(err: &SyntaxError) -> Self {
        match err {
            SyntaxError::Lex(err) => err.into(),
            SyntaxError::Parse(err) => err.into(),
        }
    }
}

/// Renders one diagnostic against its source:
///
/// ```text
/// error: expected `)`, found end of input
///   --> <input>:1:5 [4..4]
///   = label: 1:1 [0..1] this '(' is not closed
/// ```
pub fn format_diagnostic(source: &str, diag: &Diagnostic) -> String {
    format_diagnostics(source, std::slice::from_ref(diag))
}

/// Renders diagnostics sorted by position.
pub fn format_diagnostics(source: &str, diags: &[Diagnostic]) -> String {
    let mut diags: Vec<&Diagnostic> = diags.iter().collect();
    diags.sort_by(|a, b| {
        (a.span.start, a.span.end, &a.message).cmp(&(b.span.start, b.span.end, &b.message))
    });
    let sm = SourceMap::new(source);

    let mut out = String::new();

    for d in diags {
        let mut labels: Vec<&Label> = d.labels.iter().collect();
        labels.sort_by(|a, b| {
            (a.span.start, a.span.end, a.message.as_deref().unwrap_or("")).cmp(&(
                b.span.start,
                b.span.end,
                b.message.as_deref().unwrap_or(""),
            ))
        });

        let (line, col) = sm.line_col(d.span.start);
        let _ = writeln!(&mut out, "error: {}", d.message);
        let _ = writeln!(
            &mut out,
            "  --> <input>:{}:{} [{}..{}]",
            line, col, d.span.start, d.span.end
        );
        for label in labels {
            let (line, col) = sm.line_col(label.span.start);
            let _ = writeln!(
                &mut out,
                "  = label: {}:{} [{}..{}] {}",
                line,
                col,
                label.span.start,
                label.span.end,
                label.message.as_deref().unwrap_or_default()
            );
        }
        for note in &d.notes {
            let _ = writeln!(&mut out, "  note: {}", note);
        }
    }
    out
}
