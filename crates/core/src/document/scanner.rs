//! Splitting a document into header lines and body text.

use super::types::BOUNDARY_MARKER;

/// One line of header text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawLine<'a> {
    /// Zero-based line index in the document.
    pub index: usize,
    pub text: &'a str,
}

/// A header line as seen by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderLine<'a> {
    Boundary { index: usize },
    Config(RawLine<'a>),
}

/// Result of scanning a document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Scan<'a> {
    pub header: Vec<HeaderLine<'a>>,
    /// Trimmed text after the second boundary marker, if there is one.
    pub body: Option<String>,
}

/// Scan `content` line by line.
///
/// Lines equal to `---` (after trimming) are boundary markers. Until two have
/// been seen, every other line is a config line. The lines after the second
/// marker form the body; a document that ends on the second marker itself
/// has none.
pub fn scan(content: &str) -> Scan<'_> {
    let lines: Vec<&str> = content.lines().collect();
    let mut header = Vec::new();
    let mut boundaries = 0;

    for (index, text) in lines.iter().copied().enumerate() {
        if text.trim() == BOUNDARY_MARKER {
            boundaries += 1;
            header.push(HeaderLine::Boundary { index });

            if boundaries == 2 {
                let rest = &lines[index + 1..];
                // A line break after the marker opens an empty body line.
                let has_body = !rest.is_empty() || content.ends_with('\n');
                let body = has_body.then(|| rest.join("\n").trim().to_string());
                return Scan { header, body };
            }
            continue;
        }

        header.push(HeaderLine::Config(RawLine { index, text }));
    }

    Scan { header, body: None }
}
