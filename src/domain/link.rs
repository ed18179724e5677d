//! Markdown links between notes and the per-line link scanner.

use regex::Regex;
use serde::Serialize;
use std::fmt;

/// A markdown link found in a note body.
///
/// `target` is the filename exactly as written in the note, which may be
/// stale: after a reorganization the ordering embedded in the target can
/// differ from the file that actually exists. The id inside the target is
/// what makes such links repairable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    /// Filename of the note containing the link.
    pub source: String,
    /// The bracketed link text.
    pub description: String,
    /// The link target as written, possibly stale.
    pub target: String,
}

impl Link {
    pub fn new(
        source: impl Into<String>,
        description: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            description: description.into(),
            target: target.into(),
        }
    }

    /// The exact `[description](target)` construct as it appears in the
    /// source file.
    pub fn markdown(&self) -> String {
        format!("[{}]({})", self.description, self.target)
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.source, self.target, self.description)
    }
}

/// Extracts inline markdown links to other notes from file content.
///
/// Only the flat `[description](target.md)` syntax is recognized; image
/// links (`![alt](img.md)`) are excluded, reference-style links and links
/// spanning multiple lines are not supported. A single line may contain
/// several links.
pub struct LinkScanner {
    re: Regex,
}

impl LinkScanner {
    pub fn new() -> Self {
        // The leading capture distinguishes image links so they can be
        // dropped without a second pass.
        let re = Regex::new(r"(!?)\[([a-zA-Z0-9_ !]*)\]\(([a-zA-Z0-9_]*\.md)\)")
            .expect("link pattern is valid");
        Self { re }
    }

    /// Scans the lines of `source` and returns every note link found.
    pub fn scan_lines(&self, source: &str, lines: &[String]) -> Vec<Link> {
        let mut links = Vec::new();
        for line in lines {
            for caps in self.re.captures_iter(line) {
                if &caps[1] == "!" {
                    continue;
                }
                links.push(Link::new(source, &caps[2], &caps[3]));
            }
        }
        links
    }
}

impl Default for LinkScanner {
    fn default() -> Self {
        Self::new()
    }
}
