//! Splits filename orderings into hierarchy labels.

use crate::domain::NoteName;

/// A filename paired with its ordering split into per-level labels.
///
/// `2_03_04a_5_Some_Topic_fb134b00b.md` tokenizes to labels
/// `["2", "03", "04a", "5"]`. A file without an ordering yields an empty
/// label list; such files take no part in hierarchy placement until the
/// missing-ordering pass has assigned them a root position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizedNote {
    pub labels: Vec<String>,
    pub filename: String,
}

/// Tokenizes a list of filenames, preserving input order.
///
/// No filtering and no deduplication happens here; the tree builder decides
/// what to do with the entries.
pub fn tokenize<S: AsRef<str>>(filenames: &[S]) -> Vec<TokenizedNote> {
    filenames
        .iter()
        .map(|filename| {
            let filename = filename.as_ref();
            let ordering = NoteName::parse(filename).ordering().to_string();
            let labels = if ordering.is_empty() {
                Vec::new()
            } else {
                ordering.split('_').map(str::to_string).collect()
            };
            TokenizedNote {
                labels,
                filename: filename.to_string(),
            }
        })
        .collect()
}
