//! The canonical-renumbering tree builder.
//!
//! Sibling labels at every level are renumbered to a dense, zero-padded
//! `01..k` sequence. The interesting part is the sort: labels may carry
//! lowercase insertion suffixes (`5a` sits between `5` and `6`), so plain
//! string order would put `10` before `8`. Labels are left-padded with
//! zeros over their leading digit run before sorting, which makes
//! `08 < 08a < 09 < 10` come out right.

use crate::reorganize::tokenizer::TokenizedNote;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// A node of the canonical hierarchy tree.
///
/// `label` is the canonical (renumbered, zero-padded) sibling position, not
/// the label text found in any filename. A node can carry a file of its own
/// and children at the same time: `1_topic.md` plus `1_1_detail.md` yields
/// one node owning `1_topic.md` with one child.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub label: String,
    pub own_file: Option<String>,
    pub children: Vec<TreeNode>,
}

/// Two or more files claiming the same ordering path.
///
/// The builder stays deterministic in their presence (the first file in
/// input order keeps the node), but renumbering a collided corpus would
/// silently drop all but one claimant, so callers are expected to refuse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderingCollision {
    pub ordering: String,
    pub filenames: Vec<String>,
}

/// Maps each distinct sibling label to its canonical replacement.
///
/// The replacement is the label's 1-based rank among the zero-pad-sorted
/// siblings, itself zero-padded to the width needed for the sibling count:
/// `['1','2','4','5','5a','6','7','8','8a','8b','9']` maps `4` to `03` and
/// `8b` to `10`.
pub fn canonical_relabeling(labels: &[String]) -> HashMap<String, String> {
    let width = labels.len().to_string().len();
    // The sort key must also cover labels whose digit run is wider than the
    // sibling count suggests (a sparse level like 8, 8a, 9, 10), otherwise
    // "10" would sort before "8".
    let longest_run = labels.iter().map(|l| leading_digits(l)).max().unwrap_or(0);
    let sort_width = width.max(longest_run);
    let mut keyed: Vec<(&String, String)> = labels
        .iter()
        .map(|label| {
            let zeros = "0".repeat(sort_width.saturating_sub(leading_digits(label)));
            (label, format!("{zeros}{label}"))
        })
        .collect();
    keyed.sort_by(|a, b| a.1.cmp(&b.1));

    keyed
        .into_iter()
        .enumerate()
        .map(|(rank, (label, _))| (label.clone(), format!("{:0width$}", rank + 1)))
        .collect()
}

/// Length of the leading digit run of a label.
fn leading_digits(label: &str) -> usize {
    label.bytes().take_while(|b| b.is_ascii_digit()).count()
}

/// Builds the canonical forest from tokenized entries.
///
/// Entries without labels (missing ordering) are excluded; they are handled
/// by the missing-ordering pass before renumbering. Duplicate label texts
/// collapse into a single node. Children are ordered by canonical label.
pub fn build_forest(entries: &[TokenizedNote]) -> Vec<TreeNode> {
    let level: Vec<(&[String], &str)> = entries
        .iter()
        .filter(|entry| !entry.labels.is_empty())
        .map(|entry| (entry.labels.as_slice(), entry.filename.as_str()))
        .collect();
    build_level(&level)
}

fn build_level(entries: &[(&[String], &str)]) -> Vec<TreeNode> {
    let mut first_labels: Vec<String> = entries.iter().map(|(labels, _)| labels[0].clone()).collect();
    first_labels.sort();
    first_labels.dedup();
    let canonical = canonical_relabeling(&first_labels);

    let mut nodes = Vec::with_capacity(first_labels.len());
    for label in &first_labels {
        let mut own_file: Option<String> = None;
        let mut deeper: Vec<(&[String], &str)> = Vec::new();
        for (labels, filename) in entries {
            if &labels[0] != label {
                continue;
            }
            if labels.len() == 1 {
                // First claimant in input order wins; collisions are the
                // caller's problem (see find_collisions).
                if own_file.is_none() {
                    own_file = Some((*filename).to_string());
                }
            } else {
                deeper.push((&labels[1..], *filename));
            }
        }
        let children = if deeper.is_empty() {
            Vec::new()
        } else {
            build_level(&deeper)
        };
        nodes.push(TreeNode {
            label: canonical[label.as_str()].clone(),
            own_file,
            children,
        });
    }
    nodes.sort_by(|a, b| a.label.cmp(&b.label));
    nodes
}

/// Reports every full ordering path claimed by more than one file.
pub fn find_collisions(entries: &[TokenizedNote]) -> Vec<OrderingCollision> {
    let mut by_path: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for entry in entries {
        if entry.labels.is_empty() {
            continue;
        }
        by_path
            .entry(entry.labels.join("_"))
            .or_default()
            .push(entry.filename.clone());
    }
    by_path
        .into_iter()
        .filter(|(_, filenames)| filenames.len() > 1)
        .map(|(ordering, filenames)| OrderingCollision {
            ordering,
            filenames,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reorganize::tokenizer::tokenize;
    use pretty_assertions::assert_eq;

    fn strings(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|s| s.to_string()).collect()
    }

    // ===========================================
    // Canonical relabeling
    // ===========================================

    #[test]
    fn relabeling_renumbers_gaps_and_suffixes() {
        let labels = strings(&["1", "2", "4", "5", "5a", "6", "7", "8", "8a", "8b", "9"]);
        let map = canonical_relabeling(&labels);
        let expected = [
            ("1", "01"),
            ("2", "02"),
            ("4", "03"),
            ("5", "04"),
            ("5a", "05"),
            ("6", "06"),
            ("7", "07"),
            ("8", "08"),
            ("8a", "09"),
            ("8b", "10"),
            ("9", "11"),
        ];
        for (original, canonical) in expected {
            assert_eq!(map[original], canonical, "label {original}");
        }
    }

    #[test]
    fn relabeling_single_label_has_width_one() {
        let map = canonical_relabeling(&strings(&["7"]));
        assert_eq!(map["7"], "1");
    }

    #[test]
    fn relabeling_pads_to_sibling_count_width() {
        let labels: Vec<String> = (1..=10).map(|i| i.to_string()).collect();
        let map = canonical_relabeling(&labels);
        assert_eq!(map["1"], "01");
        assert_eq!(map["10"], "10");
    }

    #[test]
    fn relabeling_sorts_numerically_not_lexically() {
        // Naive string sort would order 10 before 8.
        let map = canonical_relabeling(&strings(&["8", "8a", "9", "10"]));
        assert_eq!(map["8"], "1");
        assert_eq!(map["8a"], "2");
        assert_eq!(map["9"], "3");
        assert_eq!(map["10"], "4");
    }

    // ===========================================
    // Tree building
    // ===========================================

    #[test]
    fn build_small_forest() {
        let entries = tokenize(&[
            "1_first_topic_41b4e4f8f.md",
            "1_1_a_Thought_on_first_topic_2c3c34ff5.md",
            "1_2_another_Thought_on_first_topic_2af216153.md",
            "2_Second_Topic_cc6290ab7.md",
            "2_1_a_Thought_on_Second_Topic_176fb43ae.md",
        ]);
        let forest = build_forest(&entries);
        assert_eq!(
            forest,
            vec![
                TreeNode {
                    label: "1".to_string(),
                    own_file: Some("1_first_topic_41b4e4f8f.md".to_string()),
                    children: vec![
                        TreeNode {
                            label: "1".to_string(),
                            own_file: Some("1_1_a_Thought_on_first_topic_2c3c34ff5.md".to_string()),
                            children: vec![],
                        },
                        TreeNode {
                            label: "2".to_string(),
                            own_file: Some(
                                "1_2_another_Thought_on_first_topic_2af216153.md".to_string()
                            ),
                            children: vec![],
                        },
                    ],
                },
                TreeNode {
                    label: "2".to_string(),
                    own_file: Some("2_Second_Topic_cc6290ab7.md".to_string()),
                    children: vec![TreeNode {
                        label: "1".to_string(),
                        own_file: Some("2_1_a_Thought_on_Second_Topic_176fb43ae.md".to_string()),
                        children: vec![],
                    }],
                },
            ]
        );
    }

    #[test]
    fn build_renumbers_gapped_siblings() {
        let entries = tokenize(&[
            "1_one_000000001.md",
            "3_three_000000002.md",
            "3a_wedge_000000003.md",
            "7_seven_000000004.md",
        ]);
        let forest = build_forest(&entries);
        let labels: Vec<&str> = forest.iter().map(|n| n.label.as_str()).collect();
        assert_eq!(labels, vec!["1", "2", "3", "4"]);
        assert_eq!(
            forest[1].own_file.as_deref(),
            Some("3_three_000000002.md"),
            "gap before 3 closes to rank 2"
        );
        assert_eq!(forest[2].own_file.as_deref(), Some("3a_wedge_000000003.md"));
    }

    #[test]
    fn build_node_with_children_but_no_own_file() {
        let entries = tokenize(&["1_2_orphaned_child_000000001.md"]);
        let forest = build_forest(&entries);
        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].own_file, None);
        assert_eq!(forest[0].children.len(), 1);
        assert_eq!(
            forest[0].children[0].own_file.as_deref(),
            Some("1_2_orphaned_child_000000001.md")
        );
    }

    #[test]
    fn build_node_with_both_file_and_children() {
        let entries = tokenize(&["1_topic_000000001.md", "1_1_detail_000000002.md"]);
        let forest = build_forest(&entries);
        assert_eq!(forest[0].own_file.as_deref(), Some("1_topic_000000001.md"));
        assert_eq!(
            forest[0].children[0].own_file.as_deref(),
            Some("1_1_detail_000000002.md")
        );
    }

    #[test]
    fn build_excludes_entries_without_ordering() {
        let entries = tokenize(&["1_placed_000000001.md", "floating_idea.md"]);
        let forest = build_forest(&entries);
        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].own_file.as_deref(), Some("1_placed_000000001.md"));
    }

    #[test]
    fn build_is_independent_of_input_order() {
        let a = tokenize(&[
            "2_1_b_000000001.md",
            "1_a_000000002.md",
            "2_c_000000003.md",
        ]);
        let b = tokenize(&[
            "1_a_000000002.md",
            "2_c_000000003.md",
            "2_1_b_000000001.md",
        ]);
        assert_eq!(build_forest(&a), build_forest(&b));
    }

    #[test]
    fn build_deep_hierarchy() {
        let entries = tokenize(&[
            "1_One_000000001.md",
            "1_1_One_One_000000002.md",
            "1_1_1_One_One_One_000000006.md",
            "1_1_2_One_One_Two_000000007.md",
            "1_2_One_Two_000000003.md",
            "1_3_One_Three_000000004.md",
            "2_Two_000000005.md",
        ]);
        let forest = build_forest(&entries);
        assert_eq!(forest.len(), 2);
        let one = &forest[0];
        assert_eq!(one.children.len(), 3);
        assert_eq!(one.children[0].children.len(), 2);
        assert_eq!(
            one.children[0].children[1].own_file.as_deref(),
            Some("1_1_2_One_One_Two_000000007.md")
        );
    }

    // ===========================================
    // Collision detection
    // ===========================================

    #[test]
    fn no_collisions_in_distinct_orderings() {
        let entries = tokenize(&["1_a_000000001.md", "1_1_b_000000002.md", "2_c_000000003.md"]);
        assert!(find_collisions(&entries).is_empty());
    }

    #[test]
    fn collision_when_two_files_share_a_path() {
        let entries = tokenize(&[
            "1_2_first_claimant_000000001.md",
            "1_2_second_claimant_000000002.md",
            "1_3_fine_000000003.md",
        ]);
        let collisions = find_collisions(&entries);
        assert_eq!(collisions.len(), 1);
        assert_eq!(collisions[0].ordering, "1_2");
        assert_eq!(
            collisions[0].filenames,
            vec![
                "1_2_first_claimant_000000001.md".to_string(),
                "1_2_second_claimant_000000002.md".to_string(),
            ]
        );
    }

    #[test]
    fn collision_detection_ignores_unordered_files() {
        let entries = tokenize(&["idea.md", "other_idea.md"]);
        assert!(find_collisions(&entries).is_empty());
    }

    #[test]
    fn collided_build_keeps_first_claimant() {
        let entries = tokenize(&[
            "1_first_000000001.md",
            "1_second_000000002.md",
        ]);
        let forest = build_forest(&entries);
        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].own_file.as_deref(), Some("1_first_000000001.md"));
    }
}
