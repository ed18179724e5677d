//! Synthetic navigation edges derived from the canonical tree.
//!
//! These edges are regenerated on every walk and never stored in note
//! content; link repair ignores them. Their descriptions are fixed strings
//! so graph rendering can style them apart from explicit content links.

use crate::domain::Link;
use crate::reorganize::tree::TreeNode;

/// Edge between consecutive siblings: the train of thought continues.
pub const SISTER_LINK: &str = "train of thoughts";

/// Edge from a note to its first child: a detail or digression.
pub const DAUGHTER_LINK: &str = "detail / digression";

/// Walks the forest and emits sister and daughter edges.
///
/// For every node with children: sister edges between consecutive
/// file-carrying children, then a daughter edge from the node's own file to
/// its first file-carrying child, then recursion into each child. Top-level
/// roots are not linked to each other.
pub fn hierarchy_links(forest: &[TreeNode]) -> Vec<Link> {
    let mut links = Vec::new();
    for node in forest {
        walk(node, &mut links);
    }
    links
}

fn walk(node: &TreeNode, links: &mut Vec<Link>) {
    if node.children.is_empty() {
        return;
    }
    let files: Vec<&str> = node
        .children
        .iter()
        .filter_map(|child| child.own_file.as_deref())
        .collect();
    for pair in files.windows(2) {
        links.push(Link::new(pair[0], SISTER_LINK, pair[1]));
    }
    if let (Some(own), Some(first)) = (node.own_file.as_deref(), files.first()) {
        links.push(Link::new(own, DAUGHTER_LINK, *first));
    }
    for child in &node.children {
        walk(child, links);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reorganize::tokenizer::tokenize;
    use crate::reorganize::tree::build_forest;
    use pretty_assertions::assert_eq;

    #[test]
    fn links_for_two_level_forest() {
        let forest = build_forest(&tokenize(&[
            "1_One_000000001.md",
            "1_1_One_One_000000002.md",
            "1_1_1_One_One_One_000000006.md",
            "1_1_2_One_One_Two_000000007.md",
            "1_2_One_Two_000000003.md",
            "1_3_One_Three_000000004.md",
            "2_Two_000000005.md",
        ]));
        let links = hierarchy_links(&forest);
        assert_eq!(
            links,
            vec![
                Link::new(
                    "1_1_One_One_000000002.md",
                    SISTER_LINK,
                    "1_2_One_Two_000000003.md"
                ),
                Link::new(
                    "1_2_One_Two_000000003.md",
                    SISTER_LINK,
                    "1_3_One_Three_000000004.md"
                ),
                Link::new(
                    "1_One_000000001.md",
                    DAUGHTER_LINK,
                    "1_1_One_One_000000002.md"
                ),
                Link::new(
                    "1_1_1_One_One_One_000000006.md",
                    SISTER_LINK,
                    "1_1_2_One_One_Two_000000007.md"
                ),
                Link::new(
                    "1_1_One_One_000000002.md",
                    DAUGHTER_LINK,
                    "1_1_1_One_One_One_000000006.md"
                ),
            ]
        );
    }

    #[test]
    fn no_links_between_top_level_roots() {
        let forest = build_forest(&tokenize(&["1_One_000000001.md", "2_Two_000000002.md"]));
        assert!(hierarchy_links(&forest).is_empty());
    }

    #[test]
    fn no_daughter_link_without_own_file() {
        // The parent node exists only as a path prefix.
        let forest = build_forest(&tokenize(&[
            "1_1_child_a_000000001.md",
            "1_2_child_b_000000002.md",
        ]));
        let links = hierarchy_links(&forest);
        assert_eq!(
            links,
            vec![Link::new(
                "1_1_child_a_000000001.md",
                SISTER_LINK,
                "1_2_child_b_000000002.md"
            )]
        );
    }

    #[test]
    fn sister_links_bridge_file_less_nodes() {
        // 1_2 exists only as a prefix for 1_2_1; its siblings still connect.
        let forest = build_forest(&tokenize(&[
            "1_root_000000001.md",
            "1_1_a_000000002.md",
            "1_2_1_deep_000000003.md",
            "1_3_b_000000004.md",
        ]));
        let links = hierarchy_links(&forest);
        assert!(links.contains(&Link::new(
            "1_1_a_000000002.md",
            SISTER_LINK,
            "1_3_b_000000004.md"
        )));
    }

    #[test]
    fn single_child_gets_daughter_but_no_sister() {
        let forest = build_forest(&tokenize(&[
            "1_parent_000000001.md",
            "1_1_only_child_000000002.md",
        ]));
        let links = hierarchy_links(&forest);
        assert_eq!(
            links,
            vec![Link::new(
                "1_parent_000000001.md",
                DAUGHTER_LINK,
                "1_1_only_child_000000002.md"
            )]
        );
    }
}
