use tree_sitter::Node;

/// Collect nodes below `root` whose kind is in `kinds`, depth-first.
///
/// Each direct child of `root` is searched independently. When
/// `stop_at_first_per_branch` is set, a match's own subtree is not
/// descended into: the outermost match per branch wins, and nested
/// matches are left for a second, scoped pass. Sibling branches are
/// always searched.
///
/// The result is sorted ascending by start byte.
pub(crate) fn classify<'tree>(
    root: Node<'tree>,
    kinds: &[&str],
    stop_at_first_per_branch: bool,
) -> Vec<Node<'tree>> {
    let mut found = Vec::new();
    let mut cursor = root.walk();
    for child in root.children(&mut cursor) {
        walk(child, kinds, stop_at_first_per_branch, &mut found);
    }
    found.sort_by_key(|node| node.start_byte());
    found
}

fn walk<'tree>(node: Node<'tree>, kinds: &[&str], stop: bool, found: &mut Vec<Node<'tree>>) {
    if kinds.contains(&node.kind()) {
        found.push(node);
        if stop {
            return;
        }
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        walk(child, kinds, stop, found);
    }
}
