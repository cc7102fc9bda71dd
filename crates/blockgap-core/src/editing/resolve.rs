use crate::editing::doc::{Block, Content, Doc};

/// A linear position annotated with the structural path used to reach it.
///
/// `depth() == 0` means the position is a gap between top-level siblings (or
/// the document's start/end); each node entered on the way down adds one
/// level. Positions can resolve inside text blocks (carrying a text offset)
/// and inside containers, but never inside atoms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPos {
    pos: usize,
    /// One entry per node entered: (child index within parent, node start).
    path: Vec<(usize, usize)>,
    /// Child index within the innermost parent's sequence.
    index: usize,
    /// Offset into the text when the position lands inside a text block.
    text_offset: Option<usize>,
}

impl ResolvedPos {
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Number of nodes entered to reach the position. Zero for top-level
    /// gaps.
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    /// Child index within the ancestor node at the given depth.
    ///
    /// `index(0)` at depth 0 is the insertion index within the top-level
    /// sequence; at greater depths it is the index of the top-level node the
    /// position sits inside.
    pub fn index(&self, depth: usize) -> usize {
        match self.path.get(depth) {
            Some(&(index, _)) => index,
            None => self.index,
        }
    }

    /// Start position of the node entered at the given depth (depth 1 is the
    /// outermost node entered).
    pub fn node_start(&self, depth: usize) -> Option<usize> {
        self.path.get(depth.checked_sub(1)?).map(|&(_, start)| start)
    }

    pub fn text_offset(&self) -> Option<usize> {
        self.text_offset
    }
}

impl Doc {
    /// Resolve a linear position against the document tree.
    ///
    /// Returns `None` when `pos` lies beyond the document's content. A
    /// position exactly on a block boundary resolves at the parent level, not
    /// inside either sibling.
    pub fn resolve(&self, pos: usize) -> Option<ResolvedPos> {
        if pos > self.content_size() {
            return None;
        }
        let mut path = Vec::new();
        let (index, text_offset) = resolve_in(&self.blocks, pos, 0, &mut path);
        Some(ResolvedPos {
            pos,
            path,
            index,
            text_offset,
        })
    }
}

/// Walk the child sequence, descending into whichever node strictly contains
/// `rel`. `rel` is relative to the sequence's content start, `base` is that
/// start's absolute position. Returns the innermost (index, text offset).
fn resolve_in(
    blocks: &[Block],
    rel: usize,
    base: usize,
    path: &mut Vec<(usize, usize)>,
) -> (usize, Option<usize>) {
    let mut offset = 0;
    for (i, child) in blocks.iter().enumerate() {
        if rel == offset {
            // Boundary before child i
            return (i, None);
        }
        let end = offset + child.node_size();
        if rel < end {
            path.push((i, base + offset));
            return match child.content() {
                Content::Text(_) => (0, Some(rel - offset - 1)),
                Content::Children(children) => {
                    resolve_in(children, rel - offset - 1, base + offset + 1, path)
                }
                // Atoms occupy one unit, so a position can never land
                // strictly inside one; keep the walk total anyway.
                Content::Empty => (0, None),
            };
        }
        offset = end;
    }
    // Boundary after the last child
    (blocks.len(), None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editing::doc::Block;
    use pretty_assertions::assert_eq;

    fn sample() -> Doc {
        Doc::new(vec![
            Block::heading(1, "Hi"), // 0..4
            Block::image(),          // 4..5
            Block::quote(vec![Block::paragraph("ab")]), // 5..11
        ])
    }

    #[test]
    fn test_boundary_resolves_at_depth_zero() {
        let doc = sample();
        for (pos, index) in [(0, 0), (4, 1), (5, 2), (11, 3)] {
            let resolved = doc.resolve(pos).expect("Should resolve boundary");
            assert_eq!(resolved.depth(), 0, "pos {pos}");
            assert_eq!(resolved.index(0), index, "pos {pos}");
            assert_eq!(resolved.text_offset(), None);
        }
    }

    #[test]
    fn test_inside_text_block_resolves_at_depth_one() {
        let doc = sample();
        // Positions 1..=3 are inside the heading's text
        let resolved = doc.resolve(2).expect("Should resolve");
        assert_eq!(resolved.depth(), 1);
        assert_eq!(resolved.index(0), 0);
        assert_eq!(resolved.text_offset(), Some(1));
        assert_eq!(resolved.node_start(1), Some(0));
    }

    #[test]
    fn test_inside_nested_container_resolves_deeper() {
        let doc = sample();
        // Position 7 is inside the quote's paragraph text: quote spans 5..11,
        // its paragraph spans 6..10, text starts at 7.
        let resolved = doc.resolve(8).expect("Should resolve");
        assert_eq!(resolved.depth(), 2);
        assert_eq!(resolved.index(0), 2);
        assert_eq!(resolved.text_offset(), Some(1));
        assert_eq!(resolved.node_start(1), Some(5));
        assert_eq!(resolved.node_start(2), Some(6));
    }

    #[test]
    fn test_boundary_inside_container_is_not_depth_zero() {
        let doc = sample();
        // Position 6 is the boundary before the quote's first child:
        // inside the quote (depth 1), index 0 within it.
        let resolved = doc.resolve(6).expect("Should resolve");
        assert_eq!(resolved.depth(), 1);
        assert_eq!(resolved.index(0), 2);
        assert_eq!(resolved.index(1), 0);
        assert_eq!(resolved.text_offset(), None);
    }

    #[test]
    fn test_position_past_content_does_not_resolve() {
        let doc = sample();
        assert_eq!(doc.content_size(), 11);
        assert!(doc.resolve(12).is_none());
    }

    #[test]
    fn test_empty_document_resolves_only_zero() {
        let doc = Doc::new(vec![]);
        let resolved = doc.resolve(0).expect("Should resolve");
        assert_eq!(resolved.depth(), 0);
        assert_eq!(resolved.index(0), 0);
        assert!(doc.resolve(1).is_none());
    }

    #[test]
    fn test_atom_has_no_interior() {
        let doc = Doc::new(vec![Block::image(), Block::image()]);
        // Every valid position is a boundary
        for pos in 0..=2 {
            let resolved = doc.resolve(pos).expect("Should resolve");
            assert_eq!(resolved.depth(), 0, "pos {pos}");
            assert_eq!(resolved.index(0), pos);
        }
    }
}
