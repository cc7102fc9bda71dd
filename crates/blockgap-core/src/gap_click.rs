//! Gap-click behavior.
//!
//! Clicking in the empty visual gap between block-level elements either moves
//! the caret into an adjacent empty paragraph or inserts a new empty
//! paragraph at the gap and places the caret inside it. Only gaps between
//! top-level siblings qualify, and only when at least one neighbor is a
//! non-paragraph block kind; everything else defers to the host's default
//! click handling.
//!
//! The decision ([`resolve_gap_click`]) is pure computation over a document
//! snapshot; the commit ([`commit`]) applies it as a single atomic command
//! and restores focus. [`handle_click`] ties both to a pointer event.

use log::{debug, warn};

use crate::editing::{Block, Cmd, Doc};
use crate::view::{EditorView, PointerButton, PointerEvent};

/// The resolved placement for a gap click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GapAction {
    /// Move the caret to `at`, just inside an existing empty paragraph.
    MoveCaret { at: usize },
    /// Insert a fresh empty paragraph at the boundary `at`; the caret lands
    /// at `at + 1`.
    InsertParagraph { at: usize },
}

/// Decide what a click resolving to `pos` should do, if anything.
///
/// Policy, in order:
/// 1. only positions resolving at depth 0 (gaps between top-level siblings)
///    are handled;
/// 2. the siblings immediately before and after the gap are found by index
///    arithmetic on the top-level sequence;
/// 3. at least one neighbor must be an allow-listed block kind
///    ([`crate::BlockKind::is_gap_block`]);
/// 4. an adjacent empty paragraph (preceding neighbor first) is reused:
///    the caret moves just inside its start;
/// 5. otherwise a new empty paragraph is inserted at the boundary.
///
/// Returns `None` for every out-of-scope condition; this is a best-effort
/// affordance, never a hard failure.
pub fn resolve_gap_click(doc: &Doc, pos: usize) -> Option<GapAction> {
    let resolved = doc.resolve(pos)?;
    if resolved.depth() != 0 {
        return None;
    }

    let index_after = resolved.index(0);
    let node_before = index_after.checked_sub(1).and_then(|i| doc.child(i));
    let node_after = doc.child(index_after);

    let has_block_neighbor = node_before.is_some_and(|b| b.kind().is_gap_block())
        || node_after.is_some_and(|b| b.kind().is_gap_block());
    if !has_block_neighbor {
        return None;
    }

    let boundary = doc.boundary_before(index_after);

    if let Some(before) = node_before.filter(|b| b.is_empty_paragraph()) {
        return Some(GapAction::MoveCaret {
            at: boundary - before.node_size() + 1,
        });
    }
    if node_after.is_some_and(Block::is_empty_paragraph) {
        return Some(GapAction::MoveCaret { at: boundary + 1 });
    }

    Some(GapAction::InsertParagraph { at: boundary })
}

/// Apply a resolved action as one atomic edit and return focus to the editor
/// surface.
///
/// Dispatch rejections are logged and swallowed: the resolver only produces
/// valid positions, so a rejection means the document changed between resolve
/// and commit, and declining is the right outcome.
pub fn commit<V: EditorView + ?Sized>(view: &mut V, action: GapAction) {
    let cmd = match action {
        GapAction::MoveCaret { at } => Cmd::SetCaret { at },
        GapAction::InsertParagraph { at } => Cmd::InsertEmptyParagraph { at },
    };
    if let Err(err) = view.dispatch(cmd) {
        warn!("gap click edit rejected: {err}");
    }
    view.focus();
}

/// Handle a pointer click against the host view.
///
/// Returns `true` (click handled, suppress default behavior) exactly when a
/// gap action was resolved and committed.
pub fn handle_click<V: EditorView + ?Sized>(view: &mut V, event: &PointerEvent) -> bool {
    if !view.editable() || event.button != PointerButton::Primary {
        return false;
    }
    let Some(hit) = view.pos_at_coords(event.point) else {
        return false;
    };
    // Only clicks landing outside every node's interior are gap clicks
    if hit.inside.is_some() {
        return false;
    }
    let Some(action) = resolve_gap_click(view.doc(), hit.pos) else {
        return false;
    };
    debug!("gap click at position {}: {action:?}", hit.pos);
    commit(view, action);
    true
}
