//! Host view capabilities.
//!
//! The engine never owns an editor surface. Everything it needs from the host
//! is expressed as the [`EditorView`] trait: read access to the document,
//! coordinate hit testing, command dispatch and focus restoration. Hosts wrap
//! whatever view layer they have (GUI widget, web view, terminal renderer)
//! behind this seam.

use crate::editing::{Cmd, Doc, EditError, Patch};

/// A point in the host view's coordinate space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Auxiliary,
    Other(u8),
}

/// A pointer click as delivered by the host view layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub button: PointerButton,
    pub point: Point,
}

impl PointerEvent {
    pub fn primary(x: f64, y: f64) -> Self {
        Self {
            button: PointerButton::Primary,
            point: Point { x, y },
        }
    }
}

/// Result of mapping view coordinates to a document position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitPos {
    /// Nearest position in the linear position space.
    pub pos: usize,
    /// Start position of the innermost node whose rendered box contains the
    /// point, or `None` when the point falls in a gap outside every node.
    pub inside: Option<usize>,
}

/// The capabilities a host editor surface provides to the engine.
pub trait EditorView {
    /// Current document snapshot.
    fn doc(&self) -> &Doc;

    /// Whether the surface accepts edits. Read-only views decline all gap
    /// clicks.
    fn editable(&self) -> bool {
        true
    }

    /// Map view coordinates to a document position, `None` when the point
    /// cannot be resolved at all (outside the surface).
    fn pos_at_coords(&self, point: Point) -> Option<HitPos>;

    /// Apply one atomic edit transaction to the live document.
    fn dispatch(&mut self, cmd: Cmd) -> Result<Patch, EditError>;

    /// Return input focus to the editor surface.
    fn focus(&mut self);
}
