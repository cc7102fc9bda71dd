//! Shared mock host for the integration tests.
//!
//! `MockView` implements [`EditorView`] over an in-memory document with a
//! programmed coordinate table standing in for a real layout engine: each
//! registered `Point` maps to the `HitPos` a renderer would report for it.

use blockgap_core::{Cmd, Doc, EditError, EditorView, HitPos, Patch, Point};

pub struct MockView {
    pub doc: Doc,
    pub editable: bool,
    pub focused: bool,
    pub dispatched: Vec<Cmd>,
    hits: Vec<(Point, HitPos)>,
}

impl MockView {
    pub fn new(doc: Doc) -> Self {
        Self {
            doc,
            editable: true,
            focused: false,
            dispatched: Vec::new(),
            hits: Vec::new(),
        }
    }

    /// Register what the layout would report for a click at (x, y).
    pub fn map_hit(mut self, x: f64, y: f64, hit: HitPos) -> Self {
        self.hits.push((Point { x, y }, hit));
        self
    }

    pub fn read_only(mut self) -> Self {
        self.editable = false;
        self
    }
}

impl EditorView for MockView {
    fn doc(&self) -> &Doc {
        &self.doc
    }

    fn editable(&self) -> bool {
        self.editable
    }

    fn pos_at_coords(&self, point: Point) -> Option<HitPos> {
        self.hits
            .iter()
            .find(|(p, _)| *p == point)
            .map(|&(_, hit)| hit)
    }

    fn dispatch(&mut self, cmd: Cmd) -> Result<Patch, EditError> {
        self.dispatched.push(cmd.clone());
        self.doc.apply(cmd)
    }

    fn focus(&mut self) {
        self.focused = true;
    }
}

/// A gap hit: the layout reports the position but no containing node.
pub fn gap_hit(pos: usize) -> HitPos {
    HitPos { pos, inside: None }
}
