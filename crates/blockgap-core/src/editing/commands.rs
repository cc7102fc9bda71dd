use thiserror::Error;

use crate::editing::doc::{Block, Doc};
use crate::editing::patch::Patch;

/// Edit commands applied through [`Doc::apply`].
///
/// Each command is one atomic transaction against the document: caret
/// placement and structural change happen in the same apply, so a host can
/// never observe an insertion without its caret move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// Collapse the selection to a caret at `at`.
    SetCaret { at: usize },
    /// Insert a fresh empty paragraph at the top-level boundary `at` and
    /// place the caret one unit inside it.
    InsertEmptyParagraph { at: usize },
}

/// Rejections for commands carrying invalid positions.
///
/// The click-handling path never produces these (resolved actions always
/// carry valid positions); they exist for hosts that dispatch hand-built
/// commands. A rejected command leaves the document untouched.
#[derive(Debug, Error)]
pub enum EditError {
    #[error("position {pos} is outside the document (content size {size})")]
    OutOfBounds { pos: usize, size: usize },
    #[error("position {pos} is not a top-level block boundary")]
    NotABlockBoundary { pos: usize },
}

impl Doc {
    /// Apply a command to the document.
    ///
    /// Validates the command's position first, then mutates, bumps the
    /// version and returns a [`Patch`] with the changed ranges and the new
    /// selection.
    pub fn apply(&mut self, cmd: Cmd) -> Result<Patch, EditError> {
        let patch = apply_command(self, cmd)?;
        self.version += 1;
        Ok(Patch {
            version: self.version,
            ..patch
        })
    }
}

pub(crate) fn apply_command(doc: &mut Doc, cmd: Cmd) -> Result<Patch, EditError> {
    match cmd {
        Cmd::SetCaret { at } => {
            let size = doc.content_size();
            if at > size {
                return Err(EditError::OutOfBounds { pos: at, size });
            }
            doc.set_selection(at..at);
            Ok(Patch {
                changed: Vec::new(),
                new_selection: at..at,
                version: doc.version(),
            })
        }
        Cmd::InsertEmptyParagraph { at } => {
            let resolved = doc.resolve(at).ok_or(EditError::OutOfBounds {
                pos: at,
                size: doc.content_size(),
            })?;
            if resolved.depth() != 0 {
                return Err(EditError::NotABlockBoundary { pos: at });
            }
            let index = resolved.index(0);
            doc.blocks.insert(index, Block::empty_paragraph());
            let caret = at + 1;
            doc.set_selection(caret..caret);
            Ok(Patch {
                changed: vec![at..at + 2],
                new_selection: caret..caret,
                version: doc.version(),
            })
        }
    }
}
