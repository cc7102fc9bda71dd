/*!
 * # Editing Core Module
 *
 * The editing core models a block-structured document with a flattened linear
 * position space and applies edits to it as atomic commands.
 *
 * ## Architecture Overview
 *
 * ### 1. Block Document Model
 * - A `Doc` is an ordered sequence of top-level `Block`s
 * - Each block has a `BlockKind` and content: inline text, child blocks, or
 *   nothing (atoms such as images and rules)
 * - Every node occupies a contiguous span of the linear position space; block
 *   boundaries are addressable positions in their own right
 *
 * ### 2. Position Resolution
 * - `Doc::resolve` maps a linear position to a `ResolvedPos` carrying the
 *   structural path used to reach it
 * - A position on a boundary between top-level siblings resolves at depth 0;
 *   positions inside a node resolve one level per node entered
 *
 * ### 3. Command-Based Editing
 * - All edits are represented as commands (`Cmd` enum) applied through
 *   `Doc::apply`
 * - Each command is one atomic transaction: `InsertEmptyParagraph` inserts
 *   the paragraph and places the caret inside it in the same apply, so the
 *   edit can never be observed half-applied
 * - Applying a command bumps the document version and returns a `Patch`
 *   describing what changed
 *
 * ## Module Structure
 *
 * - **`doc`**: `Doc`, `Block`, `BlockKind` and the node sizing rules
 * - **`resolve`**: `ResolvedPos` and the position resolution walk
 * - **`commands`**: `Cmd` enum, validation and application logic
 * - **`patch`**: edit result metadata including changed ranges and the new
 *   selection
 */

pub mod commands;
pub mod doc;
pub mod patch;
pub mod resolve;

// Public API re-exports
pub use commands::{Cmd, EditError};
pub use doc::{Block, BlockKind, Content, Doc};
pub use patch::Patch;
pub use resolve::ResolvedPos;
