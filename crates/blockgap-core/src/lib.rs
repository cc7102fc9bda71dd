pub mod editing;
pub mod gap_click;
pub mod view;

// Re-export key types for easier usage
pub use editing::{commands::*, doc::*, patch::*, resolve::*};
pub use gap_click::{GapAction, commit, handle_click, resolve_gap_click};
pub use view::*;
