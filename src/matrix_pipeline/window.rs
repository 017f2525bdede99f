//! Window module
//!
//! Fixed 5×5 views into a matrix, user edits of such a view, and their
//! tabular rendering.

mod selector;
mod edited;
mod table;


pub use selector::{WINDOW_SIZE, WindowBounds, WindowSelector, extract_window};
pub use edited::EditedWindow;
pub use table::WindowTable;
