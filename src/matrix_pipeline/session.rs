//! Session module
//!
//! Holds the uploaded image and the current control values, and recomputes
//! every panel from them on demand.

mod state;
mod frame;


pub use state::Session;
pub use frame::{Frame, Panel, PanelData, PanelKind};
