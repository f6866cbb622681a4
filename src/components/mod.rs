//! UI Components
//!
//! Each component encapsulates its own presentation state, event handling,
//! and rendering logic. Components communicate through Actions rather than
//! direct state mutation.

pub mod facet_select;
pub mod filter_panel;
pub mod help_dialog;
pub mod layout;
pub mod offers_table;
pub mod quit_dialog;

pub use facet_select::FacetSelect;
pub use filter_panel::FilterPanel;
pub use help_dialog::HelpDialog;
pub use layout::{calculate_main_layout, centered_popup};
pub use offers_table::OffersTable;
pub use quit_dialog::QuitDialog;
