//! Model layer - pure state and domain types
//!
//! This module contains all state-related types:
//! - `Offer` - one row of the cruise offers listing
//! - `FilterValues` / `FacetCatalog` - filter state and available options
//! - `PageState` - pagination arithmetic for the table
//! - `Column` / `CellRenderer` - declarative table column descriptors
//! - `ModalStack` - modal overlay management

pub mod columns;
pub mod filter;
pub mod modal;
pub mod offer;
pub mod pagination;

// Re-export commonly used types
pub use columns::{render_cell, BadgeMaps, Cell, CellRenderer, Column, Row};
pub use filter::{DateRange, Facet, FacetCatalog, FacetOption, FilterValues};
pub use modal::{Modal, ModalStack};
pub use offer::Offer;
pub use pagination::{PageState, PAGE_SIZES};
