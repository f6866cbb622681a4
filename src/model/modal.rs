//! Modal stack for managing overlays
//!
//! Enum-based overlay state instead of a pile of boolean flags. Modals are
//! rendered bottom to top and only the top modal receives input events.

use super::filter::Facet;

/// Represents a modal overlay displayed on top of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    /// Filter panel listing facets, date fields and the clear control
    FilterPanel,
    /// Multi-select dropdown for one facet, opened from the filter panel
    FacetSelect(Facet),
    /// Keyboard shortcut overlay
    Help,
    /// Quit confirmation dialog
    QuitConfirm,
}

/// A stack of modal overlays.
#[derive(Debug, Default)]
pub struct ModalStack {
    stack: Vec<Modal>,
}

impl ModalStack {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    pub fn push(&mut self, modal: Modal) {
        self.stack.push(modal);
    }

    pub fn pop(&mut self) -> Option<Modal> {
        self.stack.pop()
    }

    /// The modal currently receiving input, if any.
    pub fn top(&self) -> Option<Modal> {
        self.stack.last().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Bottom-to-top render order.
    pub fn iter(&self) -> impl Iterator<Item = Modal> + '_ {
        self.stack.iter().copied()
    }
}
