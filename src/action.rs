//! Action enum - All possible application actions
//!
//! Actions are discrete operations the application can perform. Components
//! emit Actions in response to key events, and the App processes them to
//! update state. An update may return a follow-up action, which is how the
//! "resync the jump text after a page change" ordering is realized.

use crate::model::{Facet, FilterValues};
use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick when no input is pending
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Quit without confirmation
    ForceQuit,

    // ─────────────────────────────────────────────────────────────────────────
    // Paging
    // ─────────────────────────────────────────────────────────────────────────
    /// Move to the next page (saturating at the last page)
    NextPage,
    /// Move to the previous page (saturating at page 1)
    PrevPage,
    /// Advance rows-per-page through 10 -> 20 -> 30
    CycleRowsPerPage,

    // ─────────────────────────────────────────────────────────────────────────
    // Jump-to-page entry
    // ─────────────────────────────────────────────────────────────────────────
    /// Begin editing the jump-to-page field
    EnterJumpMode,
    /// Abandon jump entry
    ExitJumpMode,
    /// Add a character to the jump field
    JumpInput(char),
    /// Remove the last character from the jump field
    JumpBackspace,
    /// Submit the jump field (parse, clamp, silently ignore garbage)
    JumpSubmit,

    // ─────────────────────────────────────────────────────────────────────────
    // Filters
    // ─────────────────────────────────────────────────────────────────────────
    /// Open the filter panel modal
    OpenFilterPanel,
    /// Open the multi-select dropdown for one facet
    OpenFacetSelect(Facet),
    /// Replace the filter state with a complete new value
    ApplyFilters(FilterValues),
    /// Reset all filters (the panel's clear control, forwarded verbatim)
    ClearFilters,

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    /// Open the quit confirmation dialog
    OpenQuitDialog,
    /// Open the keyboard shortcut overlay
    OpenHelp,
    /// Close the top modal
    CloseModal,
    /// Navigate up within the top modal
    ModalUp,
    /// Navigate down within the top modal
    ModalDown,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::NextPage => write!(f, "NextPage"),
            Action::PrevPage => write!(f, "PrevPage"),
            Action::CycleRowsPerPage => write!(f, "CycleRowsPerPage"),
            Action::EnterJumpMode => write!(f, "EnterJumpMode"),
            Action::ExitJumpMode => write!(f, "ExitJumpMode"),
            Action::JumpInput(c) => write!(f, "JumpInput('{}')", c),
            Action::JumpBackspace => write!(f, "JumpBackspace"),
            Action::JumpSubmit => write!(f, "JumpSubmit"),
            Action::OpenFilterPanel => write!(f, "OpenFilterPanel"),
            Action::OpenFacetSelect(facet) => write!(f, "OpenFacetSelect({})", facet.name()),
            Action::ApplyFilters(filters) => {
                write!(f, "ApplyFilters({} active)", filters.active_count())
            }
            Action::ClearFilters => write!(f, "ClearFilters"),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::CloseModal => write!(f, "CloseModal"),
            Action::ModalUp => write!(f, "ModalUp"),
            Action::ModalDown => write!(f, "ModalDown"),
        }
    }
}
