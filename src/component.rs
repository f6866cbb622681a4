//! Component trait - Interface for UI components
//!
//! Each component encapsulates its own presentation state, event handling,
//! and rendering. Components never mutate each other; they communicate
//! through Actions routed by the App.

use crate::action::Action;
use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

/// Trait for UI components
///
/// The flow is:
/// 1. `handle_key_event` - convert a key event into a semantic Action
/// 2. `update` - process an Action and mutate local state
/// 3. `draw` - render the component into its area
pub trait Component {
    /// One-time setup after construction.
    fn init(&mut self) -> Result<()> {
        Ok(())
    }

    /// Convert a key event into an Action.
    ///
    /// Components may adjust purely local cursor state here, but any change
    /// the rest of the app needs to see must travel as an Action.
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let _ = key;
        Ok(None)
    }

    /// Process an Action, optionally returning a follow-up Action.
    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let _ = action;
        Ok(None)
    }

    /// Render the component. No state changes in here.
    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()>;
}
