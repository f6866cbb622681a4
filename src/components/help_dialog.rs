//! Help dialog showing all keyboard shortcuts

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Keyboard shortcut overlay
pub struct HelpDialog;

impl Default for HelpDialog {
    fn default() -> Self {
        Self
    }
}

fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {:<10}", key),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(description.to_string()),
    ])
}

fn section(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!(" {}", title),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))
}

impl Component for HelpDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => Some(Action::CloseModal),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let popup_area = centered_popup(area, 56, 22);
        frame.render_widget(Clear, popup_area);

        let content = vec![
            Line::from(""),
            section("Paging"),
            key_line("n / →", "Next page"),
            key_line("p / ←", "Previous page"),
            key_line("r", "Cycle rows per page (10/20/30)"),
            key_line("g", "Jump to page (type a number, Enter)"),
            Line::from(""),
            section("Filters"),
            key_line("f", "Open filter panel"),
            key_line("c", "Clear all filters"),
            Line::from(""),
            section("In the filter panel"),
            key_line("j / k", "Navigate fields"),
            key_line("Enter", "Open facet dropdown / edit date"),
            key_line("Space", "Toggle an option in a dropdown"),
            Line::from(""),
            section("General"),
            key_line("?", "This help"),
            key_line("q", "Quit"),
        ];

        let paragraph = Paragraph::new(content).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Help ")
                .title_style(
                    Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                ),
        );
        frame.render_widget(paragraph, popup_area);
        Ok(())
    }
}
