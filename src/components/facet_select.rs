//! Facet multi-select dropdown component
//!
//! Checkbox list over one facet's available options, opened from the filter
//! panel. Toggling an option emits the complete updated `FilterValues`
//! (one field replaced, siblings untouched); this component never owns
//! filter state, it only reflects what the App passes down.

use crate::action::Action;
use crate::component::Component;
use crate::model::{Facet, FacetOption, FilterValues};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Multi-select dropdown for a single facet
pub struct FacetSelect {
    facet: Facet,
    /// Available options for the open facet
    options: Vec<FacetOption>,
    /// Current filter values, echoed down by the App
    filters: FilterValues,
    cursor: usize,
    list_state: ListState,
}

impl Default for FacetSelect {
    fn default() -> Self {
        Self::new()
    }
}

impl FacetSelect {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            facet: Facet::Ships,
            options: Vec::new(),
            filters: FilterValues::default(),
            cursor: 0,
            list_state,
        }
    }

    /// Point the dropdown at a facet. Called when the modal opens.
    pub fn open(&mut self, facet: Facet, options: Vec<FacetOption>, filters: FilterValues) {
        self.facet = facet;
        self.options = options;
        self.filters = filters;
        self.cursor = 0;
        self.list_state.select(Some(0));
    }

    /// Keep the reflected filter values current after the App applies a
    /// change.
    pub fn set_filters(&mut self, filters: FilterValues) {
        self.filters = filters;
    }

    fn is_selected(&self, option: &FacetOption) -> bool {
        self.filters
            .facet(self.facet)
            .iter()
            .any(|sel| sel.value == option.value)
    }

    /// Toggle the option under the cursor, producing the full updated
    /// filter object.
    fn toggle_current(&self) -> Option<FilterValues> {
        let option = self.options.get(self.cursor)?;
        let mut selected = self.filters.facet(self.facet).to_vec();
        match selected.iter().position(|sel| sel.value == option.value) {
            Some(idx) => {
                selected.remove(idx);
            }
            None => selected.push(option.clone()),
        }
        Some(self.filters.with_facet(self.facet, selected))
    }

    fn select_next(&mut self) {
        if self.cursor + 1 < self.options.len() {
            self.cursor += 1;
            self.list_state.select(Some(self.cursor));
        }
    }

    fn select_prev(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.list_state.select(Some(self.cursor));
        }
    }
}

impl Component for FacetSelect {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Enter => Some(Action::CloseModal),
            KeyCode::Char(' ') => self.toggle_current().map(Action::ApplyFilters),
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_prev();
                Some(Action::ModalUp)
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                Some(Action::ModalDown)
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let popup_width = 54u16.min(area.width.saturating_sub(4));
        let content_height = if self.options.is_empty() {
            6
        } else {
            self.options.len() as u16 + 2
        };
        let popup_height = (content_height + 6)
            .min(area.height.saturating_sub(4))
            .max(12);

        let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
        let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
        let popup_area = Rect::new(x, y, popup_width, popup_height);

        frame.render_widget(Clear, popup_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(3),    // Option list
                Constraint::Length(3), // Help bar
            ])
            .split(popup_area);

        let selected_count = self.filters.facet(self.facet).len();
        let header_text = if selected_count == 0 {
            "Nothing selected".to_string()
        } else {
            format!("{} selected", selected_count)
        };
        let header = Paragraph::new(Line::from(Span::styled(
            header_text,
            Style::default().fg(Color::Cyan),
        )))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", self.facet.name()))
                .title_style(
                    Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                ),
        );
        frame.render_widget(header, chunks[0]);

        if self.options.is_empty() {
            let empty = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(
                    "No options available for this facet",
                    Style::default().fg(Color::Yellow),
                )),
            ])
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
            frame.render_widget(empty, chunks[1]);
        } else {
            let items: Vec<ListItem> = self
                .options
                .iter()
                .map(|option| {
                    let checked = self.is_selected(option);
                    ListItem::new(Line::from(vec![
                        Span::styled(
                            if checked { "[x] " } else { "[ ] " },
                            Style::default().fg(Color::Green),
                        ),
                        Span::styled(
                            option.label.clone(),
                            if checked {
                                Style::default()
                                    .fg(Color::Cyan)
                                    .add_modifier(Modifier::BOLD)
                            } else {
                                Style::default().fg(Color::White)
                            },
                        ),
                    ]))
                })
                .collect();

            let list = List::new(items)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::DarkGray)),
                )
                .highlight_style(
                    Style::default()
                        .bg(Color::Blue)
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )
                .highlight_symbol("▶ ");

            frame.render_stateful_widget(list, chunks[1], &mut self.list_state);
        }

        let help = Paragraph::new(Line::from(vec![
            Span::styled(" Space ", Style::default().fg(Color::Yellow)),
            Span::raw("Toggle  "),
            Span::styled(" j/k ", Style::default().fg(Color::Cyan)),
            Span::raw("Navigate  "),
            Span::styled(" Enter/Esc ", Style::default().fg(Color::Yellow)),
            Span::raw("Done"),
        ]))
        .alignment(ratatui::layout::Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[2]);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn select_over(options: &[&str]) -> FacetSelect {
        let mut select = FacetSelect::new();
        select.open(
            Facet::Ships,
            options.iter().map(|o| FacetOption::new(o)).collect(),
            FilterValues::default(),
        );
        select
    }

    fn emitted(select: &mut FacetSelect, code: KeyCode) -> Option<Action> {
        select.handle_key_event(KeyEvent::from(code)).unwrap()
    }

    #[test]
    fn test_toggle_selects_two_options_leaving_siblings_untouched() {
        let mut select = select_over(&["Odyssey of the Seas", "Wonder of the Seas"]);

        let first = emitted(&mut select, KeyCode::Char(' '));
        let Some(Action::ApplyFilters(filters)) = first else {
            panic!("expected ApplyFilters, got {first:?}");
        };
        select.set_filters(filters);

        emitted(&mut select, KeyCode::Down);
        let second = emitted(&mut select, KeyCode::Char(' '));
        let Some(Action::ApplyFilters(filters)) = second else {
            panic!("expected ApplyFilters, got {second:?}");
        };

        let values: Vec<&str> = filters.ships.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["Odyssey of the Seas", "Wonder of the Seas"]);
        // every other field of the emitted object is untouched
        assert!(filters.ports.is_empty());
        assert!(filters.staterooms.is_empty());
        assert!(filters.offers.is_empty());
        assert!(filters.nights.is_empty());
        assert!(filters.destinations.is_empty());
        assert_eq!(filters.sail_date_range, Default::default());
    }

    #[test]
    fn test_toggle_twice_deselects() {
        let mut select = select_over(&["Odyssey of the Seas"]);
        if let Some(Action::ApplyFilters(filters)) = emitted(&mut select, KeyCode::Char(' ')) {
            select.set_filters(filters);
        }
        let Some(Action::ApplyFilters(filters)) = emitted(&mut select, KeyCode::Char(' ')) else {
            panic!("expected ApplyFilters");
        };
        assert!(filters.ships.is_empty());
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut select = select_over(&["A", "B"]);
        emitted(&mut select, KeyCode::Up);
        assert_eq!(select.cursor, 0);
        emitted(&mut select, KeyCode::Down);
        emitted(&mut select, KeyCode::Down);
        assert_eq!(select.cursor, 1);
    }

    #[test]
    fn test_toggle_on_empty_options_emits_nothing() {
        let mut select = select_over(&[]);
        assert_eq!(emitted(&mut select, KeyCode::Char(' ')), None);
    }

    #[test]
    fn test_enter_and_esc_close() {
        let mut select = select_over(&["A"]);
        assert_eq!(emitted(&mut select, KeyCode::Enter), Some(Action::CloseModal));
        assert_eq!(emitted(&mut select, KeyCode::Esc), Some(Action::CloseModal));
    }
}
