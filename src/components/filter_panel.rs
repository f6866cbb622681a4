//! Filter panel component
//!
//! Modal listing the six facet multi-selects, the sail-date range pair and
//! the clear control. The panel holds presentation state only (cursor,
//! date-edit mode); filter values flow down from the App and every change
//! flows back up as a complete `FilterValues` object. Clearing is the
//! App's job: the clear control just emits `ClearFilters` with no payload.
//!
//! Date input is deliberately unvalidated: whatever the user types is
//! forwarded as-is, end-before-start included.

use crate::action::Action;
use crate::component::Component;
use crate::model::{Facet, FilterValues};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

/// One selectable row of the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PanelEntry {
    Facet(Facet),
    StartDate,
    EndDate,
    ClearFilters,
}

fn entries() -> [PanelEntry; 9] {
    [
        PanelEntry::Facet(Facet::Ships),
        PanelEntry::Facet(Facet::Ports),
        PanelEntry::Facet(Facet::Staterooms),
        PanelEntry::Facet(Facet::Offers),
        PanelEntry::Facet(Facet::Nights),
        PanelEntry::Facet(Facet::Destinations),
        PanelEntry::StartDate,
        PanelEntry::EndDate,
        PanelEntry::ClearFilters,
    ]
}

/// Filter panel modal
pub struct FilterPanel {
    /// Current filter values, echoed down by the App
    filters: FilterValues,
    cursor: usize,
    /// Whether the cursor's date field is in text-entry mode
    editing_date: bool,
    list_state: ListState,
}

impl Default for FilterPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterPanel {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            filters: FilterValues::default(),
            cursor: 0,
            editing_date: false,
            list_state,
        }
    }

    /// Keep the reflected filter values current.
    pub fn set_filters(&mut self, filters: FilterValues) {
        self.filters = filters;
    }

    /// Reset transient edit state when the modal opens.
    pub fn open(&mut self, filters: FilterValues) {
        self.filters = filters;
        self.editing_date = false;
    }

    fn current_entry(&self) -> PanelEntry {
        entries()[self.cursor]
    }

    fn select_next(&mut self) {
        if self.cursor + 1 < entries().len() {
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

    fn date_text(&self, entry: PanelEntry) -> String {
        let range = &self.filters.sail_date_range;
        match entry {
            PanelEntry::StartDate => range.start_date.clone().unwrap_or_default(),
            PanelEntry::EndDate => range.end_date.clone().unwrap_or_default(),
            _ => String::new(),
        }
    }

    /// Apply one edit keystroke to the focused date field, producing the
    /// full updated filter object. An emptied field becomes "unset".
    fn edit_date(&self, entry: PanelEntry, keystroke: KeyCode) -> Option<FilterValues> {
        let mut text = self.date_text(entry);
        match keystroke {
            KeyCode::Char(c) => text.push(c),
            KeyCode::Backspace => {
                text.pop()?;
            }
            _ => return None,
        }
        let value = if text.is_empty() { None } else { Some(text) };
        match entry {
            PanelEntry::StartDate => Some(self.filters.with_start_date(value)),
            PanelEntry::EndDate => Some(self.filters.with_end_date(value)),
            _ => None,
        }
    }

    fn facet_summary(&self, facet: Facet) -> String {
        let selected = self.filters.facet(facet);
        match selected.len() {
            0 => "any".to_string(),
            1 => selected[0].label.clone(),
            n => format!("{} selected", n),
        }
    }
}

impl Component for FilterPanel {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if self.editing_date {
            let entry = self.current_entry();
            let action = match key.code {
                KeyCode::Esc | KeyCode::Enter => {
                    self.editing_date = false;
                    None
                }
                code @ (KeyCode::Char(_) | KeyCode::Backspace) => {
                    self.edit_date(entry, code).map(Action::ApplyFilters)
                }
                _ => None,
            };
            return Ok(action);
        }

        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('f') => Some(Action::CloseModal),
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_prev();
                Some(Action::ModalUp)
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                Some(Action::ModalDown)
            }
            KeyCode::Enter => match self.current_entry() {
                PanelEntry::Facet(facet) => Some(Action::OpenFacetSelect(facet)),
                PanelEntry::StartDate | PanelEntry::EndDate => {
                    self.editing_date = true;
                    None
                }
                PanelEntry::ClearFilters => Some(Action::ClearFilters),
            },
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let popup_width = 60u16.min(area.width.saturating_sub(4));
        let popup_height = 18u16.min(area.height.saturating_sub(2));
        let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
        let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
        let popup_area = Rect::new(x, y, popup_width, popup_height);

        frame.render_widget(Clear, popup_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(3),    // Entry list
                Constraint::Length(3), // Help bar
            ])
            .split(popup_area);

        let header_text = if self.filters.is_empty() {
            "No filters active".to_string()
        } else {
            format!("{} active", self.filters.active_count())
        };
        let header = Paragraph::new(Line::from(Span::styled(
            header_text,
            Style::default().fg(Color::Cyan),
        )))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Filters ")
                .title_style(
                    Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                ),
        );
        frame.render_widget(header, chunks[0]);

        let active_marker = |active: bool| {
            Span::styled(
                if active { "● " } else { "  " },
                Style::default().fg(Color::Green),
            )
        };

        let items: Vec<ListItem> = entries()
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let line = match entry {
                    PanelEntry::Facet(facet) => Line::from(vec![
                        active_marker(!self.filters.facet(*facet).is_empty()),
                        Span::styled(
                            format!("{:<16}", facet.name()),
                            Style::default().fg(Color::White),
                        ),
                        Span::styled(self.facet_summary(*facet), Style::default().fg(Color::DarkGray)),
                    ]),
                    PanelEntry::StartDate | PanelEntry::EndDate => {
                        let label = if *entry == PanelEntry::StartDate {
                            "Sail Date Start"
                        } else {
                            "Sail Date End"
                        };
                        let text = self.date_text(*entry);
                        let editing_here = self.editing_date && self.cursor == i;
                        let field = if editing_here {
                            format!("{}_", text)
                        } else if text.is_empty() {
                            "any".to_string()
                        } else {
                            text.clone()
                        };
                        Line::from(vec![
                            active_marker(!text.is_empty()),
                            Span::styled(
                                format!("{:<16}", label),
                                Style::default().fg(Color::White),
                            ),
                            Span::styled(
                                field,
                                if editing_here {
                                    Style::default()
                                        .fg(Color::Yellow)
                                        .add_modifier(Modifier::BOLD)
                                } else {
                                    Style::default().fg(Color::DarkGray)
                                },
                            ),
                        ])
                    }
                    PanelEntry::ClearFilters => Line::from(vec![
                        Span::raw("  "),
                        Span::styled("Clear Filters", Style::default().fg(Color::Red)),
                    ]),
                };
                ListItem::new(line)
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

        let help_text = if self.editing_date {
            vec![
                Span::styled(" type ", Style::default().fg(Color::Cyan)),
                Span::raw("YYYY-MM-DD  "),
                Span::styled(" Enter/Esc ", Style::default().fg(Color::Yellow)),
                Span::raw("Done"),
            ]
        } else {
            vec![
                Span::styled(" Enter ", Style::default().fg(Color::Yellow)),
                Span::raw("Open/Edit  "),
                Span::styled(" j/k ", Style::default().fg(Color::Cyan)),
                Span::raw("Navigate  "),
                Span::styled(" Esc/f ", Style::default().fg(Color::Yellow)),
                Span::raw("Close"),
            ]
        };
        let help = Paragraph::new(Line::from(help_text))
            .alignment(ratatui::layout::Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[2]);

        Ok(())
    }
}
