//! Paginated offers table component
//!
//! Renders one page of the row set with per-column renderers (plain text,
//! placeholder substitution, ship-class badges) and the page controls:
//! rows-per-page cycling, prev/next, and the free-text jump-to-page field.
//! Pagination arithmetic lives in [`crate::model::PageState`]; this
//! component owns the key handling and the drawing.

use crate::action::Action;
use crate::component::Component;
use crate::model::{render_cell, BadgeMaps, Column, PageState, Row};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Hard cap on a single column's width so one long itinerary cell can't
/// push everything else off screen.
const MAX_COL_WIDTH: usize = 30;

/// Paginated table over the filtered offer rows.
pub struct OffersTable {
    /// Full (already filtered) row set; the visible slice is derived.
    rows: Vec<Row>,
    columns: Vec<Column>,
    badges: BadgeMaps,
    /// Pagination state (page number, page size, jump text)
    pub page: PageState,
    /// Whether the jump field is being edited
    pub jump_mode: bool,
}

impl OffersTable {
    pub fn new(columns: Vec<Column>, badges: BadgeMaps) -> Self {
        Self {
            rows: Vec::new(),
            columns,
            badges,
            page: PageState::new(),
            jump_mode: false,
        }
    }

    /// Replace the row set (the parent re-filtered). The page number is
    /// clamped so it stays within the new page count.
    pub fn set_rows(&mut self, rows: Vec<Row>) {
        self.rows = rows;
        self.page.set_row_count(self.rows.len());
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// The rows visible on the current page (half-open slice).
    pub fn current_page_rows(&self) -> &[Row] {
        &self.rows[self.page.page_range()]
    }

    fn pad(text: &str, width: usize) -> String {
        let display = UnicodeWidthStr::width(text);
        if display >= width {
            return text.to_string();
        }
        let mut padded = text.to_string();
        padded.push_str(&" ".repeat(width - display));
        padded
    }

    fn truncate(text: &str, width: usize) -> String {
        if UnicodeWidthStr::width(text) <= width {
            return text.to_string();
        }
        let budget = width.saturating_sub(3);
        let mut out = String::new();
        let mut used = 0;
        for ch in text.chars() {
            let w = UnicodeWidthStr::width(ch.to_string().as_str());
            if used + w > budget {
                break;
            }
            used += w;
            out.push(ch);
        }
        out.push_str("...");
        out
    }

    /// Build the header, separator and body lines for the visible page.
    fn build_table_lines(&self) -> Vec<Line<'static>> {
        let visible = self.current_page_rows();

        if visible.is_empty() {
            return vec![
                Line::from(""),
                Line::from(Span::styled(
                    "No offers match the current filters",
                    Style::default().fg(Color::Yellow),
                )),
            ];
        }

        // Width per column: widest of label and visible cell text, capped.
        let cells: Vec<Vec<crate::model::Cell>> = visible
            .iter()
            .map(|row| {
                self.columns
                    .iter()
                    .map(|col| render_cell(col, row, &self.badges))
                    .collect()
            })
            .collect();

        let mut col_widths: Vec<usize> = self
            .columns
            .iter()
            .map(|c| UnicodeWidthStr::width(c.label.as_str()))
            .collect();
        for row in &cells {
            for (i, cell) in row.iter().enumerate() {
                col_widths[i] = col_widths[i].max(UnicodeWidthStr::width(cell.text.as_str()));
            }
        }
        for width in &mut col_widths {
            *width = (*width).min(MAX_COL_WIDTH);
        }

        let mut lines = Vec::new();

        let header_spans: Vec<Span> = self
            .columns
            .iter()
            .enumerate()
            .flat_map(|(i, col)| {
                let text = Self::pad(&Self::truncate(&col.label, col_widths[i]), col_widths[i]);
                vec![
                    Span::styled(
                        text,
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(" │ "),
                ]
            })
            .collect();
        lines.push(Line::from(header_spans));

        let separator: String = col_widths
            .iter()
            .map(|w| "─".repeat(*w))
            .collect::<Vec<_>>()
            .join("─┼─");
        lines.push(Line::from(Span::styled(
            separator,
            Style::default().fg(Color::DarkGray),
        )));

        for row in &cells {
            let row_spans: Vec<Span> = row
                .iter()
                .enumerate()
                .flat_map(|(i, cell)| {
                    let text = Self::pad(&Self::truncate(&cell.text, col_widths[i]), col_widths[i]);
                    let style = if cell.style == Style::default() {
                        Style::default().fg(Color::White)
                    } else {
                        cell.style
                    };
                    vec![Span::styled(text, style), Span::raw(" │ ")]
                })
                .collect();
            lines.push(Line::from(row_spans));
        }

        lines
    }

    /// Build the footer line with the page controls.
    fn build_controls_line(&self) -> Line<'static> {
        let dim = Style::default().fg(Color::DarkGray);
        let key = Style::default().fg(Color::Yellow);
        let normal = Style::default().fg(Color::White);

        let mut spans = vec![
            Span::styled(format!(" Rows/page: {} ", self.page.rows_per_page()), normal),
            Span::styled("(r)", key),
            Span::raw("   "),
            Span::styled(
                "◂ Prev (p)",
                if self.page.at_first_page() { dim } else { normal },
            ),
            Span::raw("   "),
        ];

        let jump_display = if self.jump_mode {
            format!("{}_", self.page.jump_input)
        } else if self.page.jump_input.is_empty() {
            self.page.current_page().to_string()
        } else {
            self.page.jump_input.clone()
        };
        spans.push(Span::styled(
            format!("page [{}]", jump_display),
            if self.jump_mode {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                normal
            },
        ));
        spans.push(Span::styled(
            format!(" of {} pages ", self.page.total_pages()),
            normal,
        ));
        spans.push(Span::styled("(g)", key));
        spans.push(Span::raw("   "));
        spans.push(Span::styled(
            "Next ▸ (n)",
            if self.page.at_last_page() { dim } else { normal },
        ));

        Line::from(spans)
    }
}

impl Component for OffersTable {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if self.jump_mode {
            let action = match key.code {
                KeyCode::Esc => Some(Action::ExitJumpMode),
                KeyCode::Enter => Some(Action::JumpSubmit),
                KeyCode::Backspace => Some(Action::JumpBackspace),
                // The field is free text; garbage is rejected on submit.
                KeyCode::Char(c) => Some(Action::JumpInput(c)),
                _ => None,
            };
            return Ok(action);
        }

        let action = match key.code {
            KeyCode::Char('n') | KeyCode::Right => Some(Action::NextPage),
            KeyCode::Char('p') | KeyCode::Left => Some(Action::PrevPage),
            KeyCode::Char('r') => Some(Action::CycleRowsPerPage),
            KeyCode::Char('g') => Some(Action::EnterJumpMode),
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::NextPage => self.page.next_page(),
            Action::PrevPage => self.page.prev_page(),
            Action::CycleRowsPerPage => self.page.cycle_rows_per_page(),
            Action::EnterJumpMode => {
                self.jump_mode = true;
                self.page.jump_input.clear();
            }
            Action::ExitJumpMode => {
                self.jump_mode = false;
                self.page.jump_input = self.page.current_page().to_string();
            }
            Action::JumpInput(c) => {
                if self.jump_mode {
                    self.page.jump_input.push(c);
                }
            }
            Action::JumpBackspace => {
                if self.jump_mode {
                    self.page.jump_input.pop();
                }
            }
            Action::JumpSubmit => {
                // Parse failure leaves the page (and the typed text) alone.
                self.page.submit_jump();
                self.jump_mode = false;
            }
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(area);

        let showing = self.page.page_range();
        let title = if self.rows.is_empty() {
            " Offers ".to_string()
        } else {
            format!(
                " Offers {}-{} of {} ",
                showing.start + 1,
                showing.end,
                self.rows.len()
            )
        };

        let table = Paragraph::new(self.build_table_lines()).block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(table, chunks[0]);

        let controls = Paragraph::new(self.build_controls_line())
            .alignment(ratatui::layout::Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
        frame.render_widget(controls, chunks[1]);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent};
    use ratatui::{backend::TestBackend, Terminal};

    fn sample_rows(n: usize) -> Vec<Row> {
        (0..n)
            .map(|i| {
                Row::from([
                    ("offer_code".to_string(), format!("OC{i:03}")),
                    ("ship".to_string(), "Odyssey of the Seas".to_string()),
                    ("next_bonus".to_string(), String::new()),
                ])
            })
            .collect()
    }

    fn table_with(n: usize) -> OffersTable {
        let mut table = OffersTable::new(Column::offer_columns(), BadgeMaps::default());
        table.set_rows(sample_rows(n));
        table
    }

    fn press(table: &mut OffersTable, code: KeyCode) {
        if let Some(action) = table.handle_key_event(KeyEvent::from(code)).unwrap() {
            table.update(action).unwrap();
        }
    }

    #[test]
    fn test_page_slice_identity() {
        let mut table = table_with(25);
        assert_eq!(table.current_page_rows().len(), 10);
        press(&mut table, KeyCode::Char('n'));
        press(&mut table, KeyCode::Char('n'));
        // last page holds the remainder
        assert_eq!(table.page.current_page(), 3);
        assert_eq!(table.current_page_rows().len(), 5);
        assert_eq!(table.current_page_rows()[0]["offer_code"], "OC020");
    }

    #[test]
    fn test_prev_next_saturate_at_boundaries() {
        let mut table = table_with(25);
        press(&mut table, KeyCode::Char('p'));
        assert_eq!(table.page.current_page(), 1);
        for _ in 0..10 {
            press(&mut table, KeyCode::Char('n'));
        }
        assert_eq!(table.page.current_page(), 3);
    }

    #[test]
    fn test_rows_per_page_cycle_resets_page() {
        let mut table = table_with(100);
        press(&mut table, KeyCode::Char('n'));
        assert_eq!(table.page.current_page(), 2);
        press(&mut table, KeyCode::Char('r'));
        assert_eq!(table.page.rows_per_page(), 20);
        assert_eq!(table.page.current_page(), 1);
        assert_eq!(table.current_page_rows().len(), 20);
    }

    #[test]
    fn test_jump_entry_clamps() {
        let mut table = table_with(25); // 3 pages
        press(&mut table, KeyCode::Char('g'));
        assert!(table.jump_mode);
        press(&mut table, KeyCode::Char('5'));
        press(&mut table, KeyCode::Enter);
        assert!(!table.jump_mode);
        assert_eq!(table.page.current_page(), 3);
        assert_eq!(table.page.jump_input, "3");
    }

    #[test]
    fn test_jump_entry_rejects_garbage_silently() {
        let mut table = table_with(25);
        press(&mut table, KeyCode::Char('n'));
        press(&mut table, KeyCode::Char('g'));
        for c in "abc".chars() {
            press(&mut table, KeyCode::Char(c));
        }
        press(&mut table, KeyCode::Enter);
        assert_eq!(table.page.current_page(), 2);
        // the typed text survives until the next page change
        assert_eq!(table.page.jump_input, "abc");
        press(&mut table, KeyCode::Char('n'));
        assert_eq!(table.page.jump_input, "3");
    }

    #[test]
    fn test_jump_escape_abandons_entry() {
        let mut table = table_with(25);
        press(&mut table, KeyCode::Char('g'));
        press(&mut table, KeyCode::Char('9'));
        press(&mut table, KeyCode::Esc);
        assert!(!table.jump_mode);
        assert_eq!(table.page.current_page(), 1);
        assert_eq!(table.page.jump_input, "1");
    }

    #[test]
    fn test_paging_keys_ignored_while_jumping() {
        let mut table = table_with(50);
        press(&mut table, KeyCode::Char('g'));
        // 'n' is jump-field input now, not a page change
        press(&mut table, KeyCode::Char('n'));
        assert_eq!(table.page.current_page(), 1);
        assert_eq!(table.page.jump_input, "n");
    }

    #[test]
    fn test_empty_data_draws_degenerate_state() {
        let mut table = table_with(0);
        assert_eq!(table.page.total_pages(), 0);
        assert!(table.current_page_rows().is_empty());

        let backend = TestBackend::new(100, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                table.draw(frame, area).unwrap();
            })
            .unwrap();
    }

    #[test]
    fn test_shrinking_rows_clamps_page() {
        let mut table = table_with(100);
        press(&mut table, KeyCode::Char('g'));
        press(&mut table, KeyCode::Char('9'));
        press(&mut table, KeyCode::Enter);
        assert_eq!(table.page.current_page(), 9);
        table.set_rows(sample_rows(15));
        assert_eq!(table.page.current_page(), 2);
        assert_eq!(table.current_page_rows().len(), 5);
    }
}
