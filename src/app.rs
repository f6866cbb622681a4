//! Root application component
//!
//! The App is the parent that owns the full offer dataset and the filter
//! values. Child components never mutate shared state: the filter panel
//! and facet dropdown emit complete `FilterValues` objects, the table
//! emits paging actions, and the App routes everything. App implements
//! Component itself, acting as the root that delegates event handling and
//! rendering.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    calculate_main_layout, FacetSelect, FilterPanel, HelpDialog, OffersTable, QuitDialog,
};
use crate::config::Config;
use crate::model::{BadgeMaps, Column, FacetCatalog, FilterValues, Modal, ModalStack, Offer, Row};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Main application state - coordinates between components
pub struct App {
    /// Full offer dataset, as loaded
    pub offers: Vec<Offer>,

    /// Current filter values (the single source of truth)
    pub filters: FilterValues,

    /// Available options per facet, derived from the dataset
    pub catalog: FacetCatalog,

    /// Modal overlay stack
    pub modals: ModalStack,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Fatal startup error to display instead of the dashboard
    pub error: Option<String>,

    /// Transient status message shown under the table
    pub status_message: Option<String>,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub table: OffersTable,
    pub filter_panel: FilterPanel,
    pub facet_select: FacetSelect,
    pub help_dialog: HelpDialog,
    pub quit_dialog: QuitDialog,
}

impl App {
    /// Create the app around a loaded dataset.
    pub fn new(offers: Vec<Offer>, config: &Config) -> App {
        let badges = BadgeMaps {
            ship_class: config.ship_class_map.clone(),
            class_color: config.class_color_map.clone(),
        };
        let mut table = OffersTable::new(Column::offer_columns(), badges);
        table.set_rows(offers.iter().map(Offer::to_row).collect());

        let catalog = FacetCatalog::from_offers(&offers);

        App {
            offers,
            filters: FilterValues::default(),
            catalog,
            modals: ModalStack::new(),
            should_quit: false,
            error: None,
            status_message: None,
            table,
            filter_panel: FilterPanel::new(),
            facet_select: FacetSelect::new(),
            help_dialog: HelpDialog,
            quit_dialog: QuitDialog,
        }
    }

    /// Create an app that only shows a startup error.
    pub fn with_error(message: String, config: &Config) -> App {
        let mut app = Self::new(Vec::new(), config);
        app.error = Some(message);
        app
    }

    /// Replace the filter state and re-derive the visible rows.
    ///
    /// This is the only place filters change, whether the new value came
    /// from a facet toggle, a date keystroke, or a clear.
    fn apply_filters(&mut self, filters: FilterValues) {
        self.filters = filters;

        let rows: Vec<Row> = self
            .offers
            .iter()
            .filter(|offer| self.filters.matches(offer))
            .map(Offer::to_row)
            .collect();

        tracing::debug!(
            matched = rows.len(),
            total = self.offers.len(),
            active = self.filters.active_count(),
            "filters applied"
        );
        self.status_message = Some(format!(
            "{} of {} offers match",
            rows.len(),
            self.offers.len()
        ));
        self.table.set_rows(rows);

        // Echo the new values down so open modals reflect them.
        self.filter_panel.set_filters(self.filters.clone());
        self.facet_select.set_filters(self.filters.clone());
    }

    fn draw_error_screen(&self, frame: &mut Frame, area: Rect) {
        let message = self.error.as_deref().unwrap_or("Unknown error");
        let mut lines = vec![Line::from("")];
        for line in message.lines() {
            lines.push(Line::from(Span::styled(
                line.to_string(),
                Style::default().fg(Color::Red),
            )));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Press q to quit",
            Style::default().fg(Color::DarkGray),
        )));

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Error ")
                .border_style(Style::default().fg(Color::Red)),
        );
        frame.render_widget(paragraph, area);
    }

    fn draw_header(&self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(
            format!(" {} offers loaded", self.offers.len()),
            Style::default().fg(Color::White),
        )];
        if !self.filters.is_empty() {
            spans.push(Span::raw("  •  "));
            spans.push(Span::styled(
                format!(
                    "{} match, {} filters active",
                    self.table.row_count(),
                    self.filters.active_count()
                ),
                Style::default().fg(Color::Yellow),
            ));
        }

        let header = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Cruise Offers ")
                .title_style(
                    Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                )
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(header, area);
    }

    fn draw_help_bar(&self, frame: &mut Frame, area: Rect) {
        let key = Style::default().fg(Color::Yellow);
        let help = Paragraph::new(Line::from(vec![
            Span::styled(" n/p ", key),
            Span::raw("Page  "),
            Span::styled(" r ", key),
            Span::raw("Rows/page  "),
            Span::styled(" g ", key),
            Span::raw("Jump  "),
            Span::styled(" f ", key),
            Span::raw("Filters  "),
            Span::styled(" c ", key),
            Span::raw("Clear  "),
            Span::styled(" ? ", key),
            Span::raw("Help  "),
            Span::styled(" q ", key),
            Span::raw("Quit"),
        ]))
        .alignment(ratatui::layout::Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(help, area);
    }
}

impl Component for App {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        // Ctrl-C always quits, whatever is open.
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(Some(Action::ForceQuit));
        }

        if self.error.is_some() {
            return Ok(match key.code {
                KeyCode::Char('q') | KeyCode::Esc => Some(Action::ForceQuit),
                _ => None,
            });
        }

        // Only the top modal sees input.
        if let Some(modal) = self.modals.top() {
            return match modal {
                Modal::FilterPanel => self.filter_panel.handle_key_event(key),
                Modal::FacetSelect(_) => self.facet_select.handle_key_event(key),
                Modal::Help => self.help_dialog.handle_key_event(key),
                Modal::QuitConfirm => self.quit_dialog.handle_key_event(key),
            };
        }

        // The table gets first refusal (it owns jump-entry mode), then the
        // global keys.
        if let Some(action) = self.table.handle_key_event(key)? {
            return Ok(Some(action));
        }

        let action = match key.code {
            KeyCode::Char('q') => Some(Action::OpenQuitDialog),
            KeyCode::Char('f') => Some(Action::OpenFilterPanel),
            KeyCode::Char('c') => Some(Action::ClearFilters),
            KeyCode::Char('?') => Some(Action::OpenHelp),
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::ForceQuit => {
                self.should_quit = true;
            }
            Action::Tick | Action::Resize(_, _) => {}

            Action::OpenQuitDialog => self.modals.push(Modal::QuitConfirm),
            Action::OpenHelp => self.modals.push(Modal::Help),
            Action::CloseModal => {
                self.modals.pop();
            }
            Action::ModalUp | Action::ModalDown => {}

            Action::OpenFilterPanel => {
                self.filter_panel.open(self.filters.clone());
                self.modals.push(Modal::FilterPanel);
            }
            Action::OpenFacetSelect(facet) => {
                self.facet_select.open(
                    facet,
                    self.catalog.options(facet).to_vec(),
                    self.filters.clone(),
                );
                self.modals.push(Modal::FacetSelect(facet));
            }
            Action::ApplyFilters(filters) => {
                self.apply_filters(filters);
            }
            Action::ClearFilters => {
                self.apply_filters(FilterValues::default());
                self.status_message = Some("Filters cleared".to_string());
            }

            // Paging and jump entry belong to the table.
            Action::NextPage
            | Action::PrevPage
            | Action::CycleRowsPerPage
            | Action::EnterJumpMode
            | Action::ExitJumpMode
            | Action::JumpInput(_)
            | Action::JumpBackspace
            | Action::JumpSubmit => {
                return self.table.update(action);
            }
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        if self.error.is_some() {
            self.draw_error_screen(frame, area);
            return Ok(());
        }

        let layout = calculate_main_layout(area, self.status_message.is_some());

        self.draw_header(frame, layout.header);
        self.table.draw(frame, layout.table)?;

        if let (Some(status_area), Some(message)) = (layout.status, &self.status_message) {
            let status = Paragraph::new(Line::from(Span::styled(
                format!(" {}", message),
                Style::default().fg(Color::Yellow),
            )));
            frame.render_widget(status, status_area);
        }

        self.draw_help_bar(frame, layout.help);

        // Modals render bottom to top over the dashboard.
        for modal in self.modals.iter().collect::<Vec<_>>() {
            match modal {
                Modal::FilterPanel => self.filter_panel.draw(frame, area)?,
                Modal::FacetSelect(_) => self.facet_select.draw(frame, area)?,
                Modal::Help => self.help_dialog.draw(frame, area)?,
                Modal::QuitConfirm => self.quit_dialog.draw(frame, area)?,
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replicate the main loop's action chaining for one key press.
    fn press(app: &mut App, code: KeyCode) {
        let mut action = app.handle_key_event(KeyEvent::from(code)).unwrap();
        while let Some(a) = action {
            action = app.update(a).unwrap();
        }
    }

    fn sample_offers() -> Vec<Offer> {
        let mut offers = Vec::new();
        for i in 0..20 {
            offers.push(Offer {
                offer_code: format!("A{i:02}"),
                ship: "Odyssey of the Seas".to_string(),
                departure_port: "Miami, FL".to_string(),
                sail_date: "2026-09-14".to_string(),
                itinerary: "7 Night Western Caribbean".to_string(),
                stateroom_type: "Balcony".to_string(),
                offer_type: "Instant Reward".to_string(),
                next_cruise_bonus: String::new(),
            });
        }
        for i in 0..5 {
            offers.push(Offer {
                offer_code: format!("C{i:02}"),
                ship: "Serenade of the Seas".to_string(),
                departure_port: "Tampa, FL".to_string(),
                sail_date: "2026-11-01".to_string(),
                itinerary: "4 Night Bahamas".to_string(),
                stateroom_type: "Interior".to_string(),
                offer_type: "Annual Program".to_string(),
                next_cruise_bonus: "$50 OBC".to_string(),
            });
        }
        offers
    }

    fn app() -> App {
        App::new(sample_offers(), &Config::default())
    }

    #[test]
    fn test_startup_shows_all_offers() {
        let app = app();
        assert_eq!(app.table.row_count(), 25);
        assert_eq!(app.table.page.total_pages(), 3);
        assert!(app.filters.is_empty());
    }

    #[test]
    fn test_filter_flow_through_facet_dropdown() {
        let mut app = app();
        press(&mut app, KeyCode::Char('f'));
        assert_eq!(app.modals.top(), Some(Modal::FilterPanel));

        // open the Ship Name dropdown and toggle the second option
        press(&mut app, KeyCode::Enter);
        assert!(matches!(app.modals.top(), Some(Modal::FacetSelect(_))));
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char(' '));

        // catalog sorts ships; index 1 is Serenade
        assert_eq!(app.filters.ships.len(), 1);
        assert_eq!(app.filters.ships[0].value, "Serenade of the Seas");
        assert_eq!(app.table.row_count(), 5);
        assert_eq!(app.table.page.total_pages(), 1);
    }

    #[test]
    fn test_clear_restores_full_dataset() {
        let mut app = app();
        press(&mut app, KeyCode::Char('f'));
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char(' '));
        assert!(app.table.row_count() < 25);

        // back out of both modals, then clear from the dashboard
        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Esc);
        assert!(app.modals.is_empty());
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.table.row_count(), 25);
        assert!(app.filters.is_empty());
    }

    #[test]
    fn test_filter_shrink_clamps_table_page() {
        let mut app = app();
        press(&mut app, KeyCode::Char('n'));
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.table.page.current_page(), 3);

        press(&mut app, KeyCode::Char('f'));
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char(' '));
        // 5 matching rows -> 1 page; the table may not be out of range
        assert_eq!(app.table.page.current_page(), 1);
    }

    #[test]
    fn test_jump_keys_reach_the_table() {
        let mut app = app();
        press(&mut app, KeyCode::Char('g'));
        press(&mut app, KeyCode::Char('5'));
        press(&mut app, KeyCode::Enter);
        // clamped to the last of 3 pages
        assert_eq!(app.table.page.current_page(), 3);
    }

    #[test]
    fn test_quit_dialog_roundtrip() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert_eq!(app.modals.top(), Some(Modal::QuitConfirm));
        press(&mut app, KeyCode::Char('n'));
        assert!(app.modals.is_empty());
        assert!(!app.should_quit);
        press(&mut app, KeyCode::Char('q'));
        press(&mut app, KeyCode::Char('y'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_c_force_quits_even_inside_modal() {
        let mut app = app();
        press(&mut app, KeyCode::Char('f'));
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let mut action = app.handle_key_event(key).unwrap();
        while let Some(a) = action {
            action = app.update(a).unwrap();
        }
        assert!(app.should_quit);
    }

    #[test]
    fn test_error_app_only_quits() {
        let mut app = App::with_error("boom".to_string(), &Config::default());
        press(&mut app, KeyCode::Char('f'));
        assert!(app.modals.is_empty());
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_clear_emitted_from_panel_keeps_panel_open() {
        let mut app = app();
        press(&mut app, KeyCode::Char('f'));
        // navigate to the Clear Filters entry (last of 9)
        for _ in 0..8 {
            press(&mut app, KeyCode::Down);
        }
        press(&mut app, KeyCode::Enter);
        assert!(app.filters.is_empty());
        assert_eq!(app.modals.top(), Some(Modal::FilterPanel));
    }
}
