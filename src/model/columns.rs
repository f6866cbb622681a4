//! Column descriptors and cell rendering rules
//!
//! Each column carries a declarative renderer instead of the table matching
//! on magic column keys. Badge resolution (ship -> class -> color) lives
//! here so it can be tested without a frame.

use ratatui::style::{Color, Modifier, Style};
use std::collections::HashMap;

/// An opaque display row: column key -> display value.
pub type Row = HashMap<String, String>;

/// Glyph substituted for empty/missing cell values.
pub const PLACEHOLDER: &str = "—";

/// Label used when a ship has no class mapping.
pub const UNKNOWN_CLASS: &str = "Unknown Class";

/// How a column turns a row into a cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellRenderer {
    /// Raw cell value, unmodified (missing key renders the placeholder).
    Text,
    /// Placeholder glyph when the value is empty or missing.
    PlaceholderIfEmpty,
    /// Ship-class badge derived from another column's value.
    ShipClassBadge { source_key: String },
}

/// One table column: row key, header label, and rendering rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub key: String,
    pub label: String,
    pub renderer: CellRenderer,
}

impl Column {
    pub fn text(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            renderer: CellRenderer::Text,
        }
    }

    pub fn placeholder_if_empty(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            renderer: CellRenderer::PlaceholderIfEmpty,
        }
    }

    pub fn ship_class_badge(key: &str, label: &str, source_key: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            renderer: CellRenderer::ShipClassBadge {
                source_key: source_key.to_string(),
            },
        }
    }

    /// Columns for a plain string-keyed table: each header is both key and
    /// label, every cell rendered as raw text. This is the flat-headers
    /// calling convention expressed through the same contract as the
    /// offers listing.
    pub fn from_headers(headers: &[String]) -> Vec<Column> {
        headers.iter().map(|h| Column::text(h, h)).collect()
    }

    /// Default column set for the offers listing.
    pub fn offer_columns() -> Vec<Column> {
        vec![
            Column::text("offer_code", "Offer Code"),
            Column::text("ship", "Ship"),
            Column::ship_class_badge("class", "Class", "ship"),
            Column::text("port", "Departure Port"),
            Column::text("sail_date", "Sail Date"),
            Column::text("itinerary", "Itinerary"),
            Column::text("stateroom", "Stateroom Type"),
            Column::text("offer_type", "Offer Type"),
            Column::placeholder_if_empty("next_bonus", "Next Cruise Bonus"),
        ]
    }
}

/// Lookup tables backing the ship-class badge renderer.
#[derive(Debug, Clone, Default)]
pub struct BadgeMaps {
    /// Ship name (or a distinctive fragment of it) -> class label.
    pub ship_class: HashMap<String, String>,
    /// Class label -> color name understood by ratatui.
    pub class_color: HashMap<String, String>,
}

impl BadgeMaps {
    /// Resolve a ship name to its class label.
    ///
    /// Map keys may be fragments ("Odyssey" matches "Odyssey of the Seas");
    /// the longest matching key wins. Misses fall back to
    /// [`UNKNOWN_CLASS`].
    pub fn class_for(&self, ship: &str) -> String {
        if let Some(class) = self.ship_class.get(ship) {
            return class.clone();
        }
        self.ship_class
            .iter()
            .filter(|(key, _)| !key.is_empty() && ship.contains(key.as_str()))
            .max_by_key(|(key, _)| key.len())
            .map(|(_, class)| class.clone())
            .unwrap_or_else(|| UNKNOWN_CLASS.to_string())
    }

    /// Badge style for a class label; misses fall back to a dim badge.
    pub fn style_for(&self, class: &str) -> Style {
        let color = self
            .class_color
            .get(class)
            .and_then(|name| name.parse::<Color>().ok());
        match color {
            Some(color) => Style::default().fg(color).add_modifier(Modifier::BOLD),
            None => Style::default().fg(Color::DarkGray),
        }
    }
}

/// A rendered cell: display text plus style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub text: String,
    pub style: Style,
}

impl Cell {
    fn plain(text: String) -> Self {
        Self {
            text,
            style: Style::default(),
        }
    }
}

/// Apply a column's renderer to a row.
pub fn render_cell(column: &Column, row: &Row, badges: &BadgeMaps) -> Cell {
    let value = row.get(&column.key).map(String::as_str).unwrap_or("");
    match &column.renderer {
        CellRenderer::Text => {
            if value.is_empty() {
                Cell::plain(PLACEHOLDER.to_string())
            } else {
                Cell::plain(value.to_string())
            }
        }
        CellRenderer::PlaceholderIfEmpty => {
            if value.trim().is_empty() {
                Cell::plain(PLACEHOLDER.to_string())
            } else {
                Cell::plain(value.to_string())
            }
        }
        CellRenderer::ShipClassBadge { source_key } => {
            let ship = row.get(source_key).map(String::as_str).unwrap_or("");
            let class = badges.class_for(ship);
            let style = badges.style_for(&class);
            Cell { text: class, style }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn badges() -> BadgeMaps {
        BadgeMaps {
            ship_class: HashMap::from([("Odyssey".to_string(), "Royal".to_string())]),
            class_color: HashMap::from([("Royal".to_string(), "blue".to_string())]),
        }
    }

    fn row(pairs: &[(&str, &str)]) -> Row {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_badge_fragment_lookup_and_color() {
        let column = Column::ship_class_badge("class", "Class", "ship");
        let cell = render_cell(&column, &row(&[("ship", "Odyssey of the Seas")]), &badges());
        assert_eq!(cell.text, "Royal");
        assert_eq!(
            cell.style,
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)
        );
    }

    #[test]
    fn test_badge_unknown_ship_falls_back() {
        let column = Column::ship_class_badge("class", "Class", "ship");
        let cell = render_cell(&column, &row(&[("ship", "Mystery Ship")]), &badges());
        assert_eq!(cell.text, UNKNOWN_CLASS);
        assert_eq!(cell.style, Style::default().fg(Color::DarkGray));
    }

    #[test]
    fn test_badge_unmapped_class_color_falls_back() {
        let mut maps = badges();
        maps.class_color.clear();
        assert_eq!(maps.style_for("Royal"), Style::default().fg(Color::DarkGray));
    }

    #[test]
    fn test_longest_fragment_wins() {
        let maps = BadgeMaps {
            ship_class: HashMap::from([
                ("Star".to_string(), "Icon".to_string()),
                ("Star of the North".to_string(), "Vision".to_string()),
            ]),
            class_color: HashMap::new(),
        };
        assert_eq!(maps.class_for("Star of the North II"), "Vision");
    }

    #[test]
    fn test_placeholder_renderer() {
        let column = Column::placeholder_if_empty("next_bonus", "Next Cruise Bonus");
        let maps = BadgeMaps::default();
        assert_eq!(
            render_cell(&column, &row(&[("next_bonus", "")]), &maps).text,
            PLACEHOLDER
        );
        assert_eq!(
            render_cell(&column, &row(&[]), &maps).text,
            PLACEHOLDER
        );
        assert_eq!(
            render_cell(&column, &row(&[("next_bonus", "$100 OBC")]), &maps).text,
            "$100 OBC"
        );
    }

    #[test]
    fn test_from_headers_builds_text_columns() {
        let headers = vec!["Ship".to_string(), "Sail Date".to_string()];
        let columns = Column::from_headers(&headers);
        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0].key, "Ship");
        assert_eq!(columns[0].label, "Ship");
        assert_eq!(columns[0].renderer, CellRenderer::Text);
    }

    #[test]
    fn test_text_renderer_passes_value_through() {
        let column = Column::text("ship", "Ship");
        let maps = BadgeMaps::default();
        let cell = render_cell(&column, &row(&[("ship", "Brilliance of the Seas")]), &maps);
        assert_eq!(cell.text, "Brilliance of the Seas");
        assert_eq!(cell.style, Style::default());
    }
}
