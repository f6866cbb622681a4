//! Offer record model
//!
//! One row of the offers listing, as produced by the PDF extraction
//! pipeline. Field names on the wire are the pipeline's normalized column
//! headers ("Offer Code", "Ship", ...), identical in the JSON dump and the
//! CSV export.

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use super::columns::Row;

/// Sail-date formats seen in the source PDFs.
const SAIL_DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%m/%d/%Y", "%d-%b-%Y", "%b %d, %Y"];

/// A single cruise offer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offer {
    #[serde(rename = "Offer Code", default)]
    pub offer_code: String,
    #[serde(rename = "Ship", default)]
    pub ship: String,
    #[serde(rename = "Departure Port", default)]
    pub departure_port: String,
    #[serde(rename = "Sail Date", default)]
    pub sail_date: String,
    #[serde(rename = "Itinerary", default)]
    pub itinerary: String,
    #[serde(rename = "Stateroom Type", default)]
    pub stateroom_type: String,
    #[serde(rename = "Offer Type", default)]
    pub offer_type: String,
    #[serde(rename = "Next Cruise Bonus", default)]
    pub next_cruise_bonus: String,
}

fn itinerary_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*(\d+)[\s-]*[Nn]ight[s]?\s*(.*)$").unwrap())
}

impl Offer {
    /// Number of nights, parsed from the itinerary ("7 Night Western
    /// Caribbean" -> 7). None when the itinerary doesn't lead with one.
    pub fn nights(&self) -> Option<u32> {
        itinerary_regex()
            .captures(&self.itinerary)
            .and_then(|caps| caps[1].parse().ok())
    }

    /// Nights as a display/filter value; empty when unknown.
    pub fn nights_label(&self) -> String {
        self.nights().map(|n| n.to_string()).unwrap_or_default()
    }

    /// Destination portion of the itinerary, with any leading "N Night"
    /// prefix stripped. Falls back to the whole itinerary.
    pub fn destination(&self) -> String {
        match itinerary_regex().captures(&self.itinerary) {
            Some(caps) => {
                let rest = caps[2].trim();
                if rest.is_empty() {
                    self.itinerary.trim().to_string()
                } else {
                    rest.to_string()
                }
            }
            None => self.itinerary.trim().to_string(),
        }
    }

    /// Sail date parsed against the formats the PDFs use.
    pub fn parsed_sail_date(&self) -> Option<NaiveDate> {
        let raw = self.sail_date.trim();
        SAIL_DATE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
    }

    /// Flatten into a display row keyed by the table's column keys.
    pub fn to_row(&self) -> Row {
        Row::from([
            ("offer_code".to_string(), self.offer_code.clone()),
            ("ship".to_string(), self.ship.clone()),
            ("port".to_string(), self.departure_port.clone()),
            ("sail_date".to_string(), self.sail_date.clone()),
            ("itinerary".to_string(), self.itinerary.clone()),
            ("stateroom".to_string(), self.stateroom_type.clone()),
            ("offer_type".to_string(), self.offer_type.clone()),
            ("next_bonus".to_string(), self.next_cruise_bonus.clone()),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offer_with_itinerary(itinerary: &str) -> Offer {
        Offer {
            itinerary: itinerary.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_nights_parsed_from_itinerary() {
        assert_eq!(offer_with_itinerary("7 Night Western Caribbean").nights(), Some(7));
        assert_eq!(offer_with_itinerary("3-Night Bahamas").nights(), Some(3));
        assert_eq!(offer_with_itinerary("12 Nights Transatlantic").nights(), Some(12));
        assert_eq!(offer_with_itinerary("Western Caribbean").nights(), None);
        assert_eq!(offer_with_itinerary("").nights(), None);
    }

    #[test]
    fn test_destination_strips_nights_prefix() {
        assert_eq!(
            offer_with_itinerary("7 Night Western Caribbean").destination(),
            "Western Caribbean"
        );
        assert_eq!(offer_with_itinerary("Alaska Glacier").destination(), "Alaska Glacier");
        // A bare "4 Night" keeps the full text rather than going blank
        assert_eq!(offer_with_itinerary("4 Night").destination(), "4 Night");
    }

    #[test]
    fn test_sail_date_formats() {
        let mut offer = Offer::default();
        for raw in ["2026-09-14", "09/14/2026", "14-Sep-2026", "Sep 14, 2026"] {
            offer.sail_date = raw.to_string();
            assert_eq!(
                offer.parsed_sail_date(),
                NaiveDate::from_ymd_opt(2026, 9, 14),
                "failed for {raw}"
            );
        }
        offer.sail_date = "sometime soon".to_string();
        assert_eq!(offer.parsed_sail_date(), None);
    }

    #[test]
    fn test_deserialize_pipeline_record() {
        let json = r#"{
            "Offer Code": "26A01",
            "Ship": "Odyssey of the Seas",
            "Departure Port": "Fort Lauderdale, FL",
            "Sail Date": "2026-09-14",
            "Itinerary": "7 Night Western Caribbean",
            "Stateroom Type": "Balcony",
            "Offer Type": "Instant Reward",
            "Next Cruise Bonus": ""
        }"#;
        let offer: Offer = serde_json::from_str(json).unwrap();
        assert_eq!(offer.offer_code, "26A01");
        assert_eq!(offer.ship, "Odyssey of the Seas");
        assert_eq!(offer.nights(), Some(7));
        assert_eq!(offer.destination(), "Western Caribbean");
    }

    #[test]
    fn test_to_row_keys() {
        let offer: Offer = Offer {
            offer_code: "X1".into(),
            ship: "Wonder of the Seas".into(),
            next_cruise_bonus: "".into(),
            ..Default::default()
        };
        let row = offer.to_row();
        assert_eq!(row["offer_code"], "X1");
        assert_eq!(row["ship"], "Wonder of the Seas");
        assert_eq!(row["next_bonus"], "");
    }
}
