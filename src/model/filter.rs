//! Filter state - facets, date range, and offer matching
//!
//! `FilterValues` is the complete filter object the filter panel emits on
//! every change: one field replaced, every sibling untouched. The panel
//! never mutates shared state; the owning `App` receives the new value and
//! re-derives the visible rows.

use chrono::NaiveDate;
use std::collections::BTreeSet;

use super::offer::Offer;

/// One selectable filter choice: identifier plus display label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetOption {
    pub value: String,
    pub label: String,
}

impl FacetOption {
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
            label: value.to_string(),
        }
    }
}

/// The six filterable dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facet {
    Ships,
    Ports,
    Staterooms,
    Offers,
    Nights,
    Destinations,
}

impl Facet {
    pub fn all() -> [Facet; 6] {
        [
            Facet::Ships,
            Facet::Ports,
            Facet::Staterooms,
            Facet::Offers,
            Facet::Nights,
            Facet::Destinations,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Facet::Ships => "Ship Name",
            Facet::Ports => "Departure Port",
            Facet::Staterooms => "Stateroom Type",
            Facet::Offers => "Offer Type",
            Facet::Nights => "Nights",
            Facet::Destinations => "Destination",
        }
    }
}

/// Sail-date bounds; either side may be absent. Values are free text and
/// are never validated here (end before start is accepted and simply
/// matches nothing).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// The complete filter object: six facet selections plus the date range.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterValues {
    pub ships: Vec<FacetOption>,
    pub ports: Vec<FacetOption>,
    pub staterooms: Vec<FacetOption>,
    pub offers: Vec<FacetOption>,
    pub nights: Vec<FacetOption>,
    pub destinations: Vec<FacetOption>,
    pub sail_date_range: DateRange,
}

impl FilterValues {
    pub fn facet(&self, facet: Facet) -> &[FacetOption] {
        match facet {
            Facet::Ships => &self.ships,
            Facet::Ports => &self.ports,
            Facet::Staterooms => &self.staterooms,
            Facet::Offers => &self.offers,
            Facet::Nights => &self.nights,
            Facet::Destinations => &self.destinations,
        }
    }

    /// New filter object with one facet replaced and all other fields
    /// carried over unchanged.
    pub fn with_facet(&self, facet: Facet, selected: Vec<FacetOption>) -> FilterValues {
        let mut next = self.clone();
        match facet {
            Facet::Ships => next.ships = selected,
            Facet::Ports => next.ports = selected,
            Facet::Staterooms => next.staterooms = selected,
            Facet::Offers => next.offers = selected,
            Facet::Nights => next.nights = selected,
            Facet::Destinations => next.destinations = selected,
        }
        next
    }

    /// New filter object with the range start replaced.
    pub fn with_start_date(&self, start: Option<String>) -> FilterValues {
        let mut next = self.clone();
        next.sail_date_range.start_date = start;
        next
    }

    /// New filter object with the range end replaced.
    pub fn with_end_date(&self, end: Option<String>) -> FilterValues {
        let mut next = self.clone();
        next.sail_date_range.end_date = end;
        next
    }

    /// Number of fields with an active constraint, for the header summary.
    pub fn active_count(&self) -> usize {
        let facets = Facet::all()
            .iter()
            .filter(|f| !self.facet(**f).is_empty())
            .count();
        let dates = [
            &self.sail_date_range.start_date,
            &self.sail_date_range.end_date,
        ]
        .iter()
        .filter(|d| d.is_some())
        .count();
        facets + dates
    }

    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }

    /// Whether an offer passes every active constraint.
    ///
    /// Empty facet selections constrain nothing. The date range is
    /// inclusive on both ends; an offer whose sail date can't be parsed
    /// never matches a bounded range. Unparseable bounds are treated as
    /// unbounded (the panel forwards any text the user typed).
    pub fn matches(&self, offer: &Offer) -> bool {
        let facet_ok = |selected: &[FacetOption], value: &str| {
            selected.is_empty() || selected.iter().any(|opt| opt.value == value)
        };

        if !facet_ok(&self.ships, &offer.ship)
            || !facet_ok(&self.ports, &offer.departure_port)
            || !facet_ok(&self.staterooms, &offer.stateroom_type)
            || !facet_ok(&self.offers, &offer.offer_type)
            || !facet_ok(&self.nights, &offer.nights_label())
            || !facet_ok(&self.destinations, &offer.destination())
        {
            return false;
        }

        let start = parse_bound(&self.sail_date_range.start_date);
        let end = parse_bound(&self.sail_date_range.end_date);
        if start.is_none() && end.is_none() {
            return true;
        }
        let Some(date) = offer.parsed_sail_date() else {
            return false;
        };
        if let Some(start) = start {
            if date < start {
                return false;
            }
        }
        if let Some(end) = end {
            if date > end {
                return false;
            }
        }
        true
    }
}

fn parse_bound(bound: &Option<String>) -> Option<NaiveDate> {
    bound
        .as_deref()
        .and_then(|raw| NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok())
}

/// Available options per facet, derived from the loaded offers.
#[derive(Debug, Clone, Default)]
pub struct FacetCatalog {
    pub ships: Vec<FacetOption>,
    pub ports: Vec<FacetOption>,
    pub staterooms: Vec<FacetOption>,
    pub offers: Vec<FacetOption>,
    pub nights: Vec<FacetOption>,
    pub destinations: Vec<FacetOption>,
}

impl FacetCatalog {
    /// Collect sorted, de-duplicated options for every facet. Nights sort
    /// numerically; everything else lexicographically.
    pub fn from_offers(offers: &[Offer]) -> FacetCatalog {
        let collect = |extract: &dyn Fn(&Offer) -> String| -> Vec<FacetOption> {
            offers
                .iter()
                .map(extract)
                .filter(|v| !v.is_empty())
                .collect::<BTreeSet<_>>()
                .into_iter()
                .map(|v| FacetOption::new(&v))
                .collect()
        };

        let nights: BTreeSet<u32> = offers.iter().filter_map(Offer::nights).collect();

        FacetCatalog {
            ships: collect(&|o| o.ship.clone()),
            ports: collect(&|o| o.departure_port.clone()),
            staterooms: collect(&|o| o.stateroom_type.clone()),
            offers: collect(&|o| o.offer_type.clone()),
            nights: nights
                .into_iter()
                .map(|n| FacetOption::new(&n.to_string()))
                .collect(),
            destinations: collect(&|o| o.destination()),
        }
    }

    pub fn options(&self, facet: Facet) -> &[FacetOption] {
        match facet {
            Facet::Ships => &self.ships,
            Facet::Ports => &self.ports,
            Facet::Staterooms => &self.staterooms,
            Facet::Offers => &self.offers,
            Facet::Nights => &self.nights,
            Facet::Destinations => &self.destinations,
        }
    }
}
