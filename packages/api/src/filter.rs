//! Client-side price filtering of the place listing.

use crate::models::Place;

/// Value the price control uses for "no filter".
pub const ALL: &str = "all";

/// Thresholds offered by the price control, besides [`ALL`].
pub const PRICE_OPTIONS: [u32; 3] = [10, 50, 100];

/// Maximum nightly price filter.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum PriceFilter {
    #[default]
    All,
    AtMost(f64),
}

impl PriceFilter {
    /// Parse the price control's value. Anything that is not a number shows
    /// every place.
    pub fn from_control_value(value: &str) -> Self {
        let value = value.trim();
        if value.eq_ignore_ascii_case(ALL) {
            return Self::All;
        }
        match value.parse::<f64>() {
            Ok(threshold) if threshold.is_finite() => Self::AtMost(threshold),
            _ => {
                tracing::warn!("Unrecognized price filter {:?}, showing all places", value);
                Self::All
            }
        }
    }

    /// The control value this filter corresponds to.
    pub fn control_value(&self) -> String {
        match self {
            Self::All => ALL.to_string(),
            Self::AtMost(threshold) => threshold.to_string(),
        }
    }

    pub fn matches(&self, price: f64) -> bool {
        match self {
            Self::All => true,
            Self::AtMost(threshold) => price <= *threshold,
        }
    }

    /// Places that pass the filter, in their original order.
    pub fn apply<'a>(&self, places: &'a [Place]) -> Vec<&'a Place> {
        places
            .iter()
            .filter(|p| self.matches(p.nightly_price()))
            .collect()
    }
}
