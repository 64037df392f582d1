use std::collections::BTreeSet;

use serde::Serialize;

use crate::catalog::PricingOption;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    #[default]
    ByName,
    ByPriceDesc,
    ByPriceAsc,
}

impl SortMode {
    pub const ALL: [SortMode; 3] = [Self::ByName, Self::ByPriceDesc, Self::ByPriceAsc];

    pub fn label(self) -> &'static str {
        match self {
            Self::ByName => "Item Name",
            Self::ByPriceDesc => "Higher Price",
            Self::ByPriceAsc => "Lower Price",
        }
    }

    /// Value written to the `sort` link key.
    pub fn query_value(self) -> &'static str {
        match self {
            Self::ByName => "name",
            Self::ByPriceDesc => "high",
            Self::ByPriceAsc => "low",
        }
    }

    pub fn from_query_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.query_value() == value)
    }
}

/// Inclusive price bounds. Always ordered: `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PriceRange {
    min: u32,
    max: u32,
}

impl PriceRange {
    pub const DEFAULT: PriceRange = PriceRange { min: 0, max: 999 };

    /// Builds a range from two slider handles in either order.
    pub fn new(a: u32, b: u32) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    /// Both handles pulled inside `bounds`.
    pub fn clamp_to(self, bounds: PriceRange) -> Self {
        Self::new(
            self.min.clamp(bounds.min, bounds.max),
            self.max.clamp(bounds.min, bounds.max),
        )
    }

    pub fn contains(&self, price: f64) -> bool {
        price >= f64::from(self.min) && price <= f64::from(self.max)
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
pub struct FilterState {
    /// Empty means every tier passes.
    pub pricing_tiers: BTreeSet<PricingOption>,
    pub search_text: String,
    pub sort_mode: SortMode,
    pub price_range: PriceRange,
}

impl UiState for FilterState {}

impl FilterState {
    pub fn with_price_range(price_range: PriceRange) -> Self {
        Self {
            price_range,
            ..Self::default()
        }
    }

    pub fn is_tier_selected(&self, tier: PricingOption) -> bool {
        self.pricing_tiers.contains(&tier)
    }

    /// The price range control is only offered while `Paid` is ticked.
    pub fn price_slider_visible(&self) -> bool {
        self.is_tier_selected(PricingOption::Paid)
    }
}
