//! Intents for the filter panel.

use crate::catalog::PricingOption;
use crate::ui::filters::state::{PriceRange, SortMode};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum FilterIntent {
    SetSearchKeyword { text: String },
    /// Replace the selected tiers. Duplicates collapse; an empty list disables the filter.
    SetPricingFilter { tiers: Vec<PricingOption> },
    /// Tick or untick a single tier checkbox.
    ToggleTier { tier: PricingOption },
    SetSortBy { mode: SortMode },
    SetPriceRange { range: PriceRange },
    /// Clears tiers, search and sort. The price range is kept.
    ResetFilters,
}

impl Intent for FilterIntent {}
