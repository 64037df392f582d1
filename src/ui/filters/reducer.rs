use crate::ui::filters::intent::FilterIntent;
use crate::ui::filters::state::{FilterState, SortMode};
use crate::ui::mvi::Reducer;

pub struct FilterReducer;

impl Reducer for FilterReducer {
    type State = FilterState;
    type Intent = FilterIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FilterIntent::SetSearchKeyword { text } => FilterState {
                search_text: text,
                ..state
            },
            FilterIntent::SetPricingFilter { tiers } => FilterState {
                pricing_tiers: tiers.into_iter().collect(),
                ..state
            },
            FilterIntent::ToggleTier { tier } => {
                let mut pricing_tiers = state.pricing_tiers;
                if !pricing_tiers.remove(&tier) {
                    pricing_tiers.insert(tier);
                }
                FilterState {
                    pricing_tiers,
                    ..state
                }
            }
            FilterIntent::SetSortBy { mode } => FilterState {
                sort_mode: mode,
                ..state
            },
            FilterIntent::SetPriceRange { range } => FilterState {
                price_range: range,
                ..state
            },
            // price_range survives a reset
            FilterIntent::ResetFilters => FilterState {
                pricing_tiers: Default::default(),
                search_text: String::new(),
                sort_mode: SortMode::ByName,
                price_range: state.price_range,
            },
        }
    }
}
