//! Mirrors filter state into the shareable query and back.
//!
//! | key       | value                                   |
//! |-----------|-----------------------------------------|
//! | `filters` | comma-joined tier labels (`Paid,Free`)  |
//! | `search`  | raw search text                         |
//! | `sort`    | `name`, `high` or `low`                 |
//!
//! The price range is not part of the link.

use crate::catalog::PricingOption;
use crate::share::params::QueryParams;
use crate::ui::filters::{FilterIntent, FilterState, SortMode};

pub const FILTERS_KEY: &str = "filters";
pub const SEARCH_KEY: &str = "search";
pub const SORT_KEY: &str = "sort";

/// Intents that seed filter state from a link, in dispatch order.
///
/// Unknown keys are skipped. Malformed values produce no intent, so the
/// state keeps whatever it already held.
pub fn read_intents(params: &QueryParams) -> Vec<FilterIntent> {
    let mut intents = Vec::new();

    if let Some(raw) = params.get(FILTERS_KEY) {
        match parse_tiers(raw) {
            Some(tiers) => intents.push(FilterIntent::SetPricingFilter { tiers }),
            None => tracing::debug!(value = raw, "Ignoring malformed 'filters' value"),
        }
    }

    if let Some(search) = params.get(SEARCH_KEY).filter(|s| !s.is_empty()) {
        intents.push(FilterIntent::SetSearchKeyword {
            text: search.to_string(),
        });
    }

    if let Some(raw) = params.get(SORT_KEY) {
        match SortMode::from_query_value(raw) {
            Some(mode) => intents.push(FilterIntent::SetSortBy { mode }),
            None => tracing::debug!(value = raw, "Ignoring malformed 'sort' value"),
        }
    }

    intents
}

/// Writes the linkable part of `state` into `params`.
///
/// Non-default values get an explicit key; default values drop theirs.
/// Keys this module does not own are left alone.
pub fn write_state(params: &mut QueryParams, state: &FilterState) {
    if state.pricing_tiers.is_empty() {
        params.remove(FILTERS_KEY);
    } else {
        params.set(FILTERS_KEY, encode_tiers(state));
    }

    if state.search_text.is_empty() {
        params.remove(SEARCH_KEY);
    } else {
        params.set(SEARCH_KEY, state.search_text.as_str());
    }

    if state.sort_mode == SortMode::default() {
        params.remove(SORT_KEY);
    } else {
        params.set(SORT_KEY, state.sort_mode.query_value());
    }
}

/// Query holding only the linkable part of `state`.
pub fn to_params(state: &FilterState) -> QueryParams {
    let mut params = QueryParams::new();
    write_state(&mut params, state);
    params
}

fn encode_tiers(state: &FilterState) -> String {
    state
        .pricing_tiers
        .iter()
        .map(|tier| tier.label())
        .collect::<Vec<_>>()
        .join(",")
}

/// Recognized labels from a comma-joined list; `None` if there are none.
fn parse_tiers(raw: &str) -> Option<Vec<PricingOption>> {
    let mut tiers = Vec::new();
    for label in raw.split(',').filter(|l| !l.trim().is_empty()) {
        match PricingOption::from_label(label) {
            Some(tier) if !tiers.contains(&tier) => tiers.push(tier),
            Some(_) => {}
            None => tracing::debug!(label, "Ignoring unknown pricing tier label"),
        }
    }
    (!tiers.is_empty()).then_some(tiers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_writes_nothing() {
        assert!(to_params(&FilterState::default()).is_empty());
    }

    #[test]
    fn tiers_are_written_in_canonical_order() {
        let state = FilterState {
            pricing_tiers: [PricingOption::ViewOnly, PricingOption::Paid]
                .into_iter()
                .collect(),
            ..FilterState::default()
        };
        assert_eq!(to_params(&state).get(FILTERS_KEY), Some("Paid,View Only"));
    }

    #[test]
    fn unknown_labels_are_dropped() {
        let params = QueryParams::parse("filters=Paid,Premium,paid");
        assert_eq!(
            read_intents(&params),
            vec![FilterIntent::SetPricingFilter {
                tiers: vec![PricingOption::Paid]
            }]
        );
    }

    #[test]
    fn malformed_values_produce_no_intent() {
        let params = QueryParams::parse("filters=Premium&sort=cheapest&search=&page=3");
        assert!(read_intents(&params).is_empty());
    }

    #[test]
    fn foreign_keys_survive_writes() {
        let mut params = QueryParams::parse("ref=mail&sort=low");
        write_state(&mut params, &FilterState::default());
        assert_eq!(params.to_query_string(), "ref=mail");
    }
}
