mod common;

use catalog_view::catalog::{Item, PricingOption};
use catalog_view::ui::filters::{FilterState, PriceRange, SortMode};
use catalog_view::view::{compare_titles, derive_view};
use common::{free, ids, item, paid, view_only};
use proptest::prelude::*;
use std::cmp::Ordering;

fn catalog() -> Vec<Item> {
    vec![
        paid(1, "Alpha", 50.0),
        free(2, "Beta"),
        paid(3, "Gamma", 500.0),
    ]
}

#[test]
fn paid_tier_with_range_keeps_only_affordable_paid_items() {
    let filters = FilterState {
        pricing_tiers: [PricingOption::Paid].into_iter().collect(),
        price_range: PriceRange::new(0, 100),
        ..FilterState::default()
    };
    let view = derive_view(&catalog(), &filters);
    assert_eq!(ids(&view), vec![1]);
    assert_eq!(view[0].title, "Alpha");
}

#[test]
fn no_filters_sorted_by_name() {
    let items = vec![
        free(1, "delta"),
        paid(2, "Bravo", 10.0),
        view_only(3, "alpha"),
        paid(4, "Charlie", 20.0),
    ];
    let view = derive_view(&items, &FilterState::default());
    assert_eq!(ids(&view), vec![3, 2, 4, 1]);
}

#[test]
fn accented_titles_sort_next_to_their_base_letter() {
    let items = vec![
        free(1, "Zed"),
        free(2, "Émile"),
        free(3, "Eve"),
        free(4, "emile"),
        free(5, "Ångström"),
        free(6, "Bob"),
    ];
    let view = derive_view(&items, &FilterState::default());
    assert_eq!(ids(&view), vec![5, 6, 4, 2, 3, 1]);
}

#[test]
fn tier_filter_with_multiple_tiers() {
    let items = vec![
        paid(1, "A", 10.0),
        free(2, "B"),
        view_only(3, "C"),
    ];
    let filters = FilterState {
        pricing_tiers: [PricingOption::Free, PricingOption::ViewOnly]
            .into_iter()
            .collect(),
        ..FilterState::default()
    };
    assert_eq!(ids(&derive_view(&items, &filters)), vec![2, 3]);
}

#[test]
fn range_still_filters_paid_when_only_free_selected() {
    // Paid is excluded by the tier filter anyway; range must not resurrect it.
    let items = vec![paid(1, "A", 10.0), free(2, "B")];
    let filters = FilterState {
        pricing_tiers: [PricingOption::Free].into_iter().collect(),
        ..FilterState::default()
    };
    assert_eq!(ids(&derive_view(&items, &filters)), vec![2]);
}

#[test]
fn range_bounds_are_inclusive() {
    let items = vec![paid(1, "A", 10.0), paid(2, "B", 20.0), paid(3, "C", 20.01)];
    let filters = FilterState {
        price_range: PriceRange::new(10, 20),
        sort_mode: SortMode::ByPriceAsc,
        ..FilterState::default()
    };
    assert_eq!(ids(&derive_view(&items, &filters)), vec![1, 2]);
}

#[test]
fn search_and_tier_combine() {
    let mut cat = paid(1, "Cat Poster", 10.0);
    cat.creator = "Ann".to_string();
    let mut dog = free(2, "Dog");
    dog.creator = "Catalina".to_string();
    let items = vec![cat, dog, free(3, "Bird")];

    let filters = FilterState {
        search_text: "CAT".to_string(),
        pricing_tiers: [PricingOption::Free].into_iter().collect(),
        ..FilterState::default()
    };
    assert_eq!(ids(&derive_view(&items, &filters)), vec![2]);
}

#[test]
fn nothing_matches_gives_empty_view() {
    let filters = FilterState {
        search_text: "zebra".to_string(),
        ..FilterState::default()
    };
    assert!(derive_view(&catalog(), &filters).is_empty());
}

#[test]
fn stray_price_on_free_item_is_ignored() {
    let items = vec![
        item(1, "Free but priced", PricingOption::Free, Some(5000.0)),
        paid(2, "Cheap", 1.0),
    ];
    let filters = FilterState {
        sort_mode: SortMode::ByPriceDesc,
        price_range: PriceRange::new(0, 10),
        ..FilterState::default()
    };
    assert_eq!(ids(&derive_view(&items, &filters)), vec![2, 1]);
}

#[test]
fn input_is_not_mutated() {
    let items = vec![paid(1, "B", 30.0), paid(2, "A", 10.0)];
    let before = items.clone();
    let filters = FilterState {
        sort_mode: SortMode::ByPriceAsc,
        ..FilterState::default()
    };
    let first = derive_view(&items, &filters);
    let second = derive_view(&items, &filters);
    assert_eq!(items, before);
    assert_eq!(first, second);
}

fn tier_strategy() -> impl Strategy<Value = PricingOption> {
    prop_oneof![
        Just(PricingOption::Paid),
        Just(PricingOption::Free),
        Just(PricingOption::ViewOnly),
    ]
}

fn catalog_strategy() -> impl Strategy<Value = Vec<Item>> {
    prop::collection::vec(
        (
            "[a-dA-D]{1,4}",
            tier_strategy(),
            prop::option::of(0u32..1200),
        ),
        0..40,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(id, (title, tier, price))| {
                item(id as u64, &title, tier, price.map(f64::from))
            })
            .collect()
    })
}

fn in_range(item: &Item, range: PriceRange) -> bool {
    item.pricing_option != PricingOption::Paid || range.contains(item.price.unwrap_or(0.0))
}

proptest! {
    #[test]
    fn unfiltered_price_sorts_only_drop_out_of_range_paid(
        items in catalog_strategy(),
        a in 0u32..1200,
        b in 0u32..1200,
    ) {
        let range = PriceRange::new(a, b);
        let expected: Vec<u64> = items
            .iter()
            .filter(|i| in_range(i, range))
            .map(|i| i.id)
            .collect();

        for mode in [SortMode::ByPriceAsc, SortMode::ByPriceDesc] {
            let filters = FilterState { sort_mode: mode, price_range: range, ..FilterState::default() };
            let mut got = ids(&derive_view(&items, &filters));
            got.sort_unstable();
            prop_assert_eq!(&got, &expected);
        }

        let by_name = derive_view(&items, &FilterState { price_range: range, ..FilterState::default() });
        let mut got = ids(&by_name);
        got.sort_unstable();
        prop_assert_eq!(&got, &expected);
        for pair in by_name.windows(2) {
            prop_assert_ne!(compare_titles(&pair[0].title, &pair[1].title), Ordering::Greater);
        }
    }

    #[test]
    fn price_sorts_are_stable(items in catalog_strategy(), descending in any::<bool>()) {
        let mode = if descending { SortMode::ByPriceDesc } else { SortMode::ByPriceAsc };
        let filters = FilterState {
            sort_mode: mode,
            price_range: PriceRange::new(0, 1200),
            ..FilterState::default()
        };
        let view = derive_view(&items, &filters);
        for pair in view.windows(2) {
            let (x, y) = (pair[0].effective_price(), pair[1].effective_price());
            if descending {
                prop_assert!(x >= y);
            } else {
                prop_assert!(x <= y);
            }
            // ids follow catalog order, so equal prices must keep ascending ids
            if x == y {
                prop_assert!(pair[0].id < pair[1].id);
            }
        }
    }

    #[test]
    fn derivation_is_idempotent(items in catalog_strategy(), search in "[a-d]{0,2}") {
        let filters = FilterState { search_text: search, ..FilterState::default() };
        prop_assert_eq!(derive_view(&items, &filters), derive_view(&items, &filters));
    }
}
