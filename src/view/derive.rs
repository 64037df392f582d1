//! Filtering and ordering of the raw catalog.

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::catalog::{Item, PricingOption};
use crate::ui::filters::{FilterState, SortMode};

/// Derives the ordered view of `items` under `filters`.
///
/// Pure: `items` is left untouched and identical arguments always produce
/// identical output. The sort is stable, so ties keep catalog order.
pub fn derive_view(items: &[Item], filters: &FilterState) -> Vec<Item> {
    let needle = filters.search_text.to_lowercase();
    let mut view: Vec<Item> = items
        .iter()
        .filter(|item| matches(item, filters, &needle))
        .cloned()
        .collect();

    match filters.sort_mode {
        SortMode::ByName => view.sort_by(|a, b| compare_titles(&a.title, &b.title)),
        SortMode::ByPriceDesc => {
            view.sort_by(|a, b| b.effective_price().total_cmp(&a.effective_price()))
        }
        SortMode::ByPriceAsc => {
            view.sort_by(|a, b| a.effective_price().total_cmp(&b.effective_price()))
        }
    }
    view
}

/// Filter predicate. `needle` is the already lowered search text.
pub fn matches(item: &Item, filters: &FilterState, needle: &str) -> bool {
    matches_search(item, needle) && matches_tier(item, filters) && matches_price(item, filters)
}

fn matches_search(item: &Item, needle: &str) -> bool {
    needle.is_empty()
        || item.title.to_lowercase().contains(needle)
        || item.creator.to_lowercase().contains(needle)
}

fn matches_tier(item: &Item, filters: &FilterState) -> bool {
    filters.pricing_tiers.is_empty() || filters.pricing_tiers.contains(&item.pricing_option)
}

// Applies to every paid item, whether or not Paid is among the selected tiers.
fn matches_price(item: &Item, filters: &FilterState) -> bool {
    match item.pricing_option {
        PricingOption::Paid => filters.price_range.contains(item.effective_price()),
        PricingOption::Free | PricingOption::ViewOnly => true,
    }
}

/// Locale-style title ordering.
///
/// Three levels, each consulted only on a tie of the previous one:
/// base letters ignoring accents and case ("Émile" < "Zed"), then accents
/// ("emile" < "émile"), then case with lowercase first ("apple" < "Apple").
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| accented_letters(a).cmp(accented_letters(b)))
        .then_with(|| a.chars().map(swap_case).cmp(b.chars().map(swap_case)))
}

fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn accented_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

// Uppercase sorts before lowercase in code point order; swapping flips that.
fn swap_case(c: char) -> char {
    if c.is_uppercase() {
        c.to_lowercase().next().unwrap_or(c)
    } else if c.is_lowercase() {
        c.to_uppercase().next().unwrap_or(c)
    } else {
        c
    }
}
