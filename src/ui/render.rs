//! Plain-text and JSON rendering of the grid.

use std::fmt::Write;

use serde::Serialize;

use crate::catalog::Item;
use crate::ui::filters::FilterState;
use crate::ui::grid::GridState;

const TITLE_WIDTH: usize = 36;
const CREATOR_WIDTH: usize = 24;
const PRICE_WIDTH: usize = 10;

pub fn render_text(grid: &GridState) -> String {
    match grid {
        GridState::Idle => "Catalog not loaded.".to_string(),
        GridState::Loading => "Loading...".to_string(),
        GridState::Failed { message } => format!("Error loading data: {message}"),
        GridState::Empty => "No matching results found.".to_string(),
        GridState::Items {
            visible,
            total,
            has_more,
        } => {
            let mut out = String::new();
            for item in visible {
                let _ = writeln!(out, "{}", render_card(item));
            }
            let _ = write!(out, "Showing {} of {}", visible.len(), total);
            if *has_more {
                out.push_str(" (type 'more' to load more)");
            }
            out
        }
    }
}

// title, creator, price tag, then the image path when the record has one
fn render_card(item: &Item) -> String {
    let mut card = format!(
        "{:<tw$} {:<cw$} {:<pw$}",
        truncate(&item.title, TITLE_WIDTH),
        truncate(&item.creator, CREATOR_WIDTH),
        item.price_tag(),
        tw = TITLE_WIDTH,
        cw = CREATOR_WIDTH,
        pw = PRICE_WIDTH,
    );
    if item.image_path.is_empty() {
        card.truncate(card.trim_end().len());
    } else {
        let _ = write!(card, " {}", item.image_path);
    }
    card
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(width.saturating_sub(3)).collect();
    cut.push_str("...");
    cut
}

/// One-line summary of the filter panel.
pub fn render_filters(filters: &FilterState) -> String {
    let tiers = if filters.pricing_tiers.is_empty() {
        "all".to_string()
    } else {
        filters
            .pricing_tiers
            .iter()
            .map(|tier| tier.label())
            .collect::<Vec<_>>()
            .join(", ")
    };
    let mut out = format!("Pricing: {tiers} | Sort by: {}", filters.sort_mode.label());
    if !filters.search_text.is_empty() {
        let _ = write!(out, " | Search: \"{}\"", filters.search_text);
    }
    if filters.price_slider_visible() {
        let _ = write!(
            out,
            " | Price: ${}-${}",
            filters.price_range.min(),
            filters.price_range.max()
        );
    }
    out
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    filters: &'a FilterState,
    link_query: String,
    grid: &'a GridState,
}

pub fn render_json(
    grid: &GridState,
    filters: &FilterState,
    link_query: String,
) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonOutput {
        filters,
        link_query,
        grid,
    })
}
