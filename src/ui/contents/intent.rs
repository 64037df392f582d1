//! Intents for the item store.

use crate::catalog::Item;
use crate::ui::mvi::Intent;

/// Fetch lifecycle events dispatched to the item store reducer.
#[derive(Debug, Clone)]
pub enum ContentsIntent {
    /// A fetch has been issued.
    FetchStarted,

    /// The fetch returned and its records were shaped into items.
    FetchSucceeded { items: Vec<Item> },

    /// The fetch failed; `message` is shown to the user as-is.
    FetchFailed { message: String },
}

impl Intent for ContentsIntent {}
