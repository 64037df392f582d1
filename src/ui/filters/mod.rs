//! Filter/sort feature module.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Tiers, search text, sort mode and price range
//! - `intent.rs` - One intent per user action on the filter panel
//! - `reducer.rs` - State transitions (pure, no side effects)

mod intent;
mod reducer;
mod state;

pub use intent::FilterIntent;
pub use reducer::FilterReducer;
pub use state::{FilterState, PriceRange, SortMode};
