//! Item store feature module.
//!
//! Holds the raw catalog together with its fetch lifecycle:
//! `Idle → Loading → Succeeded | Failed`, once per fetch.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Fetch status and the fetched items
//! - `intent.rs` - Fetch lifecycle events
//! - `reducer.rs` - State transitions (pure, no side effects)

mod intent;
mod reducer;
mod state;

pub use intent::ContentsIntent;
pub use reducer::ContentsReducer;
pub use state::{ContentsState, FetchStatus};
