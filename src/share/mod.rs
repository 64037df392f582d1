//! Shareable-link representation of the filter state.

pub mod bridge;
mod params;

pub use bridge::{read_intents, to_params, write_state};
pub use params::QueryParams;
