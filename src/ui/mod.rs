//! Browsing layer: reducer-driven state, the session that ties it to the
//! derivation engine, and a line-based front end.

pub mod contents;
pub mod filters;
pub mod grid;
pub mod input;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod scheduler;
pub mod session;
