//! Filter, sort and page through a content catalog.
//!
//! Raw items and the filter state are independent records; the view shown
//! to the user is derived from both on demand and revealed a page at a time.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod logging;
pub mod share;
pub mod ui;
pub mod view;
