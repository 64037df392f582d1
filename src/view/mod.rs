//! Derivation engine and pagination.
//!
//! ```text
//! items + FilterState ──→ derive_view ──→ DerivedView ──→ Paginator ──→ Page
//! ```

mod cache;
mod derive;
mod pagination;

pub use cache::{DerivedView, ViewCache, ViewKey};
pub use derive::{compare_titles, derive_view, matches};
pub use pagination::{Page, PaginationCursor, Paginator, DEFAULT_PAGE_SIZE};
