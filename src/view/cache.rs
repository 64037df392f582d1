//! Memoized derived view.

use crate::catalog::Item;
use crate::ui::filters::FilterState;
use crate::view::derive::derive_view;

/// Identity of a derived view.
///
/// `filter_revision` counts filter mutations, so a filter that changes and
/// then changes back still yields a new identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ViewKey {
    pub catalog_generation: u64,
    pub filter_revision: u64,
    pub filters: FilterState,
}

/// A filtered and ordered catalog, tagged with the inputs it was built from.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedView {
    key: ViewKey,
    items: Vec<Item>,
}

impl DerivedView {
    pub fn derive(key: ViewKey, items: &[Item]) -> Self {
        let items = derive_view(items, &key.filters);
        Self { key, items }
    }

    pub fn key(&self) -> &ViewKey {
        &self.key
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Keeps the last derived view and rebuilds it only when its content inputs change.
#[derive(Debug, Default)]
pub struct ViewCache {
    current: Option<DerivedView>,
}

impl ViewCache {
    /// A bumped `filter_revision` with equal filters re-tags the cached view
    /// without deriving it again.
    pub fn get_or_derive(
        &mut self,
        catalog_generation: u64,
        filter_revision: u64,
        items: &[Item],
        filters: &FilterState,
    ) -> &DerivedView {
        let reusable = matches!(
            &self.current,
            Some(view) if view.key.catalog_generation == catalog_generation
                && view.key.filters == *filters
        );
        if !reusable {
            self.current = None;
        }
        let view = self.current.get_or_insert_with(|| {
            tracing::debug!(catalog_generation, filter_revision, "Deriving catalog view");
            DerivedView::derive(
                ViewKey {
                    catalog_generation,
                    filter_revision,
                    filters: filters.clone(),
                },
                items,
            )
        });
        view.key.filter_revision = filter_revision;
        view
    }
}
