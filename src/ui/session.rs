//! Catalog browsing session.
//!
//! Owns the two reducer-driven records (item store and filter state), the
//! shareable query mirroring the filters, and the pagination cursor over
//! the derived view.

use url::Url;

use crate::catalog::CatalogSource;
use crate::config::Config;
use crate::share::{read_intents, write_state, QueryParams};
use crate::ui::contents::{ContentsIntent, ContentsReducer, ContentsState, FetchStatus};
use crate::ui::filters::{FilterIntent, FilterReducer, FilterState, PriceRange};
use crate::ui::grid::GridState;
use crate::ui::mvi::Reducer;
use crate::ui::scheduler::LoadMoreTicket;
use crate::view::{DerivedView, PaginationCursor, Paginator, ViewCache};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct Session {
    contents: ContentsState,
    filters: FilterState,
    query: QueryParams,
    /// Bumped on every filter intent, including the ones seeded by `mount`.
    filter_revision: u64,
    cache: ViewCache,
    paginator: Paginator,
}

impl Session {
    pub fn new(page_size: usize, price_range: PriceRange) -> Self {
        Self {
            contents: ContentsState::default(),
            filters: FilterState::with_price_range(price_range),
            query: QueryParams::new(),
            filter_revision: 0,
            cache: ViewCache::default(),
            paginator: Paginator::new(page_size),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.pagination.page_size,
            PriceRange::new(config.filters.price_min, config.filters.price_max),
        )
    }

    /// Seeds the filters from a shared link. Call once, before the first render.
    ///
    /// The link is kept as given; it is only rewritten by later filter intents.
    pub fn mount(&mut self, query: QueryParams) {
        for intent in read_intents(&query) {
            tracing::debug!(?intent, "Seeding filter from link");
            dispatch_mvi!(self, filters, FilterReducer, intent);
            self.filter_revision += 1;
        }
        self.query = query;
    }

    pub fn dispatch_contents(&mut self, intent: ContentsIntent) {
        dispatch_mvi!(self, contents, ContentsReducer, intent);
    }

    /// Applies a filter intent and mirrors the result into the shareable query.
    pub fn dispatch_filter(&mut self, intent: FilterIntent) {
        tracing::debug!(?intent, "Filter intent");
        dispatch_mvi!(self, filters, FilterReducer, intent);
        self.filter_revision += 1;
        write_state(&mut self.query, &self.filters);
    }

    /// Runs the catalog fetch through the item store lifecycle.
    pub async fn load<S: CatalogSource>(&mut self, source: &S) -> FetchStatus {
        self.dispatch_contents(ContentsIntent::FetchStarted);
        match source.fetch().await {
            Ok(items) => {
                tracing::info!(count = items.len(), "Catalog loaded");
                self.dispatch_contents(ContentsIntent::FetchSucceeded { items });
            }
            Err(err) => {
                tracing::warn!(error = %err, "Catalog fetch failed");
                self.dispatch_contents(ContentsIntent::FetchFailed {
                    message: err.to_string(),
                });
            }
        }
        self.contents.status
    }

    pub fn contents(&self) -> &ContentsState {
        &self.contents
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn query(&self) -> &QueryParams {
        &self.query
    }

    pub fn price_slider_visible(&self) -> bool {
        self.filters.price_slider_visible()
    }

    /// `base` carrying the current shareable query.
    pub fn share_link(&self, base: &Url) -> Url {
        self.query.apply_to(base)
    }

    /// Current derived view.
    pub fn view(&mut self) -> &DerivedView {
        current_view(&mut self.cache, &self.contents, self.filter_revision, &self.filters)
    }

    /// Cursor as it applies to the current view.
    pub fn cursor(&mut self) -> PaginationCursor {
        let view = current_view(
            &mut self.cache,
            &self.contents,
            self.filter_revision,
            &self.filters,
        );
        self.paginator.sync(view);
        self.paginator.cursor()
    }

    pub fn grid(&mut self) -> GridState {
        match self.contents.status {
            FetchStatus::Idle => GridState::Idle,
            FetchStatus::Loading => GridState::Loading,
            FetchStatus::Failed => GridState::Failed {
                message: self.contents.error.clone().unwrap_or_default(),
            },
            FetchStatus::Succeeded => {
                let view = current_view(
                    &mut self.cache,
                    &self.contents,
                    self.filter_revision,
                    &self.filters,
                );
                if view.is_empty() {
                    self.paginator.sync(view);
                    return GridState::Empty;
                }
                let page = self.paginator.page(view);
                GridState::Items {
                    visible: page.items.to_vec(),
                    total: page.total,
                    has_more: page.has_more,
                }
            }
        }
    }

    /// Ticket for revealing another page of the current view, if it has more.
    pub fn load_more_ticket(&mut self) -> Option<LoadMoreTicket> {
        if self.contents.status != FetchStatus::Succeeded {
            return None;
        }
        let view = current_view(
            &mut self.cache,
            &self.contents,
            self.filter_revision,
            &self.filters,
        );
        self.paginator.sync(view);
        self.paginator
            .cursor()
            .has_more(view.len())
            .then(|| LoadMoreTicket::new(view.key().clone()))
    }

    /// Applies a delivered ticket.
    ///
    /// The view is re-derived at this point: a ticket issued before any later
    /// filter intent is dropped and the new view stays at one page, even if
    /// the filters have since returned to their earlier value.
    pub fn apply_load_more(&mut self, ticket: &LoadMoreTicket) -> bool {
        let view = current_view(
            &mut self.cache,
            &self.contents,
            self.filter_revision,
            &self.filters,
        );
        if view.key() != ticket.view() {
            self.paginator.sync(view);
            tracing::debug!("Dropping load-more issued for a previous view");
            return false;
        }
        let advanced = self.paginator.advance(view);
        if advanced {
            tracing::debug!(
                visible = self.paginator.cursor().visible_count(),
                total = view.len(),
                "Revealed another page"
            );
        }
        advanced
    }

    /// Reveals another page immediately.
    pub fn load_more_now(&mut self) -> bool {
        match self.load_more_ticket() {
            Some(ticket) => self.apply_load_more(&ticket),
            None => false,
        }
    }
}

fn current_view<'a>(
    cache: &'a mut ViewCache,
    contents: &ContentsState,
    filter_revision: u64,
    filters: &FilterState,
) -> &'a DerivedView {
    cache.get_or_derive(
        contents.view_generation(),
        filter_revision,
        contents.items(),
        filters,
    )
}
