use crate::catalog::Item;
use crate::ui::mvi::UiState;

/// Message used when a failure carries no text of its own.
pub const DEFAULT_FETCH_ERROR: &str = "Failed to load content.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContentsState {
    pub status: FetchStatus,
    pub data: Vec<Item>,
    pub error: Option<String>,
    /// Bumped on every successful fetch; identifies the catalog a derived view was built from.
    pub generation: u64,
}

impl UiState for ContentsState {}

impl ContentsState {
    /// Items eligible for derivation. Empty until the fetch has succeeded.
    pub fn items(&self) -> &[Item] {
        match self.status {
            FetchStatus::Succeeded => &self.data,
            FetchStatus::Idle | FetchStatus::Loading | FetchStatus::Failed => &[],
        }
    }

    /// Catalog identity for derived views; 0 while no catalog is available.
    pub fn view_generation(&self) -> u64 {
        match self.status {
            FetchStatus::Succeeded => self.generation,
            FetchStatus::Idle | FetchStatus::Loading | FetchStatus::Failed => 0,
        }
    }
}
