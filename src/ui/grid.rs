use serde::Serialize;

use crate::catalog::Item;

/// What the content grid should show.
///
/// `Empty` (nothing matched) is not an error and is distinct from `Failed`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum GridState {
    Idle,
    Loading,
    Failed {
        message: String,
    },
    Empty,
    Items {
        visible: Vec<Item>,
        total: usize,
        has_more: bool,
    },
}

impl GridState {
    pub fn visible(&self) -> &[Item] {
        match self {
            Self::Items { visible, .. } => visible,
            Self::Idle | Self::Loading | Self::Failed { .. } | Self::Empty => &[],
        }
    }

    pub fn has_more(&self) -> bool {
        matches!(self, Self::Items { has_more: true, .. })
    }
}
