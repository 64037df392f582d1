//! Base trait for intents (user/system actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (typing a search, ticking a tier, picking a sort)
/// - System events (fetch started, fetch finished)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
