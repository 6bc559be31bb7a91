// ============================================================================
// STATE MODULE - tab-local shared state + notifications
// ============================================================================

pub mod reactivity;
pub mod resource_cache;
pub mod ui_state;

pub use reactivity::{ReactiveState, SubscriptionId};
pub use resource_cache::{with_cache, CacheKey, EntrySnapshot, ResourceCache};
pub use ui_state::{UiFlags, UiStore};
