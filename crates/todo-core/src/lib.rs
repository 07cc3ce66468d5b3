//! Todo Core
//!
//! State store for the todo list and its local storage mirror:
//! - model / intent / reducer: the collection and its pure updates
//! - codec: validated JSON storage format
//! - storage / bridge: durable slot and hydrate-then-mirror lifecycle
//! - store: the composed, owned store the UI dispatches into

mod bridge;
mod clock;
mod codec;
mod config;
mod error;
mod intent;
mod model;
mod reducer;
mod storage;
mod store;

pub use bridge::{BridgePhase, Hydration, PersistenceBridge};
pub use clock::{Clock, SystemClock};
pub use codec::{decode, encode};
pub use config::{PersistConfig, DEFAULT_STORAGE_KEY};
pub use error::{BridgeError, DecodeError, StorageError};
pub use intent::Intent;
pub use model::{Todo, TodoId, TodoList};
pub use reducer::apply;
#[cfg(target_arch = "wasm32")]
pub use storage::BrowserStorage;
pub use storage::{MemoryStorage, StorageSlot};
pub use store::TodoStore;
