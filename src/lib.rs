//! Items service: JSON CRUD over a single `items` table.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod routes;
pub mod state;
pub mod store;

pub use config::{ServiceConfig, StoreConfig, StoreKind};
pub use error::{AppError, StartupError};
pub use extractors::ItemId;
pub use model::{Item, ItemPayload};
pub use routes::{app, common_routes, item_routes};
pub use state::{AppState, StorageSession};
pub use store::{ItemStore, MemoryItemStore, PgItemStore};
