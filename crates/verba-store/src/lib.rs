pub mod backend;
pub mod error;
pub mod user_store;

pub use backend::{JsonFileStore, KeyValueStore, MemoryStore, open_backend};
pub use error::StoreError;
pub use user_store::UserStore;
