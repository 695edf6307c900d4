pub mod app_config;
pub mod session;

pub use session::{
    FileSessionStore, MemorySessionStore, SessionStore, SessionStoreExt, StoreError, CONFIRMATION_KEY,
};
