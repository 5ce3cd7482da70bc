//! Member store implementations

mod kv_store;

pub use kv_store::{KeyValueUserStore, DEFAULT_USERS_KEY};
