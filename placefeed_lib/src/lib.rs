//! Local service layer for the placefeed demo app: key-value storage,
//! the mock auth flow, and settings persistence on top of the API client.

pub mod auth;
pub mod error;
pub mod settings;
pub mod storage;

pub use placefeed_api;
pub use placefeed_api::types;
pub use placefeed_api::{
    Client, ClientConfig, Error, LogNotifier, Method, Notice, NoticeKind, Notifier, RequestConfig,
};

pub use auth::{Auth, AuthState, UserInfo};
pub use error::ServiceError;
pub use settings::{AppSettings, Settings};
pub use storage::{keys, FileStorage, MemoryStorage, Storage, StorageBackend};
