mod client;
mod config;
mod errors;
mod notify;
pub mod types;

pub use self::client::{Client, Method, RequestConfig};
pub use self::config::{ClientConfig, BASE_URL_ENV, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use self::errors::{Error, TIMEOUT_CODE, TRANSPORT_FAILURE_CODE};
pub use self::notify::{LogNotifier, Notice, NoticeKind, Notifier};
