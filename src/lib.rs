pub mod config;
pub mod error;
pub mod modules;
pub mod services;

pub use error::{ConfigError, ResetError, StoreError};
pub use services::reset::ClearReport;
pub use services::store::RecordKind;
