//! Client bindings for the Ionic Push API device-token collection.
//!
//! Each operation resolves a path template from the static endpoint table,
//! fills in its placeholders (hashing the raw device token into a token id
//! first, where applicable), and forwards the call to the shared request
//! helper. The API's responses are returned to the caller as-is.
//!
//! ```no_run
//! # async fn example() -> ionic_push_client::ApiResult<()> {
//! use ionic_push_client::{DeviceTokens, Settings};
//!
//! let settings = Settings::with_env_and_config_files(&[]).unwrap();
//! let tokens = DeviceTokens::new(&settings, reqwest::Client::new());
//! let token = tokens.retrieve("some-device-token").await?;
//! # Ok(())
//! # }
//! ```

#[macro_use]
extern crate slog;
#[macro_use]
extern crate slog_scope;

pub mod endpoint;
pub mod error;
pub mod logging;
pub mod settings;
pub mod tokens;

pub use error::{ApiError, ApiResult};
pub use settings::Settings;
pub use tokens::DeviceTokens;
