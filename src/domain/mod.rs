//! Domain layer containing configuration types, traits, and error definitions.

pub mod error;
pub mod traits;
pub mod types;

pub use error::{ClientError, ConfigError, CookieError};
pub use traits::{CookieAccessor, SessionCookies};
pub use types::{
    AuthFlow, AuthOptions, ClientConfig, CookieOptions, DEFAULT_STORAGE_KEY, ENV_ANON_KEY,
    ENV_APP_ENV, ENV_SERVICE_URL, Environment,
};
