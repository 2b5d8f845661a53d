//! Application layer containing the client factories and shared state.

pub mod browser;
pub mod server;
pub mod state;

pub use browser::BrowserClientFactory;
pub use server::{ReadOnlyCookies, ServerClientFactory};
pub use state::BootstrapState;
