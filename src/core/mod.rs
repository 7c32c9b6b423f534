

pub mod api;
pub mod category;
pub mod config;
pub mod error;
pub mod session;

pub use api::ApiResponse;
pub use category::Category;
pub use config::PhayaoConfig;
pub use error::{PhayaoError, Result};
pub use session::{AuthToken, MemorySessionStore, Session, SessionStore};
