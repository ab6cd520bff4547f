//! rusty-blog/crates/rb-core/src/lib.rs
//!
//! The authentication gate and content store of Rusty-Blog, plus the port
//! traits its plugins implement.

pub mod context;
pub mod error;
pub mod models;
pub mod session;
pub mod store;
pub mod traits;
pub mod validator;
pub mod view;

// Re-exporting for easier access in other crates
pub use context::*;
pub use error::*;
pub use models::*;
pub use session::*;
pub use store::*;
pub use traits::*;
pub use validator::*;
pub use view::*;
