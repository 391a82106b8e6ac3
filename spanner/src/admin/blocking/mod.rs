//! Blocking variants of the admin client, the operation handle and the paginator.
//!
//! The blocking client owns a tokio runtime and must not be used from within an async context.

pub mod database_admin_client;
pub mod pager;

pub use longrunning::blocking::Operation;
