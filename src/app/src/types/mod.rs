//! Domain-based type organization
//!
//! Types are organized by domain to match the structure in `update/`:
//! - bot: Messages received from the device link
//! - config: Configuration document and interface descriptors
//! - form: Draft fields and submission validation
//! - session: Owner of the live configuration document
//! - settings: Runtime settings of the core

pub mod bot;
pub mod config;
pub mod form;
pub mod session;
pub mod settings;

pub use bot::*;
pub use config::*;
pub use form::*;
pub use session::*;
pub use settings::*;
