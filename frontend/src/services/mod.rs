//! Browser-facing services.
//!
//! # Services
//!
//! - [`upload`] - PDF upload to the menu parsing endpoint
//! - [`notify`] - User-facing alerts behind the [`Notifier`] trait

pub mod upload;
pub mod notify;

pub use upload::*;
pub use notify::*;
