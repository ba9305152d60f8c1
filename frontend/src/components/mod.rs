//! UI Components for the Menu Cart application.
//!
//! This module contains all Leptos components organized by function:
//!
//! # Layout Components
//! - [`Header`] - Title bar with the cart toggle and badge
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadSection`] - PDF file upload with drag & drop
//! - [`LoadingSection`] - Spinner while the menu is being parsed
//! - [`MenuSection`] - Parsed menu with quantity steppers
//! - [`CartSidebar`] - Cart contents, total and remove buttons

mod header;
mod hero;
mod upload;
mod loading;
mod menu;
mod cart;
mod footer;

pub use header::*;
pub use hero::*;
pub use upload::*;
pub use loading::*;
pub use menu::*;
pub use cart::*;
pub use footer::*;
