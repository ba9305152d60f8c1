//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **Menu Types** - The parsed menu returned by the server
//! - **Page Types** - Which section of the page is showing
//! - **API Types** - Upload response structure
//! - **Error Types** - Frontend error handling

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// =============================================================================
// Menu Types
// =============================================================================

/// Item price as sent by the server (a JSON number).
pub type Price = f64;

/// A single purchasable dish.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Dish name
    pub name: String,
    /// Short description (may be empty)
    #[serde(default)]
    pub desc: String,
    /// Unit price
    pub price: Price,
}

/// Category name to items, in document order.
pub type Menu = IndexMap<String, Vec<MenuItem>>;

/// Identifies one menu entry by its category and position.
///
/// Rendered as `{category}_{index}`, which is also the suffix of the
/// item's quantity display id.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ItemId {
    pub category: String,
    pub index: usize,
}

impl ItemId {
    pub fn new(category: impl Into<String>, index: usize) -> Self {
        Self {
            category: category.into(),
            index,
        }
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.category, self.index)
    }
}

// =============================================================================
// Page Types
// =============================================================================

/// Progress of the upload flow; decides which section is visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UploadPhase {
    /// Upload form showing
    #[default]
    Idle,
    /// Request in flight, spinner showing
    Uploading,
    /// Menu rendered
    Loaded,
}

impl UploadPhase {
    pub fn shows_upload_form(self) -> bool {
        self == UploadPhase::Idle
    }

    pub fn shows_spinner(self) -> bool {
        self == UploadPhase::Uploading
    }

    /// Menu and cart toggle are visible.
    pub fn shows_menu(self) -> bool {
        self == UploadPhase::Loaded
    }
}

// =============================================================================
// API Response Types
// =============================================================================

/// Response from the `/upload` endpoint.
///
/// The server sends `{success, menu}` on success and `{error}` (with a 4xx
/// or 5xx status) otherwise.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub menu: Option<Menu>,
    #[serde(default)]
    pub error: Option<String>,
}

impl UploadResponse {
    /// Resolve the response into a menu or the server's error.
    pub fn into_menu(self) -> AppResult<Menu> {
        match (self.success, self.menu) {
            (true, Some(menu)) => Ok(menu),
            _ => Err(AppError::Server(
                self.error.unwrap_or_else(|| "Unknown error".to_string()),
            )),
        }
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// The `Display` text of each variant is exactly what the user sees in
/// the alert.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum AppError {
    /// Upload requested with no file chosen.
    #[error("Please select a PDF file first!")]
    NoFile,

    /// Add-to-cart with the stepper at zero.
    #[error("Please select quantity first!")]
    EmptyQuantity,

    /// File rejected before upload.
    #[error("{0}")]
    InvalidFile(String),

    /// File exceeds the upload limit.
    #[error("File is too large ({size} bytes, limit is {limit} bytes)")]
    FileTooLarge { size: u64, limit: u64 },

    /// The server answered with an error (or without a menu).
    #[error("Error: {0}")]
    Server(String),

    /// Network/HTTP or decoding failure.
    #[error("Error uploading file: {0}")]
    Transport(String),
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_id_renders_category_and_index() {
        assert_eq!(ItemId::new("Starters", 2).to_string(), "Starters_2");
    }

    #[test]
    fn success_response_yields_menu_in_document_order() {
        let json = r#"{
            "success": true,
            "menu": {
                "Starters": [
                    {"name": "Samosa", "desc": "Crisp pastry", "price": 40},
                    {"name": "Paneer Tikka", "desc": "Grilled cottage cheese", "price": 180}
                ],
                "Desserts": [
                    {"name": "Gulab Jamun", "price": 60}
                ]
            }
        }"#;

        let response: UploadResponse = serde_json::from_str(json).unwrap();
        let menu = response.into_menu().unwrap();

        let categories: Vec<&str> = menu.keys().map(String::as_str).collect();
        assert_eq!(categories, ["Starters", "Desserts"]);
        assert_eq!(menu["Starters"][1].price, 180.0);
        assert_eq!(menu["Desserts"][0].desc, "");
    }

    #[test]
    fn error_response_surfaces_server_message() {
        let response: UploadResponse =
            serde_json::from_str(r#"{"error": "Could not extract text from PDF"}"#).unwrap();

        let err = response.into_menu().unwrap_err();
        assert_eq!(err, AppError::Server("Could not extract text from PDF".into()));
        assert_eq!(err.to_string(), "Error: Could not extract text from PDF");
    }

    #[test]
    fn success_without_menu_is_an_error() {
        let response: UploadResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert_eq!(
            response.into_menu().unwrap_err().to_string(),
            "Error: Unknown error"
        );
    }

    #[test]
    fn alert_texts() {
        assert_eq!(AppError::NoFile.to_string(), "Please select a PDF file first!");
        assert_eq!(AppError::EmptyQuantity.to_string(), "Please select quantity first!");
        assert_eq!(
            AppError::Transport("HTTP request failed".into()).to_string(),
            "Error uploading file: HTTP request failed"
        );
    }
}
