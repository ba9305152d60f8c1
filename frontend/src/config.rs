//! Application configuration.
//!
//! Centralized configuration for the Menu Cart frontend.
//! Values are compile-time constants; the upload endpoint can be
//! overridden at build time with `MENU_CART_UPLOAD_URL`.

/// Upload endpoint for PDF menus.
///
/// Relative by default so the page talks to the server that served it.
pub const UPLOAD_URL: &str = match option_env!("MENU_CART_UPLOAD_URL") {
    Some(url) => url,
    None => "/upload",
};

/// Multipart form field carrying the PDF.
pub const UPLOAD_FIELD: &str = "pdf_file";

/// Maximum file size for upload (in bytes).
///
/// 16 MB, the server's request limit.
pub const MAX_FILE_SIZE: u64 = 16 * 1024 * 1024;

/// MIME type accepted on drag & drop.
pub const PDF_MIME: &str = "application/pdf";

/// Currency prefix for every displayed price.
pub const CURRENCY_SYMBOL: &str = "₹";

/// Placeholder shown when the cart holds nothing.
pub const EMPTY_CART_MESSAGE: &str = "Your cart is empty";

/// Element ids the page exposes.
///
/// These are stable hooks for styling and for anything scripting the page.
pub mod ids {
    pub const PDF_FILE: &str = "pdfFile";
    pub const UPLOAD_SECTION: &str = "uploadSection";
    pub const LOADING_SECTION: &str = "loadingSection";
    pub const MENU_SECTION: &str = "menuSection";
    pub const MENU_CONTENT: &str = "menuContent";
    pub const CART_SIDEBAR: &str = "cartSidebar";
    pub const CART_ITEMS: &str = "cartItems";
    pub const CART_TOTAL: &str = "cartTotal";
    pub const CART_BADGE: &str = "cartBadge";
    pub const CART_TOGGLE: &str = "cartToggle";
}
