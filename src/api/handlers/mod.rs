//! HTTP request handlers for API endpoints.

pub mod redirect;
pub mod shorten;

pub use redirect::{create_path_redirect_handler, redirect_handler};
pub use shorten::create_url_handler;
