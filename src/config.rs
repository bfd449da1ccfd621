//! Configuration management for the Historian's Bookshelf CLI.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. It provides a centralized way to manage application
//! configuration including the Gemini API credentials, endpoint and model selection.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use dotenv;
use std::{env, path::PathBuf};

/// Default base URL of the Gemini generateContent REST endpoint.
pub const DEFAULT_GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model used for recommendation requests.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `shelfcli/.env`. This allows users to store
/// the API key securely without hardcoding sensitive values.
///
/// A missing `.env` file is not an error: all configuration may be supplied
/// through ordinary environment variables instead. A missing API key is only
/// detected (and fatal) when the recommendation client is constructed.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/shelfcli/.env`
/// - macOS: `~/Library/Application Support/shelfcli/.env`
/// - Windows: `%LOCALAPPDATA%/shelfcli/.env`
///
/// # Returns
///
/// Returns `Ok(())` if the environment is set up, or an error string if
/// directory creation fails.
///
/// # Example
///
/// ```
/// use shelfcli::config;
///
/// #[tokio::main]
/// async fn main() {
///     if let Err(e) = config::load_env().await {
///         eprintln!("Configuration error: {}", e);
///     }
/// }
/// ```
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("shelfcli/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    // The file is optional; environment variables win either way.
    let _ = dotenv::from_path(path);
    Ok(())
}

/// Returns the Gemini API key used to authenticate recommendation requests.
///
/// Retrieves the `GEMINI_API_KEY` environment variable. The key is the single
/// credential of the application; its absence is a fatal startup condition
/// surfaced before any request is attempted.
///
/// # Errors
///
/// Returns an error message if the `GEMINI_API_KEY` environment variable is
/// not set.
///
/// # Example
///
/// ```
/// let key = gemini_api_key()?; // e.g., "AIza..."
/// ```
pub fn gemini_api_key() -> Result<String, String> {
    env::var("GEMINI_API_KEY").map_err(|_| "GEMINI_API_KEY must be set".to_string())
}

/// Returns the Gemini API base URL.
///
/// Retrieves the `GEMINI_API_URL` environment variable, falling back to the
/// public generateContent endpoint when unset. Overriding the URL is mainly
/// useful for routing through a proxy.
///
/// # Example
///
/// ```
/// let url = gemini_api_url(); // e.g., "https://generativelanguage.googleapis.com/v1beta"
/// ```
pub fn gemini_api_url() -> String {
    env::var("GEMINI_API_URL").unwrap_or_else(|_| DEFAULT_GEMINI_API_URL.to_string())
}

/// Returns the Gemini model identifier used for recommendation requests.
///
/// Retrieves the `GEMINI_MODEL` environment variable, falling back to the
/// default flash model when unset.
///
/// # Example
///
/// ```
/// let model = gemini_model(); // e.g., "gemini-2.5-flash"
/// ```
pub fn gemini_model() -> String {
    env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string())
}
