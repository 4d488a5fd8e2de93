//! Playlist Top Tracks Service Library
//!
//! This library implements a small web service that accepts a Spotify playlist
//! link, drains the playlist's track listing through the Spotify Web API and
//! returns the five most popular tracks as JSON.
//!
//! # Modules
//!
//! - `api` - HTTP API endpoints served by the application
//! - `config` - Configuration management and environment variables
//! - `management` - Access-token acquisition and caching
//! - `server` - HTTP server setup and routing
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Playlist link parsing and ranking helpers
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use tokio::sync::Mutex;
//!
//! use playtop::{config, management::TokenManager, server};
//!
//! #[tokio::main]
//! async fn main() -> playtop::Res<()> {
//!     config::load_env().await?;
//!     let token_manager = Arc::new(Mutex::new(TokenManager::new()));
//!     server::start_api_server(token_manager).await;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod management;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Provides a standard error handling pattern throughout the application
/// using a boxed dynamic error trait object while maintaining Send + Sync
/// bounds for async contexts.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// The macro accepts the same arguments as `println!`, supporting format
/// strings and interpolation.
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// This macro terminates the process with exit code 1 and should only be
/// used for fatal errors during startup where recovery is not possible.
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues that should be visible in the service log
/// without terminating the process.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
