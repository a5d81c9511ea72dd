//! Spotify Web API Proxy Server
//!
//! This library implements a thin HTTP backend that wraps the Spotify Web API
//! for a frontend client: OAuth login and token exchange, token refresh,
//! current-user lookup, album search, and saved-album management. Handlers
//! forward parameters to the upstream API and relay its response or a mapped
//! error status; no state survives a restart.
//!
//! # Modules
//!
//! - `api` - HTTP handlers, one per endpoint group
//! - `config` - Configuration management and environment variables
//! - `error` - Error taxonomy and HTTP status mapping
//! - `management` - In-memory token store shared across requests
//! - `server` - Router, refresh middleware and serve loop
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions

pub mod api;
pub mod config;
pub mod error;
pub mod management;
pub mod server;
pub mod spotify;
pub mod types;

/// A convenient Result type alias for operations that may fail.
///
/// Provides a standard error handling pattern throughout the application
/// using a boxed dynamic error trait object. This allows for flexible
/// error handling while maintaining Send + Sync bounds for async contexts.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// Used for general information and status updates such as server startup
/// and token refresh events.
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Used to provide positive feedback when operations complete successfully,
/// e.g. a finished token exchange.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Used for unrecoverable startup errors such as missing credentials or an
/// unusable listen address. Request handling never calls this; mapped errors
/// are reported with `warning!` instead.
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
/// Used for recoverable issues: failed best-effort refreshes and upstream
/// errors that were mapped to an HTTP error response.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
