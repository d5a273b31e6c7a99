//! Error types for the Herald narration pipeline.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! None of these errors cross the public contract of the narrative generator
//! or the avatar client; both recover locally. Only startup configuration
//! errors reach the binary's `main`.
//!
//! # Examples
//!
//! ```
//! use herald_error::{HeraldResult, HttpError};
//!
//! fn fetch_data() -> HeraldResult<String> {
//!     Err(HttpError::new("Connection refused"))?
//! }
//!
//! match fetch_data() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod delivery;
mod error;
mod http;
mod json;
mod openai;

pub use config::ConfigError;
pub use delivery::{DeliveryError, DeliveryErrorKind};
pub use error::{HeraldError, HeraldErrorKind, HeraldResult};
pub use http::HttpError;
pub use json::JsonError;
pub use openai::{OpenAiError, OpenAiErrorKind, OpenAiResult};
