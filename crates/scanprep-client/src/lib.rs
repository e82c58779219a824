//! Scanprep Client - completion-request submission for normalized payloads
//!
//! This crate packages a normalized image payload from `scanprep-core`
//! into a multimodal chat-completion request and performs the single
//! blocking call to the extraction endpoint.
//!
//! # Module Structure
//!
//! - `request` - Typed request bodies (text instruction + image data URL)
//! - `client` - The blocking HTTP client, constructed explicitly and
//!   passed by handle
//! - `error` - Typed failures instead of a catch-all guard
//!
//! # Usage
//!
//! ```ignore
//! use scanprep_client::{CompletionClient, CompletionRequest, Detail};
//! use scanprep_core::{normalize, NormalizeOptions};
//!
//! let payload = normalize(std::path::Path::new("huge_scan.png"), &NormalizeOptions::new())?;
//! let request = CompletionRequest::extraction(
//!     "gpt-5.1",
//!     "Extract JSON data from this document.",
//!     &payload,
//!     Detail::Auto,
//! );
//!
//! let client = CompletionClient::new("https://api.example.com/v1", api_key)?;
//! let fields = client.extract(&request)?;
//! println!("{fields}");
//! ```

mod client;
mod error;
mod request;

pub use client::CompletionClient;
pub use error::ClientError;
pub use request::{CompletionRequest, ContentPart, Detail, ImageUrl, Message, ResponseFormat};
