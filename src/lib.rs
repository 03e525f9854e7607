//! # quickpaste
//!
//! An anonymous, ephemeral text-paste service.
//!
//! Clients `POST` text and receive a short opaque identifier; anyone holding
//! the identifier can `GET` the text back or `DELETE` it. No accounts, no
//! listing, no expiry.
//!
//! TLS, rate limiting, and body-size limits belong to the reverse proxy in
//! front of the service.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use quickpaste::{Server, paste, store::MemoryStore};
//!
//! #[tokio::main]
//! async fn main() {
//!     let app = paste::app(Arc::new(MemoryStore::new()));
//!     Server::bind("0.0.0.0:3000".parse().unwrap())
//!         .await
//!         .unwrap()
//!         .serve(app)
//!         .await
//!         .unwrap();
//! }
//! ```
//!
//! ```text
//! $ curl --data-binary 'hello' localhost:3000/
//! q0Gd3Vz1
//! $ curl localhost:3000/q0Gd3Vz1
//! hello
//! $ curl -X DELETE localhost:3000/q0Gd3Vz1
//! Deleted
//! ```

mod error;
mod handler;
mod method;
mod request;
mod response;
mod router;
mod server;
mod status;

pub mod config;
pub mod key;
pub mod paste;
pub mod store;

pub use error::Error;
pub use handler::Handler;
pub use key::{InvalidKey, PasteKey};
pub use method::Method;
pub use request::Request;
pub use response::{IntoResponse, Response, ResponseBuilder};
pub use router::Router;
pub use server::Server;
pub use status::Status;
