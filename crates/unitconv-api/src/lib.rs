//! # unitconv-api
//!
//! HTTP layer for the unit converter built on Axum.
//!
//! Provides the per-category form pages, the root redirect, a health probe,
//! form extraction, the HTML renderer, middleware (logging, compression,
//! tracing), and error mapping.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;
pub mod view;

pub use router::build_router;
pub use state::AppState;
pub use view::{HtmlRenderer, PageRenderer};
