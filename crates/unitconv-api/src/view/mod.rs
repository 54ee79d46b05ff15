//! Page rendering.
//!
//! Handlers only ever see the [`PageRenderer`] trait; the HTML itself lives
//! in [`html`].

pub mod html;

pub use html::HtmlRenderer;

use std::fmt::Debug;

use unitconv_core::{AppResult, ViewState};

/// Turns a [`ViewState`] into a complete HTML document.
pub trait PageRenderer: Debug + Send + Sync {
    /// Render the page for `view`.
    fn render(&self, view: &ViewState) -> AppResult<String>;
}
