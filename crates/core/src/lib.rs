//! Client library for the [Telegraph](https://telegra.ph) publishing API.
//!
//! Page bodies are trees of [`Node`]s. [`nodes_from_html`] builds such a tree
//! from an HTML fragment, and [`Client`] publishes it.
//!
//! ```rust
//! use telegraph_core::{PageDraft, nodes_from_html};
//!
//! let nodes = nodes_from_html("<p>Hello, <b>world</b>!</p>").unwrap();
//! let draft = PageDraft::new("Greeting", nodes);
//! assert_eq!(draft.content[0].text_content(), "Hello, world!");
//! ```

#[cfg(feature = "api")]
pub mod client;
pub mod config;
pub mod credentials;
pub mod error;
pub mod html;
pub mod node;
pub mod params;
pub mod types;

#[cfg(feature = "api")]
pub use client::Client;
pub use config::{API_BASE_URL, ClientConfig, ClientConfigBuilder};
pub use credentials::TokenStore;
pub use error::{Result, TelegraphError};
pub use html::{nodes_from_html, nodes_from_html_bytes};
pub use node::{Node, NodeElement};
pub use params::{Params, content_to_json};
pub use types::{Account, AccountField, ApiResponse, Page, PageDraft, PageList, PageViews, ViewsQuery};
