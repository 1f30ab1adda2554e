//! SKU Admin UI Library
//!
//! Browser admin panel for SKU planning records: a login screen gated by a
//! superuser session token, and an editable table backed by the `/sku` REST
//! resource.
//!
//! # Modules
//!
//! - [`app`]: Root application component
//! - [`client`]: Backend client abstraction (`AdminApi`, `HttpClient`)
//! - [`components`]: UI components (login screen, SKU table, add form)
//! - [`config`]: Runtime configuration read from the host page
//! - [`controller`]: User operations, independent of the DOM
//! - [`dialogs`]: Alert and confirmation prompts
//! - [`session`]: Session token storage
//! - [`state`]: Global reactive state

pub mod app;
pub mod client;
pub mod components;
pub mod config;
pub mod controller;
pub mod dialogs;
pub mod session;
pub mod state;

pub use app::App;
