//! Shared types for the SKU admin panel
//!
//! This crate contains the platform-independent half of the admin client:
//! - Session token decoding and the client-side admin gate
//! - SKU record wire types and numeric input coercion
//! - Login request/response messages
//! - Add-row form validation

pub mod draft;
pub mod messages;
pub mod sku;
pub mod token;

pub use draft::*;
pub use messages::*;
pub use sku::*;
pub use token::*;
