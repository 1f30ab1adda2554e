//! UI Components
//!
//! This module contains all UI components organized by feature:
//! - `login`: Sign-in screen
//! - `admin`: SKU table, add form and header
//! - `common`: Shared/reusable components

pub mod admin;
pub mod common;
pub mod login;
