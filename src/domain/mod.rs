//! Core domain types and logic.

pub mod bar;
pub mod metric;
pub mod signal;
pub mod value;
pub mod summary;
pub mod config_validation;
pub mod error;
