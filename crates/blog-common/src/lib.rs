//! Shared types, text utilities, SEO derivation, and article search for ModernBlog.
//!
//! Every engine here is a pure function over in-memory records: no I/O, no
//! clock reads except the documented "now" fallback for publish dates, and no
//! errors. Configuration loading is the only fallible entry point.

pub mod categories;
pub mod config;
pub mod error;
pub mod extraction;
pub mod hashing;
pub mod head;
pub mod normalization;
pub mod search;
pub mod seo;
pub mod social;
pub mod structured_data;
pub mod tokenization;
pub mod types;
pub mod validation;
