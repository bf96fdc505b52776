//! Tonal harmony WASM API
//!
//! This module provides the JavaScript-facing API for key validation,
//! key enumeration and key signature queries.
//!
//! # Module Structure
//!
//! - `helpers`: Shared utilities for serialization, input parsing, error handling, and logging
//! - `types`: Serializable result views
//! - `harmony`: The exported key and key signature functions

pub mod helpers;
pub mod types;
pub mod harmony;

pub use harmony::{is_valid_key, get_valid_keys, get_key_signature, is_in_key_signature, describe_tonality};
