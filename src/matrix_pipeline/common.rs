//! Common utilities module
//!
//! This module contains shared utilities used across the matrix pipeline.

pub mod error;

pub use error::{MatrixError, Result};
