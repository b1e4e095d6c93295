//! Shared helpers: resource limits and output naming.

pub mod validation;
