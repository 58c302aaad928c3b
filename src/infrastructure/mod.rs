//! Infrastructure helpers for the host environment.

pub mod paths;

pub use paths::expand_tilde;
