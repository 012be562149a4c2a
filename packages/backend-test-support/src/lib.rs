//! Backend test support utilities
//!
//! This crate provides utilities shared by backend unit and integration
//! tests, currently unified logging initialization.

pub mod logging;
