//! Store integration tests
//!
//! Covers the path operations on `Store`, the builder and mapping
//! constructors, and case-insensitive stores.

mod builder_tests;
