//! JSON document tests
//!
//! Loading stores from JSON text and values, and exporting them back.

mod document_tests;
mod export_tests;
