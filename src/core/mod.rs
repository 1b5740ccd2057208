//! Core functionality for loading, fixing and saving the document

pub mod config;
pub mod document;
pub mod prd_fixes;
pub mod substitution;
