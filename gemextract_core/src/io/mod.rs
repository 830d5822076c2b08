//! Module for reading models and writing extraction results
pub mod gpr_parse;
pub mod json;
pub mod tabular;
