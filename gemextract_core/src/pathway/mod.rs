//! Pathway extraction from a reaction network
//!
//! The pipeline runs in a fixed order:
//! 1. [`classify`](classify::classify) sorts reactions into pathway phases by keyword,
//! 2. [`build_core_set`](core_set::build_core_set) merges in auxiliary reactions by id,
//! 3. [`verify`](verify::verify) and [`extract`](evidence::extract) read the result to
//!    produce compartment statistics, phase status and the gene evidence index.
//!
//! [`extract_pathway`](pipeline::extract_pathway) runs all of them and gathers the
//! diagnostics.

pub mod classify;
pub mod core_set;
pub mod evidence;
pub mod pipeline;
pub mod verify;
