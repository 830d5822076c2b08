//! Module providing the in-memory genome-scale metabolic model and the read-only view the
//! pathway extraction works against.

pub mod gene;
pub mod metabolite;
pub mod model;
pub mod reaction;
pub mod view;
