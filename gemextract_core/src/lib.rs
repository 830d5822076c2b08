//! Core rust implementation of gemextract, a crate for pulling a curated pathway out of a
//! genome-scale metabolic model and collecting the genes behind it.

pub mod configuration;
pub mod io;
pub mod metabolic_model;
pub mod pathway;
pub mod report;
