//! Generic sequence-alignment primitives shared by the analysis services.

pub mod asof;

pub use asof::align_last_known;
