pub mod clustering;
pub mod spectral;
