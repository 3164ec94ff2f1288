pub mod params;
pub mod setup;

pub use params::Params;
