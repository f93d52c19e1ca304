pub mod error;
pub mod math;
pub mod toy;

pub use error::ToyError;
