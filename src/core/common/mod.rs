pub mod error;
pub use error::ProximaError;
