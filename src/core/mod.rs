pub mod common;
pub mod index;
pub mod scatter;
pub mod types;
pub use self::types::Point;
