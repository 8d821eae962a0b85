pub mod algorithms;
pub mod error;
pub mod probability;
pub mod scalar_field;

// Re-exports für einfache Verwendung
pub use error::{MathError, MathResult};
