//! Dense tensor implementation
//!
//! The container and its operations are split by concern.

// Core type definition
pub mod types;

mod comparison;
pub mod display;
mod indexing;

// Supporting modules
pub mod tensor_traits;

// Re-export the main type
pub use display::render_elements;
pub use types::Tensor;
