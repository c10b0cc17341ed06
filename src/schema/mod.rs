//! Structural type inference
//!
//! Derives TypeScript-style interface declarations from sampled JSON
//! responses.
//!
//! # Features
//!
//! - **Tagged Walk**: Classifies each value by its JSON variant
//! - **Array Sampling**: Array element types come from the first element only
//! - **Empty Arrays**: Rendered as `any[]`
//! - **Nested Objects**: Flattened to `object`, or expanded into child
//!   interfaces when enabled

mod inference;
mod types;

pub use inference::{infer_interface, render_declarations, InterfaceInferrer};
pub use types::{InterfaceDeclaration, TypeExpr};
