//! Material-Side Resource Descriptions
//!
//! Core data structures a renderer consumes, with no GPU objects behind
//! them:
//! - `RenderStates`: the full per-draw pipeline state record
//! - `MaterialValue`: scalar/vector/matrix/array/texture uniform values
//! - `Texture`: shared handle with a loaded-notification flag
//! - `Material`: live state description with dirty-flag bookkeeping

pub mod material;
pub mod render_state;
pub mod texture;
pub mod uniform;

pub use material::{Material, MaterialDescriptor, MaterialWatcher};
pub use render_state::RenderStates;
pub use texture::Texture;
pub use uniform::MaterialValue;
