//! Shader Preprocessing
//!
//! Everything between a portable GLSL source string and the
//! backend-specific text a GPU program is built from:
//!
//! - [`source`] — stage tagging, feature flags
//! - [`defines`] — ordered `#define` maps
//! - [`preprocess`] — the staged text transformation pipeline
//! - [`program`] — paired vertex+fragment preprocessing and cache keys
//! - [`reflect`] — uniform/sampler name extraction

pub mod defines;
pub mod preprocess;
pub mod program;
pub mod reflect;
pub mod source;

pub use defines::{DefineMap, DefineValue};
pub use preprocess::{preprocess, strip_comments};
pub use program::{preprocess_program, ProgramDesc, ProgramSources};
pub use reflect::{reflect_uniforms, ShaderReflection};
pub use source::{ShaderFeatures, ShaderSource, ShaderStage};
