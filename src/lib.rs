#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::too_many_arguments)]

//! Portable GLSL preprocessing and material state description.
//!
//! One shader source, written in a portable GLSL dialect, is rewritten per
//! backend by [`preprocess`]: explicit-binding layouts for WebGPU-style
//! targets, plain GLSL ES 3.00 for WebGL2-style targets, and a full
//! downgrade to GLSL ES 1.00 for legacy targets. A [`VendorInfo`] record
//! names the target; [`Material`] holds the render-state description and
//! dirty flags a renderer polls. Nothing in this crate talks to a GPU.

pub mod errors;
pub mod resources;
pub mod shader;
pub mod vendor;

pub use errors::{GlintError, Result};
pub use resources::{
    Material, MaterialDescriptor, MaterialValue, MaterialWatcher, RenderStates, Texture,
};
pub use shader::{
    preprocess, preprocess_program, reflect_uniforms, strip_comments, DefineMap, DefineValue,
    ProgramDesc, ProgramSources, ShaderFeatures, ShaderReflection, ShaderSource, ShaderStage,
};
pub use vendor::{GlslVersion, VendorInfo, ViewportOrigin};
