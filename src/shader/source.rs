//! Shader Stages, Sources and Feature Flags

use bitflags::bitflags;

/// The compilation unit a piece of shader text belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    /// The stage marker emitted as a `#define` so portable source can
    /// branch on the stage it is compiled as.
    #[must_use]
    pub fn marker_define(self) -> &'static str {
        match self {
            Self::Vertex => "VERT",
            Self::Fragment => "FRAG",
        }
    }

    /// The portable entry-point name this stage uses. A rename define maps
    /// it back to `main` for the driver compiler.
    #[must_use]
    pub fn entry_point(self) -> &'static str {
        match self {
            Self::Vertex => "mainVS",
            Self::Fragment => "mainPS",
        }
    }
}

/// A stage-tagged raw GLSL source string in the portable dialect.
///
/// The text may use the portable sampler macros (`PD_SAMPLER_2D`,
/// `PU_SAMPLER_2D`, `PP_SAMPLER_2D`, `SAMPLER_2D`) and the portable entry
/// points (`mainVS`/`mainPS`); the preprocessor resolves both per backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderSource {
    pub stage: ShaderStage,
    pub text: String,
}

impl ShaderSource {
    /// Tag `text` as vertex-stage source.
    #[must_use]
    pub fn vertex(text: impl Into<String>) -> Self {
        Self {
            stage: ShaderStage::Vertex,
            text: text.into(),
        }
    }

    /// Tag `text` as fragment-stage source.
    #[must_use]
    pub fn fragment(text: impl Into<String>) -> Self {
        Self {
            stage: ShaderStage::Fragment,
            text: text.into(),
        }
    }
}

bitflags! {
    /// Named feature flags influencing shader code generation.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct ShaderFeatures: u32 {
        /// Multiple render targets: extra output declarations, and the
        /// draw-buffers accumulation rewrite on legacy dialects.
        const MRT = 1 << 0;
    }
}
