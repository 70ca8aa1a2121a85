//! Backend Capability Profiles
//!
//! A [`VendorInfo`] describes the GPU backend a shader is being prepared
//! for: which GLSL dialect it consumes, whether binding locations must be
//! spelled out explicitly, whether textures and samplers are separate
//! objects, whether multiple render targets are available, and where the
//! viewport origin sits. The record is immutable for the lifetime of a
//! backend session and is consumed by [`preprocess`](crate::shader::preprocess).
//!
//! Profiles are plain data and serde-serializable, so hosts can ship them
//! as config:
//!
//! ```rust,ignore
//! use glint::VendorInfo;
//!
//! let vendor: VendorInfo = serde_json::from_str(profile_json)?;
//! let source = glint::preprocess(&vendor, &shader, &defines, features)?;
//! ```
//!
//! The three stock presets cover the common targets:
//!
//! | Preset     | Dialect      | Bindings | Samplers  | MRT | Origin     |
//! |------------|--------------|----------|-----------|-----|------------|
//! | `webgl1()` | GLSL ES 1.00 | implicit | combined  | no  | lower-left |
//! | `webgl2()` | GLSL ES 3.00 | implicit | combined  | yes | lower-left |
//! | `webgpu()` | GLSL 4.50    | explicit | separate  | yes | upper-left |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{GlintError, Result};

/// The GLSL dialect a backend consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GlslVersion {
    /// GLSL ES 1.00 (WebGL 1). The legacy dialect: no interface blocks,
    /// `attribute`/`varying` keywords, `gl_FragColor` output.
    Es100,
    /// GLSL ES 3.00 (WebGL 2).
    Es300,
    /// GLSL 4.50 (Vulkan-flavored, WebGPU-style backends).
    V450,
}

impl GlslVersion {
    /// The `#version` directive emitted at the top of preprocessed source.
    #[must_use]
    pub fn directive(self) -> &'static str {
        match self {
            Self::Es100 => "#version 100",
            Self::Es300 => "#version 300 es",
            Self::V450 => "#version 450",
        }
    }

    /// `true` only for the oldest supported dialect, GLSL ES 1.00, which
    /// needs the downgrade pass (block flattening, builtin renames).
    #[inline]
    #[must_use]
    pub fn is_legacy(self) -> bool {
        matches!(self, Self::Es100)
    }
}

impl fmt::Display for GlslVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Es100 => "100",
            Self::Es300 => "300 es",
            Self::V450 => "450",
        };
        f.write_str(s)
    }
}

impl FromStr for GlslVersion {
    type Err = GlintError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "100" => Ok(Self::Es100),
            "300" | "300 es" => Ok(Self::Es300),
            "450" => Ok(Self::V450),
            other => Err(GlintError::UnknownGlslVersion(other.to_string())),
        }
    }
}

/// Which corner of the viewport `(0, 0)` maps to.
///
/// GL-family backends are lower-left; WebGPU/Metal/D3D-style backends are
/// upper-left. Shaders that care receive an `ORIGIN_UPPER_LEFT` define.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewportOrigin {
    LowerLeft,
    UpperLeft,
}

/// Immutable capability record for one backend session.
///
/// Unspecified fields in hand-written profiles should start from a preset:
///
/// ```rust,ignore
/// let vendor = VendorInfo {
///     supports_mrt: false,
///     ..VendorInfo::webgl2()
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorInfo {
    /// The GLSL dialect to emit.
    pub glsl_version: GlslVersion,
    /// Whether `layout(set = …, binding = …)` / `layout(location = …)`
    /// qualifiers must be generated for every resource and varying.
    pub explicit_bindings: bool,
    /// Whether textures and samplers are separate shader objects
    /// (WebGPU-style) rather than one combined `sampler2D`.
    pub separate_samplers: bool,
    /// Whether the backend can bind multiple color attachments. Callers
    /// consult this before requesting the MRT shader feature.
    pub supports_mrt: bool,
    /// Viewport origin convention of the backend.
    pub viewport_origin: ViewportOrigin,
}

impl VendorInfo {
    /// WebGL 1: GLSL ES 1.00, combined samplers, single render target.
    #[must_use]
    pub fn webgl1() -> Self {
        Self {
            glsl_version: GlslVersion::Es100,
            explicit_bindings: false,
            separate_samplers: false,
            supports_mrt: false,
            viewport_origin: ViewportOrigin::LowerLeft,
        }
    }

    /// WebGL 2: GLSL ES 3.00, combined samplers, MRT available.
    #[must_use]
    pub fn webgl2() -> Self {
        Self {
            glsl_version: GlslVersion::Es300,
            explicit_bindings: false,
            separate_samplers: false,
            supports_mrt: true,
            viewport_origin: ViewportOrigin::LowerLeft,
        }
    }

    /// WebGPU-style target: GLSL 4.50 with explicit sets/bindings and
    /// separate texture/sampler objects.
    #[must_use]
    pub fn webgpu() -> Self {
        Self {
            glsl_version: GlslVersion::V450,
            explicit_bindings: true,
            separate_samplers: true,
            supports_mrt: true,
            viewport_origin: ViewportOrigin::UpperLeft,
        }
    }
}

impl Default for VendorInfo {
    /// Defaults to the [`webgl2`](Self::webgl2) profile, the middle ground
    /// most portable shaders are written against.
    fn default() -> Self {
        Self::webgl2()
    }
}
