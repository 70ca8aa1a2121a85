//! Error Types
//!
//! This module defines the error types used throughout the crate.
//!
//! # Overview
//!
//! The shader pipeline is deliberately tolerant: text that does not match a
//! recognized pattern passes through unchanged rather than failing. Only two
//! conditions are hard errors, both covered by [`GlintError`]:
//!
//! - an unrecognized GLSL version string in a backend profile
//! - an explicit-binding backend that reports combined texture/sampler
//!   objects (an unsupported combination)
//!
//! # Usage
//!
//! Fallible public APIs return [`Result<T>`] which is an alias for
//! `std::result::Result<T, GlintError>`.
//!
//! ```rust,ignore
//! use glint::errors::{GlintError, Result};
//!
//! fn build_program() -> Result<()> {
//!     // Operations that may fail return Result
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// The main error type for the crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GlintError {
    /// A GLSL version string that does not name one of the supported
    /// dialects (`100`, `300 es`, `450`).
    #[error("Unknown GLSL version: {0:?}")]
    UnknownGlslVersion(String),

    /// The backend requires explicit binding locations but models textures
    /// and samplers as one combined object. Explicit-binding rewriting
    /// splits `sampler2D` uniforms into texture/sampler pairs and cannot
    /// target a combined model.
    #[error("explicit binding layout requires separate texture and sampler objects")]
    CombinedSamplerBinding,
}

/// Alias for `Result<T, GlintError>`.
pub type Result<T> = std::result::Result<T, GlintError>;
