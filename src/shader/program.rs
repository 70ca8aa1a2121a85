//! Program-Level Preprocessing
//!
//! Pairs vertex and fragment preprocessing into one result, keeping the
//! raw sources alongside the transformed ones. The raw text is what a
//! material stores and diagnostics print; the preprocessed text is what
//! the GPU program is built from and what the cache key hashes.

use xxhash_rust::xxh3::xxh3_128;

use crate::errors::Result;
use crate::shader::defines::DefineMap;
use crate::shader::preprocess::preprocess;
use crate::shader::source::{ShaderFeatures, ShaderSource};
use crate::vendor::VendorInfo;

/// Original and preprocessed sources for one vertex+fragment pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramSources {
    /// Raw vertex source as supplied.
    pub vert: String,
    /// Raw fragment source as supplied.
    pub frag: String,
    /// Backend-ready vertex source.
    pub preprocessed_vert: String,
    /// Backend-ready fragment source.
    pub preprocessed_frag: String,
}

impl ProgramSources {
    /// xxh3-128 of both preprocessed stages, suitable as a program/module
    /// cache key. Equal preprocessed text yields an equal key regardless
    /// of the raw sources it came from.
    #[must_use]
    pub fn cache_key(&self) -> u128 {
        let mut buf = String::with_capacity(
            self.preprocessed_vert.len() + self.preprocessed_frag.len() + 1,
        );
        buf.push_str(&self.preprocessed_vert);
        buf.push('\u{0}');
        buf.push_str(&self.preprocessed_frag);
        xxh3_128(buf.as_bytes())
    }
}

/// Preprocess a vertex+fragment pair with shared defines and features.
pub fn preprocess_program(
    vendor: &VendorInfo,
    vert: &str,
    frag: &str,
    defines: &DefineMap,
    features: ShaderFeatures,
) -> Result<ProgramSources> {
    let preprocessed_vert = preprocess(vendor, &ShaderSource::vertex(vert), defines, features)?;
    let preprocessed_frag = preprocess(vendor, &ShaderSource::fragment(frag), defines, features)?;
    Ok(ProgramSources {
        vert: vert.to_string(),
        frag: frag.to_string(),
        preprocessed_vert,
        preprocessed_frag,
    })
}

/// Convenience bag for building a program from shared parts.
///
/// `both` models textual inclusion: it is prepended verbatim to each stage
/// source before preprocessing (shared declarations, utility functions).
/// Not a module system.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgramDesc {
    pub both: Option<String>,
    pub vert: String,
    pub frag: String,
    pub defines: DefineMap,
    pub features: ShaderFeatures,
}

impl ProgramDesc {
    /// Run the preprocessor on both stages, with `both` prepended to each.
    pub fn preprocess(&self, vendor: &VendorInfo) -> Result<ProgramSources> {
        match &self.both {
            Some(shared) => {
                let vert = format!("{shared}\n{}", self.vert);
                let frag = format!("{shared}\n{}", self.frag);
                preprocess_program(vendor, &vert, &frag, &self.defines, self.features)
            }
            None => {
                preprocess_program(vendor, &self.vert, &self.frag, &self.defines, self.features)
            }
        }
    }
}
