//! Texture Handles
//!
//! A [`Texture`] is a cheap shared handle to an externally loaded texture
//! resource. This crate never allocates GPU memory; the handle exists so
//! materials can reference textures by identity and so the loading system
//! can flip the `loaded` flag when pixel data arrives (possibly from
//! another thread).

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use uuid::Uuid;

#[derive(Debug)]
struct TextureInner {
    uuid: Uuid,
    name: String,
    format: wgpu::TextureFormat,
    loaded: AtomicBool,
}

/// Shared texture handle. `Clone` clones the handle, not the resource;
/// equality is identity.
#[derive(Debug, Clone)]
pub struct Texture {
    inner: Arc<TextureInner>,
}

impl Texture {
    /// Create a handle with the default `Rgba8UnormSrgb` format.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_format(name, wgpu::TextureFormat::Rgba8UnormSrgb)
    }

    /// Create a handle with an explicit format.
    #[must_use]
    pub fn with_format(name: impl Into<String>, format: wgpu::TextureFormat) -> Self {
        Self {
            inner: Arc::new(TextureInner {
                uuid: Uuid::new_v4(),
                name: name.into(),
                format,
                loaded: AtomicBool::new(false),
            }),
        }
    }

    #[inline]
    #[must_use]
    pub fn uuid(&self) -> Uuid {
        self.inner.uuid
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    #[inline]
    #[must_use]
    pub fn format(&self) -> wgpu::TextureFormat {
        self.inner.format
    }

    /// Whether pixel data has arrived.
    #[inline]
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.inner.loaded.load(Ordering::Acquire)
    }

    /// Flip the loaded flag. Called by the loading system; materials react
    /// through [`Material::notify_texture_loaded`](crate::Material::notify_texture_loaded).
    pub fn mark_loaded(&self) {
        self.inner.loaded.store(true, Ordering::Release);
    }
}

impl PartialEq for Texture {
    fn eq(&self, other: &Self) -> bool {
        self.inner.uuid == other.inner.uuid
    }
}

impl Eq for Texture {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_identity_and_state() {
        let tex = Texture::new("albedo");
        let alias = tex.clone();
        assert_eq!(tex, alias);
        assert!(!alias.is_loaded());

        tex.mark_loaded();
        assert!(alias.is_loaded());
    }

    #[test]
    fn distinct_textures_are_unequal() {
        assert_ne!(Texture::new("a"), Texture::new("a"));
    }
}
