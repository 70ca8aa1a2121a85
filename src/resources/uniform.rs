//! Uniform Values
//!
//! [`MaterialValue`] is the vocabulary of values a material can assign to
//! a named uniform: scalars, vectors, matrices, arrays of them, or a
//! texture handle. Texture values are routed into the material's texture
//! map instead of its uniform map; everything else exposes a tightly
//! packed byte view for renderer-side buffer uploads (std140/std430
//! padding is the packer's concern, not this crate's).

use glam::{Mat3, Mat4, Vec2, Vec3, Vec4};

use crate::resources::texture::Texture;

/// One uniform value.
#[derive(Debug, Clone, PartialEq)]
pub enum MaterialValue {
    Float(f32),
    Int(i32),
    Vec2(Vec2),
    Vec3(Vec3),
    Vec4(Vec4),
    Mat3(Mat3),
    Mat4(Mat4),
    FloatArray(Vec<f32>),
    Vec4Array(Vec<Vec4>),
    Mat4Array(Vec<Mat4>),
    /// A texture handle. Stored in the material's texture map, never in
    /// its uniform buffer data.
    Texture(Texture),
}

impl MaterialValue {
    /// Whether this value is a texture handle.
    #[inline]
    #[must_use]
    pub fn is_texture(&self) -> bool {
        matches!(self, Self::Texture(_))
    }

    /// Size of the tightly packed byte view, 0 for textures.
    #[must_use]
    pub fn byte_size(&self) -> usize {
        self.as_bytes().map_or(0, <[u8]>::len)
    }

    /// Tightly packed bytes of the value, `None` for textures.
    #[must_use]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Float(v) => Some(bytemuck::bytes_of(v)),
            Self::Int(v) => Some(bytemuck::bytes_of(v)),
            Self::Vec2(v) => Some(bytemuck::bytes_of(v)),
            Self::Vec3(v) => Some(bytemuck::bytes_of(v)),
            Self::Vec4(v) => Some(bytemuck::bytes_of(v)),
            Self::Mat3(v) => Some(bytemuck::bytes_of(v)),
            Self::Mat4(v) => Some(bytemuck::bytes_of(v)),
            Self::FloatArray(v) => Some(bytemuck::cast_slice(v)),
            Self::Vec4Array(v) => Some(bytemuck::cast_slice(v)),
            Self::Mat4Array(v) => Some(bytemuck::cast_slice(v)),
            Self::Texture(_) => None,
        }
    }
}

impl From<f32> for MaterialValue {
    fn from(v: f32) -> Self {
        Self::Float(v)
    }
}

impl From<i32> for MaterialValue {
    fn from(v: i32) -> Self {
        Self::Int(v)
    }
}

impl From<Vec2> for MaterialValue {
    fn from(v: Vec2) -> Self {
        Self::Vec2(v)
    }
}

impl From<Vec3> for MaterialValue {
    fn from(v: Vec3) -> Self {
        Self::Vec3(v)
    }
}

impl From<Vec4> for MaterialValue {
    fn from(v: Vec4) -> Self {
        Self::Vec4(v)
    }
}

impl From<Mat3> for MaterialValue {
    fn from(v: Mat3) -> Self {
        Self::Mat3(v)
    }
}

impl From<Mat4> for MaterialValue {
    fn from(v: Mat4) -> Self {
        Self::Mat4(v)
    }
}

impl From<Vec<f32>> for MaterialValue {
    fn from(v: Vec<f32>) -> Self {
        Self::FloatArray(v)
    }
}

impl From<Vec<Vec4>> for MaterialValue {
    fn from(v: Vec<Vec4>) -> Self {
        Self::Vec4Array(v)
    }
}

impl From<Vec<Mat4>> for MaterialValue {
    fn from(v: Vec<Mat4>) -> Self {
        Self::Mat4Array(v)
    }
}

impl From<Texture> for MaterialValue {
    fn from(v: Texture) -> Self {
        Self::Texture(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_sizes_are_tightly_packed() {
        assert_eq!(MaterialValue::Float(1.0).byte_size(), 4);
        assert_eq!(MaterialValue::from(Vec3::ONE).byte_size(), 12);
        assert_eq!(MaterialValue::from(Mat4::IDENTITY).byte_size(), 64);
        assert_eq!(MaterialValue::from(vec![Vec4::ONE; 3]).byte_size(), 48);
    }

    #[test]
    fn textures_have_no_bytes() {
        let value = MaterialValue::from(Texture::new("t"));
        assert!(value.is_texture());
        assert_eq!(value.as_bytes(), None);
        assert_eq!(value.byte_size(), 0);
    }

    #[test]
    fn float_bytes_round_trip() {
        let value = MaterialValue::Float(2.5);
        let bytes = value.as_bytes().unwrap();
        assert_eq!(f32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]), 2.5);
    }
}
