//! Render State Record
//!
//! [`RenderStates`] is the full per-draw pipeline state a material
//! describes: culling, blending, depth, stencil, wireframe, and the two
//! shader source strings. A renderer translates it into backend pipeline
//! objects; nothing here touches the GPU.
//!
//! `RenderStates::default()` is the shared baseline every material starts
//! from. It is an explicit immutable value, not hidden global state;
//! construction-time overrides use struct update syntax:
//!
//! ```rust,ignore
//! use glint::RenderStates;
//!
//! let states = RenderStates {
//!     depth_write: false,
//!     blend_src: wgpu::BlendFactor::One,
//!     ..RenderStates::default()
//! };
//! ```
//!
//! # Defaults
//!
//! | Field              | Default                 |
//! |--------------------|-------------------------|
//! | `cull_mode`        | `Some(Face::Back)`      |
//! | `front_face`       | `Ccw`                   |
//! | blend color        | `Add, SrcAlpha, OneMinusSrcAlpha` |
//! | blend alpha        | `Add, One, OneMinusSrcAlpha`      |
//! | `depth_test`       | `true`                  |
//! | `depth_write`      | `true`                  |
//! | `depth_compare`    | `LessEqual`             |
//! | stencil            | disabled, `Always`/`Keep`, ref 0 |
//! | `polygon_offset`   | `false`                 |
//! | `dithering`        | `false`                 |
//! | wireframe          | off, white, width 1.0   |
//! | shader sources     | empty                   |

use glam::Vec4;

/// Per-draw pipeline state plus the shader sources that render with it.
///
/// Field values are taken as-is; nothing validates combinations here.
/// Invalid state surfaces as a backend error at pipeline build time,
/// outside this crate.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderStates {
    // === Rasterizer ===
    /// Which faces to cull, `None` to draw both sides.
    pub cull_mode: Option<wgpu::Face>,
    /// Winding order that counts as front-facing.
    pub front_face: wgpu::FrontFace,

    // === Blending ===
    pub blend_color_op: wgpu::BlendOperation,
    pub blend_src: wgpu::BlendFactor,
    pub blend_dst: wgpu::BlendFactor,
    pub blend_alpha_op: wgpu::BlendOperation,
    pub blend_src_alpha: wgpu::BlendFactor,
    pub blend_dst_alpha: wgpu::BlendFactor,

    // === Depth ===
    pub depth_test: bool,
    pub depth_write: bool,
    pub depth_compare: wgpu::CompareFunction,

    // === Stencil ===
    pub stencil_test: bool,
    pub stencil_write: bool,
    pub stencil_compare: wgpu::CompareFunction,
    pub stencil_pass_op: wgpu::StencilOperation,
    pub stencil_ref: u32,

    // === Misc ===
    pub polygon_offset: bool,
    pub dithering: bool,

    // === Wireframe ===
    /// Wireframe rendering. Toggling this through
    /// [`Material::set_wireframe`](crate::Material::set_wireframe) also
    /// drives the `USE_WIREFRAME` define and the geometry/program dirty
    /// flags.
    pub wireframe: bool,
    pub wireframe_color: Vec4,
    pub wireframe_width: f32,

    // === Shaders ===
    /// Portable-dialect vertex shader source.
    pub vertex_shader: String,
    /// Portable-dialect fragment shader source.
    pub fragment_shader: String,
}

impl Default for RenderStates {
    fn default() -> Self {
        Self {
            cull_mode: Some(wgpu::Face::Back),
            front_face: wgpu::FrontFace::Ccw,
            blend_color_op: wgpu::BlendOperation::Add,
            blend_src: wgpu::BlendFactor::SrcAlpha,
            blend_dst: wgpu::BlendFactor::OneMinusSrcAlpha,
            blend_alpha_op: wgpu::BlendOperation::Add,
            blend_src_alpha: wgpu::BlendFactor::One,
            blend_dst_alpha: wgpu::BlendFactor::OneMinusSrcAlpha,
            depth_test: true,
            depth_write: true,
            depth_compare: wgpu::CompareFunction::LessEqual,
            stencil_test: false,
            stencil_write: false,
            stencil_compare: wgpu::CompareFunction::Always,
            stencil_pass_op: wgpu::StencilOperation::Keep,
            stencil_ref: 0,
            polygon_offset: false,
            dithering: false,
            wireframe: false,
            wireframe_color: Vec4::ONE,
            wireframe_width: 1.0,
            vertex_shader: String::new(),
            fragment_shader: String::new(),
        }
    }
}
