//! Material State Machine
//!
//! A [`Material`] is the live, mutable description of how something draws:
//! one [`RenderStates`] record, the shader preprocessor defines derived
//! from it, the uniform and texture value maps, and three dirty flags a
//! renderer polls to know what to rebuild:
//!
//! - `program_dirty` — shader source or the wireframe flag changed; the
//!   GPU program must be recompiled.
//! - `texture_dirty` — the texture map changed; bindings must be rebuilt.
//! - `geometry_dirty` — the wireframe flag changed; owning geometry must
//!   rebuild its topology.
//!
//! All flags start `true` so a fresh material builds everything once.
//!
//! Mutation goes through explicit setters so call sites see where side
//! effects happen; none of them can fail, and none of them touch the GPU.
//! Materials do not own the meshes that use them. The owning scene system
//! maintains that relation and passes a [`MaterialWatcher`] into the
//! operations that must notify it; the material only reports its own uuid.

use rustc_hash::FxHashMap;
use uuid::Uuid;

use crate::resources::render_state::RenderStates;
use crate::resources::texture::Texture;
use crate::resources::uniform::MaterialValue;
use crate::shader::defines::DefineMap;
use crate::shader::reflect::reflect_uniforms;

/// Receiver for material state-change notifications.
///
/// Implemented by the scene/render system that tracks which renderable
/// entities use which material. Both methods default to no-ops; `&mut ()`
/// works where no tracking is wanted.
pub trait MaterialWatcher {
    /// A `set_uniforms` batch completed on `material`.
    fn on_material_changed(&mut self, material: Uuid) {
        let _ = material;
    }

    /// A texture referenced by `material` finished loading; dependent
    /// renderable state is stale.
    fn on_render_dirty(&mut self, material: Uuid) {
        let _ = material;
    }
}

impl MaterialWatcher for () {}

/// Construction record for [`Material::new`].
///
/// Fields left at `Default` take the documented [`RenderStates`] baseline:
///
/// ```rust,ignore
/// use glint::{Material, MaterialDescriptor, RenderStates};
///
/// let material = Material::new(MaterialDescriptor {
///     states: RenderStates {
///         fragment_shader: FRAG_SRC.to_string(),
///         ..RenderStates::default()
///     },
///     ..MaterialDescriptor::default()
/// });
/// ```
#[derive(Debug, Clone)]
pub struct MaterialDescriptor {
    pub name: String,
    pub states: RenderStates,
}

impl Default for MaterialDescriptor {
    fn default() -> Self {
        Self {
            name: "Material".to_string(),
            states: RenderStates::default(),
        }
    }
}

/// Live render-state description with dirty-flag bookkeeping.
#[derive(Debug)]
pub struct Material {
    uuid: Uuid,
    name: String,
    states: RenderStates,
    defines: DefineMap,
    uniforms: FxHashMap<String, MaterialValue>,
    textures: FxHashMap<String, Texture>,
    uniform_names: Vec<String>,
    samplers: Vec<String>,
    program_dirty: bool,
    texture_dirty: bool,
    geometry_dirty: bool,
}

impl Material {
    /// Build a material from a descriptor. Seeds the `USE_WIREFRAME`
    /// define from the initial state and immediately runs the compile
    /// step (uniform extraction), even when the shader text is empty.
    #[must_use]
    pub fn new(desc: MaterialDescriptor) -> Self {
        let mut material = Self {
            uuid: Uuid::new_v4(),
            name: desc.name,
            states: desc.states,
            defines: DefineMap::new(),
            uniforms: FxHashMap::default(),
            textures: FxHashMap::default(),
            uniform_names: Vec::new(),
            samplers: Vec::new(),
            program_dirty: true,
            texture_dirty: true,
            geometry_dirty: true,
        };
        material
            .defines
            .set("USE_WIREFRAME", material.states.wireframe);
        material.compile();
        material
    }

    /// Re-extract uniform and sampler names from the fragment shader.
    fn compile(&mut self) {
        let reflection = reflect_uniforms(&self.states.fragment_shader);
        self.uniform_names = reflection.uniforms;
        self.samplers = reflection.samplers;
        log::debug!(
            "compiled material {:?}: {} uniforms, {} samplers",
            self.name,
            self.uniform_names.len(),
            self.samplers.len()
        );
    }

    // ─── Identity & Read Access ──────────────────────────────────────────

    #[inline]
    #[must_use]
    pub fn uuid(&self) -> Uuid {
        self.uuid
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The full render-state record, for renderer translation.
    #[inline]
    #[must_use]
    pub fn states(&self) -> &RenderStates {
        &self.states
    }

    /// Preprocessor defines derived from material state.
    #[inline]
    #[must_use]
    pub fn defines(&self) -> &DefineMap {
        &self.defines
    }

    /// Plain uniform values by name. Disjoint from [`textures`](Self::textures).
    #[inline]
    #[must_use]
    pub fn uniforms(&self) -> &FxHashMap<String, MaterialValue> {
        &self.uniforms
    }

    /// Texture values by uniform name. Disjoint from [`uniforms`](Self::uniforms).
    #[inline]
    #[must_use]
    pub fn textures(&self) -> &FxHashMap<String, Texture> {
        &self.textures
    }

    /// Uniform names extracted from the current fragment shader, in
    /// declaration order.
    #[inline]
    #[must_use]
    pub fn uniform_names(&self) -> &[String] {
        &self.uniform_names
    }

    /// Sampler names extracted from the current fragment shader, in
    /// declaration order.
    #[inline]
    #[must_use]
    pub fn samplers(&self) -> &[String] {
        &self.samplers
    }

    // ─── Dirty Flags ─────────────────────────────────────────────────────

    #[inline]
    #[must_use]
    pub fn program_dirty(&self) -> bool {
        self.program_dirty
    }

    #[inline]
    #[must_use]
    pub fn texture_dirty(&self) -> bool {
        self.texture_dirty
    }

    #[inline]
    #[must_use]
    pub fn geometry_dirty(&self) -> bool {
        self.geometry_dirty
    }

    /// Acknowledge a program rebuild.
    #[inline]
    pub fn clear_program_dirty(&mut self) {
        self.program_dirty = false;
    }

    /// Acknowledge a texture re-bind.
    #[inline]
    pub fn clear_texture_dirty(&mut self) {
        self.texture_dirty = false;
    }

    /// Acknowledge a geometry rebuild.
    #[inline]
    pub fn clear_geometry_dirty(&mut self) {
        self.geometry_dirty = false;
    }

    // ─── Shader Sources ──────────────────────────────────────────────────

    #[inline]
    #[must_use]
    pub fn vertex_shader(&self) -> &str {
        &self.states.vertex_shader
    }

    #[inline]
    #[must_use]
    pub fn fragment_shader(&self) -> &str {
        &self.states.fragment_shader
    }

    /// Replace the vertex shader source. On an actual change, marks the
    /// program dirty and re-runs the compile step.
    pub fn set_vertex_shader(&mut self, source: impl Into<String>) {
        let source = source.into();
        if self.states.vertex_shader != source {
            self.states.vertex_shader = source;
            self.program_dirty = true;
            self.compile();
        }
    }

    /// Replace the fragment shader source. On an actual change, marks the
    /// program dirty and re-extracts uniform and sampler names.
    pub fn set_fragment_shader(&mut self, source: impl Into<String>) {
        let source = source.into();
        if self.states.fragment_shader != source {
            self.states.fragment_shader = source;
            self.program_dirty = true;
            self.compile();
        }
    }

    // ─── Wireframe ───────────────────────────────────────────────────────

    #[inline]
    #[must_use]
    pub fn wireframe(&self) -> bool {
        self.states.wireframe
    }

    /// Toggle wireframe rendering.
    ///
    /// The `USE_WIREFRAME` define mirrors the current value and is
    /// refreshed on every call, even when the value did not change; the
    /// geometry and program dirty flags are set only on an actual change
    /// (wireframe alters both topology and shading).
    pub fn set_wireframe(&mut self, wireframe: bool) {
        self.defines.set("USE_WIREFRAME", wireframe);
        if self.states.wireframe != wireframe {
            self.states.wireframe = wireframe;
            self.geometry_dirty = true;
            self.program_dirty = true;
        }
    }

    // ─── Uniform & Texture Values ────────────────────────────────────────

    /// Apply a batch of uniform assignments.
    ///
    /// Texture values go to the texture map (displacing any plain value
    /// under the same name and marking textures dirty); plain values go to
    /// the uniform map (displacing any texture, which also marks textures
    /// dirty); `None` removes the name from both maps (idempotent when
    /// absent). The two maps stay disjoint by key throughout.
    ///
    /// After the whole batch, `watcher.on_material_changed` fires once
    /// with this material's uuid, synchronously. No GPU work happens
    /// here; this only updates the logical description and dirty flags.
    pub fn set_uniforms<I>(&mut self, entries: I, watcher: &mut dyn MaterialWatcher)
    where
        I: IntoIterator<Item = (String, Option<MaterialValue>)>,
    {
        for (name, value) in entries {
            match value {
                Some(MaterialValue::Texture(texture)) => {
                    self.uniforms.remove(&name);
                    self.textures.insert(name, texture);
                    self.texture_dirty = true;
                }
                Some(value) => {
                    if self.textures.remove(&name).is_some() {
                        self.texture_dirty = true;
                    }
                    self.uniforms.insert(name, value);
                }
                None => {
                    self.uniforms.remove(&name);
                    if self.textures.remove(&name).is_some() {
                        self.texture_dirty = true;
                    }
                }
            }
        }
        watcher.on_material_changed(self.uuid);
    }

    /// Forward a texture-loaded event. Fires `watcher.on_render_dirty`
    /// when the texture is referenced by this material; otherwise a no-op.
    pub fn notify_texture_loaded(&self, texture: &Texture, watcher: &mut dyn MaterialWatcher) {
        if self.textures.values().any(|t| t == texture) {
            watcher.on_render_dirty(self.uuid);
        }
    }

    // ─── Rasterizer State ────────────────────────────────────────────────
    //
    // Plain accessors: read/write the field, no side effects, no
    // validation. Invalid combinations surface at pipeline build time,
    // outside this crate.

    #[inline]
    #[must_use]
    pub fn cull_mode(&self) -> Option<wgpu::Face> {
        self.states.cull_mode
    }

    #[inline]
    pub fn set_cull_mode(&mut self, mode: Option<wgpu::Face>) {
        self.states.cull_mode = mode;
    }

    #[inline]
    #[must_use]
    pub fn front_face(&self) -> wgpu::FrontFace {
        self.states.front_face
    }

    #[inline]
    pub fn set_front_face(&mut self, winding: wgpu::FrontFace) {
        self.states.front_face = winding;
    }

    #[inline]
    #[must_use]
    pub fn polygon_offset(&self) -> bool {
        self.states.polygon_offset
    }

    #[inline]
    pub fn set_polygon_offset(&mut self, enabled: bool) {
        self.states.polygon_offset = enabled;
    }

    #[inline]
    #[must_use]
    pub fn dithering(&self) -> bool {
        self.states.dithering
    }

    #[inline]
    pub fn set_dithering(&mut self, enabled: bool) {
        self.states.dithering = enabled;
    }

    // ─── Blend State ─────────────────────────────────────────────────────

    #[inline]
    #[must_use]
    pub fn blend_color_op(&self) -> wgpu::BlendOperation {
        self.states.blend_color_op
    }

    #[inline]
    pub fn set_blend_color_op(&mut self, op: wgpu::BlendOperation) {
        self.states.blend_color_op = op;
    }

    #[inline]
    #[must_use]
    pub fn blend_src(&self) -> wgpu::BlendFactor {
        self.states.blend_src
    }

    #[inline]
    pub fn set_blend_src(&mut self, factor: wgpu::BlendFactor) {
        self.states.blend_src = factor;
    }

    #[inline]
    #[must_use]
    pub fn blend_dst(&self) -> wgpu::BlendFactor {
        self.states.blend_dst
    }

    #[inline]
    pub fn set_blend_dst(&mut self, factor: wgpu::BlendFactor) {
        self.states.blend_dst = factor;
    }

    #[inline]
    #[must_use]
    pub fn blend_alpha_op(&self) -> wgpu::BlendOperation {
        self.states.blend_alpha_op
    }

    #[inline]
    pub fn set_blend_alpha_op(&mut self, op: wgpu::BlendOperation) {
        self.states.blend_alpha_op = op;
    }

    #[inline]
    #[must_use]
    pub fn blend_src_alpha(&self) -> wgpu::BlendFactor {
        self.states.blend_src_alpha
    }

    #[inline]
    pub fn set_blend_src_alpha(&mut self, factor: wgpu::BlendFactor) {
        self.states.blend_src_alpha = factor;
    }

    #[inline]
    #[must_use]
    pub fn blend_dst_alpha(&self) -> wgpu::BlendFactor {
        self.states.blend_dst_alpha
    }

    #[inline]
    pub fn set_blend_dst_alpha(&mut self, factor: wgpu::BlendFactor) {
        self.states.blend_dst_alpha = factor;
    }

    // ─── Depth State ─────────────────────────────────────────────────────

    #[inline]
    #[must_use]
    pub fn depth_test(&self) -> bool {
        self.states.depth_test
    }

    #[inline]
    pub fn set_depth_test(&mut self, enabled: bool) {
        self.states.depth_test = enabled;
    }

    #[inline]
    #[must_use]
    pub fn depth_write(&self) -> bool {
        self.states.depth_write
    }

    #[inline]
    pub fn set_depth_write(&mut self, enabled: bool) {
        self.states.depth_write = enabled;
    }

    #[inline]
    #[must_use]
    pub fn depth_compare(&self) -> wgpu::CompareFunction {
        self.states.depth_compare
    }

    #[inline]
    pub fn set_depth_compare(&mut self, compare: wgpu::CompareFunction) {
        self.states.depth_compare = compare;
    }

    // ─── Stencil State ───────────────────────────────────────────────────

    #[inline]
    #[must_use]
    pub fn stencil_test(&self) -> bool {
        self.states.stencil_test
    }

    #[inline]
    pub fn set_stencil_test(&mut self, enabled: bool) {
        self.states.stencil_test = enabled;
    }

    #[inline]
    #[must_use]
    pub fn stencil_write(&self) -> bool {
        self.states.stencil_write
    }

    #[inline]
    pub fn set_stencil_write(&mut self, enabled: bool) {
        self.states.stencil_write = enabled;
    }

    #[inline]
    #[must_use]
    pub fn stencil_compare(&self) -> wgpu::CompareFunction {
        self.states.stencil_compare
    }

    #[inline]
    pub fn set_stencil_compare(&mut self, compare: wgpu::CompareFunction) {
        self.states.stencil_compare = compare;
    }

    #[inline]
    #[must_use]
    pub fn stencil_pass_op(&self) -> wgpu::StencilOperation {
        self.states.stencil_pass_op
    }

    #[inline]
    pub fn set_stencil_pass_op(&mut self, op: wgpu::StencilOperation) {
        self.states.stencil_pass_op = op;
    }

    #[inline]
    #[must_use]
    pub fn stencil_ref(&self) -> u32 {
        self.states.stencil_ref
    }

    #[inline]
    pub fn set_stencil_ref(&mut self, reference: u32) {
        self.states.stencil_ref = reference;
    }

    // ─── Wireframe Appearance ────────────────────────────────────────────

    #[inline]
    #[must_use]
    pub fn wireframe_color(&self) -> glam::Vec4 {
        self.states.wireframe_color
    }

    #[inline]
    pub fn set_wireframe_color(&mut self, color: glam::Vec4) {
        self.states.wireframe_color = color;
    }

    #[inline]
    #[must_use]
    pub fn wireframe_width(&self) -> f32 {
        self.states.wireframe_width
    }

    #[inline]
    pub fn set_wireframe_width(&mut self, width: f32) {
        self.states.wireframe_width = width;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_material_starts_fully_dirty() {
        let material = Material::new(MaterialDescriptor::default());
        assert!(material.program_dirty());
        assert!(material.texture_dirty());
        assert!(material.geometry_dirty());
    }

    #[test]
    fn construction_seeds_wireframe_define() {
        let material = Material::new(MaterialDescriptor::default());
        assert_eq!(
            material.defines().get("USE_WIREFRAME").map(ToString::to_string),
            Some("false".to_string())
        );
    }

    #[test]
    fn plain_setters_do_not_touch_dirty_flags() {
        let mut material = Material::new(MaterialDescriptor::default());
        material.clear_program_dirty();
        material.clear_texture_dirty();
        material.clear_geometry_dirty();

        material.set_cull_mode(None);
        material.set_depth_write(false);
        material.set_blend_src(wgpu::BlendFactor::One);
        material.set_stencil_ref(7);

        assert!(!material.program_dirty());
        assert!(!material.texture_dirty());
        assert!(!material.geometry_dirty());
        assert_eq!(material.cull_mode(), None);
        assert!(!material.depth_write());
        assert_eq!(material.stencil_ref(), 7);
    }
}
