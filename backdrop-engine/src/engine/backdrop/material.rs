use bevy::{
    prelude::*,
    reflect::TypePath,
    render::render_resource::{AsBindGroup, ShaderRef},
};

/// Unlit particle material. Additive blending gives the glow the page
/// stylesheet expects from overlapping particles.
#[derive(Asset, TypePath, AsBindGroup, Debug, Clone)]
pub struct ParticleMaterial {
    /// Particle colour with opacity in the alpha channel.
    #[uniform(0)]
    pub color: LinearRgba,

    /// x = point size, remaining lanes unused.
    #[uniform(1)]
    pub params: Vec4,
}

impl Material for ParticleMaterial {
    fn vertex_shader() -> ShaderRef {
        "shaders/particles.wgsl".into()
    }

    fn fragment_shader() -> ShaderRef {
        "shaders/particles.wgsl".into()
    }

    fn alpha_mode(&self) -> AlphaMode {
        AlphaMode::Add
    }
}
