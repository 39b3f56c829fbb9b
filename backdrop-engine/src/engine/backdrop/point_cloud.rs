use bevy::prelude::*;
use bevy::render::mesh::PrimitiveTopology;
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::view::NoFrustumCulling;
use rand::Rng;

use constants::backdrop_settings::{PARTICLE_COLOR, PARTICLE_SIZE};

use super::material::ParticleMaterial;
use crate::engine::core::config::BackdropConfig;

/// Marker for the particle cloud entity.
#[derive(Component)]
pub struct PointCloud;

/// Sample `count` positions with every coordinate independently uniform in
/// `[-spread / 2, spread / 2]`. Positions never change after creation; the
/// whole-cloud rotation is applied through the entity transform.
pub fn generate_positions(count: usize, spread: f32, rng: &mut impl Rng) -> Vec<[f32; 3]> {
    (0..count)
        .map(|_| {
            [
                rng.gen_range(-0.5..=0.5) * spread,
                rng.gen_range(-0.5..=0.5) * spread,
                rng.gen_range(-0.5..=0.5) * spread,
            ]
        })
        .collect()
}

/// Build the particle mesh with point-list topology, one vertex per particle.
pub fn create_particle_mesh(positions: Vec<[f32; 3]>) -> Mesh {
    let mut mesh = Mesh::new(
        PrimitiveTopology::PointList,
        RenderAssetUsages::RENDER_WORLD,
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh
}

/// Spawn the particle cloud when the backdrop enters `Running`.
pub fn spawn_point_cloud(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ParticleMaterial>>,
    config: Res<BackdropConfig>,
) {
    let mut rng = rand::thread_rng();
    let positions = generate_positions(config.particle_count, config.spread, &mut rng);
    let mesh = create_particle_mesh(positions);

    let material = ParticleMaterial {
        color: PARTICLE_COLOR.with_alpha(config.opacity).to_linear(),
        params: Vec4::new(PARTICLE_SIZE, 0.0, 0.0, 0.0),
    };

    commands.spawn((
        Mesh3d(meshes.add(mesh)),
        MeshMaterial3d(materials.add(material)),
        Transform::from_translation(Vec3::ZERO),
        NoFrustumCulling,
        PointCloud,
    ));

    info!("Point cloud spawned with {} particles", config.particle_count);
}

/// Rotate the cloud by elapsed time, both axes at the configured speed.
/// The angle is unbounded; the quaternion wraps it naturally.
pub fn animate_point_cloud(
    time: Res<Time>,
    config: Res<BackdropConfig>,
    mut clouds: Query<&mut Transform, With<PointCloud>>,
) {
    let angle = time.elapsed_secs() * config.rotation_speed;
    for mut transform in &mut clouds {
        transform.rotation = Quat::from_euler(EulerRot::XYZ, angle, angle, 0.0);
    }
}
