use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::math::primitives::Circle;
use bevy::window::WindowResolution;

use crate::simulation::params::Viewport;
use crate::simulation::sim_loop::SimulationLoop;
use crate::simulation::states::{NVec2, Rgb};

/// Tags each circle with its body index in the current generation
#[derive(Component)]
struct BodyIndex(pub usize);

/// Generation the spawned circles belong to
#[derive(Resource, Default)]
struct SpawnedGeneration(Option<u64>);

/// Viewport size, used to map screen space (y down) to world space (y up)
#[derive(Resource, Clone, Copy)]
struct ScreenSpace(Viewport);

impl ScreenSpace {
    fn to_world(&self, p: NVec2) -> Vec2 {
        let w = self.0.width as f32;
        let h = self.0.height as f32;
        Vec2::new(p.x as f32 - w / 2.0, h / 2.0 - p.y as f32)
    }
}

fn to_color(c: Rgb, alpha: u8) -> Color {
    Color::srgba_u8(c.0, c.1, c.2, alpha)
}

/// Open a window and step `sim` once per fixed tick at `fps`
pub fn run_2d(sim: SimulationLoop, fps: f64) {
    let viewport = sim.monitor.viewport;
    let n = sim.generation().len();
    info!("run_2d: starting Bevy 2D viewer with {} bodies", n);

    App::new()
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(Time::<Fixed>::from_hz(fps))
        .insert_resource(ScreenSpace(viewport))
        .insert_resource(SpawnedGeneration::default())
        .insert_resource(sim)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: format!("{n}-Body Problem Simulation"),
                resolution: WindowResolution::new(viewport.width as f32, viewport.height as f32),
                resizable: false,
                ..Default::default()
            }),
            ..Default::default()
        }))
        .add_systems(Startup, setup_camera_system)
        .add_systems(FixedUpdate, physics_step_system)
        .add_systems(Update, (respawn_bodies_system, sync_transforms_system, draw_trails_system).chain())
        .run();
}

fn setup_camera_system(mut commands: Commands) {
    commands.spawn(Camera2dBundle::default());
}

fn physics_step_system(mut sim: ResMut<SimulationLoop>) {
    sim.step();
}

/// Spawn one circle per body whenever a new generation appears
fn respawn_bodies_system(
    mut commands: Commands,
    sim: Res<SimulationLoop>,
    screen: Res<ScreenSpace>,
    mut spawned: ResMut<SpawnedGeneration>,
    existing: Query<Entity, With<BodyIndex>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    let snapshot = sim.snapshot();
    if spawned.0 == Some(snapshot.generation) {
        return;
    }

    for entity in &existing {
        commands.entity(entity).despawn();
    }

    for (i, body) in snapshot.bodies.iter().enumerate() {
        let pos = screen.to_world(body.position);
        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(body.radius as f32))),
                material: materials.add(ColorMaterial::from(to_color(body.color, 255))),
                transform: Transform::from_xyz(pos.x, pos.y, 1.0),
                ..Default::default()
            },
            BodyIndex(i),
        ));
    }
    spawned.0 = Some(snapshot.generation);
}

fn sync_transforms_system(sim: Res<SimulationLoop>, screen: Res<ScreenSpace>, mut query: Query<(&BodyIndex, &mut Transform)>) {
    let bodies = &sim.generation().bodies;
    for (BodyIndex(i), mut transform) in &mut query {
        if let Some(b) = bodies.get(*i) {
            let pos = screen.to_world(b.position);
            transform.translation.x = pos.x;
            transform.translation.y = pos.y;
        }
    }
}

/// Trails fade from transparent (oldest) to opaque (newest)
fn draw_trails_system(mut gizmos: Gizmos, sim: Res<SimulationLoop>, screen: Res<ScreenSpace>) {
    let snapshot = sim.snapshot();
    for body in &snapshot.bodies {
        let capacity = body.trail.capacity().max(1) as f64;
        let points = body.trail.iter().enumerate().map(|(i, p)| {
            let alpha = (255.0 * (i as f64 / capacity)) as u8;
            (screen.to_world(*p), to_color(body.color, alpha))
        });
        gizmos.linestrip_gradient_2d(points);
    }
}
