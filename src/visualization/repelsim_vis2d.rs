//! Bevy 2D viewer
//!
//! Draws each particle as a circle coloured by its kind, the cursor disc
//! while the pointer is over the window, and (optionally) the grid. The
//! window is sized to the world bounds so one world unit is one logical
//! pixel. World coordinates have y pointing down and the origin in the
//! top-left corner; Bevy's 2D camera is centered with y up.

use bevy::math::primitives::Circle;
use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::window::PrimaryWindow;

use crate::simulation::scenario::Scenario;
use crate::simulation::states::{Bounds, Kind, NVec2};

#[derive(Component)]
struct ParticleIndex(pub usize);

#[derive(Component)]
struct CursorDisc;

fn kind_color(kind: Kind) -> Color {
    match kind {
        Kind::Alpha => Color::srgb_u8(0xd6, 0x96, 0x00),
        Kind::Beta => Color::srgb_u8(0xc9, 0x00, 0x93),
    }
}

fn to_screen(bounds: Bounds, x: f64, y: f64, z: f32) -> Vec3 {
    Vec3::new(
        (x - bounds.width * 0.5) as f32,
        (bounds.height * 0.5 - y) as f32,
        z,
    )
}

pub fn run_2d(scenario: Scenario) {
    let bounds = scenario.world.bounds();
    log::info!(
        "run_2d: starting Bevy 2D viewer with {} particles",
        scenario.world.particles().len()
    );

    App::new()
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(scenario)
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "repelsim".into(),
                        resolution: (bounds.width as f32, bounds.height as f32).into(),
                        resizable: false,
                        ..Default::default()
                    }),
                    ..Default::default()
                })
                // logging goes through env_logger
                .disable::<bevy::log::LogPlugin>(),
        )
        .add_systems(Startup, setup_particles_system)
        .add_systems(
            Update,
            (
                cursor_input_system,
                physics_step_system,
                sync_transforms_system,
                draw_grid_system,
            )
                .chain(),
        )
        .run();
}

fn setup_particles_system(
    mut commands: Commands,
    scenario: Res<Scenario>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    commands.spawn(Camera2dBundle::default());

    let world = &scenario.world;
    let bounds = world.bounds();
    let params = world.params();

    // one mesh and one material per kind, shared by every particle
    let circle = Mesh2dHandle(meshes.add(Circle::new(params.particle_radius as f32)));
    let kind_materials: Vec<Handle<ColorMaterial>> = Kind::ALL
        .iter()
        .map(|k| materials.add(ColorMaterial::from(kind_color(*k))))
        .collect();

    for (i, p) in world.particles().iter().enumerate() {
        commands.spawn((
            MaterialMesh2dBundle {
                mesh: circle.clone(),
                material: kind_materials[p.kind.index()].clone(),
                transform: Transform::from_translation(to_screen(bounds, p.position.x, p.position.y, 0.0)),
                ..Default::default()
            },
            ParticleIndex(i),
        ));
    }

    commands.spawn((
        MaterialMesh2dBundle {
            mesh: Mesh2dHandle(meshes.add(Circle::new(params.cursor_radius as f32))),
            material: materials.add(ColorMaterial::from(Color::srgb_u8(0x8f, 0x5f, 0xff))),
            transform: Transform::from_xyz(0.0, 0.0, 1.0),
            visibility: Visibility::Hidden,
            ..Default::default()
        },
        CursorDisc,
    ));
}

/// Feed the pointer position into the world; leaving the window deactivates the cursor
fn cursor_input_system(windows: Query<&Window, With<PrimaryWindow>>, mut scenario: ResMut<Scenario>) {
    let pointer = windows.get_single().ok().and_then(|w| w.cursor_position());
    match pointer {
        Some(p) => scenario.world.set_cursor(NVec2::new(p.x as f64, p.y as f64), true),
        None => scenario.world.clear_cursor(),
    }
}

fn physics_step_system(mut scenario: ResMut<Scenario>) {
    let Scenario { engine, world } = &mut *scenario;
    for _ in 0..engine.steps_per_frame {
        world.step();
    }
}

fn sync_transforms_system(
    scenario: Res<Scenario>,
    mut particles: Query<(&ParticleIndex, &mut Transform), Without<CursorDisc>>,
    mut cursor: Query<(&mut Transform, &mut Visibility), With<CursorDisc>>,
) {
    let world = &scenario.world;
    let bounds = world.bounds();

    for (ParticleIndex(i), mut transform) in &mut particles {
        if let Some(p) = world.particles().get(*i) {
            transform.translation = to_screen(bounds, p.position.x, p.position.y, 0.0);
        }
    }

    let c = world.cursor();
    for (mut transform, mut visibility) in &mut cursor {
        transform.translation = to_screen(bounds, c.position.x, c.position.y, 1.0);
        *visibility = if c.active { Visibility::Visible } else { Visibility::Hidden };
    }
}

fn draw_grid_system(scenario: Res<Scenario>, mut gizmos: Gizmos) {
    if !scenario.engine.draw_grid {
        return;
    }
    let grid = scenario.world.grid();
    let bounds = scenario.world.bounds();
    let color = Color::srgb_u8(0x66, 0x66, 0x66);

    for x in grid.column_lines() {
        let top = to_screen(bounds, x, 0.0, 0.0).truncate();
        let bottom = to_screen(bounds, x, bounds.height, 0.0).truncate();
        gizmos.line_2d(top, bottom, color);
    }
    for y in grid.row_lines() {
        let left = to_screen(bounds, 0.0, y, 0.0).truncate();
        let right = to_screen(bounds, bounds.width, y, 0.0).truncate();
        gizmos.line_2d(left, right, color);
    }
}
