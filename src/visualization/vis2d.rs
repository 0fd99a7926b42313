use bevy::math::primitives::Circle;
use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::window::WindowResolution;

use crate::simulation::engine::Simulation;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{NVec2, Rgb};
use crate::visualization::projection::Projection;

#[derive(Component)]
struct BodyIndex(pub usize);

/// Projection plus window size, to go from pixel space to Bevy world space
#[derive(Resource)]
struct View {
    projection: Projection,
    width: f32,
    height: f32,
}

impl View {
    // Bevy's 2D camera puts the origin at the window center with y up
    fn to_world(&self, px: NVec2) -> Vec2 {
        Vec2::new(px.x as f32 - self.width / 2.0, self.height / 2.0 - px.y as f32)
    }
}

fn color(rgb: Rgb) -> Color {
    Color::srgb_u8(rgb[0], rgb[1], rgb[2])
}

pub fn run_2d(scenario: Scenario) -> AppExit {
    let Scenario {
        simulation,
        projection,
        display,
    } = scenario;

    let view = View {
        projection,
        width: display.width,
        height: display.height,
    };

    App::new()
        .insert_resource(simulation)
        .insert_resource(view)
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(Time::<Fixed>::from_hz(display.fps))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Solar System Simulation".into(),
                resolution: WindowResolution::new(display.width, display.height),
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        .add_systems(Startup, setup_bodies_system)
        .add_systems(FixedUpdate, physics_step_system)
        .add_systems(Update, (sync_transforms_system, draw_orbits_system))
        .run()
}

fn setup_bodies_system(
    mut commands: Commands,
    sim: Res<Simulation>,
    view: Res<View>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    info!("starting 2D viewer with {} bodies", sim.len());
    commands.spawn(Camera2dBundle::default());

    for (i, body) in sim.bodies().iter().enumerate() {
        let pos = view.to_world(body.render_position(&view.projection));

        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(body.radius as f32))),
                material: materials.add(ColorMaterial::from(color(body.color))),
                transform: Transform::from_xyz(pos.x, pos.y, 1.0),
                ..Default::default()
            },
            BodyIndex(i),
        ));
    }
}

fn physics_step_system(mut sim: ResMut<Simulation>, mut exit: EventWriter<AppExit>) {
    if let Err(e) = sim.advance() {
        error!("simulation stopped at step {}: {e}", sim.steps());
        exit.send(AppExit::error());
    }
}

fn sync_transforms_system(sim: Res<Simulation>, view: Res<View>, mut query: Query<(&BodyIndex, &mut Transform)>) {
    for (BodyIndex(i), mut transform) in &mut query {
        if let Some(b) = sim.body(*i) {
            let pos = view.to_world(b.render_position(&view.projection));
            transform.translation.x = pos.x;
            transform.translation.y = pos.y;
        }
    }
}

fn draw_orbits_system(sim: Res<Simulation>, view: Res<View>, mut gizmos: Gizmos) {
    for b in sim.bodies() {
        let path = b.orbit_path();
        if path.len() < 2 {
            continue;
        }
        let points = path
            .iter()
            .map(|p| view.to_world(view.projection.project(p)));
        gizmos.linestrip_2d(points, color(b.color));
    }
}
