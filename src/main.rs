//! Headless simulation driver
//!
//! Plays the front-end role minus the rendering: builds the scene from
//! settings, steps the ray once per "frame", and logs hit and exit
//! events. A real renderer would additionally upload the geometry
//! buffers and draw the origin-to-endpoint segment each frame.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use gridray::Settings;
use gridray::consts::{SPHERE_RINGS, SPHERE_SEGMENTS};
use gridray::geometry;
use gridray::sim::{RayState, RngState, StepOutcome};

const SETTINGS_FILE: &str = "gridray.json";
const DEMO_STEPS: u64 = 100_000;

fn main() {
    env_logger::init();

    let settings = Settings::load(Path::new(SETTINGS_FILE));
    let field = settings.sphere_field();
    let volume = settings.volume();

    let seed = settings.seed.unwrap_or_else(wall_clock_seed);
    let mut rng = RngState::new(seed).to_rng();

    log::info!(
        "Scene: {} spheres, half extent {}, seed {seed}",
        field.len(),
        volume.half_extent
    );

    // What a renderer would upload once at startup
    let grid = geometry::grid_lines(settings.grid_cells, settings.cell_size);
    let sphere_vertices: usize = field
        .spheres()
        .iter()
        .map(|s| geometry::sphere_mesh(s, SPHERE_RINGS, SPHERE_SEGMENTS).0.len())
        .sum();
    log::debug!(
        "Static geometry: {} grid vertices, {sphere_vertices} sphere vertices",
        grid.len()
    );

    let mut ray = RayState::new(volume, settings.speed);
    let mut hits = 0u64;
    let mut exits = 0u64;

    for step in 0..DEMO_STEPS {
        match ray.advance(&field, &mut rng) {
            StepOutcome::Advanced(_) => {}
            StepOutcome::HitSphere(index) => {
                hits += 1;
                let center = field.spheres()[index].center;
                log::info!("step {step}: hit sphere {index} at {center}");
            }
            StepOutcome::ExitedVolume => {
                exits += 1;
                log::info!("step {step}: ray left the volume");
            }
        }
    }

    log::info!("Done after {DEMO_STEPS} steps: {hits} sphere hits, {exits} boundary exits");
}

fn wall_clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
