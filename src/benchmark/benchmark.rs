use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::simulation::params::Parameters;
use crate::simulation::states::{Bounds, NVec2};
use crate::simulation::world::World;

/// Helper to build a seeded world of size `n` at constant density
fn make_world(n: usize, seed: u64) -> World {
    // keep roughly the default 1000 particles per 1050x800 as n grows
    let scale = (n as f64 / 1000.0).sqrt().max(0.1);
    let bounds = Bounds::new(1050.0 * scale, 800.0 * scale);
    let mut rng = StdRng::seed_from_u64(seed);
    World::initialize(bounds, n, 50.0, Parameters::default(), &mut rng)
        .expect("benchmark world parameters are valid")
}

/// Time `World::step` for a range of population sizes, with and without
/// an active cursor in the middle of the field
pub fn bench_step() {
    let ns = [250, 500, 1000, 2000, 4000, 8000, 16000];
    let steps = 20;

    for n in ns {
        let mut world = make_world(n, 42);

        // Warm up
        world.step();

        let t0 = Instant::now();
        for _ in 0..steps {
            world.step();
        }
        let idle = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        let b = world.bounds();
        world.set_cursor(NVec2::new(b.width * 0.5, b.height * 0.5), true);

        let t1 = Instant::now();
        for _ in 0..steps {
            world.step();
        }
        let with_cursor = t1.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("N = {n:6}, step = {idle:8.3} ms, step with cursor = {with_cursor:8.3} ms");
    }
}

/// Step time against N as CSV
/// Paste output directly into a spreadsheet to graph
pub fn bench_step_curve() {
    println!("N,step_ms");

    for n in (500..=20000).step_by(500) {
        // Small n: average over more steps to smooth noise
        let steps = if n <= 4000 { 20 } else { 5 };
        let mut world = make_world(n, 7);
        world.step();

        let t0 = Instant::now();
        for _ in 0..steps {
            world.step();
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{},{:.6}", n, ms);
    }
}
