//! Host-loop settings
//!
//! Nothing here affects the physics of a single step; these only control
//! how a driver (viewer or headless loop) advances and presents the world.

#[derive(Debug, Clone)]
pub struct Engine {
    pub draw_grid: bool,        // debug overlay of cell boundaries
    pub steps_per_frame: usize, // world steps per rendered frame
    pub seed: Option<u64>,      // None = seeded from entropy
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            draw_grid: false,
            steps_per_frame: 1,
            seed: None,
        }
    }
}
