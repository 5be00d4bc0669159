pub mod states;
pub mod vector;
pub mod error;
pub mod params;
pub mod engine;
pub mod grid;
pub mod forces;
pub mod integrator;
pub mod world;
pub mod scenario;
