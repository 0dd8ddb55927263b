// Domain layer - Core simulation logic
pub mod domain;

// Application layer - Engine orchestration
pub mod application;

// Infrastructure layer - rendering
pub mod rendering;

// Re-exports for convenience
pub use application::Engine;
pub use domain::{Cell, Grid, Rgb};
