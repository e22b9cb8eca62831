//! Animated particle heart.
//!
//! Renders a heart made of a few thousand glowing dots on an HTML canvas:
//! - Particles generated once per viewport size, split into four layers
//! - A heartbeat pulse every 900ms with a softer secondary echo
//! - Depth-shaded color, per-particle twinkle, and an outer halo that breathes
//!   independently of the beat
//!
//! # Example
//!
//! ```ignore
//! use heart_particles::components::heart::HeartParticles;
//!
//! view! { <HeartParticles /> }
//! ```

mod component;
pub mod curve;
pub mod particles;
pub mod pulse;
pub mod render;
pub mod scale;
pub mod state;
pub mod theme;

pub use component::HeartParticles;
pub use particles::{Category, Particle, ParticleField, RandomSource, RngSource};
pub use state::{HeartState, LoopGuard};
pub use theme::HeartTheme;
