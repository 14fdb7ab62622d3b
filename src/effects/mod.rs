//! Landing page decoration: the particle network behind the hero, the
//! time-of-day greeting with its typewriter, and the seasonal scenes.
//!
//! Every simulation takes `&mut impl Rng` so it can be driven from a seeded
//! generator on the host. [`dom`] owns the canvases and timers.

pub mod christmas;
pub mod dom;
pub mod fireworks;
pub mod greeting;
pub mod particles;
pub mod season;
pub mod snow;

pub use fireworks::FireworkShow;
pub use greeting::Typewriter;
pub use particles::ParticleField;
pub use season::{ActiveSeasons, SeasonOverrides};
pub use snow::Snowfall;
