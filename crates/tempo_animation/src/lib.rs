//! Tempo Animation
//!
//! Eased, time-driven animations advanced by an external tick.
//!
//! # Features
//!
//! - **Easing**: Closed set of Penner curves (sine, quad, cubic, quart, quint, expo, elastic)
//! - **Animations**: Start/stop/update state machine delivering eased progress to a hook
//! - **Registry**: Advances many animations per tick and retires finished ones
//! - **Config**: Named animation definitions loaded from TOML
//!
//! The driver owns the clock: call [`AnimationRegistry::update`] once per
//! frame with the seconds elapsed since the previous call.

pub mod animation;
pub mod config;
pub mod easing;
pub mod error;
pub mod registry;

pub use animation::{Animation, AnimationState, UpdateHook};
pub use config::{AnimationConfig, AnimationDef};
pub use easing::Easing;
pub use error::{AnimationError, Result};
pub use registry::{AnimationId, AnimationRegistry};
