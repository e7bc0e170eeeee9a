//! Declarative animation definitions
//!
//! Named animations can be described in TOML and instantiated on demand:
//!
//! ```toml
//! [animations.slide]
//! duration = 2.0
//! easing = "ease-in-out-quad"
//!
//! [animations.fade]
//! duration = 0.5
//! autostart = true
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::animation::Animation;
use crate::easing::Easing;
use crate::error::{AnimationError, Result};

/// A set of named animation definitions
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AnimationConfig {
    #[serde(default)]
    pub animations: BTreeMap<String, AnimationDef>,
}

/// One animation definition
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct AnimationDef {
    /// Duration in seconds
    pub duration: f32,
    #[serde(default)]
    pub easing: Easing,
    /// Start the animation as soon as it is built
    #[serde(default)]
    pub autostart: bool,
}

impl AnimationConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: AnimationConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loading animation config");
        Self::from_toml_str(&source)
    }

    fn validate(&self) -> Result<()> {
        for (name, def) in &self.animations {
            if !(def.duration.is_finite() && def.duration > 0.0) {
                return Err(AnimationError::InvalidConfigDuration {
                    name: name.clone(),
                    duration: def.duration,
                });
            }
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&AnimationDef> {
        self.animations.get(name)
    }

    /// Instantiate the named animation with the given hook
    pub fn build(&self, name: &str, hook: impl FnMut(f32) + 'static) -> Result<Animation> {
        let def = self
            .get(name)
            .ok_or_else(|| AnimationError::UndefinedAnimation(name.to_string()))?;
        def.build(hook)
    }
}

impl AnimationDef {
    pub fn new(duration: f32, easing: Easing) -> Self {
        Self {
            duration,
            easing,
            autostart: false,
        }
    }

    pub fn build(&self, hook: impl FnMut(f32) + 'static) -> Result<Animation> {
        let mut animation = Animation::new(self.duration, self.easing, hook)?;
        if self.autostart {
            animation.start();
        }
        Ok(animation)
    }
}
