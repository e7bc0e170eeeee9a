//! Easing functions for animations
//!
//! Every curve maps a normalized time `t` in `[0.0, 1.0]` to an eased value.
//! All curves hit `0.0` at `t = 0.0` and `1.0` at `t = 1.0` exactly; the
//! elastic family overshoots in between.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AnimationError;

/// Easing function type
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    #[default]
    Linear,
    EaseInSine,
    EaseOutSine,
    EaseInOutSine,
    EaseInCubic,
    EaseOutCubic,
    EaseInOutCubic,
    EaseInQuint,
    EaseOutQuint,
    EaseInOutQuint,
    EaseInQuad,
    EaseOutQuad,
    EaseInOutQuad,
    EaseInQuart,
    EaseOutQuart,
    EaseInOutQuart,
    EaseInExpo,
    EaseOutExpo,
    EaseInOutExpo,
    EaseInElastic,
    EaseOutElastic,
    EaseInOutElastic,
}

impl Easing {
    /// Every supported curve, in declaration order
    pub const ALL: [Easing; 22] = [
        Easing::Linear,
        Easing::EaseInSine,
        Easing::EaseOutSine,
        Easing::EaseInOutSine,
        Easing::EaseInCubic,
        Easing::EaseOutCubic,
        Easing::EaseInOutCubic,
        Easing::EaseInQuint,
        Easing::EaseOutQuint,
        Easing::EaseInOutQuint,
        Easing::EaseInQuad,
        Easing::EaseOutQuad,
        Easing::EaseInOutQuad,
        Easing::EaseInQuart,
        Easing::EaseOutQuart,
        Easing::EaseInOutQuart,
        Easing::EaseInExpo,
        Easing::EaseOutExpo,
        Easing::EaseInOutExpo,
        Easing::EaseInElastic,
        Easing::EaseOutElastic,
        Easing::EaseInOutElastic,
    ];

    /// Apply the easing function to a progress value (0.0 to 1.0)
    ///
    /// Input outside `[0.0, 1.0]` is not clamped; the result is whatever the
    /// curve's formula yields there.
    pub fn apply(&self, t: f32) -> f32 {
        let x = t as f64;
        let y = match self {
            Easing::Linear => x,
            Easing::EaseInSine => 1.0 - (x * PI / 2.0).cos(),
            Easing::EaseOutSine => (x * PI / 2.0).sin(),
            Easing::EaseInOutSine => -((PI * x).cos() - 1.0) / 2.0,
            Easing::EaseInCubic => x * x * x,
            Easing::EaseOutCubic => 1.0 - (1.0 - x).powi(3),
            Easing::EaseInOutCubic => in_out(x, |x| 4.0 * x * x * x, 3),
            Easing::EaseInQuint => x * x * x * x * x,
            Easing::EaseOutQuint => 1.0 - (1.0 - x).powi(5),
            Easing::EaseInOutQuint => in_out(x, |x| 16.0 * x * x * x * x * x, 5),
            Easing::EaseInQuad => x * x,
            Easing::EaseOutQuad => 1.0 - (1.0 - x) * (1.0 - x),
            Easing::EaseInOutQuad => in_out(x, |x| 2.0 * x * x, 2),
            Easing::EaseInQuart => x * x * x * x,
            Easing::EaseOutQuart => 1.0 - (1.0 - x).powi(4),
            Easing::EaseInOutQuart => in_out(x, |x| 8.0 * x * x * x * x, 4),
            Easing::EaseInExpo => {
                if x == 0.0 {
                    0.0
                } else {
                    2f64.powf(10.0 * (x - 1.0))
                }
            }
            Easing::EaseOutExpo => {
                if x == 1.0 {
                    1.0
                } else {
                    1.0 - 2f64.powf(-10.0 * x)
                }
            }
            Easing::EaseInOutExpo => with_exact_ends(x, |x| {
                if x < 0.5 {
                    2f64.powf(20.0 * x - 10.0) / 2.0
                } else {
                    (2.0 - 2f64.powf(-20.0 * x + 10.0)) / 2.0
                }
            }),
            Easing::EaseInElastic => with_exact_ends(x, |x| {
                -2f64.powf(10.0 * x - 10.0) * ((x * 10.0 - 10.75) * ELASTIC_PERIOD).sin()
            }),
            Easing::EaseOutElastic => with_exact_ends(x, |x| {
                2f64.powf(-10.0 * x) * ((x * 10.0 - 0.75) * ELASTIC_PERIOD).sin() + 1.0
            }),
            Easing::EaseInOutElastic => with_exact_ends(x, |x| {
                let wave = ((20.0 * x - 11.125) * ELASTIC_IN_OUT_PERIOD).sin();
                if x < 0.5 {
                    -(2f64.powf(20.0 * x - 10.0) * wave) / 2.0
                } else {
                    2f64.powf(-20.0 * x + 10.0) * wave / 2.0 + 1.0
                }
            }),
        };
        y as f32
    }

    /// Kebab-case name of the curve, e.g. `ease-in-out-quad`
    pub fn name(&self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseInSine => "ease-in-sine",
            Easing::EaseOutSine => "ease-out-sine",
            Easing::EaseInOutSine => "ease-in-out-sine",
            Easing::EaseInCubic => "ease-in-cubic",
            Easing::EaseOutCubic => "ease-out-cubic",
            Easing::EaseInOutCubic => "ease-in-out-cubic",
            Easing::EaseInQuint => "ease-in-quint",
            Easing::EaseOutQuint => "ease-out-quint",
            Easing::EaseInOutQuint => "ease-in-out-quint",
            Easing::EaseInQuad => "ease-in-quad",
            Easing::EaseOutQuad => "ease-out-quad",
            Easing::EaseInOutQuad => "ease-in-out-quad",
            Easing::EaseInQuart => "ease-in-quart",
            Easing::EaseOutQuart => "ease-out-quart",
            Easing::EaseInOutQuart => "ease-in-out-quart",
            Easing::EaseInExpo => "ease-in-expo",
            Easing::EaseOutExpo => "ease-out-expo",
            Easing::EaseInOutExpo => "ease-in-out-expo",
            Easing::EaseInElastic => "ease-in-elastic",
            Easing::EaseOutElastic => "ease-out-elastic",
            Easing::EaseInOutElastic => "ease-in-out-elastic",
        }
    }

    /// Whether this is a piecewise curve split at `t = 0.5`
    pub fn is_in_out(&self) -> bool {
        matches!(
            self,
            Easing::EaseInOutSine
                | Easing::EaseInOutCubic
                | Easing::EaseInOutQuint
                | Easing::EaseInOutQuad
                | Easing::EaseInOutQuart
                | Easing::EaseInOutExpo
                | Easing::EaseInOutElastic
        )
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Easing {
    type Err = AnimationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Easing::ALL
            .iter()
            .copied()
            .find(|easing| easing.name() == s)
            .ok_or_else(|| AnimationError::UnknownEasing(s.to_string()))
    }
}

const ELASTIC_PERIOD: f64 = (2.0 * PI) / 3.0;
const ELASTIC_IN_OUT_PERIOD: f64 = (2.0 * PI) / 4.5;

/// Polynomial in-out: `first_half` below 0.5, mirrored `1 - (-2x + 2)^n / 2` above
#[inline]
fn in_out(x: f64, first_half: impl Fn(f64) -> f64, power: i32) -> f64 {
    if x < 0.5 {
        first_half(x)
    } else {
        1.0 - (-2.0 * x + 2.0).powi(power) / 2.0
    }
}

/// Pins `0 -> 0` and `1 -> 1`; the exponential forms miss both endpoints
#[inline]
fn with_exact_ends(x: f64, curve: impl Fn(f64) -> f64) -> f64 {
    if x == 0.0 {
        0.0
    } else if x == 1.0 {
        1.0
    } else {
        curve(x)
    }
}
