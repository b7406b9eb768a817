//! Per-item effect profiles.

use crate::subject::AccumulatorKind;

/// Numeric record describing how one item affects a subject.
///
/// All fields default to 0.0, meaning "do not touch this attribute". A zero
/// field is skipped entirely by the applicator; it is never interpreted as
/// "set the attribute to zero".
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EffectProfile {
    /// One-time additive health delta, clamped to `[0, max_health]` on apply.
    pub instant_health: f32,
    /// Rate change registered with the subject's regen channel, scale 1.
    /// Sign is passed through untouched; a negative value is a drain handled
    /// by the subject's own regen semantics.
    pub health_over_time: f32,
    /// Signed delta to the calories accumulator.
    pub calories: f32,
    /// Signed delta to the hydration accumulator.
    pub hydration: f32,
    /// Signed delta to the poison accumulator (positive adds, negative removes).
    pub poison: f32,
    /// Signed delta to the radiation accumulator (positive adds, negative removes).
    pub radiation: f32,
}

impl EffectProfile {
    /// Profile with every field zero; applying it is a no-op.
    pub const NONE: Self = Self {
        instant_health: 0.0,
        health_over_time: 0.0,
        calories: 0.0,
        hydration: 0.0,
        poison: 0.0,
        radiation: 0.0,
    };

    pub const fn new(
        instant_health: f32,
        health_over_time: f32,
        calories: f32,
        hydration: f32,
        poison: f32,
        radiation: f32,
    ) -> Self {
        Self {
            instant_health,
            health_over_time,
            calories,
            hydration,
            poison,
            radiation,
        }
    }

    /// Signed delta this profile carries for the given accumulator.
    pub const fn accumulator_delta(&self, kind: AccumulatorKind) -> f32 {
        match kind {
            AccumulatorKind::Calories => self.calories,
            AccumulatorKind::Hydration => self.hydration,
            AccumulatorKind::Poison => self.poison,
            AccumulatorKind::Radiation => self.radiation,
        }
    }

    /// True when every field is exactly zero.
    pub fn is_inert(&self) -> bool {
        *self == Self::NONE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_profile_is_inert() {
        assert!(EffectProfile::default().is_inert());
        assert_eq!(EffectProfile::default(), EffectProfile::NONE);
    }

    #[test]
    fn accumulator_delta_maps_fields() {
        let profile = EffectProfile {
            calories: 100.0,
            hydration: 30.0,
            poison: -2.0,
            radiation: -10.0,
            ..Default::default()
        };

        assert_eq!(profile.accumulator_delta(AccumulatorKind::Calories), 100.0);
        assert_eq!(profile.accumulator_delta(AccumulatorKind::Hydration), 30.0);
        assert_eq!(profile.accumulator_delta(AccumulatorKind::Poison), -2.0);
        assert_eq!(profile.accumulator_delta(AccumulatorKind::Radiation), -10.0);
        assert!(!profile.is_inert());
    }
}
