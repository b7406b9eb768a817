//! Effect application onto a subject.

use crate::profile::EffectProfile;
use crate::subject::{AccumulatorKind, Subject};

/// Apply every nonzero field of `profile` to `subject`.
///
/// Fields act on independent attributes and are applied in a fixed order:
/// instant health, health over time, then the four accumulators. A field of
/// exactly 0.0 is skipped without touching the subject, so an all-zero
/// profile is a no-op.
///
/// Instant health is the only field read relative to current state: the new
/// health is clamped to `[0, max_health]`. Health over time goes to the
/// subject's regen channel with scale 1 and its sign untouched. Accumulator
/// deltas are unbounded: positive values are added, negative values are
/// subtracted by magnitude.
pub fn apply_effects(subject: &mut dyn Subject, profile: &EffectProfile) {
    if profile.instant_health != 0.0 {
        let healed = subject.health() + profile.instant_health;
        subject.set_health(healed.clamp(0.0, subject.max_health()));
    }

    if profile.health_over_time != 0.0 {
        subject.apply_regen(profile.health_over_time, 1.0);
    }

    for kind in AccumulatorKind::ALL {
        let delta = profile.accumulator_delta(kind);
        if delta == 0.0 {
            continue;
        }
        if delta > 0.0 {
            subject.add(kind, delta);
        } else {
            subject.subtract(kind, delta.abs());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subject::Metabolism;

    fn subject_at(health: f32, max_health: f32) -> Metabolism {
        Metabolism::new(health, max_health)
    }

    #[test]
    fn inert_profile_is_a_no_op() {
        let mut subject = subject_at(50.0, 100.0);
        subject.poison.value = 10.0;
        let before = subject;

        apply_effects(&mut subject, &EffectProfile::NONE);

        assert_eq!(subject, before);
    }

    #[test]
    fn instant_health_adds_within_bounds() {
        let mut subject = subject_at(50.0, 100.0);

        apply_effects(
            &mut subject,
            &EffectProfile {
                instant_health: 5.0,
                ..Default::default()
            },
        );

        assert_eq!(subject.health(), 55.0);
    }

    #[test]
    fn instant_health_clamps_at_max() {
        let mut subject = subject_at(98.0, 100.0);

        apply_effects(
            &mut subject,
            &EffectProfile {
                instant_health: 5.0,
                ..Default::default()
            },
        );

        assert_eq!(subject.health(), 100.0);
    }

    #[test]
    fn instant_health_clamps_at_zero() {
        let mut subject = subject_at(10.0, 100.0);

        apply_effects(
            &mut subject,
            &EffectProfile {
                instant_health: -500.0,
                ..Default::default()
            },
        );

        assert_eq!(subject.health(), 0.0);
    }

    #[test]
    fn large_heal_clamps_not_overflows() {
        let mut subject = subject_at(1.0, 100.0);

        apply_effects(
            &mut subject,
            &EffectProfile {
                instant_health: 10_000.0,
                ..Default::default()
            },
        );

        assert_eq!(subject.health(), 100.0);
    }

    #[test]
    fn health_over_time_feeds_regen_channel() {
        let mut subject = subject_at(50.0, 100.0);

        apply_effects(
            &mut subject,
            &EffectProfile {
                health_over_time: 20.0,
                ..Default::default()
            },
        );

        // Regen is not an instant change.
        assert_eq!(subject.health(), 50.0);
        assert_eq!(subject.regen.pending, 20.0);
    }

    #[test]
    fn negative_health_over_time_passes_sign_through() {
        let mut subject = subject_at(50.0, 100.0);

        apply_effects(
            &mut subject,
            &EffectProfile {
                health_over_time: -8.0,
                ..Default::default()
            },
        );

        assert_eq!(subject.regen.pending, -8.0);
    }

    #[test]
    fn accumulator_net_change_is_always_the_delta() {
        for delta in [75.0_f32, -10.0, 0.5, -0.5] {
            for kind in AccumulatorKind::ALL {
                let mut subject = subject_at(50.0, 100.0);
                let mut profile = EffectProfile::NONE;
                match kind {
                    AccumulatorKind::Calories => profile.calories = delta,
                    AccumulatorKind::Hydration => profile.hydration = delta,
                    AccumulatorKind::Poison => profile.poison = delta,
                    AccumulatorKind::Radiation => profile.radiation = delta,
                }

                apply_effects(&mut subject, &profile);

                assert_eq!(subject.accumulator(kind), delta);
                // Fields act independently; the rest stay untouched.
                for other in AccumulatorKind::ALL {
                    if other != kind {
                        assert_eq!(subject.accumulator(other), 0.0);
                    }
                }
            }
        }
    }

    #[test]
    fn bandage_scenario() {
        let mut subject = subject_at(50.0, 100.0);
        subject.poison.value = 10.0;

        let bandage = EffectProfile {
            instant_health: 5.0,
            poison: -2.0,
            ..Default::default()
        };

        apply_effects(&mut subject, &bandage);

        assert_eq!(subject.health(), 55.0);
        assert_eq!(subject.accumulator(AccumulatorKind::Poison), 8.0);
        assert_eq!(subject.accumulator(AccumulatorKind::Calories), 0.0);
        assert_eq!(subject.accumulator(AccumulatorKind::Hydration), 0.0);
        assert_eq!(subject.accumulator(AccumulatorKind::Radiation), 0.0);
        assert_eq!(subject.regen.pending, 0.0);
    }

    #[test]
    fn profile_is_not_mutated_by_apply() {
        let mut subject = subject_at(50.0, 100.0);
        let profile = EffectProfile::new(5.0, 20.0, 100.0, 30.0, -2.0, -10.0);
        let copy = profile;

        apply_effects(&mut subject, &profile);

        assert_eq!(profile, copy);
    }
}
