//! Subject-side attribute state mutated by the applicator.
//!
//! The applicator sees subjects through the [`Subject`] trait: current and
//! maximum health, a regen channel, and four signed accumulators. The
//! concrete [`Metabolism`] implementation covers the runtime and tests;
//! integration layers with their own player state implement the trait
//! directly.

/// Signed accumulator attributes tracked per subject.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AccumulatorKind {
    Calories,
    Hydration,
    Poison,
    Radiation,
}

impl AccumulatorKind {
    /// Fixed order the applicator walks the accumulators in.
    pub const ALL: [Self; 4] = [
        Self::Calories,
        Self::Hydration,
        Self::Poison,
        Self::Radiation,
    ];
}

/// Mutable attribute surface the applicator works against.
///
/// The applicator only reads current/max health and issues add/subtract and
/// regen-rate operations. Everything else about the subject (regen decay,
/// ticking, death handling) belongs to the implementor.
pub trait Subject {
    fn health(&self) -> f32;
    fn max_health(&self) -> f32;
    fn set_health(&mut self, value: f32);

    /// Register a regeneration-rate change of `rate * scale`.
    ///
    /// Sign is passed through untouched; how a negative rate drains is up to
    /// the implementor's regen semantics.
    fn apply_regen(&mut self, rate: f32, scale: f32);

    fn accumulator(&self, kind: AccumulatorKind) -> f32;
    fn add(&mut self, kind: AccumulatorKind, amount: f32);
    fn subtract(&mut self, kind: AccumulatorKind, amount: f32);
}

/// Float health meter (current/maximum) tracked per subject.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HealthMeter {
    pub current: f32,
    pub maximum: f32,
}

impl HealthMeter {
    pub fn new(current: f32, maximum: f32) -> Self {
        Self { current, maximum }
    }
}

/// Signed running total mutated via add/subtract.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Accumulator {
    pub value: f32,
}

impl Accumulator {
    pub fn new(value: f32) -> Self {
        Self { value }
    }

    pub fn add(&mut self, amount: f32) {
        self.value += amount;
    }

    pub fn subtract(&mut self, amount: f32) {
        self.value -= amount;
    }
}

/// Pending regeneration state fed by health-over-time effects.
///
/// Only accumulation lives here; decay and per-tick payout are owned by
/// whatever drives the subject.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegenChannel {
    pub pending: f32,
}

impl RegenChannel {
    pub fn apply_change(&mut self, rate: f32, scale: f32) {
        self.pending += rate * scale;
    }
}

/// Concrete [`Subject`]: a health meter, a regen channel, and the four
/// accumulators.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metabolism {
    pub health: HealthMeter,
    pub regen: RegenChannel,
    pub calories: Accumulator,
    pub hydration: Accumulator,
    pub poison: Accumulator,
    pub radiation: Accumulator,
}

impl Metabolism {
    /// Create a metabolism with the given health and all accumulators at zero.
    pub fn new(health: f32, max_health: f32) -> Self {
        Self {
            health: HealthMeter::new(health, max_health),
            ..Default::default()
        }
    }

    fn meter(&self, kind: AccumulatorKind) -> &Accumulator {
        match kind {
            AccumulatorKind::Calories => &self.calories,
            AccumulatorKind::Hydration => &self.hydration,
            AccumulatorKind::Poison => &self.poison,
            AccumulatorKind::Radiation => &self.radiation,
        }
    }

    fn meter_mut(&mut self, kind: AccumulatorKind) -> &mut Accumulator {
        match kind {
            AccumulatorKind::Calories => &mut self.calories,
            AccumulatorKind::Hydration => &mut self.hydration,
            AccumulatorKind::Poison => &mut self.poison,
            AccumulatorKind::Radiation => &mut self.radiation,
        }
    }
}

impl Subject for Metabolism {
    fn health(&self) -> f32 {
        self.health.current
    }

    fn max_health(&self) -> f32 {
        self.health.maximum
    }

    fn set_health(&mut self, value: f32) {
        self.health.current = value;
    }

    fn apply_regen(&mut self, rate: f32, scale: f32) {
        self.regen.apply_change(rate, scale);
    }

    fn accumulator(&self, kind: AccumulatorKind) -> f32 {
        self.meter(kind).value
    }

    fn add(&mut self, kind: AccumulatorKind, amount: f32) {
        self.meter_mut(kind).add(amount);
    }

    fn subtract(&mut self, kind: AccumulatorKind, amount: f32) {
        self.meter_mut(kind).subtract(amount);
    }
}
