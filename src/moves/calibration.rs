//! Calibration of raw binomial probabilities.
//!
//! The binomial model assumes every hidden die is an independent fair roll
//! and ignores what bets reveal about the bettor's cup. A calibration maps
//! the dice-count ratio between the deciding player and a neighbour to an
//! additive correction on the raw probability.
//!
//! The ratio is always `later / earlier` in turn order: for a challenge it
//! is `own / previous bettor`, for a raise it is `next player / own`.

/// Additive probability correction as a function of a dice-count ratio.
pub trait Calibration: Send + Sync {
    fn adjust(&self, ratio: f64) -> f64;
}

/// `slope * ratio + intercept`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearCalibration {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearCalibration {
    #[must_use]
    pub const fn new(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }
}

impl Default for LinearCalibration {
    /// Fitted against simulated challenge success rates.
    fn default() -> Self {
        Self::new(0.09, -0.29)
    }
}

impl Calibration for LinearCalibration {
    fn adjust(&self, ratio: f64) -> f64 {
        self.slope * ratio + self.intercept
    }
}

/// Same correction regardless of the ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlatCalibration(pub f64);

impl Default for FlatCalibration {
    fn default() -> Self {
        Self(-0.22)
    }
}

impl Calibration for FlatCalibration {
    fn adjust(&self, _ratio: f64) -> f64 {
        self.0
    }
}

impl<F> Calibration for F
where
    F: Fn(f64) -> f64 + Send + Sync,
{
    fn adjust(&self, ratio: f64) -> f64 {
        self(ratio)
    }
}
