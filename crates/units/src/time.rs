use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

pub(crate) const MINUTES_PER_HOUR: f64 = 60.0;
pub(crate) const SECONDS_PER_MINUTE: f64 = 60.0;

/// A physical time quantity using f64 precision.
///
/// The `Time` struct represents time with minutes as the base unit, which is
/// natural for fermentation timescales: doubling times run from tens of
/// minutes to a couple of days.
///
/// A `Time` may be infinite — dough with no yeast never proofs — so the type
/// exposes [`Time::infinite`] and finiteness predicates rather than assuming
/// every value is bounded.
///
/// # Examples
///
/// ```rust
/// use units::Time;
///
/// // Create times in different units
/// let doubling = Time::from_hours(1.5);
/// let tick = Time::from_minutes(1.0);
/// let bulk = Time::from_hours_minutes(3.0, 30.0);
///
/// // Convert between units
/// assert_eq!(doubling.to_minutes(), 90.0);
/// assert_eq!(bulk.to_minutes(), 210.0);
///
/// // Dimensionless ratios fall out of division
/// let ratio = bulk / doubling;
/// assert!((ratio - 210.0 / 90.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Time(f64); // Base unit: Minutes

impl Time {
    /// Creates a zero time value
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Creates an unbounded time value (a proof that never completes).
    pub fn infinite() -> Self {
        Self(f64::INFINITY)
    }

    /// Creates a new `Time` from a value in minutes.
    pub fn from_minutes(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Time` from a value in hours.
    pub fn from_hours(value: f64) -> Self {
        Self(value * MINUTES_PER_HOUR)
    }

    /// Creates a new `Time` from separate hour and minute components.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use units::Time;
    ///
    /// let t = Time::from_hours_minutes(3.0, 30.0);
    /// assert_eq!(t.to_minutes(), 210.0);
    /// ```
    pub fn from_hours_minutes(hours: f64, minutes: f64) -> Self {
        Self(hours * MINUTES_PER_HOUR + minutes)
    }

    /// Creates a new `Time` from a value in seconds.
    pub fn from_seconds(value: f64) -> Self {
        Self(value / SECONDS_PER_MINUTE)
    }

    /// Returns the time in minutes.
    pub fn to_minutes(&self) -> f64 {
        self.0
    }

    /// Converts the time to hours.
    pub fn to_hours(&self) -> f64 {
        self.0 / MINUTES_PER_HOUR
    }

    /// Converts the time to seconds.
    pub fn to_seconds(&self) -> f64 {
        self.0 * SECONDS_PER_MINUTE
    }

    /// Splits the time into whole hours and whole minutes, clock style.
    ///
    /// Non-finite or negative values split to `(0, 0)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use units::Time;
    ///
    /// assert_eq!(Time::from_minutes(150.5).to_hours_minutes(), (2, 30));
    /// assert_eq!(Time::infinite().to_hours_minutes(), (0, 0));
    /// ```
    pub fn to_hours_minutes(&self) -> (u64, u64) {
        if !self.0.is_finite() || self.0 < 0.0 {
            return (0, 0);
        }
        let whole_minutes = self.0.floor() as u64;
        (whole_minutes / 60, whole_minutes % 60)
    }

    /// Whether this time is bounded.
    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    /// Whether this time is unbounded.
    pub fn is_infinite(&self) -> bool {
        self.0.is_infinite()
    }
}

impl Add for Time {
    type Output = Time;

    fn add(self, rhs: Time) -> Time {
        Time(self.0 + rhs.0)
    }
}

impl Sub for Time {
    type Output = Time;

    fn sub(self, rhs: Time) -> Time {
        Time(self.0 - rhs.0)
    }
}

impl Mul<f64> for Time {
    type Output = Time;

    fn mul(self, rhs: f64) -> Time {
        Time(self.0 * rhs)
    }
}

impl Div<f64> for Time {
    type Output = Time;

    fn div(self, rhs: f64) -> Time {
        Time(self.0 / rhs)
    }
}

/// Division of Time by Time returns a dimensionless ratio
impl Div for Time {
    type Output = f64;

    fn div(self, rhs: Time) -> f64 {
        self.0 / rhs.0
    }
}

impl Div<&Time> for Time {
    type Output = f64;

    fn div(self, rhs: &Time) -> f64 {
        self.0 / rhs.0
    }
}

impl Div<&Time> for &Time {
    type Output = f64;

    fn div(self, rhs: &Time) -> f64 {
        self.0 / rhs.0
    }
}

/// Allow f64 * Time (commutative multiplication)
impl Mul<Time> for f64 {
    type Output = Time;

    fn mul(self, rhs: Time) -> Time {
        rhs * self
    }
}
