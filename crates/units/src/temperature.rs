use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// A physical temperature quantity using f64 precision.
///
/// The `Temperature` struct represents temperature with Celsius as the base
/// unit, following kitchen and baking conventions. Celsius is the natural
/// choice for dough work: recipes, ambient conditions and fridge settings are
/// all quoted in °C.
///
/// # Examples
///
/// ```rust
/// use units::Temperature;
///
/// // Create temperatures in different units
/// let ambient = Temperature::from_celsius(24.0);
/// let warm_kitchen = Temperature::from_fahrenheit(77.0);  // 25 °C
///
/// // Convert between units
/// let fahrenheit = ambient.to_fahrenheit();
/// let kelvin = ambient.to_kelvin();
///
/// // Use domain anchors
/// let cold_proof = Temperature::fridge();            // 4 °C
/// let room = Temperature::room_temperature();        // 21 °C
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Temperature(f64); // Base unit: Celsius

impl Temperature {
    /// Creates a new `Temperature` from a value in Celsius.
    ///
    /// This is the most direct constructor since Celsius is the base unit.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use units::Temperature;
    ///
    /// let ambient = Temperature::from_celsius(24.0);
    /// let cold = Temperature::from_celsius(4.0);
    /// ```
    pub fn from_celsius(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Temperature` from a value in Fahrenheit.
    ///
    /// Converts Fahrenheit to Celsius: °C = (°F - 32) × 5/9
    ///
    /// # Examples
    ///
    /// ```rust
    /// use units::Temperature;
    ///
    /// let freezing = Temperature::from_fahrenheit(32.0);  // 0 °C
    /// let warm = Temperature::from_fahrenheit(68.0);      // 20 °C
    /// ```
    pub fn from_fahrenheit(value: f64) -> Self {
        Self((value - 32.0) * 5.0 / 9.0)
    }

    /// Creates a new `Temperature` from a value in Kelvin.
    ///
    /// Converts Kelvin to Celsius: °C = K - 273.15
    pub fn from_kelvin(value: f64) -> Self {
        Self(value - 273.15)
    }

    /// Returns the temperature value in Celsius.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use units::Temperature;
    ///
    /// let temp = Temperature::from_fahrenheit(68.0);
    /// assert!((temp.to_celsius() - 20.0).abs() < 0.01);
    /// ```
    pub fn to_celsius(&self) -> f64 {
        self.0
    }

    /// Converts the temperature to Fahrenheit.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use units::Temperature;
    ///
    /// let temp = Temperature::from_celsius(0.0);
    /// assert!((temp.to_fahrenheit() - 32.0).abs() < 0.01);
    /// ```
    pub fn to_fahrenheit(&self) -> f64 {
        self.0 * 9.0 / 5.0 + 32.0
    }

    /// Converts the temperature to Kelvin.
    pub fn to_kelvin(&self) -> f64 {
        self.0 + 273.15
    }

    /// Domestic fridge temperature (4 °C), the usual cold-proof setting.
    pub fn fridge() -> Self {
        Self::from_celsius(4.0)
    }

    /// Typical room temperature (21 °C).
    pub fn room_temperature() -> Self {
        Self::from_celsius(21.0)
    }
}

impl Add for Temperature {
    type Output = Temperature;

    fn add(self, rhs: Temperature) -> Temperature {
        Temperature(self.0 + rhs.0)
    }
}

impl Sub for Temperature {
    type Output = Temperature;

    fn sub(self, rhs: Temperature) -> Temperature {
        Temperature(self.0 - rhs.0)
    }
}

impl Mul<f64> for Temperature {
    type Output = Temperature;

    fn mul(self, rhs: f64) -> Temperature {
        Temperature(self.0 * rhs)
    }
}

impl Div<f64> for Temperature {
    type Output = Temperature;

    fn div(self, rhs: f64) -> Temperature {
        Temperature(self.0 / rhs)
    }
}

/// Allow f64 * Temperature (commutative multiplication)
impl Mul<Temperature> for f64 {
    type Output = Temperature;

    fn mul(self, rhs: Temperature) -> Temperature {
        rhs * self
    }
}
