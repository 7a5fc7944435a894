/// Yeast activity coefficient (hours · %IDY). Lower values mean a more
/// active culture: halving this constant halves every doubling time.
pub const YEAST_ACTIVITY: f64 = 0.4;

/// Reference temperature (°C) at which the thermal factor equals 1.
pub const REFERENCE_TEMPERATURE_C: f64 = 30.0;

/// Temperature interval (°C) over which fermentation rate doubles.
pub const RATE_DOUBLING_INTERVAL_C: f64 = 10.0;

/// Fractional fermentation slowdown per percentage point of salt.
pub const SALT_RETARDATION: f64 = 0.05;

/// Hydration (%) at which the hydration factor equals 1. Wetter dough
/// ferments faster, drier dough slower.
pub const REFERENCE_HYDRATION: f64 = 60.0;

/// Decimal digits kept when solving for a required yeast percentage.
pub const IDY_DECIMAL_DIGITS: u32 = 4;
