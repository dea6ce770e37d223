use std::marker::PhantomData;
use std::{fmt, ops};

use crate::{DtZero, Quantity};

pub struct TempBase;

/// Difference in temperature, in K.
pub type TempDelta = Quantity<f64, TempBase, DtZero>;

impl TempDelta {
    #[must_use]
    pub const fn from_kelvins(kelvins: f64) -> Self { Self(kelvins, PhantomData) }

    #[must_use]
    pub const fn into_kelvins(self) -> f64 { self.0 }
}

impl fmt::Debug for TempDelta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TempDelta").field("kelvins", &self.0).finish()
    }
}

/// Ground temperature at which thermals start to form.
const THERMAL_ONSET_CELSIUS: f64 = -15.0;
/// Width of the temperature band mapped onto thermal strength `0..=1`.
const THERMAL_RANGE_CELSIUS: f64 = 50.0;

/// Absolute temperature value.
///
/// Stored in degrees Celsius.
#[derive(Clone, Copy, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
pub struct Temp(pub TempDelta);

impl Temp {
    /// Freezing point of water, equivalent to `from_celsius(0.0)`.
    pub const WATER_FREEZING: Self = Self(TempDelta::new(0.0));

    const FREEZING_KELVINS: f64 = 273.15;

    #[must_use]
    pub const fn from_kelvins(kelvins: f64) -> Self {
        Self::from_celsius(kelvins - Self::FREEZING_KELVINS)
    }

    #[must_use]
    pub const fn into_kelvins(self) -> f64 { self.0.0 + Self::FREEZING_KELVINS }

    #[must_use]
    pub const fn from_celsius(celsius: f64) -> Self { Self(TempDelta::from_kelvins(celsius)) }

    #[must_use]
    pub const fn into_celsius(self) -> f64 { self.0.0 }

    #[must_use]
    pub const fn from_fahrenheit(fahrenheit: f64) -> Self {
        Self::from_celsius((fahrenheit - 32.0) / 1.8)
    }

    #[must_use]
    pub const fn into_fahrenheit(self) -> f64 { self.into_celsius() * 1.8 + 32.0 }

    /// Thermal strength produced by this ground temperature.
    ///
    /// -15 °C and below yields no thermals, 35 °C yields full strength,
    /// with a quadratic ramp in between.
    #[must_use]
    pub fn into_thermal_strength(self) -> f64 {
        let ramp = (self.into_celsius() - THERMAL_ONSET_CELSIUS) / THERMAL_RANGE_CELSIUS;
        ramp.max(0.0).powi(2)
    }

    /// Inverse of [`into_thermal_strength`](Self::into_thermal_strength).
    ///
    /// A strength of 0 maps to the onset temperature.
    #[must_use]
    pub fn from_thermal_strength(strength: f64) -> Self {
        Self::from_celsius(strength.sqrt() * THERMAL_RANGE_CELSIUS + THERMAL_ONSET_CELSIUS)
    }
}

#[cfg(feature = "schema")]
impl schemars::JsonSchema for Temp {
    fn schema_name() -> std::borrow::Cow<'static, str> { "Temperature".into() }

    fn json_schema(generator: &mut schemars::SchemaGenerator) -> schemars::Schema {
        <TempDelta as schemars::JsonSchema>::json_schema(generator)
    }
}

impl fmt::Debug for Temp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Temperature").field("celsius", &self.into_celsius()).finish()
    }
}

impl ops::Sub for Temp {
    type Output = TempDelta;

    fn sub(self, rhs: Self) -> Self::Output { self.0 - rhs.0 }
}
