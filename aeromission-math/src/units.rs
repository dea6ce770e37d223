use std::marker::PhantomData;
use std::{cmp, fmt, ops};

mod display;
pub use display::{FrequencyUnit, LengthUnit, UnitEnum};
mod temp;
pub use temp::{Temp, TempDelta};


/// Converts meters to feet.
pub const FEET_PER_METER: f64 = 3.28084;
/// Converts statute miles to meters.
pub const METERS_PER_STATUTE_MILE: f64 = 1609.344;
/// Converts nautical miles to meters.
pub const METERS_PER_NM: f64 = 1852.;
/// Converts kilometers to meters.
pub const METERS_PER_KM: f64 = 1000.;

pub struct Quantity<T, Base, Dt>(pub T, pub PhantomData<(Base, Dt)>);

impl<T, Base, Dt> Quantity<T, Base, Dt> {
    pub const fn new(value: T) -> Self { Self(value, PhantomData) }
}

impl<Base, Dt> Quantity<f64, Base, Dt> {
    pub const ZERO: Self = Self(0., PhantomData);

    #[must_use]
    pub fn abs(self) -> Self { Self(self.0.abs(), PhantomData) }

    #[must_use]
    pub fn is_finite(self) -> bool { self.0.is_finite() }

    #[must_use]
    pub fn is_negative(self) -> bool { self.0 < 0. }
}

impl<T, Base, Dt> Default for Quantity<T, Base, Dt>
where
    T: Default,
{
    fn default() -> Self { Self(T::default(), PhantomData) }
}

impl<T, Base, Dt> Clone for Quantity<T, Base, Dt>
where
    T: Clone,
{
    fn clone(&self) -> Self { Self(self.0.clone(), PhantomData) }
}

impl<T, Base, Dt> Copy for Quantity<T, Base, Dt> where T: Copy {}

impl<T, Base, Dt> PartialEq for Quantity<T, Base, Dt>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool { self.0 == other.0 }
}

impl<T, Base, Dt> PartialOrd for Quantity<T, Base, Dt>
where
    T: PartialOrd,
{
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> { self.0.partial_cmp(&other.0) }
}

impl<T, Base, Dt> ops::Add for Quantity<T, Base, Dt>
where
    T: ops::Add<Output = T>,
{
    type Output = Self;

    fn add(self, other: Self) -> Self { Self(self.0 + other.0, PhantomData) }
}

impl<T, Base, Dt> ops::Sub for Quantity<T, Base, Dt>
where
    T: ops::Sub<Output = T>,
{
    type Output = Self;

    fn sub(self, other: Self) -> Self { Self(self.0 - other.0, PhantomData) }
}

impl<T, Base, Dt> ops::Neg for Quantity<T, Base, Dt>
where
    T: ops::Neg<Output = T>,
{
    type Output = Self;

    fn neg(self) -> Self { Self(-self.0, PhantomData) }
}

impl<T, Base, Dt> ops::Mul<f64> for Quantity<T, Base, Dt>
where
    T: ops::Mul<f64, Output = T>,
{
    type Output = Self;

    fn mul(self, other: f64) -> Self { Self(self.0 * other, PhantomData) }
}

impl<T, Base, Dt> ops::Div<f64> for Quantity<T, Base, Dt>
where
    T: ops::Div<f64, Output = T>,
{
    type Output = Self;

    fn div(self, other: f64) -> Self { Self(self.0 / other, PhantomData) }
}

impl<T, Base, Dt> ops::Div for Quantity<T, Base, Dt>
where
    T: ops::Div,
{
    type Output = T::Output;

    fn div(self, other: Self) -> Self::Output { self.0 / other.0 }
}

pub struct DtZero;

pub struct Ddt<Dt>(Dt);

pub type DtOne = Ddt<DtZero>;

pub struct LengthBase;

/// A distance quantity. Internal representation is in meters,
/// the unit used by mission files.
pub type Length = Quantity<f64, LengthBase, DtZero>;

pub struct RatioBase;

/// A frequency quantity. Internal representation is in Hz.
pub type Frequency = Quantity<f64, RatioBase, DtOne>;

impl fmt::Debug for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Length")
            .field("meters", &self.into_meters())
            .field("feet", &self.into_feet())
            .finish()
    }
}

impl fmt::Debug for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Frequency").field("hz", &self.0).finish()
    }
}

impl Length {
    #[must_use]
    pub const fn from_meters(meters: f64) -> Self { Self(meters, PhantomData) }

    #[must_use]
    pub const fn into_meters(self) -> f64 { self.0 }

    #[must_use]
    pub const fn from_feet(feet: f64) -> Self { Self(feet / FEET_PER_METER, PhantomData) }

    #[must_use]
    pub const fn into_feet(self) -> f64 { self.0 * FEET_PER_METER }

    #[must_use]
    pub const fn from_statute_miles(miles: f64) -> Self {
        Self(miles * METERS_PER_STATUTE_MILE, PhantomData)
    }

    #[must_use]
    pub const fn into_statute_miles(self) -> f64 { self.0 / METERS_PER_STATUTE_MILE }

    #[must_use]
    pub const fn from_nm(nm: f64) -> Self { Self(nm * METERS_PER_NM, PhantomData) }

    #[must_use]
    pub const fn into_nm(self) -> f64 { self.0 / METERS_PER_NM }

    #[must_use]
    pub const fn from_km(km: f64) -> Self { Self(km * METERS_PER_KM, PhantomData) }

    #[must_use]
    pub const fn into_km(self) -> f64 { self.0 / METERS_PER_KM }
}

impl Frequency {
    #[must_use]
    pub const fn from_hz(hz: f64) -> Self { Self(hz, PhantomData) }

    #[must_use]
    pub const fn into_hz(self) -> f64 { self.0 }

    #[must_use]
    pub const fn from_khz(khz: f64) -> Self { Self(khz * 1e3, PhantomData) }

    #[must_use]
    pub const fn into_khz(self) -> f64 { self.0 / 1e3 }

    #[must_use]
    pub const fn from_mhz(mhz: f64) -> Self { Self(mhz * 1e6, PhantomData) }

    #[must_use]
    pub const fn into_mhz(self) -> f64 { self.0 / 1e6 }

    /// The largest unit in which this frequency reads above 1.
    #[must_use]
    pub fn preferred_unit(self) -> FrequencyUnit {
        if self.0 > 1e6 {
            FrequencyUnit::Megahertz
        } else if self.0 > 1e3 {
            FrequencyUnit::Kilohertz
        } else {
            FrequencyUnit::Hertz
        }
    }
}

pub trait IsFinite: Copy {
    fn is_finite(self) -> bool;
}

impl IsFinite for f64 {
    fn is_finite(self) -> bool { f64::is_finite(self) }
}

impl<T, Base, Dt> serde::Serialize for Quantity<T, Base, Dt>
where
    T: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de, T, Base, Dt> serde::Deserialize<'de> for Quantity<T, Base, Dt>
where
    T: serde::Deserialize<'de> + IsFinite,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::de::Deserializer<'de>,
    {
        let value = T::deserialize(deserializer)?;

        if !value.is_finite() {
            return Err(<D::Error as serde::de::Error>::custom("non-finite quantity"));
        }

        Ok(Self(value, PhantomData))
    }
}

#[cfg(feature = "schema")]
impl<T, Base, Dt> schemars::JsonSchema for Quantity<T, Base, Dt>
where
    T: schemars::JsonSchema,
{
    fn inline_schema() -> bool { true }

    fn schema_name() -> std::borrow::Cow<'static, str> { T::schema_name() }

    fn json_schema(generator: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(generator)
    }
}
