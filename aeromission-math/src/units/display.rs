use crate::{Frequency, Length};

pub trait UnitEnum: Copy + Eq + strum::IntoEnumIterator {
    type Quantity;

    fn to_str(self) -> &'static str;

    fn float_to_quantity(self) -> fn(f64) -> Self::Quantity;
    fn quantity_to_float(self) -> fn(Self::Quantity) -> f64;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIter)]
pub enum LengthUnit {
    Meters,
    Feet,
    StatuteMiles,
    NauticalMiles,
    Kilometers,
}

impl UnitEnum for LengthUnit {
    type Quantity = Length;

    fn to_str(self) -> &'static str {
        match self {
            Self::Meters => "m",
            Self::Feet => "ft",
            Self::StatuteMiles => "SM",
            Self::NauticalMiles => "nmi",
            Self::Kilometers => "km",
        }
    }

    #[inline]
    fn float_to_quantity(self) -> fn(f64) -> Length {
        match self {
            Self::Meters => Length::from_meters,
            Self::Feet => Length::from_feet,
            Self::StatuteMiles => Length::from_statute_miles,
            Self::NauticalMiles => Length::from_nm,
            Self::Kilometers => Length::from_km,
        }
    }

    #[inline]
    fn quantity_to_float(self) -> fn(Length) -> f64 {
        match self {
            Self::Meters => Length::into_meters,
            Self::Feet => Length::into_feet,
            Self::StatuteMiles => Length::into_statute_miles,
            Self::NauticalMiles => Length::into_nm,
            Self::Kilometers => Length::into_km,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIter)]
pub enum FrequencyUnit {
    Hertz,
    Kilohertz,
    Megahertz,
}

impl UnitEnum for FrequencyUnit {
    type Quantity = Frequency;

    fn to_str(self) -> &'static str {
        match self {
            Self::Hertz => "Hz",
            Self::Kilohertz => "kHz",
            Self::Megahertz => "MHz",
        }
    }

    #[inline]
    fn float_to_quantity(self) -> fn(f64) -> Frequency {
        match self {
            Self::Hertz => Frequency::from_hz,
            Self::Kilohertz => Frequency::from_khz,
            Self::Megahertz => Frequency::from_mhz,
        }
    }

    #[inline]
    fn quantity_to_float(self) -> fn(Frequency) -> f64 {
        match self {
            Self::Hertz => Frequency::into_hz,
            Self::Kilohertz => Frequency::into_khz,
            Self::Megahertz => Frequency::into_mhz,
        }
    }
}
