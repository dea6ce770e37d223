use math::{Frequency, Length, LengthUnit, UnitEnum};
use serde::{Deserialize, Serialize};

use crate::{ConfigNode, Number, length_comment};


/// Role of a checkpoint in the flight plan.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::IntoStaticStr,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub enum CheckpointType {
    /// The departure airport.
    Origin,
    /// The runway used for takeoff.
    DepartureRunway,
    /// A point of the departure procedure.
    Departure,
    /// An enroute waypoint.
    #[default]
    Waypoint,
    /// A point of the arrival procedure.
    Arrival,
    /// A point of the approach procedure.
    Approach,
    /// The runway used for landing.
    DestinationRunway,
    /// The destination airport.
    Destination,
}

/// A point of the flight plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct Checkpoint {
    /// Role of this checkpoint.
    #[serde(rename = "type")]
    pub kind:                CheckpointType,
    /// ICAO code of an airport, runway designator, navaid, fix or a custom name.
    pub name:                String,
    /// WGS 84 longitude in degrees.
    pub longitude:           f64,
    /// WGS 84 latitude in degrees.
    pub latitude:            f64,
    /// Height above the WGS 84 ellipsoid.
    #[serde(default)]
    pub altitude:            Length,
    /// Whether `altitude` is a mandatory altitude instead of a suggestion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub altitude_constraint: Option<bool>,
    /// Runway direction in degrees.
    ///
    /// Defaults to -1 for the first checkpoint and 0 for the others.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction:           Option<f64>,
    /// Runway slope.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slope:               Option<f64>,
    /// Runway length.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length:              Option<Length>,
    /// Frequency of the runway or navaid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency:           Option<Frequency>,
    /// Whether the waypoint must be flown over instead of turned ahead of.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fly_over:            Option<bool>,
}

impl Checkpoint {
    /// Creates a checkpoint at ground level with all optional attributes unset.
    pub fn new(name: impl Into<String>, kind: CheckpointType, longitude: f64, latitude: f64) -> Self {
        Self {
            kind,
            name: name.into(),
            longitude,
            latitude,
            altitude: Length::ZERO,
            altitude_constraint: None,
            direction: None,
            slope: None,
            length: None,
            frequency: None,
            fly_over: None,
        }
    }

    /// Sets the altitude.
    #[must_use]
    pub fn with_altitude(mut self, altitude: Length) -> Self {
        self.altitude = altitude;
        self
    }

    /// Sets whether the altitude is mandatory.
    #[must_use]
    pub fn with_altitude_constraint(mut self, constraint: bool) -> Self {
        self.altitude_constraint = Some(constraint);
        self
    }

    /// Sets the runway direction in degrees.
    #[must_use]
    pub fn with_direction(mut self, direction: f64) -> Self {
        self.direction = Some(direction);
        self
    }

    /// Sets the runway slope.
    #[must_use]
    pub fn with_slope(mut self, slope: f64) -> Self {
        self.slope = Some(slope);
        self
    }

    /// Sets the runway length.
    #[must_use]
    pub fn with_length(mut self, length: Length) -> Self {
        self.length = Some(length);
        self
    }

    /// Sets the runway or navaid frequency.
    #[must_use]
    pub fn with_frequency(mut self, frequency: Frequency) -> Self {
        self.frequency = Some(frequency);
        self
    }

    /// Sets whether the waypoint must be flown over.
    #[must_use]
    pub fn with_fly_over(mut self, fly_over: bool) -> Self {
        self.fly_over = Some(fly_over);
        self
    }

    /// Builds the `element` node for the checkpoint at `index` of the flight plan.
    pub fn to_node(&self, index: usize) -> ConfigNode {
        let default_direction = if index == 0 { -1.0 } else { 0.0 };

        ConfigNode::new("tmmission_checkpoint", "element")
            .with_value(index)
            .append_child("string8u", "type", <&str>::from(self.kind))
            .append_child("string8u", "name", &self.name)
            .append_child("vector2_float64", "lon_lat", [self.longitude, self.latitude])
            .append_annotated(
                "float64",
                "altitude",
                self.altitude.into_meters(),
                length_comment(self.altitude, LengthUnit::Feet, f64::ceil),
            )
            .append_child("float64", "direction", self.direction.unwrap_or(default_direction))
            .append_child("float64", "slope", self.slope.unwrap_or(0.0))
            .extend(self.altitude_constraint.map(|value| ConfigNode::leaf("bool", "alt_cst", value)))
            .extend(self.length.map(|length| {
                ConfigNode::leaf("float64", "length", length.into_meters())
                    .with_comment(length_comment(length, LengthUnit::Feet, f64::floor))
            }))
            .extend(self.frequency.map(|frequency| {
                ConfigNode::leaf("float64", "frequency", frequency.into_hz())
                    .with_comment(frequency_comment(frequency))
            }))
            .extend(self.fly_over.map(|value| ConfigNode::leaf("bool", "fly_over", value)))
    }
}

fn frequency_comment(frequency: Frequency) -> String {
    if frequency.into_hz() == 0.0 {
        return "None".into();
    }

    let unit = frequency.preferred_unit();
    format!("{} {}", Number(unit.quantity_to_float()(frequency)), unit.to_str())
}
