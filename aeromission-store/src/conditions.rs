use std::convert::identity;

use jiff::Timestamp;
use jiff::tz::TimeZone;
use math::{Length, LengthUnit, Temp};
use serde::{Deserialize, Serialize};

use crate::{ConfigNode, LineStyle, Number, length_comment};


/// Time and weather of a mission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "schema", schemars(transform = without_time_default))]
pub struct Conditions {
    /// Start time of the mission. Only the UTC date and time of day are used.
    #[serde(default = "Timestamp::now")]
    #[cfg_attr(feature = "schema", schemars(with = "String"))]
    pub time:                Timestamp,
    /// Surface wind.
    #[serde(default)]
    pub wind:                Wind,
    /// Turbulence strength, `0..=1`.
    #[serde(default)]
    pub turbulence_strength: f64,
    /// Thermal strength, `0..=1`.
    ///
    /// Use [`set_temperature`](Self::set_temperature) to derive it from a ground temperature.
    #[serde(default)]
    pub thermal_strength:    f64,
    /// Horizontal visibility.
    #[serde(default = "default_visibility")]
    pub visibility:          Length,
    /// Cloud layers, lowest first.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub clouds:              Vec<Cloud>,
}

fn default_visibility() -> Length { Length::from_meters(25_000.) }

#[cfg(feature = "schema")]
fn without_time_default(schema: &mut schemars::Schema) {
    crate::remove_property_default(schema, "time");
}

impl Default for Conditions {
    fn default() -> Self { Self::at(Timestamp::now()) }
}

impl Conditions {
    /// Calm and clear conditions at the given time.
    pub fn at(time: Timestamp) -> Self {
        Self {
            time,
            wind: Wind::default(),
            turbulence_strength: 0.,
            thermal_strength: 0.,
            visibility: default_visibility(),
            clouds: Vec::new(),
        }
    }

    /// UTC hour of day as a fraction, ignoring sub-second precision.
    pub fn time_hours(&self) -> f64 {
        let utc = self.time.to_zoned(TimeZone::UTC);
        f64::from(utc.hour()) + f64::from(utc.minute()) / 60. + f64::from(utc.second()) / 3600.
    }

    /// UTC time of day as `HH:MM:SS`.
    pub fn time_presentational(&self) -> String {
        let utc = self.time.to_zoned(TimeZone::UTC);
        format!("{:02}:{:02}:{:02}", utc.hour(), utc.minute(), utc.second())
    }

    /// Visibility in statute miles.
    pub fn visibility_sm(&self) -> f64 { self.visibility.into_statute_miles() }

    /// Sets the visibility in statute miles.
    pub fn set_visibility_sm(&mut self, miles: f64) {
        self.visibility = Length::from_statute_miles(miles);
    }

    /// Ground temperature implied by the thermal strength.
    pub fn temperature(&self) -> Temp { Temp::from_thermal_strength(self.thermal_strength) }

    /// Sets the thermal strength from a ground temperature.
    pub fn set_temperature(&mut self, temp: Temp) {
        self.thermal_strength = temp.into_thermal_strength();
    }

    /// Builds the `conditions` node.
    ///
    /// A mission without clouds is written with a single clear layer.
    pub fn to_node(&self) -> ConfigNode {
        let utc = self.time.to_zoned(TimeZone::UTC);
        let time = ConfigNode::new("tm_time_utc", "time")
            .append_child("int32", "time_year", utc.year())
            .append_child("int32", "time_month", utc.month())
            .append_child("int32", "time_day", utc.day())
            .append_annotated(
                "float64",
                "time_hours",
                self.time_hours(),
                format!("{} UTC", self.time_presentational()),
            );

        let clear = [Cloud::default()];
        let clouds = if self.clouds.is_empty() { &clear[..] } else { &self.clouds[..] };

        ConfigNode::new("tmmission_conditions", "conditions")
            .append(time)
            .append_child("float64", "wind_direction", self.wind.direction)
            .append_annotated("float64", "wind_speed", self.wind.speed, "kts")
            .append_annotated("float64", "wind_gusts", self.wind.gusts, "kts")
            .append_child("float64", "turbulence_strength", self.turbulence_strength)
            .append_annotated(
                "float64",
                "thermal_strength",
                self.thermal_strength,
                format!("{} °C", Number(self.temperature().into_celsius())),
            )
            .append_annotated(
                "float64",
                "visibility",
                self.visibility.into_meters(),
                length_comment(self.visibility, LengthUnit::StatuteMiles, identity),
            )
            .extend(clouds.iter().enumerate().flat_map(|(index, cloud)| cloud.to_nodes(index)))
    }
}

/// Surface wind.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct Wind {
    /// Direction the wind blows from, in degrees.
    pub direction: f64,
    /// Mean speed in knots.
    pub speed:     f64,
    /// Gust speed in knots.
    pub gusts:     f64,
}

/// A cloud layer.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct Cloud {
    /// Sky coverage, `0..=1`.
    pub cover: f64,
    /// Cloud base above ground level.
    pub base:  Length,
}

impl Cloud {
    /// Creates a layer from its coverage and base.
    pub fn new(cover: f64, base: Length) -> Self { Self { cover, base } }

    /// Creates a layer with its base given in feet AGL.
    pub fn in_feet(cover: f64, base_feet: f64) -> Self {
        Self::new(cover, Length::from_feet(base_feet))
    }

    /// Cloud base in feet AGL.
    pub fn base_feet(&self) -> f64 { self.base.into_feet() }

    /// Sets the cloud base in feet AGL.
    pub fn set_base_feet(&mut self, base_feet: f64) { self.base = Length::from_feet(base_feet); }

    /// METAR coverage code of this layer.
    pub fn cover_code(&self) -> CloudCover {
        if self.cover < 1. / 8. {
            CloudCover::Clear
        } else if self.cover <= 2. / 8. {
            CloudCover::Few
        } else if self.cover <= 4. / 8. {
            CloudCover::Scattered
        } else if self.cover <= 7. / 8. {
            CloudCover::Broken
        } else {
            CloudCover::Overcast
        }
    }

    /// Builds the cover and base nodes of the layer at `index`.
    ///
    /// The simulator only reads the first two layers;
    /// higher layers are written commented out.
    pub fn to_nodes(&self, index: usize) -> [ConfigNode; 2] {
        let name = match index {
            0 => "cloud",
            1 => "cirrus",
            2 => "cumulus_mediocris",
            _ => "more_clouds",
        };
        let line_style = if index <= 1 { LineStyle::Plain } else { LineStyle::Commented };

        [
            ConfigNode::leaf("float64", format!("{name}_cover"), self.cover)
                .with_comment(<&str>::from(self.cover_code()))
                .with_line_style(line_style),
            ConfigNode::leaf("float64", format!("{name}_base"), self.base.into_meters())
                .with_comment(format!(
                    "{} AGL",
                    length_comment(self.base, LengthUnit::Feet, identity)
                ))
                .with_line_style(line_style),
        ]
    }
}

/// METAR sky coverage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::IntoStaticStr, strum::EnumIter)]
pub enum CloudCover {
    /// Less than 1/8.
    #[strum(serialize = "CLR")]
    Clear,
    /// Up to 2/8.
    #[strum(serialize = "FEW")]
    Few,
    /// Up to 4/8.
    #[strum(serialize = "SCT")]
    Scattered,
    /// Up to 7/8.
    #[strum(serialize = "BKN")]
    Broken,
    /// More than 7/8.
    #[strum(serialize = "OVC")]
    Overcast,
}
