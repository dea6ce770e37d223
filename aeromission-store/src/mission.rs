use std::borrow::Cow;

use math::{Length, LengthUnit};
use serde::{Deserialize, Serialize};

use crate::{
    Checkpoint, Conditions, ConfigNode, Error, LocalizedText, Number, TargetPlane, length_comment,
};


/// A single flight with its aircraft, weather and flight plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "schema", schemars(transform = without_conditions_default))]
pub struct Mission {
    /// Title shown in the mission list.
    pub title:           String,
    /// Briefing text, may span multiple lines.
    #[serde(default)]
    pub description:     String,
    /// Name of the aircraft tutorial opened by this mission.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tutorial_name:   Option<String>,
    /// Translations of `title` and `description`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub localized_texts: Vec<LocalizedText>,
    /// Free-form tags.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags:            Vec<String>,
    /// Whether the mission is highlighted in the list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_featured:     Option<bool>,
    /// Difficulty, usually between 0 and 2. Not clamped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty:      Option<f64>,
    /// Initial state of the aircraft systems.
    #[serde(default)]
    pub flight_setting:  FlightSetting,
    /// The aircraft to fly.
    #[serde(default)]
    pub aircraft:        Aircraft,
    /// Radio callsign.
    #[serde(default)]
    pub callsign:        String,
    /// Start position.
    ///
    /// If `icao` is empty, the first checkpoint is used.
    #[serde(default)]
    pub origin:          MissionPosition,
    /// Final position.
    ///
    /// If `icao` is empty, the last checkpoint is used.
    #[serde(default)]
    pub destination:     MissionPosition,
    /// Flight plan distance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance:        Option<Length>,
    /// Planned flight time in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration:        Option<f64>,
    /// Whether the mission follows an airline schedule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_scheduled:    Option<bool>,
    /// Plane to cross to finish the mission.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish:          Option<TargetPlane>,
    /// Time and weather.
    #[serde(default)]
    pub conditions:      Conditions,
    /// The flight plan, with at least an origin and a destination.
    pub checkpoints:     Vec<Checkpoint>,
}

impl Mission {
    /// Creates a mission with default settings.
    pub fn new(title: impl Into<String>, checkpoints: Vec<Checkpoint>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            tutorial_name: None,
            localized_texts: Vec::new(),
            tags: Vec::new(),
            is_featured: None,
            difficulty: None,
            flight_setting: FlightSetting::default(),
            aircraft: Aircraft::default(),
            callsign: String::new(),
            origin: MissionPosition::default(),
            destination: MissionPosition::default(),
            distance: None,
            duration: None,
            is_scheduled: None,
            finish: None,
            conditions: Conditions::default(),
            checkpoints,
        }
    }

    /// The origin written to the file,
    /// derived from the first checkpoint if no origin airport is set.
    pub fn effective_origin(&self) -> Cow<'_, MissionPosition> {
        match self.checkpoints.first() {
            Some(first) if self.origin.icao.is_empty() => {
                tracing::debug!(
                    title = %self.title,
                    checkpoint = %first.name,
                    "Origin taken from first checkpoint"
                );
                Cow::Owned(MissionPosition::from_checkpoint(first, self.origin.dir))
            }
            _ => Cow::Borrowed(&self.origin),
        }
    }

    /// The destination written to the file,
    /// derived from the last checkpoint if no destination airport is set.
    pub fn effective_destination(&self) -> Cow<'_, MissionPosition> {
        match self.checkpoints.last() {
            Some(last) if self.destination.icao.is_empty() => {
                tracing::debug!(
                    title = %self.title,
                    checkpoint = %last.name,
                    "Destination taken from last checkpoint"
                );
                Cow::Owned(MissionPosition::from_checkpoint(last, last.direction.unwrap_or(0.)))
            }
            _ => Cow::Borrowed(&self.destination),
        }
    }

    /// Builds the `mission` node.
    ///
    /// The mission itself is not modified.
    ///
    /// # Errors
    /// Returns [`Error::TooFewCheckpoints`] if the flight plan has fewer than two checkpoints.
    pub fn to_node(&self) -> Result<ConfigNode, Error> {
        if self.checkpoints.len() < 2 {
            return Err(Error::TooFewCheckpoints {
                title: self.title.clone(),
                count: self.checkpoints.len(),
            });
        }

        let origin = self.effective_origin();
        let destination = self.effective_destination();

        let mut node = ConfigNode::new("tmmission_definition", "mission")
            .append_child("string8", "title", &self.title)
            .append_child("string8", "description", &self.description)
            .extend(self.tutorial_name.as_ref().map(|name| {
                ConfigNode::leaf("string8", "tutorial_name", name)
                    .with_comment(format!("Opens https://www.aerofly.com/aircraft-tutorials/{name}"))
            }));

        if !self.localized_texts.is_empty() {
            node.push(
                ConfigNode::new("list_tmmission_definition_localized", "localized_text").extend(
                    self.localized_texts.iter().enumerate().map(|(i, text)| text.to_node(i)),
                ),
            );
        }
        if !self.tags.is_empty() {
            node.push(ConfigNode::leaf("string8u", "tags", &self.tags[..]));
        }

        node = node
            .extend(self.difficulty.map(|value| ConfigNode::leaf("float64", "difficulty", value)))
            .extend(self.is_featured.map(|value| ConfigNode::leaf("bool", "is_featured", value)))
            .append_child("string8", "flight_setting", <&str>::from(self.flight_setting))
            .append_child("string8u", "aircraft_name", &self.aircraft.name);

        if !self.aircraft.livery.is_empty() {
            // not read by the simulator yet
            node.push(
                ConfigNode::commented("string8", "aircraft_livery").with_value(&self.aircraft.livery),
            );
        }

        node = node
            .append_child("stringt8c", "aircraft_icao", &self.aircraft.icao)
            .append_child("stringt8c", "callsign", &self.callsign)
            .extend(origin.to_nodes("origin"))
            .extend(destination.to_nodes("destination"))
            .extend(self.distance.map(|distance| {
                ConfigNode::leaf("float64", "distance", distance.into_meters())
                    .with_comment(length_comment(distance, LengthUnit::Kilometers, f64::round))
            }))
            .extend(self.duration.map(|duration| {
                ConfigNode::leaf("float64", "duration", duration)
                    .with_comment(format!("{} min", Number((duration / 60.).round())))
            }))
            .extend(self.is_scheduled.map(|value| ConfigNode::leaf("bool", "is_scheduled", value)))
            .extend(self.finish.as_ref().map(TargetPlane::to_node))
            .append(self.conditions.to_node())
            .append(
                ConfigNode::new("list_tmmission_checkpoint", "checkpoints").extend(
                    self.checkpoints.iter().enumerate().map(|(i, checkpoint)| checkpoint.to_node(i)),
                ),
            );

        Ok(node)
    }
}

#[cfg(feature = "schema")]
fn without_conditions_default(schema: &mut schemars::Schema) {
    crate::remove_property_default(schema, "conditions");
}

/// Initial state of the aircraft systems.
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
pub enum FlightSetting {
    /// All systems off.
    ColdAndDark,
    /// Parked with the engines off.
    BeforeStart,
    /// On the ground with the engines running.
    #[default]
    Taxi,
    /// Lined up on the runway.
    Takeoff,
    /// In flight.
    Cruise,
    /// Configured for the approach.
    Approach,
    /// Configured for landing.
    Landing,
    /// Glider on a winch.
    WinchLaunch,
    /// Glider behind a tow plane.
    Aerotow,
    /// At the gate, ready for pushback.
    Pushback,
}

/// The aircraft of a mission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct Aircraft {
    /// Lowercase simulator aircraft ID, e.g. `c172`.
    pub name:   String,
    /// ICAO type designator, e.g. `C172`.
    pub icao:   String,
    /// Livery name. Written commented out.
    pub livery: String,
}

impl Default for Aircraft {
    fn default() -> Self { Self { name: "c172".into(), icao: String::new(), livery: String::new() } }
}

impl Aircraft {
    /// Creates an aircraft with the default livery.
    pub fn new(name: impl Into<String>, icao: impl Into<String>) -> Self {
        Self { name: name.into(), icao: icao.into(), livery: String::new() }
    }
}

/// Origin or destination of a mission.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct MissionPosition {
    /// Uppercase ICAO airport code.
    pub icao:      String,
    /// WGS 84 longitude in degrees.
    pub longitude: f64,
    /// WGS 84 latitude in degrees.
    pub latitude:  f64,
    /// Heading of the aircraft in degrees.
    pub dir:       f64,
    /// Height above the WGS 84 ellipsoid.
    pub alt:       Length,
}

impl MissionPosition {
    fn from_checkpoint(checkpoint: &Checkpoint, dir: f64) -> Self {
        Self {
            icao: checkpoint.name.clone(),
            longitude: checkpoint.longitude,
            latitude: checkpoint.latitude,
            dir,
            alt: checkpoint.altitude,
        }
    }

    fn to_nodes(&self, prefix: &str) -> [ConfigNode; 4] {
        [
            ConfigNode::leaf("stringt8c", format!("{prefix}_icao"), &self.icao),
            ConfigNode::leaf("tmvector2d", format!("{prefix}_lon_lat"), [
                self.longitude,
                self.latitude,
            ]),
            ConfigNode::leaf("float64", format!("{prefix}_alt"), self.alt.into_meters()).with_comment(
                format!("{} MSL", length_comment(self.alt, LengthUnit::Feet, f64::ceil)),
            ),
            ConfigNode::leaf("float64", format!("{prefix}_dir"), self.dir),
        ]
    }
}
