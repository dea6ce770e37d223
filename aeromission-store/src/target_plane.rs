use serde::{Deserialize, Serialize};

use crate::ConfigNode;

/// A plane the aircraft must cross, e.g. to finish the mission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct TargetPlane {
    /// WGS 84 longitude in degrees.
    pub longitude: f64,
    /// WGS 84 latitude in degrees.
    pub latitude:  f64,
    /// Direction of crossing in degrees.
    pub dir:       f64,
    /// Label of the node, `finish` unless overridden.
    #[serde(default = "default_name")]
    pub name:      String,
}

fn default_name() -> String { "finish".into() }

impl TargetPlane {
    /// Creates a `finish` plane.
    pub fn new(longitude: f64, latitude: f64, dir: f64) -> Self {
        Self { longitude, latitude, dir, name: default_name() }
    }

    /// Overrides the node label.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds the target plane node.
    pub fn to_node(&self) -> ConfigNode {
        ConfigNode::new("tmmission_target_plane", self.name.as_str())
            .append_child("vector2_float64", "lon_lat", [self.longitude, self.latitude])
            .append_child("float64", "direction", self.dir)
    }
}
