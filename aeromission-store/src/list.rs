use serde::{Deserialize, Serialize};

use crate::{ConfigNode, Error, Mission};

#[cfg(test)]
mod tests;

/// Root structure of a mission file such as `custom_missions_user.tmc`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct MissionsList {
    /// Missions in file order.
    pub missions: Vec<Mission>,
}

impl MissionsList {
    /// Creates a list of missions.
    pub fn new(missions: Vec<Mission>) -> Self { Self { missions } }

    /// Builds the root `file` node.
    ///
    /// Consecutive missions are separated by a banner line.
    ///
    /// # Errors
    /// Returns the error of the first mission that cannot be built.
    pub fn to_node(&self) -> Result<ConfigNode, Error> {
        let mut missions = ConfigNode::spacer("list_tmmission_definition", "missions");
        for mission in &self.missions {
            missions.push(mission.to_node()?.with_comment(format!("End of {}", mission.title)));
        }

        Ok(ConfigNode::new("file", "").append(ConfigNode::new("tmmissions_list", "").append(missions)))
    }

    /// Renders the file in the bracketed format.
    pub fn render(&self) -> Result<String, Error> { Ok(self.to_node()?.render(0)) }

    /// Renders the file as XML.
    pub fn render_xml(&self) -> Result<String, Error> { Ok(self.to_node()?.render_xml(0)) }
}
