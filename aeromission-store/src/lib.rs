//! Schema for mission files and the configuration tree they are written as.

#![warn(clippy::pedantic)]
#![cfg_attr(feature = "precommit-checks", deny(warnings, clippy::pedantic, clippy::dbg_macro))]
#![cfg_attr(not(feature = "precommit-checks"), allow(dead_code, unused_variables, unused_imports))]
#![cfg_attr(feature = "rust-analyzer", warn(warnings, clippy::pedantic, clippy::dbg_macro))]
#![forbid(missing_docs)]

use math::{LengthUnit, UnitEnum};

pub mod node;
pub use node::{ConfigNode, LineStyle, Number, Value};

mod checkpoint;
pub use checkpoint::*;

mod conditions;
pub use conditions::*;

mod list;
pub use list::*;

mod localized;
pub use localized::*;

mod mission;
pub use mission::*;

mod target_plane;
pub use target_plane::*;

/// Errors when building a mission file.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The simulator needs at least an origin and a destination checkpoint.
    #[error("Mission {title:?} has {count} checkpoints, expected at least 2")]
    TooFewCheckpoints {
        /// Title of the offending mission.
        title: String,
        /// Number of checkpoints the mission has.
        count: usize,
    },
}

/// Formats a length for a comment, e.g. `3500 ft`.
fn length_comment(length: math::Length, unit: LengthUnit, round: fn(f64) -> f64) -> String {
    let value = round(unit.quantity_to_float()(length));
    format!("{} {}", Number(value), unit.to_str())
}

/// Drops the `default` of a property whose default depends on the current time,
/// so that the generated schema is reproducible.
#[cfg(feature = "schema")]
fn remove_property_default(schema: &mut schemars::Schema, property: &str) {
    if let Some(property) = schema
        .get_mut("properties")
        .and_then(|properties| properties.get_mut(property))
        .and_then(|property| property.as_object_mut())
    {
        property.remove("default");
    }
}
