//! Unit types shared by the mission schema.
//!
//! Values are stored in the units the simulator's files use,
//! so converting a quantity back to its file representation is lossless.

mod units;
pub use units::*;
