//! Instrument practice at Martha's Vineyard.

use jiff::Timestamp;
use math::{Frequency, Length};
use store::{Checkpoint, CheckpointType, FlightSetting, Mission, MissionsList};

use crate::common_types;

/// 2024-12-21T15:30:00Z
const WINTER_MORNING: Timestamp = Timestamp::constant(1_734_795_000, 0);

const KMVY_LON: f64 = -70.6139;
const KMVY_LAT: f64 = 41.3934;
const KMVY_ELEVATION: Length = Length::from_meters(20.);

#[must_use]
pub fn missions_list() -> MissionsList { MissionsList::new(vec![kmvy_approach()]) }

fn kmvy_approach() -> Mission {
    let mut mission = Mission::new("KMVY #1: Martha's Vineyard", vec![
        Checkpoint::new("KMVY", CheckpointType::Origin, KMVY_LON, KMVY_LAT)
            .with_altitude(KMVY_ELEVATION),
        Checkpoint::new(
            "24",
            CheckpointType::DepartureRunway,
            -70.607_302_343_709_52,
            41.399_093_035_543_366,
        )
        .with_altitude(KMVY_ELEVATION)
        .with_direction(221.)
        .with_length(Length::from_meters(1_677.619_146_316_187_4)),
        Checkpoint::new("MVY", CheckpointType::Arrival, -70.612_8, 41.466_1)
            .with_altitude(Length::from_feet(2000.))
            .with_frequency(Frequency::from_mhz(114.5)),
        Checkpoint::new(
            "24",
            CheckpointType::DestinationRunway,
            -70.607_302_343_709_52,
            41.399_093_035_543_366,
        )
        .with_altitude(KMVY_ELEVATION)
        .with_direction(221.)
        .with_length(Length::from_meters(1_677.619_146_316_187_4))
        .with_frequency(Frequency::from_mhz(108.7)),
        Checkpoint::new("KMVY", CheckpointType::Destination, KMVY_LON, KMVY_LAT)
            .with_altitude(KMVY_ELEVATION)
            .with_fly_over(false),
    ]);
    mission.description = "Depart runway 24 into the marine layer, \
                           return over the MVY VOR and fly the ILS back to runway 24."
        .into();
    mission.tags = vec!["ils".into(), "ifr".into()];
    mission.difficulty = Some(0.6);
    mission.flight_setting = FlightSetting::Taxi;
    mission.aircraft = common_types::b58();
    mission.callsign = "N58MV".into();
    // origin and destination follow the first and last checkpoints
    mission.conditions = common_types::marine_layer(WINTER_MORNING);
    mission
}
