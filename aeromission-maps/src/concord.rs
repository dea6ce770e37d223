//! Arrival and pattern missions at Concord / Buchanan Field.

use jiff::Timestamp;
use math::{Frequency, Length};
use store::{
    Checkpoint, CheckpointType, FlightSetting, LocalizedText, Mission, MissionPosition,
    MissionsList, TargetPlane,
};

use crate::common_types;

/// 2024-06-14T13:15:38Z
const SUMMER_AFTERNOON: Timestamp = Timestamp::constant(1_718_370_938, 0);

const KCCR_LON: f64 = -122.057;
const KCCR_LAT: f64 = 37.9897;
const KCCR_ELEVATION: Length = Length::from_meters(8.);

#[must_use]
pub fn missions_list() -> MissionsList { MissionsList::new(vec![kccr_arrival(), kccr_pattern()]) }

fn runway_19l(kind: CheckpointType) -> Checkpoint {
    Checkpoint::new("19L", kind, -122.055_040_611_963_66, 37.993_168_229_891_225)
        .with_altitude(KCCR_ELEVATION)
        .with_direction(191.)
        .with_length(Length::from_meters(844.295_972_982_528_8))
}

fn kccr(kind: CheckpointType) -> Checkpoint {
    Checkpoint::new("KCCR", kind, KCCR_LON, KCCR_LAT).with_altitude(KCCR_ELEVATION)
}

fn kccr_parked() -> MissionPosition {
    MissionPosition {
        icao:      "KCCR".into(),
        longitude: KCCR_LON,
        latitude:  KCCR_LAT,
        dir:       191.,
        alt:       KCCR_ELEVATION,
    }
}

fn kccr_arrival() -> Mission {
    let mut mission = Mission::new("KCCR #1: Concord / Buchanan Field", vec![
        kccr(CheckpointType::Origin),
        runway_19l(CheckpointType::DepartureRunway),
        Checkpoint::new("CCR", CheckpointType::Approach, -122.055_6, 38.045_5)
            .with_altitude(Length::from_feet(1500.))
            .with_frequency(Frequency::from_mhz(117.))
            .with_fly_over(true),
        runway_19l(CheckpointType::DestinationRunway),
        kccr(CheckpointType::Destination),
    ]);
    mission.description = "It is a warm summer afternoon. You are 8 NM north of Concord / \
                           Buchanan Field.\nJoin the downwind for runway 19L and land."
        .into();
    mission.localized_texts = vec![LocalizedText::new(
        "de",
        "KCCR #1: Concord / Buchanan Field",
        "Ein warmer Sommernachmittag. Sie sind 8 NM nördlich von Concord / Buchanan Field.\nFliegen \
         Sie in den Gegenanflug der Piste 19L und landen Sie.",
    )];
    mission.tags = vec!["approach".into(), "pattern".into()];
    mission.difficulty = Some(0.2);
    mission.flight_setting = FlightSetting::Cruise;
    mission.aircraft = common_types::c172();
    mission.callsign = "N51911".into();
    mission.origin = MissionPosition {
        icao:      "KCCR".into(),
        longitude: -122.073_600_933_166_2,
        latitude:  38.122_300_745_843_944,
        dir:       174.375_115_111_434_52,
        alt:       Length::from_feet(3500.),
    };
    mission.destination = kccr_parked();
    mission.distance = Some(Length::from_nm(8.));
    mission.duration = Some(6. * 60.);
    mission.conditions = common_types::bay_area_summer(SUMMER_AFTERNOON);
    mission
}

fn kccr_pattern() -> Mission {
    let mut mission = Mission::new("KCCR #2: Traffic pattern", vec![
        kccr(CheckpointType::Origin),
        runway_19l(CheckpointType::DepartureRunway),
        Checkpoint::new("CROSSWIND", CheckpointType::Waypoint, -122.065_4, 37.971_2)
            .with_altitude(Length::from_feet(1000.))
            .with_altitude_constraint(true),
        Checkpoint::new("DOWNWIND", CheckpointType::Waypoint, -122.069_8, 38.003_9)
            .with_altitude(Length::from_feet(1000.))
            .with_altitude_constraint(true),
        runway_19l(CheckpointType::DestinationRunway),
        kccr(CheckpointType::Destination),
    ]);
    mission.description =
        "Take off from runway 19L, fly one right-hand pattern and land again.".into();
    mission.tags = vec!["pattern".into()];
    mission.difficulty = Some(0.1);
    mission.is_featured = Some(true);
    mission.flight_setting = FlightSetting::Takeoff;
    mission.aircraft = common_types::pitts();
    mission.callsign = "N540S".into();
    mission.origin = kccr_parked();
    mission.destination = kccr_parked();
    mission.finish = Some(TargetPlane::new(-122.055_040_611_963_66, 37.993_168_229_891_225, 191.));
    mission.conditions = common_types::bay_area_summer(SUMMER_AFTERNOON);
    mission
}
