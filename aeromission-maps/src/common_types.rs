use math::{Length, Temp};
use store::{Aircraft, Cloud, Conditions, Wind};

#[must_use]
pub fn c172() -> Aircraft { Aircraft::new("c172", "C172") }

#[must_use]
pub fn b58() -> Aircraft { Aircraft::new("b58", "BE58") }

#[must_use]
pub fn pitts() -> Aircraft {
    Aircraft { name: "pitts".into(), icao: "PTS2".into(), livery: "red".into() }
}

/// Few clouds with a fresh breeze,
/// matching a typical summer afternoon in the Bay Area.
#[must_use]
pub fn bay_area_summer(time: jiff::Timestamp) -> Conditions {
    let mut conditions = Conditions::at(time);
    conditions.wind = Wind { direction: 190., speed: 11., gusts: 22. };
    conditions.turbulence_strength = 0.2;
    conditions.set_temperature(Temp::from_celsius(21.));
    conditions.set_visibility_sm(9.);
    conditions.clouds = vec![Cloud::in_feet(0.1, 5000.), Cloud::in_feet(0.2, 7500.)];
    conditions
}

/// Low broken layer over the islands.
#[must_use]
pub fn marine_layer(time: jiff::Timestamp) -> Conditions {
    let mut conditions = Conditions::at(time);
    conditions.wind = Wind { direction: 240., speed: 8., gusts: 8. };
    conditions.set_temperature(Temp::from_celsius(14.));
    conditions.visibility = Length::from_statute_miles(4.);
    conditions.clouds = vec![
        Cloud::in_feet(0.7, 1200.),
        Cloud::in_feet(0.4, 4000.),
        Cloud::in_feet(0.9, 11000.),
    ];
    conditions
}
