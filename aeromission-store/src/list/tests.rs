use jiff::Timestamp;

use super::MissionsList;
use crate::{Checkpoint, CheckpointType, Conditions, Error, Mission};

fn mission(title: &str) -> Mission {
    let mut mission = Mission::new(title, vec![
        Checkpoint::new("KCCR", CheckpointType::Origin, -122.057, 37.9897),
        Checkpoint::new("KMVY", CheckpointType::Destination, -70.6139, 41.3934),
    ]);
    mission.conditions = Conditions::at("2024-06-14T13:15:38Z".parse::<Timestamp>().unwrap());
    mission
}

fn count(haystack: &str, needle: char) -> usize { haystack.chars().filter(|&c| c == needle).count() }

#[test]
fn file_structure() {
    let output = MissionsList::new(vec![mission("First")]).render().unwrap();

    assert!(output.starts_with(
        "<[file][][]\n    <[tmmissions_list][][]\n        <[list_tmmission_definition][missions][]\n"
    ));
    let banner = "-".repeat(77);
    assert!(output.ends_with(&format!(
        "            > // End of First\n// {banner}\n        >\n    >\n>"
    )));
    assert_eq!(count(&output, '<'), count(&output, '>'));
    assert_eq!(count(&output, '['), count(&output, ']'));
}

#[test]
fn missions_are_separated_by_banners() {
    let output = MissionsList::new(vec![mission("First"), mission("Second")]).render().unwrap();
    let banner = format!("\n// {}\n", "-".repeat(77));

    assert_eq!(output.matches(&banner).count(), 3);
    assert!(output.contains(&format!("> // End of First{banner}            <[tmmission_definition][mission][]")));
    assert!(output.find("End of First").unwrap() < output.find("End of Second").unwrap());
}

#[test]
fn xml_structure() {
    let output = MissionsList::new(vec![mission("A & B")]).render_xml().unwrap();

    assert!(output.starts_with(
        "<file type=\"file\">\n    <tmmissions_list type=\"tmmissions_list\">\n        \
         <missions type=\"list_tmmission_definition\">\n            \
         <mission type=\"tmmission_definition\">\n"
    ));
    assert!(output.contains("<title type=\"string8\">A &amp; B</title>"));
    assert!(output.contains("</mission> <!-- End of A &amp; B -->"));
    assert!(output.contains("<element type=\"tmmission_checkpoint\" index=\"1\">"));
    assert!(!output.contains("// ---"));
}

#[test]
fn invalid_mission_aborts() {
    let mut broken = mission("Broken");
    broken.checkpoints.pop();

    let err = MissionsList::new(vec![mission("Fine"), broken]).render().unwrap_err();
    assert!(matches!(&err, Error::TooFewCheckpoints { title, count: 1 } if title == "Broken"));
}

#[test]
fn empty_list() {
    let output = MissionsList::default().render().unwrap();
    assert_eq!(
        output,
        "<[file][][]\n    <[tmmissions_list][][]\n        \
         <[list_tmmission_definition][missions][]>\n    >\n>"
    );
}
