use std::io::Read;
use std::time::Duration;
use std::{fs, thread};

use store::MissionsList;

use crate::OutputFormat;

#[test]
fn builtins_render_in_both_formats() {
    for (name, list) in crate::builtins() {
        assert!(!list.missions.is_empty(), "{name} has no missions");
        for format in [OutputFormat::Tmc, OutputFormat::Xml] {
            let rendered = format.render(&list).unwrap();
            for mission in &list.missions {
                let title = match format {
                    OutputFormat::Tmc => store::node::escape_bracketed(&mission.title),
                    OutputFormat::Xml => store::node::escape_xml(&mission.title),
                };
                assert!(rendered.contains(&title), "{name} is missing {title} in {format:?}");
            }
        }
    }
}

#[test]
fn builtin_names_are_unique() {
    let mut names: Vec<_> = crate::builtins().map(|(name, _)| name).collect();
    let count = names.len();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), count);
}

#[test]
fn build_assets_writes_one_file_per_builtin() {
    let dir = tempfile::tempdir().unwrap();
    let missions_dir = dir.path().join("nested").join("missions");

    crate::build_assets(&missions_dir, OutputFormat::Tmc).unwrap();
    // existing directories are reused
    crate::build_assets(&missions_dir, OutputFormat::Xml).unwrap();

    for (name, list) in crate::builtins() {
        let tmc = fs::read_to_string(missions_dir.join(format!("{name}.tmc"))).unwrap();
        assert_eq!(tmc, format!("{}\n", list.render().unwrap()));
        assert!(tmc.starts_with("<[file][][]\n"));

        let xml = fs::read_to_string(missions_dir.join(format!("{name}.xml"))).unwrap();
        assert_eq!(xml, format!("{}\n", list.render_xml().unwrap()));
    }
}

#[test]
fn json_round_trip_renders_the_same_file() {
    let dir = tempfile::tempdir().unwrap();
    let json = dir.path().join("concord.json");
    let tmc = dir.path().join("concord.tmc");

    crate::to_json("concord", &json).unwrap();
    let parsed: MissionsList = serde_json::from_str(&fs::read_to_string(&json).unwrap()).unwrap();
    assert_eq!(parsed, crate::concord::missions_list());

    crate::from_json(&json, &tmc, OutputFormat::Tmc).unwrap();
    assert_eq!(
        fs::read_to_string(&tmc).unwrap(),
        format!("{}\n", crate::concord::missions_list().render().unwrap()),
    );
}

#[test]
fn from_json_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let json = dir.path().join("minimal.json");
    let xml = dir.path().join("minimal.xml");
    fs::write(
        &json,
        r#"{
            "missions": [{
                "title": "Hop",
                "conditions": { "time": "2024-06-14T13:15:38Z" },
                "checkpoints": [
                    { "type": "origin", "name": "KCCR", "longitude": -122.057, "latitude": 37.9897 },
                    { "type": "destination", "name": "KMVY", "longitude": -70.6139, "latitude": 41.3934 }
                ]
            }]
        }"#,
    )
    .unwrap();

    crate::from_json(&json, &xml, OutputFormat::Xml).unwrap();
    let output = fs::read_to_string(&xml).unwrap();
    assert!(output.contains(r#"<aircraft_name type="string8u">c172</aircraft_name>"#));
    assert!(output.contains(r#"<origin_icao type="stringt8c">KCCR</origin_icao>"#));
    assert!(output.contains(r#"<destination_icao type="stringt8c">KMVY</destination_icao>"#));
}

#[test]
fn from_json_rejects_short_flight_plan() {
    let dir = tempfile::tempdir().unwrap();
    let json = dir.path().join("short.json");
    fs::write(
        &json,
        r#"{ "missions": [{ "title": "Stuck", "checkpoints": [
            { "type": "origin", "name": "KCCR", "longitude": -122.057, "latitude": 37.9897 }
        ] }] }"#,
    )
    .unwrap();

    let err = crate::from_json(&json, &dir.path().join("short.tmc"), OutputFormat::Tmc)
        .expect_err("single checkpoint must be rejected");
    assert!(format!("{err:#}").contains("1 checkpoints"));
}

#[test]
fn to_json_rejects_unknown_name() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("unknown.json");

    assert!(crate::to_json("unknown", &output).is_err());
    assert!(!output.exists());
}

#[test]
fn gzipped_schema_matches_plain_schema() {
    let dir = tempfile::tempdir().unwrap();
    let plain = dir.path().join("schema.json");
    let gzip = dir.path().join("schema.json.gz");

    crate::json_schema(&plain, false).unwrap();
    crate::json_schema(&gzip, true).unwrap();

    let schema: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&plain).unwrap()).unwrap();
    assert!(schema["properties"]["missions"].is_object());

    let mut decoded = String::new();
    flate2::read::GzDecoder::new(fs::File::open(&gzip).unwrap())
        .read_to_string(&mut decoded)
        .unwrap();
    let unzipped: serde_json::Value = serde_json::from_str(&decoded).unwrap();
    assert_eq!(unzipped, schema);
}

#[test]
fn schema_does_not_depend_on_current_time() {
    let first = serde_json::to_value(schemars::schema_for!(MissionsList)).unwrap();
    thread::sleep(Duration::from_millis(5));
    let second = serde_json::to_value(schemars::schema_for!(MissionsList)).unwrap();
    assert_eq!(first, second);

    let conditions = &first["$defs"]["Conditions"];
    assert!(conditions["properties"]["time"].is_object());
    assert!(conditions["properties"]["time"].get("default").is_none());
    assert!(first["$defs"]["Mission"]["properties"]["conditions"].get("default").is_none());
}

#[test]
fn vineyard_title_is_escaped_in_xml() {
    let rendered = crate::vineyard::missions_list().render_xml().unwrap();
    assert!(rendered.contains("KMVY #1: Martha&#039;s Vineyard"));
    assert!(!rendered.contains("Martha's"));
}

#[test]
fn concord_arrival_starts_on_summer_afternoon() {
    let list = crate::concord::missions_list();
    let rendered = list.render().unwrap();

    assert!(rendered.contains("<[int32][time_year][2024]>"));
    assert!(rendered.contains("// 13:15:38 UTC"));
    assert!(rendered.contains("<[float64][origin_alt][1066.799965862401]> // 3500 ft MSL"));
    assert!(rendered.contains("// <[string8][aircraft_livery][red]>"));
}
