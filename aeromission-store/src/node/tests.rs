use super::{ConfigNode, LineStyle, Number, SPACER_SEPARATOR, Value, escape_bracketed, escape_xml};

fn count(haystack: &str, needle: char) -> usize { haystack.chars().filter(|&c| c == needle).count() }

fn sample_mission() -> ConfigNode {
    ConfigNode::new("file", "").append(
        ConfigNode::new("tmmission_definition", "mission")
            .append_child("string8", "title", "KCCR #1: Concord / Buchanan Field")
            .append_annotated("float64", "origin_alt", 1066.799_965_862_401, "3500 ft MSL"),
    )
}

#[test]
fn leaf_renders_on_one_line() {
    let node = ConfigNode::leaf("string8", "title", "Hello");
    assert_eq!(node.render(0), "<[string8][title][Hello]>");
    assert_eq!(node.render(2), "        <[string8][title][Hello]>");
}

#[test]
fn container_renders_children_indented() {
    let node = ConfigNode::new("tm_time_utc", "time")
        .append_child("int32", "time_year", 2024)
        .append_child("int32", "time_month", 5);
    assert_eq!(
        node.render(1),
        "    <[tm_time_utc][time][]\n        <[int32][time_year][2024]>\n        \
         <[int32][time_month][5]>\n    >"
    );
}

#[test]
fn example_mission_renders_origin_alt_with_comment() {
    let output = sample_mission().render(0);
    assert!(
        output.contains("<[float64][origin_alt][1066.799965862401]> // 3500 ft MSL\n"),
        "{output}"
    );
    assert!(output.contains("<[string8][title][KCCR #1: Concord / Buchanan Field]>"));
    assert_eq!(count(&output, '<'), count(&output, '>'));
    assert_eq!(count(&output, '['), count(&output, ']'));
}

#[test]
fn brackets_stay_balanced_with_escaped_values() {
    let node = ConfigNode::new("list", "items")
        .append_child("string8", "a", "[open")
        .append_child("string8", "b", "close]]")
        .append(ConfigNode::new("inner", "").append_child("string8u", "c", vec!["[x]", "y]"]));
    let output = node.render(0);
    assert_eq!(count(&output, '<'), count(&output, '>'));
    assert_eq!(count(&output, '['), count(&output, ']'));
}

#[test]
fn bracketed_escape_only_touches_brackets() {
    assert_eq!(escape_bracketed("a[b]c (d) <e>"), "a(b)c (d) <e>");

    let node = ConfigNode::leaf("string8", "description", "Runway [28L]");
    assert_eq!(node.render(0), "<[string8][description][Runway (28L)]>");
}

#[test]
fn xml_escape_all_entities() {
    assert_eq!(escape_xml(r#"& < > " '"#), "&amp; &lt; &gt; &quot; &#039;");
    assert_eq!(escape_xml("plain text 123"), "plain text 123");
}

#[test]
fn xml_leaf_and_comment() {
    let node = ConfigNode::leaf("string8", "title", "Tom & Jerry's").with_comment("a <b>");
    assert_eq!(
        node.render_xml(0),
        "<title type=\"string8\">Tom &amp; Jerry&#039;s</title> <!-- a &lt;b&gt; -->"
    );
}

#[test]
fn xml_container_uses_kind_when_label_is_empty() {
    let node = ConfigNode::new("tmmissions_list", "").append_child("float64", "x", 1.5);
    assert_eq!(
        node.render_xml(0),
        "<tmmissions_list type=\"tmmissions_list\">\n    <x type=\"float64\">1.5</x>\n</tmmissions_list>"
    );
}

#[test]
fn xml_container_index_attribute() {
    let node = ConfigNode::new("tmmission_checkpoint", "element")
        .with_value(3)
        .append_child("string8u", "name", "KCCR");
    let output = node.render_xml(1);
    assert!(output.starts_with("    <element type=\"tmmission_checkpoint\" index=\"3\">\n"), "{output}");
    assert!(output.ends_with("\n    </element>"), "{output}");
}

#[test]
fn zero_and_false_are_rendered() {
    let node = ConfigNode::new("c", "")
        .append_child("float64", "zero", 0.0)
        .append_child("bool", "flag", false)
        .append_child("string8", "empty", "");
    let output = node.render(0);
    assert!(output.contains("<[float64][zero][0]>"));
    assert!(output.contains("<[bool][flag][false]>"));
    assert!(output.contains("<[string8][empty][]>"));
}

#[test]
fn rendering_is_idempotent() {
    let node = sample_mission();
    assert_eq!(node.render(0), node.render(0));
    assert_eq!(node.render_xml(0), node.render_xml(0));
    assert_eq!(node.to_string(), node.render(0));
}

#[test]
fn children_keep_insertion_order() {
    let without = ConfigNode::new("list", "")
        .append_child("string8", "a", "A")
        .append_child("string8", "b", "B")
        .render(0);

    let with = ConfigNode::new("list", "")
        .append_child("string8", "a", "A")
        .append_child("string8", "c", "C")
        .append_child("string8", "b", "B")
        .render(0);

    let a = with.find("[a]").unwrap();
    let b = with.find("[b]").unwrap();
    let c = with.find("[c]").unwrap();
    assert!(a < c && c < b);

    let inserted = "    <[string8][c][C]>\n";
    assert_eq!(with.replacen(inserted, "", 1), without);
}

#[test]
fn push_matches_append() {
    let mut pushed = ConfigNode::new("list", "");
    pushed.push(ConfigNode::leaf("int32", "x", 1));
    let appended = ConfigNode::new("list", "").append(ConfigNode::leaf("int32", "x", 1));
    assert_eq!(pushed, appended);
}

#[test]
fn four_checkpoints_are_indexed_in_order() {
    let list = ConfigNode::new("list_tmmission_checkpoint", "checkpoints").extend(
        (0..4_usize).map(|i| {
            ConfigNode::new("tmmission_checkpoint", "element")
                .with_value(i)
                .append_child("string8u", "name", format!("WP{i}"))
        }),
    );
    let output = list.render(0);

    let indices: Vec<_> = output
        .match_indices("[element][")
        .map(|(pos, needle)| &output[pos + needle.len()..=pos + needle.len()])
        .collect();
    assert_eq!(indices, ["0", "1", "2", "3"]);
}

#[test]
fn comment_line_breaks_are_collapsed() {
    let node = ConfigNode::leaf("string8", "x", "v").with_comment("line one\nline two\r\nthree");
    assert_eq!(node.render(0), "<[string8][x][v]> // line one line two three");
}

#[test]
fn commented_subtree_prefixes_every_line() {
    let node = ConfigNode::new("root", "").append(
        ConfigNode::commented("tm_time_utc", "time")
            .append_child("int32", "time_year", 2024)
            .append_annotated("float64", "time_hours", 12.5, "12:30:00 UTC"),
    );
    assert_eq!(node.children()[0].line_style(), LineStyle::Commented);

    let output = node.render(0);
    let lines: Vec<_> = output.lines().collect();
    assert_eq!(lines[0], "<[root][][]");
    assert_eq!(lines[1], "    // <[tm_time_utc][time][]");
    assert_eq!(lines[2], "        // <[int32][time_year][2024]>");
    assert_eq!(lines[3], "        // <[float64][time_hours][12.5]> // 12:30:00 UTC");
    assert_eq!(lines[4], "    // >");
    assert_eq!(lines[5], ">");
}

#[test]
fn commented_subtree_keeps_content() {
    let plain = ConfigNode::new("c", "x").append_child("float64", "y", 2.0);
    let commented = ConfigNode::commented("c", "x").append_child("float64", "y", 2.0);

    let plain_output = plain.render(1);
    let commented_output = commented.render(1);
    for (p, c) in plain_output.lines().zip(commented_output.lines()) {
        assert_eq!(c.replacen("// ", "", 1), p);
    }
}

#[test]
fn nested_commented_nodes_are_not_double_prefixed() {
    let node = ConfigNode::commented("outer", "")
        .append(ConfigNode::commented("inner", "").append_child("int32", "x", 1));
    let output = node.render(0);
    for line in output.lines() {
        assert!(line.trim_start().starts_with("// "), "{line}");
        assert!(!line.contains("// //"), "{line}");
    }
}

#[test]
fn commented_xml_wraps_tags() {
    let leaf = ConfigNode::commented("float64", "more_clouds_cover")
        .with_value(0.5)
        .with_comment("SCT");
    assert_eq!(
        leaf.render_xml(0),
        "<!-- more_clouds_cover type=\"float64\">0.5</more_clouds_cover --> <!-- SCT -->"
    );

    let container = ConfigNode::commented("tm_time_utc", "time").append_child("int32", "year", 1);
    assert_eq!(
        container.render_xml(0),
        "<!-- time type=\"tm_time_utc\">\n    <year type=\"int32\">1</year>\n</time -->"
    );
}

#[test]
fn commented_xml_does_not_nest_comments() {
    let node = ConfigNode::commented("tmmission_conditions", "conditions")
        .append_annotated("float64", "wind_speed", 11, "kts")
        .append(ConfigNode::commented("float64", "cirrus_cover").with_value(0.2));
    let output = node.render_xml(0);

    assert_eq!(
        output,
        "<!-- conditions type=\"tmmission_conditions\">\n    <wind_speed \
         type=\"float64\">11</wind_speed>\n    <cirrus_cover \
         type=\"float64\">0.2</cirrus_cover>\n</conditions -->"
    );
    assert_eq!(output.matches("<!--").count(), 1);
    assert_eq!(output.matches("-->").count(), 1);
}

#[test]
fn spacer_separates_children_with_banner() {
    let node = ConfigNode::spacer("list_tmmission_definition", "missions")
        .append_child("string8", "a", "A")
        .append_child("string8", "b", "B");
    assert_eq!(node.separator(), SPACER_SEPARATOR);

    let banner = format!("// {}", "-".repeat(77));
    let output = node.render(0);
    assert_eq!(output.matches(&banner).count(), 3);
    assert!(output.contains(&format!("    <[string8][a][A]>\n{banner}\n    <[string8][b][B]>")));

    // XML ignores the separator.
    assert!(!node.render_xml(0).contains(&banner));
}

#[test]
fn custom_separator() {
    let node = ConfigNode::new("l", "")
        .with_separator("\n\n")
        .append_child("int32", "a", 1)
        .append_child("int32", "b", 2);
    assert_eq!(node.render(0), "<[l][][]\n\n    <[int32][a][1]>\n\n    <[int32][b][2]>\n\n>");
}

#[test]
fn value_stringification() {
    assert_eq!(Value::from(vec![-122.05, 37.99]).to_string(), "-122.05 37.99");
    assert_eq!(Value::from(vec!["a", "b c"]).to_string(), "a b c");
    assert_eq!(Value::from(true).to_string(), "true");
    assert_eq!(Value::from(42_u8).to_string(), "42");
    assert_eq!(Value::from(Vec::<f64>::new()).to_string(), "");
}

#[test]
fn number_shortest_round_trip() {
    let cases = [
        (1066.799_965_862_401, "1066.799965862401"),
        (0.1 + 0.2, "0.30000000000000004"),
        (-0.0, "0"),
        (100.0, "100"),
        (-122.5, "-122.5"),
        (1e20, "100000000000000000000"),
        (1e21, "1e+21"),
        (1.5e300, "1.5e+300"),
        (0.000_001, "0.000001"),
        (1e-7, "1e-7"),
        (-1.5e-7, "-1.5e-7"),
        (f64::NAN, "NaN"),
        (f64::INFINITY, "Infinity"),
        (f64::NEG_INFINITY, "-Infinity"),
    ];
    for (value, expect) in cases {
        assert_eq!(Number(value).to_string(), expect, "formatting {value:?}");
    }
}
