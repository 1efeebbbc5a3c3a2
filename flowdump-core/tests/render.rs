use std::fs;

use flowdump_core::{parse, render, render_file, RenderOptions, TableRegistry};
use pretty_assertions::assert_eq;
use tempfile::tempdir;

fn render_text(registry: &TableRegistry) -> String {
    let bytes = render(registry, &RenderOptions::default()).expect("render should succeed");
    String::from_utf8(bytes).expect("utf8 output")
}

#[test]
fn renders_tables_rules_and_edges() {
    let registry = parse(
        "table=0, priority=100,ip,actions=resubmit(,5)\n\
         table=5, priority=10,actions=OUTPUT:2\n",
    );

    let expected = "\
@startuml
left to right direction
top to bottom direction
rectangle Table_0 {
folder Rule_0 [
name Rule_0
ip,actions=resubmit(,5)
]
}

rectangle Table_5 {
folder Rule_1 [
name Rule_1
actions=OUTPUT:2
]
}

rectangle Table_OUTPUT_2 {
}

Rule_0 --> Table_5
Rule_1 --> Table_OUTPUT_2
@enduml
";
    assert_eq!(render_text(&registry), expected);
}

#[test]
fn edges_follow_all_table_blocks() {
    let registry = parse(
        "table=1, priority=1,actions=resubmit(,0)\ntable=0, priority=1,actions=resubmit(,1)\n",
    );
    let text = render_text(&registry);

    let last_block = text.rfind("}\n").expect("table block");
    let first_edge = text.find("-->").expect("edge");
    assert!(last_block < first_edge);
    assert!(text.contains("Rule_0 --> Table_0\n"));
    assert!(text.contains("Rule_1 --> Table_1\n"));
}

#[test]
fn rules_without_next_hop_have_no_edge() {
    let registry = parse("table=0, priority=0 actions=drop\n");
    let text = render_text(&registry);

    assert!(text.contains("folder Rule_0 [\nname Rule_0\n actions=drop\n]\n"));
    assert!(!text.contains("-->"));
}

#[test]
fn rendering_is_stable_across_runs() {
    let input = "table=3, priority=1,actions=OUTPUT:1\ntable=0, priority=1,actions=resubmit(,3)\n";
    let first = render_text(&parse(input));
    let second = render_text(&parse(input));
    assert_eq!(first, second);
}

#[test]
fn empty_input_renders_only_framing() {
    assert_eq!(
        render_text(&parse("")),
        "@startuml\nleft to right direction\ntop to bottom direction\n@enduml\n"
    );
}

#[test]
fn render_file_overwrites_existing_output() {
    let dir = tempdir().expect("tempdir");
    let out = dir.path().join("out.puml");
    fs::write(&out, "stale contents that are longer than the new diagram".repeat(20))
        .expect("write stale output");

    let registry = parse("table=0, priority=1,actions=resubmit(,1)\n");
    render_file(&registry, &RenderOptions::default(), &out).expect("render should succeed");

    let written = fs::read_to_string(&out).expect("read output");
    assert_eq!(written, render_text(&registry));
}

#[test]
fn render_file_fails_for_missing_directory() {
    let dir = tempdir().expect("tempdir");
    let out = dir.path().join("missing").join("out.puml");

    let err = render_file(&TableRegistry::new(), &RenderOptions::default(), &out)
        .expect_err("should fail");
    assert!(err.to_string().contains("failed to write diagram"));
}
