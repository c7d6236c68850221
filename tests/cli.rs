//! End-to-end tests for the icosphere binary.

mod common;

use common::{binary_command, edge_face_counts, run_cli};

#[test]
fn json_output_for_explicit_frequency() {
    let mesh = run_cli(&["--nu", "3", "-q"]);
    assert_eq!(mesh.nu, 3);
    assert_eq!(mesh.vertex_count, 92);
    assert_eq!(mesh.face_count, 180);
    assert_eq!(mesh.vertices.len(), 92);
    assert_eq!(mesh.faces.len(), 180);
    assert!(mesh.faces.iter().flatten().all(|&i| i < 92));
}

#[test]
fn json_output_is_watertight() {
    let mesh = run_cli(&["--nu", "2", "-q"]);
    let counts = edge_face_counts(&mesh.faces);
    assert!(counts.values().all(|&n| n == 2));
    assert_eq!(mesh.vertex_count + mesh.face_count, counts.len() + 2);
}

#[test]
fn target_vertex_count_raises_frequency() {
    let mesh = run_cli(&["--vertices", "100", "-q"]);
    assert_eq!(mesh.nu, 4);
    assert_eq!(mesh.vertex_count, 162);
}

#[test]
fn obj_output() {
    let output = binary_command()
        .args(["--nu", "2", "--format", "obj", "-q"])
        .output()
        .expect("failed to run binary");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().filter(|l| l.starts_with("v ")).count(), 42);
    assert_eq!(stdout.lines().filter(|l| l.starts_with("f ")).count(), 80);
}

#[test]
fn output_file() {
    let path = std::env::temp_dir().join("icosphere_cli_output_test.json");
    let output = binary_command()
        .args(["--nu", "2", "-o", path.to_str().unwrap(), "-q"])
        .output()
        .expect("failed to run binary");

    assert!(output.status.success());
    let content = std::fs::read_to_string(&path).expect("output file not written");
    let mesh = common::parse_json(&content);
    assert_eq!(mesh.vertex_count, 42);
    std::fs::remove_file(&path).ok();
}

#[test]
fn zero_frequency_fails() {
    let output = binary_command()
        .args(["--nu", "0", "-q"])
        .output()
        .expect("failed to run binary");

    assert!(!output.status.success());
}

#[test]
fn help_mentions_frequency() {
    let output = binary_command()
        .arg("--help")
        .output()
        .expect("failed to run binary");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--nu"));
    assert!(stdout.contains("--vertices"));
}
