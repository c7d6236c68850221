#![allow(dead_code)]

use std::collections::HashMap;
use std::process::Command;

use serde::Deserialize;

/// Mesh as emitted by the CLI's JSON output.
#[derive(Deserialize)]
pub struct MeshOutput {
    pub nu: u32,
    pub vertex_count: usize,
    pub face_count: usize,
    pub vertices: Vec<[f64; 3]>,
    pub faces: Vec<[usize; 3]>,
}

pub fn binary_command() -> Command {
    Command::new(env!("CARGO_BIN_EXE_icosphere"))
}

pub fn parse_json(output: &str) -> MeshOutput {
    serde_json::from_str(output).expect("failed to parse JSON output")
}

pub fn run_cli(args: &[&str]) -> MeshOutput {
    let output = binary_command()
        .args(args)
        .output()
        .expect("failed to run binary");
    assert!(output.status.success());
    let stdout = std::str::from_utf8(&output.stdout).expect("stdout was not UTF-8");
    parse_json(stdout)
}

/// Number of faces sharing each undirected edge of the face list.
pub fn edge_face_counts(faces: &[[usize; 3]]) -> HashMap<(usize, usize), usize> {
    let mut counts = HashMap::new();
    for &[a, b, c] in faces {
        for (u, v) in [(a, b), (b, c), (a, c)] {
            let key = if u < v { (u, v) } else { (v, u) };
            *counts.entry(key).or_insert(0) += 1;
        }
    }
    counts
}
