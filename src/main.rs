//! CLI for generating geodesic icosphere meshes.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

use clap::{ArgAction, Parser, ValueEnum};
use log::info;
use serde::Serialize;

use icosphere::{Mesh, icosphere, min_frequency, write_obj};

/// JSON output: the mesh plus the effective frequency and counts.
#[derive(Serialize)]
struct JsonOutput {
    nu: u32,
    vertex_count: usize,
    face_count: usize,
    #[serde(flatten)]
    mesh: Mesh,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// JSON object with vertex and face arrays
    Json,
    /// Wavefront OBJ
    Obj,
}

#[derive(Parser)]
#[command(name = "icosphere")]
#[command(about = "Generate a geodesic icosphere mesh")]
#[command(
    long_about = "Generates a geodesic icosahedron (icosphere) by subdividing a regular \
    icosahedron with integer subdivision frequency nu, then projecting onto the unit \
    sphere. The mesh has 12+10*(nu+1)*(nu-1) vertices and 20*nu^2 triangular faces, \
    giving near-linear control over resolution."
)]
struct Cli {
    /// Subdivision frequency (each icosahedron edge is split into NU segments)
    #[arg(long, default_value_t = 1)]
    nu: u32,

    /// Minimum number of mesh vertices; nu is raised until reached
    #[arg(long)]
    vertices: Option<usize>,

    /// Output file. Writes to stdout if not specified
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "json")]
    format: Format,

    /// Increase verbosity (-v: debug, -vv: trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Reduce verbosity to warnings only
    #[arg(short, long)]
    quiet: bool,

    /// Measure and log mesh generation time
    #[arg(long)]
    measure_running_time: bool,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let log_level = if cli.quiet {
        "warn"
    } else {
        match cli.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Resolve the effective frequency up front so it can be reported
    let nu = cli
        .vertices
        .map_or(cli.nu, |target| cli.nu.max(min_frequency(target)));

    let start = Instant::now();
    let mesh = icosphere(nu, None)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    let elapsed = start.elapsed();

    info!(
        "Generated icosphere: nu={nu}, {} vertices, {} faces",
        mesh.vertex_count(),
        mesh.face_count()
    );

    if cli.measure_running_time {
        info!("Generation time: {} ms", elapsed.as_millis());
    }

    match cli.format {
        Format::Json => {
            let output = JsonOutput {
                nu,
                vertex_count: mesh.vertex_count(),
                face_count: mesh.face_count(),
                mesh,
            };
            if let Some(path) = &cli.output {
                let file = File::create(path)?;
                serde_json::to_writer_pretty(file, &output)?;
            } else {
                let stdout = io::stdout().lock();
                serde_json::to_writer_pretty(stdout, &output)?;
                println!();
            }
        }
        Format::Obj => {
            if let Some(path) = &cli.output {
                write_obj(&mesh, File::create(path)?)?;
            } else {
                let mut stdout = io::stdout().lock();
                write_obj(&mesh, &mut stdout)?;
                stdout.flush()?;
            }
        }
    }

    Ok(())
}
