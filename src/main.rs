//! `terranav` command line.
//!
//! `terranav <script.toml> [options.toml]` replays a recorded input script
//! against the simulated host and prints the camera pose after every frame
//! as JSON. `terranav --schema` prints the options JSON schema.

use std::path::PathBuf;

use clap::Parser;
use terranav::error::NavError;
use terranav::options::Options;
use terranav::replay::ReplayScript;

/// Replay recorded navigation input against a simulated voxel host.
#[derive(Parser)]
#[command(name = "terranav", version)]
struct Cli {
    /// Replay script (TOML).
    #[arg(required_unless_present = "schema")]
    script: Option<PathBuf>,
    /// Options preset (TOML); defaults when absent.
    options: Option<PathBuf>,
    /// Print the options JSON schema and exit.
    #[arg(long, conflicts_with_all = ["script", "options"])]
    schema: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let output = match cli.script {
        Some(script) if !cli.schema => {
            match replay(&script, cli.options.as_deref()) {
                Ok(text) => text,
                Err(e) => {
                    log::error!("{e}");
                    std::process::exit(1);
                }
            }
        }
        _ => serde_json::to_string_pretty(&Options::json_schema()),
    };

    match output {
        Ok(text) => print(&text),
        Err(e) => {
            log::error!("failed to serialize output: {e}");
            std::process::exit(1);
        }
    }
}

fn replay(
    script: &std::path::Path,
    options: Option<&std::path::Path>,
) -> Result<serde_json::Result<String>, NavError> {
    let options = match options {
        Some(path) => Options::load(path)?,
        None => Options::default(),
    };
    let script = ReplayScript::load(script)?;

    let records = script.run(&options);
    if let Some(last) = records.last() {
        log::info!(
            "replayed {} frames, final target {} zoom {:.3}",
            records.len(),
            last.pose.target,
            last.pose.zoom_level,
        );
    }
    Ok(serde_json::to_string_pretty(&records))
}

#[allow(clippy::print_stdout)]
fn print(text: &str) {
    println!("{text}");
}
