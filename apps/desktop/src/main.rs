use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use menu_core::ViewController;
use serde::Deserialize;
use shared::{
    domain::Course,
    protocol::{UserAction, ViewSnapshot},
};

/// Replays a script of user actions against a fresh menu session and prints
/// the resulting view snapshot(s) as JSON.
#[derive(Parser, Debug)]
struct Args {
    /// JSON array (or JSON lines) of actions; stdin when omitted.
    #[arg(long)]
    script: Option<PathBuf>,
    /// Print a snapshot after every step instead of only the last one.
    #[arg(long)]
    trace: bool,
    #[arg(long)]
    pretty: bool,
    /// Course filter applied after the script (e.g. `main`).
    #[arg(long)]
    filter: Option<Course>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
enum ScriptStep {
    Action(UserAction),
    /// Ids are generated at runtime, so scripts delete by item name.
    DeleteNamed { delete_named: String },
}

fn parse_script(raw: &str) -> Result<Vec<ScriptStep>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }
    if trimmed.starts_with('[') {
        return serde_json::from_str(trimmed).context("failed to parse action script array");
    }
    trimmed
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            serde_json::from_str(line)
                .with_context(|| format!("failed to parse action on line {}", index + 1))
        })
        .collect()
}

fn apply_step(controller: &mut ViewController, step: ScriptStep) {
    match step {
        ScriptStep::Action(action) => controller.apply(action),
        ScriptStep::DeleteNamed { delete_named } => {
            let id = controller
                .store()
                .items()
                .iter()
                .find(|item| item.name == delete_named)
                .map(|item| item.id);
            match id {
                Some(id) => controller.apply(UserAction::DeleteItem { id }),
                None => tracing::warn!(name = %delete_named, "no menu item with that name"),
            }
        }
    }
}

fn run_script(steps: Vec<ScriptStep>, trace: bool) -> Vec<ViewSnapshot> {
    let mut controller = ViewController::new();
    let mut snapshots = Vec::new();
    for step in steps {
        apply_step(&mut controller, step);
        if trace {
            snapshots.push(controller.snapshot());
        }
    }
    if !trace || snapshots.is_empty() {
        snapshots.push(controller.snapshot());
    }
    snapshots
}

fn read_script(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read script '{}'", path.display())),
        None => {
            let mut raw = String::new();
            io::stdin()
                .read_to_string(&mut raw)
                .context("failed to read script from stdin")?;
            Ok(raw)
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string()))
        .init();
    let args = Args::parse();

    let raw = read_script(args.script.as_deref())?;
    let mut steps = parse_script(&raw)?;
    if let Some(course) = args.filter {
        steps.push(ScriptStep::Action(UserAction::SetFilterCourse {
            course: Some(course),
        }));
    }
    tracing::info!(steps = steps.len(), "replaying action script");

    for snapshot in run_script(steps, args.trace) {
        let json = if args.pretty {
            serde_json::to_string_pretty(&snapshot)?
        } else {
            serde_json::to_string(&snapshot)?
        };
        println!("{json}");
    }

    Ok(())
}
