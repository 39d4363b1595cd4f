//! Project store commands.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::{Args, Subcommand};
use wavesculpt_config::{ColorScheme, Rgb, SourceKind, lookup_color, validate_color};
use wavesculpt_engine::{
    DirectoryStore, Dispatcher, Processor, ProjectId, ProjectRecord, ProjectStore,
    audio_view,
};

use super::common::{WaveArgs, load_envelope, load_settings};

/// Manage projects in a directory store.
#[derive(Args)]
pub struct ProjectArgs {
    /// Project store directory
    #[arg(long, global = true, default_value = "projects")]
    store: PathBuf,

    /// Engine settings file (defaults to the user settings file)
    #[arg(long, global = true, value_name = "FILE")]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: ProjectCommand,
}

#[derive(Subcommand)]
enum ProjectCommand {
    /// Create a project
    New {
        /// Project name
        name: String,

        /// Free-form description
        #[arg(long, default_value = "")]
        description: String,

        /// Use this WAV recording as the source instead of synthesizing
        #[arg(long, value_name = "WAV")]
        upload: Option<PathBuf>,

        #[command(flatten)]
        wave: WaveArgs,

        /// Chart background color (#RRGGBB or palette name)
        #[arg(long)]
        background: Option<String>,

        /// Positive-half color (#RRGGBB or palette name)
        #[arg(long)]
        positive: Option<String>,

        /// Negative-half color (#RRGGBB or palette name)
        #[arg(long)]
        negative: Option<String>,
    },

    /// Run a project and wait for the outcome
    Run {
        /// Project id
        id: ProjectId,

        /// JSON document with `positive` and `negative` curves
        #[arg(long, value_name = "FILE", conflicts_with = "reuse_envelope")]
        curves: Option<PathBuf>,

        /// Re-apply the curves stored by the last successful run
        #[arg(long)]
        reuse_envelope: bool,
    },

    /// Show a project's state and artifacts
    Status {
        /// Project id
        id: ProjectId,
    },

    /// Print the source samples and stored curves as JSON
    AudioData {
        /// Project id
        id: ProjectId,
    },

    /// List projects
    List,
}

/// Run a project subcommand.
pub fn run(args: ProjectArgs) -> anyhow::Result<()> {
    let store = DirectoryStore::open(&args.store)
        .with_context(|| format!("cannot open project store {}", args.store.display()))?;

    match args.command {
        ProjectCommand::New {
            name,
            description,
            upload,
            wave,
            background,
            positive,
            negative,
        } => {
            let defaults = ColorScheme::default();
            let colors = ColorScheme {
                background: color_arg("background", background.as_deref(), defaults.background)?,
                positive: color_arg("positive", positive.as_deref(), defaults.positive)?,
                negative: color_arg("negative", negative.as_deref(), defaults.negative)?,
            };
            let (source, bytes) = match upload {
                Some(path) => {
                    let bytes = std::fs::read(&path)
                        .with_context(|| format!("failed to read {}", path.display()))?;
                    (SourceKind::Uploaded, Some(bytes))
                }
                None => (SourceKind::from(wave.kind), None),
            };
            let record = ProjectRecord::new(name)
                .with_description(description)
                .with_source(source)
                .with_wave_parameters(wave.parameters())
                .with_colors(colors);
            let id = store.create(record, bytes)?;
            println!("Created project {id}");
            Ok(())
        }
        ProjectCommand::Run {
            id,
            curves,
            reuse_envelope,
        } => run_project(store, args.settings.as_deref(), id, curves, reuse_envelope),
        ProjectCommand::Status { id } => {
            let record = store.snapshot(id)?;
            println!("Project:     {} ({})", record.id, record.name);
            println!("Source:      {}", record.source.label());
            println!("State:       {}", record.state);
            for (kind, name) in &record.artifacts {
                println!("  {:<16} {}", kind.to_string(), store.project_dir(id).join(name).display());
            }
            Ok(())
        }
        ProjectCommand::AudioData { id } => {
            let view = audio_view(&store, id)?;
            println!("{}", serde_json::to_string(&view)?);
            Ok(())
        }
        ProjectCommand::List => {
            for record in store.list()? {
                println!(
                    "{:>4}  {:<24} {:<10} {}",
                    record.id,
                    record.name,
                    record.source.as_str(),
                    record.state.name()
                );
            }
            Ok(())
        }
    }
}

fn run_project(
    store: DirectoryStore,
    settings: Option<&Path>,
    id: ProjectId,
    curves: Option<PathBuf>,
    reuse_envelope: bool,
) -> anyhow::Result<()> {
    let settings = load_settings(settings)?;
    let record = store.snapshot(id)?;
    if record.state.is_processing() {
        tracing::warn!(project = id, "another run is in flight; the later finish wins");
    }
    let envelope = match curves {
        Some(path) => Some(load_envelope(&path)?),
        None if reuse_envelope => {
            let stored = record.envelope_data;
            (!stored.is_empty()).then_some(stored)
        }
        None => None,
    };

    let store: Arc<dyn ProjectStore> = Arc::new(store);
    let dispatcher = Dispatcher::new(
        Processor::from_settings(&settings),
        Arc::clone(&store),
        settings.workers.count,
    );
    let outcome = dispatcher
        .submit(id, envelope)?
        .recv()
        .context("worker exited without reporting")?;

    if !outcome.success {
        anyhow::bail!("project {id} failed: {}", outcome.message);
    }
    println!("{}", outcome.message);
    Ok(())
}

fn color_arg(field: &'static str, value: Option<&str>, default: Rgb) -> anyhow::Result<Rgb> {
    let Some(value) = value else {
        return Ok(default);
    };
    if let Some(color) = lookup_color(value) {
        return Ok(color);
    }
    Ok(validate_color(field, value)?)
}
