//! CLI Adapter.

mod logging;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};

use crate::adapters::{
    FilesystemArtifactWriter, MemoryArtifactWriter, MinijinjaTemplateEngine, RandomNodeId,
};
use crate::app::commands::{apply, render, resolve};
use crate::app::config::load_params;
use crate::app::AppContext;
use crate::domain::{AppError, ArtifactKind, ResolvedConfig};
use crate::ports::WriteOutcome;

#[derive(Parser)]
#[command(name = "jira-config")]
#[command(version)]
#[command(
    about = "Resolve Jira deployment parameters and render its configuration files",
    long_about = None
)]
struct Cli {
    /// Log resolution decisions and writes to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct ParamsArgs {
    /// Parameter file (YAML, JSON or TOML)
    #[arg(short, long, value_name = "FILE")]
    params: PathBuf,
    /// Override a parameter, e.g. --set tomcatPort=9229 or --set proxy.scheme=https
    #[arg(long = "set", value_name = "KEY=VALUE")]
    overrides: Vec<String>,
}

impl ParamsArgs {
    fn resolve(&self) -> Result<ResolvedConfig, AppError> {
        let raw = load_params(&self.params, &self.overrides)?;
        resolve::execute(raw)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print the resolved configuration as JSON
    Resolve {
        #[command(flatten)]
        params: ParamsArgs,
    },
    /// Print rendered artifacts to stdout
    Render {
        #[command(flatten)]
        params: ParamsArgs,
        /// Render only this artifact (e.g. server.xml)
        #[arg(short, long, value_name = "NAME")]
        artifact: Option<String>,
    },
    /// Write rendered artifacts to disk
    Apply {
        #[command(flatten)]
        params: ParamsArgs,
        /// Directory the absolute artifact paths are placed under
        #[arg(long, default_value = "/", value_name = "DIR")]
        root: PathBuf,
        /// Show what would be written without touching the filesystem
        #[arg(long)]
        dry_run: bool,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Resolve { params } => run_resolve(&params),
        Commands::Render { params, artifact } => run_render(&params, artifact.as_deref()),
        Commands::Apply { params, root, dry_run } => run_apply(&params, &root, dry_run),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_resolve(params: &ParamsArgs) -> Result<(), AppError> {
    let cfg = params.resolve()?;
    let json = serde_json::to_string_pretty(&cfg)
        .map_err(|e| AppError::render("resolved configuration", e))?;
    println!("{}", json);
    Ok(())
}

fn run_render(params: &ParamsArgs, artifact: Option<&str>) -> Result<(), AppError> {
    let only = artifact.map(str::parse::<ArtifactKind>).transpose()?;
    let cfg = params.resolve()?;

    let ctx =
        AppContext::new(MinijinjaTemplateEngine::new()?, MemoryArtifactWriter::new(), RandomNodeId);
    let artifacts = render::execute(&ctx, &cfg, only)?;

    match only {
        Some(kind) if artifacts.is_empty() => {
            eprintln!("⚠️  {} is not produced by this configuration", kind);
        }
        Some(_) => {
            for artifact in &artifacts {
                print!("{}", artifact.content);
            }
        }
        None => {
            for artifact in &artifacts {
                println!("# ==> {} <==", artifact.path.display());
                print!("{}", artifact.content);
                println!();
            }
        }
    }
    Ok(())
}

fn run_apply(params: &ParamsArgs, root: &Path, dry_run: bool) -> Result<(), AppError> {
    let cfg = params.resolve()?;
    let engine = MinijinjaTemplateEngine::new()?;
    let target = FilesystemArtifactWriter::new(root);

    if dry_run {
        let ctx = AppContext::new(engine, MemoryArtifactWriter::new(), RandomNodeId);
        let report = apply::execute(&ctx, &cfg)?;
        println!("🔍 Dry run: {} artifact(s) would be written", report.artifacts.len());
        for entry in &report.artifacts {
            println!("  {}", target.target_path(&entry.path).display());
        }
        return Ok(());
    }

    let ctx = AppContext::new(engine, target, RandomNodeId);
    let report = apply::execute(&ctx, &cfg)?;
    for entry in &report.artifacts {
        println!("  {:<9} {}", entry.outcome, ctx.writer().target_path(&entry.path).display());
    }

    if report.changed() {
        println!(
            "✅ Applied {} artifact(s) (created {}, updated {}, unchanged {})",
            report.artifacts.len(),
            report.count(WriteOutcome::Created),
            report.count(WriteOutcome::Updated),
            report.count(WriteOutcome::Unchanged)
        );
    } else {
        println!("✅ All {} artifact(s) already up to date", report.artifacts.len());
    }
    Ok(())
}
