use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use stepflow_config::WorkflowConfig;
use stepflow_executor::{ExecutionBackend, LocalBackend};
use stepflow_registry::StepRegistry;
use stepflow_workflow::GraphIR;

/// Stepflow - run DAGs of artifact-producing steps
#[derive(Parser)]
#[command(name = "stepflow")]
#[command(version, about, long_about = None)]
struct Cli {
  /// Path to the data directory (default: ~/.stepflow)
  #[arg(long, global = true, env = "STEPFLOW_DATA_DIR")]
  data_dir: Option<PathBuf>,

  #[command(subcommand)]
  command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
  /// Execute every step of a workflow
  Run {
    /// Path to the workflow file (JSON)
    workflow_file: PathBuf,

    /// Workspace root for relative artifact locations
    /// (default: <data-dir>/workspaces/<workflow name>)
    #[arg(long)]
    workspace: Option<PathBuf>,
  },

  /// Show execution order and resolved artifact locations without running anything
  Plan {
    /// Path to the workflow file (JSON)
    workflow_file: PathBuf,

    /// Workspace root for relative artifact locations
    #[arg(long)]
    workspace: Option<PathBuf>,
  },

  /// List the registered step kinds
  Handlers,
}

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("stepflow=info,warn")),
    )
    .with_writer(std::io::stderr)
    .with_target(false)
    .init();

  let cli = Cli::parse();

  match cli.command {
    Some(Commands::Run {
      workflow_file,
      workspace,
    }) => {
      let data_dir = resolve_data_dir(cli.data_dir)?;
      run_workflow(&workflow_file, workspace, &data_dir)?;
    }
    Some(Commands::Plan {
      workflow_file,
      workspace,
    }) => {
      let data_dir = resolve_data_dir(cli.data_dir)?;
      plan_workflow(&workflow_file, workspace, &data_dir)?;
    }
    Some(Commands::Handlers) => {
      for kind in build_registry().kinds() {
        println!("{}", kind);
      }
    }
    None => {
      println!("stepflow - use --help to see available commands");
    }
  }

  Ok(())
}

fn resolve_data_dir(data_dir: Option<PathBuf>) -> Result<PathBuf> {
  match data_dir {
    Some(dir) => Ok(dir),
    None => dirs::home_dir()
      .map(|home| home.join(".stepflow"))
      .context("could not determine home directory; pass --data-dir"),
  }
}

fn build_registry() -> StepRegistry {
  let mut registry = StepRegistry::new();
  stepflow_steps::register_builtin(&mut registry);
  registry
}

fn load_graph(workflow_file: &Path) -> Result<GraphIR> {
  let content = std::fs::read_to_string(workflow_file)
    .with_context(|| format!("failed to read workflow file: {}", workflow_file.display()))?;

  let config = WorkflowConfig::from_json_str(&content)
    .with_context(|| format!("failed to parse workflow file: {}", workflow_file.display()))?;

  GraphIR::from_config(config)
    .with_context(|| format!("invalid workflow: {}", workflow_file.display()))
}

fn workspace_for(graph: &GraphIR, workspace: Option<PathBuf>, data_dir: &Path) -> PathBuf {
  workspace.unwrap_or_else(|| data_dir.join("workspaces").join(&graph.name))
}

fn run_workflow(workflow_file: &Path, workspace: Option<PathBuf>, data_dir: &Path) -> Result<()> {
  let graph = load_graph(workflow_file)?;
  let workspace = workspace_for(&graph, workspace, data_dir);

  info!(
    workflow = %graph.name,
    steps = graph.nodes.len(),
    artifacts = graph.artifacts.len(),
    "workflow_loaded"
  );

  let backend = LocalBackend::new(Arc::new(build_registry()));

  let rt = tokio::runtime::Runtime::new()?;
  let artifacts = rt
    .block_on(backend.run(&graph, &workspace))
    .context("workflow execution failed")?;

  info!(workspace = %workspace.display(), "workflow_finished");
  println!("{}", serde_json::to_string_pretty(&artifacts)?);

  Ok(())
}

fn plan_workflow(workflow_file: &Path, workspace: Option<PathBuf>, data_dir: &Path) -> Result<()> {
  let graph = load_graph(workflow_file)?;
  let workspace = workspace_for(&graph, workspace, data_dir);

  let plan = stepflow_executor::plan(&graph, &workspace).context("workflow cannot be planned")?;

  println!("{}", serde_json::to_string_pretty(&plan)?);

  Ok(())
}
