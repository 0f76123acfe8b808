use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use zinnia_api::{DEFAULT_API_URL, HttpDeployApi};
use zinnia_deploy::{DeployForm, DeployOrchestrator, DeployOutcome, RegistryError};
use zinnia_host::{FsArtifactSink, GraphSource, HostError};
use zinnia_workflow::{GraphSnapshot, detect_model_references};

/// Zinnia - deploy node-graph workflows to the packaging backend
#[derive(Parser)]
#[command(name = "zinnia")]
#[command(version, about, long_about = None)]
struct Cli {
  /// Path to the data directory (default: ~/.zinnia)
  #[arg(long, global = true)]
  data_dir: Option<PathBuf>,

  #[command(subcommand)]
  command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
  /// Deploy a workflow to the packaging backend
  Deploy {
    /// Path to the workflow file (JSON)
    workflow_file: PathBuf,

    /// Product name the deployment is published under
    #[arg(long)]
    product_name: String,

    /// Creator account id
    #[arg(long)]
    user_id: String,

    /// Creator secret key
    #[arg(long)]
    secret_key: String,

    /// Additional model path to attach (repeatable); validated by the backend
    #[arg(long = "model-path")]
    model_paths: Vec<String>,

    /// Base URL of the deployment backend
    #[arg(long, default_value = DEFAULT_API_URL)]
    api_url: String,
  },

  /// Print workflow stats and the model references found in it
  Inspect {
    /// Path to the workflow file (JSON)
    workflow_file: PathBuf,
  },
}

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .init();

  let cli = Cli::parse();

  let data_dir = cli.data_dir.unwrap_or_else(|| {
    dirs::home_dir()
      .expect("could not determine home directory")
      .join(".zinnia")
  });

  match cli.command {
    Some(Commands::Deploy {
      workflow_file,
      product_name,
      user_id,
      secret_key,
      model_paths,
      api_url,
    }) => {
      let form = DeployForm::new(product_name, user_id, secret_key);
      run_deploy(workflow_file, form, model_paths, api_url, data_dir)?;
    }
    Some(Commands::Inspect { workflow_file }) => {
      run_inspect(workflow_file)?;
    }
    None => {
      println!("zinnia - use --help to see available commands");
    }
  }

  Ok(())
}

fn run_deploy(
  workflow_file: PathBuf,
  form: DeployForm,
  model_paths: Vec<String>,
  api_url: String,
  data_dir: PathBuf,
) -> Result<()> {
  let rt = tokio::runtime::Runtime::new()?;
  rt.block_on(async { run_deploy_async(workflow_file, form, model_paths, api_url, data_dir).await })
}

async fn run_deploy_async(
  workflow_file: PathBuf,
  form: DeployForm,
  model_paths: Vec<String>,
  api_url: String,
  data_dir: PathBuf,
) -> Result<()> {
  // Surface incomplete credentials before anything touches the network.
  form
    .validate()
    .map_err(|e| anyhow::anyhow!("{e} (see --help)"))?;

  let snapshot = load_snapshot(&workflow_file).await?;
  eprintln!("Loaded workflow with {} nodes", snapshot.node_count());

  let api = Arc::new(HttpDeployApi::new(api_url));
  let artifacts = Arc::new(FsArtifactSink::new(data_dir.join("artifacts")));
  let graph = Arc::new(FileGraphSource { snapshot });

  let orchestrator = DeployOrchestrator::new(api.clone(), graph.clone(), artifacts);

  // Seed the model path registry: backend detection first, then the paths
  // passed on the command line.
  match orchestrator
    .registry()
    .load_initial(api.as_ref(), &graph.snapshot.output)
    .await
  {
    Ok(count) => eprintln!("Backend detected {} model path(s)", count),
    Err(e) => eprintln!("Model detection unavailable: {}", e),
  }

  for path in &model_paths {
    match orchestrator.registry().validate_and_add(api.as_ref(), path).await {
      Ok(added) => {
        for p in added {
          eprintln!("Added model path: {}", p);
        }
      }
      Err(RegistryError::NoModelsFound) => {
        eprintln!("No models found for '{}', skipping", path);
      }
      Err(e) => {
        eprintln!("Model path '{}' not added: {}", path, e);
      }
    }
  }

  match orchestrator.run(&form).await {
    Some(DeployOutcome::Success { message }) => {
      println!("{}", message);
      Ok(())
    }
    Some(DeployOutcome::Failure { message }) => {
      bail!("deployment failed: {}", message)
    }
    None => bail!("deployment did not produce an outcome"),
  }
}

fn run_inspect(workflow_file: PathBuf) -> Result<()> {
  let rt = tokio::runtime::Runtime::new()?;
  rt.block_on(async {
    let snapshot = load_snapshot(&workflow_file).await?;

    println!("Nodes: {}", snapshot.node_count());

    let references = detect_model_references(&snapshot.output);
    if references.is_empty() {
      println!("No model references found");
    } else {
      println!("Model references:");
      for reference in references {
        println!("  {}", reference);
      }
    }

    Ok(())
  })
}

/// Read a workflow file into a snapshot.
///
/// Accepts both the host's serialization wrapper (`{"output": {...}}`) and a
/// bare exported graph.
async fn load_snapshot(path: &PathBuf) -> Result<GraphSnapshot> {
  let content = tokio::fs::read_to_string(path)
    .await
    .with_context(|| format!("failed to read workflow file: {}", path.display()))?;

  let value: serde_json::Value = serde_json::from_str(&content)
    .with_context(|| format!("failed to parse workflow file: {}", path.display()))?;

  let snapshot = if value.get("output").is_some() {
    GraphSnapshot::from_host_value(value)?
  } else if value.is_object() {
    GraphSnapshot { output: value }
  } else {
    bail!("workflow file is not a JSON object: {}", path.display());
  };

  Ok(snapshot)
}

/// Graph source backed by a workflow file loaded up front.
struct FileGraphSource {
  snapshot: GraphSnapshot,
}

#[async_trait]
impl GraphSource for FileGraphSource {
  async fn serialize_graph(&self) -> Result<GraphSnapshot, HostError> {
    Ok(self.snapshot.clone())
  }
}
