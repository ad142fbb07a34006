/*
[INPUT]:  CLI arguments and YAML configuration file
[OUTPUT]: Running dashboard (TUI, interactive, or one-shot subcommand)
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or startup flow
*/

use std::path::PathBuf;
use std::sync::{Arc, Mutex as StdMutex};

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use taskmarket_dashboard::app::CreateTaskInput;
use taskmarket_dashboard::tui::{self, LogBuffer, LogBufferHandle, LogWriterFactory, LOG_BUFFER_CAPACITY};
use taskmarket_dashboard::{cli, Dashboard, DashboardConfig};

#[derive(Parser, Debug)]
#[command(
    name = "taskmarket",
    version,
    about = "Terminal dashboard for an on-chain compute task marketplace"
)]
struct Cli {
    #[arg(long = "config", value_name = "PATH")]
    config_path: Option<PathBuf>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    log_level: String,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Open the interactive task board (default)
    Board,
    /// Print the current task board
    List,
    /// Post a new task to the contract
    Create {
        /// Docker image URI the workers will run
        #[arg(long)]
        image: String,
        /// Input data URI handed to the container
        #[arg(long)]
        input: String,
        /// How many workers may participate
        #[arg(long = "max-workers")]
        max_workers: u32,
        /// Reward in whole tokens, e.g. "0.5"
        #[arg(long)]
        reward: String,
    },
    /// Hand one open task to the local worker process
    Delegate {
        #[arg(long = "task-id")]
        task_id: u64,
    },
    /// Menu-driven session
    Interactive,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    let command = args.command.unwrap_or(Command::Board);

    let config_path = DashboardConfig::resolve_path(args.config_path)?;
    let config = DashboardConfig::from_file(&config_path)?;
    let dashboard = Dashboard::from_config(&config)?;

    match command {
        Command::Board => {
            let log_buffer: LogBufferHandle =
                Arc::new(StdMutex::new(LogBuffer::new(LOG_BUFFER_CAPACITY)));
            init_tui_tracing(&args.log_level, log_buffer.clone())?;
            info!(config_path = %config_path.display(), "starting task board");
            tui::run_tui(Arc::new(dashboard), log_buffer).await
        }
        Command::List => {
            init_tracing(&args.log_level)?;
            cli::run_list(&dashboard).await
        }
        Command::Create {
            image,
            input,
            max_workers,
            reward,
        } => {
            init_tracing(&args.log_level)?;
            let input = CreateTaskInput {
                docker_image_uri: image,
                input_data_uri: input,
                max_workers: max_workers.to_string(),
                reward,
            };
            cli::run_create(&dashboard, input).await
        }
        Command::Delegate { task_id } => {
            init_tracing(&args.log_level)?;
            cli::run_delegate(&dashboard, task_id).await
        }
        Command::Interactive => {
            init_tracing(&args.log_level)?;
            cli::interactive::run_interactive(&dashboard).await
        }
    }
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

/// TUI mode routes log lines into the logs pane instead of stdout, which the
/// alternate screen owns.
fn init_tui_tracing(log_level: &str, buffer: LogBufferHandle) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(LogWriterFactory::new(buffer))
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}
