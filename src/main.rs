use clap::{Parser, Subcommand};
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;
use waiverbid::api::{create_router, AppState};
use waiverbid::config::AppConfig;
use waiverbid::error::{Result, WaiverBidError};
use waiverbid::ml::QuantileSet;
use waiverbid::swc::SwcClient;
use waiverbid::toolkit::SportsToolkit;

#[derive(Parser)]
#[command(
    name = "waiverbid",
    about = "Waiver acquisition bid prediction API and SportsWorldCentral agent toolkit",
    version
)]
struct Cli {
    /// Configuration directory
    #[arg(long, global = true, env = "WAIVERBID_CONFIG", default_value = "config")]
    config: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the prediction API server
    Serve {
        /// Override the bind host
        #[arg(long)]
        host: Option<String>,
        /// Override the listen port
        #[arg(long)]
        port: Option<u16>,
        /// Override the model artifact directory
        #[arg(long)]
        model_dir: Option<String>,
    },
    /// Print toolkit capability metadata for agent registration
    Tools,
    /// Invoke a single toolkit tool against the configured SWC API
    Invoke {
        /// Tool name (HealthCheck, ListLeagues, ListTeams)
        #[arg(long)]
        tool: String,
        /// JSON object of tool arguments
        #[arg(long, default_value = "{}")]
        args: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Serve {
        host: None,
        port: None,
        model_dir: None,
    });

    match command {
        Commands::Serve {
            host,
            port,
            model_dir,
        } => {
            init_logging();
            run_server(&cli.config, host, port, model_dir).await?;
        }
        Commands::Tools => {
            init_logging_simple();
            run_tools(&cli.config)?;
        }
        Commands::Invoke { tool, args } => {
            init_logging_simple();
            run_invoke(&cli.config, &tool, &args).await?;
        }
    }

    Ok(())
}

async fn run_server(
    config_dir: &str,
    host: Option<String>,
    port: Option<u16>,
    model_dir: Option<String>,
) -> Result<()> {
    let mut config = load_config(config_dir);

    // Override with CLI flags
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
    if let Some(dir) = model_dir {
        config.models.dir = dir;
    }

    if let Err(problems) = config.validate() {
        for problem in &problems {
            error!("Invalid configuration: {}", problem);
        }
        return Err(WaiverBidError::Validation(problems.join("; ")));
    }

    // Load all three artifacts before binding the listener; a missing or
    // corrupt artifact must keep the service from accepting traffic.
    info!("Loading quantile models from {}", config.models.dir);
    let models = QuantileSet::load(&config.models)?;

    let state = AppState::new(Arc::new(models));
    let app = create_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Prediction API listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| WaiverBidError::Internal(format!("API server error: {}", e)))?;

    info!("Shutdown complete");
    Ok(())
}

fn run_tools(config_dir: &str) -> Result<()> {
    let toolkit = build_toolkit(config_dir)?;

    let entries: Vec<_> = toolkit
        .get_tools()
        .iter()
        .map(|tool| {
            serde_json::json!({
                "name": tool.name(),
                "description": tool.description(),
                "input_schema": tool.input_schema(),
            })
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&entries)?);
    Ok(())
}

async fn run_invoke(config_dir: &str, tool_name: &str, args: &str) -> Result<()> {
    let toolkit = build_toolkit(config_dir)?;

    let args: serde_json::Value = serde_json::from_str(args)
        .map_err(|e| WaiverBidError::Validation(format!("invalid --args JSON: {}", e)))?;

    let tool = toolkit
        .get_tools()
        .into_iter()
        .find(|tool| tool.name() == tool_name)
        .ok_or_else(|| WaiverBidError::UnknownTool(tool_name.to_string()))?;

    let result = tool.invoke(args).await?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

fn build_toolkit(config_dir: &str) -> Result<SportsToolkit> {
    let config = load_config(config_dir);
    let client = SwcClient::new(&config.swc.base_url, config.swc.timeout_secs)?;
    Ok(SportsToolkit::new(Arc::new(client)))
}

fn load_config(config_dir: &str) -> AppConfig {
    match AppConfig::load_from(config_dir) {
        Ok(config) => config,
        Err(e) => {
            warn!("Failed to load configuration: {} - using defaults", e);
            AppConfig::default_config()
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,waiverbid=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}

fn init_logging_simple() {
    // Minimal logging for one-shot CLI commands
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .try_init();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => error!("Failed to install SIGTERM handler: {}", e),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
