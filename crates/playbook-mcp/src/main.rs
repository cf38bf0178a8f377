mod init;
mod server;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use playbook_core::settings::load_dotenv_files;
use playbook_core::{Registry, Settings};
use rmcp::transport::streamable_http_server::{
    session::local::LocalSessionManager, StreamableHttpService,
};
use rmcp::ServiceExt;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use init::Endpoint;
use server::PlaybookServer;

#[derive(Parser)]
#[command(name = "playbook-mcp", version, about = "MCP server for curated prompts and templates")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the MCP server (the default when no subcommand is given)
    Serve(TransportArgs),
    /// Register this server in the project's Claude Code and Codex config
    Init(TransportArgs),
}

#[derive(Args, Default)]
struct TransportArgs {
    /// Transport to serve on
    #[arg(long, value_enum, default_value_t = Transport::Stdio)]
    transport: Transport,
    /// Port for the HTTP transport (overrides configuration)
    #[arg(long)]
    port: Option<u16>,
    /// Host for the HTTP transport (overrides configuration)
    #[arg(long)]
    host: Option<String>,
}

impl TransportArgs {
    /// Configured settings with the command-line overrides applied.
    fn settings(&self) -> anyhow::Result<Settings> {
        let mut settings = Settings::load().context("loading settings")?;
        if let Some(port) = self.port {
            settings.port = port;
        }
        if let Some(host) = &self.host {
            settings.host = host.clone();
        }
        settings.validate()?;
        Ok(settings)
    }
}

impl Command {
    /// Arguments to resolve settings from, or `None` when the command runs
    /// without configuration (stdio `init` only needs the binary path).
    fn settings_args(&self) -> Option<&TransportArgs> {
        match self {
            Command::Serve(args) => Some(args),
            Command::Init(args) if args.transport == Transport::Http => Some(args),
            Command::Init(_) => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
enum Transport {
    #[default]
    Stdio,
    Http,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let dotenv_failures = load_dotenv_files();

    let command = cli.command.unwrap_or_else(|| Command::Serve(TransportArgs::default()));
    let settings = command.settings_args().map(TransportArgs::settings).transpose()?;
    init_logging(
        settings.as_ref().map_or(DEFAULT_LOG_LEVEL, |s| s.log_level.as_str()),
        dotenv_failures,
    );

    match (command, settings) {
        (Command::Serve(args), settings) => {
            serve(args.transport, settings.context("serve requires settings")?).await
        }
        (Command::Init(_), Some(settings)) => init::init_project(&Endpoint::http(&settings)),
        (Command::Init(_), None) => init::init_project(&Endpoint::current_exe()?),
    }
}

const DEFAULT_LOG_LEVEL: &str = "info";

/// Logs go to stderr; stdout belongs to the stdio transport.
fn init_logging(level: &str, dotenv_failures: Vec<(PathBuf, dotenvy::Error)>) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();

    for (path, e) in dotenv_failures {
        tracing::warn!(path = %path.display(), error = %e, "failed to load .env file");
    }
}

async fn serve(transport: Transport, settings: Settings) -> anyhow::Result<()> {
    let registry = Arc::new(Registry::builtin()?);
    tracing::info!(
        server = %settings.server_name,
        environment = %settings.environment,
        playbooks = registry.len(),
        ?transport,
        "starting playbook server"
    );

    let settings = Arc::new(settings);
    let server = PlaybookServer::new(registry, settings.clone());

    match transport {
        Transport::Stdio => {
            let service = server
                .serve(rmcp::transport::io::stdio())
                .await
                .inspect_err(|e| tracing::error!("MCP server error: {}", e))?;
            service.waiting().await?;
        }
        Transport::Http => {
            let service = StreamableHttpService::new(
                move || Ok(server.clone()),
                LocalSessionManager::default().into(),
                Default::default(),
            );
            let router = axum::Router::new().nest_service("/mcp", service);

            let addr = settings.bind_address();
            let listener = tokio::net::TcpListener::bind(&addr)
                .await
                .with_context(|| format!("binding {}", addr))?;
            tracing::info!(%addr, "serving MCP over HTTP at /mcp");

            axum::serve(listener, router)
                .with_graceful_shutdown(async {
                    let _ = tokio::signal::ctrl_c().await;
                    tracing::info!("shutting down");
                })
                .await?;
        }
    }

    Ok(())
}
