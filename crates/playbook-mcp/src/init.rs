use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use playbook_core::Settings;
use serde_json::json;

const SERVER_KEY: &str = "playbook";

/// How an MCP client reaches this server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// Client spawns the binary and talks over stdin/stdout.
    Stdio { command: String },
    /// Client connects to a running `serve --transport http` instance.
    Http { url: String },
}

impl Endpoint {
    /// Stdio endpoint pointing at the currently running binary.
    pub fn current_exe() -> anyhow::Result<Self> {
        let command = std::env::current_exe()?
            .canonicalize()?
            .to_string_lossy()
            .to_string();
        Ok(Endpoint::Stdio { command })
    }

    /// HTTP endpoint at the address the server binds with `settings`.
    pub fn http(settings: &Settings) -> Self {
        Endpoint::Http {
            url: format!("http://{}/mcp", settings.bind_address()),
        }
    }

    fn claude_entry(&self) -> serde_json::Value {
        match self {
            Endpoint::Stdio { command } => json!({
                "type": "stdio",
                "command": command,
                "args": ["serve"],
            }),
            Endpoint::Http { url } => json!({ "type": "http", "url": url }),
        }
    }

    fn codex_entry(&self) -> toml_edit::Table {
        let mut table = toml_edit::Table::new();
        match self {
            Endpoint::Stdio { command } => {
                let mut args = toml_edit::Array::new();
                args.push("serve");
                table.insert("command", toml_edit::value(command.as_str()));
                table.insert("args", toml_edit::value(args));
            }
            Endpoint::Http { url } => {
                table.insert("url", toml_edit::value(url.as_str()));
            }
        }
        table
    }
}

/// MCP clients that read a project-scoped config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Client {
    ClaudeCode,
    Codex,
}

impl Client {
    const ALL: [Client; 2] = [Client::ClaudeCode, Client::Codex];

    fn binary(self) -> &'static str {
        match self {
            Client::ClaudeCode => "claude",
            Client::Codex => "codex",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Client::ClaudeCode => "Claude Code",
            Client::Codex => "Codex",
        }
    }

    /// Register `endpoint` in this client's config under `cwd`, keeping any
    /// other servers already listed there. Returns the file written.
    pub fn register(self, cwd: &Path, endpoint: &Endpoint) -> anyhow::Result<PathBuf> {
        match self {
            Client::ClaudeCode => register_claude_code(cwd, endpoint),
            Client::Codex => register_codex(cwd, endpoint),
        }
    }
}

/// Clients whose binary is on `PATH`.
pub fn installed_clients() -> Vec<Client> {
    Client::ALL
        .into_iter()
        .filter(|client| which::which(client.binary()).is_ok())
        .collect()
}

/// Point every installed MCP client at `endpoint` for the current project.
pub fn init_project(endpoint: &Endpoint) -> anyhow::Result<()> {
    let clients = installed_clients();
    if clients.is_empty() {
        bail!(
            "Neither `claude` nor `codex` found in PATH. \
             Install Claude Code or OpenAI Codex first, then re-run `playbook-mcp init`."
        );
    }

    let cwd = std::env::current_dir()?;
    for client in clients {
        let path = client.register(&cwd, endpoint)?;
        tracing::info!(client = client.label(), path = %path.display(), ?endpoint, "registered playbook server");
    }
    Ok(())
}

fn register_claude_code(cwd: &Path, endpoint: &Endpoint) -> anyhow::Result<PathBuf> {
    let path = cwd.join(".mcp.json");
    let mut root = match std::fs::read_to_string(&path) {
        Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|_| json!({})),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => json!({}),
        Err(e) => return Err(e).with_context(|| format!("reading {}", path.display())),
    };

    if !root.is_object() {
        root = json!({});
    }
    if !root.get("mcpServers").is_some_and(|v| v.is_object()) {
        root["mcpServers"] = json!({});
    }
    root["mcpServers"][SERVER_KEY] = endpoint.claude_entry();

    std::fs::write(&path, serde_json::to_string_pretty(&root)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

fn register_codex(cwd: &Path, endpoint: &Endpoint) -> anyhow::Result<PathBuf> {
    let dir = cwd.join(".codex");
    let path = dir.join("config.toml");

    let mut doc: toml_edit::DocumentMut = match std::fs::read_to_string(&path) {
        Ok(contents) => contents.parse().unwrap_or_default(),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => toml_edit::DocumentMut::new(),
        Err(e) => return Err(e).with_context(|| format!("reading {}", path.display())),
    };

    if !doc.contains_table("mcp_servers") {
        doc["mcp_servers"] = toml_edit::Item::Table(toml_edit::Table::new());
    }
    doc["mcp_servers"][SERVER_KEY] = toml_edit::Item::Table(endpoint.codex_entry());

    std::fs::create_dir_all(&dir)?;
    std::fs::write(&path, doc.to_string())
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}
