use std::sync::Arc;

use playbook_core::{guide::PLAYBOOK_GUIDE, FeatureRequest, Registry, Settings};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo},
    schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler,
};
use serde::{Deserialize, Serialize};

pub const SERVER_VERSION: &str = "2.0";

// --- Request types ---

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetPlaybookRequest {
    /// ID of the playbook to retrieve
    pub playbook_id: String,
}

// --- Server ---

/// MCP tool surface over an immutable playbook registry.
#[derive(Clone)]
pub struct PlaybookServer {
    registry: Arc<Registry>,
    settings: Arc<Settings>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl PlaybookServer {
    pub fn new(registry: Arc<Registry>, settings: Arc<Settings>) -> Self {
        Self {
            registry,
            settings,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(description = "List all available playbooks with their descriptions")]
    fn list_playbooks(&self) -> Result<CallToolResult, McpError> {
        tracing::debug!("list_playbooks");
        json_result(&playbook_core::list_playbooks(&self.registry))
    }

    #[tool(
        description = "Get a specific playbook template by ID. Returns {id, name, description, category, template, usage_instructions, folder_structure?}. Unknown IDs return {error, available_playbooks} instead."
    )]
    fn get_playbook(
        &self,
        Parameters(req): Parameters<GetPlaybookRequest>,
    ) -> Result<CallToolResult, McpError> {
        let lookup = playbook_core::get_playbook(&self.registry, &req.playbook_id);
        tracing::debug!(playbook_id = %req.playbook_id, found = lookup.is_found(), "get_playbook");
        json_result(&lookup)
    }

    #[tool(description = "Generate a comprehensive feature implementation plan")]
    fn plan_feature(
        &self,
        Parameters(req): Parameters<FeatureRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(
            project_type = %req.project_type,
            complexity = %req.complexity,
            "plan_feature"
        );
        json_result(&playbook_core::plan_feature(req))
    }

    #[tool(description = "Get instructions for using the playbook tools")]
    fn playbook_guide(&self) -> Result<CallToolResult, McpError> {
        Ok(CallToolResult::success(vec![Content::text(PLAYBOOK_GUIDE)]))
    }
}

#[tool_handler]
impl ServerHandler for PlaybookServer {
    fn get_info(&self) -> ServerInfo {
        let instructions = format!("{}\n\n{}", INSTRUCTIONS, PLAYBOOK_GUIDE);
        ServerInfo {
            server_info: Implementation {
                name: self.settings.server_name.clone(),
                version: SERVER_VERSION.to_string(),
                ..Implementation::from_build_env()
            },
            instructions: Some(instructions.into()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

// --- Helpers ---

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

const INSTRUCTIONS: &str = "MCP Playbook Server for curated prompts and templates. \
Tools return JSON. Call `playbook_guide` for the full workflow.";

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn server() -> PlaybookServer {
        PlaybookServer::new(
            Arc::new(Registry::builtin().unwrap()),
            Arc::new(Settings::default()),
        )
    }

    fn text(result: &CallToolResult) -> String {
        result
            .content
            .first()
            .and_then(|c| c.as_text())
            .map(|t| t.text.clone())
            .expect("tool result should carry text content")
    }

    fn json(result: &CallToolResult) -> Value {
        serde_json::from_str(&text(result)).unwrap()
    }

    #[test]
    fn registers_all_tools() {
        let mut names: Vec<String> = server()
            .tool_router
            .list_all()
            .into_iter()
            .map(|t| t.name.to_string())
            .collect();
        names.sort();
        assert_eq!(
            names,
            vec!["get_playbook", "list_playbooks", "plan_feature", "playbook_guide"]
        );
    }

    #[test]
    fn info_carries_identity_and_guide() {
        let info = server().get_info();
        assert_eq!(info.server_info.name, "Playbook MCP Server");
        assert_eq!(info.server_info.version, SERVER_VERSION);
        assert!(info.instructions.unwrap().contains("list_playbooks"));
    }

    #[test]
    fn list_tool_returns_listing() {
        let value = json(&server().list_playbooks().unwrap());
        assert_eq!(value["total_playbooks"], 6);
        assert_eq!(value["playbooks"].as_array().map(Vec::len), Some(6));
    }

    #[test]
    fn get_tool_returns_not_found_as_success() {
        let result = server()
            .get_playbook(Parameters(GetPlaybookRequest {
                playbook_id: "nonexistent".to_string(),
            }))
            .unwrap();
        assert_eq!(result.is_error, Some(false));
        let value = json(&result);
        assert_eq!(value["error"], "Playbook 'nonexistent' not found");
        assert_eq!(value["available_playbooks"][0], "product_owner_epic");
    }

    #[test]
    fn get_tool_returns_augmented_playbook() {
        let value = json(
            &server()
                .get_playbook(Parameters(GetPlaybookRequest {
                    playbook_id: "comprehensive_wiki".to_string(),
                }))
                .unwrap(),
        );
        assert_eq!(value["id"], "comprehensive_wiki");
        assert!(value["folder_structure"].is_object());
        assert_eq!(value["usage_instructions"].as_array().map(Vec::len), Some(6));
    }

    #[test]
    fn plan_tool_echoes_inputs() {
        let value = json(
            &server()
                .plan_feature(Parameters(FeatureRequest {
                    feature_description: "Add login".to_string(),
                    project_type: "api".to_string(),
                    complexity: "complex".to_string(),
                }))
                .unwrap(),
        );
        assert_eq!(value["feature"], "Add login");
        assert_eq!(value["project_type"], "api");
        assert_eq!(value["implementation_steps"].as_array().map(Vec::len), Some(5));
    }

    #[test]
    fn guide_tool_returns_static_text() {
        assert_eq!(text(&server().playbook_guide().unwrap()), PLAYBOOK_GUIDE);
    }
}
