

use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    tool, tool_handler, tool_router,
    transport::stdio,
    service::RequestContext,
    ErrorData as McpError, RoleServer, ServerHandler, ServiceExt,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use tracing::info;

use crate::core::config::PhayaoConfig;
use crate::search::{KeywordClassifier, Suggestion, SuggestionGenerator};


#[derive(Debug, Deserialize, rmcp::schemars::JsonSchema)]
pub struct ClassifyQueryParams {
    #[schemars(description = "Free-text search query as typed into the portal search bar")]
    pub query: String,
}

#[derive(Debug, Deserialize, rmcp::schemars::JsonSchema)]
pub struct SuggestQueriesParams {
    #[schemars(description = "Partial search input")]
    pub query: String,
}


#[derive(Debug, Serialize)]
struct SuggestionList {
    query: String,
    count: usize,
    suggestions: Vec<Suggestion>,
}


#[derive(Clone)]
pub struct PhayaoMcpServer {
    config: Arc<PhayaoConfig>,
    classifier: Arc<KeywordClassifier>,
    generator: Arc<SuggestionGenerator>,
    tool_router: ToolRouter<Self>,
}

impl PhayaoMcpServer {

    pub fn new(config: PhayaoConfig) -> Self {
        Self {
            classifier: Arc::new(KeywordClassifier::from_config(&config)),
            generator: Arc::new(SuggestionGenerator::from_config(&config)),
            config: Arc::new(config),
            tool_router: Self::tool_router(),
        }
    }


    fn result_to_json<T: Serialize>(result: T) -> Result<String, McpError> {
        serde_json::to_string_pretty(&result)
            .map_err(|e| McpError::internal_error(e.to_string(), None))
    }


    fn classify_json(&self, query: &str) -> Result<String, McpError> {
        let classified = self
            .classifier
            .classify_detailed(query)
            .ok_or_else(|| McpError::invalid_params("query must not be empty", None))?;
        Self::result_to_json(&classified)
    }


    fn suggest_json(&self, query: &str) -> Result<String, McpError> {
        let suggestions = self.generator.suggest(query);
        Self::result_to_json(SuggestionList {
            query: query.trim().to_string(),
            count: suggestions.len(),
            suggestions,
        })
    }


    fn config_json(&self) -> String {
        serde_json::to_string_pretty(&json!({
            "name": crate::SERVER_NAME,
            "version": env!("CARGO_PKG_VERSION"),
            "search": &*self.config,
            "tools": ["classify_query", "suggest_queries", "popular_searches"],
        }))
        .unwrap_or_default()
    }
}

#[tool_router]
impl PhayaoMcpServer {

    #[tool(description = "Route a search query to a portal section (jobs, market, guides, community). Returns: {original_query, category, matched_keyword, fallback, path}")]
    async fn classify_query(
        &self,
        Parameters(params): Parameters<ClassifyQueryParams>,
    ) -> Result<CallToolResult, McpError> {
        let preview: String = params.query.chars().take(50).collect();
        info!("🔍 Classifying: '{}'", preview);

        let json = self.classify_json(&params.query)?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }


    #[tool(description = "Typing suggestions for partial input, at most one per section, with a fixed fallback when nothing matches. Returns: {query, count, suggestions: [{id, text, category, icon, url, kind}]}")]
    async fn suggest_queries(
        &self,
        Parameters(params): Parameters<SuggestQueriesParams>,
    ) -> Result<CallToolResult, McpError> {
        let json = self.suggest_json(&params.query)?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }


    #[tool(description = "Popular searches shown before anything is typed")]
    async fn popular_searches(&self) -> Result<CallToolResult, McpError> {
        let json = Self::result_to_json(self.generator.popular())?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}


#[tool_handler]
impl ServerHandler for PhayaoMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            server_info: Implementation {
                name: crate::SERVER_NAME.into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            instructions: Some(
                "Phayao Hub search routing. Use classify_query to find which section a \
                 search belongs to, suggest_queries while the user is typing, and \
                 popular_searches for an empty search box."
                    .to_string(),
            ),
        }
    }


    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _ctx: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        Ok(ListResourcesResult {
            resources: vec![
                RawResource::new("config://phayao", "phayao-config".to_string()).no_annotation(),
            ],
            next_cursor: None,
        })
    }

    async fn read_resource(
        &self,
        ReadResourceRequestParam { uri }: ReadResourceRequestParam,
        _ctx: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        match uri.as_str() {
            "config://phayao" => Ok(ReadResourceResult {
                contents: vec![ResourceContents::text(self.config_json(), uri)],
            }),
            _ => Err(McpError::resource_not_found(
                format!("Unknown resource: {}", uri),
                Some(json!({ "uri": uri })),
            )),
        }
    }
}


pub async fn run_server(config: PhayaoConfig) -> anyhow::Result<()> {
    info!("🚀 Initializing Phayao Hub MCP Server...");
    info!(
        "   ⏱️ debounce={}ms, max_suggestions={}, default={}",
        config.debounce_ms, config.max_suggestions, config.default_category
    );

    let server = PhayaoMcpServer::new(config);
    let service = server.serve(stdio()).await?;
    info!("✅ Phayao Hub MCP Server ready");
    service.waiting().await?;

    Ok(())
}
