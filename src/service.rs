//! Aggregate MCP service: wires the sample repository, analyzer, code
//! generator and docs renderer behind the `rmcp` server handler.

use crate::analyzer::SampleAnalyzer;
use crate::config::ServiceConfig;
use crate::docs::DocsRenderer;
use crate::errors::ServiceError;
use crate::generator::CodeGenerator;
use crate::samples::SampleRepository;
use crate::tool_router::ToolRouter;
use crate::types::*;

use rmcp::{
    ServerHandler,
    model::{
        CallToolRequestParam, CallToolResult, ErrorData, Implementation, InitializeResult,
        ListToolsResult, PaginatedRequestParam, ProtocolVersion, ServerCapabilities, Tool,
    },
    service::{RequestContext, RoleServer},
};
use std::sync::Arc;

#[derive(Clone)]
pub struct UiKitService {
    config: ServiceConfig,
    repository: SampleRepository,
    analyzer: SampleAnalyzer,
    generator: CodeGenerator,
    docs: DocsRenderer,
}

impl Default for UiKitService {
    fn default() -> Self {
        Self::new()
    }
}

impl UiKitService {
    pub fn new() -> Self {
        Self::with_config(ServiceConfig::default())
    }

    pub fn with_config(config: ServiceConfig) -> Self {
        let repository = SampleRepository::new(config.clone());
        let generator = CodeGenerator::new(config.clone(), repository.clone());
        let docs = DocsRenderer::new(config.clone());

        Self {
            config,
            repository,
            analyzer: SampleAnalyzer::new(),
            generator,
            docs,
        }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    pub async fn list_components(
        &self,
        _param: ListComponentsParam,
    ) -> Result<ListComponentsResult, ServiceError> {
        let samples = self.repository.discover_samples().await?;
        let components: Vec<ComponentInfo> =
            samples.iter().map(ComponentInfo::from_sample).collect();
        Ok(ListComponentsResult {
            total: components.len(),
            components,
        })
    }

    pub async fn get_component_sample(
        &self,
        param: GetComponentSampleParam,
    ) -> Result<GetComponentSampleResult, ServiceError> {
        let sample = self
            .repository
            .get_sample_for_component(&param.component_name)
            .await?
            .ok_or(ServiceError::ComponentNotFound(param.component_name))?;
        Ok(GetComponentSampleResult { sample })
    }

    pub async fn search_components(
        &self,
        param: SearchComponentsParam,
    ) -> Result<SearchComponentsResult, ServiceError> {
        let samples = self.repository.search_samples(&param.query).await?;
        let matches: Vec<ComponentInfo> = samples.iter().map(ComponentInfo::from_sample).collect();
        Ok(SearchComponentsResult {
            total: matches.len(),
            matches,
        })
    }

    pub async fn analyze_sample(
        &self,
        param: AnalyzeSampleParam,
    ) -> Result<AnalyzeSampleResult, ServiceError> {
        let sample = self
            .repository
            .get_sample_for_component(&param.component_name)
            .await?
            .ok_or(ServiceError::ComponentNotFound(param.component_name))?;
        let analysis = self.analyzer.analyze(&sample);
        Ok(AnalyzeSampleResult {
            component_name: sample.component_name,
            based_on_sample: sample.file_name,
            analysis,
        })
    }

    pub async fn component_docs(
        &self,
        param: ComponentDocsParam,
    ) -> Result<ComponentDocsResult, ServiceError> {
        let sample = self
            .repository
            .get_sample_for_component(&param.component_name)
            .await?
            .ok_or(ServiceError::ComponentNotFound(param.component_name))?;
        let analysis = self.analyzer.analyze(&sample);
        let markdown = self.docs.render(&sample, &analysis);
        Ok(ComponentDocsResult {
            component_name: sample.component_name,
            based_on_sample: sample.file_name,
            markdown,
        })
    }

    pub async fn generate_code(
        &self,
        param: GenerateCodeParam,
    ) -> Result<GeneratedCode, ServiceError> {
        self.generator.generate(param).await
    }
}

impl ServerHandler for UiKitService {
    fn get_info(&self) -> InitializeResult {
        InitializeResult {
            protocol_version: ProtocolVersion::LATEST,
            server_info: Implementation {
                name: "ui-kit-mcp".into(),
                version: env!("CARGO_PKG_VERSION").into(),
            },
            capabilities: ServerCapabilities {
                tools: Some(rmcp::model::ToolsCapability {
                    list_changed: Some(true),
                }),
                ..Default::default()
            },
            instructions: Some("This MCP server exposes a React UI kit's playground samples: list and search components, read their samples, analyze usage patterns, render markdown docs and generate usage code. Start with 'list_components', then 'generate_component_code' with a style of basic, advanced, interactive or realistic.".into()),
        }
    }

    #[tracing::instrument(skip(self, _request, _context))]
    async fn list_tools(
        &self,
        _request: PaginatedRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, ErrorData> {
        Ok(ListToolsResult {
            next_cursor: None,
            tools: vec![
                Tool {
                    name: "list_components".into(),
                    description: "List every component that has a playground sample.".into(),
                    input_schema: Arc::new(serde_json::from_value(serde_json::json!({ "type": "object", "properties": {} })).unwrap()),
                },
                Tool {
                    name: "get_component_sample".into(),
                    description: "Fetch one component's full sample record, including its source text.".into(),
                    input_schema: Arc::new(serde_json::from_value(serde_json::json!({
                        "type": "object",
                        "properties": {
                            "component_name": { "type": "string", "description": "Exact, case-sensitive component name" }
                        },
                        "required": ["component_name"]
                    })).unwrap()),
                },
                Tool {
                    name: "search_components".into(),
                    description: "Substring search over component names, descriptions and tags.".into(),
                    input_schema: Arc::new(serde_json::from_value(serde_json::json!({
                        "type": "object",
                        "properties": {
                            "query": { "type": "string" }
                        },
                        "required": ["query"]
                    })).unwrap()),
                },
                Tool {
                    name: "analyze_component_sample".into(),
                    description: "Analyze a component's sample: extracted examples, variants, interaction patterns, complexity and best practices.".into(),
                    input_schema: Arc::new(serde_json::from_value(serde_json::json!({
                        "type": "object",
                        "properties": {
                            "component_name": { "type": "string" }
                        },
                        "required": ["component_name"]
                    })).unwrap()),
                },
                Tool {
                    name: "get_component_docs".into(),
                    description: "Render markdown usage documentation for a component from its sample.".into(),
                    input_schema: Arc::new(serde_json::from_value(serde_json::json!({
                        "type": "object",
                        "properties": {
                            "component_name": { "type": "string" }
                        },
                        "required": ["component_name"]
                    })).unwrap()),
                },
                Tool {
                    name: "generate_component_code".into(),
                    description: "Generate usage code for a component from its sample. Styles: basic, advanced, interactive, realistic (default). Supply 'props' to override or insert attributes on the root tag.".into(),
                    input_schema: Arc::new(serde_json::from_value(serde_json::json!({
                        "type": "object",
                        "properties": {
                            "component_name": { "type": "string" },
                            "style": { "type": "string", "enum": ["basic", "advanced", "interactive", "realistic"], "default": "realistic" },
                            "props": {
                                "type": "object",
                                "description": "Prop overrides for the root tag. Strings become quoted attributes, true becomes a bare attribute, everything else an expression attribute.",
                                "additionalProperties": true
                            },
                            "context": {
                                "type": "object",
                                "properties": {
                                    "usecase": { "type": "string", "description": "Known keywords: form, dashboard, navigation" },
                                    "complexity": { "type": "string" },
                                    "include_state": { "type": "boolean", "default": false },
                                    "include_handlers": { "type": "boolean", "default": false }
                                }
                            }
                        },
                        "required": ["component_name"]
                    })).unwrap()),
                },
            ],
        })
    }

    #[tracing::instrument(skip(self, _context))]
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        ToolRouter::route_tool_call(self, request).await
    }
}
