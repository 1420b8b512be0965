//! # Tool Router Module
//!
//! Handles routing of MCP tool calls to appropriate service methods.
//! This module extracts the tool routing logic from the main service
//! to improve modularity and maintainability.

use crate::response_formatter::ResponseFormatter;
use crate::service::UiKitService;
use crate::types::*;

use rmcp::model::{CallToolRequestParam, CallToolResult, Content, ErrorData};
use serde::de::DeserializeOwned;
use std::borrow::Cow;

/// Routes tool calls to appropriate service methods
pub struct ToolRouter;

impl ToolRouter {
    /// Helper function to parse request parameters
    fn parse_params<T: DeserializeOwned>(request: &CallToolRequestParam) -> Result<T, ErrorData> {
        serde_json::from_value(serde_json::Value::Object(
            request.arguments.clone().unwrap_or_default(),
        ))
        .map_err(|e| ErrorData::invalid_params(Cow::Owned(e.to_string()), None))
    }

    /// Helper function to create JSON response
    fn create_json_response<T: serde::Serialize>(result: T) -> Result<CallToolResult, ErrorData> {
        let json_value = serde_json::to_value(&result)
            .map_err(|e| ErrorData::internal_error(Cow::Owned(e.to_string()), None))?;
        Ok(CallToolResult::success(vec![Content::json(json_value)?]))
    }

    /// Helper function to create formatted response
    fn create_formatted_response<T: serde::Serialize>(
        result: &T,
        summary: String,
    ) -> Result<CallToolResult, ErrorData> {
        ResponseFormatter::create_formatted_response(result, summary)
            .map_err(|e| ErrorData::internal_error(Cow::Owned(e.to_string()), None))
    }

    /// Route a tool call to the appropriate service method
    pub async fn route_tool_call(
        service: &UiKitService,
        request: CallToolRequestParam,
    ) -> Result<CallToolResult, ErrorData> {
        match request.name.as_ref() {
            // Catalog operations
            "list_components" => Self::handle_list_components(service, request).await,
            "get_component_sample" => Self::handle_get_component_sample(service, request).await,
            "search_components" => Self::handle_search_components(service, request).await,

            // Analysis and documentation
            "analyze_component_sample" => Self::handle_analyze_sample(service, request).await,
            "get_component_docs" => Self::handle_component_docs(service, request).await,

            // Code generation
            "generate_component_code" => Self::handle_generate_code(service, request).await,

            _ => Err(ErrorData::method_not_found::<
                rmcp::model::CallToolRequestMethod,
            >()),
        }
    }

    async fn handle_list_components(
        service: &UiKitService,
        _request: CallToolRequestParam,
    ) -> Result<CallToolResult, ErrorData> {
        let param = ListComponentsParam {};
        let result = service
            .list_components(param)
            .await
            .map_err(ErrorData::from)?;
        let summary = ResponseFormatter::format_component_list(&result);
        Self::create_formatted_response(&result, summary)
    }

    async fn handle_get_component_sample(
        service: &UiKitService,
        request: CallToolRequestParam,
    ) -> Result<CallToolResult, ErrorData> {
        let param: GetComponentSampleParam = Self::parse_params(&request)?;
        if param.component_name.is_empty() {
            return Err(ErrorData::invalid_params(
                Cow::Borrowed(
                    "The 'get_component_sample' tool requires the 'component_name' parameter. Use 'list_components' to see available components.",
                ),
                None,
            ));
        }
        let result = service
            .get_component_sample(param)
            .await
            .map_err(ErrorData::from)?;
        Self::create_json_response(result)
    }

    async fn handle_search_components(
        service: &UiKitService,
        request: CallToolRequestParam,
    ) -> Result<CallToolResult, ErrorData> {
        let param: SearchComponentsParam = Self::parse_params(&request)?;
        if param.query.is_empty() {
            return Err(ErrorData::invalid_params(
                Cow::Borrowed(
                    "The 'search_components' tool requires a non-empty 'query'. To see every component, use the 'list_components' tool instead.",
                ),
                None,
            ));
        }
        let result = service
            .search_components(param)
            .await
            .map_err(ErrorData::from)?;
        let summary = ResponseFormatter::format_search_result(&result);
        Self::create_formatted_response(&result, summary)
    }

    async fn handle_analyze_sample(
        service: &UiKitService,
        request: CallToolRequestParam,
    ) -> Result<CallToolResult, ErrorData> {
        let param: AnalyzeSampleParam = Self::parse_params(&request)?;
        let result = service.analyze_sample(param).await.map_err(ErrorData::from)?;
        let summary = ResponseFormatter::format_analysis_result(&result);
        Self::create_formatted_response(&result, summary)
    }

    async fn handle_component_docs(
        service: &UiKitService,
        request: CallToolRequestParam,
    ) -> Result<CallToolResult, ErrorData> {
        let param: ComponentDocsParam = Self::parse_params(&request)?;
        let result = service
            .component_docs(param)
            .await
            .map_err(ErrorData::from)?;
        Self::create_json_response(result)
    }

    async fn handle_generate_code(
        service: &UiKitService,
        request: CallToolRequestParam,
    ) -> Result<CallToolResult, ErrorData> {
        let param: GenerateCodeParam = Self::parse_params(&request)?;

        // Error handling for common LLM misuse patterns
        if param.component_name.is_empty() {
            return Err(ErrorData::invalid_params(
                Cow::Borrowed(
                    "The 'generate_component_code' tool requires the 'component_name' parameter. Use 'list_components' to see which components have samples.",
                ),
                None,
            ));
        }

        let result = service.generate_code(param).await.map_err(ErrorData::from)?;
        let summary = ResponseFormatter::format_generated_code(&result);
        Self::create_formatted_response(&result, summary)
    }
}
