use crate::types::*;
use rmcp::model::{CallToolResult, Content};
use serde_json;

pub struct ResponseFormatter;

impl ResponseFormatter {
    /// Create a formatted response with both JSON data and human-readable text
    pub fn create_formatted_response<T>(
        result: &T,
        summary: String,
    ) -> Result<CallToolResult, Box<dyn std::error::Error + Send + Sync>>
    where
        T: serde::Serialize,
    {
        let json_value = serde_json::to_value(result)?;

        let contents = vec![Content::text(summary), Content::json(json_value)?];

        Ok(CallToolResult::success(contents))
    }

    /// Format a generated code result with a readable summary
    pub fn format_generated_code(result: &GeneratedCode) -> String {
        let mut summary = format!(
            "⚡ **Generated Code**\n\n📄 **Based on**: `{}`\n🏷️ **Features**: {}\n📊 **Complexity**: {:?}\n",
            result.based_on_sample,
            if result.features.is_empty() {
                "none".to_string()
            } else {
                result.features.join(", ")
            },
            result.complexity,
        );

        summary.push_str(&format!("\n```tsx\n{}\n```\n", result.code));

        if !result.imports.is_empty() {
            summary.push_str("\n**Imports**:\n");
            for import in &result.imports {
                summary.push_str(&format!("- `{import}`\n"));
            }
        }

        summary
    }

    /// Format the component list with a readable summary
    pub fn format_component_list(result: &ListComponentsResult) -> String {
        if result.components.is_empty() {
            return "📦 **No components found**\n\nThe samples directory has no sample files."
                .to_string();
        }

        let mut summary = format!("📦 **Components**: {} available\n", result.total);
        for info in &result.components {
            summary.push_str(&format!("\n- **{}** — {}", info.name, info.description));
        }
        summary
    }

    /// Format search results with a readable summary
    pub fn format_search_result(result: &SearchComponentsResult) -> String {
        if result.matches.is_empty() {
            return "🔍 **No matches found**\n\nNo component matched the query.".to_string();
        }

        let mut summary = format!("🔍 **Search Results**: {} matches\n", result.total);
        for info in &result.matches {
            summary.push_str(&format!("\n- **{}** (`{}`)", info.name, info.file_name));
        }
        summary
    }

    /// Format an analysis result with a readable summary
    pub fn format_analysis_result(result: &AnalyzeSampleResult) -> String {
        let analysis = &result.analysis;
        format!(
            "🔬 **Sample Analysis**: {}\n\n📄 **Source**: `{}`\n🧩 **Examples**: {}\n🎨 **Variants**: {}\n📊 **Complexity**: {:?}\n🖱️ **Interactivity**: {:?}\n",
            result.component_name,
            result.based_on_sample,
            analysis.examples.len(),
            analysis.variants.len(),
            analysis.complexity,
            analysis.interactivity,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_generated_code_includes_code_fence() {
        let result = GeneratedCode {
            code: "<Button>Go</Button>".to_string(),
            imports: vec!["import { Button } from \"@ui-kit/react\"".to_string()],
            description: "Basic Button usage".to_string(),
            based_on_sample: "Button.sample.tsx".to_string(),
            complexity: Complexity::Simple,
            features: vec!["from-sample".to_string()],
            best_practices: vec![],
        };

        let summary = ResponseFormatter::format_generated_code(&result);
        assert!(summary.contains("```tsx"));
        assert!(summary.contains("<Button>Go</Button>"));
        assert!(summary.contains("Button.sample.tsx"));
    }

    #[test]
    fn test_format_component_list_empty() {
        let result = ListComponentsResult {
            components: vec![],
            total: 0,
        };
        let summary = ResponseFormatter::format_component_list(&result);
        assert!(summary.contains("No components found"));
    }

    #[test]
    fn test_format_search_result() {
        let result = SearchComponentsResult {
            matches: vec![ComponentInfo {
                name: "Button".to_string(),
                file_name: "Button.sample.tsx".to_string(),
                description: "Accessible button".to_string(),
                tags: vec![],
            }],
            total: 1,
        };
        let summary = ResponseFormatter::format_search_result(&result);
        assert!(summary.contains("1 matches"));
        assert!(summary.contains("**Button**"));
    }
}
