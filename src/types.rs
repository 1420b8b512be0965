use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// Sample catalog types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sample {
    pub component_name: String,
    pub file_name: String,
    pub file_path: String,
    pub source: String,
    pub description: String,
    pub tags: Vec<String>,
    pub imports: Vec<String>,
    pub size_bytes: u64,
    pub file_hash: String,
}

/// Lightweight catalog entry returned by list/search tools
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentInfo {
    pub name: String,
    pub file_name: String,
    pub description: String,
    pub tags: Vec<String>,
}

impl ComponentInfo {
    pub fn from_sample(sample: &Sample) -> Self {
        Self {
            name: sample.component_name.clone(),
            file_name: sample.file_name.clone(),
            description: sample.description.clone(),
            tags: sample.tags.clone(),
        }
    }
}

// Analysis types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExampleType {
    Basic,
    Advanced,
    Interactive,
}

/// One extracted code region from a sample, classified by type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Example {
    #[serde(rename = "type")]
    pub example_type: ExampleType,
    pub code: String,
    pub description: String,
}

/// One `prop="value"` occurrence on a tag of the target component
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantUsage {
    pub component: String,
    pub variant: String,
    pub value: String,
}

/// Complexity buckets are ordered: more structure never yields a lower bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Simple,
    Intermediate,
    Complex,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interactivity {
    Static,
    Interactive,
}

/// Structured facts derived from one sample's source text.
///
/// Recomputed on demand, never persisted; purely a function of the text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzedSample {
    pub examples: Vec<Example>,
    pub variants: Vec<VariantUsage>,
    pub patterns: Vec<String>,
    pub complexity: Complexity,
    pub interactivity: Interactivity,
    pub best_practices: Vec<String>,
}

impl AnalyzedSample {
    /// Analysis of empty or unrecognizable source: nothing extracted,
    /// lowest buckets, so callers can fall back to templates.
    pub fn empty() -> Self {
        Self {
            examples: Vec::new(),
            variants: Vec::new(),
            patterns: Vec::new(),
            complexity: Complexity::Simple,
            interactivity: Interactivity::Static,
            best_practices: Vec::new(),
        }
    }
}

// Code generation types
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationStyle {
    Basic,
    Advanced,
    Interactive,
    #[default]
    Realistic,
}

/// Closed variant type for caller-supplied prop values.
///
/// Untagged: JSON `true` deserializes as `Bool`, `"outline"` as `String`,
/// anything else (numbers, objects, arrays) as `Json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropValue {
    Bool(bool),
    String(String),
    Json(serde_json::Value),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UsageContext {
    pub usecase: Option<String>,
    pub complexity: Option<String>,
    #[serde(default)]
    pub include_state: bool,
    #[serde(default)]
    pub include_handlers: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateCodeParam {
    pub component_name: String,
    #[serde(default)]
    pub style: GenerationStyle,
    #[serde(default)]
    pub props: IndexMap<String, PropValue>,
    pub context: Option<UsageContext>,
}

impl GenerateCodeParam {
    pub fn new(component_name: &str, style: GenerationStyle) -> Self {
        Self {
            component_name: component_name.to_string(),
            style,
            props: IndexMap::new(),
            context: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedCode {
    pub code: String,
    pub imports: Vec<String>,
    pub description: String,
    pub based_on_sample: String,
    pub complexity: Complexity,
    pub features: Vec<String>,
    pub best_practices: Vec<String>,
}

// Tool parameter and result types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListComponentsParam {}

#[derive(Debug, Serialize, Deserialize)]
pub struct ListComponentsResult {
    pub components: Vec<ComponentInfo>,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetComponentSampleParam {
    pub component_name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GetComponentSampleResult {
    pub sample: Sample,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchComponentsParam {
    pub query: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchComponentsResult {
    pub matches: Vec<ComponentInfo>,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeSampleParam {
    pub component_name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeSampleResult {
    pub component_name: String,
    pub based_on_sample: String,
    pub analysis: AnalyzedSample,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentDocsParam {
    pub component_name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ComponentDocsResult {
    pub component_name: String,
    pub based_on_sample: String,
    pub markdown: String,
}
