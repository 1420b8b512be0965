//! # Code Synthesizer
//!
//! Produces usage code for a component from its playground sample. Each
//! request re-resolves and re-analyzes the sample, so output always
//! reflects current sample content; nothing is cached between calls.

use crate::analyzer::{SampleAnalyzer, find_component_tag, scan_opening_tag};
use crate::config::ServiceConfig;
use crate::errors::ServiceError;
use crate::samples::SampleRepository;
use crate::types::{
    AnalyzedSample, Example, ExampleType, GenerateCodeParam, GeneratedCode, GenerationStyle,
    PropValue, Sample, UsageContext,
};

use indexmap::IndexMap;

/// Realistic-style selection prefers examples in this length window:
/// neither a trivial one-liner nor a wall of markup.
const SWEET_SPOT: std::ops::RangeInclusive<usize> = 120..=600;

/// State shape used when synthesizing an interactive wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StateShape {
    Counter,
    TextValue,
    Toggle,
    Generic,
}

/// Keyword table driving state-shape selection for the interactive
/// fallback. First substring match on the lowercased component name wins.
const STATE_SHAPES: &[(&str, StateShape)] = &[
    ("button", StateShape::Counter),
    ("input", StateShape::TextValue),
    ("textarea", StateShape::TextValue),
    ("field", StateShape::TextValue),
    ("combobox", StateShape::TextValue),
    ("select", StateShape::TextValue),
    ("switch", StateShape::Toggle),
    ("checkbox", StateShape::Toggle),
    ("toggle", StateShape::Toggle),
    ("radio", StateShape::Toggle),
];

fn state_shape_for(component: &str) -> StateShape {
    let lower = component.to_lowercase();
    STATE_SHAPES
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map(|(_, shape)| *shape)
        .unwrap_or(StateShape::Generic)
}

/// Base code selection outcome before prop overrides are applied.
struct Selection {
    code: String,
    description: String,
    features: Vec<String>,
}

#[derive(Clone)]
pub struct CodeGenerator {
    config: ServiceConfig,
    repository: SampleRepository,
    analyzer: SampleAnalyzer,
}

impl CodeGenerator {
    pub fn new(config: ServiceConfig, repository: SampleRepository) -> Self {
        Self {
            config,
            repository,
            analyzer: SampleAnalyzer::new(),
        }
    }

    /// Run the full pipeline: resolve sample, analyze, select base code,
    /// apply prop overrides, assemble the response.
    ///
    /// The only hard error is an unknown component name.
    pub async fn generate(&self, param: GenerateCodeParam) -> Result<GeneratedCode, ServiceError> {
        let name = param.component_name.as_str();
        let sample = self
            .repository
            .get_sample_for_component(name)
            .await?
            .ok_or_else(|| ServiceError::ComponentNotFound(name.to_string()))?;

        let analysis = self.analyzer.analyze(&sample);

        let mut selection = match param.style {
            GenerationStyle::Basic => select_basic(name, &analysis),
            GenerationStyle::Advanced => select_advanced(name, &analysis),
            GenerationStyle::Interactive => select_interactive(name, &analysis),
            GenerationStyle::Realistic => {
                select_realistic(name, &analysis, param.context.as_ref())
            }
        };

        // The one hard contract on output: non-empty code references the
        // component as a tag. A sample whose examples never mention the
        // component falls back to the minimal template.
        if find_component_tag(&selection.code, name).is_none() {
            selection.code = fallback_template(name);
            if !selection.features.contains(&"synthesized-template".to_string()) {
                selection.features.push("synthesized-template".to_string());
            }
        }

        let code = if param.props.is_empty() {
            selection.code
        } else {
            selection.features.push("prop-overrides".to_string());
            apply_prop_overrides(&selection.code, &param.props, name)
        };
        let code = code.trim().to_string();

        Ok(GeneratedCode {
            imports: self.assemble_imports(&sample, name, &code),
            code,
            description: format!("{} (based on {})", selection.description, sample.file_name),
            based_on_sample: sample.file_name,
            complexity: analysis.complexity,
            features: selection.features,
            best_practices: analysis.best_practices,
        })
    }

    /// Prefer the sample's own imports of the UI kit; synthesize a default
    /// import when the sample has none. A React import is added whenever
    /// the generated code reaches for hooks.
    fn assemble_imports(&self, sample: &Sample, component: &str, code: &str) -> Vec<String> {
        let package = &self.config.library_package;
        let mut imports: Vec<String> = sample
            .imports
            .iter()
            .filter(|line| line.contains(package.as_str()))
            .cloned()
            .collect();
        if imports.is_empty() {
            imports.push(format!("import {{ {component} }} from \"{package}\""));
        }

        if code.contains("React.") {
            let react_import = sample
                .imports
                .iter()
                .find(|line| line.contains("\"react\"") || line.contains("'react'"))
                .cloned()
                .unwrap_or_else(|| "import * as React from \"react\"".to_string());
            imports.insert(0, react_import);
        }

        imports
    }
}

fn select_basic(name: &str, analysis: &AnalyzedSample) -> Selection {
    let basic = analysis
        .examples
        .iter()
        .find(|e| e.example_type == ExampleType::Basic)
        .or_else(|| analysis.examples.first());

    match basic {
        Some(example) => Selection {
            code: example.code.clone(),
            description: format!("Basic {name} usage"),
            features: vec!["from-sample".to_string()],
        },
        None => Selection {
            code: fallback_template(name),
            description: format!("Minimal {name} usage"),
            features: vec!["synthesized-template".to_string()],
        },
    }
}

fn select_advanced(name: &str, analysis: &AnalyzedSample) -> Selection {
    if let Some(example) = analysis
        .examples
        .iter()
        .find(|e| e.example_type == ExampleType::Advanced)
    {
        return Selection {
            code: example.code.clone(),
            description: format!("Advanced {name} usage"),
            features: vec!["from-sample".to_string(), "composition".to_string()],
        };
    }

    // One element per distinct variant value, wrapped in a container.
    let mut seen: Vec<(&str, &str)> = Vec::new();
    for usage in &analysis.variants {
        let pair = (usage.variant.as_str(), usage.value.as_str());
        if !seen.contains(&pair) {
            seen.push(pair);
        }
    }

    if !seen.is_empty() {
        let mut code = String::from("<div className=\"flex flex-wrap items-center gap-4\">\n");
        for (variant, value) in &seen {
            code.push_str(&format!(
                "  <{name} {variant}=\"{value}\">{}</{name}>\n",
                capitalize(value)
            ));
        }
        code.push_str("</div>");
        return Selection {
            code,
            description: format!("Showcase of {name} variants"),
            features: vec!["variant-showcase".to_string(), "synthesized-template".to_string()],
        };
    }

    select_basic(name, analysis)
}

fn select_interactive(name: &str, analysis: &AnalyzedSample) -> Selection {
    let has_state_and_handler = |e: &&Example| {
        let code = e.code.as_str();
        (code.contains("useState") || code.contains("useReducer")) && has_handler_token(code)
    };

    if let Some(example) = analysis.examples.iter().find(has_state_and_handler) {
        return Selection {
            code: example.code.clone(),
            description: format!("Interactive {name} usage"),
            features: vec![
                "from-sample".to_string(),
                "state-management".to_string(),
                "event-handlers".to_string(),
            ],
        };
    }

    Selection {
        code: stateful_wrapper(name),
        description: format!("Interactive {name} wrapper with local state"),
        features: vec![
            "synthesized-template".to_string(),
            "state-management".to_string(),
            "event-handlers".to_string(),
        ],
    }
}

fn select_realistic(
    name: &str,
    analysis: &AnalyzedSample,
    context: Option<&UsageContext>,
) -> Selection {
    // Sweet-spot pick: advanced/interactive example of non-trivial size.
    if let Some(example) = analysis.examples.iter().find(|e| {
        matches!(
            e.example_type,
            ExampleType::Advanced | ExampleType::Interactive
        ) && SWEET_SPOT.contains(&e.code.len())
    }) {
        let wants_state = context.is_some_and(|c| c.include_state);
        if !wants_state || example.code.contains("useState") {
            return Selection {
                code: example.code.clone(),
                description: format!("Realistic {name} usage"),
                features: vec!["from-sample".to_string(), "real-world-usage".to_string()],
            };
        }
    }

    if let Some(usecase) = context.and_then(|c| c.usecase.as_deref()) {
        let usecase = usecase.to_lowercase();
        if usecase.contains("form") {
            return usecase_selection(name, form_template(name), "form");
        }
        if usecase.contains("dashboard") {
            return usecase_selection(name, dashboard_template(name), "dashboard");
        }
        if usecase.contains("navigation") {
            return usecase_selection(name, navigation_template(name), "navigation");
        }
    }

    if context.is_some_and(|c| c.include_state || c.include_handlers) {
        return select_interactive(name, analysis);
    }

    if let Some(example) = analysis.examples.first() {
        return Selection {
            code: example.code.clone(),
            description: format!("Realistic {name} usage"),
            features: vec!["from-sample".to_string(), "real-world-usage".to_string()],
        };
    }

    Selection {
        code: fallback_template(name),
        description: format!("Minimal {name} usage"),
        features: vec!["synthesized-template".to_string(), "real-world-usage".to_string()],
    }
}

fn usecase_selection(name: &str, code: String, usecase: &str) -> Selection {
    Selection {
        code,
        description: format!("{name} in a {usecase} context"),
        features: vec![
            "synthesized-template".to_string(),
            "real-world-usage".to_string(),
            format!("{usecase}-usecase"),
        ],
    }
}

fn fallback_template(name: &str) -> String {
    format!("<{name}>Content</{name}>")
}

fn stateful_wrapper(name: &str) -> String {
    match state_shape_for(name) {
        StateShape::Counter => format!(
            r#"export function {name}Demo() {{
  const [count, setCount] = React.useState(0)
  const [loading, setLoading] = React.useState(false)

  const handleClick = () => {{
    setLoading(true)
    setCount((current) => current + 1)
    setLoading(false)
  }}

  return (
    <{name} onClick={{handleClick}} disabled={{loading}}>
      Clicked {{count}} times
    </{name}>
  )
}}"#
        ),
        StateShape::TextValue => format!(
            r#"export function {name}Demo() {{
  const [value, setValue] = React.useState("")

  return (
    <{name}
      value={{value}}
      onChange={{(event) => setValue(event.target.value)}}
      placeholder="Type something"
    />
  )
}}"#
        ),
        StateShape::Toggle => format!(
            r#"export function {name}Demo() {{
  const [checked, setChecked] = React.useState(false)

  return <{name} checked={{checked}} onCheckedChange={{setChecked}} />
}}"#
        ),
        StateShape::Generic => format!(
            r#"export function {name}Demo() {{
  const [active, setActive] = React.useState(false)

  return (
    <{name} data-active={{active}} onClick={{() => setActive((current) => !current)}}>
      {{active ? "Active" : "Inactive"}}
    </{name}>
  )
}}"#
        ),
    }
}

fn form_template(name: &str) -> String {
    format!(
        r#"export function {name}Form() {{
  const [submitted, setSubmitted] = React.useState(false)

  return (
    <form
      className="space-y-4"
      onSubmit={{(event) => {{
        event.preventDefault()
        setSubmitted(true)
      }}}}
    >
      <{name} name="field" />
      <button type="submit">{{submitted ? "Saved" : "Save"}}</button>
    </form>
  )
}}"#
    )
}

fn dashboard_template(name: &str) -> String {
    format!(
        r#"export function {name}Panel() {{
  return (
    <section className="rounded-lg border p-4">
      <header className="mb-2 text-sm font-medium">Overview</header>
      <{name} />
    </section>
  )
}}"#
    )
}

fn navigation_template(name: &str) -> String {
    format!(
        r#"export function {name}Nav() {{
  return (
    <nav className="flex items-center gap-2 border-b px-4 py-2">
      <{name} />
    </nav>
  )
}}"#
    )
}

/// Single pass over the root opening tag of `component`: existing
/// attributes are replaced in place, new ones appended. The rest of the
/// snippet is left untouched.
fn apply_prop_overrides(
    code: &str,
    props: &IndexMap<String, PropValue>,
    component: &str,
) -> String {
    let Some(lt) = find_component_tag(code, component) else {
        return code.to_string();
    };
    let Some(open) = scan_opening_tag(code, lt) else {
        return code.to_string();
    };

    let name_end = lt + 1 + component.len();
    let mut body = code[name_end..open.gt].to_string();
    if open.self_closing
        && let Some(slash) = body.rfind('/')
    {
        body.truncate(slash);
    }

    for (key, value) in props {
        let attribute = format_prop(key, value);
        body = set_attribute(&body, key, &attribute);
    }

    let closer = if open.self_closing { " /" } else { "" };
    format!(
        "{}<{component}{body}{closer}>{}",
        &code[..lt],
        &code[open.gt + 1..]
    )
}

/// Render one attribute. Escaping policy: embedded double quotes in
/// string values are emitted as `&quot;` so a value can never terminate
/// the attribute early.
fn format_prop(key: &str, value: &PropValue) -> String {
    match value {
        PropValue::String(s) => format!("{key}=\"{}\"", s.replace('"', "&quot;")),
        PropValue::Bool(true) => key.to_string(),
        PropValue::Bool(false) => format!("{key}={{false}}"),
        PropValue::Json(v) => format!(
            "{key}={{{}}}",
            serde_json::to_string(v).unwrap_or_else(|_| "null".to_string())
        ),
    }
}

/// Replace an existing attribute in a tag body, or append the new one.
fn set_attribute(body: &str, key: &str, replacement: &str) -> String {
    if let Some((start, end)) = find_attribute_span(body, key) {
        format!("{}{}{}", &body[..start], replacement, &body[end..])
    } else {
        format!("{} {replacement}", body.trim_end())
    }
}

/// Byte span of `key` plus its value (quoted, braced or bare) in a tag
/// body, if present.
fn find_attribute_span(body: &str, key: &str) -> Option<(usize, usize)> {
    let mut search = 0;
    while let Some(rel) = body[search..].find(key) {
        let start = search + rel;
        let after = start + key.len();
        let preceded_ok = start == 0
            || body[..start]
                .chars()
                .next_back()
                .is_some_and(char::is_whitespace);

        if preceded_ok {
            match body[after..].chars().next() {
                Some('=') => {
                    let value_start = after + 1;
                    let end = match body[value_start..].chars().next() {
                        Some('"') => {
                            let close = body[value_start + 1..].find('"')?;
                            value_start + 1 + close + 1
                        }
                        Some('{') => value_start + braced_span_len(&body[value_start..])?,
                        _ => {
                            let rest = &body[value_start..];
                            value_start
                                + rest
                                    .find(char::is_whitespace)
                                    .unwrap_or(rest.len())
                        }
                    };
                    return Some((start, end));
                }
                None => return Some((start, after)),
                Some(c) if c.is_whitespace() => return Some((start, after)),
                _ => {}
            }
        }
        search = after;
    }
    None
}

/// Length of a balanced `{...}` span starting at the opening brace.
fn braced_span_len(text: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (idx, c) in text.char_indices() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(idx + 1);
                }
            }
            _ => {}
        }
    }
    None
}

/// True when the snippet contains an `onSomething=` handler prop.
fn has_handler_token(code: &str) -> bool {
    let bytes = code.as_bytes();
    for i in 0..bytes.len().saturating_sub(2) {
        if bytes[i] == b'o'
            && bytes[i + 1] == b'n'
            && bytes[i + 2].is_ascii_uppercase()
            && (i == 0 || !bytes[i - 1].is_ascii_alphanumeric())
        {
            let mut j = i + 2;
            while j < bytes.len() && bytes[j].is_ascii_alphanumeric() {
                j += 1;
            }
            if j < bytes.len() && bytes[j] == b'=' {
                return true;
            }
        }
    }
    false
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
