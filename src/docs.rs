//! Markdown documentation rendering for components, built from a sample
//! and its analysis.

use crate::config::ServiceConfig;
use crate::types::{AnalyzedSample, ExampleType, Sample};

#[derive(Clone)]
pub struct DocsRenderer {
    config: ServiceConfig,
}

impl DocsRenderer {
    pub fn new(config: ServiceConfig) -> Self {
        Self { config }
    }

    /// Render a markdown usage document for one component.
    pub fn render(&self, sample: &Sample, analysis: &AnalyzedSample) -> String {
        let name = &sample.component_name;
        let mut doc = format!("# {name}\n\n{}\n", sample.description);

        if !sample.tags.is_empty() {
            doc.push_str(&format!("\nTags: {}\n", sample.tags.join(", ")));
        }

        doc.push_str("\n## Import\n\n```tsx\n");
        let import = sample
            .imports
            .iter()
            .find(|line| line.contains(self.config.library_package.as_str()))
            .cloned()
            .unwrap_or_else(|| {
                format!(
                    "import {{ {name} }} from \"{}\"",
                    self.config.library_package
                )
            });
        doc.push_str(&import);
        doc.push_str("\n```\n");

        doc.push_str("\n## Usage\n\n```tsx\n");
        let usage = analysis
            .examples
            .iter()
            .find(|e| e.example_type == ExampleType::Basic)
            .or_else(|| analysis.examples.first())
            .map(|e| e.code.clone())
            .unwrap_or_else(|| format!("<{name}>Content</{name}>"));
        doc.push_str(&usage);
        doc.push_str("\n```\n");

        let further: Vec<_> = analysis
            .examples
            .iter()
            .filter(|e| e.example_type != ExampleType::Basic)
            .collect();
        if !further.is_empty() {
            doc.push_str("\n## Examples\n");
            for example in further {
                let heading = match example.example_type {
                    ExampleType::Basic => "Basic",
                    ExampleType::Advanced => "Advanced",
                    ExampleType::Interactive => "Interactive",
                };
                doc.push_str(&format!(
                    "\n### {heading}\n\n```tsx\n{}\n```\n",
                    example.code
                ));
            }
        }

        // Distinct prop/value pairs only; the analyzer keeps duplicates.
        let mut seen: Vec<(&str, &str)> = Vec::new();
        for usage in &analysis.variants {
            let pair = (usage.variant.as_str(), usage.value.as_str());
            if !seen.contains(&pair) {
                seen.push(pair);
            }
        }
        if !seen.is_empty() {
            doc.push_str("\n## Variants\n\n| Prop | Value |\n|---|---|\n");
            for (variant, value) in seen {
                doc.push_str(&format!("| `{variant}` | `{value}` |\n"));
            }
        }

        if !analysis.best_practices.is_empty() {
            doc.push_str("\n## Best practices\n\n");
            for note in &analysis.best_practices {
                doc.push_str(&format!("- {note}\n"));
            }
        }

        doc.push_str(&format!("\n---\nGenerated from `{}`.\n", sample.file_name));
        doc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::SampleAnalyzer;

    fn sample() -> Sample {
        let source = r#"// Accessible button
// @tags: form, action
import { Button } from "@ui-kit/react"

export function Demo() {
  return <Button variant="outline">Save</Button>
}
"#;
        Sample {
            component_name: "Button".to_string(),
            file_name: "Button.sample.tsx".to_string(),
            file_path: "playground/samples/Button.sample.tsx".to_string(),
            source: source.to_string(),
            description: "Accessible button".to_string(),
            tags: vec!["form".to_string(), "action".to_string()],
            imports: vec![
                "import { Button } from \"@ui-kit/react\"".to_string(),
            ],
            size_bytes: source.len() as u64,
            file_hash: "sha256:test".to_string(),
        }
    }

    #[test]
    fn test_render_contains_all_sections() {
        let sample = sample();
        let analysis = SampleAnalyzer::new().analyze(&sample);
        let renderer = DocsRenderer::new(ServiceConfig::default());
        let doc = renderer.render(&sample, &analysis);

        assert!(doc.starts_with("# Button"));
        assert!(doc.contains("Tags: form, action"));
        assert!(doc.contains("## Import"));
        assert!(doc.contains("import { Button } from \"@ui-kit/react\""));
        assert!(doc.contains("## Usage"));
        assert!(doc.contains("## Variants"));
        assert!(doc.contains("| `variant` | `outline` |"));
        assert!(doc.contains("Generated from `Button.sample.tsx`"));
    }

    #[test]
    fn test_render_without_examples_falls_back_to_template() {
        let mut sample = sample();
        sample.source = String::new();
        sample.imports.clear();
        let analysis = SampleAnalyzer::new().analyze(&sample);
        let renderer = DocsRenderer::new(ServiceConfig::default());
        let doc = renderer.render(&sample, &analysis);

        assert!(doc.contains("<Button>Content</Button>"));
        assert!(!doc.contains("## Variants"));
    }
}
