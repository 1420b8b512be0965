//! Tests for the code generation pipeline end to end: resolve sample,
//! analyze, select base code, apply prop overrides, assemble response.

use std::fs;
use std::path::Path;
use tempfile::TempDir;
use ui_kit_mcp::config::ServiceConfig;
use ui_kit_mcp::errors::ServiceError;
use ui_kit_mcp::service::UiKitService;
use ui_kit_mcp::types::*;

fn create_test_service() -> (UiKitService, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let config = ServiceConfig {
        samples_directory: temp_dir.path().to_path_buf(),
        ..Default::default()
    };
    (UiKitService::with_config(config), temp_dir)
}

fn write_sample(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

const BUTTON_SAMPLE: &str = r#"// Accessible button with variants
// @tags: form, action
import * as React from "react"
import { Button } from "@ui-kit/react"

export function BasicButton() {
  return <Button variant="outline">Save</Button>
}

export function CountingButton() {
  const [count, setCount] = React.useState(0)
  return (
    <Button variant="default" onClick={() => setCount(count + 1)}>
      Clicked {count} times
    </Button>
  )
}
"#;

const STATIC_TOOLTIP_SAMPLE: &str = r#"// Plain tooltip
import { Tooltip } from "@ui-kit/react"

export function Demo() {
  return <Tooltip label="More info" />
}
"#;

const BADGE_SAMPLE: &str = r#"// Status badge
import { Badge } from "@ui-kit/react"

export function Variants() {
  return (
    <>
      <Badge variant="default">New</Badge>
      <Badge variant="outline">Beta</Badge>
    </>
  )
}
"#;

#[tokio::test]
async fn test_basic_style_uses_sample_example() {
    let (service, temp_dir) = create_test_service();
    write_sample(temp_dir.path(), "Button.sample.tsx", BUTTON_SAMPLE);

    let result = service
        .generate_code(GenerateCodeParam::new("Button", GenerationStyle::Basic))
        .await
        .unwrap();

    assert!(result.code.contains("<Button"));
    assert!(result.code.contains("variant=\"outline\""));
    assert_eq!(result.based_on_sample, "Button.sample.tsx");
    assert!(result.features.contains(&"from-sample".to_string()));
    assert!(result
        .imports
        .iter()
        .any(|line| line.contains("@ui-kit/react")));
}

#[tokio::test]
async fn test_realistic_style_never_returns_empty_code() {
    let (service, temp_dir) = create_test_service();
    write_sample(temp_dir.path(), "Button.sample.tsx", BUTTON_SAMPLE);
    write_sample(temp_dir.path(), "Tooltip.sample.tsx", STATIC_TOOLTIP_SAMPLE);

    for name in ["Button", "Tooltip"] {
        let result = service
            .generate_code(GenerateCodeParam::new(name, GenerationStyle::Realistic))
            .await
            .unwrap();
        assert!(!result.code.is_empty(), "empty code for {name}");
        assert!(result.code.contains(&format!("<{name}")));
    }
}

#[tokio::test]
async fn test_all_styles_reference_component_tag() {
    let (service, temp_dir) = create_test_service();
    write_sample(temp_dir.path(), "Button.sample.tsx", BUTTON_SAMPLE);

    for style in [
        GenerationStyle::Basic,
        GenerationStyle::Advanced,
        GenerationStyle::Interactive,
        GenerationStyle::Realistic,
    ] {
        let result = service
            .generate_code(GenerateCodeParam::new("Button", style))
            .await
            .unwrap();
        assert!(
            result.code.contains("<Button"),
            "style {style:?} lost the component tag"
        );
    }
}

#[tokio::test]
async fn test_generation_is_idempotent() {
    let (service, temp_dir) = create_test_service();
    write_sample(temp_dir.path(), "Button.sample.tsx", BUTTON_SAMPLE);

    let mut param = GenerateCodeParam::new("Button", GenerationStyle::Realistic);
    param
        .props
        .insert("size".to_string(), PropValue::String("lg".to_string()));

    let first = service.generate_code(param.clone()).await.unwrap();
    let second = service.generate_code(param).await.unwrap();

    assert_eq!(first.code, second.code);
    assert_eq!(first.imports, second.imports);
    assert_eq!(first.features, second.features);
}

#[tokio::test]
async fn test_prop_override_replaces_existing_attribute() {
    let (service, temp_dir) = create_test_service();
    write_sample(temp_dir.path(), "Button.sample.tsx", BUTTON_SAMPLE);

    let mut param = GenerateCodeParam::new("Button", GenerationStyle::Basic);
    param.props.insert(
        "variant".to_string(),
        PropValue::String("secondary".to_string()),
    );

    let result = service.generate_code(param).await.unwrap();
    assert!(result.code.contains("variant=\"secondary\""));
    assert!(!result.code.contains("variant=\"outline\""));
    assert!(result.features.contains(&"prop-overrides".to_string()));
}

#[tokio::test]
async fn test_prop_insertion_emits_bare_boolean_attribute() {
    let (service, temp_dir) = create_test_service();
    write_sample(temp_dir.path(), "Button.sample.tsx", BUTTON_SAMPLE);

    let mut param = GenerateCodeParam::new("Button", GenerationStyle::Basic);
    param
        .props
        .insert("disabled".to_string(), PropValue::Bool(true));

    let result = service.generate_code(param).await.unwrap();
    assert!(result.code.contains(" disabled>"));
}

#[tokio::test]
async fn test_unknown_component_is_an_error_naming_it() {
    let (service, temp_dir) = create_test_service();
    write_sample(temp_dir.path(), "Button.sample.tsx", BUTTON_SAMPLE);

    let result = service
        .generate_code(GenerateCodeParam::new("DoesNotExist", GenerationStyle::Basic))
        .await;

    match result {
        Err(ServiceError::ComponentNotFound(name)) => assert_eq!(name, "DoesNotExist"),
        other => panic!("expected ComponentNotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_interactive_style_synthesizes_fallback_for_static_sample() {
    let (service, temp_dir) = create_test_service();
    write_sample(temp_dir.path(), "Tooltip.sample.tsx", STATIC_TOOLTIP_SAMPLE);

    let result = service
        .generate_code(GenerateCodeParam::new("Tooltip", GenerationStyle::Interactive))
        .await
        .unwrap();

    assert!(!result.code.is_empty());
    assert!(result.code.contains("<Tooltip"));
    assert!(result.code.contains("React.useState"));
    assert!(result.features.contains(&"state-management".to_string()));
    assert!(result.features.contains(&"synthesized-template".to_string()));
    // React import is synthesized alongside the stateful wrapper.
    assert!(result.imports.iter().any(|line| line.contains("\"react\"")));
}

#[tokio::test]
async fn test_interactive_fallback_state_shape_follows_component_keyword() {
    let (service, temp_dir) = create_test_service();
    write_sample(
        temp_dir.path(),
        "SearchInput.sample.tsx",
        "// Search input\nimport { SearchInput } from \"@ui-kit/react\"\nexport function Demo() {\n  return <SearchInput />\n}\n",
    );

    let result = service
        .generate_code(GenerateCodeParam::new(
            "SearchInput",
            GenerationStyle::Interactive,
        ))
        .await
        .unwrap();

    assert!(result.code.contains("onChange"));
    assert!(result.code.contains("setValue"));
}

#[tokio::test]
async fn test_advanced_style_builds_variant_showcase() {
    let (service, temp_dir) = create_test_service();
    write_sample(temp_dir.path(), "Badge.sample.tsx", BADGE_SAMPLE);

    let result = service
        .generate_code(GenerateCodeParam::new("Badge", GenerationStyle::Advanced))
        .await
        .unwrap();

    assert!(result.features.contains(&"variant-showcase".to_string()));
    assert!(result.code.contains("variant=\"default\""));
    assert!(result.code.contains("variant=\"outline\""));
    // One element per distinct variant value.
    assert_eq!(result.code.matches("<Badge ").count(), 2);
}

#[tokio::test]
async fn test_realistic_usecase_dispatch() {
    let (service, temp_dir) = create_test_service();
    write_sample(temp_dir.path(), "Tooltip.sample.tsx", STATIC_TOOLTIP_SAMPLE);

    let mut param = GenerateCodeParam::new("Tooltip", GenerationStyle::Realistic);
    param.context = Some(UsageContext {
        usecase: Some("a settings form".to_string()),
        ..Default::default()
    });

    let result = service.generate_code(param).await.unwrap();
    assert!(result.code.contains("<form"));
    assert!(result.code.contains("<Tooltip"));
    assert!(result.features.contains(&"form-usecase".to_string()));
}

#[tokio::test]
async fn test_realistic_include_state_prefers_stateful_output() {
    let (service, temp_dir) = create_test_service();
    write_sample(temp_dir.path(), "Tooltip.sample.tsx", STATIC_TOOLTIP_SAMPLE);

    let mut param = GenerateCodeParam::new("Tooltip", GenerationStyle::Realistic);
    param.context = Some(UsageContext {
        include_state: true,
        ..Default::default()
    });

    let result = service.generate_code(param).await.unwrap();
    assert!(result.code.contains("React.useState"));
}

#[tokio::test]
async fn test_response_carries_analysis_metadata() {
    let (service, temp_dir) = create_test_service();
    write_sample(temp_dir.path(), "Button.sample.tsx", BUTTON_SAMPLE);

    let result = service
        .generate_code(GenerateCodeParam::new("Button", GenerationStyle::Basic))
        .await
        .unwrap();

    assert!(!result.description.is_empty());
    assert!(result.description.contains("Button.sample.tsx"));
    // The sample wires handlers and state, so notes are present.
    assert!(!result.best_practices.is_empty());
}
