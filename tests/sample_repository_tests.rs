//! Tests for SampleRepository
//!
//! Discovery, lookup and search over a temporary samples directory.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use ui_kit_mcp::config::ServiceConfig;
use ui_kit_mcp::samples::SampleRepository;

fn create_test_repository() -> (SampleRepository, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let config = ServiceConfig {
        samples_directory: temp_dir.path().to_path_buf(),
        ..Default::default()
    };
    (SampleRepository::new(config), temp_dir)
}

fn write_sample(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

const BUTTON_SAMPLE: &str = r#"// Accessible button with variants
// @tags: form, action
import { Button } from "@ui-kit/react"

export function Demo() {
  return <Button variant="outline">Save</Button>
}
"#;

#[tokio::test]
async fn test_discover_samples_sorted_by_file_name() {
    let (repository, temp_dir) = create_test_repository();
    write_sample(temp_dir.path(), "Button.sample.tsx", BUTTON_SAMPLE);
    write_sample(temp_dir.path(), "Badge.sample.tsx", "// Badge\nexport {}\n");

    let samples = repository.discover_samples().await.unwrap();
    assert_eq!(samples.len(), 2);
    assert_eq!(samples[0].component_name, "Badge");
    assert_eq!(samples[1].component_name, "Button");
}

#[tokio::test]
async fn test_discover_ignores_non_sample_files() {
    let (repository, temp_dir) = create_test_repository();
    write_sample(temp_dir.path(), "Button.sample.tsx", BUTTON_SAMPLE);
    write_sample(temp_dir.path(), "Button.tsx", "export const Button = () => null\n");
    write_sample(temp_dir.path(), "README.md", "# docs\n");

    let samples = repository.discover_samples().await.unwrap();
    assert_eq!(samples.len(), 1);
    assert_eq!(samples[0].component_name, "Button");
}

#[tokio::test]
async fn test_discover_missing_directory_yields_empty_catalog() {
    let config = ServiceConfig {
        samples_directory: PathBuf::from("/nonexistent/samples/dir"),
        ..Default::default()
    };
    let repository = SampleRepository::new(config);

    let samples = repository.discover_samples().await.unwrap();
    assert!(samples.is_empty());
}

#[tokio::test]
async fn test_discover_skips_oversized_samples() {
    let temp_dir = TempDir::new().unwrap();
    let config = ServiceConfig {
        samples_directory: temp_dir.path().to_path_buf(),
        max_file_size: 16,
        ..Default::default()
    };
    let repository = SampleRepository::new(config);
    write_sample(temp_dir.path(), "Button.sample.tsx", BUTTON_SAMPLE);

    let samples = repository.discover_samples().await.unwrap();
    assert!(samples.is_empty());
}

#[tokio::test]
async fn test_sample_metadata_extraction() {
    let (repository, temp_dir) = create_test_repository();
    write_sample(temp_dir.path(), "Button.sample.tsx", BUTTON_SAMPLE);

    let sample = repository
        .get_sample_for_component("Button")
        .await
        .unwrap()
        .expect("sample should exist");

    assert_eq!(sample.file_name, "Button.sample.tsx");
    assert_eq!(sample.description, "Accessible button with variants");
    assert_eq!(sample.tags, vec!["form", "action"]);
    assert_eq!(sample.imports.len(), 1);
    assert!(sample.imports[0].contains("@ui-kit/react"));
    assert_eq!(sample.size_bytes, BUTTON_SAMPLE.len() as u64);
    assert!(sample.file_hash.starts_with("sha256:"));
}

#[tokio::test]
async fn test_get_sample_is_case_sensitive() {
    let (repository, temp_dir) = create_test_repository();
    write_sample(temp_dir.path(), "Button.sample.tsx", BUTTON_SAMPLE);

    assert!(repository
        .get_sample_for_component("Button")
        .await
        .unwrap()
        .is_some());
    assert!(repository
        .get_sample_for_component("button")
        .await
        .unwrap()
        .is_none());
    assert!(repository
        .get_sample_for_component("DoesNotExist")
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_search_matches_name_description_and_tags() {
    let (repository, temp_dir) = create_test_repository();
    write_sample(temp_dir.path(), "Button.sample.tsx", BUTTON_SAMPLE);
    write_sample(
        temp_dir.path(),
        "Tooltip.sample.tsx",
        "// Hover hint overlay\n// @tags: overlay\nexport {}\n",
    );

    let by_name = repository.search_samples("butt").await.unwrap();
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].component_name, "Button");

    let by_description = repository.search_samples("hover").await.unwrap();
    assert_eq!(by_description.len(), 1);
    assert_eq!(by_description[0].component_name, "Tooltip");

    let by_tag = repository.search_samples("overlay").await.unwrap();
    assert_eq!(by_tag.len(), 1);

    let no_match = repository.search_samples("carousel").await.unwrap();
    assert!(no_match.is_empty());
}

#[tokio::test]
async fn test_search_returns_matches_in_discovery_order() {
    let (repository, temp_dir) = create_test_repository();
    write_sample(temp_dir.path(), "ToggleGroup.sample.tsx", "// group\nexport {}\n");
    write_sample(temp_dir.path(), "Toggle.sample.tsx", "// toggle\nexport {}\n");

    let matches = repository.search_samples("toggle").await.unwrap();
    let names: Vec<&str> = matches.iter().map(|s| s.component_name.as_str()).collect();
    assert_eq!(names, vec!["Toggle", "ToggleGroup"]);
}
