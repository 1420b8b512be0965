//! # Sample Repository
//!
//! Maps component names to their playground sample sources. Samples follow
//! the `<Name>.sample.<ext>` naming convention and live in one directory;
//! the catalog is re-scanned on every call so results always reflect the
//! files on disk.

use crate::config::ServiceConfig;
use crate::errors::ServiceError;
use crate::types::Sample;

use futures::stream::{self, StreamExt};
use globset::Glob;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Clone)]
pub struct SampleRepository {
    config: ServiceConfig,
}

impl SampleRepository {
    pub fn new(config: ServiceConfig) -> Self {
        Self { config }
    }

    /// Scan the samples directory and load every sample file.
    ///
    /// A missing directory yields an empty catalog rather than an error;
    /// "no samples here" is an expected state for a fresh checkout.
    pub async fn discover_samples(&self) -> Result<Vec<Sample>, ServiceError> {
        let dir = &self.config.samples_directory;
        if !dir.is_dir() {
            tracing::debug!("samples directory {} not found, empty catalog", dir.display());
            return Ok(Vec::new());
        }

        let matcher = Glob::new("*.sample.*")?.compile_matcher();

        let mut paths: Vec<PathBuf> = Vec::new();
        for entry in WalkDir::new(dir)
            .max_depth(1)
            .into_iter()
            .filter_map(Result::ok)
        {
            if !entry.file_type().is_file() {
                continue;
            }
            if matcher.is_match(Path::new(entry.file_name())) {
                paths.push(entry.into_path());
            }
        }
        // Sorted so discovery order is stable across runs and platforms.
        paths.sort();

        let max_file_size = self.config.max_file_size;
        let samples: Vec<Sample> = stream::iter(paths)
            .map(|path| async move { load_sample(&path, max_file_size).await })
            .buffered(self.config.max_concurrency.max(1))
            .filter_map(|sample| async move { sample })
            .collect()
            .await;

        Ok(samples)
    }

    /// Exact, case-sensitive lookup by component name.
    ///
    /// `None` is the expected result for components without a sample.
    pub async fn get_sample_for_component(
        &self,
        name: &str,
    ) -> Result<Option<Sample>, ServiceError> {
        let samples = self.discover_samples().await?;
        Ok(samples.into_iter().find(|s| s.component_name == name))
    }

    /// Case-insensitive substring search over name, description and tags.
    /// Matches are returned in discovery order.
    pub async fn search_samples(&self, query: &str) -> Result<Vec<Sample>, ServiceError> {
        let query = query.to_lowercase();
        let samples = self.discover_samples().await?;
        Ok(samples
            .into_iter()
            .filter(|s| {
                s.component_name.to_lowercase().contains(&query)
                    || s.description.to_lowercase().contains(&query)
                    || s.tags.iter().any(|t| t.to_lowercase().contains(&query))
            })
            .collect())
    }
}

async fn load_sample(path: &Path, max_file_size: u64) -> Option<Sample> {
    let metadata = tokio::fs::metadata(path).await.ok()?;
    if metadata.len() > max_file_size {
        tracing::warn!("skipping oversized sample {}", path.display());
        return None;
    }

    let source = tokio::fs::read_to_string(path).await.ok()?;
    let file_name = path.file_name()?.to_string_lossy().to_string();
    let component_name = component_name_from_file(&file_name)?;

    let description = extract_description(&source)
        .unwrap_or_else(|| format!("Usage sample for the {component_name} component"));
    let file_hash = format!("sha256:{}", hex::encode(Sha256::digest(source.as_bytes())));

    Some(Sample {
        component_name,
        file_name,
        file_path: path.to_string_lossy().to_string(),
        description,
        tags: extract_tags(&source),
        imports: extract_imports(&source),
        size_bytes: metadata.len(),
        file_hash,
        source,
    })
}

/// `Button.sample.tsx` -> `Button`. Files without the `.sample.` infix
/// never reach this function thanks to the glob, but stay defensive about
/// empty stems.
fn component_name_from_file(file_name: &str) -> Option<String> {
    let (stem, _) = file_name.split_once(".sample.")?;
    if stem.is_empty() {
        None
    } else {
        Some(stem.to_string())
    }
}

/// First leading comment line of the file, if any.
///
/// Supports both `// text` headers and `/** ... */` doc blocks; the first
/// non-empty, non-annotation line wins.
fn extract_description(source: &str) -> Option<String> {
    for line in source.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed == "/**" || trimmed == "*/" {
            continue;
        }
        if let Some(text) = trimmed
            .strip_prefix("//")
            .or_else(|| trimmed.strip_prefix("/*"))
            .or_else(|| trimmed.strip_prefix('*'))
        {
            let text = text.trim_start_matches('*').trim().trim_end_matches("*/").trim();
            if text.is_empty() || text.starts_with('@') {
                continue;
            }
            return Some(text.to_string());
        }
        // First non-comment line ends the header block.
        break;
    }
    None
}

/// Tags come from a `@tags: a, b, c` annotation in the header comment.
fn extract_tags(source: &str) -> Vec<String> {
    for line in source.lines() {
        let trimmed = line.trim();
        let in_header = trimmed.is_empty()
            || trimmed.starts_with("//")
            || trimmed.starts_with("/*")
            || trimmed.starts_with('*');
        if !in_header {
            break;
        }
        if let Some(idx) = trimmed.find("@tags:") {
            return trimmed[idx + "@tags:".len()..]
                .split(',')
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect();
        }
    }
    Vec::new()
}

/// All `import ...` lines, verbatim, in source order.
fn extract_imports(source: &str) -> Vec<String> {
    source
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with("import "))
        .map(str::to_string)
        .collect()
}
