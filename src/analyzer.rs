//! # Sample Analyzer
//!
//! Turns a sample's raw source text into structured facts using text
//! heuristics. The scanner recognizes opening/closing/self-closing JSX
//! tags while honoring quoted attribute values and expression braces; it
//! is deliberately not a full parser.

use crate::types::{
    AnalyzedSample, Complexity, Example, ExampleType, Interactivity, Sample, VariantUsage,
};

use regex::Regex;

/// Tokens that mark an example as interactive: React state hooks and
/// event handler props.
const STATE_TOKENS: &[&str] = &["useState", "useReducer", "useEffect"];

/// Length above which an example counts as advanced.
const ADVANCED_LENGTH_THRESHOLD: usize = 240;

#[derive(Clone)]
pub struct SampleAnalyzer {
    attr_re: Regex,
    handler_re: Regex,
}

impl Default for SampleAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleAnalyzer {
    pub fn new() -> Self {
        Self {
            attr_re: Regex::new(r#"([A-Za-z_][\w-]*)="([^"]*)""#).expect("static regex"),
            handler_re: Regex::new(r"\bon[A-Z]\w*\s*=").expect("static regex"),
        }
    }

    /// Analyze one sample. Never fails: empty or unrecognizable source
    /// yields an empty analysis so callers can fall back to templates.
    pub fn analyze(&self, sample: &Sample) -> AnalyzedSample {
        let source = sample.source.as_str();
        if source.trim().is_empty() {
            return AnalyzedSample::empty();
        }

        let examples = self.extract_examples(source);
        let variants = self.extract_variants(source, &sample.component_name);
        let patterns = self.detect_patterns(source);

        let interactivity = if examples
            .iter()
            .any(|e| e.example_type == ExampleType::Interactive)
        {
            Interactivity::Interactive
        } else {
            Interactivity::Static
        };

        let complexity = classify_complexity(&examples);
        let best_practices = self.collect_best_practices(source);

        AnalyzedSample {
            examples,
            variants,
            patterns,
            complexity,
            interactivity,
            best_practices,
        }
    }

    /// Extract balanced tag regions rooted at component (capitalized)
    /// tags. Regions nested inside an already-extracted region are not
    /// reported separately.
    pub fn extract_examples(&self, source: &str) -> Vec<Example> {
        extract_tag_regions(source)
            .into_iter()
            .map(|region| {
                let example_type = self.classify_example(&region);
                let description = match example_type {
                    ExampleType::Basic => "Basic usage extracted from the sample",
                    ExampleType::Advanced => "Composed usage extracted from the sample",
                    ExampleType::Interactive => "Interactive usage extracted from the sample",
                };
                Example {
                    example_type,
                    code: region,
                    description: description.to_string(),
                }
            })
            .collect()
    }

    fn classify_example(&self, code: &str) -> ExampleType {
        if STATE_TOKENS.iter().any(|t| code.contains(t)) || self.handler_re.is_match(code) {
            return ExampleType::Interactive;
        }
        if code.len() > ADVANCED_LENGTH_THRESHOLD || distinct_component_tags(code) >= 3 {
            return ExampleType::Advanced;
        }
        ExampleType::Basic
    }

    /// Every `prop="literal"` occurrence on opening tags of the target
    /// component, in source order. Duplicates are retained; callers
    /// wanting distinct values must group explicitly.
    pub fn extract_variants(&self, source: &str, component: &str) -> Vec<VariantUsage> {
        let mut variants = Vec::new();
        let mut search = 0;

        while let Some(lt) = find_component_tag(&source[search..], component) {
            let lt = search + lt;
            let Some(open) = scan_opening_tag(source, lt) else {
                break;
            };
            let tag_body = &source[lt..open.gt];
            for captures in self.attr_re.captures_iter(tag_body) {
                variants.push(VariantUsage {
                    component: component.to_string(),
                    variant: captures[1].to_string(),
                    value: captures[2].to_string(),
                });
            }
            search = open.gt + 1;
        }

        variants
    }

    /// Human-oriented labels for interaction patterns found in the source.
    pub fn detect_patterns(&self, source: &str) -> Vec<String> {
        let mut patterns = Vec::new();
        if STATE_TOKENS.iter().any(|t| source.contains(t)) {
            patterns.push("controlled-state".to_string());
        }
        if self.handler_re.is_match(source) {
            patterns.push("event-handling".to_string());
        }
        if distinct_component_tags(source) >= 3 {
            patterns.push("composition".to_string());
        }
        if source.contains("aria-") || source.contains("role=") {
            patterns.push("accessibility".to_string());
        }
        if source.contains("className=") {
            patterns.push("custom-styling".to_string());
        }
        patterns
    }

    /// Advisory notes derived from which tokens were found. Guaranteed
    /// non-empty whenever a handler or state token is present.
    fn collect_best_practices(&self, source: &str) -> Vec<String> {
        let mut notes = Vec::new();
        if source.contains("aria-") || source.contains("role=") {
            notes.push("Uses accessible ARIA markup".to_string());
        }
        if STATE_TOKENS.iter().any(|t| source.contains(t)) {
            notes.push("Keeps component state in React hooks".to_string());
        }
        if self.handler_re.is_match(source) {
            notes.push("Wires event handlers for user interaction".to_string());
        }
        if source.contains("variant=") {
            notes.push("Selects presentation through design-system variants".to_string());
        }
        if source.contains("className=") {
            notes.push("Composes styling through className".to_string());
        }
        notes
    }
}

/// Monotonic bucketing over example count, average length and presence of
/// composition. More structure never yields a lower bucket.
fn classify_complexity(examples: &[Example]) -> Complexity {
    if examples.is_empty() {
        return Complexity::Simple;
    }

    let avg_len = examples.iter().map(|e| e.code.len()).sum::<usize>() / examples.len();
    let has_composition = examples.iter().any(|e| distinct_component_tags(&e.code) >= 2);

    let score = examples.len() * 2 + avg_len / 100 + if has_composition { 3 } else { 0 };
    match score {
        0..=3 => Complexity::Simple,
        4..=7 => Complexity::Intermediate,
        _ => Complexity::Complex,
    }
}

/// Number of distinct capitalized (component) tag names in a snippet.
fn distinct_component_tags(code: &str) -> usize {
    let mut names: Vec<String> = Vec::new();
    let bytes = code.as_bytes();
    let mut i = 0;
    while i + 1 < bytes.len() {
        if bytes[i] == b'<' && bytes[i + 1].is_ascii_uppercase() {
            let name = read_tag_name(code, i + 1);
            if !names.contains(&name) {
                names.push(name);
            }
        }
        i += 1;
    }
    names.len()
}

pub(crate) struct OpeningTag {
    /// Byte index of the closing `>` of the opening tag
    pub gt: usize,
    pub self_closing: bool,
}

/// Scan an opening tag starting at `lt` (the `<`) to its `>`, honoring
/// quoted attribute values and `{...}` expression braces.
pub(crate) fn scan_opening_tag(source: &str, lt: usize) -> Option<OpeningTag> {
    let bytes = source.as_bytes();
    let mut i = lt + 1;
    let mut quote: Option<u8> = None;
    let mut brace_depth = 0usize;
    let mut last_significant = b'<';

    while i < bytes.len() {
        let b = bytes[i];
        if let Some(q) = quote {
            if b == q {
                quote = None;
            }
        } else {
            match b {
                b'"' | b'\'' => quote = Some(b),
                b'{' => brace_depth += 1,
                b'}' => brace_depth = brace_depth.saturating_sub(1),
                b'>' if brace_depth == 0 => {
                    return Some(OpeningTag {
                        gt: i,
                        self_closing: last_significant == b'/',
                    });
                }
                _ => {}
            }
        }
        if !b.is_ascii_whitespace() {
            last_significant = b;
        }
        i += 1;
    }
    None
}

/// Find the first opening tag of `component` in `source`, rejecting
/// longer names that merely share the prefix.
pub(crate) fn find_component_tag(source: &str, component: &str) -> Option<usize> {
    let token = format!("<{component}");
    let mut search = 0;
    while let Some(rel) = source[search..].find(&token) {
        let lt = search + rel;
        let after = lt + token.len();
        let boundary = source[after..]
            .chars()
            .next()
            .is_none_or(|c| !is_tag_name_char(c));
        if boundary {
            return Some(lt);
        }
        search = after;
    }
    None
}

fn is_tag_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '.' || c == '_'
}

fn read_tag_name(source: &str, start: usize) -> String {
    source[start..]
        .chars()
        .take_while(|c| is_tag_name_char(*c))
        .collect()
}

/// Extract balanced top-level tag regions rooted at capitalized tags.
fn extract_tag_regions(source: &str) -> Vec<String> {
    let mut regions = Vec::new();
    let bytes = source.as_bytes();
    let mut i = 0;

    while i + 1 < bytes.len() {
        if bytes[i] == b'<' && bytes[i + 1].is_ascii_uppercase() {
            let name = read_tag_name(source, i + 1);
            if let Some(end) = balanced_region_end(source, i, &name) {
                regions.push(source[i..end].trim().to_string());
                i = end;
                continue;
            }
        }
        i += 1;
    }

    regions
}

/// End index (exclusive) of the balanced region opened at `lt`, or `None`
/// when the tag never closes.
fn balanced_region_end(source: &str, lt: usize, name: &str) -> Option<usize> {
    let open = scan_opening_tag(source, lt)?;
    if open.self_closing {
        return Some(open.gt + 1);
    }

    let open_token = format!("<{name}");
    let close_token = format!("</{name}");
    let mut depth = 1usize;
    let mut pos = open.gt + 1;

    while depth > 0 {
        let next_lt = source[pos..].find('<')? + pos;
        let rest = &source[next_lt..];

        if rest.starts_with(&close_token)
            && !rest[close_token.len()..]
                .chars()
                .next()
                .is_some_and(is_tag_name_char)
        {
            let gt = rest.find('>')? + next_lt;
            depth -= 1;
            pos = gt + 1;
            if depth == 0 {
                return Some(pos);
            }
        } else if rest.starts_with(&open_token)
            && !rest[open_token.len()..]
                .chars()
                .next()
                .is_some_and(is_tag_name_char)
        {
            let inner = scan_opening_tag(source, next_lt)?;
            if !inner.self_closing {
                depth += 1;
            }
            pos = inner.gt + 1;
        } else {
            pos = next_lt + 1;
        }
    }

    None
}
