use super::document::OpenApiDocument;
use anyhow::{bail, Context};
use oas3::OpenApiV3Spec;
use std::path::Path;
use tracing::{debug, info};

/// Serialization format of a document on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Json,
}

impl DocumentFormat {
    /// Pick the format from a file extension; anything but `.yaml`/`.yml` is JSON.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => DocumentFormat::Yaml,
            _ => DocumentFormat::Json,
        }
    }
}

fn strip_unknown_verbs(val: &mut serde_json::Value) {
    const METHODS: [&str; 8] = ["get", "post", "put", "delete", "patch", "options", "head", "trace"];

    if let Some(serde_json::Value::Object(paths_map)) = val.get_mut("paths") {
        for item in paths_map.values_mut() {
            if let serde_json::Value::Object(obj) = item {
                obj.retain(|k, _| {
                    let lk = k.to_ascii_lowercase();
                    match lk.as_str() {
                        "summary" | "description" | "servers" | "parameters" | "$ref" => true,
                        m if METHODS.contains(&m) => true,
                        _ => k.starts_with("x-"),
                    }
                });
            }
        }
    }
}

/// Parse a document from a string and validate it as OpenAPI 3.
///
/// Validation deserializes a copy into [`OpenApiV3Spec`]; the returned document
/// keeps the original key order.
pub fn parse_document(content: &str, format: DocumentFormat) -> anyhow::Result<OpenApiDocument> {
    let value: serde_json::Value = match format {
        DocumentFormat::Yaml => serde_yaml::from_str(content).context("Invalid YAML document")?,
        DocumentFormat::Json => serde_json::from_str(content).context("Invalid JSON document")?,
    };

    match value.get("openapi").and_then(|v| v.as_str()) {
        Some(version) if version.starts_with("3.") => {}
        Some(version) => bail!("Unsupported OpenAPI version: {version}. Only 3.x is supported"),
        None => bail!("Invalid OpenAPI document: missing 'openapi' version field"),
    }

    let mut checked = value.clone();
    strip_unknown_verbs(&mut checked);
    let spec: OpenApiV3Spec =
        serde_json::from_value(checked).context("Document is not a valid OpenAPI 3 spec")?;
    debug!(
        title = %spec.info.title,
        paths = spec.paths.as_ref().map_or(0, |p| p.len()),
        "Validated OpenAPI document"
    );

    Ok(OpenApiDocument::from_value(value))
}

/// Load an OpenAPI document from a YAML or JSON file.
pub fn load_document(file_path: impl AsRef<Path>) -> anyhow::Result<OpenApiDocument> {
    let file_path = file_path.as_ref();
    let content = std::fs::read_to_string(file_path)
        .with_context(|| format!("Failed to read {}", file_path.display()))?;
    let doc = parse_document(&content, DocumentFormat::from_path(file_path))
        .with_context(|| format!("Failed to load {}", file_path.display()))?;
    info!(
        spec = %file_path.display(),
        title = doc.title().unwrap_or_default(),
        "Loaded OpenAPI document"
    );
    Ok(doc)
}
