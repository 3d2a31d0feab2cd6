use super::document::OpenApiDocument;
use super::types::{OperationParameters, ParameterLocation, ParameterMeta};
use serde_json::Value;
use tracing::debug;

/// Extract parameter metadata from a raw `parameters` list
///
/// Tolerant of malformed input: a missing list, a list that is not an
/// array, entries that are not objects, entries without a string `name`/`in`, and
/// unknown locations are all skipped rather than reported.
///
/// `$ref` entries are resolved against `#/components/parameters` when a document
/// is given; unresolvable references are skipped.
///
/// # Arguments
///
/// * `doc` - Document used to resolve parameter references, if any
/// * `params` - The raw `parameters` value of an operation or path item
#[must_use]
pub fn extract_parameters(doc: Option<&OpenApiDocument>, params: Option<&Value>) -> Vec<ParameterMeta> {
    let Some(list) = params.and_then(Value::as_array) else {
        return Vec::new();
    };

    let mut out = Vec::with_capacity(list.len());
    for entry in list {
        let param = match entry.get("$ref").and_then(Value::as_str) {
            Some(ref_path) => match doc.and_then(|d| d.resolve_parameter_ref(ref_path)) {
                Some(resolved) => resolved,
                None => {
                    debug!(ref_path, "Skipping unresolved parameter reference");
                    continue;
                }
            },
            None => entry,
        };

        let name = param.get("name").and_then(Value::as_str);
        let location = param
            .get("in")
            .and_then(Value::as_str)
            .and_then(ParameterLocation::parse);

        if let (Some(name), Some(location)) = (name, location) {
            out.push(ParameterMeta {
                name: name.to_string(),
                location,
                required: param.get("required").and_then(Value::as_bool).unwrap_or(false),
            });
        }
    }
    out
}

/// Classify the parameters that apply to an operation
///
/// Combines the path item's parameters with the operation's own. An operation
/// parameter replaces a path item parameter with the same name and location.
#[must_use]
pub fn operation_parameters(
    doc: &OpenApiDocument,
    item: &Value,
    operation: &Value,
) -> OperationParameters {
    let mut merged = extract_parameters(Some(doc), item.get("parameters"));
    for param in extract_parameters(Some(doc), operation.get("parameters")) {
        match merged
            .iter_mut()
            .find(|p| p.name == param.name && p.location == param.location)
        {
            Some(existing) => *existing = param,
            None => merged.push(param),
        }
    }
    OperationParameters::classify(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_malformed_lists_are_empty() {
        assert!(extract_parameters(None, None).is_empty());
        assert!(extract_parameters(None, Some(&json!({}))).is_empty());
        assert!(extract_parameters(None, Some(&json!("id"))).is_empty());
    }

    #[test]
    fn test_malformed_entries_are_skipped() {
        let params = json!([
            42,
            { "in": "path" },
            { "name": "id", "in": "path", "required": true },
            { "name": "payload", "in": "body" },
            { "name": 7, "in": "query" }
        ]);
        let out = extract_parameters(None, Some(&params));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "id");
        assert!(out[0].required);
    }

    #[test]
    fn test_refs_need_a_document() {
        let doc = OpenApiDocument::from_value(json!({
            "components": { "parameters": { "Limit": { "name": "limit", "in": "query" } } }
        }));
        let params = json!([{ "$ref": "#/components/parameters/Limit" }]);
        assert!(extract_parameters(None, Some(&params)).is_empty());
        let out = extract_parameters(Some(&doc), Some(&params));
        assert_eq!(out[0].name, "limit");
        assert_eq!(out[0].location, ParameterLocation::Query);
    }

    #[test]
    fn test_operation_overrides_path_item() {
        let doc = OpenApiDocument::from_value(json!({}));
        let item = json!({
            "parameters": [
                { "name": "id", "in": "path", "required": false },
                { "name": "tenant", "in": "query" }
            ]
        });
        let operation = json!({
            "parameters": [
                { "name": "id", "in": "path", "required": true },
                { "name": "page", "in": "query" }
            ]
        });
        let params = operation_parameters(&doc, &item, &operation);
        assert_eq!(params.path.len(), 1);
        assert!(params.path[0].required);
        assert_eq!(params.query_names(), vec!["tenant", "page"]);
    }
}
