use oas3::OpenApiV3Spec;
use serde_json::Value;

/// A read-only OpenAPI document.
///
/// Held as an order-preserving JSON value rather than a typed [`OpenApiV3Spec`]:
/// the typed model stores `paths` in a sorted map, while routes must come out in
/// the order the document declares them. Use [`crate::spec::load_document`] to
/// load and validate a file, or [`OpenApiDocument::from_value`] when the document
/// has already been parsed elsewhere.
#[derive(Debug, Clone, PartialEq)]
pub struct OpenApiDocument {
    value: Value,
}

/// One `GET` operation found while walking `paths`.
#[derive(Debug, Clone, Copy)]
pub struct GetOperation<'a> {
    /// Path template as declared (e.g. `/users/{id}`)
    pub path: &'a str,
    /// The enclosing path item (carries path-level `parameters`)
    pub item: &'a Value,
    /// The `get` operation object
    pub operation: &'a Value,
}

impl OpenApiDocument {
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        Self { value }
    }

    /// Build a document from an already parsed typed spec.
    ///
    /// Path order follows the typed model, which is sorted by path.
    pub fn from_spec(spec: &OpenApiV3Spec) -> anyhow::Result<Self> {
        Ok(Self {
            value: serde_json::to_value(spec)?,
        })
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.value.pointer("/info/title").and_then(Value::as_str)
    }

    /// Path component of the first server URL, without a trailing slash.
    ///
    /// Relative server URLs (`/api/v1`) are accepted. Returns an empty string when
    /// there is no server or the URL has no path.
    #[must_use]
    pub fn base_path(&self) -> String {
        let Some(url_str) = self.value.pointer("/servers/0/url").and_then(Value::as_str) else {
            return String::new();
        };
        url::Url::parse(url_str)
            .or_else(|_| url::Url::parse(&format!("http://dummy{url_str}")))
            .map(|u| {
                let p = u.path().trim_end_matches('/');
                if p == "/" || p.is_empty() {
                    String::new()
                } else {
                    p.to_string()
                }
            })
            .unwrap_or_default()
    }

    /// Path items in declared order. A missing or non-object `paths` yields nothing.
    pub fn paths(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.value
            .get("paths")
            .and_then(Value::as_object)
            .into_iter()
            .flat_map(|paths| paths.iter().map(|(k, v)| (k.as_str(), v)))
    }

    /// Every path item's `get` operation, in declared order.
    ///
    /// Path items without a `get` key are skipped. The operation is yielded even
    /// when it is not an object so that the caller can report it.
    pub fn get_operations(&self) -> impl Iterator<Item = GetOperation<'_>> {
        self.paths().filter_map(|(path, item)| {
            item.get("get").map(|operation| GetOperation {
                path,
                item,
                operation,
            })
        })
    }

    /// Look up a `#/components/parameters/<name>` reference.
    #[must_use]
    pub fn resolve_parameter_ref(&self, ref_path: &str) -> Option<&Value> {
        let name = ref_path.strip_prefix("#/components/parameters/")?;
        self.value
            .get("components")?
            .get("parameters")?
            .get(name)
            .filter(|v| v.is_object())
    }
}

impl From<Value> for OpenApiDocument {
    fn from(value: Value) -> Self {
        Self::from_value(value)
    }
}
