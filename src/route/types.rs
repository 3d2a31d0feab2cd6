use super::props::Props;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Target of a redirecting route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Redirect {
    /// Redirect to a literal path
    Path(String),
    /// Redirect to a route by name
    Named { name: String },
}

/// A route as the SPA router consumes it.
///
/// Generated routes always carry `name`, `view` and `props`; routes appended from
/// overrides carry whatever the override provided.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteConfig<V> {
    /// Router path pattern (e.g. `/users/:id`)
    pub path: String,
    /// Route name; the operationId for generated routes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The bound view
    #[serde(rename = "component", skip_serializing_if = "Option::is_none")]
    pub view: Option<V>,
    /// Props extractor
    #[serde(skip)]
    pub props: Option<Props>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_sensitive: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<Redirect>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
}

impl<V> RouteConfig<V> {
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: None,
            view: None,
            props: None,
            case_sensitive: None,
            redirect: None,
            alias: None,
            meta: None,
        }
    }

    /// Merge an override onto this route, field by field.
    ///
    /// `path` is always taken from the override; every other field is taken only
    /// when the override sets it.
    pub fn apply_override(&mut self, route_override: RouteOverride<V>) {
        let RouteOverride {
            path,
            name,
            view,
            props,
            case_sensitive,
            redirect,
            alias,
            meta,
        } = route_override;

        self.path = path;
        if name.is_some() {
            self.name = name;
        }
        if view.is_some() {
            self.view = view;
        }
        if props.is_some() {
            self.props = props;
        }
        if case_sensitive.is_some() {
            self.case_sensitive = case_sensitive;
        }
        if redirect.is_some() {
            self.redirect = redirect;
        }
        if alias.is_some() {
            self.alias = alias;
        }
        if meta.is_some() {
            self.meta = meta;
        }
    }
}

impl<V> From<RouteOverride<V>> for RouteConfig<V> {
    fn from(route_override: RouteOverride<V>) -> Self {
        let mut route = RouteConfig::new(String::new());
        route.apply_override(route_override);
        route
    }
}

/// A caller-supplied route that adjusts or extends the generated set.
///
/// Only `path` is required. Overrides are deserializable so they can be kept in
/// YAML/JSON next to the OpenAPI document; `props` can only be set in code.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteOverride<V> {
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "component", skip_serializing_if = "Option::is_none")]
    pub view: Option<V>,
    #[serde(skip)]
    pub props: Option<Props>,
    /// `None` means case-insensitive path matching
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_sensitive: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<Redirect>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
}

impl<V> RouteOverride<V> {
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: None,
            view: None,
            props: None,
            case_sensitive: None,
            redirect: None,
            alias: None,
            meta: None,
        }
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn view(mut self, view: V) -> Self {
        self.view = Some(view);
        self
    }

    #[must_use]
    pub fn props(mut self, props: Props) -> Self {
        self.props = Some(props);
        self
    }

    #[must_use]
    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = Some(case_sensitive);
        self
    }

    #[must_use]
    pub fn redirect(mut self, redirect: Redirect) -> Self {
        self.redirect = Some(redirect);
        self
    }

    #[must_use]
    pub fn alias(mut self, alias: Vec<String>) -> Self {
        self.alias = Some(alias);
        self
    }

    #[must_use]
    pub fn meta(mut self, meta: Value) -> Self {
        self.meta = Some(meta);
        self
    }

    /// Whether this override targets `path`.
    ///
    /// Exact comparison when the override is case-sensitive; otherwise both sides
    /// are lowercased first.
    #[must_use]
    pub fn matches_path(&self, path: &str) -> bool {
        if self.case_sensitive.unwrap_or(false) {
            self.path == path
        } else {
            self.path.to_lowercase() == path.to_lowercase()
        }
    }

    /// Whether this override carries `name`. Unnamed overrides match nothing.
    #[must_use]
    pub fn matches_name(&self, name: Option<&str>) -> bool {
        matches!((self.name.as_deref(), name), (Some(a), Some(b)) if a == b)
    }
}
