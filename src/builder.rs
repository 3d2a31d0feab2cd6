//! # Route Set Builder
//!
//! Builds the complete route table for a document: one generated route per
//! `GET` operation, in the order the document declares its paths, followed by a
//! merge of caller-supplied overrides.
//!
//! ## Merge rules
//!
//! Overrides are applied one at a time, in input order:
//!
//! 1. A generated route whose path matches the override's path is updated in place.
//!    Matching is case-insensitive unless the override sets `caseSensitive: true`.
//! 2. Otherwise a generated route whose name equals the override's name is updated
//!    in place.
//! 3. Otherwise the override is appended as a new route, unchanged.
//!
//! Generation is all-or-nothing: one operation without an operationId, or without a
//! registered view, fails the whole build.

use crate::error::RouteError;
use crate::route::{RouteConfig, RouteOverride, RouteTranslator, RouterOptions};
use crate::runtime_config::TranslatorConfig;
use crate::spec::{operation_parameters, DocumentFormat, OpenApiDocument};
use crate::views::ViewRegistry;
use anyhow::Context;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info, warn};

/// Outcome of applying one override.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    /// Merged into the generated route at this index, matched by path
    ByPath(usize),
    /// Merged into the generated route at this index, matched by name
    ByName(usize),
    /// Appended as a new route at this index
    Appended(usize),
}

/// Builds a route table from an OpenAPI document and a set of views.
pub struct RouteSetBuilder<'a, V> {
    doc: &'a OpenApiDocument,
    views: &'a ViewRegistry<V>,
    config: TranslatorConfig,
    overrides: Vec<RouteOverride<V>>,
}

impl<'a, V: Clone> RouteSetBuilder<'a, V> {
    #[must_use]
    pub fn new(doc: &'a OpenApiDocument, views: &'a ViewRegistry<V>) -> Self {
        Self {
            doc,
            views,
            config: TranslatorConfig::default(),
            overrides: Vec::new(),
        }
    }

    #[must_use]
    pub fn config(mut self, config: TranslatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Queue overrides to merge after generation. May be called repeatedly.
    #[must_use]
    pub fn overrides(mut self, overrides: impl IntoIterator<Item = RouteOverride<V>>) -> Self {
        self.overrides.extend(overrides);
        self
    }

    /// Generate one route per `GET` operation, without merging.
    ///
    /// # Errors
    ///
    /// Fails on the first operation that has no operationId or no registered view.
    pub fn generate(&self) -> Result<Vec<RouteConfig<V>>, RouteError> {
        let translator = RouteTranslator::with_config(self.views, self.config);
        let mut routes = Vec::new();
        let mut seen = HashSet::new();

        for (path, item) in self.doc.paths() {
            let Some(operation) = item.get("get") else {
                debug!(path, "Skipping path without GET operation");
                continue;
            };

            let params = operation_parameters(self.doc, item, operation);
            let route = translator
                .translate_with(path, operation, params)
                .inspect_err(|err| warn!(path, kind = err.kind(), error = %err, "Route generation failed"))?;

            if let Some(name) = route.name.as_deref() {
                if !seen.insert(name.to_string()) {
                    warn!(path, operation_id = name, "Duplicate operationId across GET operations");
                }
            }
            routes.push(route);
        }

        Ok(routes)
    }

    /// Generate routes and merge the queued overrides.
    pub fn build(self) -> Result<Vec<RouteConfig<V>>, RouteError> {
        let mut routes = self.generate()?;
        let generated = routes.len();
        let outcomes = merge_overrides(&mut routes, self.overrides);
        let appended = outcomes
            .iter()
            .filter(|o| matches!(o, MergeOutcome::Appended(_)))
            .count();

        info!(
            title = self.doc.title().unwrap_or_default(),
            generated,
            merged = outcomes.len() - appended,
            appended,
            total = routes.len(),
            "Route table built"
        );
        Ok(routes)
    }
}

/// Merge overrides into a generated route list, in place.
///
/// Only the routes present when the call starts count as generated; overrides
/// appended during the call are never merge targets.
#[must_use = "the outcomes report where each override landed"]
pub fn merge_overrides<V>(
    routes: &mut Vec<RouteConfig<V>>,
    overrides: impl IntoIterator<Item = RouteOverride<V>>,
) -> Vec<MergeOutcome> {
    let generated = routes.len();
    let mut outcomes = Vec::new();

    for route_override in overrides {
        let by_path = routes[..generated]
            .iter()
            .position(|r| route_override.matches_path(&r.path));

        let outcome = match by_path {
            Some(idx) => MergeOutcome::ByPath(idx),
            None => match routes[..generated]
                .iter()
                .position(|r| route_override.matches_name(r.name.as_deref()))
            {
                Some(idx) => MergeOutcome::ByName(idx),
                None => MergeOutcome::Appended(routes.len()),
            },
        };

        debug!(path = %route_override.path, name = ?route_override.name, ?outcome, "Applying route override");
        match outcome {
            MergeOutcome::ByPath(idx) | MergeOutcome::ByName(idx) => {
                routes[idx].apply_override(route_override);
            }
            MergeOutcome::Appended(_) => routes.push(RouteConfig::from(route_override)),
        }
        outcomes.push(outcome);
    }

    outcomes
}

/// Generate routes for every `GET` operation and merge `overrides` into them.
///
/// # Errors
///
/// [`RouteError::MissingOperationId`] or [`RouteError::MissingViewBinding`] for the
/// first operation that cannot be translated.
pub fn build_routes<V: Clone>(
    doc: &OpenApiDocument,
    views: &ViewRegistry<V>,
    overrides: impl IntoIterator<Item = RouteOverride<V>>,
) -> Result<Vec<RouteConfig<V>>, RouteError> {
    RouteSetBuilder::new(doc, views).overrides(overrides).build()
}

/// Options-object entry point.
///
/// The routes already in `options` are treated as overrides; the returned options
/// carry the merged route table and keep every other option unchanged.
pub fn oas_routes<V: Clone>(
    doc: &OpenApiDocument,
    views: &ViewRegistry<V>,
    options: RouterOptions<RouteOverride<V>>,
) -> Result<RouterOptions<RouteConfig<V>>, RouteError> {
    let (options, overrides) = options.replace_routes(Vec::<RouteConfig<V>>::new());
    let routes = build_routes(doc, views, overrides)?;
    Ok(options.replace_routes(routes).0)
}

#[derive(Deserialize)]
#[serde(untagged, bound = "V: DeserializeOwned")]
enum OverrideFile<V> {
    List(Vec<RouteOverride<V>>),
    Options(RouterOptions<RouteOverride<V>>),
}

/// Load router options from a YAML or JSON file.
///
/// The file holds either a bare list of route overrides or a full options object
/// with a `routes` list.
pub fn load_router_options<V: DeserializeOwned>(
    file_path: impl AsRef<Path>,
) -> anyhow::Result<RouterOptions<RouteOverride<V>>> {
    let file_path = file_path.as_ref();
    let content = std::fs::read_to_string(file_path)
        .with_context(|| format!("Failed to read {}", file_path.display()))?;
    let file: OverrideFile<V> = match DocumentFormat::from_path(file_path) {
        DocumentFormat::Yaml => serde_yaml::from_str(&content)
            .with_context(|| format!("Invalid route overrides in {}", file_path.display()))?,
        DocumentFormat::Json => serde_json::from_str(&content)
            .with_context(|| format!("Invalid route overrides in {}", file_path.display()))?,
    };
    let options = match file {
        OverrideFile::List(routes) => RouterOptions::with_routes(routes),
        OverrideFile::Options(options) => options,
    };
    debug!(overrides = options.routes.len(), file = %file_path.display(), "Loaded route overrides");
    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::Redirect;
    use serde_json::json;

    fn generated(paths: &[(&str, &str)]) -> Vec<RouteConfig<&'static str>> {
        paths
            .iter()
            .map(|(path, name)| {
                let mut r = RouteConfig::new(*path);
                r.name = Some(name.to_string());
                r.view = Some("View");
                r
            })
            .collect()
    }

    #[test]
    fn test_merge_by_path_case_insensitive() {
        let mut routes = generated(&[("/users", "Users"), ("/users/:id", "UserProfile")]);
        let outcomes = merge_overrides(
            &mut routes,
            vec![RouteOverride::new("/Users/:id").case_sensitive(false)],
        );
        assert_eq!(outcomes, vec![MergeOutcome::ByPath(1)]);
        assert_eq!(routes.len(), 2);
        assert_eq!(routes[1].path, "/Users/:id");
        assert_eq!(routes[1].name.as_deref(), Some("UserProfile"));
    }

    #[test]
    fn test_case_sensitive_falls_back_to_name() {
        let mut routes = generated(&[("/users", "Users")]);
        let outcomes = merge_overrides(
            &mut routes,
            vec![RouteOverride::new("/Users").name("Users").case_sensitive(true)],
        );
        assert_eq!(outcomes, vec![MergeOutcome::ByName(0)]);
        assert_eq!(routes[0].path, "/Users");
        assert_eq!(routes[0].case_sensitive, Some(true));
    }

    #[test]
    fn test_case_sensitive_unmatched_is_appended() {
        let mut routes = generated(&[("/users", "listUsers")]);
        let outcomes = merge_overrides(
            &mut routes,
            vec![RouteOverride::new("/Users").name("Users").case_sensitive(true)],
        );
        assert_eq!(outcomes, vec![MergeOutcome::Appended(1)]);
        assert_eq!(routes.len(), 2);
        assert_eq!(routes[0].path, "/users");
        assert_eq!(routes[1].path, "/Users");
        assert_eq!(routes[1].name.as_deref(), Some("Users"));
        assert!(routes[1].view.is_none());
    }

    #[test]
    fn test_appended_routes_are_not_merge_targets() {
        let mut routes = generated(&[]);
        let outcomes = merge_overrides(
            &mut routes,
            vec![
                RouteOverride::new("*").redirect(Redirect::Path("/".into())),
                RouteOverride::new("*").name("catchAll"),
            ],
        );
        assert_eq!(
            outcomes,
            vec![MergeOutcome::Appended(0), MergeOutcome::Appended(1)]
        );
        assert_eq!(routes.len(), 2);
    }

    #[test]
    fn test_oas_routes_keeps_options() {
        let doc = OpenApiDocument::from_value(json!({
            "paths": { "/users": { "get": { "operationId": "Users" } } }
        }));
        let views: ViewRegistry<&str> = [("Users", "UsersView")].into_iter().collect();
        let mut options = RouterOptions::with_routes(vec![RouteOverride::new("/about")]);
        options.base = Some("/app".into());

        let options = oas_routes(&doc, &views, options).unwrap();
        assert_eq!(options.base.as_deref(), Some("/app"));
        let paths: Vec<&str> = options.routes.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(paths, vec!["/users", "/about"]);
    }
}
