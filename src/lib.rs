//! # oas-view-routes
//!
//! Generates route tables for single-page-application routers from an
//! [OpenAPI 3](https://spec.openapis.org/oas/v3.0.3) document.
//!
//! ## Overview
//!
//! Every `GET` operation becomes one route:
//!
//! - the path template is rewritten to router syntax (`/users/{id}` becomes `/users/:id`)
//! - the `operationId` becomes the route name
//! - the view registered under the `operationId` is bound to the route
//! - a props extractor copies the operation's path and query parameters out of
//!   the current location
//!
//! Caller-supplied overrides are then merged in, by path and then by name;
//! unmatched overrides are appended. Views are opaque: the crate never inspects
//! them beyond storing and returning them.
//!
//! ## Architecture
//!
//! - **[`spec`]** - OpenAPI loading, path order and parameter extraction
//! - **[`route`]** - Route types, path rewriting, props extraction and translation
//! - **[`builder`]** - Route table assembly and override merging
//! - **[`views`]** - View registry keyed by operationId
//! - **[`runtime_config`]** - Translation settings from the environment
//! - **[`telemetry`]** - Logging setup
//! - **[`cli`]** - The `oas-view-routes` command
//!
//! ```mermaid
//! sequenceDiagram
//!     participant Caller
//!     participant Load as spec::load_document
//!     participant Builder as builder::RouteSetBuilder
//!     participant Translator as route::RouteTranslator
//!     participant Merge as builder::merge_overrides
//!
//!     Caller->>Load: load_document("openapi.yaml")
//!     Load-->>Caller: OpenApiDocument
//!     Caller->>Builder: new(&doc, &views).overrides(..).build()
//!     loop each path with a GET operation
//!         Builder->>Translator: translate_with(path, operation, params)
//!         Translator-->>Builder: RouteConfig
//!     end
//!     Builder->>Merge: merge_overrides(&mut routes, overrides)
//!     Builder-->>Caller: Vec<RouteConfig<V>>
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use oas_view_routes::{build_routes, OpenApiDocument, RouteLocation, RouteOverride, ViewRegistry};
//! use serde_json::json;
//!
//! let doc = OpenApiDocument::from_value(json!({
//!     "openapi": "3.0.0",
//!     "paths": {
//!         "/users": { "get": { "operationId": "Users" } },
//!         "/users/{id}": { "get": {
//!             "operationId": "UserProfile",
//!             "parameters": [{ "name": "id", "in": "path", "required": true }]
//!         } }
//!     }
//! }));
//! let views: ViewRegistry<&str> = [("Users", "UsersPage"), ("UserProfile", "ProfilePage")]
//!     .into_iter()
//!     .collect();
//!
//! let routes = build_routes(&doc, &views, vec![RouteOverride::new("*").name("notFound")])?;
//! assert_eq!(routes.len(), 3);
//! assert_eq!(routes[1].path, "/users/:id");
//!
//! let location = RouteLocation::new("/users/7").with_path_param("id", "7");
//! let props = routes[1].props.as_ref().map(|p| p.resolve(&location)).unwrap_or_default();
//! assert_eq!(props.get("id").map(String::as_str), Some("7"));
//! # Ok::<(), oas_view_routes::RouteError>(())
//! ```

pub mod builder;
pub mod cli;
mod error;
pub mod route;
pub mod runtime_config;
pub mod spec;
pub mod telemetry;
pub mod views;

pub use builder::{build_routes, load_router_options, merge_overrides, oas_routes, MergeOutcome, RouteSetBuilder};
pub use error::RouteError;
pub use route::{
    translate_to_route, Props, Redirect, RouteConfig, RouteLocation, RouteOverride, RouteProps,
    RouteTranslator, RouterMode, RouterOptions, RuntimeRoute,
};
pub use runtime_config::{PlaceholderRewrite, TranslatorConfig};
pub use spec::{load_document, parse_document, OpenApiDocument, ParameterLocation, ParameterMeta};
pub use views::{NamedView, ViewRegistry};
