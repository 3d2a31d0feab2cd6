//! # Route Module
//!
//! Route-configuration types and the translation of a single OpenAPI operation
//! into a route.
//!
//! ## Overview
//!
//! - [`RouteTranslator`] turns a path template and its `GET` operation into a
//!   [`RouteConfig`]: the path is rewritten to router syntax (`/users/{id}` →
//!   `/users/:id`), the operationId becomes the route name and selects the view,
//!   and the declared path/query parameters become a [`Props`] extractor.
//! - [`RouteOverride`] is the caller-supplied counterpart used by the builder's
//!   merge step.
//! - [`RouteLocation`] is a runtime location that props extractors read from.
//!
//! ## Example
//!
//! ```rust
//! use oas_view_routes::route::{translate_to_route, RouteLocation};
//! use oas_view_routes::views::ViewRegistry;
//! use serde_json::json;
//!
//! let views: ViewRegistry<&str> = [("getUser", "UserView")].into_iter().collect();
//! let operation = json!({
//!     "operationId": "getUser",
//!     "parameters": [{ "name": "id", "in": "path" }]
//! });
//! let route = translate_to_route(&views, "/users/{id}", &operation)?;
//! assert_eq!(route.path, "/users/:id");
//!
//! let props = route.props.as_ref().map(|p| p.resolve(&RouteLocation::new("/users/42").with_path_param("id", "42")));
//! assert_eq!(props.and_then(|p| p.get("id").cloned()).as_deref(), Some("42"));
//! # Ok::<(), oas_view_routes::RouteError>(())
//! ```

mod location;
mod options;
mod path;
mod props;
mod translate;
mod types;

pub use location::{ParamVec, RouteLocation, RuntimeRoute, MAX_INLINE_PARAMS};
pub use options::{RouterMode, RouterOptions};
pub use path::{placeholder_names, rewrite_path};
pub use props::{Props, RouteProps};
pub use translate::{translate_to_route, RouteTranslator};
pub use types::{Redirect, RouteConfig, RouteOverride};
