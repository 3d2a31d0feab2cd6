use serde::{Deserialize, Serialize};

/// History mode of the SPA router.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouterMode {
    Hash,
    History,
    Abstract,
}

/// Router options object.
///
/// Generic over the route type: callers pass `RouterOptions<RouteOverride<V>>`
/// in and get `RouterOptions<RouteConfig<V>>` back from [`crate::builder::oas_routes`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouterOptions<R> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<RouterMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_active_class: Option<String>,
    #[serde(default = "Vec::new")]
    pub routes: Vec<R>,
}

impl<R> Default for RouterOptions<R> {
    fn default() -> Self {
        Self {
            mode: None,
            base: None,
            link_active_class: None,
            routes: Vec::new(),
        }
    }
}

impl<R> RouterOptions<R> {
    /// Options with only `routes` set.
    #[must_use]
    pub fn with_routes(routes: Vec<R>) -> Self {
        Self {
            routes,
            ..Self::default()
        }
    }

    /// Swap the routes for another set, keeping every other option.
    #[must_use]
    pub fn replace_routes<T>(self, routes: Vec<T>) -> (RouterOptions<T>, Vec<R>) {
        let RouterOptions {
            mode,
            base,
            link_active_class,
            routes: previous,
        } = self;
        (
            RouterOptions {
                mode,
                base,
                link_active_class,
                routes,
            },
            previous,
        )
    }
}
