use smallvec::SmallVec;

/// Maximum number of path/query parameters before heap allocation.
/// Most routes carry a handful of parameters (e.g. `/users/:id/posts/:postId?page=2`).
pub const MAX_INLINE_PARAMS: usize = 8;

/// Stack-allocated parameter storage for runtime routes with ≤8 params.
pub type ParamVec = SmallVec<[(String, String); MAX_INLINE_PARAMS]>;

/// The router's view of the location being navigated to.
///
/// Props extractors read parameter values through this trait, so any router
/// location type can be plugged in.
pub trait RuntimeRoute {
    /// Value of a path parameter (e.g. `:id` → `"42"`)
    fn path_param(&self, name: &str) -> Option<&str>;
    /// Value of a query parameter (e.g. `?page=2` → `"2"`)
    fn query_param(&self, name: &str) -> Option<&str>;
}

/// A concrete runtime location: matched path plus its path and query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteLocation {
    /// The concrete path navigated to (e.g. `/users/42`)
    pub path: String,
    /// Path parameters extracted by the router (e.g. `:id` → `{"id": "42"}`)
    pub path_params: ParamVec,
    /// Query string parameters
    pub query_params: ParamVec,
}

impl RouteLocation {
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_path_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.path_params.push((name.into(), value.into()));
        self
    }

    #[must_use]
    pub fn with_query_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_params.push((name.into(), value.into()));
        self
    }

    /// Append every pair of a URL query string (leading `?` optional, percent-decoded).
    #[must_use]
    pub fn with_query_string(mut self, query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        self.query_params.extend(
            url::form_urlencoded::parse(query.as_bytes())
                .map(|(k, v)| (k.into_owned(), v.into_owned())),
        );
        self
    }

    /// Get a path parameter by name
    ///
    /// Uses "last write wins" semantics when the same name was pushed twice.
    #[inline]
    #[must_use]
    pub fn get_path_param(&self, name: &str) -> Option<&str> {
        self.path_params
            .iter()
            .rfind(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Get a query parameter by name
    ///
    /// Uses "last write wins" semantics: for `?tag=a&tag=b` this returns `b`.
    #[inline]
    #[must_use]
    pub fn get_query_param(&self, name: &str) -> Option<&str> {
        self.query_params
            .iter()
            .rfind(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

impl RuntimeRoute for RouteLocation {
    fn path_param(&self, name: &str) -> Option<&str> {
        self.get_path_param(name)
    }

    fn query_param(&self, name: &str) -> Option<&str> {
        self.get_query_param(name)
    }
}
