use super::location::RuntimeRoute;
use crate::spec::OperationParameters;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Props handed to a view, keyed by parameter name.
pub type RouteProps = BTreeMap<String, String>;

type PropsFn = dyn Fn(&dyn RuntimeRoute) -> RouteProps + Send + Sync;

/// Turns a runtime route into the props of its view.
///
/// Cheap to clone; generated routes share nothing but the parameter name lists
/// captured at translation time.
#[derive(Clone)]
pub struct Props(Arc<PropsFn>);

impl Props {
    #[must_use]
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&dyn RuntimeRoute) -> RouteProps + Send + Sync + 'static,
    {
        Props(Arc::new(f))
    }

    /// Props limited to the parameters an operation declares.
    ///
    /// Path parameters are read first, then query parameters, so a name declared in
    /// both takes its query value. Parameters missing from the runtime route are
    /// left out, and anything the operation does not declare is never exposed.
    ///
    /// A missing query value never clears a value already read from the path: a
    /// name declared in both lists keeps its path value when the query string
    /// does not carry it.
    #[must_use]
    pub fn guard(params: &OperationParameters) -> Self {
        let path = params.path_names();
        let query = params.query_names();
        Props::from_fn(move |route| {
            let mut result = RouteProps::new();
            for name in &path {
                if let Some(value) = route.path_param(name) {
                    result.insert(name.clone(), value.to_string());
                }
            }
            for name in &query {
                if let Some(value) = route.query_param(name) {
                    result.insert(name.clone(), value.to_string());
                }
            }
            result
        })
    }

    /// The same props for every location.
    #[must_use]
    pub fn fixed(props: RouteProps) -> Self {
        Props::from_fn(move |_| props.clone())
    }

    #[must_use]
    pub fn resolve(&self, route: &dyn RuntimeRoute) -> RouteProps {
        (self.0)(route)
    }
}

impl fmt::Debug for Props {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Props(<fn>)")
    }
}
