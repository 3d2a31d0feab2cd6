use std::fmt;

/// Route generation error
///
/// Returned by [`crate::route::RouteTranslator`] and [`crate::builder::build_routes`]
/// when a `GET` operation cannot be turned into a route. Generation is all-or-nothing:
/// the first error aborts the whole build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// The operation object has no `operationId`
    ///
    /// The operationId is the route name and the key used to look up the view,
    /// so an operation without one cannot be routed.
    MissingOperationId {
        /// Path template the operation was declared under
        path: String,
    },
    /// No view is registered under the operation's `operationId`
    MissingViewBinding {
        /// The operationId that had no view
        operation_id: String,
        /// Path template the operation was declared under
        path: String,
    },
}

impl RouteError {
    /// Short machine-readable kind, used as a structured log field.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            RouteError::MissingOperationId { .. } => "MissingOperationId",
            RouteError::MissingViewBinding { .. } => "MissingViewBinding",
        }
    }
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteError::MissingOperationId { path } => {
                write!(
                    f,
                    "Operation object at '{}' must contain an operationId",
                    path
                )
            }
            RouteError::MissingViewBinding { operation_id, path } => {
                write!(
                    f,
                    "No view registered for operationId '{}' (path '{}')",
                    operation_id, path
                )
            }
        }
    }
}

impl std::error::Error for RouteError {}
