use super::path::rewrite_path;
use super::props::Props;
use super::types::RouteConfig;
use crate::error::RouteError;
use crate::runtime_config::TranslatorConfig;
use crate::spec::{extract_parameters, OperationParameters};
use crate::views::ViewRegistry;
use serde_json::Value;
use tracing::trace;

/// Turns one OpenAPI path + operation into a [`RouteConfig`].
pub struct RouteTranslator<'a, V> {
    views: &'a ViewRegistry<V>,
    config: TranslatorConfig,
}

impl<'a, V: Clone> RouteTranslator<'a, V> {
    #[must_use]
    pub fn new(views: &'a ViewRegistry<V>) -> Self {
        Self::with_config(views, TranslatorConfig::default())
    }

    #[must_use]
    pub fn with_config(views: &'a ViewRegistry<V>, config: TranslatorConfig) -> Self {
        Self { views, config }
    }

    /// Translate an operation using only its own `parameters` list.
    ///
    /// # Errors
    ///
    /// - [`RouteError::MissingOperationId`] when the operation has no `operationId`
    /// - [`RouteError::MissingViewBinding`] when no view is registered for it
    pub fn translate(&self, path: &str, operation: &Value) -> Result<RouteConfig<V>, RouteError> {
        let params = OperationParameters::classify(extract_parameters(
            None,
            operation.get("parameters"),
        ));
        self.translate_with(path, operation, params)
    }

    /// Translate an operation whose parameters were already classified.
    pub fn translate_with(
        &self,
        path: &str,
        operation: &Value,
        params: OperationParameters,
    ) -> Result<RouteConfig<V>, RouteError> {
        let operation_id = operation
            .get("operationId")
            .and_then(Value::as_str)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| RouteError::MissingOperationId {
                path: path.to_string(),
            })?;

        let view = self
            .views
            .get(operation_id)
            .cloned()
            .ok_or_else(|| RouteError::MissingViewBinding {
                operation_id: operation_id.to_string(),
                path: path.to_string(),
            })?;

        let route_path = rewrite_path(path, &self.config);
        trace!(
            operation_id,
            template = path,
            path = %route_path,
            path_params = params.path.len(),
            query_params = params.query.len(),
            "Translated operation"
        );

        let mut route = RouteConfig::new(route_path);
        route.name = Some(operation_id.to_string());
        route.view = Some(view);
        route.props = Some(Props::guard(&params));
        Ok(route)
    }
}

/// Translate one operation with the default configuration.
pub fn translate_to_route<V: Clone>(
    views: &ViewRegistry<V>,
    path: &str,
    operation: &Value,
) -> Result<RouteConfig<V>, RouteError> {
    RouteTranslator::new(views).translate(path, operation)
}
