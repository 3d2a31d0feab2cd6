#![allow(clippy::unwrap_used, clippy::expect_used)]

use oas_view_routes::{translate_to_route, RouteError, RouteLocation, RouteTranslator, TranslatorConfig, ViewRegistry};
use serde_json::json;
use std::sync::Arc;

#[derive(Debug, PartialEq)]
struct View {
    name: &'static str,
}

#[test]
fn test_get_user_example() {
    let views: ViewRegistry<Arc<View>> = [("getUser", Arc::new(View { name: "UserView" }))]
        .into_iter()
        .collect();
    let operation = json!({
        "operationId": "getUser",
        "parameters": [
            { "name": "id", "in": "path", "required": true },
            { "name": "effectiveId", "in": "query" },
            { "name": "Authorization", "in": "header" }
        ]
    });

    let route = translate_to_route(&views, "/users/{id}", &operation).unwrap();
    assert_eq!(route.path, "/users/:id");
    assert_eq!(route.name.as_deref(), Some("getUser"));
    assert_eq!(route.view.as_ref().map(|v| v.name), Some("UserView"));

    let location = RouteLocation::new("/users/1")
        .with_path_param("id", "1")
        .with_query_param("effectiveId", "2")
        .with_query_param("Authorization", "secret");
    let props = route.props.as_ref().unwrap().resolve(&location);
    assert_eq!(props.len(), 2);
    assert_eq!(props["id"], "1");
    assert_eq!(props["effectiveId"], "2");
}

#[test]
fn test_absent_runtime_values_are_omitted() {
    let views: ViewRegistry<&str> = [("getUser", "UserView")].into_iter().collect();
    let operation = json!({
        "operationId": "getUser",
        "parameters": [
            { "name": "id", "in": "path" },
            { "name": "tab", "in": "query" }
        ]
    });
    let route = translate_to_route(&views, "/users/{id}", &operation).unwrap();
    let props = route
        .props
        .as_ref()
        .unwrap()
        .resolve(&RouteLocation::new("/users/1").with_path_param("id", "1"));
    assert_eq!(props.len(), 1);
    assert!(!props.contains_key("tab"));
}

#[test]
fn test_custom_param_prefix() {
    let views: ViewRegistry<&str> = [("getPost", "PostView")].into_iter().collect();
    let config = TranslatorConfig {
        param_prefix: '$',
        ..TranslatorConfig::default()
    };
    let translator = RouteTranslator::with_config(&views, config);
    let route = translator
        .translate("/posts/{slug}/comments/{n}", &json!({ "operationId": "getPost" }))
        .unwrap();
    assert_eq!(route.path, "/posts/$slug/comments/$n");
}

#[test]
fn test_errors_name_the_path() {
    let views: ViewRegistry<&str> = ViewRegistry::new();

    let err = translate_to_route(&views, "/a", &json!({ "operationId": "" })).unwrap_err();
    assert_eq!(err, RouteError::MissingOperationId { path: "/a".into() });

    let err = translate_to_route(&views, "/b", &json!({ "operationId": "b" })).unwrap_err();
    assert_eq!(
        err,
        RouteError::MissingViewBinding {
            operation_id: "b".into(),
            path: "/b".into()
        }
    );
}
