use crate::runtime_config::{PlaceholderRewrite, TranslatorConfig};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// An OpenAPI path placeholder: `{name}` within a single segment.
static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{([^{}/]+)\}").expect("placeholder regex should be valid")
});

/// Rewrite OpenAPI `{name}` placeholders into router parameter syntax.
///
/// ```rust
/// use oas_view_routes::route::rewrite_path;
/// use oas_view_routes::runtime_config::TranslatorConfig;
///
/// let path = rewrite_path("/users/{userId}/posts/{postId}", &TranslatorConfig::default());
/// assert_eq!(path, "/users/:userId/posts/:postId");
/// ```
#[must_use]
pub fn rewrite_path(template: &str, config: &TranslatorConfig) -> String {
    let limit = match config.rewrite {
        PlaceholderRewrite::All => 0,
        PlaceholderRewrite::FirstOnly => 1,
    };
    PLACEHOLDER
        .replacen(template, limit, |caps: &Captures| {
            format!("{}{}", config.param_prefix, &caps[1])
        })
        .into_owned()
}

/// Names of the placeholders in a path template, in order.
#[must_use]
pub fn placeholder_names(template: &str) -> Vec<String> {
    PLACEHOLDER
        .captures_iter(template)
        .map(|caps| caps[1].to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_path() {
        assert_eq!(rewrite_path("/", &TranslatorConfig::default()), "/");
        assert!(placeholder_names("/").is_empty());
    }

    #[test]
    fn test_single_placeholder() {
        assert_eq!(rewrite_path("/users/{id}", &TranslatorConfig::default()), "/users/:id");
        assert_eq!(placeholder_names("/users/{id}"), vec!["id"]);
    }

    #[test]
    fn test_first_only_leaves_later_placeholders() {
        let config = TranslatorConfig {
            rewrite: PlaceholderRewrite::FirstOnly,
            ..TranslatorConfig::default()
        };
        assert_eq!(rewrite_path("/a/{b}/c/{d}", &config), "/a/:b/c/{d}");
    }

    #[test]
    fn test_custom_prefix_and_partial_segment() {
        let config = TranslatorConfig {
            param_prefix: '$',
            ..TranslatorConfig::default()
        };
        assert_eq!(rewrite_path("/files/{name}.json", &config), "/files/$name.json");
    }

    #[test]
    fn test_unbalanced_braces_untouched() {
        assert_eq!(rewrite_path("/a/{b", &TranslatorConfig::default()), "/a/{b");
    }
}
