//! # Translator Configuration Module
//!
//! Environment variable-based configuration for how OpenAPI path templates are
//! rewritten into router paths.
//!
//! ## Environment Variables
//!
//! ### `OASR_PARAM_PREFIX`
//!
//! The single character the target router uses to mark a path parameter.
//!
//! Default: `:` (so `/users/{id}` becomes `/users/:id`)
//!
//! ### `OASR_PLACEHOLDER_REWRITE`
//!
//! Which `{name}` placeholders are rewritten:
//! - `all`: every placeholder in the template (default)
//! - `first`: only the first placeholder; later ones are left in brace syntax
//!
//! ## Usage
//!
//! ```rust
//! use oas_view_routes::runtime_config::TranslatorConfig;
//!
//! let config = TranslatorConfig::from_env();
//! println!("Parameter prefix: {}", config.param_prefix);
//! ```

use std::env;

/// Default router parameter prefix.
pub const DEFAULT_PARAM_PREFIX: char = ':';

/// Which `{name}` placeholders of a path template get rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaceholderRewrite {
    /// Rewrite every placeholder
    #[default]
    All,
    /// Rewrite only the first placeholder
    FirstOnly,
}

impl PlaceholderRewrite {
    /// Parse from a config string, falling back to [`PlaceholderRewrite::All`].
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "first" | "first-only" | "first_only" => PlaceholderRewrite::FirstOnly,
            _ => PlaceholderRewrite::All,
        }
    }
}

/// Translator configuration loaded from environment variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranslatorConfig {
    /// Character that introduces a path parameter in router syntax (default `:`)
    pub param_prefix: char,
    /// Placeholder rewrite mode (default: all)
    pub rewrite: PlaceholderRewrite,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            param_prefix: DEFAULT_PARAM_PREFIX,
            rewrite: PlaceholderRewrite::All,
        }
    }
}

impl TranslatorConfig {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let param_prefix = lookup("OASR_PARAM_PREFIX")
            .and_then(|val| {
                let mut chars = val.trim().chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if !c.is_alphanumeric() && c != '{' && c != '/' => Some(c),
                    _ => None,
                }
            })
            .unwrap_or(DEFAULT_PARAM_PREFIX);
        let rewrite = lookup("OASR_PLACEHOLDER_REWRITE")
            .map(|val| PlaceholderRewrite::parse(&val))
            .unwrap_or_default();
        TranslatorConfig {
            param_prefix,
            rewrite,
        }
    }
}
