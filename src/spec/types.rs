use std::fmt;

/// Where an OpenAPI parameter is carried (`in` field).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterLocation {
    Path,
    Query,
    Header,
    Cookie,
}

impl ParameterLocation {
    /// Parse the raw `in` value of a parameter object.
    ///
    /// Returns `None` for anything OpenAPI 3 does not define (e.g. Swagger 2's `body`).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "path" => Some(ParameterLocation::Path),
            "query" => Some(ParameterLocation::Query),
            "header" => Some(ParameterLocation::Header),
            "cookie" => Some(ParameterLocation::Cookie),
            _ => None,
        }
    }
}

impl fmt::Display for ParameterLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterLocation::Path => write!(f, "Path"),
            ParameterLocation::Query => write!(f, "Query"),
            ParameterLocation::Header => write!(f, "Header"),
            ParameterLocation::Cookie => write!(f, "Cookie"),
        }
    }
}

impl From<oas3::spec::ParameterIn> for ParameterLocation {
    fn from(loc: oas3::spec::ParameterIn) -> Self {
        match loc {
            oas3::spec::ParameterIn::Path => ParameterLocation::Path,
            oas3::spec::ParameterIn::Query => ParameterLocation::Query,
            oas3::spec::ParameterIn::Header => ParameterLocation::Header,
            oas3::spec::ParameterIn::Cookie => ParameterLocation::Cookie,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterMeta {
    pub name: String,
    pub location: ParameterLocation,
    pub required: bool,
}

/// Parameters of one operation split by the two locations a router can see.
///
/// Header and cookie parameters never reach a client-side route, so they are
/// dropped during classification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperationParameters {
    pub path: Vec<ParameterMeta>,
    pub query: Vec<ParameterMeta>,
}

impl OperationParameters {
    /// Split parameters into path and query lists, preserving their order.
    #[must_use]
    pub fn classify(params: impl IntoIterator<Item = ParameterMeta>) -> Self {
        let mut out = OperationParameters::default();
        for param in params {
            match param.location {
                ParameterLocation::Path => out.path.push(param),
                ParameterLocation::Query => out.query.push(param),
                ParameterLocation::Header | ParameterLocation::Cookie => {}
            }
        }
        out
    }

    #[must_use]
    pub fn path_names(&self) -> Vec<String> {
        self.path.iter().map(|p| p.name.clone()).collect()
    }

    #[must_use]
    pub fn query_names(&self) -> Vec<String> {
        self.query.iter().map(|p| p.name.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn param(name: &str, location: ParameterLocation) -> ParameterMeta {
        ParameterMeta {
            name: name.into(),
            location,
            required: false,
        }
    }

    #[test]
    fn test_classify_drops_header_and_cookie() {
        let params = OperationParameters::classify(vec![
            param("id", ParameterLocation::Path),
            param("X-Trace", ParameterLocation::Header),
            param("page", ParameterLocation::Query),
            param("session", ParameterLocation::Cookie),
        ]);
        assert_eq!(params.path_names(), vec!["id"]);
        assert_eq!(params.query_names(), vec!["page"]);
    }

    #[test]
    fn test_from_typed_location() {
        assert_eq!(
            ParameterLocation::from(oas3::spec::ParameterIn::Header),
            ParameterLocation::Header
        );
        assert_eq!(ParameterLocation::Cookie.to_string(), "Cookie");
    }

    #[test]
    fn test_parse_rejects_swagger_body() {
        assert_eq!(ParameterLocation::parse("body"), None);
        assert_eq!(ParameterLocation::parse("query"), Some(ParameterLocation::Query));
    }
}
