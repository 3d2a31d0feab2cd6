#![allow(dead_code)]

pub mod temp_files {
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Temporary file with the given extension; removed when dropped
    pub fn temp_file(content: &str, ext: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new()
            .prefix("oasr_test_")
            .suffix(&format!(".{ext}"))
            .tempfile()
            .unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    pub fn temp_yaml(content: &str) -> NamedTempFile {
        temp_file(content, "yaml")
    }

    pub fn temp_json(content: &str) -> NamedTempFile {
        temp_file(content, "json")
    }
}

pub mod fixtures {
    use oas_view_routes::{parse_document, spec::DocumentFormat, OpenApiDocument, ViewRegistry};

    /// Users API: a list route, a profile route with path/query/header params,
    /// and a path without a GET operation.
    pub const USERS_YAML: &str = r#"openapi: 3.0.0
info:
  title: Users API
  version: "1.0.0"
servers:
  - url: /api/v1
paths:
  /users:
    get:
      operationId: Users
      parameters:
        - name: page
          in: query
          schema: { type: integer }
      responses:
        "200":
          description: OK
  /users/{id}:
    parameters:
      - name: id
        in: path
        required: true
        schema: { type: string }
    get:
      operationId: UserProfile
      parameters:
        - name: effectiveId
          in: query
          schema: { type: string }
        - name: X-Trace
          in: header
          schema: { type: string }
      responses:
        "200":
          description: OK
  /sessions:
    post:
      operationId: createSession
      responses:
        "201":
          description: Created
"#;

    pub fn users_document() -> OpenApiDocument {
        parse_document(USERS_YAML, DocumentFormat::Yaml).unwrap()
    }

    pub fn users_views() -> ViewRegistry<&'static str> {
        [("Users", "UsersView"), ("UserProfile", "UserProfileView")]
            .into_iter()
            .collect()
    }
}
