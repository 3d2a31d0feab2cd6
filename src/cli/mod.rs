//! # CLI Module
//!
//! Command-line access to route generation.
//!
//! ## Commands
//!
//! ### `generate`
//!
//! Build the route table for a document and print it as router options JSON:
//!
//! ```bash
//! oas-view-routes generate --spec openapi.yaml --auto-views
//! oas-view-routes generate --spec openapi.yaml \
//!     --view getUser=UserProfile --view listUsers=Users \
//!     --overrides routes.yaml --out routes.json
//! ```
//!
//! Views are opaque to the generator; on the command line they are plain strings
//! that end up as the `component` of each route.
//!
//! ### `inspect`
//!
//! List the `GET` operations of a document with their router paths:
//!
//! ```bash
//! oas-view-routes inspect --spec openapi.yaml
//! ```

mod commands;


pub use commands::{execute, run_cli, Cli, Commands};
