use crate::builder::{load_router_options, RouteSetBuilder};
use crate::route::{placeholder_names, rewrite_path, RouteConfig, RouterOptions};
use crate::runtime_config::{PlaceholderRewrite, TranslatorConfig};
use crate::spec::{load_document, operation_parameters, OpenApiDocument, ParameterMeta};
use crate::views::ViewRegistry;
use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use serde_json::Value;
use std::io::Write;
use std::path::PathBuf;
use tracing::{info, warn};

/// Command-line interface for oas-view-routes
#[derive(Parser, Debug)]
#[command(name = "oas-view-routes")]
#[command(about = "Generate SPA route tables from OpenAPI GET operations", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the route table as JSON router options
    Generate {
        /// Path to the OpenAPI specification file (YAML or JSON)
        #[arg(short, long)]
        spec: PathBuf,

        /// Route overrides: a list of routes, or router options with a `routes` list
        #[arg(long)]
        overrides: Option<PathBuf>,

        /// Bind a view to an operation, as `operationId=View` (repeatable)
        #[arg(long = "view", value_name = "OPERATION_ID=VIEW")]
        views: Vec<String>,

        /// Bind every GET operation to a view named after its operationId
        #[arg(long, default_value_t = false)]
        auto_views: bool,

        /// Only rewrite the first `{param}` placeholder of each path
        #[arg(long, default_value_t = false)]
        first_placeholder_only: bool,

        /// Router parameter prefix (overrides OASR_PARAM_PREFIX)
        #[arg(long)]
        param_prefix: Option<char>,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// List GET operations with their router paths and parameters
    Inspect {
        /// Path to the OpenAPI specification file (YAML or JSON)
        #[arg(short, long)]
        spec: PathBuf,
    },
}

/// Parse `operationId=View` pairs into a registry.
fn parse_view_pairs(pairs: &[String], registry: &mut ViewRegistry<String>) -> anyhow::Result<()> {
    for pair in pairs {
        let (operation_id, view) = pair
            .split_once('=')
            .filter(|(k, v)| !k.is_empty() && !v.is_empty())
            .ok_or_else(|| anyhow!("Invalid view binding '{pair}', expected operationId=View"))?;
        registry.insert(operation_id, view.to_string());
    }
    Ok(())
}

fn auto_views(doc: &OpenApiDocument, registry: &mut ViewRegistry<String>) {
    for op in doc.get_operations() {
        if let Some(id) = op.operation.get("operationId").and_then(Value::as_str) {
            registry.insert(id, id.to_string());
        }
    }
}

/// Parameter names for `inspect`; required ones carry a trailing `*`.
fn describe_params(params: &[ParameterMeta]) -> String {
    params
        .iter()
        .map(|p| if p.required { format!("{}*", p.name) } else { p.name.clone() })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Execute a parsed command, writing its output to `out` (unless `--out` is given).
///
/// # Errors
///
/// Returns an error if:
/// - The OpenAPI spec or the overrides file cannot be loaded or parsed
/// - A view binding argument is malformed
/// - Route generation fails (missing operationId or view)
pub fn execute(cli: &Cli, out: &mut dyn Write) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Generate {
            spec,
            overrides,
            views,
            auto_views: auto,
            first_placeholder_only,
            param_prefix,
            out: out_file,
        } => {
            let mut config = TranslatorConfig::from_env();
            if *first_placeholder_only {
                config.rewrite = PlaceholderRewrite::FirstOnly;
            }
            if let Some(prefix) = param_prefix {
                config.param_prefix = *prefix;
            }

            let doc = load_document(spec)?;
            let mut registry = ViewRegistry::new();
            if *auto {
                auto_views(&doc, &mut registry);
            }
            parse_view_pairs(views, &mut registry)?;

            let options: RouterOptions<_> = match overrides {
                Some(path) => load_router_options::<String>(path)?,
                None => RouterOptions::default(),
            };
            let (mut options, overrides) = options.replace_routes(Vec::<RouteConfig<String>>::new());
            if options.base.is_none() {
                let base = doc.base_path();
                if !base.is_empty() {
                    options.base = Some(base);
                }
            }

            let routes = RouteSetBuilder::new(&doc, &registry)
                .config(config)
                .overrides(overrides)
                .build()?;
            let (options, _) = options.replace_routes(routes);
            let json = serde_json::to_string_pretty(&options)?;

            match out_file {
                Some(path) => {
                    std::fs::write(path, json + "\n")
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    info!(out = %path.display(), routes = options.routes.len(), "Wrote route table");
                }
                None => writeln!(out, "{json}")?,
            }
            Ok(())
        }
        Commands::Inspect { spec } => {
            let doc = load_document(spec)?;
            let config = TranslatorConfig::from_env();
            for op in doc.get_operations() {
                let params = operation_parameters(&doc, op.item, op.operation);
                let operation_id = op
                    .operation
                    .get("operationId")
                    .and_then(Value::as_str)
                    .unwrap_or("<missing operationId>");
                let undeclared: Vec<String> = placeholder_names(op.path)
                    .into_iter()
                    .filter(|name| !params.path.iter().any(|p| &p.name == name))
                    .collect();
                write!(
                    out,
                    "GET {} -> {} [{}] path: [{}] query: [{}]",
                    op.path,
                    rewrite_path(op.path, &config),
                    operation_id,
                    describe_params(&params.path),
                    describe_params(&params.query),
                )?;
                if !undeclared.is_empty() {
                    warn!(path = op.path, ?undeclared, "Path placeholders without an `in: path` parameter");
                    write!(out, " undeclared: [{}]", undeclared.join(", "))?;
                }
                writeln!(out)?;
            }
            Ok(())
        }
    }
}

/// Parse the process arguments and execute the command against stdout
pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    execute(&cli, &mut lock)
}
