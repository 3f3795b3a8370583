//! jql CLI — typed JQL query builder for Jira
//!
//! Commands: build, and, or, filter (save/list/show/rm), url, completions

mod build;
mod config;

use std::io;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{CommandFactory, Parser, ValueEnum};
use jql_core::search::{browse_url, search_url};
use jql_core::{Field, FilterStore, SavedFilter};
use jql_query::formatter::{format_filters, OutputFormat};
use jql_query::{FinalClause, Where};
use tracing::{debug, info, Level};

use crate::build::{build_clause, parse_order, BuildOp};
use crate::config::Config;

#[derive(Parser)]
#[command(name = "jql")]
#[command(version)]
#[command(about = "Build, compose, and save Jira JQL queries")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a config file (default: ./jql.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Build a single clause: <FIELD> [--not] <OP> [VALUES...]
    #[command(alias = "b")]
    Build {
        /// Field token, e.g. assignee, fixVersion, created
        field: String,
        /// Predicate to apply
        #[arg(value_enum)]
        op: BuildOp,
        /// Values for the predicate
        values: Vec<String>,
        /// Negate the predicate's operator
        #[arg(long)]
        not: bool,
        /// Append an ordering key: FIELD[:asc|desc] (repeatable)
        #[arg(long = "order-by")]
        order_by: Vec<String>,
    },
    /// Join two or more rendered clauses with `and`
    And {
        #[arg(required = true)]
        clauses: Vec<String>,
    },
    /// Join two or more rendered clauses with `or`
    Or {
        #[arg(required = true)]
        clauses: Vec<String>,
    },
    /// Manage saved filters
    #[command(subcommand)]
    Filter(FilterCommand),
    /// Print the Jira search URL for a query or saved filter
    Url {
        /// Rendered JQL
        jql: Option<String>,
        /// Use a saved filter instead of a literal query
        #[arg(long, conflicts_with = "jql")]
        filter: Option<String>,
        /// Jira base URL (default: base_url from config)
        #[arg(long)]
        base: Option<String>,
        /// Link to the issue navigator instead of the REST endpoint
        #[arg(long)]
        browse: bool,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(clap::Subcommand)]
enum FilterCommand {
    /// Save a named query
    Save {
        name: String,
        jql: String,
        #[arg(long)]
        description: Option<String>,
    },
    /// List saved filters
    #[command(alias = "ls")]
    List {
        #[arg(long, value_enum, default_value_t = Format::Plain)]
        format: Format,
    },
    /// Print a saved filter's query
    Show { name: String },
    /// Delete a saved filter
    Rm { name: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Plain,
    Json,
    Table,
    Markdown,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Plain => Self::Plain,
            Format::Json => Self::Json,
            Format::Table => Self::Table,
            Format::Markdown => Self::Markdown,
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load(cli.config.as_deref())?;
    let store = FilterStore::new(&config.filters_dir);
    debug!(root = %store.root().display(), "filter store");

    match cli.command {
        Commands::Build {
            field,
            op,
            values,
            not,
            order_by,
        } => {
            let field: Field = field.parse()?;
            let mut clause = build_clause(field, not, op, &values)?;

            let orders = if order_by.is_empty() {
                config.default_order.iter().cloned().collect()
            } else {
                order_by
            };
            for spec in &orders {
                let (field, direction) = parse_order(spec)?;
                clause = clause.ordered(field, direction)?;
            }
            println!("{clause}");
        }
        Commands::And { clauses } => {
            println!("{}", Where::and(clauses.into_iter().map(FinalClause::literal))?);
        }
        Commands::Or { clauses } => {
            println!("{}", Where::or(clauses.into_iter().map(FinalClause::literal))?);
        }
        Commands::Filter(FilterCommand::Save {
            name,
            jql,
            description,
        }) => {
            let filter = SavedFilter::new(name, jql, description)?;
            let path = store.save(&filter)?;
            info!(path = %path.display(), "filter saved");
            println!("Saved filter '{}'", filter.name);
        }
        Commands::Filter(FilterCommand::List { format }) => {
            let filters = store.list()?;
            let output = format_filters(&filters, format.into());
            if output.ends_with('\n') {
                print!("{output}");
            } else {
                println!("{output}");
            }
        }
        Commands::Filter(FilterCommand::Show { name }) => {
            println!("{}", store.load(&name)?.jql);
        }
        Commands::Filter(FilterCommand::Rm { name }) => {
            store.remove(&name)?;
            println!("Removed filter '{name}'");
        }
        Commands::Url {
            jql,
            filter,
            base,
            browse,
        } => {
            let jql = match (jql, filter) {
                (Some(jql), _) => jql,
                (None, Some(name)) => store.load(&name)?.jql,
                (None, None) => bail!("give a query or --filter NAME"),
            };
            let base = base
                .or(config.base_url)
                .context("no Jira base URL: pass --base or set base_url in jql.toml")?;
            debug!(%base, %jql, browse, "building url");
            let url = if browse {
                browse_url(&base, &jql)
            } else {
                search_url(&base, &jql)
            };
            println!("{url}");
        }
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "jql", &mut io::stdout());
        }
    }

    Ok(())
}
