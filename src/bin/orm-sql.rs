//! orm-sql — compile JSON query documents to SQL
//!
//! # Usage
//!
//! ```bash
//! # Compile a query document
//! orm-sql compile query.json
//!
//! # Read from stdin, print JSON
//! echo '{"select": {"table": "users"}}' | orm-sql compile - --format json
//!
//! # Show the statement kind, table and numbered bindings
//! orm-sql explain query.json
//! ```

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use colored::*;
use orm_sql::config::{CliConfig, OutputFormat};
use orm_sql::prelude::*;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "orm-sql")]
#[command(version)]
#[command(about = "Compile query builder documents to parameterized MySQL", long_about = None)]
#[command(after_help = "EXAMPLES:
    orm-sql compile query.json
    echo '{\"delete\": {\"table\": \"t\", \"truncate\": true}}' | orm-sql compile -
    orm-sql explain query.json --format json")]
struct Cli {
    /// Output format (overrides the config file)
    #[arg(short, long, value_enum, global = true)]
    format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (defaults to <config_dir>/orm-sql/config.toml)
    #[arg(long, env = "ORM_SQL_CONFIG", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a query document and print SQL and bindings
    Compile {
        /// JSON query document, `-` for stdin
        file: PathBuf,
    },
    /// Describe a query document and its compiled form
    Explain {
        /// JSON query document, `-` for stdin
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => CliConfig::load_from(path),
        None => CliConfig::load(),
    }
    .context("failed to load configuration")?;

    if let Some(format) = cli.format {
        config.format = format;
    }
    if cli.no_color {
        config.color = false;
    }
    config.verbose |= cli.verbose;

    init_tracing(config.verbose);
    colored::control::set_override(config.color);

    match &cli.command {
        Commands::Compile { file } => {
            let query = read_query(file)?;
            let sql = query.to_sql().context("failed to compile query")?;
            print_compiled(&sql, config.format)
        }
        Commands::Explain { file } => {
            let query = read_query(file)?;
            explain_query(&query, config.format)
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("ORM_SQL_LOG")
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_query(file: &Path) -> Result<Query> {
    let input = if file.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        buf
    } else {
        std::fs::read_to_string(file).with_context(|| format!("failed to read {}", file.display()))?
    };
    tracing::debug!("loaded {} bytes of query document", input.len());
    orm_sql::parse_query(&input).context("invalid query document")
}

fn print_compiled(sql: &Fragment, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(sql)?);
        }
        OutputFormat::Text => {
            println!("{}", sql.expression.white());
            if !sql.bindings.is_empty() {
                println!();
                println!("{}", "Bindings:".cyan());
                print_bindings(&sql.bindings);
            }
        }
    }
    Ok(())
}

fn print_bindings(bindings: &[Value]) {
    for (i, value) in bindings.iter().enumerate() {
        println!("  {} = {}", format!("?{}", i + 1).dimmed(), value.to_string().yellow());
    }
}

fn explain_query(query: &Query, format: OutputFormat) -> Result<()> {
    let sql = query.to_sql().context("failed to compile query")?;

    if format == OutputFormat::Json {
        let report = serde_json::json!({
            "kind": query.kind(),
            "table": query.table(),
            "placeholders": sql.placeholder_count(),
            "sql": sql,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", "Query Explanation".cyan().bold());
    println!();
    println!("  {} {}", "Kind:".dimmed(), query.kind().cyan());
    println!("  {} {}", "Table:".dimmed(), query.table().unwrap_or("-").white());
    println!(
        "  {} {} placeholder(s), {} binding(s)",
        "Params:".dimmed(),
        sql.placeholder_count(),
        sql.bindings.len()
    );
    println!();
    println!("{}", "Generated SQL:".green().bold());
    println!("  {}", sql.expression.white());
    if !sql.bindings.is_empty() {
        println!();
        println!("{}", "Bindings:".cyan());
        print_bindings(&sql.bindings);
    }
    Ok(())
}
