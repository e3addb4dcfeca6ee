use clap::{Parser as ClapParser, Subcommand};
use segql::cli::{self, CheckOptions, CheckResult, CliError};
use std::io::{self, Read};

const ENV_LOG: &str = "SEGQL_LOG";

#[derive(ClapParser)]
#[command(name = "segql")]
#[command(about = "segql - translate media segment filters to and from their SQL form")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a query and print its structured form as JSON
    Parse {
        /// The query text to parse
        query: String,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Generate query text from a JSON query state
    Generate {
        /// JSON input (reads from stdin if not provided)
        #[arg(short, long)]
        input: Option<String>,
    },

    /// Validate a query
    Check {
        /// The query text to validate
        query: String,

        /// Print the canonical form of the query
        #[arg(long)]
        roundtrip: bool,
    },

    /// List known fields with their types and operators
    Fields {
        /// Print the registry as JSON
        #[arg(long)]
        json: bool,
    },

    /// List documentation categories
    Docs,

    /// Show documentation for a specific category
    Doc {
        /// Category name (use 'segql docs' to list categories)
        category: String,
    },
}

fn main() {
    init_logging();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Parse { query, pretty } => cli::query_to_json(&query, pretty).map(|json| {
            println!("{}", json);
        }),
        Commands::Generate { input } => run_generate(input),
        Commands::Check { query, roundtrip } => run_check(query, roundtrip),
        Commands::Fields { json: true } => cli::fields_to_json(true).map(|json| {
            println!("{}", json);
        }),
        Commands::Fields { json: false } => {
            print!("{}", cli::render_fields());
            Ok(())
        }
        Commands::Docs => {
            print!("{}", cli::get_docs_overview());
            Ok(())
        }
        Commands::Doc { category } => cli::get_doc_category(&category).map(|content| {
            print!("{}", content);
        }),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn init_logging() {
    let filter = std::env::var(ENV_LOG)
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "warn".to_string());

    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .with_env_filter(filter)
        .init();
}

fn run_generate(input: Option<String>) -> Result<(), CliError> {
    let input = match input {
        Some(s) => s,
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
        None => return Err(CliError::NoInput),
    };

    println!("{}", cli::json_to_query(&input)?);
    Ok(())
}

fn run_check(query: String, roundtrip: bool) -> Result<(), CliError> {
    let options = CheckOptions { query, roundtrip };

    match cli::execute_check(&options)? {
        CheckResult::SyntaxValid => println!("Syntax is valid"),
        CheckResult::Canonical(text) => println!("{}", text),
    }
    Ok(())
}
