//! Ravenfall Programming Language - CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::fmt::Debug;
use std::path::{Path, PathBuf};

use ravenfall::frontend::{Frontend, FrontendError};
use ravenfall::util::config::{self, OutputFormat, CONFIG_FILE_NAME};
use ravenfall::util::logger::{self, LogLevel};
use ravenfall::util::span::SourceFile;
use ravenfall::{read_source, Token, NAME, VERSION};

/// Front end for a small indentation-sensitive language
#[derive(Parser, Debug)]
#[command(name = "ravenfall")]
#[command(version = VERSION)]
#[command(about = NAME, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (defaults to ./ravenfall.ron if present)
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    /// Output format for dumps
    #[arg(short, long, value_enum, global = true)]
    format: Option<OutputFormat>,

    /// Log level
    #[arg(long, value_enum, global = true)]
    log_level: Option<LogLevel>,

    /// One statement per line; newlines inside parentheses are ignored
    #[arg(short, long, global = true)]
    multiline: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the token stream of a source file
    Tokens {
        /// Source file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Print the syntax tree of a source file
    Ast {
        /// Source file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Parse and type check a source file
    Check {
        /// Source file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Parse code from the command line and print its syntax tree
    Eval {
        /// Code to parse
        #[arg(value_name = "CODE")]
        code: String,
    },

    /// Print the effective configuration
    Config,

    /// Print version information
    Version,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => config::load_config(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => config::load_config_or_default(Path::new(CONFIG_FILE_NAME))?,
    };
    if let Some(format) = args.format {
        config.output = format;
    }
    if let Some(level) = args.log_level {
        config.log_level = level;
    }
    if args.verbose {
        config.log_level = LogLevel::Debug;
    }
    if args.multiline {
        config.parser.multiline = true;
    }
    logger::init_with_level(config.log_level);

    let mut frontend =
        Frontend::with_config(config.lexer.clone()).with_parser_config(config.parser.clone());

    match args.command {
        Commands::Tokens { file } => {
            let source = load(&file)?;
            let tokens = frontend
                .tokenize(&source.content)
                .map_err(|e| report(&source, e))?;
            println!("{}", dump_tokens(&tokens, config.output)?);
        }
        Commands::Ast { file } => {
            let source = load(&file)?;
            let program = frontend
                .parse(&source.content)
                .map_err(|e| report(&source, e))?;
            println!("{}", dump(&program, config.output)?);
        }
        Commands::Check { file } => {
            let source = load(&file)?;
            let program = frontend
                .check(&source.content)
                .map_err(|e| report(&source, e))?;
            eprintln!("Check passed! ({} statements)", program.body.len());
        }
        Commands::Eval { code } => {
            let source = SourceFile::new("<eval>".to_string(), code);
            let program = frontend
                .parse(&source.content)
                .map_err(|e| report(&source, e))?;
            for stmt in &program.body {
                println!("{}", stmt);
            }
        }
        Commands::Config => {
            println!("{}", config::to_ron_string(&config)?);
        }
        Commands::Version => {
            println!("{} {}", NAME, VERSION);
        }
    }

    Ok(())
}

fn load(path: &Path) -> Result<SourceFile> {
    let content = read_source(path)?;
    Ok(SourceFile::new(path.display().to_string(), content))
}

/// Attach the file name and the offending line to a frontend error
fn report(
    source: &SourceFile,
    err: FrontendError,
) -> anyhow::Error {
    match err.line() {
        Some(line) => {
            let text = source.line_text(line).unwrap_or_default();
            anyhow::anyhow!("{}\n  --> {}:{}\n   | {}", err, source.name, line, text)
        }
        None => anyhow::anyhow!("{}\n  --> {}", err, source.name),
    }
}

fn dump_tokens(
    tokens: &[Token],
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Debug => Ok(tokens
            .iter()
            .map(|t| format!("{:>7}  {}", t.span.start.to_string(), t))
            .collect::<Vec<_>>()
            .join("\n")),
        _ => dump(&tokens, format),
    }
}

fn dump<T: Serialize + Debug>(
    value: &T,
    format: OutputFormat,
) -> Result<String> {
    Ok(match format {
        OutputFormat::Debug => format!("{:#?}", value),
        OutputFormat::Json => serde_json::to_string_pretty(value)?,
        OutputFormat::Ron => ron::ser::to_string_pretty(value, ron::ser::PrettyConfig::default())?,
    })
}
