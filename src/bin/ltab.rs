//! ltab CLI - Inspect and reformat MyST list-table blocks

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use listab::{
    data::OPEN_FENCE,
    locate::{open_block, write_block, FenceLocator, OpenBlock},
    templates::table_template,
    EditSession, LineEnding, ListTableError, ListTableOptions, ListTableResult,
};
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io::{self, Read};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "ltab")]
#[command(version)]
#[command(about = "ltab - Inspect and reformat MyST list-table blocks", long_about = None)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Commands,

    /// TOML file with [parse] and [serialize] options
    #[arg(long, global = true)]
    config: Option<String>,

    /// Strict mode: fail on any line tolerant parsing would skip
    #[arg(long, global = true)]
    strict: bool,

    /// No blank lines between rows
    #[arg(long, global = true)]
    compact: bool,

    /// Write CRLF line endings
    #[arg(long, global = true)]
    crlf: bool,

    /// Quiet mode: suppress warning output to stderr
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Print a block's rows as JSON records
    Show {
        /// Input file path (reads from stdin if not provided)
        input: Option<String>,

        /// 1-based line inside the block (first block by default)
        #[arg(short, long)]
        line: Option<usize>,
    },

    /// Rewrite a block in normal form
    Format {
        /// Input file path (reads from stdin if not provided)
        input: Option<String>,

        /// 1-based line inside the block (first block by default)
        #[arg(short, long)]
        line: Option<usize>,

        /// Overwrite the input file instead of printing
        #[arg(short, long, requires = "input")]
        in_place: bool,
    },

    /// Print an empty table
    New {
        #[arg(short, long, default_value_t = 2)]
        rows: usize,

        #[arg(short, long, default_value_t = 2)]
        cols: usize,
    },
}

#[cfg(feature = "cli")]
fn main() {
    let cli = Cli::parse();

    // skipped lines are reported below, so parser warnings stay off unless RUST_LOG asks
    let default_level = if cli.quiet { "off" } else { "error" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();

    if let Err(err) = run(cli) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

#[cfg(feature = "cli")]
fn run(cli: Cli) -> ListTableResult<()> {
    let Loaded {
        mut options,
        line_ending_set,
    } = load_options(&cli)?;

    match cli.command {
        Commands::Show { input, line } => {
            let doc = read_input(input.as_deref())?;
            let block = open_at(&doc, line, &options)?;
            report_skipped(&block.session, cli.quiet);

            let json = serde_json::to_string_pretty(&block.session.records())
                .map_err(|err| ListTableError::Io {
                    message: err.to_string(),
                })?;
            println!("{}", json);
        }

        Commands::Format {
            input,
            line,
            in_place,
        } => {
            let mut doc = read_input(input.as_deref())?;
            if !line_ending_set {
                options.serialize.line_ending = LineEnding::detect(&doc);
            }
            let block = open_at(&doc, line, &options)?;
            report_skipped(&block.session, cli.quiet);
            let skipped = block.session.skipped().len();

            write_block(&mut doc, block, &options.serialize)?;

            match (in_place, input) {
                (true, Some(path)) => {
                    fs::write(&path, &doc)?;
                    if skipped == 0 {
                        eprintln!("✓ Formatted: {}", path);
                    } else {
                        eprintln!("⚠ Formatted: {} ({} line(s) dropped)", path, skipped);
                    }
                }
                _ => print!("{}", doc),
            }
        }

        Commands::New { rows, cols } => {
            println!("{}", table_template(rows, cols, &options.serialize));
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
struct Loaded {
    options: ListTableOptions,
    /// `--crlf` or the config file chose the line ending; otherwise
    /// `format` keeps the one the document uses
    line_ending_set: bool,
}

/// Config file first, then command-line flags on top
#[cfg(feature = "cli")]
fn load_options(cli: &Cli) -> ListTableResult<Loaded> {
    let (mut options, mut line_ending_set) = match &cli.config {
        Some(path) => {
            let text = fs::read_to_string(path)?;
            (
                ListTableOptions::from_toml_str(&text)?,
                ListTableOptions::toml_sets_line_ending(&text),
            )
        }
        None => (ListTableOptions::default(), false),
    };
    if cli.strict {
        options.parse.strict = true;
    }
    if cli.compact {
        options.serialize.blank_line_between_rows = false;
    }
    if cli.crlf {
        options.serialize.line_ending = LineEnding::Crlf;
        line_ending_set = true;
    }
    Ok(Loaded {
        options,
        line_ending_set,
    })
}

#[cfg(feature = "cli")]
fn read_input(path: Option<&str>) -> ListTableResult<String> {
    match path {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

/// Open the block around `line`, the first block, or the whole input when
/// it has no opening fence at all
#[cfg(feature = "cli")]
fn open_at(doc: &str, line: Option<usize>, options: &ListTableOptions) -> ListTableResult<OpenBlock> {
    let cursor = match line {
        Some(n) => line_offset(doc, n)
            .ok_or_else(|| ListTableError::not_found(format!("input has no line {}", n)))?,
        None => match first_fence(doc) {
            Some(offset) => offset,
            None => {
                return Ok(OpenBlock {
                    range: 0..doc.len(),
                    session: EditSession::open(doc, &options.parse)?,
                })
            }
        },
    };
    open_block(&FenceLocator, doc, cursor, &options.parse)
}

/// Byte offset of the start of a 1-based line
#[cfg(feature = "cli")]
fn line_offset(doc: &str, line: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let mut offset = 0;
    for (i, text) in doc.split('\n').enumerate() {
        if i + 1 == line {
            return Some(offset);
        }
        offset += text.len() + 1;
    }
    None
}

#[cfg(feature = "cli")]
fn first_fence(doc: &str) -> Option<usize> {
    if doc.starts_with(OPEN_FENCE) {
        return Some(0);
    }
    doc.find(&format!("\n{}", OPEN_FENCE)).map(|i| i + 1)
}

#[cfg(feature = "cli")]
fn report_skipped(session: &EditSession, quiet: bool) {
    if quiet || session.skipped().is_empty() {
        return;
    }
    eprintln!();
    eprintln!("Skipped Lines ({}):", session.skipped().len());
    eprintln!();
    for skipped in session.skipped() {
        eprintln!("  {}", skipped);
    }
    eprintln!();
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install listab --features cli");
    eprintln!("  ltab [OPTIONS] <COMMAND>");
}
