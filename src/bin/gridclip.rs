//! gridclip CLI - clipboard HTML codec for spreadsheet grids

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand, ValueEnum};
#[cfg(feature = "cli")]
use gridclip::{
    array_to_table, detect_format,
    import::{detect_dialect, generator_of, import_document, strip_cell_markup},
    import_table_with_diagnostics,
    utils::{load_rows, InputFormat},
    CodecError, CodecResult, CodecWarning, ImportOptions,
};
#[cfg(feature = "cli")]
use log::LevelFilter;
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io::{self, Read, Write};
#[cfg(feature = "cli")]
use std::path::Path;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "gridclip")]
#[command(version)]
#[command(about = "gridclip - clipboard HTML codec for spreadsheet grids", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Convert TSV, CSV or JSON rows into clipboard HTML
    Export {
        /// Input file path (reads from stdin if not provided)
        input: Option<String>,

        /// Output file path (writes to stdout if not provided)
        #[arg(short, long)]
        output: Option<String>,

        /// Input format (guessed from the extension or content by default)
        #[arg(short, long, value_enum, default_value_t = Format::Auto)]
        format: Format,
    },

    /// Convert clipboard HTML into a JSON grid-settings descriptor
    Import {
        /// Input file path (reads from stdin if not provided)
        input: Option<String>,

        /// Output file path (writes to stdout if not provided)
        #[arg(short, long)]
        output: Option<String>,

        /// Force a whitespace dialect instead of detecting it
        #[arg(short, long, value_enum, default_value_t = DialectArg::Auto)]
        dialect: DialectArg,

        /// Pretty print the JSON output
        #[arg(short, long)]
        pretty: bool,

        /// Strict mode: exit with error if any import warnings occur
        #[arg(long)]
        strict: bool,

        /// Quiet mode: suppress warning output to stderr
        #[arg(short, long)]
        quiet: bool,
    },

    /// Describe a clipboard payload, or show version info without input
    Info {
        /// File to inspect
        input: Option<String>,
    },
}

#[cfg(feature = "cli")]
#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Guess from the file extension, then from content
    Auto,
    Tsv,
    Csv,
    Json,
}

#[cfg(feature = "cli")]
#[derive(Clone, Copy, ValueEnum)]
enum DialectArg {
    /// Detect from the generator marker
    Auto,
    Generic,
    Excel,
}

#[cfg(feature = "cli")]
fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(cli.command) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

#[cfg(feature = "cli")]
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .init();
}

#[cfg(feature = "cli")]
fn run(cmd: Commands) -> CodecResult<()> {
    match cmd {
        Commands::Export {
            input,
            output,
            format,
        } => {
            let content = read_input(input.as_deref())?;
            let format = match format {
                Format::Tsv => InputFormat::Tsv,
                Format::Csv => InputFormat::Csv,
                Format::Json => InputFormat::Json,
                Format::Auto => guess_input_format(input.as_deref(), &content)?,
            };

            let rows = load_rows(&content, format)?;
            let html = array_to_table(rows);
            write_output(output.as_deref(), &html)?;
        }

        Commands::Import {
            input,
            output,
            dialect,
            pretty,
            strict,
            quiet,
        } => {
            let content = read_input(input.as_deref())?;
            let options = match dialect {
                DialectArg::Auto => ImportOptions::new(),
                DialectArg::Generic => ImportOptions::generic(),
                DialectArg::Excel => ImportOptions::excel(),
            };

            let imported = import_table_with_diagnostics(&content, &options)
                .ok_or_else(|| CodecError::invalid("no <table> element found"))?;

            if !quiet && !imported.warnings.is_empty() {
                print_warnings_to_stderr(&imported.warnings);
            }

            if strict && !imported.warnings.is_empty() {
                return Err(CodecError::invalid(format!(
                    "{} import warning(s) in strict mode",
                    imported.warnings.len()
                )));
            }

            let json = if pretty {
                serde_json::to_string_pretty(&imported.settings)
            } else {
                serde_json::to_string(&imported.settings)
            }
            .map_err(|err| CodecError::invalid(err.to_string()))?;

            write_output(output.as_deref(), &json)?;
        }

        Commands::Info { input: Some(path) } => {
            let content = read_input(Some(path.as_str()))?;
            print_payload_info(&content);
        }

        Commands::Info { input: None } => {
            println!("gridclip - clipboard HTML codec for spreadsheet grids");
            println!("Version: {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Features:");
            println!("  ✓ Rows (TSV/CSV/JSON) → clipboard HTML");
            println!("  ✓ Clipboard HTML → grid settings (JSON)");
            println!("  ✓ Merged cells, nested headers, row headers, fixed rows");
            println!("  ✓ Excel whitespace dialect");
            println!();
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn read_input(path: Option<&str>) -> CodecResult<String> {
    match path {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

#[cfg(feature = "cli")]
fn write_output(path: Option<&str>, result: &str) -> CodecResult<()> {
    match path {
        Some(path) => {
            let mut file = fs::File::create(path)?;
            writeln!(file, "{}", result)?;
            eprintln!("✓ Output written to: {}", path);
        }
        None => {
            println!("{}", result);
        }
    }
    Ok(())
}

#[cfg(feature = "cli")]
fn guess_input_format(path: Option<&str>, content: &str) -> CodecResult<InputFormat> {
    if let Some(path) = path {
        if Path::new(path).extension().is_some() {
            return InputFormat::from_path(Path::new(path));
        }
    }

    match detect_format(content) {
        "json" => Ok(InputFormat::Json),
        "csv" => Ok(InputFormat::Csv),
        "html" => Err(CodecError::unsupported_with_suggestion(
            "html",
            "Use `gridclip import` for clipboard HTML",
        )),
        _ => Ok(InputFormat::Tsv),
    }
}

#[cfg(feature = "cli")]
fn print_payload_info(content: &str) {
    let format = detect_format(content);
    println!("Format: {}", format);

    if format != "html" {
        return;
    }

    let doc = scraper::Html::parse_fragment(&strip_cell_markup(content));
    let generator = generator_of(&doc);
    let dialect = detect_dialect(&doc);
    println!("Generator: {}", generator.as_deref().unwrap_or("(none)"));
    println!("Dialect: {}", dialect.name());

    if let Some(imported) = import_document(&doc, &ImportOptions::new()) {
        let settings = &imported.settings;
        println!("Rows: {}", settings.row_count());
        println!("Columns: {}", settings.col_count());
        println!(
            "Merged regions: {}",
            settings.merge_cells.as_ref().map_or(0, Vec::len)
        );
        if let Some(levels) = &settings.nested_headers {
            println!("Column headers: {} level(s)", levels.len());
        } else if settings.col_headers.is_some() {
            println!("Column headers: 1 level");
        }
        if let Some(headers) = &settings.row_headers {
            println!("Row headers: {}", headers.len());
        }
        println!("Warnings: {}", imported.warnings.len());
    }
}

/// Print import warnings to stderr
#[cfg(feature = "cli")]
fn print_warnings_to_stderr(warnings: &[CodecWarning]) {
    eprintln!();
    eprintln!("\x1b[33mImport Warnings ({}):\x1b[0m", warnings.len());
    for warning in warnings {
        eprintln!("  {}", warning);
    }
    eprintln!();
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install gridclip --features cli");
    eprintln!("  gridclip <export|import|info> [INPUT_FILE]");
}
