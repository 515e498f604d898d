//! docx-tables CLI - rebuild and inspect WordprocessingML tables

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use docx_tables::{ConvertOptions, ConvertResult, JsonFormat, TableConverter, TableStats};

#[derive(Parser)]
#[command(name = "docx-tables")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Rebuild table markup and resolve table styles from document.xml", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert document.xml to HTML with reassembled tables
    Html {
        /// Input document.xml file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// styles.xml holding the named table styles
        #[arg(short, long, value_name = "FILE", env = "DOCX_TABLES_STYLES")]
        styles: Option<PathBuf>,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Emit table/tr/td instead of table/table-row/table-cell
        #[arg(long)]
        html_tags: bool,

        /// Write resolved styles into style attributes
        #[arg(long)]
        inline_styles: bool,

        /// Skip the indentation between rows and cells
        #[arg(long)]
        compact: bool,
    },

    /// Export resolved table styles as JSON
    Json {
        /// Input document.xml file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// styles.xml holding the named table styles
        #[arg(short, long, value_name = "FILE", env = "DOCX_TABLES_STYLES")]
        styles: Option<PathBuf>,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show table statistics
    Info {
        /// Input document.xml file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// styles.xml holding the named table styles
        #[arg(short, long, value_name = "FILE", env = "DOCX_TABLES_STYLES")]
        styles: Option<PathBuf>,

        /// Print statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Html {
            input,
            styles,
            output,
            html_tags,
            inline_styles,
            compact,
        }) => {
            let mut options = ConvertOptions::new()
                .with_inline_styles(inline_styles)
                .with_pretty(!compact)
                .with_resolve_styles(inline_styles);
            if html_tags {
                options = options.with_html_tags();
            }
            cmd_html(&input, styles.as_deref(), output.as_deref(), options)
        }
        Some(Commands::Json {
            input,
            styles,
            output,
            compact,
        }) => cmd_json(&input, styles.as_deref(), output.as_deref(), compact),
        Some(Commands::Info {
            input,
            styles,
            json,
        }) => cmd_info(&input, styles.as_deref(), json),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            println!("{}", "Usage: docx-tables <COMMAND> <FILE>".yellow());
            println!("       docx-tables --help for more information");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn convert(
    input: &Path,
    styles: Option<&Path>,
    options: ConvertOptions,
) -> Result<ConvertResult, Box<dyn std::error::Error>> {
    let document = fs::read_to_string(input)?;
    let mut converter = TableConverter::new(options);
    if let Some(path) = styles {
        log::debug!("loading table styles from {}", path.display());
        converter = converter.with_styles(&fs::read_to_string(path)?)?;
    }
    Ok(converter.convert(&document)?)
}

fn write_output(output: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn cmd_html(
    input: &Path,
    styles: Option<&Path>,
    output: Option<&Path>,
    options: ConvertOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = convert(input, styles, options)?;
    write_output(output, &result.html)
}

fn cmd_json(
    input: &Path,
    styles: Option<&Path>,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = convert(input, styles, ConvertOptions::new())?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = docx_tables::render::to_json(&result, format)?;
    write_output(output, &json)
}

fn cmd_info(
    input: &Path,
    styles: Option<&Path>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = convert(input, styles, ConvertOptions::new())?;
    let stats = TableStats::from_result(&result);

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("{}", "Table Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    if let Some(path) = styles {
        println!("{}: {}", "Styles".bold(), path.display());
    }
    println!("{}: {}", "Tables".bold(), stats.table_count);
    println!("{}: {}", "Nested".bold(), stats.nested_count);
    println!("{}: {}", "Styled".bold(), stats.styled_count);
    println!("{}: {}", "Rows".bold(), stats.row_count);
    println!("{}: {}", "Cells".bold(), stats.cell_count);

    if !result.tables.is_empty() {
        println!();
        println!("{}", "Tables".cyan().bold());
        println!("{}", "─".repeat(40).dimmed());
        for (i, table) in result.tables.iter().enumerate() {
            let indent = "  ".repeat(table.depth);
            println!(
                "{}{} {}: {} rows, {} cells, style {}",
                indent,
                "Table".bold(),
                i + 1,
                table.row_count(),
                table.cell_count(),
                table.style_id.as_deref().unwrap_or("-")
            );
        }
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "docx-tables".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("WordprocessingML table style and reassembly tool");
    println!();
    println!("License: MIT");
}
