// Command-line interface for dots
//
// This binary converts logical formulas between fully bracketed notation and Church's
// single-dot notation. The conversions themselves live in the dots-core crate; this
// binary only deals with arguments, files, configuration and error reporting.
//
// Converting:
//
// The conversion needs a from and to pair. The from can be auto-detected from the file
// extension, while being overwrittable by an explicit --from flag. Both fall back to the
// configured defaults (convert.from / convert.to).
// Usage:
//  dots <input> [--to <notation>] [--from <notation>] [--output <file>]  - Convert a file (default)
//  dots convert <input> ...                      - Same as above (explicit)
//  dots compress <formula>                       - Brackets to Church dots, inline
//  dots expand <formula>                         - Church dots to brackets, inline
//  dots inspect <formula> [pairs-json|normalized] - Show what the compressor works on
//  dots --list-notations                         - List available notations
//
// Errors are printed as "Error: <description>" on stderr with exit status 1.

use clap::{Arg, ArgAction, Command, ValueHint};
use dots_config::{DotsConfig, Loader};
use dots_core::church::inspect;
use dots_core::NotationRegistry;
use std::fs;
use tracing_subscriber::EnvFilter;

/// Views offered by the inspect command
const INSPECT_VIEWS: &[&str] = &["pairs-json", "normalized"];

const SUBCOMMANDS: &[&str] = &["convert", "compress", "expand", "inspect", "help"];

fn build_cli() -> Command {
    Command::new("dots")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert logical formulas between bracket and dot notations")
        .long_about(
            "dots converts logical formulas between fully bracketed notation and\n\
            Church's single-dot notation, where a dot stands for an opening\n\
            parenthesis whose scope runs to the end of the enclosing scope.\n\n\
            Commands:\n  \
            - convert:  Convert a formula file between notations (default command)\n  \
            - compress: Brackets to dots for a formula given on the command line\n  \
            - expand:   Dots to brackets for a formula given on the command line\n  \
            - inspect:  Show the normalized input and its parenthesis pairs\n\n\
            Examples:\n  \
            dots compress '(a(bc))'                 # a. bc\n  \
            dots expand 'a. bc'                     # a(bc)\n  \
            dots formula.brk --to church            # Convert a file (outputs to stdout)\n  \
            dots formula.church -o formula.brk --to brackets",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-notations")
                .long("list-notations")
                .help("List available notations")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a dots.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbatim")
                .long("verbatim")
                .help("Pass bracket strings through without canonicalizing them")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a formula file between notations (default command)")
                .long_about(
                    "Convert a formula file between notations.\n\n\
                    Supported notations:\n  \
                    - brackets: Fully bracketed formulas (.brk, .brackets)\n  \
                    - church:   Church's single-dot notation (.church, .dots)\n\n\
                    The source notation is auto-detected from the file extension.\n\
                    Output goes to stdout by default, or use -o to specify a file.\n\n\
                    Examples:\n  \
                    dots convert formula.brk --to church         # Compress (stdout)\n  \
                    dots convert formula.dots --to brackets      # Expand (stdout)\n  \
                    dots formula.brk -o formula.church           # 'convert' is optional",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source notation (auto-detected from file extension if not specified)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target notation (defaults to convert.to from the configuration)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("compress")
                .about("Rewrite a bracketed formula in Church dot notation")
                .arg(
                    Arg::new("formula")
                        .help("Fully bracketed formula")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(
            Command::new("expand")
                .about("Rewrite a Church dot formula with explicit brackets")
                .arg(
                    Arg::new("formula")
                        .help("Formula in Church dot notation")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Show the normalized input and its parenthesis pairs")
                .arg(
                    Arg::new("formula")
                        .help("Fully bracketed formula")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("view")
                        .help("What to show. Defaults to 'pairs-json'")
                        .required(false)
                        .value_parser(clap::builder::PossibleValuesParser::new(INSPECT_VIEWS))
                        .index(2),
                ),
        )
}

/// Inserts the implicit `convert` subcommand when the first argument looks like a file.
fn with_implicit_convert(args: &[String]) -> Option<Vec<String>> {
    let first = args.get(1)?;
    if first.starts_with('-') || SUBCOMMANDS.contains(&first.as_str()) {
        return None;
    }
    let mut injected = vec![args[0].clone(), "convert".to_string()];
    injected.extend_from_slice(&args[1..]);
    Some(injected)
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&args) {
        Ok(m) => m,
        Err(e) => match with_implicit_convert(&args) {
            Some(injected) => match cli.try_get_matches_from(&injected) {
                Ok(m) => m,
                Err(e2) => e2.exit(),
            },
            None => e.exit(),
        },
    };

    let config = load_cli_config(
        matches.get_one::<String>("config").map(|s| s.as_str()),
        matches.get_flag("verbatim"),
    );
    init_tracing(&config.log.level);

    if matches.get_flag("list-notations") {
        handle_list_notations_command(&config);
        return;
    }

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let from = sub_matches.get_one::<String>("from").map(|s| s.as_str());
            let to = sub_matches.get_one::<String>("to").map(|s| s.as_str());
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(input, from, to, output, &config);
        }
        Some(("compress", sub_matches)) => {
            let formula = sub_matches
                .get_one::<String>("formula")
                .expect("formula is required");
            handle_inline_command(formula, "brackets", "church", &config);
        }
        Some(("expand", sub_matches)) => {
            let formula = sub_matches
                .get_one::<String>("formula")
                .expect("formula is required");
            handle_inline_command(formula, "church", "brackets", &config);
        }
        Some(("inspect", sub_matches)) => {
            let formula = sub_matches
                .get_one::<String>("formula")
                .expect("formula is required");
            let view = sub_matches
                .get_one::<String>("view")
                .map(|s| s.as_str())
                .unwrap_or("pairs-json");
            handle_inspect_command(formula, view, &config);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Handle the convert command
fn handle_convert_command(
    input: &str,
    from: Option<&str>,
    to: Option<&str>,
    output: Option<&str>,
    config: &DotsConfig,
) {
    let registry = NotationRegistry::from(&config.convert);
    let from = resolve_source_notation(&registry, input, from, config);
    let to = to.unwrap_or(config.convert.to.as_str());

    let source = fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    });

    let converted = registry
        .convert(source.trim(), &from, to)
        .unwrap_or_else(|e| fail(e));
    tracing::info!(input, from = %from, to, "converted file");

    let text = finish_output(converted, config);
    match output {
        Some(path) => {
            fs::write(path, text).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => print!("{text}"),
    }
}

/// Handle compress and expand, which take the formula as an argument
fn handle_inline_command(formula: &str, from: &str, to: &str, config: &DotsConfig) {
    let registry = NotationRegistry::from(&config.convert);
    let converted = registry
        .convert(formula, from, to)
        .unwrap_or_else(|e| fail(e));
    print!("{}", finish_output(converted, config));
}

/// Handle the inspect command
fn handle_inspect_command(formula: &str, view: &str, config: &DotsConfig) {
    let inspection = inspect(formula).unwrap_or_else(|e| fail(e));

    let text = match view {
        "normalized" => inspection.normalized,
        _ => serde_json::to_string_pretty(&inspection).unwrap_or_else(|e| {
            eprintln!("JSON serialization failed: {e}");
            std::process::exit(1);
        }),
    };
    print!("{}", finish_output(text, config));
}

/// Handle the list-notations command
fn handle_list_notations_command(config: &DotsConfig) {
    let registry = NotationRegistry::from(&config.convert);
    println!("Available notations:\n");
    for name in registry.list_notations() {
        if let Ok(notation) = registry.get(&name) {
            let extensions = notation
                .file_extensions()
                .iter()
                .map(|ext| format!(".{ext}"))
                .collect::<Vec<_>>()
                .join(", ");
            println!("  {name:<10} {} ({extensions})", notation.description());
        }
    }
}

/// The explicit --from, else the notation matching the file extension, else the
/// configured default.
fn resolve_source_notation(
    registry: &NotationRegistry,
    input: &str,
    explicit: Option<&str>,
    config: &DotsConfig,
) -> String {
    if let Some(from) = explicit {
        return from.to_string();
    }
    registry
        .detect_notation_from_filename(input)
        .unwrap_or_else(|| {
            tracing::debug!(input, "no notation for extension, using configured default");
            config.convert.from.clone()
        })
}

fn finish_output(mut text: String, config: &DotsConfig) -> String {
    if config.output.trailing_newline && !text.ends_with('\n') {
        text.push('\n');
    }
    text
}

fn fail(err: impl std::fmt::Display) -> ! {
    eprintln!("Error: {err}");
    std::process::exit(1);
}

fn load_cli_config(explicit_path: Option<&str>, verbatim: bool) -> DotsConfig {
    let loader = Loader::new().with_optional_file("dots.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };
    let loader = if verbatim {
        loader
            .set_override("convert.canonicalize", false)
            .unwrap_or_else(|err| {
                eprintln!("Failed to apply --verbatim: {err}");
                std::process::exit(1);
            })
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
