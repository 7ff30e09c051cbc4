use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of INSPECT_VIEWS from src/main.rs
// We need to duplicate this here since build scripts can't access src/ modules
const INSPECT_VIEWS: &[&str] = &["pairs-json", "normalized"];

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("dots")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert logical formulas between bracket and dot notations")
        .arg_required_else_help(true)
        .arg(
            Arg::new("list-notations")
                .long("list-notations")
                .help("List available notations")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a dots.toml configuration file")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("verbatim")
                .long("verbatim")
                .help("Pass bracket strings through without canonicalizing them")
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a formula file between notations")
                .arg(
                    Arg::new("input")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(Arg::new("from").long("from").value_hint(ValueHint::Other))
                .arg(Arg::new("to").long("to").value_hint(ValueHint::Other))
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("compress")
                .about("Rewrite a bracketed formula in Church dot notation")
                .arg(Arg::new("formula").required(true).index(1)),
        )
        .subcommand(
            Command::new("expand")
                .about("Rewrite a Church dot formula with explicit brackets")
                .arg(Arg::new("formula").required(true).index(1)),
        )
        .subcommand(
            Command::new("inspect")
                .about("Show the normalized input and its parenthesis pairs")
                .arg(Arg::new("formula").required(true).index(1))
                .arg(
                    Arg::new("view")
                        .value_parser(clap::builder::PossibleValuesParser::new(INSPECT_VIEWS))
                        .index(2),
                ),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "dots", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "dots", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "dots", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
