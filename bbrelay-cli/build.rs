use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the format names and site aliases registered by bbrelay-babel.
// Build scripts can't access the library, so this is duplicated here.
const TARGETS: &[&str] = &[
    "gazelle", "nexusphp", "tree", "ops", "red", "dic", "opencd", "tjupt",
];
const SOURCES: &[&str] = &["html", "tree"];

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let to = || {
        Arg::new("to")
            .long("to")
            .help("Target format or site name")
            .value_parser(clap::builder::PossibleValuesParser::new(TARGETS))
            .value_hint(ValueHint::Other)
    };

    let mut cmd = Command::new("bbrelay")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert tracker release descriptions between HTML and BBCode dialects")
        .arg_required_else_help(true)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available formats and site aliases")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Path to a bbrelay.toml configuration file")
                .value_hint(ValueHint::FilePath),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a description between formats")
                .arg(
                    Arg::new("input")
                        .help("Input file path")
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source format")
                        .value_parser(clap::builder::PossibleValuesParser::new(SOURCES)),
                )
                .arg(to())
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("render")
                .about("Render the joined descriptions of a release record")
                .arg(
                    Arg::new("record")
                        .help("Path to the record JSON file")
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(to()),
        );

    generate_to(Bash, &mut cmd, "bbrelay", &outdir)?;
    generate_to(Zsh, &mut cmd, "bbrelay", &outdir)?;
    generate_to(Fish, &mut cmd, "bbrelay", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
