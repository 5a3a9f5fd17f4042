// Command-line interface for bbrelay
//
// This binary moves release descriptions between trackers: it imports rendered HTML into the
// canonical tree and writes it back out in a site's BBCode dialect.
//
// The core capabilities use the bbrelay-babel crate. This crate is only the shell around it:
// argument parsing, configuration, logging, files and exit codes.
//
// Converting:
//
// The conversion needs a to and from pair. The from can be auto-detected from the file extension,
// while being overwrittable by an explicit --from flag. Site names (red, ops, tjupt...) are
// accepted wherever a dialect is.
// Usage:
//  bbrelay <input> --to <format> [--from <format>] [--output <file>]          - Convert (default)
//  bbrelay convert <input> --to <format> [--from <format>] [--output <file>]  - Same as above
//  bbrelay render <record.json> [--to <dialect>]                             - Joined descriptions
//  bbrelay --list-formats                                                    - List formats
//
// Extra Parameters:
//
// Format-specific parameters can be passed using --extra-<parameter-name> <value>.
// The CLI layer strips the "extra-" prefix. Keys that have a configuration counterpart
// (base-url, dialect) are folded into the configuration, the rest go to the source format.
// Example:
//  bbrelay desc.html --to red --extra-base-url https://redacted.test/torrents.php

use bbrelay_babel::registry::SITE_ALIASES;
use bbrelay_babel::{FormatRegistry, Record};
use bbrelay_config::{BbrelayConfig, ConfigError, Loader};
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use std::collections::HashMap;
use std::fs;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const SUBCOMMANDS: &[&str] = &["convert", "render", "help"];

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key_opt = arg
            .strip_prefix("--extra-")
            .or_else(|| arg.strip_prefix("--extras-"));

        if let Some(key) = key_opt {
            let has_value = args.get(i + 1).is_some_and(|next| !next.starts_with('-'));

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn build_cli() -> Command {
    Command::new("bbrelay")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert tracker release descriptions between HTML and BBCode dialects")
        .long_about(
            "bbrelay imports release descriptions as rendered by tracker themes and\n\
            writes them back out in the BBCode dialect of another site.\n\n\
            Commands:\n  \
            - convert: Convert a single description file (default command)\n  \
            - render:  Render the joined descriptions of a release record\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to pass format-specific options.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            bbrelay desc.html --to red                         # Gazelle BBCode to stdout\n  \
            bbrelay desc.html --to tjupt -o desc.bbcode        # NexusPHP BBCode to a file\n  \
            bbrelay desc.html --to tree                        # Canonical tree as JSON\n  \
            bbrelay render record.json --to ops                # Group + item descriptions",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available formats and site aliases")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a bbrelay.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a description between formats (default command)")
                .long_about(
                    "Convert a description between formats.\n\n\
                    Supported formats:\n  \
                    - html:     Rendered tracker HTML (.html, .htm), import only\n  \
                    - gazelle:  Gazelle BBCode (.bbcode), export only\n  \
                    - nexusphp: NexusPHP BBCode, export only\n  \
                    - tree:     Canonical tree as JSON (.json)\n\n\
                    The source format is auto-detected from the file extension.\n\
                    Output goes to stdout by default, or use -o to specify a file.\n\n\
                    Examples:\n  \
                    bbrelay convert desc.html --to gazelle             # BBCode to stdout\n  \
                    bbrelay convert desc.json --to opencd -o out.txt   # Tree to NexusPHP file\n  \
                    bbrelay desc.html --to red                         # 'convert' is optional",
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
                        .help("Source format (auto-detected from file extension if not specified)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format or site name (required)")
                        .required(true)
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
            Command::new("render")
                .about("Render the joined group and item descriptions of a release record")
                .long_about(
                    "Render the descriptions of a release record (JSON) for posting.\n\n\
                    The group and item descriptions are rendered in the target dialect\n\
                    and joined with a horizontal rule. A record whose first description\n\
                    carries both markup and a tree yields two candidates, printed in\n\
                    order and separated by a blank line.\n\n\
                    Examples:\n  \
                    bbrelay render record.json                # Configured dialect\n  \
                    bbrelay render record.json --to tjupt     # NexusPHP dialect",
                )
                .arg(
                    Arg::new("record")
                        .help("Path to the record JSON file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target dialect or site name (defaults to export.dialect)")
                        .value_hint(ValueHint::Other),
                ),
        )
}

/// Inject "convert" when the first argument is not a known subcommand or flag.
fn with_default_subcommand(args: &[String]) -> Option<Vec<String>> {
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

    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => match with_default_subcommand(&cleaned_args) {
            Some(injected) => cli
                .try_get_matches_from(&injected)
                .unwrap_or_else(|e2| e2.exit()),
            None => e.exit(),
        },
    };

    let config = load_cli_config(
        matches.get_one::<String>("config").map(|s| s.as_str()),
        &mut extra_params,
    );
    init_logging(&config);

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    match matches.subcommand() {
        Some(("convert", sub_matches)) => handle_convert_command(sub_matches, &extra_params, &config),
        Some(("render", sub_matches)) => handle_render_command(sub_matches, &config),
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

fn init_logging(config: &BbrelayConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Registry whose HTML importer resolves against the configured base URL.
fn registry_from_config(config: &BbrelayConfig) -> FormatRegistry {
    let html = config.import.html_format().unwrap_or_else(|e| {
        eprintln!(
            "Error: invalid import.base_url '{}': {e}",
            config.import.base_url
        );
        std::process::exit(1);
    });
    let mut registry = FormatRegistry::default();
    registry.register(html);
    registry
}

/// Handle the convert command
fn handle_convert_command(
    matches: &ArgMatches,
    extra_params: &HashMap<String, String>,
    config: &BbrelayConfig,
) {
    let registry = registry_from_config(config);

    let input = matches
        .get_one::<String>("input")
        .expect("input is required");
    let to = matches.get_one::<String>("to").expect("to is required");
    let output = matches.get_one::<String>("output");

    // Auto-detect --from if not provided
    let from = match matches.get_one::<String>("from") {
        Some(f) => f.to_string(),
        None => registry
            .detect_format_from_filename(input)
            .unwrap_or_else(|| {
                eprintln!("Error: Could not detect format from filename '{input}'");
                eprintln!("Please specify --from explicitly");
                std::process::exit(1);
            }),
    };

    // Validate formats exist
    for name in [from.as_str(), to.as_str()] {
        if let Err(e) = registry.get(name) {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }

    let source = fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    });

    let nodes = registry
        .parse_with_options(&source, &from, extra_params)
        .unwrap_or_else(|e| {
            eprintln!("Parse error: {e}");
            std::process::exit(1);
        });
    debug!(from = %from, to = %to, nodes = nodes.len(), "converting");

    let mut result = registry.serialize(&nodes, to).unwrap_or_else(|e| {
        eprintln!("Serialization error: {e}");
        std::process::exit(1);
    });
    if !result.ends_with('\n') {
        result.push('\n');
    }

    match output {
        Some(path) => fs::write(path, result).unwrap_or_else(|e| {
            eprintln!("Error writing file '{path}': {e}");
            std::process::exit(1);
        }),
        None => print!("{result}"),
    }
}

/// Handle the render command
fn handle_render_command(matches: &ArgMatches, config: &BbrelayConfig) {
    let registry = registry_from_config(config);

    let path = matches
        .get_one::<String>("record")
        .expect("record is required");
    let to = matches
        .get_one::<String>("to")
        .cloned()
        .unwrap_or_else(|| config.export.dialect.clone());

    let format = registry.get(&to).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    let source = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{path}': {e}");
        std::process::exit(1);
    });
    let record: Record = serde_json::from_str(&source).unwrap_or_else(|e| {
        eprintln!("Invalid record '{path}': {e}");
        std::process::exit(1);
    });

    let candidates = record.joined_descriptions(format).unwrap_or_else(|e| {
        eprintln!("Serialization error: {e}");
        std::process::exit(1);
    });
    debug!(site = %record.site, to = %to, candidates = candidates.len(), "rendered record");

    println!("{}", candidates.join("\n\n"));
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::default();

    println!("Available formats:\n");
    for name in registry.list_formats() {
        if let Ok(format) = registry.get(&name) {
            let direction = match (format.supports_parsing(), format.supports_serialization()) {
                (true, true) => "in/out",
                (true, false) => "in",
                (false, true) => "out",
                (false, false) => "-",
            };
            println!("  {name:<10} {direction:<7} {}", format.description());
        }
    }

    println!("\nSite aliases:");
    for (site, dialect) in SITE_ALIASES {
        println!("  {site:<10} {dialect}");
    }
}

fn load_cli_config(
    explicit_path: Option<&str>,
    extra_params: &mut HashMap<String, String>,
) -> BbrelayConfig {
    let loader = Loader::new().with_optional_file("bbrelay.toml");
    let loader = match explicit_path {
        Some(path) => loader.with_file(path),
        None => loader,
    };
    let loader = apply_config_overrides(loader, extra_params).unwrap_or_else(|err| {
        eprintln!("Invalid configuration override: {err}");
        std::process::exit(1);
    });

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

/// Moves `--extra-*` keys that have a configuration counterpart into the loader.
fn apply_config_overrides(
    mut loader: Loader,
    extra_params: &mut HashMap<String, String>,
) -> Result<Loader, ConfigError> {
    for (extra, key) in [
        ("base-url", "import.base_url"),
        ("dialect", "export.dialect"),
        ("log", "logging.filter"),
    ] {
        if let Some(value) = extra_params.remove(extra) {
            loader = loader.set_override(key, value)?;
        }
    }
    Ok(loader)
}
