//! Command-line interface for notation
//! This binary converts an expression and prints the result together with the step-by-step trace.
//!
//! Usage:
//!   notation `<conversion>` [`<expression>`] [--format `<format>`] [--step `<n>`] [--config `<file>`]
//!   notation --list-conversions                                    - List all available conversions
//!
//! Exit status is 1 when the conversion result is an error sentinel and 2 for usage errors.

use clap::{value_parser, Arg, ArgAction, Command};
use notation::notation::processor::{render, render_step, OutputFormat};
use notation::ConversionKind;
use notation_config::{Loader, NotationConfig};

const EXIT_CONVERSION_ERROR: i32 = 1;
const EXIT_USAGE: i32 = 2;

fn main() {
    let matches = Command::new("notation")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert between postfix, prefix and infix notation, one stack operation at a time")
        .arg_required_else_help(true)
        .arg(
            Arg::new("conversion")
                .help("Conversion to run (e.g., 'postfix-to-prefix', 'infix-to-postfix')")
                .required_unless_present("list-conversions")
                .index(1),
        )
        .arg(
            Arg::new("expression")
                .help("Expression to convert (default: the conversion's sample input)")
                .index(2),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format: text, json, yaml or result (default from configuration)"),
        )
        .arg(
            Arg::new("step")
                .long("step")
                .short('s')
                .help("Print only the step at this 0-based index")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("list-conversions")
                .long("list-conversions")
                .help("List available conversions")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    if matches.get_flag("list-conversions") {
        handle_list_conversions_command();
        return;
    }

    let config = load_config(matches.get_one::<String>("config"));
    init_logging(&config);

    let conversion = matches
        .get_one::<String>("conversion")
        .expect("conversion is required unless listing conversions");
    let expression = matches.get_one::<String>("expression").map(String::as_str);
    let format = matches.get_one::<String>("format").map(String::as_str);
    let step = matches.get_one::<usize>("step").copied();
    handle_convert_command(&config, conversion, expression, format, step);
}

fn load_config(path: Option<&String>) -> NotationConfig {
    let loader = match path {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new(),
    };
    loader.build().unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(EXIT_USAGE);
    })
}

/// `RUST_LOG` takes precedence over the configured level.
fn init_logging(config: &NotationConfig) {
    env_logger::Builder::new()
        .filter_level(config.log.level.to_level_filter())
        .parse_env(env_logger::Env::default())
        .init();
}

/// Handle the convert command
fn handle_convert_command(
    config: &NotationConfig,
    conversion: &str,
    expression: Option<&str>,
    format: Option<&str>,
    step: Option<usize>,
) {
    let kind = conversion.parse::<ConversionKind>().unwrap_or_else(|e| {
        eprintln!("{}", e);
        eprintln!("\nAvailable conversions:");
        for kind in ConversionKind::all() {
            eprintln!("  {}", kind.name());
        }
        std::process::exit(EXIT_USAGE);
    });

    let format = match format {
        Some(name) => OutputFormat::from_string(name).unwrap_or_else(|e| {
            eprintln!("{}", e);
            let names: Vec<_> = OutputFormat::available_formats()
                .iter()
                .map(|f| f.name())
                .collect();
            eprintln!("Available formats: {}", names.join(", "));
            std::process::exit(EXIT_USAGE);
        }),
        None => config.output.format,
    };

    let expression = expression.unwrap_or_else(|| kind.default_input());
    log::info!("{} on '{}'", kind, expression);

    let result = kind.convert(expression);
    let options = config.render.options();
    let rendered = match step {
        Some(index) => render_step(&result, index, format, &options),
        None => render(&result, format, &options),
    }
    .unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(EXIT_USAGE);
    });

    if rendered.ends_with('\n') {
        print!("{}", rendered);
    } else {
        println!("{}", rendered);
    }

    if let Some(error) = result.error() {
        log::warn!("{} produced {:?}", kind, error);
        std::process::exit(EXIT_CONVERSION_ERROR);
    }
}

/// Handle the list-conversions command
fn handle_list_conversions_command() {
    println!("Available conversions:\n");

    for kind in ConversionKind::all() {
        println!("  {}", kind.name());
        println!("    {} (e.g. {})", kind.label(), kind.default_input());
        println!();
    }
}
