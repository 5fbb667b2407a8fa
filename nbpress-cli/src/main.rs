// Command-line interface for nbpress
//
// nbpress republishes a fixed list of Jupyter notebooks as static HTML pages for the
// portfolio site. The conversion itself lives in nbpress-render; this binary only wires
// configuration, logging and the console together.
//
// Usage:
//  nbpress                          - Convert every configured notebook (default)
//  nbpress convert                  - Same as above (explicit)
//  nbpress --list                   - Show the configured notebooks
//  nbpress generate-css             - Print the stylesheet embedded in exported pages
//
// Configuration:
//
// The built-in defaults are layered with nbpress.toml in the working directory when it
// exists, then with the file given by --config. Relative paths in the configuration
// (source_root, output_root, custom_css) resolve against the working directory, not
// against the configuration file. Per-notebook progress is logged to stderr (RUST_LOG adjusts
// the level); the final summary goes to stdout. A skipped notebook does not change the
// exit status: only a configuration that cannot be loaded exits non-zero.

use clap::{Arg, ArgAction, Command, ValueHint};
use nbpress_config::{Loader, PressConfig};
use nbpress_render::{get_default_css, run_batch, FsStorage};
use std::fs;
use std::io::IsTerminal;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const LOCAL_CONFIG: &str = "nbpress.toml";

fn build_cli() -> Command {
    Command::new("nbpress")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Publish the configured Jupyter notebooks as static HTML pages")
        .long_about(
            "nbpress converts a fixed list of Jupyter notebooks into self-contained HTML pages.\n\n\
            Each page is written to <output_root>/<slug>/index.html. Markdown cells that look\n\
            like assignment boilerplate are left out; code, outputs and analysis are kept.\n\n\
            Configuration: the built-in defaults are layered with nbpress.toml from the\n\
            working directory (when present), then with the file given by --config.\n\
            Relative source_root, output_root and custom_css paths resolve against the\n\
            working directory, not against the configuration file.\n\n\
            Examples:\n  \
            nbpress                          # Convert every configured notebook\n  \
            nbpress --config site.toml       # Use an explicit configuration file\n  \
            nbpress --list                   # Show what would be converted\n  \
            nbpress generate-css > nb.css    # Save the page stylesheet",
        )
        .subcommand_required(false)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to an nbpress.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("list")
                .long("list")
                .help("List the configured notebooks instead of converting them")
                .action(ArgAction::SetTrue),
        )
        .subcommand(Command::new("convert").about("Convert every configured notebook (default)"))
        .subcommand(
            Command::new("generate-css")
                .about("Output the CSS embedded in exported pages")
                .long_about(
                    "Outputs the stylesheet embedded in every exported page.\n\n\
                    Use it as a starting point for render.custom_css, which is appended\n\
                    after the built-in rules.",
                ),
        )
}

fn main() {
    init_tracing();

    let matches = build_cli().get_matches();
    let config_path = matches.get_one::<String>("config").map(|s| s.as_str());

    if matches.get_flag("list") {
        handle_list_command(&load_cli_config(config_path));
        return;
    }

    match matches.subcommand() {
        None | Some(("convert", _)) => {
            handle_convert_command(&load_cli_config(config_path));
        }
        Some(("generate-css", _)) => {
            handle_generate_css_command();
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

/// Handle the convert command (the default)
fn handle_convert_command(config: &PressConfig) {
    let settings = config.batch_settings();
    let entries = config.entries();
    let mut options = config.html_options();

    if let Some(css_path) = config.custom_css_path() {
        match fs::read_to_string(css_path) {
            Ok(css) => options = options.with_custom_css(css),
            Err(err) => warn!(
                path = %css_path.display(),
                error = %err,
                "custom CSS unavailable, using the built-in stylesheet only"
            ),
        }
    }

    info!(
        notebooks = entries.len(),
        source_root = %settings.source_root.display(),
        output_root = %settings.output_root.display(),
        "converting notebooks"
    );

    let report = run_batch(&FsStorage, &entries, &settings, &options);

    for converted in &report.converted {
        println!("wrote {}", converted.output.display());
    }
    for skipped in &report.skipped {
        println!("skipped {}: {}", skipped.slug, skipped.error);
    }
    println!("{report}");
}

/// Handle the --list flag
fn handle_list_command(config: &PressConfig) {
    let settings = config.batch_settings();
    println!("Configured notebooks:\n");
    for entry in config.entries() {
        println!(
            "  {:<24} {}  ->  {}",
            entry.slug,
            settings.source_path(&entry).display(),
            settings.output_path(&entry).display()
        );
        println!("  {:<24} {}", "", entry.title);
    }
}

/// Handle the generate-css command
fn handle_generate_css_command() {
    print!("{}", get_default_css());
}

fn load_cli_config(explicit_path: Option<&str>) -> PressConfig {
    let loader = Loader::new().with_optional_file(LOCAL_CONFIG);
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}
