use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of build_cli() in src/main.rs; build scripts can't access src/ modules.
fn build_cli() -> Command {
    Command::new("nbpress")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Publish the configured Jupyter notebooks as static HTML pages")
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
        .subcommand(Command::new("generate-css").about("Output the CSS embedded in exported pages"))
}

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = build_cli();

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "nbpress", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "nbpress", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "nbpress", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
