//! `proper`: resolve shorthand style props from the command line.
//!
//! ```text
//! proper p=4 'color=red|:hover=blue'
//! echo '{"p": "4", "nthChild": ["2n", "bg=gray100"]}' | proper --compact
//! proper --config styles.yaml --input props.json --strict
//! ```
//!
//! Props are read from `key=value` arguments, or from a JSON object given with
//! `--input` (`-` for stdin). With neither, stdin is read. The resolved object
//! is printed as JSON; diagnostics go to stderr. Set `PROPER_LOG` to control
//! log output (for example `PROPER_LOG=proper_style=debug`).

use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use console::style;
use proper_style::{Props, Resolver, StyleConfig};
use tracing_subscriber::EnvFilter;

fn command() -> Command {
    Command::new("proper")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Compile shorthand style props into a declaration object")
        .arg(
            Arg::new("props")
                .action(ArgAction::Append)
                .value_name("NAME=VALUE")
                .help("Props to resolve, e.g. p=4 or 'color=red|:hover=blue'"),
        )
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .value_name("FILE")
                .conflicts_with("props")
                .help("JSON object of props; '-' reads stdin"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("YAML file extending the built-in aliases and media queries"),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .action(ArgAction::SetTrue)
                .help("Report skipped selectors and fail on any diagnostic"),
        )
        .arg(
            Arg::new("compact")
                .long("compact")
                .action(ArgAction::SetTrue)
                .help("Print single-line JSON"),
        )
        .arg(
            Arg::new("list")
                .long("list")
                .value_name("TABLE")
                .value_parser(["aliases", "media", "selectors"])
                .conflicts_with_all(["props", "input"])
                .help("Print the names in a configuration table and exit"),
        )
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("PROPER_LOG").unwrap_or_else(|_| EnvFilter::new("error"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(matches: &ArgMatches) -> Result<StyleConfig> {
    match matches.get_one::<String>("config") {
        Some(path) => StyleConfig::from_yaml_file(path)
            .with_context(|| format!("loading configuration from {}", path)),
        None => Ok(StyleConfig::builtin()),
    }
}

fn read_json(source: &str) -> Result<Props> {
    let text = if source == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading props from stdin")?;
        buf
    } else {
        std::fs::read_to_string(Path::new(source))
            .with_context(|| format!("reading props from {}", source))?
    };
    serde_json::from_str(&text).context("props must be a JSON object")
}

fn parse_pairs<'a>(args: impl Iterator<Item = &'a String>) -> Result<Props> {
    let mut props = Props::new();
    for arg in args {
        let Some((name, value)) = arg.split_once('=') else {
            bail!("expected NAME=VALUE, got '{}'", arg);
        };
        props.insert(name, value);
    }
    Ok(props)
}

fn load_props(matches: &ArgMatches) -> Result<Props> {
    if let Some(args) = matches.get_many::<String>("props") {
        return parse_pairs(args);
    }
    let source = matches.get_one::<String>("input").map(String::as_str).unwrap_or("-");
    read_json(source)
}

fn list(config: &StyleConfig, table: &str) {
    let names: Vec<&str> = match table {
        "aliases" => config.aliases().names().collect(),
        "media" => config.media_queries().aliases().collect(),
        _ => config.scoped_selectors().names().collect(),
    };
    for name in names {
        println!("{}", name);
    }
}

fn run() -> Result<()> {
    let matches = command().get_matches();
    let config = load_config(&matches)?;

    if let Some(table) = matches.get_one::<String>("list") {
        list(&config, table);
        return Ok(());
    }

    let props = load_props(&matches)?;
    let strict = matches.get_flag("strict");
    let resolution = Resolver::new(&config).strict(strict).resolve(&props);

    for diagnostic in &resolution.diagnostics {
        eprintln!("{} {}", style("warning:").yellow().bold(), diagnostic);
    }

    let out = if matches.get_flag("compact") {
        resolution.declarations.to_json_compact()
    } else {
        resolution.declarations.to_json()
    };
    println!("{}", out);

    if strict && !resolution.is_clean() {
        bail!("{} diagnostic(s) in strict mode", resolution.diagnostics.len());
    }
    Ok(())
}

fn main() {
    init_logging();
    if let Err(err) = run() {
        eprintln!("{} {:#}", style("error:").red().bold(), err);
        std::process::exit(1);
    }
}
