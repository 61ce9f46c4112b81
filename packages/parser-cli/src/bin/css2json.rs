/**
 * css2json - parse CSS files into JSON rule trees
 */
use clap::{Arg, ArgAction, Command};
use css_object_parser_cli::config::ProjectConfig;
use css_object_parser_cli::logging;
use css_object_parser_cli::perform_parse::{perform_parse, ParseOptions};
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    let matches = Command::new("css2json")
        .version(css_object_parser_cli::version())
        .about("Parse CSS into a JSON tree of rule objects")
        .arg(
            Arg::new("inputs")
                .value_name("FILE")
                .num_args(0..)
                .help("CSS files or glob patterns; reads stdin when omitted"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("PATH")
                .help("Path to css2json.json"),
        )
        .arg(
            Arg::new("out-dir")
                .short('o')
                .long("out-dir")
                .value_name("DIR")
                .help("Write one <name>.json per input instead of printing"),
        )
        .arg(
            Arg::new("pretty")
                .long("pretty")
                .action(ArgAction::SetTrue)
                .help("Pretty-print the JSON"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Log debug output to stderr"),
        )
        .get_matches();

    logging::init(matches.get_flag("verbose"));

    let explicit = matches.get_one::<String>("config").map(PathBuf::from);
    let mut config = match ProjectConfig::discover(explicit.as_deref(), Path::new(".")) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    };
    if matches.get_flag("pretty") {
        config.pretty = true;
    }
    if let Some(dir) = matches.get_one::<String>("out-dir") {
        config.out_dir = Some(PathBuf::from(dir));
    }

    let options = ParseOptions {
        inputs: matches
            .get_many::<String>("inputs")
            .map(|values| values.cloned().collect())
            .unwrap_or_default(),
        config,
    };

    match perform_parse(&options) {
        Ok(Some(json)) => println!("{}", json),
        Ok(None) => {}
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    }
}
