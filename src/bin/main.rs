//! nomen CLI - Inflect words and derive collection names
//!
//! Usage:
//!   nomen pluralize <words>... [--unknown-number]
//!   nomen singularize <words>... [--unknown-number]
//!   nomen case <style> <words>...
//!   nomen collection <type names>... [--style <style>]
//!
//! Examples:
//!   nomen pluralize person child box
//!   nomen singularize data --unknown-number
//!   nomen case underscore HTMLParser
//!   nomen --config nomen.toml collection UserAccount --style snake

use clap::{Parser, Subcommand, ValueEnum};
use nomen::casing;
use nomen::config::Settings;
use nomen::naming::CaseStyle;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;

#[derive(Parser)]
#[command(name = "nomen")]
#[command(about = "nomen - English noun inflection and collection naming")]
#[command(version)]
struct Cli {
    /// Path to a nomen.toml config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert singular words to plural
    Pluralize {
        /// Words to pluralize
        #[arg(required = true)]
        words: Vec<String>,

        /// Don't assume the input is singular
        #[arg(short, long)]
        unknown_number: bool,
    },

    /// Convert plural words to singular
    Singularize {
        /// Words to singularize
        #[arg(required = true)]
        words: Vec<String>,

        /// Don't assume the input is plural
        #[arg(short, long)]
        unknown_number: bool,
    },

    /// Change the casing of identifiers
    Case {
        /// Conversion to apply
        style: CaseArg,

        /// Identifiers to convert
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Derive collection names from type names
    Collection {
        /// Type names
        #[arg(required = true)]
        type_names: Vec<String>,

        /// Case style (overrides the config file)
        #[arg(short, long)]
        style: Option<StyleArg>,
    },
}

#[derive(Clone, ValueEnum)]
enum CaseArg {
    Pascal,
    Camel,
    Underscore,
    Dasherize,
}

#[derive(Clone, ValueEnum)]
enum StyleArg {
    Preserve,
    Pascal,
    Camel,
    Snake,
    Kebab,
}

impl From<StyleArg> for CaseStyle {
    fn from(arg: StyleArg) -> Self {
        match arg {
            StyleArg::Preserve => CaseStyle::Preserve,
            StyleArg::Pascal => CaseStyle::Pascal,
            StyleArg::Camel => CaseStyle::Camel,
            StyleArg::Snake => CaseStyle::Snake,
            StyleArg::Kebab => CaseStyle::Kebab,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let settings = match load_settings(cli.config.as_ref()) {
        Ok(s) => s,
        Err(code) => return code,
    };

    match cli.command {
        Commands::Pluralize {
            words,
            unknown_number,
        } => cmd_inflect(&settings, &words, |vocab, word| {
            vocab.pluralize_with(word, !unknown_number)
        }),
        Commands::Singularize {
            words,
            unknown_number,
        } => cmd_inflect(&settings, &words, |vocab, word| {
            vocab.singularize_with(word, !unknown_number)
        }),
        Commands::Case { style, words } => cmd_case(style, &words),
        Commands::Collection { type_names, style } => cmd_collection(settings, &type_names, style),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_settings(path: Option<&PathBuf>) -> Result<Settings, ExitCode> {
    let result = match path {
        Some(path) => Settings::from_file(path),
        None => Settings::load(),
    };

    result.map_err(|e| {
        eprintln!("Error loading config: {}", e);
        ExitCode::FAILURE
    })
}

fn cmd_inflect<F>(settings: &Settings, words: &[String], inflect: F) -> ExitCode
where
    F: Fn(&nomen::Vocabulary, &str) -> String,
{
    let vocab = match settings.vocabulary() {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Error building vocabulary: {}", e);
            return ExitCode::FAILURE;
        }
    };

    for word in words {
        println!("{}", inflect(&*vocab, word.as_str()));
    }
    ExitCode::SUCCESS
}

fn cmd_case(style: CaseArg, words: &[String]) -> ExitCode {
    for word in words {
        let converted = match style {
            CaseArg::Pascal => casing::pascalize(word),
            CaseArg::Camel => casing::camelize(word),
            CaseArg::Underscore => casing::underscore(word),
            CaseArg::Dasherize => casing::dasherize(word),
        };
        println!("{}", converted);
    }
    ExitCode::SUCCESS
}

fn cmd_collection(
    mut settings: Settings,
    type_names: &[String],
    style: Option<StyleArg>,
) -> ExitCode {
    if let Some(style) = style {
        settings.naming.style = style.into();
    }

    let vocab = match settings.vocabulary() {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Error building vocabulary: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let namer = settings.collection_namer(&vocab);
    for name in type_names {
        println!("{}", namer.name(name));
    }
    ExitCode::SUCCESS
}
