use std::fs;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use serde::Serialize;

use sx_engine::settings::{self, Settings};
use sx_engine::trace_init::init_tracing;
use sx_engine::{unicode, Filter, TrieFilter};

/// Unwrap a Result or print the error and exit.
macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

#[derive(Parser)]
#[command(name = "sxtool", about = "Sensitive-word detection and masking")]
struct Cli {
    /// Word list, one word per line
    #[arg(long, global = true)]
    dict: Option<PathBuf>,
    /// Settings TOML (defaults to the embedded settings)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Skip characters, overriding the configured ones
    #[arg(long, global = true)]
    skip: Option<String>,
    /// Write JSONL traces into this directory (requires the `trace` feature)
    #[arg(long, global = true)]
    trace_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Report whether the text contains a dictionary word
    Contains {
        /// Text to scan (reads stdin line by line when omitted)
        text: Option<String>,
    },
    /// Print the first match
    Find { text: Option<String> },
    /// Print every match
    FindAll {
        text: Option<String>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Mask every match
    Replace {
        text: Option<String>,
        /// Mask character (defaults to the configured replacement)
        #[arg(long = "with")]
        with: Option<char>,
    },
    /// Show dictionary statistics
    Info,
    /// Print the canonical form of the text
    Normalize { text: Option<String> },
    /// Print the embedded default settings
    SettingsExport,
    /// Validate a settings file
    SettingsValidate { file: PathBuf },
}

#[derive(Serialize)]
struct FindAllOutput<'a> {
    text: &'a str,
    matches: Vec<MatchOutput<'a>>,
}

#[derive(Serialize)]
struct MatchOutput<'a> {
    word: &'a str,
    start: usize,
    end: usize,
}

fn main() {
    let cli = Cli::parse();
    let _guard = init_tracing(cli.trace_dir.as_deref());

    match &cli.command {
        Command::SettingsExport => print!("{}", settings::default_toml()),
        Command::SettingsValidate { file } => settings_validate(file),
        Command::Normalize { text } => {
            for_each_line(text.as_deref(), |line| println!("{}", unicode::normalize(line)));
        }
        Command::Contains { text } => {
            let (filter, _) = build_filter(&cli);
            for_each_line(text.as_deref(), |line| println!("{}", filter.contains(line)));
        }
        Command::Find { text } => {
            let (filter, _) = build_filter(&cli);
            for_each_line(text.as_deref(), |line| {
                println!("{}", filter.find_first(line).unwrap_or(""));
            });
        }
        Command::FindAll { text, json } => {
            let (filter, _) = build_filter(&cli);
            for_each_line(text.as_deref(), |line| {
                if *json {
                    print_matches_json(&filter, line);
                } else {
                    println!("{}", filter.find_all(line).join("\t"));
                }
            });
        }
        Command::Replace { text, with } => {
            let (filter, settings) = build_filter(&cli);
            let replacement = with.unwrap_or_else(|| settings.filter.replacement_char());
            for_each_line(text.as_deref(), |line| {
                println!("{}", filter.replace(line, replacement));
            });
        }
        Command::Info => {
            let (filter, _) = build_filter(&cli);
            let stats = filter.stats();
            println!("Words:     {}", stats.words);
            println!("Nodes:     {}", stats.nodes);
            println!("Max depth: {}", stats.max_depth);
        }
    }
}

/// Install `--config` as the process settings, if given, and return them.
fn load_settings(path: Option<&Path>) -> Settings {
    if let Some(path) = path {
        die!(
            settings::init_custom_file(path),
            "Error loading {}: {}",
            path.display()
        );
    }
    settings::settings().clone()
}

/// Load the dictionary and apply the skip characters from `--skip` or the settings.
fn build_filter(cli: &Cli) -> (TrieFilter, Settings) {
    let settings = load_settings(cli.config.as_deref());
    let Some(dict) = cli.dict.as_deref() else {
        eprintln!("Error: --dict <file> is required for this command");
        process::exit(1);
    };
    let mut filter = die!(
        TrieFilter::open(dict),
        "Error loading dictionary {}: {}",
        dict.display()
    );
    match &cli.skip {
        Some(skip) => {
            let chars: Vec<char> = skip.chars().collect();
            filter.exclude(&chars);
        }
        None => filter.configure(&settings.filter),
    }
    (filter, settings)
}

fn settings_validate(file: &Path) {
    let content = die!(
        fs::read_to_string(file),
        "Error reading {}: {}",
        file.display()
    );
    let s = die!(settings::parse_settings_toml(&content), "Error: {}");
    println!(
        "OK: filter.skip={:?}, filter.replacement={:?}",
        s.filter.skip,
        s.filter.replacement_char()
    );
}

/// Run `f` on `text`, or on every stdin line when no text was given.
fn for_each_line(text: Option<&str>, mut f: impl FnMut(&str)) {
    if let Some(text) = text {
        f(text);
        return;
    }
    for line in io::stdin().lock().lines() {
        let line = die!(line, "Error reading stdin: {}");
        f(&line);
    }
}

fn print_matches_json(filter: &TrieFilter, line: &str) {
    let output = FindAllOutput {
        text: line,
        matches: filter
            .find_iter(line)
            .map(|m| MatchOutput {
                word: m.as_str(),
                start: m.start(),
                end: m.end(),
            })
            .collect(),
    };
    println!("{}", die!(serde_json::to_string(&output), "Error: {}"));
}
