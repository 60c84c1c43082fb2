//! html5tagger CLI
//!
//! Usage:
//!   html5tagger [OPTIONS] [FILE]
//!
//! Options:
//!   -c, --config <FILE>  Document configuration (TOML format)
//!   -t, --title <TITLE>  Page title
//!   -l, --lang <LANG>    Document language
//!   -u, --url <URL>      Stylesheet, icon, manifest or script to link
//!       --viewport       Add the default viewport meta tag
//!   -h, --help           Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;

use html5tagger::{document, DocumentConfig};

#[derive(Parser)]
#[command(name = "html5tagger")]
#[command(about = "Wrap plain text paragraphs into an HTML5 document")]
struct Cli {
    /// Body text file, paragraphs separated by blank lines (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Document configuration file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Page title
    #[arg(short, long)]
    title: Option<String>,

    /// Document language
    #[arg(short, long)]
    lang: Option<String>,

    /// Resource to link in the head section (repeatable)
    #[arg(short, long = "url")]
    urls: Vec<String>,

    /// Add the default viewport meta tag
    #[arg(long)]
    viewport: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    // Load configuration
    let mut config = match &cli.config {
        Some(path) => match DocumentConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => DocumentConfig::default(),
    };

    // Command line flags take precedence
    if let Some(title) = cli.title {
        config = config.with_title(title);
    }
    if let Some(lang) = cli.lang {
        config = config.with_lang(lang);
    }
    if cli.viewport {
        config = config.with_viewport(true);
    }
    for url in cli.urls {
        config = config.with_url(url);
    }

    // Read body text; an interactive terminal gives an empty body
    let source = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None if io::stdin().is_terminal() => String::new(),
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => buffer,
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let mut doc = match document(&config) {
        Ok(doc) => doc,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    doc.tag("body");
    for paragraph in paragraphs(&source) {
        doc.tag("p").content(paragraph);
    }
    println!("{}", doc);
}

/// Split text on blank lines, joining the lines of each paragraph with spaces
fn paragraphs(source: &str) -> Vec<String> {
    let mut result = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in source.lines() {
        let line = line.trim();
        if line.is_empty() {
            if !current.is_empty() {
                result.push(current.join(" "));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        result.push(current.join(" "));
    }
    result
}
