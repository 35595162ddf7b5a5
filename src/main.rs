use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use ini::{DEFAULT_LOCATION, Document, DuplicatePolicy, Section};

#[derive(Parser, Debug)]
#[command(about = "Print the sections of an INI file")]
struct Args {
    /// File name without the `.ini` extension, or `-` to read standard input.
    name: String,
    #[arg(default_value = DEFAULT_LOCATION)]
    location: PathBuf,
    /// How to treat a section title that appears more than once.
    #[arg(long, default_value_t = DuplicatePolicy::Suppress)]
    duplicates: DuplicatePolicy,
    /// Only print this section.
    #[arg(long)]
    section: Option<String>,
    /// Print line and section counts instead of the contents.
    #[arg(long)]
    count: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let mut document = Document::new(&args.name, &args.location).with_policy(args.duplicates);

    let lines = if args.name == "-" {
        document.load(io::stdin().lock())?
    } else {
        document
            .open()
            .with_context(|| format!("unable to load {}", document.path().display()))?
    };

    if args.count {
        println!("{lines} lines, {} sections", document.section_count());
        for section in document.sections() {
            println!("[{}] {}", section.title(), section.count());
        }
        return Ok(());
    }

    match args.section {
        Some(title) => {
            let section = document
                .section(&title)
                .ok_or_else(|| anyhow!("no section named {title:?}"))?;
            print_section(section);
        }
        None => {
            for section in document.sections() {
                print_section(section);
                println!();
            }
        }
    }

    Ok(())
}

fn print_section(section: &Section) {
    println!("[{}]", section.title());

    let mut keys = section.keys().collect::<Vec<_>>();
    keys.sort_unstable();

    for key in keys {
        println!("{key}={}", section.get(key).unwrap_or_default());
    }
}
