//! rapid-recall - RSVP word trainer for the terminal

use std::env;
use std::process;

use rapid_recall::cli::{self, Command};
use rapid_recall::config::Config;
use rapid_recall::error::Result;
use rapid_recall::logging;
use rapid_recall::reader::{self, Session, Terminal};
use rapid_recall::storage::FileStorage;
use rapid_recall::store::WordSetStore;
use rapid_recall::theme::ThemeStore;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse command line arguments
    let args: Vec<String> = env::args().skip(1).collect();
    let command = cli::parse_args(&args)?;

    // Handle --help and --version before touching the data directory
    match command {
        Command::Help => {
            print_usage();
            return Ok(());
        }
        Command::Version => {
            print_version();
            return Ok(());
        }
        _ => {}
    }

    let config = Config::load();
    let data_dir = config.data_dir();
    if let Err(e) = logging::init_logging(&data_dir, &config.log_level) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    let storage = FileStorage::new(&data_dir);
    let mut store = WordSetStore::new(storage.clone());
    store.hydrate();

    match command {
        Command::List => {
            for line in cli::list_lines(&store) {
                println!("{}", line);
            }
            return Ok(());
        }
        Command::Export { name } => {
            println!("{}", cli::export(&store, &name)?);
            return Ok(());
        }
        Command::Rename { from, to } => return cli::rename(&mut store, &from, &to),
        Command::Replace { name, path } => {
            let count = cli::replace_file(&mut store, &name, &path)?;
            println!("{}: {} words", name.trim(), count);
            return Ok(());
        }
        Command::Read { import: Some(path) } => {
            cli::import_file(&mut store, &path)?;
        }
        Command::Read { import: None } | Command::Help | Command::Version => {}
    }

    let themes = ThemeStore::init(storage, config.theme);
    let mut session = Session::new(store, themes, config.sentence_pause);

    let mut terminal = Terminal::new()?;
    reader::run(&mut terminal, &mut session)
}

fn print_usage() {
    println!("rapid-recall {} - RSVP word trainer", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: rapid-recall [OPTIONS] [FILE]");
    println!();
    println!("  FILE                  Import FILE (one word per line) as a new set");
    println!();
    println!("Options:");
    println!("  --list                List word sets");
    println!("  --export NAME         Print the words of the set called NAME");
    println!("  --rename NAME NEW     Rename the set called NAME");
    println!("  --replace NAME FILE   Replace the words of NAME with the lines of FILE");
    println!("  -h, --help            Show this help message");
    println!("  -V, --version         Show version information");
    println!();
    println!("Library keys:");
    println!("  Up/Down, k/j   Move between sets");
    println!("  Enter          Read the selected set");
    println!("  d              Delete the selected set");
    println!("  r              Reset the selected set to its first word");
    println!();
    println!("Reading keys:");
    println!("  Space          Play / pause");
    println!("  Left/Right     Previous / next word");
    println!("  +/-            Change speed by 10 wpm");
    println!("  0              Restart from the first word");
    println!("  Esc            Back to the library");
    println!();
    println!("  t toggles the theme, q quits.");
    println!();
    println!("Settings are read from ~/.rapid-recall.toml; set RAPID_RECALL_LOG to change logging.");
}

fn print_version() {
    println!("rapid-recall {}", env!("CARGO_PKG_VERSION"));
}
