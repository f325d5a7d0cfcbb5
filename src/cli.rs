//! Command line parsing and the one-shot commands that run without the
//! terminal reader

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{RecallError, Result};
use crate::storage::KeyValueStore;
use crate::store::WordSetStore;

/// What the binary was asked to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Version,
    /// Print every set
    List,
    /// Print the words of a set
    Export { name: String },
    /// Give a set a new name
    Rename { from: String, to: String },
    /// Swap a set's words for the lines of a file
    Replace { name: String, path: PathBuf },
    /// Start the reader, importing a file first if given
    Read { import: Option<PathBuf> },
}

/// Parse arguments, not including the program name
pub fn parse_args(args: &[String]) -> Result<Command> {
    let Some(first) = args.first() else {
        return Ok(Command::Read { import: None });
    };
    let arg = |i: usize, what: &str| {
        args.get(i)
            .cloned()
            .ok_or_else(|| RecallError::Message(format!("{} needs {}", first, what)))
    };

    let command = match first.as_str() {
        "--help" | "-h" => Command::Help,
        "--version" | "-V" => Command::Version,
        "--list" => Command::List,
        "--export" => Command::Export {
            name: arg(1, "a set name")?,
        },
        "--rename" => Command::Rename {
            from: arg(1, "a set name")?,
            to: arg(2, "a new name")?,
        },
        "--replace" => Command::Replace {
            name: arg(1, "a set name")?,
            path: PathBuf::from(arg(2, "a file")?),
        },
        flag if flag.starts_with('-') => {
            return Err(RecallError::Message(format!("unknown option: {}", flag)));
        }
        path => Command::Read {
            import: Some(PathBuf::from(path)),
        },
    };
    Ok(command)
}

fn set_id<S: KeyValueStore>(store: &WordSetStore<S>, name: &str) -> Result<String> {
    store
        .find_by_name(name)
        .map(|set| set.id().to_string())
        .ok_or_else(|| RecallError::NoSuchSet(name.to_string()))
}

/// Create a set named after the file and import its lines
///
/// Returns the new set's id.
pub fn import_file<S: KeyValueStore>(store: &mut WordSetStore<S>, path: &Path) -> Result<String> {
    let contents = fs::read_to_string(path)?;
    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "Imported".to_string());

    let id = store
        .create_set(&name)
        .map(|set| set.id().to_string())
        .ok_or_else(|| RecallError::Message(format!("cannot name a set after {}", path.display())))?;
    let added = store.import_words(&id, &contents);
    tracing::info!(path = %path.display(), added, "imported file");
    Ok(id)
}

/// Replace the words of the set called `name` with the lines of a file
///
/// Returns the resulting word count.
pub fn replace_file<S: KeyValueStore>(
    store: &mut WordSetStore<S>,
    name: &str,
    path: &Path,
) -> Result<usize> {
    let id = set_id(store, name)?;
    let contents = fs::read_to_string(path)?;
    let count = store.replace_words(&id, &contents);
    tracing::info!(path = %path.display(), count, "replaced words from file");
    Ok(count)
}

/// Rename the set called `from`
pub fn rename<S: KeyValueStore>(store: &mut WordSetStore<S>, from: &str, to: &str) -> Result<()> {
    if to.trim().is_empty() {
        return Err(RecallError::Message("a set name cannot be blank".to_string()));
    }
    let id = set_id(store, from)?;
    store.rename_set(&id, to);
    Ok(())
}

/// Words of the set called `name`, one per line
pub fn export<S: KeyValueStore>(store: &WordSetStore<S>, name: &str) -> Result<String> {
    let id = set_id(store, name)?;
    Ok(store.export_words(&id))
}

/// One line per set for `--list`, active set marked with `*`
pub fn list_lines<S: KeyValueStore>(store: &WordSetStore<S>) -> Vec<String> {
    store
        .sets()
        .iter()
        .map(|set| {
            let marker = if store.active_set_id() == Some(set.id()) { '*' } else { ' ' };
            format!("{} {}\t{} words\t{} wpm", marker, set.name(), set.len(), set.wpm())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn store_with(name: &str, words: &str) -> (WordSetStore<MemoryStorage>, String) {
        let mut store = WordSetStore::new(MemoryStorage::new());
        let id = store.create_set(name).unwrap().id().to_string();
        store.import_words(&id, words);
        (store, id)
    }

    #[test]
    fn test_parse_args() {
        assert_eq!(parse_args(&[]).unwrap(), Command::Read { import: None });
        assert_eq!(parse_args(&args(&["-h"])).unwrap(), Command::Help);
        assert_eq!(parse_args(&args(&["--version"])).unwrap(), Command::Version);
        assert_eq!(parse_args(&args(&["--list"])).unwrap(), Command::List);
        assert_eq!(
            parse_args(&args(&["words.txt"])).unwrap(),
            Command::Read {
                import: Some(PathBuf::from("words.txt"))
            }
        );
        assert_eq!(
            parse_args(&args(&["--export", "Vocab"])).unwrap(),
            Command::Export {
                name: "Vocab".to_string()
            }
        );
        assert_eq!(
            parse_args(&args(&["--rename", "Old", "New"])).unwrap(),
            Command::Rename {
                from: "Old".to_string(),
                to: "New".to_string()
            }
        );
        assert_eq!(
            parse_args(&args(&["--replace", "Vocab", "new.txt"])).unwrap(),
            Command::Replace {
                name: "Vocab".to_string(),
                path: PathBuf::from("new.txt")
            }
        );
    }

    #[test]
    fn test_parse_args_errors() {
        assert!(parse_args(&args(&["--export"])).is_err());
        assert!(parse_args(&args(&["--rename", "Old"])).is_err());
        assert!(parse_args(&args(&["--replace", "Vocab"])).is_err());
        assert!(parse_args(&args(&["--bogus"])).is_err());
    }

    #[test]
    fn test_rename() {
        let (mut store, id) = store_with("Old", "a");
        rename(&mut store, "Old", "  New  ").unwrap();
        assert_eq!(store.get(&id).unwrap().name(), "New");

        assert!(matches!(
            rename(&mut store, "Old", "Other"),
            Err(RecallError::NoSuchSet(_))
        ));
        assert!(rename(&mut store, "New", "   ").is_err());
        assert_eq!(store.get(&id).unwrap().name(), "New");
    }

    #[test]
    fn test_replace_file() {
        let (mut store, id) = store_with("Vocab", "x\ny\nz");
        store.set_index(&id, 2);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("new.txt");
        fs::write(&path, "a\nb\na\n").unwrap();

        assert_eq!(replace_file(&mut store, "Vocab", &path).unwrap(), 2);
        let set = store.get(&id).unwrap();
        assert_eq!(set.words(), ["a", "b"]);
        assert_eq!(set.current_index(), 0);

        assert!(matches!(
            replace_file(&mut store, "Missing", &path),
            Err(RecallError::NoSuchSet(_))
        ));
        assert!(replace_file(&mut store, "Vocab", &dir.path().join("absent.txt")).is_err());
        assert_eq!(store.export_words(&id), "a\nb");
    }

    #[test]
    fn test_import_file() {
        let mut store = WordSetStore::new(MemoryStorage::new());
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spanish.txt");
        fs::write(&path, "hola\nadios\nhola\n").unwrap();

        let id = import_file(&mut store, &path).unwrap();
        let set = store.get(&id).unwrap();
        assert_eq!(set.name(), "spanish");
        assert_eq!(set.words(), ["hola", "adios"]);
        assert_eq!(store.active_set_id(), Some(id.as_str()));
    }

    #[test]
    fn test_export_and_list() {
        let (store, _) = store_with("Vocab", "a\nb");
        assert_eq!(export(&store, "Vocab").unwrap(), "a\nb");
        assert!(export(&store, "Missing").is_err());
        assert_eq!(list_lines(&store), vec!["* Vocab\t2 words\t100 wpm"]);
    }
}
