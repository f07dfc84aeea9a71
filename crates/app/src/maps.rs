//! Map discovery and the start-of-game map menu.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use doom_core::DungeonMap;
use log::warn;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapEntry {
    pub stem: String,
    pub path: PathBuf,
}

/// Every `.txt` file in `dir`, sorted by file name.
pub fn discover_maps(dir: &Path) -> io::Result<Vec<MapEntry>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() || path.extension().and_then(|ext| ext.to_str()) != Some("txt") {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
            continue;
        };
        entries.push(MapEntry { stem: stem.to_string(), path: path.clone() });
    }
    entries.sort_by(|a, b| a.path.file_name().cmp(&b.path.file_name()));
    Ok(entries)
}

pub fn find_map<'a>(entries: &'a [MapEntry], stem: &str) -> Option<&'a MapEntry> {
    entries.iter().find(|entry| entry.stem == stem)
}

/// One-based menu selection.
pub fn select_by_number<'a>(entries: &'a [MapEntry], input: &str) -> Option<&'a MapEntry> {
    let number: usize = input.trim().parse().ok()?;
    entries.get(number.checked_sub(1)?)
}

/// Show the menu and read one line of input. Falls back to `default_map`
/// on anything that is not a listed number.
pub fn prompt_for_map<'a, R: BufRead, W: Write>(
    entries: &'a [MapEntry],
    default_map: &str,
    input: &mut R,
    output: &mut W,
) -> Result<&'a MapEntry> {
    writeln!(output, "Welcome to Dungeons Of Doom")?;
    writeln!(output, "Please choose a map from the following:")?;
    for (index, entry) in entries.iter().enumerate() {
        writeln!(output, "{} --- {}", index + 1, entry.stem)?;
    }
    writeln!(output, "Please enter the number corresponding to the map you want to play.")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    if let Some(entry) = select_by_number(entries, &line) {
        return Ok(entry);
    }

    warn!("invalid map selection {:?}; using default {default_map}", line.trim());
    writeln!(
        output,
        "Input not valid. The default map is {default_map}.\n\
         If you want to play the game with another map exit the current session \
         and restart the game."
    )?;
    find_map(entries, default_map)
        .with_context(|| format!("default map '{default_map}' not found among available maps"))
}

pub fn load_map(entry: &MapEntry) -> Result<DungeonMap> {
    let source = fs::read_to_string(&entry.path)
        .with_context(|| format!("Failed to read map file: {}", entry.path.display()))?;
    DungeonMap::parse(&source)
        .with_context(|| format!("Failed to parse map file: {}", entry.path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{TempDir, tempdir};

    const TINY: &str = "name Tiny\nwin 0\n###\n#.#\n###\n";

    fn maps_dir() -> TempDir {
        let dir = tempdir().expect("tempdir");
        fs::write(dir.path().join("mediumMap.txt"), TINY).expect("write");
        fs::write(dir.path().join("easyMap.txt"), TINY).expect("write");
        fs::write(dir.path().join("notes.md"), "ignored").expect("write");
        dir
    }

    #[test]
    fn discovers_only_txt_files_in_name_order() {
        let dir = maps_dir();
        let entries = discover_maps(dir.path()).expect("discover");
        let stems: Vec<&str> = entries.iter().map(|entry| entry.stem.as_str()).collect();
        assert_eq!(stems, vec!["easyMap", "mediumMap"]);
    }

    #[test]
    fn menu_selection_is_one_based() {
        let dir = maps_dir();
        let entries = discover_maps(dir.path()).expect("discover");
        assert_eq!(select_by_number(&entries, "2\n").map(|e| e.stem.as_str()), Some("mediumMap"));
        assert_eq!(select_by_number(&entries, "0"), None);
        assert_eq!(select_by_number(&entries, "3"), None);
        assert_eq!(select_by_number(&entries, "two"), None);
    }

    #[test]
    fn prompt_lists_maps_and_falls_back_to_default() {
        let dir = maps_dir();
        let entries = discover_maps(dir.path()).expect("discover");
        let mut input = "banana\n".as_bytes();
        let mut output = Vec::new();
        let chosen =
            prompt_for_map(&entries, "easyMap", &mut input, &mut output).expect("fallback map");
        assert_eq!(chosen.stem, "easyMap");

        let shown = String::from_utf8(output).expect("utf8");
        assert!(shown.contains("1 --- easyMap\n2 --- mediumMap\n"), "{shown}");
        assert!(shown.contains("Input not valid. The default map is easyMap."), "{shown}");
    }

    #[test]
    fn missing_default_is_an_error() {
        let dir = maps_dir();
        let entries = discover_maps(dir.path()).expect("discover");
        let mut input = "".as_bytes();
        let mut output = Vec::new();
        assert!(prompt_for_map(&entries, "hardMap", &mut input, &mut output).is_err());
    }

    #[test]
    fn load_map_reports_parse_errors_with_path() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("broken.txt");
        fs::write(&path, "win 3\n").expect("write");
        let entry = MapEntry { stem: "broken".to_string(), path };
        let err = load_map(&entry).expect_err("broken map");
        assert!(format!("{err:#}").contains("broken.txt"), "{err:#}");
    }
}
