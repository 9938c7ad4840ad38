//! Path handling for the upload prompt
//!
//! Only the file name is ever used; the file is not opened.

use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::ACCEPTED_EXTENSIONS;

/// Expand a leading ~ to the home directory
pub fn expand_tilde(input: &str) -> String {
    if input.starts_with('~') {
        if let Some(home) = dirs::home_dir() {
            return input.replacen('~', &home.to_string_lossy(), 1);
        }
    }
    input.to_string()
}

/// Whether the path carries one of the offered spreadsheet extensions
pub fn is_accepted_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| ACCEPTED_EXTENSIONS.iter().any(|a| a.eq_ignore_ascii_case(e)))
        .unwrap_or(false)
}

/// Name shown next to the upload control
pub fn display_name(input: &str) -> String {
    let trimmed = input.trim();
    Path::new(trimmed)
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| trimmed.to_string())
}

/// Complete a partially typed path against directories and accepted files.
///
/// Returns `None` when there is nothing to add.
pub fn complete_path(input: &str) -> Option<String> {
    let expanded = expand_tilde(input);
    let path = PathBuf::from(&expanded);

    if path.is_dir() && !expanded.ends_with('/') && !expanded.is_empty() {
        return Some(format!("{}/", expanded));
    }

    let (parent, prefix) = if expanded.is_empty() {
        (PathBuf::from("."), String::new())
    } else if expanded.ends_with('/') {
        (PathBuf::from(&expanded), String::new())
    } else {
        let prefix = path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        (parent, prefix)
    };

    let mut matches: Vec<(String, bool)> = fs::read_dir(&parent)
        .ok()?
        .filter_map(|e| e.ok())
        .filter_map(|e| {
            let is_dir = e.path().is_dir();
            if !is_dir && !is_accepted_file(&e.path()) {
                return None;
            }
            e.file_name().into_string().ok().map(|name| (name, is_dir))
        })
        .filter(|(name, _)| name.starts_with(&prefix) && !name.starts_with('.'))
        .collect();
    matches.sort();

    let joined = |name: &str| {
        if expanded.is_empty() {
            name.to_string()
        } else if expanded.ends_with('/') {
            format!("{}{}", expanded, name)
        } else {
            match path.parent() {
                Some(p) if !p.as_os_str().is_empty() => p.join(name).to_string_lossy().to_string(),
                _ => name.to_string(),
            }
        }
    };

    match matches.as_slice() {
        [] => None,
        [(name, is_dir)] => {
            let completed = joined(name);
            Some(if *is_dir { format!("{}/", completed) } else { completed })
        }
        many => {
            let names: Vec<String> = many.iter().map(|(n, _)| n.clone()).collect();
            let common = common_prefix(&names)?;
            if common.len() > prefix.len() {
                Some(joined(&common))
            } else {
                None
            }
        }
    }
}

/// Find common prefix among strings
fn common_prefix(strings: &[String]) -> Option<String> {
    let (first, rest) = strings.split_first()?;
    let mut prefix_len = first.len();

    for s in rest {
        prefix_len = first
            .char_indices()
            .zip(s.chars())
            .take_while(|((_, a), b)| a == b)
            .last()
            .map(|((i, a), _)| i + a.len_utf8())
            .unwrap_or(0)
            .min(prefix_len);
    }

    if prefix_len > 0 {
        Some(first[..prefix_len].to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::tempdir;

    #[test]
    fn test_accepted_extensions() {
        assert!(is_accepted_file(Path::new("march.csv")));
        assert!(is_accepted_file(Path::new("march.XLSX")));
        assert!(is_accepted_file(Path::new("/tmp/q1.xls")));
        assert!(!is_accepted_file(Path::new("notes.txt")));
        assert!(!is_accepted_file(Path::new("csv")));
    }

    #[test]
    fn test_display_name_keeps_last_component() {
        assert_eq!(display_name("/data/invoices/march.csv"), "march.csv");
        assert_eq!(display_name("  april.xlsx "), "april.xlsx");
    }

    #[test]
    fn test_completes_single_file() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("invoices_march.csv")).unwrap();
        File::create(dir.path().join("readme.txt")).unwrap();

        let input = format!("{}/inv", dir.path().display());
        let completed = complete_path(&input).unwrap();
        assert!(completed.ends_with("/invoices_march.csv"));
    }

    #[test]
    fn test_completes_common_prefix() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("batch_01.csv")).unwrap();
        File::create(dir.path().join("batch_02.xlsx")).unwrap();

        let input = format!("{}/b", dir.path().display());
        let completed = complete_path(&input).unwrap();
        assert!(completed.ends_with("/batch_0"));
    }

    #[test]
    fn test_directory_gets_trailing_slash() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("uploads")).unwrap();

        let input = format!("{}/upl", dir.path().display());
        assert_eq!(complete_path(&input), Some(format!("{}/uploads/", dir.path().display())));
    }

    #[test]
    fn test_ignores_unaccepted_files() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("report.pdf")).unwrap();

        let input = format!("{}/rep", dir.path().display());
        assert_eq!(complete_path(&input), None);
    }
}
