use std::path::{Path, PathBuf};

use glob::Pattern;
use serde::{Serialize, Serializer};
use walkdir::{DirEntry, WalkDir};

use crate::error::{PadError, Result};
use crate::extract::{extract_number, NumberPosition};
use crate::padding::{classify, Verdict};

/// Which files of a directory to sample
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanOptions {
    /// Glob matched against the file name (not the path)
    pub pattern: Option<String>,
    pub recursive: bool,
    pub position: NumberPosition,
    /// Include dotfiles and descend into dot-directories
    pub include_hidden: bool,
}

/// A file whose stem yielded a number
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScannedFile {
    /// Path relative to the scanned directory
    #[serde(serialize_with = "serialize_path_lossy")]
    pub path: PathBuf,
    pub number: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScanResult {
    pub samples: Vec<ScannedFile>,
    /// Matching files with no digits in their stem
    #[serde(serialize_with = "serialize_paths_lossy")]
    pub skipped: Vec<PathBuf>,
    pub verdict: Verdict,
}

impl ScanResult {
    pub fn numbers(&self) -> Vec<&str> {
        self.samples.iter().map(|f| f.number.as_str()).collect()
    }
}

// File names need not be UTF-8; serde's own Path impl rejects those
fn serialize_path_lossy<S: Serializer>(
    path: &Path,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(&path.to_string_lossy())
}

fn serialize_paths_lossy<S: Serializer>(
    paths: &[PathBuf],
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_seq(paths.iter().map(|p| p.to_string_lossy()))
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}

/// Collect the numbered files of `dir` and classify their padding
pub fn scan_dir(dir: &Path, options: &ScanOptions) -> Result<ScanResult> {
    if !dir.is_dir() {
        return Err(PadError::DirNotFound {
            path: dir.to_path_buf(),
        });
    }

    let pattern = options.pattern.as_deref().map(Pattern::new).transpose()?;
    let max_depth = if options.recursive { usize::MAX } else { 1 };

    let mut samples = Vec::new();
    let mut skipped = Vec::new();

    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(max_depth)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || options.include_hidden || !is_hidden(e));

    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy();
        if let Some(ref pattern) = pattern {
            if !pattern.matches(&file_name) {
                continue;
            }
        }

        let path = entry.path();
        let relative = path.strip_prefix(dir).unwrap_or(path).to_path_buf();
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        match extract_number(&stem, options.position) {
            Some(number) => samples.push(ScannedFile {
                path: relative,
                number: number.to_string(),
            }),
            None => skipped.push(relative),
        }
    }

    samples.sort_by(|a, b| a.path.cmp(&b.path));
    skipped.sort();

    let verdict = classify(samples.iter().map(|f| f.number.as_str()));

    Ok(ScanResult {
        samples,
        skipped,
        verdict,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &Path, names: &[&str]) {
        for name in names {
            let path = dir.join(name);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(path, "").unwrap();
        }
    }

    #[test]
    fn test_scan_padded_sequence() {
        let temp = TempDir::new().unwrap();
        touch(
            temp.path(),
            &["frame_0001.exr", "frame_0002.exr", "frame_0003.exr"],
        );

        let result = scan_dir(temp.path(), &ScanOptions::default()).unwrap();
        assert_eq!(result.numbers(), vec!["0001", "0002", "0003"]);
        assert_eq!(result.verdict, Verdict::Consistent { width: 4 });
        assert!(result.skipped.is_empty());
    }

    #[test]
    fn test_scan_skips_names_without_digits() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), &["1.txt", "2.txt", "10.txt", "notes.txt"]);

        let result = scan_dir(temp.path(), &ScanOptions::default()).unwrap();
        assert_eq!(result.samples.len(), 3);
        assert_eq!(result.skipped, vec![PathBuf::from("notes.txt")]);
        assert_eq!(result.verdict, Verdict::Unpadded);
    }

    #[test]
    fn test_scan_extension_digits_ignored() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), &["clip01.mp4", "clip02.mp4"]);

        let result = scan_dir(temp.path(), &ScanOptions::default()).unwrap();
        assert_eq!(result.numbers(), vec!["01", "02"]);
        assert_eq!(result.verdict, Verdict::Consistent { width: 2 });
    }

    #[test]
    fn test_scan_pattern_filter() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), &["a_001.png", "a_002.png", "b_7.jpg"]);

        let options = ScanOptions {
            pattern: Some("*.png".to_string()),
            ..Default::default()
        };
        let result = scan_dir(temp.path(), &options).unwrap();
        assert_eq!(result.numbers(), vec!["001", "002"]);
    }

    #[test]
    fn test_scan_recursive_and_hidden() {
        let temp = TempDir::new().unwrap();
        touch(
            temp.path(),
            &["01.dat", "sub/02.dat", ".cache/03.dat", ".04.dat"],
        );

        let flat = scan_dir(temp.path(), &ScanOptions::default()).unwrap();
        assert_eq!(flat.numbers(), vec!["01"]);

        let recursive = ScanOptions {
            recursive: true,
            ..Default::default()
        };
        let result = scan_dir(temp.path(), &recursive).unwrap();
        assert_eq!(result.numbers(), vec!["01", "02"]);
        assert_eq!(result.samples[1].path, PathBuf::from("sub/02.dat"));

        let everything = ScanOptions {
            recursive: true,
            include_hidden: true,
            ..Default::default()
        };
        let result = scan_dir(temp.path(), &everything).unwrap();
        assert_eq!(result.samples.len(), 4);
    }

    #[test]
    fn test_scan_first_position() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), &["001_take3.wav", "002_take12.wav"]);

        let options = ScanOptions {
            position: NumberPosition::First,
            ..Default::default()
        };
        let result = scan_dir(temp.path(), &options).unwrap();
        assert_eq!(result.numbers(), vec!["001", "002"]);
    }

    #[test]
    fn test_scan_missing_dir() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing");
        let err = scan_dir(&missing, &ScanOptions::default()).unwrap_err();
        assert!(matches!(err, PadError::DirNotFound { .. }));
    }

    #[test]
    fn test_scan_invalid_pattern() {
        let temp = TempDir::new().unwrap();
        let options = ScanOptions {
            pattern: Some("[".to_string()),
            ..Default::default()
        };
        let err = scan_dir(temp.path(), &options).unwrap_err();
        assert!(matches!(err, PadError::InvalidPattern(_)));
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_non_utf8_name_serializes() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(OsStr::from_bytes(b"frame_\xff0001.exr")), "").unwrap();
        fs::write(temp.path().join(OsStr::from_bytes(b"notes_\xff.txt")), "").unwrap();
        touch(temp.path(), &["frame_0002.exr"]);

        let result = scan_dir(temp.path(), &ScanOptions::default()).unwrap();
        assert_eq!(result.verdict, Verdict::Consistent { width: 4 });
        assert_eq!(result.skipped.len(), 1);

        let json = serde_json::to_value(&result).unwrap();
        // Paths sort bytewise, so 0xff lands after '0'
        assert_eq!(json["samples"][0]["path"], "frame_0002.exr");
        assert_eq!(json["samples"][1]["path"], "frame_\u{fffd}0001.exr");
        assert_eq!(json["samples"][1]["number"], "0001");
        assert_eq!(json["skipped"][0], "notes_\u{fffd}.txt");
        assert_eq!(json["verdict"]["width"], 4);
    }

    #[test]
    fn test_scan_empty_dir() {
        let temp = TempDir::new().unwrap();
        let result = scan_dir(temp.path(), &ScanOptions::default()).unwrap();
        assert!(result.samples.is_empty());
        assert_eq!(result.verdict, Verdict::Empty);
    }
}
