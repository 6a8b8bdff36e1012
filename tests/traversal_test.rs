use std::fs::{self, File, create_dir_all};
use std::path::{Path, PathBuf};

use tempfile::tempdir;

use dirconv::config::{CaseMode, PunctuationMode, SeparatorPair, Settings};
use dirconv::traversal::{LocalFileSystem, RenameOutcome, TraversalRenamer};
use dirconv::workflow::{ProcessingOptions, process_tree};

fn options(start_dir: &Path, settings: Settings) -> ProcessingOptions {
    ProcessingOptions {
        start_dir: start_dir.to_path_buf(),
        settings,
        list_only: false,
        dry_run: false,
    }
}

/// Relative paths of everything below `root`, sorted
fn tree(root: &Path) -> Vec<String> {
    fn walk(root: &Path, dir: &Path, out: &mut Vec<String>) {
        for entry in fs::read_dir(dir).unwrap() {
            let path = entry.unwrap().path();
            out.push(
                path.strip_prefix(root)
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/"),
            );
            if path.is_dir() {
                walk(root, &path, out);
            }
        }
    }

    let mut out = Vec::new();
    walk(root, root, &mut out);
    out.sort();
    out
}

#[test]
fn test_nested_tree_is_converted_bottom_up() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path().join("Music Library");
    create_dir_all(root.join("The Band/Live (2019)/Disc 1")).unwrap();
    File::create(root.join("The Band/Live (2019)/Disc 1/01 Intro.MP3")).unwrap();
    File::create(root.join("The Band/Cover Art.JPG")).unwrap();

    let settings = Settings {
        case: CaseMode::Lower,
        remove_punctuation: PunctuationMode::SafeSubset,
        separator: Some(SeparatorPair::new(" ", "_")),
        include_files: true,
        ..Settings::default()
    };

    let context = process_tree(options(&root, settings)).unwrap();

    assert_eq!(
        tree(&root),
        vec![
            "the_band",
            "the_band/cover_art.jpg",
            "the_band/live_2019",
            "the_band/live_2019/disc_1",
            "the_band/live_2019/disc_1/01_intro.mp3",
        ]
    );
    assert_eq!(context.report.stats().renamed, 5);
    assert_eq!(context.report.stats().failed, 0);
    assert!(root.is_dir(), "start directory is kept unless requested");
}

#[test]
fn test_start_directory_converted_last() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path().join("ROOT");
    create_dir_all(root.join("A/B")).unwrap();

    let settings = Settings {
        case: CaseMode::Lower,
        convert_start_directory: true,
        ..Settings::default()
    };

    let context = process_tree(options(&root, settings)).unwrap();

    let renamed: Vec<PathBuf> = context
        .report
        .outcomes()
        .iter()
        .filter_map(|outcome| match outcome {
            RenameOutcome::Renamed { from, .. } => Some(from.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(renamed, vec![root.join("A/B"), root.join("A"), root.clone()]);
    assert!(temp_dir.path().join("root/a/b").is_dir());
}

#[test]
fn test_second_run_renames_nothing() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path();
    create_dir_all(root.join("Some Dir/Other-Dir (1)")).unwrap();
    File::create(root.join("Some Dir/A File.TXT")).unwrap();

    let settings = Settings {
        case: CaseMode::CapWords,
        patterns: vec![r"\(\d+\)".to_string()],
        remove_punctuation: PunctuationMode::SafeSubset,
        separator: Some(SeparatorPair::new("-", " ")),
        include_files: true,
        ..Settings::default()
    };

    let first = process_tree(options(root, settings.clone())).unwrap();
    assert!(first.report.stats().renamed > 0);
    let after_first = tree(root);

    let second = process_tree(options(root, settings)).unwrap();
    assert_eq!(second.report.stats().renamed, 0);
    assert_eq!(second.report.stats().failed, 0);
    assert_eq!(tree(root), after_first);
}

#[test]
fn test_existing_destination_fails_only_that_entry() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path();
    create_dir_all(root.join("Photos/Inner Dir")).unwrap();
    create_dir_all(root.join("photos")).unwrap();
    create_dir_all(root.join("Videos")).unwrap();

    // On a case-insensitive filesystem "Photos" and "photos" are one directory.
    if fs::read_dir(root).unwrap().count() == 2 {
        return;
    }

    let settings = Settings {
        case: CaseMode::Lower,
        ..Settings::default()
    };

    let context = process_tree(options(root, settings)).unwrap();

    assert_eq!(context.report.stats().failed, 1);
    assert!(root.join("Photos").is_dir());
    assert!(root.join("Photos/inner dir").is_dir(), "subtree is converted first");
    assert!(root.join("videos").is_dir(), "siblings keep being converted");
}

#[test]
fn test_illegal_separator_aborts_before_any_rename() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path();
    create_dir_all(root.join("Some Dir")).unwrap();
    let before = tree(root);

    let settings = Settings {
        case: CaseMode::Lower,
        separator: Some(SeparatorPair::new(" ", "/")),
        ..Settings::default()
    };

    let error = process_tree(options(root, settings)).unwrap_err();
    assert!(error.to_string().contains("not allowed"));
    assert_eq!(tree(root), before);
}

#[test]
fn test_malformed_pattern_aborts_before_any_rename() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path();
    create_dir_all(root.join("UPPER")).unwrap();

    let settings = Settings {
        case: CaseMode::Lower,
        patterns: vec!["(unclosed".to_string()],
        ..Settings::default()
    };

    let error = process_tree(options(root, settings)).unwrap_err();
    assert!(error.to_string().contains("(unclosed"));
    assert!(root.join("UPPER").is_dir());
}

#[test]
fn test_renamer_with_local_filesystem_skips_files_by_default() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path();
    create_dir_all(root.join("Dir")).unwrap();
    File::create(root.join("File.TXT")).unwrap();

    let config = Settings {
        case: CaseMode::Upper,
        ..Settings::default()
    }
    .compile()
    .unwrap();

    let report = TraversalRenamer::new(&config, &LocalFileSystem).run(root);

    assert_eq!(tree(root), vec!["DIR", "File.TXT"]);
    assert_eq!(report.stats().renamed, 1);
}

#[cfg(unix)]
#[test]
fn test_symlinked_directory_is_renamed_with_directory_rules() {
    use std::os::unix::fs::symlink;

    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path();
    create_dir_all(root.join("Real Dir/Inner")).unwrap();
    symlink("Real Dir", root.join("Link.Dir")).unwrap();

    let config = Settings {
        case: CaseMode::Lower,
        remove_punctuation: PunctuationMode::All,
        ..Settings::default()
    }
    .compile()
    .unwrap();

    let report = TraversalRenamer::new(&config, &LocalFileSystem).run(root);

    let mut names: Vec<String> = fs::read_dir(root)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(names, vec!["linkdir", "real dir"]);
    assert!(fs::symlink_metadata(root.join("linkdir")).unwrap().file_type().is_symlink());
    assert!(root.join("real dir/inner").is_dir());
    // The link is not entered, so "Inner" is converted exactly once.
    assert_eq!(report.stats().renamed, 3);
    assert_eq!(report.stats().failed, 0);
}
