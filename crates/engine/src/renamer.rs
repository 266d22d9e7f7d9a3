//! Renames `<Prefix>_<rest>.jpg` entries to `<prefix>.jpg`.
//!
//! The directory is read in full before anything is renamed. Two sources that
//! map to the same target are renamed in directory order, so the later one
//! replaces the earlier one. The first failing rename stops the pass.

use crate::config::Config;
use crate::error::{EngineError, Result};
use crate::report::{RenameOp, RenameOutcome, RenameRecord};
use log::{debug, info, warn};
use std::ffi::OsStr;
use std::fs;
use std::path::Path;

/// Tidy name for `file_name`, or `None` when its extension is not `extension`.
///
/// The prefix is the file stem up to the first `separator`, lowercased. A stem
/// without a separator is used whole.
///
/// ```
/// use jpgtidy_engine::renamer::target_name;
///
/// assert_eq!(target_name("IMG_0042.jpg", "jpg", '_').as_deref(), Some("img.jpg"));
/// assert_eq!(target_name("Photo.jpg", "jpg", '_').as_deref(), Some("photo.jpg"));
/// assert_eq!(target_name("Photo.JPG", "jpg", '_'), None);
/// ```
#[must_use]
pub fn target_name(file_name: &str, extension: &str, separator: char) -> Option<String> {
    let path = Path::new(file_name);
    if path.extension()? != OsStr::new(extension) {
        return None;
    }
    let stem = path.file_stem()?.to_str()?;
    let prefix = stem.split(separator).next().unwrap_or_default();
    Some(format!("{}.{extension}", prefix.to_lowercase()))
}

/// Computes every rename the directory in `config` calls for, in directory order.
///
/// Directories are never part of the plan. Entries whose names are not valid
/// UTF-8 are skipped with a warning.
///
/// # Errors
///
/// Fails if the directory or one of its entries cannot be read.
pub fn plan_renames(config: &Config) -> Result<Vec<RenameOp>> {
    let dir = config.dir.as_path();
    let entries = fs::read_dir(dir).map_err(|source| EngineError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let ext = OsStr::new(&config.extension);
    let mut plan = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| EngineError::ReadEntry {
            path: dir.to_path_buf(),
            source,
        })?;
        let name = entry.file_name();
        if Path::new(&name).extension() != Some(ext) {
            continue;
        }

        let from = dir.join(&name);
        if fs::metadata(&from).is_ok_and(|m| m.is_dir()) {
            debug!("skipping directory {}", from.display());
            continue;
        }

        let Some(new_name) = name
            .to_str()
            .and_then(|n| target_name(n, &config.extension, config.separator))
        else {
            warn!("skipping {}: name is not valid UTF-8", from.display());
            continue;
        };

        let to = dir.join(new_name);
        debug!("planned {} -> {}", from.display(), to.display());
        plan.push(RenameOp { from, to });
    }

    Ok(plan)
}

/// Applies the plan from [`plan_renames`], or only reports it on a dry run.
///
/// # Errors
///
/// Fails if the directory cannot be read or a rename fails. Renames after the
/// failing one are not attempted.
pub fn rename_all(config: &Config) -> Result<Vec<RenameRecord>> {
    let plan = plan_renames(config)?;
    let mut records = Vec::with_capacity(plan.len());

    for op in plan {
        let outcome = if op.from == op.to {
            RenameOutcome::Unchanged
        } else if config.dry_run {
            RenameOutcome::Planned
        } else {
            fs::rename(&op.from, &op.to).map_err(|source| EngineError::Rename {
                from: op.from.clone(),
                to: op.to.clone(),
                source,
            })?;
            info!("renamed {} -> {}", op.from.display(), op.to.display());
            RenameOutcome::Renamed
        };
        records.push(RenameRecord { op, outcome });
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::BTreeSet;
    use tempfile::TempDir;

    fn names(dir: &Path) -> BTreeSet<String> {
        fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect()
    }

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn target_name_cases() {
        let cases = [
            ("X_Y.jpg", Some("x.jpg")),
            ("Photo.jpg", Some("photo.jpg")),
            ("photo.jpg", Some("photo.jpg")),
            ("A_B_C.jpg", Some("a.jpg")),
            ("a.b_c.jpg", Some("a.b.jpg")),
            ("_lead.jpg", Some(".jpg")),
            ("ÉTÉ_1.jpg", Some("été.jpg")),
            ("X_Y.JPG", None),
            ("X_Y.jpeg", None),
            ("X_Y.png", None),
            ("X_Y", None),
            (".jpg", None),
        ];
        for (input, expected) in cases {
            assert_eq!(
                target_name(input, "jpg", '_').as_deref(),
                expected,
                "input: {input}"
            );
        }
    }

    #[test]
    fn target_name_honours_custom_extension_and_separator() {
        assert_eq!(
            target_name("Shot-01.png", "png", '-').as_deref(),
            Some("shot.png")
        );
        assert_eq!(target_name("Shot-01.jpg", "png", '-'), None);
    }

    #[test]
    fn renames_jpg_files_and_leaves_the_rest() {
        let tmp = TempDir::new().unwrap();
        for name in ["X_Y.jpg", "Photo.jpg", "notes.txt", "Keep_Me.png", "UPPER.JPG"] {
            fs::write(tmp.path().join(name), name).unwrap();
        }

        let records = rename_all(&Config::new(tmp.path())).unwrap();

        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.outcome == RenameOutcome::Renamed));
        assert_eq!(
            names(tmp.path()),
            set(&["x.jpg", "photo.jpg", "notes.txt", "Keep_Me.png", "UPPER.JPG"])
        );
        assert_eq!(
            fs::read_to_string(tmp.path().join("x.jpg")).unwrap(),
            "X_Y.jpg"
        );
    }

    #[test]
    fn directories_are_not_renamed() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("Album_2020.jpg")).unwrap();

        let records = rename_all(&Config::new(tmp.path())).unwrap();

        assert!(records.is_empty());
        assert_eq!(names(tmp.path()), set(&["Album_2020.jpg"]));
    }

    #[test]
    fn second_run_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("Beach_01.jpg"), b"").unwrap();
        let config = Config::new(tmp.path());

        rename_all(&config).unwrap();
        let after_first = names(tmp.path());
        let records = rename_all(&config).unwrap();

        assert_eq!(names(tmp.path()), after_first);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].outcome, RenameOutcome::Unchanged);
    }

    #[test]
    fn colliding_targets_collapse_to_one_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("Cat_1.jpg"), b"1").unwrap();
        fs::write(tmp.path().join("cat_2.jpg"), b"2").unwrap();

        let records = rename_all(&Config::new(tmp.path())).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(names(tmp.path()), set(&["cat.jpg"]));
        // The survivor is whichever source came last in directory order.
        let last = records.last().unwrap();
        let expected = if last.op.from.ends_with("Cat_1.jpg") { "1" } else { "2" };
        assert_eq!(
            fs::read_to_string(tmp.path().join("cat.jpg")).unwrap(),
            expected
        );
    }

    #[test]
    fn dry_run_plans_without_touching_the_directory() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("Dog_3.jpg"), b"").unwrap();
        fs::write(tmp.path().join("dog.jpg"), b"").unwrap();
        let mut config = Config::new(tmp.path());
        config.dry_run = true;

        let records = rename_all(&config).unwrap();

        assert_eq!(names(tmp.path()), set(&["Dog_3.jpg", "dog.jpg"]));
        let planned: Vec<_> = records
            .iter()
            .filter(|r| r.outcome == RenameOutcome::Planned)
            .collect();
        assert_eq!(planned.len(), 1);
        assert_eq!(planned[0].op.to, tmp.path().join("dog.jpg"));
    }

    #[test]
    fn missing_directory_fails() {
        let tmp = TempDir::new().unwrap();
        let err = rename_all(&Config::new(tmp.path().join("missing"))).unwrap_err();
        assert!(matches!(err, EngineError::ReadDir { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn failed_rename_reports_both_paths() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("locked");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("Frozen_1.jpg"), b"").unwrap();
        fs::set_permissions(&dir, fs::Permissions::from_mode(0o555)).unwrap();

        let result = rename_all(&Config::new(&dir));
        fs::set_permissions(&dir, fs::Permissions::from_mode(0o755)).unwrap();

        // Root ignores directory permissions; only check the error shape when it fails.
        if let Err(err) = result {
            match err {
                EngineError::Rename { from, to, .. } => {
                    assert_eq!(from, dir.join("Frozen_1.jpg"));
                    assert_eq!(to, dir.join("frozen.jpg"));
                }
                other => panic!("unexpected error: {other}"),
            }
        }
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn non_utf8_names_are_left_alone() {
        use std::os::unix::ffi::OsStrExt;

        let tmp = TempDir::new().unwrap();
        let bad = OsStr::from_bytes(b"Bad\xff_1.jpg");
        fs::write(tmp.path().join(bad), b"").unwrap();
        fs::write(tmp.path().join("Ok_1.jpg"), b"").unwrap();

        let records = rename_all(&Config::new(tmp.path())).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].op.to, tmp.path().join("ok.jpg"));
        assert!(tmp.path().join(bad).is_file());
        assert!(tmp.path().join("ok.jpg").is_file());
    }

    proptest! {
        #[test]
        fn target_prefix_is_lowercase_and_separator_free(stem in "[A-Za-z0-9_ ]{1,16}") {
            let name = format!("{stem}.jpg");
            let target = target_name(&name, "jpg", '_').unwrap();
            let prefix = target.strip_suffix(".jpg").unwrap();
            prop_assert!(!prefix.contains('_'));
            prop_assert!(!prefix.chars().any(char::is_uppercase));
            prop_assert!(stem.to_lowercase().starts_with(prefix));
        }
    }
}
