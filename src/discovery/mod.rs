//! Assembly discovery
//!
//! Resolves explicit paths and directory walks into the ordered list of
//! assemblies a run is seeded with.

use anyhow::{bail, Context, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::models::Assembly;

/// Collect assemblies from explicit paths plus an optional directory walk.
///
/// Explicit paths must exist; a missing one is a setup error. Walk results
/// are sorted by path so a run's input order is deterministic.
pub fn resolve_assemblies(
    paths: &[PathBuf],
    dir: Option<&Path>,
    pattern: &str,
) -> Result<Vec<Assembly>> {
    let mut assemblies = Vec::new();

    for path in paths {
        if !path.is_file() {
            bail!("assembly not found: {}", path.display());
        }
        assemblies.push(Assembly::new(path.clone()));
    }

    if let Some(dir) = dir {
        assemblies.extend(find_assemblies(dir, pattern)?);
    }

    Ok(assemblies)
}

/// Walk `dir` recursively and collect files whose names match `pattern`.
///
/// Symlinked directories are not followed.
pub fn find_assemblies(dir: &Path, pattern: &str) -> Result<Vec<Assembly>> {
    let mut paths = Vec::new();
    walk(dir, pattern, &mut paths)
        .with_context(|| format!("failed to scan {}", dir.display()))?;
    paths.sort();
    Ok(paths.into_iter().map(Assembly::new).collect())
}

fn walk(dir: &Path, pattern: &str, out: &mut Vec<PathBuf>) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        // file_type() does not follow symlinks, so linked directories are
        // skipped rather than walked.
        let file_type = entry.file_type()?;
        let path = entry.path();

        if file_type.is_dir() {
            walk(&path, pattern, out)?;
        } else if file_type.is_file()
            && matches_pattern(&entry.file_name().to_string_lossy(), pattern)
        {
            out.push(path);
        }
    }
    Ok(())
}

/// Case-sensitive wildcard match: `*` matches any run of characters, `?`
/// matches exactly one.
pub fn matches_pattern(name: &str, pattern: &str) -> bool {
    let name: Vec<char> = name.chars().collect();
    let pat: Vec<char> = pattern.chars().collect();

    let (mut n, mut p) = (0, 0);
    let mut star: Option<(usize, usize)> = None;

    while n < name.len() {
        if p < pat.len() && (pat[p] == name[n] || pat[p] == '?') {
            n += 1;
            p += 1;
        } else if p < pat.len() && pat[p] == '*' {
            star = Some((p, n));
            p += 1;
        } else if let Some((star_p, star_n)) = star {
            // Backtrack: let the last `*` absorb one more character.
            p = star_p + 1;
            n = star_n + 1;
            star = Some((star_p, star_n + 1));
        } else {
            return false;
        }
    }

    while p < pat.len() && pat[p] == '*' {
        p += 1;
    }
    p == pat.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        File::create(dir.join(name)).expect("create file");
    }

    #[test]
    fn pattern_matching() {
        assert!(matches_pattern("suite-a.tests", "*.tests"));
        assert!(matches_pattern("suite-a.tests", "suite-*"));
        assert!(matches_pattern("suite-a.tests", "*"));
        assert!(matches_pattern("suite-1.tests", "suite-?.tests"));
        assert!(!matches_pattern("suite-a.tests", "*.dll"));
        assert!(!matches_pattern("suite-a.tests", "suite-??.tests"));
        assert!(!matches_pattern("readme", "*.tests"));
    }

    #[test]
    fn pattern_is_case_sensitive() {
        assert!(!matches_pattern("Suite.Tests", "*.tests"));
    }

    #[test]
    fn walk_finds_nested_matches_sorted() {
        let dir = TempDir::new().expect("tempdir");
        touch(dir.path(), "b.tests");
        touch(dir.path(), "notes.txt");
        let nested = dir.path().join("nested");
        fs::create_dir(&nested).expect("mkdir");
        touch(&nested, "a.tests");

        let found = find_assemblies(dir.path(), "*.tests").expect("scan");
        let names: Vec<_> = found.iter().map(Assembly::name).collect();
        assert_eq!(names, ["b.tests", "a.tests"]);

        let paths: Vec<_> = found.iter().map(|a| a.path().to_path_buf()).collect();
        let mut sorted = paths.clone();
        sorted.sort();
        assert_eq!(paths, sorted);
    }

    #[test]
    fn missing_explicit_path_is_an_error() {
        let result = resolve_assemblies(&[PathBuf::from("/nope/suite.tests")], None, "*");
        assert!(result.is_err());
    }

    #[test]
    fn explicit_paths_come_before_scanned_ones() {
        let dir = TempDir::new().expect("tempdir");
        touch(dir.path(), "scanned.tests");
        let explicit = dir.path().join("explicit.tests");
        File::create(&explicit).expect("create file");

        let found =
            resolve_assemblies(&[explicit.clone()], Some(dir.path()), "scanned.*").expect("resolve");
        let names: Vec<_> = found.iter().map(Assembly::name).collect();
        assert_eq!(names, ["explicit.tests", "scanned.tests"]);
    }

    #[test]
    fn missing_scan_dir_is_an_error() {
        let result = find_assemblies(Path::new("/no/such/dir"), "*");
        assert!(result.is_err());
    }
}
