/*!
# IO utilities

Path-aware wrappers around [std::fs] so that failures name the file they happened on,
and the group index format shared by several tools.
!*/
mod index;
pub use index::GroupIndex;

use std::{
    fs::{File, OpenOptions},
    io::{BufReader, BufWriter},
    path::{Path, PathBuf},
};

use log::debug;

use crate::error::Error;

/// Open `path` for buffered reading.
pub fn open(path: &Path) -> Result<BufReader<File>, Error> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|e| Error::from_io(path, e))
}

pub fn read_to_string(path: &Path) -> Result<String, Error> {
    std::fs::read_to_string(path).map_err(|e| Error::from_io(path, e))
}

/// Create (or truncate) `path` for buffered writing.
pub fn create(path: &Path) -> Result<BufWriter<File>, Error> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|e| Error::from_io(path, e))
}

/// Open `path` in append mode, creating it if needed.
pub fn append(path: &Path) -> Result<BufWriter<File>, Error> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map(BufWriter::new)
        .map_err(|e| Error::from_io(path, e))
}

pub fn create_dir_all(path: &Path) -> Result<(), Error> {
    std::fs::create_dir_all(path).map_err(|e| Error::from_io(path, e))
}

/// Copy `src` into `dst`. A missing source is reported on `src`, other failures on `dst`.
pub fn copy(src: &Path, dst: &Path) -> Result<u64, Error> {
    debug!("copying {:?} to {:?}", src, dst);
    if !src.exists() {
        return Err(Error::NotFound(src.to_path_buf()));
    }
    std::fs::copy(src, dst).map_err(|e| Error::from_io(dst, e))
}

/// Expand each entry of `patterns` as a glob if it contains glob metacharacters,
/// keep it as a plain path otherwise.
///
/// A pattern matching nothing is reported as [Error::NotFound].
pub fn expand_globs(patterns: &[String]) -> Result<Vec<PathBuf>, Error> {
    let mut paths = Vec::new();
    for pattern in patterns {
        if !pattern.contains(&['*', '?', '['][..]) {
            paths.push(PathBuf::from(pattern));
            continue;
        }

        let matched = glob::glob(pattern)?.collect::<Result<Vec<_>, _>>()?;
        debug!("{} matched {} files", pattern, matched.len());
        if matched.is_empty() {
            return Err(Error::NotFound(PathBuf::from(pattern)));
        }
        paths.extend(matched);
    }
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use std::io::Read;

    use super::*;

    #[test]
    fn open_missing() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("nope.txt");
        assert!(matches!(open(&p), Err(Error::NotFound(x)) if x == p));
    }

    #[test]
    fn copy_missing_source() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("src.txt");
        let dst = dir.path().join("dst.txt");
        assert!(matches!(copy(&src, &dst), Err(Error::NotFound(_))));
    }

    #[test]
    fn append_twice() {
        use std::io::Write;
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("report.txt");
        for _ in 0..2 {
            let mut w = append(&p).unwrap();
            write!(w, "ab").unwrap();
        }
        let mut content = String::new();
        open(&p).unwrap().read_to_string(&mut content).unwrap();
        assert_eq!(content, "abab");
    }

    #[test]
    fn globs() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.tsv", "a.tsv", "c.txt"] {
            std::fs::write(dir.path().join(name), "").unwrap();
        }
        let pattern = format!("{}/*.tsv", dir.path().display());
        let paths = expand_globs(&[pattern]).unwrap();
        let names: Vec<_> = paths
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["a.tsv", "b.tsv"]);

        let none = format!("{}/*.json", dir.path().display());
        assert!(matches!(expand_globs(&[none]), Err(Error::NotFound(_))));

        // plain paths are kept as is, even if they do not exist
        let plain = expand_globs(&["plain.txt".to_string()]).unwrap();
        assert_eq!(plain, vec![PathBuf::from("plain.txt")]);
    }
}
