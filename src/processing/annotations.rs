/*! Annotation checking

Pre-processed corpora mark named entities with underscore-prefixed tokens (`_person`, `_location`...).
Such tokens left standing as plain columns of tab-delimited files are broken annotations:
this module reports them and counts them.
!*/
use std::{
    io::{BufRead, Write},
    path::{Path, PathBuf},
};

use log::{debug, info};

use crate::{error::Error, io};

pub const DEFAULT_PREFIX: &str = "_";

/// Write every token of `reader` starting with `prefix` into `report`, each followed by a tab.
///
/// Returns the number of flagged tokens.
pub fn check_reader<R: BufRead, W: Write>(
    reader: R,
    report: &mut W,
    prefix: &str,
) -> Result<usize, Error> {
    let mut nb_broken = 0;
    for line in reader.lines() {
        let line = line?;
        for token in line.trim_end_matches('\r').split('\t') {
            if token.starts_with(prefix) {
                write!(report, "{}\t", token)?;
                nb_broken += 1;
            }
        }
    }
    Ok(nb_broken)
}

/// Check each file of `paths` in order, appending broken tokens to `report`.
pub fn check_files(paths: &[PathBuf], report: &Path, prefix: &str) -> Result<usize, Error> {
    let mut out = io::append(report)?;
    let mut total = 0;
    for path in paths {
        let reader = io::open(path)?;
        // only reads can fail while gathering tokens in memory
        let mut broken = Vec::new();
        let nb_broken = check_reader(reader, &mut broken, prefix).map_err(|e| match e {
            Error::Stream(e) => Error::from_io(path, e),
            e => e,
        })?;
        out.write_all(&broken).map_err(|e| Error::from_io(report, e))?;
        debug!("{:?}: {} broken tokens", path, nb_broken);
        total += nb_broken;
    }
    out.flush().map_err(|e| Error::from_io(report, e))?;
    info!("{} broken tokens in {} files", total, paths.len());
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_prefixed() {
        let mut report = Vec::new();
        let n = check_reader("_person\tword\t_location".as_bytes(), &mut report, "_").unwrap();
        assert_eq!(n, 2);
        assert_eq!(String::from_utf8(report).unwrap(), "_person\t_location\t");
    }

    #[test]
    fn no_broken() {
        let mut report = Vec::new();
        let n = check_reader("a\tb\nc d\n".as_bytes(), &mut report, "_").unwrap();
        assert_eq!(n, 0);
        assert!(report.is_empty());
    }

    #[test]
    fn crlf_and_multiline() {
        let mut report = Vec::new();
        let n = check_reader("x\t_org\r\n_date\n".as_bytes(), &mut report, "_").unwrap();
        assert_eq!(n, 2);
        assert_eq!(String::from_utf8(report).unwrap(), "_org\t_date\t");
    }

    #[test]
    fn files_append() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.tsv");
        let b = dir.path().join("b.tsv");
        std::fs::write(&a, "_person\tword\n").unwrap();
        std::fs::write(&b, "_location\n").unwrap();
        let report = dir.path().join("report.txt");

        let n = check_files(&[a, b], &report, "_").unwrap();
        assert_eq!(n, 2);
        assert_eq!(
            std::fs::read_to_string(&report).unwrap(),
            "_person\t_location\t"
        );
    }

    #[test]
    fn unwritable_report() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.tsv");
        std::fs::write(&a, "_person\n").unwrap();
        // a folder cannot be opened as a report
        let report = dir.path().join("report");
        std::fs::create_dir(&report).unwrap();

        match check_files(&[a], &report, "_").unwrap_err() {
            Error::Io(p, _) | Error::PermissionDenied(p) => assert_eq!(p, report),
            e => panic!("unexpected error {:?}", e),
        }
    }

    #[test]
    fn unreadable_input_is_located() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.tsv");
        std::fs::write(&a, b"_ok\n\xff\xfe\n").unwrap();
        let report = dir.path().join("report.txt");

        match check_files(&[a.clone()], &report, "_").unwrap_err() {
            Error::Io(p, _) => assert_eq!(p, a),
            e => panic!("unexpected error {:?}", e),
        }
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let report = dir.path().join("report.txt");
        let err = check_files(&[dir.path().join("missing.tsv")], &report, "_").unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }
}
