//! Error enum
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum Error {
    NotFound(PathBuf),
    PermissionDenied(PathBuf),
    Io(PathBuf, std::io::Error),
    /// Unlocated IO error (stdout, in-memory writers...)
    Stream(std::io::Error),
    Malformed {
        path: PathBuf,
        line: usize,
        reason: String,
    },
    /// Search index answer that cannot be turned into a page of results.
    MalformedResponse(String),
    /// Unusable command line parameter.
    InvalidParameter(String),
    TopicNotFound(usize),
    DocumentNotFound(usize),
    Search(reqwest::Error),
    Url(url::ParseError),
    Serde(serde_json::Error),
    Csv(csv::Error),
    Glob(glob::GlobError),
    GlobPattern(glob::PatternError),
    Custom(String),
}

impl Error {
    /// Attach `path` to an IO error, classifying missing files and permission problems.
    pub fn from_io(path: &Path, e: std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::NotFound => Error::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => Error::PermissionDenied(path.to_path_buf()),
            _ => Error::Io(path.to_path_buf(), e),
        }
    }

    pub fn malformed(path: &Path, line: usize, reason: impl Into<String>) -> Self {
        Error::Malformed {
            path: path.to_path_buf(),
            line,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotFound(p) => write!(f, "file not found: {}", p.display()),
            Error::PermissionDenied(p) => write!(f, "permission denied: {}", p.display()),
            Error::Io(p, e) => write!(f, "io error on {}: {}", p.display(), e),
            Error::Stream(e) => write!(f, "io error: {}", e),
            Error::Malformed { path, line, reason } => {
                write!(f, "malformed input {}:{}: {}", path.display(), line, reason)
            }
            Error::MalformedResponse(s) => write!(f, "malformed search response: {}", s),
            Error::InvalidParameter(s) => write!(f, "invalid parameter: {}", s),
            Error::TopicNotFound(t) => write!(f, "topic {} not found", t),
            Error::DocumentNotFound(d) => write!(f, "document {} not found in index", d),
            Error::Search(e) => write!(f, "search index error: {}", e),
            Error::Url(e) => write!(f, "invalid url: {}", e),
            Error::Serde(e) => write!(f, "invalid search response: {}", e),
            Error::Csv(e) => write!(f, "delimited file error: {}", e),
            Error::Glob(e) => write!(f, "{}", e),
            Error::GlobPattern(e) => write!(f, "invalid pattern: {}", e),
            Error::Custom(s) => write!(f, "{}", s),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Stream(e)
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Error {
        Error::Search(e)
    }
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Error {
        Error::Url(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Error {
        Error::Csv(e)
    }
}

impl From<glob::GlobError> for Error {
    fn from(e: glob::GlobError) -> Error {
        Error::Glob(e)
    }
}

impl From<glob::PatternError> for Error {
    fn from(e: glob::PatternError) -> Error {
        Error::GlobPattern(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}

#[cfg(test)]
mod tests {
    use std::io::ErrorKind;
    use std::path::Path;

    use super::Error;

    #[test]
    fn classify_io() {
        let p = Path::new("foo.txt");
        let e = Error::from_io(p, std::io::Error::from(ErrorKind::NotFound));
        assert!(matches!(e, Error::NotFound(ref x) if x == p));

        let e = Error::from_io(p, std::io::Error::from(ErrorKind::PermissionDenied));
        assert!(matches!(e, Error::PermissionDenied(_)));

        let e = Error::from_io(p, std::io::Error::from(ErrorKind::UnexpectedEof));
        assert!(matches!(e, Error::Io(_, _)));
    }

    #[test]
    fn display_malformed() {
        let e = Error::malformed(Path::new("m.txt"), 3, "bad float");
        assert_eq!(e.to_string(), "malformed input m.txt:3: bad float");
    }
}
