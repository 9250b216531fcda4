//! Velocity array literal generation from `<code> <name>` rows, e.g. language selectors:
//!
//! ```text
//! en English
//! fr French
//! ```
//!
//! becomes `#set($langauges = ["--Select--","English-en","French-fr"])`.
use std::{io::BufRead, path::Path};

use itertools::Itertools;

use crate::{error::Error, io};

pub const DEFAULT_VARIABLE: &str = "langauges";
pub const DEFAULT_PLACEHOLDER: &str = "--Select--";

/// Read `<code> <name>` rows. The name is the rest of the line, so it may contain spaces.
pub fn read_rows<R: BufRead>(reader: R, path: &Path) -> Result<Vec<(String, String)>, Error> {
    let mut rows = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| Error::from_io(path, e))?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (code, name) = line
            .split_once(char::is_whitespace)
            .ok_or_else(|| Error::malformed(path, idx + 1, "expected two columns"))?;
        rows.push((code.to_string(), name.trim().to_string()));
    }
    Ok(rows)
}

/// Render `rows` as a quoted, comma separated `#set` array, `placeholder` first.
pub fn render(rows: &[(String, String)], variable: &str, placeholder: &str) -> String {
    let items = std::iter::once(format!("\"{}\"", placeholder))
        .chain(rows.iter().map(|(code, name)| format!("\"{}-{}\"", name, code)))
        .join(",");
    format!("#set(${} = [{}])", variable, items)
}

pub fn render_file(src: &Path, variable: &str, placeholder: &str) -> Result<String, Error> {
    let rows = read_rows(io::open(src)?, src)?;
    Ok(render(&rows, variable, placeholder))
}
