/*! Country name scraping

Pulls names out of a JSON-like dump (such as a countries list exported from a web API) without parsing it:
the text following each `"name"` key, up to the next `}`, is captured and cleaned from punctuation.
Inputs are often not valid JSON, hence the plain text scan.
!*/
use std::{io::Write, path::Path};

use log::info;

use crate::{error::Error, io};

pub const DEFAULT_KEY: &str = "name";

/// Remove quotes anywhere and punctuation/whitespace at both ends.
fn clean(raw: &str) -> String {
    raw.replace('"', "")
        .trim_matches(|c: char| c.is_ascii_punctuation() || c.is_whitespace())
        .to_string()
}

/// Get the names following each quoted `key` in `text`, in order of appearance.
pub fn scrape(text: &str, key: &str) -> Vec<String> {
    let needle = format!("\"{}\"", key);
    let mut names = Vec::new();
    let mut rest = text;

    while let Some(start) = rest.find(&needle) {
        let after = &rest[start + needle.len()..];
        let (raw, next) = match after.find('}') {
            Some(end) => (&after[..end], &after[end + 1..]),
            None => (after, ""),
        };

        let name = clean(raw);
        if !name.is_empty() {
            names.push(name);
        }
        rest = next;
    }

    names
}

/// Scrape `src` and write one name per line in `dst`. Returns the number of names.
pub fn scrape_file(src: &Path, dst: &Path, key: &str) -> Result<usize, Error> {
    let text = io::read_to_string(src)?;
    let names = scrape(&text, key);

    let mut out = io::create(dst)?;
    for name in &names {
        writeln!(out, "{}", name).map_err(|e| Error::from_io(dst, e))?;
    }
    out.flush().map_err(|e| Error::from_io(dst, e))?;

    info!("found {} names in {:?}", names.len(), src);
    Ok(names.len())
}
