/*! Entity-based recommendation

Given a topic, find the documents of that topic mentioning an entity.

Topic documents are listed in a tab-delimited file, one candidate per row:

```text
<topic id>	<file name>	<url>
```

Matching documents are written as `<file name>\t<url>` lines.
!*/
use std::{
    io::{Read, Write},
    path::Path,
};

use log::{debug, info};

use crate::{error::Error, io};

/// A document of a topic, and where it comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub filename: String,
    pub url: String,
}

/// Get the candidates of `topic`, in file order.
///
/// Fails with [Error::TopicNotFound] if no row belongs to `topic`.
pub fn candidates<R: Read>(
    reader: R,
    topic: usize,
    path: &Path,
) -> Result<Vec<Candidate>, Error> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(reader);

    let mut found = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let line = record.position().map(|p| p.line() as usize).unwrap_or(0);

        let id = record.get(0).unwrap_or_default().trim();
        if id.is_empty() {
            continue;
        }
        let id: usize = id
            .parse()
            .map_err(|_| Error::malformed(path, line, format!("invalid topic id {:?}", id)))?;
        if id != topic {
            continue;
        }

        let filename = record
            .get(1)
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .ok_or_else(|| Error::malformed(path, line, "missing file name"))?;
        let url = record.get(2).map(str::trim).unwrap_or_default();

        found.push(Candidate {
            filename: filename.to_string(),
            url: url.to_string(),
        });
    }

    if found.is_empty() {
        return Err(Error::TopicNotFound(topic));
    }
    Ok(found)
}

/// Write candidates whose content (read from `src`) contains `entity`. Returns the number of matches.
pub fn recommend<W: Write>(
    candidates: &[Candidate],
    src: &Path,
    entity: &str,
    out: &mut W,
) -> Result<usize, Error> {
    let mut nb_matches = 0;
    for candidate in candidates {
        let content = io::read_to_string(&src.join(&candidate.filename))?;
        if content.contains(entity) {
            debug!("{} mentions {:?}", candidate.filename, entity);
            writeln!(out, "{}\t{}", candidate.filename, candidate.url)?;
            nb_matches += 1;
        }
    }
    out.flush()?;
    info!(
        "{}/{} documents mention {:?}",
        nb_matches,
        candidates.len(),
        entity
    );
    Ok(nb_matches)
}
