/*! Topic-document ranking

Works on the document-topic output of a topic model (LDA and friends):
a whitespace-delimited matrix where each row is a document and each column a topic.

For each topic, documents are ranked by decreasing probability and the top ones are
copied into a per-topic folder, using an index mapping document ids to file names.
!*/
use std::{
    collections::{BTreeMap, HashMap},
    io::{BufRead, Write},
    path::{Path, PathBuf},
};

use itertools::Itertools;
use log::{debug, info};

use crate::{error::Error, io};

pub const DEFAULT_TOP_N: usize = 10;

/// Ranked documents for each topic: `topic id -> [(document id, probability)]`.
pub type Ranking = BTreeMap<usize, Vec<(usize, f64)>>;

/// Finite and within `[0, 1]`. NaN fails both checks.
fn is_probability(p: f64) -> bool {
    (0.0..=1.0).contains(&p)
}

/// Document-topic probabilities. Row `i` holds the topic distribution of document `i`.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilityMatrix {
    rows: Vec<Vec<f64>>,
    nb_topics: usize,
}

impl ProbabilityMatrix {
    /// Build a matrix from in-memory rows, validated like parsed ones.
    ///
    /// Errors are located at `<rows>`, row `i` being line `i + 1`.
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self, Error> {
        let path = Path::new("<rows>");
        let nb_topics = rows.first().map(Vec::len).unwrap_or(0);
        for (idx, row) in rows.iter().enumerate() {
            if row.len() != nb_topics {
                return Err(Error::malformed(
                    path,
                    idx + 1,
                    format!("expected {} topics, got {}", nb_topics, row.len()),
                ));
            }
            if let Some(p) = row.iter().find(|p| !is_probability(**p)) {
                return Err(Error::malformed(path, idx + 1, format!("invalid probability {}", p)));
            }
        }
        Ok(Self { rows, nb_topics })
    }

    /// Parse a matrix. Blank lines are skipped, `path` is used to locate errors.
    pub fn from_reader<R: BufRead>(reader: R, path: &Path) -> Result<Self, Error> {
        let mut rows = Vec::new();
        let mut nb_topics = None;

        for (idx, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| Error::from_io(path, e))?;
            let lineno = idx + 1;
            if line.trim().is_empty() {
                continue;
            }

            let row = line
                .split_whitespace()
                .map(|cell| match cell.parse::<f64>() {
                    Ok(p) if is_probability(p) => Ok(p),
                    _ => Err(Error::malformed(
                        path,
                        lineno,
                        format!("invalid probability {:?}", cell),
                    )),
                })
                .collect::<Result<Vec<_>, _>>()?;

            match nb_topics {
                None => nb_topics = Some(row.len()),
                Some(n) if n != row.len() => {
                    return Err(Error::malformed(
                        path,
                        lineno,
                        format!("expected {} topics, got {}", n, row.len()),
                    ))
                }
                _ => (),
            }
            rows.push(row);
        }

        Ok(Self {
            rows,
            nb_topics: nb_topics.unwrap_or(0),
        })
    }

    pub fn from_path(path: &Path) -> Result<Self, Error> {
        Self::from_reader(io::open(path)?, path)
    }

    pub fn nb_documents(&self) -> usize {
        self.rows.len()
    }

    pub fn nb_topics(&self) -> usize {
        self.nb_topics
    }

    /// Get the `n` most probable documents of `topic`, most probable first.
    /// Ties are broken by document id.
    pub fn top_documents(&self, topic: usize, n: usize) -> Result<Vec<(usize, f64)>, Error> {
        if topic >= self.nb_topics {
            return Err(Error::TopicNotFound(topic));
        }

        Ok(self
            .rows
            .iter()
            .map(|row| row[topic])
            .enumerate()
            .sorted_by(|(id_a, prob_a), (id_b, prob_b)| {
                prob_b.total_cmp(prob_a).then(id_a.cmp(id_b))
            })
            .take(n)
            .collect())
    }

    /// Rank documents for every topic.
    pub fn rank(&self, n: usize) -> Result<Ranking, Error> {
        (0..self.nb_topics)
            .map(|topic| Ok((topic, self.top_documents(topic, n)?)))
            .collect()
    }
}

/// Document id to file name mapping.
///
/// One `<id> <file name>` pair per line. The file name is the rest of the line, trimmed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DocumentIndex {
    files: HashMap<usize, String>,
}

impl DocumentIndex {
    pub fn from_reader<R: BufRead>(reader: R, path: &Path) -> Result<Self, Error> {
        let mut files = HashMap::new();
        for (idx, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| Error::from_io(path, e))?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let (id, filename) = line
                .split_once(char::is_whitespace)
                .ok_or_else(|| Error::malformed(path, idx + 1, "missing file name"))?;
            let id = id
                .parse()
                .map_err(|_| Error::malformed(path, idx + 1, format!("invalid id {:?}", id)))?;
            files.insert(id, filename.trim().to_string());
        }
        Ok(Self { files })
    }

    pub fn from_path(path: &Path) -> Result<Self, Error> {
        Self::from_reader(io::open(path)?, path)
    }

    pub fn get(&self, id: usize) -> Option<&str> {
        self.files.get(&id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Write the ranking as `<topic>\t<rank>\t<document id>\t<probability>` lines, ranks starting at 1.
pub fn write_ranking<W: Write>(ranking: &Ranking, mut w: W) -> Result<(), Error> {
    for (topic, docs) in ranking {
        for (rank, (doc, prob)) in docs.iter().enumerate() {
            writeln!(w, "{}\t{}\t{}\t{}", topic, rank + 1, doc, prob)?;
        }
    }
    w.flush()?;
    Ok(())
}

/// Copy ranked documents from `src` into `dst/<topic>/`, and write `dst/ranking.tsv`.
///
/// Returns the number of copied files.
pub fn copy_top_documents(
    ranking: &Ranking,
    index: &DocumentIndex,
    src: &Path,
    dst: &Path,
) -> Result<usize, Error> {
    io::create_dir_all(dst)?;
    let mut nb_copied = 0;

    for (topic, docs) in ranking {
        let topic_dir: PathBuf = dst.join(topic.to_string());
        io::create_dir_all(&topic_dir)?;
        debug!("[topic {}] copying {} documents", topic, docs.len());

        for (doc, _) in docs {
            let filename = index.get(*doc).ok_or(Error::DocumentNotFound(*doc))?;
            io::copy(&src.join(filename), &topic_dir.join(filename))?;
            nb_copied += 1;
        }
    }

    let ranking_path = dst.join("ranking.tsv");
    let out = io::create(&ranking_path)?;
    write_ranking(ranking, out).map_err(|e| match e {
        Error::Stream(e) => Error::from_io(&ranking_path, e),
        e => e,
    })?;

    info!("copied {} documents for {} topics", nb_copied, ranking.len());
    Ok(nb_copied)
}
