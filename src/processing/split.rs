/*! splitting

Split a file holding several concatenated documents into one file per document.
Documents are separated by one or more blank (empty or whitespace-only) lines.
!*/
use std::{
    io::Write,
    path::{Path, PathBuf},
};

use log::{debug, info};

use crate::{error::Error, io};

/// Split `text` on blank lines. Each kept line is terminated by `\n`.
pub fn split_documents(text: &str) -> Vec<String> {
    let mut documents = Vec::new();
    let mut current = String::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                documents.push(std::mem::take(&mut current));
            }
            continue;
        }
        current.push_str(line);
        current.push('\n');
    }

    if !current.is_empty() {
        documents.push(current);
    }

    documents
}

/// Split `src` into `dst/<prefix><n>.txt` files, `n` starting at 1.
///
/// `dst` is created if it does not exist. Returns the paths of the written files, in order.
pub fn split_file(src: &Path, dst: &Path, prefix: &str) -> Result<Vec<PathBuf>, Error> {
    let text = io::read_to_string(src)?;
    io::create_dir_all(dst)?;

    let documents = split_documents(&text);
    let mut written = Vec::with_capacity(documents.len());

    for (idx, document) in documents.iter().enumerate() {
        let path = dst.join(format!("{}{}.txt", prefix, idx + 1));
        debug!("writing {:?} ({} bytes)", path, document.len());
        let mut out = io::create(&path)?;
        out.write_all(document.as_bytes())
            .and_then(|_| out.flush())
            .map_err(|e| Error::from_io(&path, e))?;
        written.push(path);
    }

    info!("split {:?} into {} documents", src, written.len());
    Ok(written)
}
