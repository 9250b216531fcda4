/*! Named entity filtering

Keeps, for each group of a [GroupIndex], only the files that contain at least one entity tag.
Files are read in parallel, the resulting index keeps the original group and file order.
!*/
use std::path::Path;

use lazy_static::lazy_static;
use log::{debug, info};
use rayon::prelude::*;

use crate::{error::Error, io, io::GroupIndex};

lazy_static! {
    pub static ref DEFAULT_TAGS: Vec<String> = ["_person", "_location", "_organization"]
        .iter()
        .map(|t| t.to_string())
        .collect();
}

/// Does `text` contain any of `tags`?
pub fn contains_entity(text: &str, tags: &[String]) -> bool {
    tags.iter().any(|tag| text.contains(tag.as_str()))
}

/// Filter `index`, reading files from `src`. Groups left without files are dropped.
pub fn filter_index(
    index: &GroupIndex,
    src: &Path,
    tags: &[String],
) -> Result<GroupIndex, Error> {
    let mut filtered = GroupIndex::default();

    for (group, files) in index.iter() {
        let keep = files
            .par_iter()
            .map(|filename| {
                let text = io::read_to_string(&src.join(filename))?;
                Ok::<_, Error>(contains_entity(&text, tags))
            })
            .collect::<Result<Vec<bool>, Error>>()?;

        let kept: Vec<String> = files
            .iter()
            .zip(keep)
            .filter_map(|(f, k)| k.then(|| f.clone()))
            .collect();

        debug!("[group {}] kept {}/{} files", group, kept.len(), files.len());
        if !kept.is_empty() {
            filtered.insert(group, kept);
        }
    }

    info!(
        "kept {}/{} files in {}/{} groups",
        filtered.nb_files(),
        index.nb_files(),
        filtered.len(),
        index.len()
    );
    Ok(filtered)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tags() {
        assert!(contains_entity("met _person yesterday", &DEFAULT_TAGS));
        assert!(contains_entity("in _location_city", &DEFAULT_TAGS));
        assert!(!contains_entity("nobody here", &DEFAULT_TAGS));
        assert!(!contains_entity("anything", &[]));
    }

    #[test]
    fn filter() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.txt"), "x _person y").unwrap();
        std::fs::write(dir.path().join("b.txt"), "plain").unwrap();
        std::fs::write(dir.path().join("c.txt"), "_organization").unwrap();

        let mut index = GroupIndex::default();
        index.insert(0, vec!["b.txt".into(), "c.txt".into(), "a.txt".into()]);
        index.insert(1, vec!["b.txt".into()]);

        let filtered = filter_index(&index, dir.path(), &DEFAULT_TAGS).unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(
            filtered.get(0).unwrap(),
            &["c.txt".to_string(), "a.txt".to_string()]
        );
        assert!(filtered.get(1).is_none());
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut index = GroupIndex::default();
        index.insert(0, vec!["missing.txt".into()]);
        let err = filter_index(&index, dir.path(), &DEFAULT_TAGS).unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }
}
