//! Group index: maps a group (usually a topic) id to a list of file names.
//!
//! One group per line, tab separated:
//!
//! ```text
//! 0	doc_12.txt	doc_4.txt
//! 1	doc_7.txt
//! ```
use std::{
    collections::BTreeMap,
    io::{Read, Write},
    path::Path,
};

use crate::error::Error;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GroupIndex {
    groups: BTreeMap<usize, Vec<String>>,
}

impl GroupIndex {
    /// Parse an index. `path` is only used to locate errors.
    ///
    /// Lines sharing the same group id are merged, keeping file order.
    pub fn from_reader<R: Read>(reader: R, path: &Path) -> Result<Self, Error> {
        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .from_reader(reader);

        let mut index = Self::default();
        for record in rdr.records() {
            let record = record?;
            let line = record.position().map(|p| p.line() as usize).unwrap_or(0);

            let mut fields = record.iter();
            let group = fields.next().unwrap_or_default().trim();
            if group.is_empty() {
                continue;
            }
            let group: usize = group
                .parse()
                .map_err(|_| Error::malformed(path, line, format!("invalid group id {:?}", group)))?;

            let files = fields
                .map(str::trim)
                .filter(|f| !f.is_empty())
                .map(String::from);
            index.groups.entry(group).or_default().extend(files);
        }

        Ok(index)
    }

    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let reader = super::open(path)?;
        Self::from_reader(reader, path)
    }

    /// Write the index back in the same format, groups sorted by id.
    pub fn write_to<W: Write>(&self, writer: W) -> Result<(), Error> {
        let mut wtr = csv::WriterBuilder::new()
            .delimiter(b'\t')
            .flexible(true)
            .quote_style(csv::QuoteStyle::Never)
            .from_writer(writer);

        for (group, files) in &self.groups {
            let record = std::iter::once(group.to_string()).chain(files.iter().cloned());
            wtr.write_record(record)?;
        }
        wtr.flush()?;
        Ok(())
    }

    pub fn insert(&mut self, group: usize, files: Vec<String>) {
        self.groups.insert(group, files);
    }

    pub fn get(&self, group: usize) -> Option<&[String]> {
        self.groups.get(&group).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &[String])> {
        self.groups.iter().map(|(g, f)| (*g, f.as_slice()))
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of files across groups.
    pub fn nb_files(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }
}
