/*! Search index paging

Walks through every result of a query against a search index, one page at a time.

The index is abstracted by [SearchIndex]. [SolrIndex] talks to a Solr-compatible `select` endpoint
(`q`, `start`, `rows` parameters, JSON response holding `numFound` and `docs`).
!*/
use log::{debug, info, log_enabled, Level};
use serde::Deserialize;
use serde_json::Value;
use url::Url;

use crate::error::Error;

pub const DEFAULT_ROWS: u64 = 10;
pub const DEFAULT_FIELD: &str = "id";

/// One page of results: identifiers, and the total number of matching documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub total: u64,
    pub ids: Vec<String>,
}

pub trait SearchIndex {
    /// Get `rows` results matching `filter`, skipping the first `start` ones.
    fn query(&self, filter: &str, start: u64, rows: u64) -> Result<Page, Error>;
}

#[derive(Deserialize)]
struct SelectResponse {
    response: SelectBody,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SelectBody {
    num_found: u64,
    #[serde(default)]
    docs: Vec<serde_json::Map<String, Value>>,
}

/// Parse a `select` JSON response, extracting `field` from each document.
pub fn parse_response(body: &str, field: &str) -> Result<Page, Error> {
    let resp: SelectResponse = serde_json::from_str(body)?;
    let ids = resp
        .response
        .docs
        .iter()
        .map(|doc| match doc.get(field) {
            Some(Value::String(s)) => Ok(s.clone()),
            Some(Value::Number(n)) => Ok(n.to_string()),
            // multivalued fields come as arrays
            Some(Value::Array(values)) if values.len() == 1 => match &values[0] {
                Value::String(s) => Ok(s.clone()),
                v => Ok(v.to_string()),
            },
            Some(v) => Err(Error::MalformedResponse(format!(
                "unexpected value for field {}: {}",
                field, v
            ))),
            None => Err(Error::MalformedResponse(format!(
                "document without field {}: {:?}",
                field, doc
            ))),
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Page {
        total: resp.response.num_found,
        ids,
    })
}

/// Blocking client for a Solr-like core, e.g. `http://localhost:8983/solr/corpus`.
pub struct SolrIndex {
    base: Url,
    field: String,
    client: reqwest::blocking::Client,
}

impl SolrIndex {
    pub fn new(base: &str, field: &str) -> Result<Self, Error> {
        Ok(Self {
            base: Url::parse(base)?,
            field: field.to_string(),
            client: reqwest::blocking::Client::new(),
        })
    }

    /// Forge the `select` url of a query.
    pub fn select_url(&self, filter: &str, start: u64, rows: u64) -> Result<Url, Error> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| Error::InvalidParameter(format!("{} cannot be a base url", self.base)))?
            .pop_if_empty()
            .push("select");
        url.query_pairs_mut()
            .append_pair("q", filter)
            .append_pair("start", &start.to_string())
            .append_pair("rows", &rows.to_string())
            .append_pair("fl", &self.field)
            .append_pair("wt", "json");
        Ok(url)
    }
}

impl SearchIndex for SolrIndex {
    fn query(&self, filter: &str, start: u64, rows: u64) -> Result<Page, Error> {
        let url = self.select_url(filter, start, rows)?;
        debug!("querying {}", url);
        let body = self.client.get(url).send()?.error_for_status()?.text()?;
        parse_response(&body, &self.field)
    }
}

/// Iterator over the pages of a query. Stops after the last page, on an empty page,
/// after `max_pages` pages, or after the first error.
pub struct Pager<'a, I: SearchIndex> {
    index: &'a I,
    filter: String,
    rows: u64,
    start: u64,
    total: Option<u64>,
    max_pages: Option<usize>,
    nb_pages: usize,
    done: bool,
}

impl<'a, I: SearchIndex> Pager<'a, I> {
    pub fn new(
        index: &'a I,
        filter: &str,
        rows: u64,
        max_pages: Option<usize>,
    ) -> Result<Self, Error> {
        if rows == 0 {
            return Err(Error::InvalidParameter("page size must be positive".to_string()));
        }
        Ok(Self {
            index,
            filter: filter.to_string(),
            rows,
            start: 0,
            total: None,
            max_pages,
            nb_pages: 0,
            done: false,
        })
    }
}

impl<'a, I: SearchIndex> Iterator for Pager<'a, I> {
    type Item = Result<Page, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done
            || self.max_pages.map_or(false, |max| self.nb_pages >= max)
            || self.total.map_or(false, |total| self.start >= total)
        {
            return None;
        }

        match self.index.query(&self.filter, self.start, self.rows) {
            Ok(page) => {
                if log_enabled!(Level::Debug) {
                    debug!(
                        "page {}: {} results from {} (total {})",
                        self.nb_pages + 1,
                        page.ids.len(),
                        self.start,
                        page.total
                    );
                }
                self.total = Some(page.total);
                self.start += self.rows;
                self.nb_pages += 1;
                if page.ids.is_empty() {
                    self.done = true;
                    return None;
                }
                Some(Ok(page))
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// Get every identifier matching `filter`.
pub fn collect_ids<I: SearchIndex>(
    index: &I,
    filter: &str,
    rows: u64,
    max_pages: Option<usize>,
) -> Result<Vec<String>, Error> {
    let mut ids = Vec::new();
    for page in Pager::new(index, filter, rows, max_pages)? {
        ids.extend(page?.ids);
    }
    info!("got {} identifiers for {:?}", ids.len(), filter);
    Ok(ids)
}
