/*! # corpuskit

Standalone utilities to prepare text corpora for NLP pipelines.

Each tool lives in its own module and ships as its own binary:

| binary             | module                          |
|--------------------|---------------------------------|
| `annotation-check` | [processing::annotations]       |
| `topic-rank`       | [processing::topics]            |
| `doc-split`        | [processing::split]             |
| `country-scrape`   | [processing::countries]         |
| `template-gen`     | [processing::template]          |
| `search-pager`     | [search]                        |
| `entity-filter`    | [processing::entities]          |
| `recommend`        | [processing::recommend]         |
| `sample`           | [processing::sample]            |
| `byte-strip`       | [processing::strip]             |

Logging is done through [log]; binaries use `env_logger`, so set `RUST_LOG=info` to follow progress.
!*/
pub mod cli;
pub mod error;
pub mod io;
pub mod processing;
pub mod search;
