//! Command line arguments and parameters management/parsing.
//!
//! Each tool is its own binary with its own argument struct.
use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "annotation-check",
    about = "Report underscore-prefixed (broken) annotation tokens of tab-delimited files."
)]
pub struct AnnotationCheck {
    #[structopt(
        parse(from_os_str),
        help = "report file (broken tokens are appended)"
    )]
    pub report: PathBuf,
    #[structopt(required = true, help = "files or glob patterns to check")]
    pub src: Vec<String>,
    #[structopt(long = "prefix", default_value = "_", help = "prefix of broken tokens")]
    pub prefix: String,
}

#[derive(Debug, StructOpt)]
#[structopt(
    name = "topic-rank",
    about = "Copy the most probable documents of each topic into per-topic folders."
)]
/// ```sh
/// USAGE:
///     topic-rank [OPTIONS] <matrix> <index> <src> <dst>
///
/// OPTIONS:
///     -n <top-n>        number of documents kept per topic [default: 10]
///
/// ARGS:
///     <matrix>    document-topic probability matrix (one document per line)
///     <index>     document id to file name index
///     <src>       documents location
///     <dst>       destination of per-topic folders
/// ```
pub struct TopicRank {
    #[structopt(
        parse(from_os_str),
        help = "document-topic probability matrix (one document per line)"
    )]
    pub matrix: PathBuf,
    #[structopt(parse(from_os_str), help = "document id to file name index")]
    pub index: PathBuf,
    #[structopt(parse(from_os_str), help = "documents location")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "destination of per-topic folders")]
    pub dst: PathBuf,
    #[structopt(
        short = "n",
        default_value = "10",
        help = "number of documents kept per topic"
    )]
    pub top_n: usize,
}

#[derive(Debug, StructOpt)]
#[structopt(name = "doc-split", about = "Split a file into documents on blank lines.")]
pub struct DocSplit {
    #[structopt(parse(from_os_str), help = "file holding concatenated documents")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "destination folder")]
    pub dst: PathBuf,
    #[structopt(
        long = "prefix",
        default_value = "doc_",
        help = "output file name prefix"
    )]
    pub prefix: String,
}

#[derive(Debug, StructOpt)]
#[structopt(
    name = "country-scrape",
    about = "Extract names from a JSON-like file, one per line."
)]
pub struct CountryScrape {
    #[structopt(parse(from_os_str), help = "JSON-like source file")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "destination file")]
    pub dst: PathBuf,
    #[structopt(long = "key", default_value = "name", help = "key preceding names")]
    pub key: String,
}

#[derive(Debug, StructOpt)]
#[structopt(
    name = "template-gen",
    about = "Generate a Velocity #set array from <code> <name> rows."
)]
pub struct TemplateGen {
    #[structopt(parse(from_os_str), help = "two-column source file")]
    pub src: PathBuf,
    #[structopt(
        parse(from_os_str),
        short = "o",
        help = "destination file. Prints on stdout if not set."
    )]
    pub dst: Option<PathBuf>,
    #[structopt(long = "variable", default_value = "langauges", help = "template variable name")]
    pub variable: String,
    #[structopt(
        long = "placeholder",
        default_value = "--Select--",
        help = "first array item"
    )]
    pub placeholder: String,
}

#[derive(Debug, StructOpt)]
#[structopt(
    name = "search-pager",
    about = "Print identifiers of every document matching a query."
)]
pub struct SearchPager {
    #[structopt(help = "search index core url, e.g. http://localhost:8983/solr/corpus")]
    pub url: String,
    #[structopt(help = "query filter")]
    pub filter: String,
    #[structopt(short = "r", long = "rows", default_value = "10", help = "page size")]
    pub rows: u64,
    #[structopt(long = "field", default_value = "id", help = "identifier field")]
    pub field: String,
    #[structopt(long = "max-pages", help = "stop after this many pages")]
    pub max_pages: Option<usize>,
}

#[derive(Debug, StructOpt)]
#[structopt(
    name = "entity-filter",
    about = "Keep files of a group index that contain named entity tags."
)]
pub struct EntityFilter {
    #[structopt(parse(from_os_str), help = "group index (<group>\\t<file>\\t<file>...)")]
    pub index: PathBuf,
    #[structopt(parse(from_os_str), help = "documents location")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "filtered index destination")]
    pub dst: PathBuf,
    #[structopt(
        short = "t",
        long = "tag",
        help = "entity tag (repeatable). Defaults to _person, _location and _organization."
    )]
    pub tags: Vec<String>,
}

#[derive(Debug, StructOpt)]
#[structopt(
    name = "recommend",
    about = "List documents of a topic that mention an entity."
)]
pub struct Recommend {
    #[structopt(parse(from_os_str), help = "topic file (<topic>\\t<file>\\t<url>)")]
    pub topics: PathBuf,
    #[structopt(help = "topic id")]
    pub topic: usize,
    #[structopt(help = "entity to look for")]
    pub entity: String,
    #[structopt(parse(from_os_str), help = "documents location")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "destination file")]
    pub dst: PathBuf,
}

#[derive(Debug, StructOpt)]
#[structopt(
    name = "sample",
    about = "Copy documents of a group index into per-group folders."
)]
pub struct Sample {
    #[structopt(parse(from_os_str), help = "group index (<group>\\t<file>\\t<file>...)")]
    pub index: PathBuf,
    #[structopt(parse(from_os_str), help = "documents location")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "destination of per-group folders")]
    pub dst: PathBuf,
    #[structopt(
        short = "l",
        long = "limit",
        help = "copy at most this many random files per group"
    )]
    pub limit: Option<usize>,
    #[structopt(long = "seed", default_value = "42", help = "sampling seed")]
    pub seed: u64,
}

#[derive(Debug, StructOpt)]
#[structopt(
    name = "byte-strip",
    about = "Remove leading bytes of every file of a folder."
)]
pub struct ByteStrip {
    #[structopt(parse(from_os_str), help = "source folder")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "destination folder")]
    pub dst: PathBuf,
    #[structopt(
        short = "n",
        long = "bytes",
        default_value = "1",
        help = "number of bytes to remove"
    )]
    pub nb_bytes: u64,
}
