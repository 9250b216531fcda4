//! Copy the top documents of each topic into per-topic folders.
#[macro_use]
extern crate log;

use corpuskit::{
    cli::TopicRank,
    error::Error,
    processing::topics::{copy_top_documents, DocumentIndex, ProbabilityMatrix},
};
use structopt::StructOpt;

fn run(opt: TopicRank) -> Result<(), Error> {
    let matrix = ProbabilityMatrix::from_path(&opt.matrix)?;
    info!(
        "{} documents, {} topics",
        matrix.nb_documents(),
        matrix.nb_topics()
    );
    let index = DocumentIndex::from_path(&opt.index)?;
    let ranking = matrix.rank(opt.top_n)?;
    copy_top_documents(&ranking, &index, &opt.src, &opt.dst)?;
    Ok(())
}

fn main() {
    env_logger::init();

    let opt = TopicRank::from_args();
    debug!("cli args\n{:#?}", opt);

    if let Err(e) = run(opt) {
        error!("{}", e);
        std::process::exit(1);
    }
}
