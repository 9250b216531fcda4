//! Filter a group index, keeping files that contain named entity tags.
#[macro_use]
extern crate log;

use corpuskit::{
    cli::EntityFilter,
    error::Error,
    io::{self, GroupIndex},
    processing::entities::{filter_index, DEFAULT_TAGS},
};
use structopt::StructOpt;

fn run(opt: EntityFilter) -> Result<(), Error> {
    let tags: &[String] = if opt.tags.is_empty() {
        &DEFAULT_TAGS
    } else {
        &opt.tags
    };
    debug!("using tags {:?}", tags);

    let index = GroupIndex::from_path(&opt.index)?;
    let filtered = filter_index(&index, &opt.src, tags)?;
    filtered.write_to(io::create(&opt.dst)?)
}

fn main() {
    env_logger::init();

    let opt = EntityFilter::from_args();
    debug!("cli args\n{:#?}", opt);

    if let Err(e) = run(opt) {
        error!("{}", e);
        std::process::exit(1);
    }
}
