//! Copy documents of a group index into per-group folders.
#[macro_use]
extern crate log;

use corpuskit::{
    cli::Sample,
    error::Error,
    io::GroupIndex,
    processing::sample::sample_groups,
};
use structopt::StructOpt;

fn run(opt: Sample) -> Result<(), Error> {
    let index = GroupIndex::from_path(&opt.index)?;
    sample_groups(&index, &opt.src, &opt.dst, opt.limit, opt.seed)?;
    Ok(())
}

fn main() {
    env_logger::init();

    let opt = Sample::from_args();
    debug!("cli args\n{:#?}", opt);

    if let Err(e) = run(opt) {
        error!("{}", e);
        std::process::exit(1);
    }
}
