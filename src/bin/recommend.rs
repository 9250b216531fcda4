//! Write documents of a topic that mention an entity, with their url.
#[macro_use]
extern crate log;

use corpuskit::{
    cli::Recommend,
    error::Error,
    io,
    processing::recommend::{candidates, recommend},
};
use structopt::StructOpt;

fn run(opt: Recommend) -> Result<(), Error> {
    let docs = candidates(io::open(&opt.topics)?, opt.topic, &opt.topics)?;
    let mut out = io::create(&opt.dst)?;
    let nb_matches = recommend(&docs, &opt.src, &opt.entity, &mut out)?;
    if nb_matches == 0 {
        warn!("no document of topic {} mentions {:?}", opt.topic, opt.entity);
    }
    Ok(())
}

fn main() {
    env_logger::init();

    let opt = Recommend::from_args();
    debug!("cli args\n{:#?}", opt);

    if let Err(e) = run(opt) {
        error!("{}", e);
        std::process::exit(1);
    }
}
