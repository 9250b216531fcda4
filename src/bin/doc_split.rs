//! Split concatenated documents into numbered files.
#[macro_use]
extern crate log;

use corpuskit::{cli::DocSplit, processing::split::split_file};
use structopt::StructOpt;

fn main() {
    env_logger::init();

    let opt = DocSplit::from_args();
    debug!("cli args\n{:#?}", opt);

    if let Err(e) = split_file(&opt.src, &opt.dst, &opt.prefix) {
        error!("{}", e);
        std::process::exit(1);
    }
}
