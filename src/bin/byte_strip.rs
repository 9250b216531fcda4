//! Remove the leading bytes of every file of a folder.
#[macro_use]
extern crate log;

use corpuskit::{cli::ByteStrip, processing::strip::strip_dir};
use structopt::StructOpt;

fn main() {
    env_logger::init();

    let opt = ByteStrip::from_args();
    debug!("cli args\n{:#?}", opt);

    if let Err(e) = strip_dir(&opt.src, &opt.dst, opt.nb_bytes) {
        error!("{}", e);
        std::process::exit(1);
    }
}
