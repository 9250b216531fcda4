//! Report broken annotation tokens and print their count.
#[macro_use]
extern crate log;

use corpuskit::{cli::AnnotationCheck, error::Error, io, processing::annotations};
use structopt::StructOpt;

fn run(opt: AnnotationCheck) -> Result<(), Error> {
    let paths = io::expand_globs(&opt.src)?;
    let nb_broken = annotations::check_files(&paths, &opt.report, &opt.prefix)?;
    println!("{}", nb_broken);
    Ok(())
}

fn main() {
    env_logger::init();

    let opt = AnnotationCheck::from_args();
    debug!("cli args\n{:#?}", opt);

    if let Err(e) = run(opt) {
        error!("{}", e);
        std::process::exit(1);
    }
}
