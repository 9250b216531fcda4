//! Generate a Velocity array literal from two-column rows.
#[macro_use]
extern crate log;

use std::io::Write;

use corpuskit::{cli::TemplateGen, error::Error, io, processing::template::render_file};
use structopt::StructOpt;

fn run(opt: TemplateGen) -> Result<(), Error> {
    let rendered = render_file(&opt.src, &opt.variable, &opt.placeholder)?;
    match opt.dst {
        Some(dst) => {
            let mut out = io::create(&dst)?;
            writeln!(out, "{}", rendered)
                .and_then(|_| out.flush())
                .map_err(|e| Error::from_io(&dst, e))?;
            info!("template written to {:?}", dst);
        }
        None => println!("{}", rendered),
    }
    Ok(())
}

fn main() {
    env_logger::init();

    let opt = TemplateGen::from_args();
    debug!("cli args\n{:#?}", opt);

    if let Err(e) = run(opt) {
        error!("{}", e);
        std::process::exit(1);
    }
}
