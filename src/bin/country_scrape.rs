//! Scrape names from a JSON-like file and print how many were found.
#[macro_use]
extern crate log;

use corpuskit::{cli::CountryScrape, processing::countries::scrape_file};
use structopt::StructOpt;

fn main() {
    env_logger::init();

    let opt = CountryScrape::from_args();
    debug!("cli args\n{:#?}", opt);

    match scrape_file(&opt.src, &opt.dst, &opt.key) {
        Ok(nb_names) => println!("{}", nb_names),
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}
