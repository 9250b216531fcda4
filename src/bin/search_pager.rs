//! Print the identifiers of every document matching a query, page after page.
#[macro_use]
extern crate log;

use std::io::Write;

use corpuskit::{
    cli::SearchPager,
    error::Error,
    search::{Pager, SolrIndex},
};
use structopt::StructOpt;

fn run(opt: SearchPager) -> Result<(), Error> {
    let index = SolrIndex::new(&opt.url, &opt.field)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let mut nb_ids = 0;
    for page in Pager::new(&index, &opt.filter, opt.rows, opt.max_pages)? {
        let page = page?;
        for id in &page.ids {
            writeln!(out, "{}", id)?;
        }
        nb_ids += page.ids.len();
        info!("{}/{} identifiers", nb_ids, page.total);
    }
    out.flush()?;
    Ok(())
}

fn main() {
    env_logger::init();

    let opt = SearchPager::from_args();
    debug!("cli args\n{:#?}", opt);

    if let Err(e) = run(opt) {
        error!("{}", e);
        std::process::exit(1);
    }
}
