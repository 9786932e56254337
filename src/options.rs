use std::path::PathBuf;

use maxrects::Heuristic;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(about = "Packs rectangles into a bin using the maximal rectangles algorithm")]
pub struct Options {
    #[structopt(subcommand)]
    pub command: Subcommand,
}

#[derive(Debug, StructOpt)]
pub enum Subcommand {
    /// Pack the items of a job file into its bin and print a JSON report of
    /// where every item ended up.
    Pack(PackOptions),

    /// Pack the items of a job file once with every heuristic and print how
    /// well each one did.
    Compare(CompareOptions),
}

#[derive(Debug, StructOpt)]
pub struct PackOptions {
    /// The path to the job file describing the bin and items.
    pub job: PathBuf,

    /// The heuristic used to choose where each item goes. Overrides the
    /// heuristic named in the job file, if any. Defaults to best-area.
    ///
    /// Options: first-fit, best-area, best-shortside, best-longside,
    /// best-bottomleft, contact-point
    #[structopt(long)]
    pub heuristic: Option<Heuristic>,

    /// A path to write the report to. If not specified, the report is printed
    /// to stdout.
    #[structopt(long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, StructOpt)]
pub struct CompareOptions {
    /// The path to the job file describing the bin and items.
    pub job: PathBuf,
}
