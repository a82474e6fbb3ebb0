//! Run scripts of stack commands.

use clap::Parser;
use tsrun::{Error, Opt};

#[cfg(feature = "mimalloc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env("LOG").init();

    let opt = Opt::parse();

    let stdout = std::io::stdout();
    tsrun::run(&opt, &mut stdout.lock())
}
