use clap::Parser;
use std::path::PathBuf;

#[derive(Clone, Debug, Parser)]
/// Run scripts of stack commands
///
/// Every line (or every part of a line separated by ";") is one command.
/// Commands: push S ITEM..., pop S, top S, depth S, dump S,
/// concat S1 S2, copy SRC DST, drop S.
pub struct Opt {
    /// Print every command before executing it
    #[arg(long)]
    pub echo: bool,

    /// Do not print the results of commands
    #[arg(long, short)]
    pub quiet: bool,

    /// Files to process (cumulative)
    ///
    /// Stacks persist from one file to the next,
    /// so running multiple files is equivalent to running their concatenation.
    /// To read from standard input, use "-" as file name.
    /// Without any file, standard input is read.
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,
}
