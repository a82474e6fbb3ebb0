//! Run scripts of commands on tiny stacks.
//!
//! A script names stacks and pushes words of the script onto them.
//! The script texts are kept in an arena for as long as the stacks live,
//! so the stacks only hold references to their items.
//!
//! ~~~
//! # use tsrun::{Machine, Opt};
//! let opt = Opt { echo: false, quiet: false, files: Vec::new() };
//! let script = "push s1 x y; push s2 p q\nconcat s1 s2\ndump s2\ndepth s1";
//!
//! let mut machine = Machine::new();
//! let mut out = Vec::new();
//! tsrun::run_script(script, &mut machine, &opt, &mut out)?;
//! assert_eq!(String::from_utf8(out).unwrap(), "q p y x\n0\n");
//! # Ok::<_, tsrun::Error>(())
//! ~~~

pub mod cmd;
mod error;
pub mod lex;
pub mod machine;
mod opt;
mod path_read;

pub use error::Error;
pub use machine::Machine;
pub use opt::Opt;
pub use path_read::PathRead;

use cmd::{CmdIter, Command};
use colosseum::unsync::Arena;
use core::fmt::Display;
use std::io::Write;

pub fn log_cmd<S: Display>(line: usize, cmd: &Command<S>) {
    match cmd {
        Command::Push(s, items) => {
            log::info!("Line {}: push {} items onto {}", line, items.len(), s)
        }
        cmd => log::info!("Line {}: {}", line, cmd),
    }
}

/// Run all commands of a script, writing their results to `out`.
///
/// Stop at the first command that cannot be parsed or executed.
pub fn run_script<'s, W: Write>(
    text: &'s str,
    machine: &mut Machine<'s>,
    opt: &Opt,
    out: &mut W,
) -> Result<(), Error> {
    let mut cmds = CmdIter::new(text);
    while let Some(cmd) = cmds.next() {
        let line = cmds.line();
        let cmd = cmd.map_err(|e| Error::Parse(line, e))?;
        if opt.echo {
            writeln!(out, "> {}", cmd)?;
        }
        log_cmd(line, &cmd);

        let result = machine.run(cmd).map_err(|e| Error::Stack(line, e))?;
        if let Some(result) = result.filter(|_| !opt.quiet) {
            writeln!(out, "{}", result)?;
        }
    }
    Ok(())
}

/// Run all files given in the options, writing results to `out`.
pub fn run<W: Write>(opt: &Opt, out: &mut W) -> Result<(), Error> {
    let arena: Arena<String> = Arena::new();
    let mut machine = Machine::new();

    for pr in PathRead::from_pathbufs(&opt.files) {
        let pr = pr?;
        log::info!("Run {}", pr.path.display());
        let text: &str = arena.alloc(pr.text);
        run_script(text, &mut machine, opt, out)?;
    }
    Ok(())
}
