//! Stack commands and their parsing.

use crate::lex::Token;
use core::fmt::{self, Display};
use logos::Logos;

/// A command operating on named stacks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command<S> {
    /// Push items in order onto a stack
    Push(S, Vec<S>),
    /// Pop an item from a stack and print it
    Pop(S),
    /// Print the top item of a stack
    Top(S),
    /// Print the number of items on a stack
    Depth(S),
    /// Print all items of a stack, starting from the top
    Dump(S),
    /// Put the first stack below the second stack
    Concat(S, S),
    /// Replace the second stack by a copy of the first stack
    Copy(S, S),
    /// Discard a stack
    Drop(S),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    InvalidToken,
    ExpectedCommand,
    ExpectedName,
    ExpectedItem,
    ExpectedEnd,
}

impl<S: Display> Display for Command<S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Push(s, items) => {
                write!(f, "push {}", s)?;
                items.iter().try_for_each(|item| write!(f, " {}", item))
            }
            Self::Pop(s) => write!(f, "pop {}", s),
            Self::Top(s) => write!(f, "top {}", s),
            Self::Depth(s) => write!(f, "depth {}", s),
            Self::Dump(s) => write!(f, "dump {}", s),
            Self::Concat(s1, s2) => write!(f, "concat {} {}", s1, s2),
            Self::Copy(src, dst) => write!(f, "copy {} {}", src, dst),
            Self::Drop(s) => write!(f, "drop {}", s),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            Self::InvalidToken => "invalid token",
            Self::ExpectedCommand => "expected command",
            Self::ExpectedName => "expected stack name",
            Self::ExpectedItem => "expected item",
            Self::ExpectedEnd => "expected end of command",
        };
        s.fmt(f)
    }
}

/// Iterator over the commands of a script.
///
/// Commands are terminated by newlines or semicolons.
///
/// ~~~
/// # use tsrun::cmd::{CmdIter, Command};
/// let cmds: Result<Vec<_>, _> = CmdIter::new("push a x y; concat a b\n\npop b").collect();
/// let cmds = cmds.unwrap();
/// assert_eq!(cmds[0], Command::Push("a", vec!["x", "y"]));
/// assert_eq!(cmds[1], Command::Concat("a", "b"));
/// assert_eq!(cmds[2], Command::Pop("b"));
/// ~~~
pub struct CmdIter<'s> {
    lexer: logos::Lexer<'s, Token<'s>>,
    /// current line number
    line: usize,
    /// line number where the last command started
    start: usize,
}

impl<'s> CmdIter<'s> {
    pub fn new(s: &'s str) -> Self {
        Self {
            lexer: Token::lexer(s),
            line: 1,
            start: 1,
        }
    }

    /// Return the line number of the last returned command.
    pub fn line(&self) -> usize {
        self.start
    }

    fn name(&mut self) -> Result<&'s str, Error> {
        match self.lexer.next() {
            Some(Token::Word(w)) => Ok(w),
            Some(Token::Error) => Err(Error::InvalidToken),
            _ => Err(Error::ExpectedName),
        }
    }

    fn end(&mut self, token: Option<Token<'s>>) -> Result<(), Error> {
        match token {
            None | Some(Token::Semicolon) => Ok(()),
            Some(Token::Newline) => {
                self.line += 1;
                Ok(())
            }
            Some(Token::Error) => Err(Error::InvalidToken),
            Some(Token::Word(_)) => Err(Error::ExpectedEnd),
        }
    }

    fn items(&mut self) -> Result<Vec<&'s str>, Error> {
        let mut items = Vec::new();
        loop {
            match self.lexer.next() {
                Some(Token::Word(w)) => items.push(w),
                end => {
                    self.end(end)?;
                    break;
                }
            }
        }
        if items.is_empty() {
            return Err(Error::ExpectedItem);
        }
        Ok(items)
    }

    fn command(&mut self, head: Token<'s>) -> Result<Command<&'s str>, Error> {
        let head = match head {
            Token::Word(w) => w,
            Token::Error => return Err(Error::InvalidToken),
            _ => return Err(Error::ExpectedCommand),
        };
        let cmd = match head {
            "push" => {
                let stack = self.name()?;
                return Ok(Command::Push(stack, self.items()?));
            }
            "pop" => Command::Pop(self.name()?),
            "top" => Command::Top(self.name()?),
            "depth" => Command::Depth(self.name()?),
            "dump" => Command::Dump(self.name()?),
            "concat" => Command::Concat(self.name()?, self.name()?),
            "copy" => Command::Copy(self.name()?, self.name()?),
            "drop" => Command::Drop(self.name()?),
            _ => return Err(Error::ExpectedCommand),
        };
        let next = self.lexer.next();
        self.end(next)?;
        Ok(cmd)
    }
}

impl<'s> Iterator for CmdIter<'s> {
    type Item = Result<Command<&'s str>, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        // skip empty commands
        let head = loop {
            match self.lexer.next()? {
                Token::Newline => self.line += 1,
                Token::Semicolon => (),
                token => break token,
            }
        };
        self.start = self.line;
        Some(self.command(head))
    }
}

impl<'s> Command<&'s str> {
    pub fn parse_str(s: &'s str) -> Result<Self, Error> {
        CmdIter::new(s).next().unwrap_or(Err(Error::ExpectedCommand))
    }
}

#[test]
fn positive() -> Result<(), Error> {
    use Command::*;
    assert_eq!(Command::parse_str("push s x")?, Push("s", vec!["x"]));
    assert_eq!(Command::parse_str("push s x y z;")?, Push("s", vec!["x", "y", "z"]));
    assert_eq!(Command::parse_str("\n; pop s # pop it\n")?, Pop("s"));
    assert_eq!(Command::parse_str("top s")?, Top("s"));
    assert_eq!(Command::parse_str("depth s")?, Depth("s"));
    assert_eq!(Command::parse_str("dump s")?, Dump("s"));
    assert_eq!(Command::parse_str("concat s1 s2")?, Concat("s1", "s2"));
    assert_eq!(Command::parse_str("copy s1 s2")?, Copy("s1", "s2"));
    assert_eq!(Command::parse_str("drop s")?, Drop("s"));
    Ok(())
}

#[test]
fn negative() {
    use Error::*;
    let parse_err = |s: &str| Command::parse_str(s).unwrap_err();
    assert_eq!(parse_err(""), ExpectedCommand);
    assert_eq!(parse_err("# only a comment"), ExpectedCommand);
    assert_eq!(parse_err("shove s x"), ExpectedCommand);
    assert_eq!(parse_err("pop"), ExpectedName);
    assert_eq!(parse_err("pop\ns"), ExpectedName);
    assert_eq!(parse_err("push s"), ExpectedItem);
    assert_eq!(parse_err("push s;"), ExpectedItem);
    assert_eq!(parse_err("concat s"), ExpectedName);
    assert_eq!(parse_err("pop s t"), ExpectedEnd);
    assert_eq!(parse_err("pop $"), InvalidToken);
    assert_eq!(parse_err("push s x $"), InvalidToken);
}

#[test]
fn lines() {
    let mut cmds = CmdIter::new("push a x\n\n# comment\ndump a; pop a\n  depth a");
    let mut lines = Vec::new();
    while let Some(cmd) = cmds.next() {
        assert!(cmd.is_ok());
        lines.push(cmds.line());
    }
    assert_eq!(lines, [1, 4, 4, 5]);
}

#[test]
fn display() -> Result<(), Error> {
    for s in ["push a x y", "concat a b", "copy a b", "drop a"] {
        assert_eq!(Command::parse_str(s)?.to_string(), s);
    }
    Ok(())
}
