//! Execution of commands on named stacks.

use crate::cmd::Command;
use fnv::FnvHashMap;
use tstack::{nullable, Arg, Error, Stack};

/// Named stacks of items borrowed from script texts.
///
/// A name that has not been pushed to or copied to denotes an absent stack.
#[derive(Default)]
pub struct Machine<'s> {
    stacks: FnvHashMap<&'s str, Stack<&'s str>>,
}

impl<'s> Machine<'s> {
    pub fn new() -> Self {
        Default::default()
    }

    /// Return the stack with the given name, if it exists.
    pub fn get(&self, name: &str) -> Option<&Stack<&'s str>> {
        self.stacks.get(name)
    }

    /// Execute a command and return what it prints, if anything.
    ///
    /// A failing command does not change any stack.
    pub fn run(&mut self, cmd: Command<&'s str>) -> Result<Option<String>, Error> {
        match cmd {
            Command::Push(name, items) => {
                let stack = self.stacks.entry(name).or_default();
                items
                    .into_iter()
                    .try_for_each(|item| nullable::push(Some(&mut *stack), Some(item)))?;
                Ok(None)
            }
            Command::Pop(name) => Ok(Some(nullable::pop(self.stacks.get_mut(name))?.to_string())),
            Command::Top(name) => Ok(Some(nullable::top(self.get(name))?.to_string())),
            Command::Depth(name) => Ok(Some(nullable::depth(self.get(name))?.to_string())),
            Command::Dump(name) => {
                let stack = self.get(name);
                let mut buf = vec![""; nullable::depth(stack)?];
                nullable::dump(stack, Some(&mut buf[..]))?;
                Ok(Some(buf.join(" ")))
            }
            Command::Concat(name1, name2) => {
                if name1 == name2 {
                    log::debug!("Concatenate stack {} with itself", name1);
                    return Err(Error::InvalidArgument(Arg::Stack));
                }
                let mut stack1 = self.stacks.remove(name1);
                let result = nullable::concat(stack1.as_mut(), self.stacks.get_mut(name2));
                // on success, stack 1 is empty, but it still exists
                if let Some(stack1) = stack1 {
                    self.stacks.insert(name1, stack1);
                }
                result.map(|()| None)
            }
            Command::Copy(src, dst) => {
                let copy = nullable::copy(self.get(src))?;
                self.stacks.insert(dst, copy);
                Ok(None)
            }
            Command::Drop(name) => match self.stacks.remove(name) {
                Some(_) => Ok(None),
                None => Err(Error::InvalidArgument(Arg::Stack)),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Command::*;

    fn dump<'s>(m: &Machine<'s>, name: &str) -> Vec<&'s str> {
        m.get(name).map(|s| s.dump()).unwrap_or_default()
    }

    #[test]
    fn push_pop() -> Result<(), Error> {
        let mut m = Machine::new();
        assert_eq!(m.run(Push("s", vec!["a", "b", "c"]))?, None);
        assert_eq!(m.run(Depth("s"))?, Some("3".to_string()));
        assert_eq!(m.run(Dump("s"))?, Some("c b a".to_string()));
        assert_eq!(m.run(Top("s"))?, Some("c".to_string()));
        assert_eq!(m.run(Pop("s"))?, Some("c".to_string()));
        assert_eq!(m.run(Pop("s"))?, Some("b".to_string()));
        assert_eq!(m.run(Pop("s"))?, Some("a".to_string()));
        assert_eq!(m.run(Pop("s")), Err(Error::Empty));
        assert_eq!(m.run(Dump("s"))?, Some("".to_string()));
        Ok(())
    }

    #[test]
    fn absent() {
        let mut m = Machine::new();
        let err = Err(Error::InvalidArgument(Arg::Stack));
        assert_eq!(m.run(Pop("s")), err);
        assert_eq!(m.run(Top("s")), err);
        assert_eq!(m.run(Depth("s")), err);
        assert_eq!(m.run(Dump("s")), err);
        assert_eq!(m.run(Copy("s", "t")), err);
        assert_eq!(m.run(Drop("s")), err);
        assert!(m.get("t").is_none());
    }

    #[test]
    fn concat() -> Result<(), Error> {
        let mut m = Machine::new();
        m.run(Push("s1", vec!["x", "y"]))?;
        m.run(Push("s2", vec!["p", "q"]))?;
        m.run(Concat("s1", "s2"))?;
        assert_eq!(dump(&m, "s2"), ["q", "p", "y", "x"]);
        assert_eq!(m.run(Depth("s1"))?, Some("0".to_string()));

        // absent first stack is empty
        m.run(Concat("s0", "s2"))?;
        assert_eq!(dump(&m, "s2"), ["q", "p", "y", "x"]);

        let err = Err(Error::InvalidArgument(Arg::Stack));
        assert_eq!(m.run(Concat("s2", "s3")), err);
        assert_eq!(dump(&m, "s2"), ["q", "p", "y", "x"]);
        assert_eq!(m.run(Concat("s2", "s2")), err);
        assert_eq!(dump(&m, "s2"), ["q", "p", "y", "x"]);
        Ok(())
    }

    #[test]
    fn copy_drop() -> Result<(), Error> {
        let mut m = Machine::new();
        m.run(Push("s", vec!["a", "b"]))?;
        m.run(Copy("s", "t"))?;
        m.run(Pop("t"))?;
        m.run(Push("t", vec!["c"]))?;
        assert_eq!(dump(&m, "s"), ["b", "a"]);
        assert_eq!(dump(&m, "t"), ["c", "a"]);

        // copying overwrites the destination
        m.run(Copy("s", "t"))?;
        assert_eq!(dump(&m, "t"), ["b", "a"]);

        m.run(Drop("s"))?;
        assert!(m.get("s").is_none());
        assert_eq!(dump(&m, "t"), ["b", "a"]);
        Ok(())
    }
}
