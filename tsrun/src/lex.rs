use core::fmt::{self, Display};
use logos::Logos;

#[derive(Logos, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token<'s> {
    #[regex("[a-zA-Z0-9_.:'-]+")]
    Word(&'s str),

    #[token(";")]
    Semicolon,

    #[token("\n")]
    Newline,

    // Logos requires one token variant to handle errors,
    // we also use it to skip spaces and comments
    #[error]
    #[regex(r"[ \t\r\f]+", logos::skip)]
    #[regex(r"#[^\n]*", logos::skip)]
    Error,
}

impl<'s> Display for Token<'s> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        let s = match self {
            Self::Word(s) => *s,
            Self::Semicolon => ";",
            Self::Newline => "\n",
            Self::Error => return Err(Default::default()),
        };
        s.fmt(f)
    }
}

#[test]
fn tokens() {
    use Token::*;
    let tokens: Vec<_> = Token::lexer("push a x1 y.z # comment ; pop\n\tpop a;").collect();
    let push = [Word("push"), Word("a"), Word("x1"), Word("y.z"), Newline];
    let pop = [Word("pop"), Word("a"), Semicolon];
    assert_eq!(tokens, [&push[..], &pop[..]].concat());

    let tokens: Vec<_> = Token::lexer("push a $").collect();
    assert_eq!(tokens, [Word("push"), Word("a"), Error]);
}
