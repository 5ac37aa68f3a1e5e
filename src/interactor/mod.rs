use std::io::{self, BufRead, Write};
use std::process;
use std::str::FromStr;
use std::vec;

use config::{init_config, read_config};
use error::{InputError, InputResult};
#[cfg(feature = "debug")]
use logging;
use strategy::{Strategy, Turn};
#[cfg(feature = "debug")]
use strategy::TimingWrapper;

pub use self::cellularena::Cellularena;
pub use self::olympics::Olympics;
pub use self::soak::Soak;
pub use self::zombies::CodeVsZombies;

pub mod cellularena;
pub mod olympics;
pub mod soak;
pub mod zombies;

pub struct Input<R> {
    reader: R,
    line: usize,
}

impl<R: BufRead> Input<R> {
    pub fn new(reader: R) -> Input<R> {
        Input { reader, line: 0 }
    }

    pub fn line_number(&self) -> usize {
        self.line
    }

    /// Next line without its terminator, `None` at end of input.
    pub fn next_line(&mut self) -> InputResult<Option<String>> {
        let mut text = String::new();
        if self.reader.read_line(&mut text)? == 0 {
            return Ok(None);
        }
        self.line += 1;
        Ok(Some(text.trim_end_matches(|c| c == '\n' || c == '\r').to_string()))
    }

    pub fn tokens(&mut self) -> InputResult<Tokens> {
        match self.next_tokens()? {
            Some(tokens) => Ok(tokens),
            None => Err(InputError::UnexpectedEof {
                line: self.line + 1,
            }),
        }
    }

    pub fn next_tokens(&mut self) -> InputResult<Option<Tokens>> {
        let line = self.line + 1;
        Ok(self.next_line()?.map(|text| Tokens::new(line, &text)))
    }

    pub fn value<T: FromStr>(&mut self, what: &'static str) -> InputResult<T> {
        self.tokens()?.next(what)
    }
}

#[derive(Debug)]
pub struct Tokens {
    line: usize,
    fields: vec::IntoIter<String>,
}

impl Tokens {
    fn new(line: usize, text: &str) -> Tokens {
        let fields: Vec<String> = text.split_whitespace().map(String::from).collect();
        Tokens {
            line,
            fields: fields.into_iter(),
        }
    }

    pub fn next<T: FromStr>(&mut self, what: &'static str) -> InputResult<T> {
        let line = self.line;
        let token = self.fields
            .next()
            .ok_or(InputError::MissingToken { line, what })?;
        token
            .parse()
            .map_err(|_| InputError::BadToken { line, what, token: token.clone() })
    }
}

pub trait Game {
    type Setup;
    type Snapshot;
    type Strategy: Strategy<Snapshot = Self::Snapshot>;

    fn read_setup<R: BufRead>(input: &mut Input<R>) -> InputResult<Self::Setup>;

    /// `None` when the input closes before the turn starts.
    fn read_turn<R: BufRead>(
        input: &mut Input<R>,
        setup: &Self::Setup,
    ) -> InputResult<Option<Self::Snapshot>>;

    fn strategy(setup: &Self::Setup) -> Self::Strategy;
}

fn run_turns<G, S, R, W>(
    mut strategy: S,
    setup: &G::Setup,
    input: &mut Input<R>,
    output: &mut W,
) -> InputResult<()>
where
    G: Game,
    S: Strategy<Snapshot = G::Snapshot>,
    R: BufRead,
    W: Write,
{
    let mut turn: Turn = 0;
    while let Some(snapshot) = G::read_turn(input, setup)? {
        for command in strategy.tick(turn, &snapshot) {
            writeln!(output, "{}", command)?;
        }
        output.flush()?;
        turn += 1;
    }
    info!("input closed after {} turns", turn);
    Ok(())
}

pub fn play<G: Game, R: BufRead, W: Write>(
    input: &mut Input<R>,
    output: &mut W,
) -> InputResult<()> {
    let setup = G::read_setup(input)?;
    let strategy = G::strategy(&setup);
    run_turns::<G, _, _, _>(strategy, &setup, input, output)
}

#[cfg(not(feature = "debug"))]
fn wrap<S: Strategy>(strategy: S) -> S {
    strategy
}

#[cfg(feature = "debug")]
fn wrap<S: Strategy>(strategy: S) -> TimingWrapper<S> {
    TimingWrapper::new(strategy)
}

pub fn run<G: Game>() -> InputResult<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = Input::new(stdin.lock());
    let mut output = stdout.lock();
    let setup = G::read_setup(&mut input)?;
    let strategy = wrap(G::strategy(&setup));
    run_turns::<G, _, _, _>(strategy, &setup, &mut input, &mut output)
}

pub fn launch<G: Game>() {
    #[cfg(feature = "debug")]
    logging::init();
    let result = read_config().map(init_config).and_then(|_| run::<G>());
    if let Err(err) = result {
        error!("{}", err);
        eprintln!("{}", err);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn tokens_parse_in_order() {
        let mut input = Input::new(Cursor::new("3 -4 LEFT\r\n7\n"));
        let mut tokens = input.tokens().unwrap();
        assert_eq!(tokens.next::<i64>("x").unwrap(), 3);
        assert_eq!(tokens.next::<i64>("y").unwrap(), -4);
        assert_eq!(tokens.next::<String>("word").unwrap(), "LEFT");
        match tokens.next::<i64>("extra") {
            Err(InputError::MissingToken { line: 1, what: "extra" }) => {}
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(input.value::<usize>("count").unwrap(), 7);
        assert_eq!(input.line_number(), 2);
        assert!(input.next_tokens().unwrap().is_none());
    }

    #[test]
    fn malformed_numbers_are_reported() {
        let mut input = Input::new(Cursor::new("12 abc\n"));
        let mut tokens = input.tokens().unwrap();
        tokens.next::<i64>("a").unwrap();
        match tokens.next::<i64>("b") {
            Err(InputError::BadToken { line: 1, what: "b", ref token }) if token == "abc" => {}
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn eof_inside_a_block_is_an_error() {
        let mut input = Input::new(Cursor::new("1\n"));
        input.value::<i64>("first").unwrap();
        match input.tokens() {
            Err(InputError::UnexpectedEof { line: 2 }) => {}
            other => panic!("unexpected {:?}", other),
        }
    }
}
