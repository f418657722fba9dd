use crate::error::{Error, MalformedKind, Result};
use crate::run::Run;

/// Iterator that parses an encoded stream into runs.
///
/// Each run is one symbol followed by its count in decimal. After the
/// first malformed run the iterator yields the error and then stops.
///
/// ```
/// use runlength_rs::{Run, RunParser};
///
/// let runs: Vec<Run> = RunParser::new("a3b1").collect::<Result<_, _>>().unwrap();
/// assert_eq!(runs, vec![Run::new('a', 3).unwrap(), Run::new('b', 1).unwrap()]);
/// ```
#[derive(Debug, Clone)]
pub struct RunParser<'a> {
    input: &'a str,
    /// Byte offset of the next run
    pos: usize,
    failed: bool,
}

impl<'a> RunParser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            failed: false,
        }
    }

    /// Byte offset of the next unparsed run.
    pub fn offset(&self) -> usize {
        self.pos
    }
}

impl Iterator for RunParser<'_> {
    type Item = Result<Run>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let rest = &self.input[self.pos..];
        let symbol = rest.chars().next()?;

        let digits_start = symbol.len_utf8();
        let digits_len = rest[digits_start..]
            .bytes()
            .take_while(u8::is_ascii_digit)
            .count();
        let digits = &rest[digits_start..digits_start + digits_len];

        let run = parse_count(digits)
            .and_then(|count| Run::new(symbol, count).ok_or(MalformedKind::ZeroCount));

        match run {
            Ok(run) => {
                self.pos += digits_start + digits_len;
                Some(Ok(run))
            }
            Err(kind) => {
                self.failed = true;
                Some(Err(Error::MalformedStream {
                    offset: self.pos,
                    kind,
                }))
            }
        }
    }
}

impl std::iter::FusedIterator for RunParser<'_> {}

fn parse_count(digits: &str) -> std::result::Result<usize, MalformedKind> {
    match digits.as_bytes() {
        [] => Err(MalformedKind::MissingCount),
        [b'0'] => Err(MalformedKind::ZeroCount),
        [b'0', ..] => Err(MalformedKind::LeadingZero),
        _ => digits.parse().map_err(|_| MalformedKind::CountOverflow),
    }
}

/// Decodes a `<symbol><count>` stream back into plain text.
///
/// Fails with [`Error::MalformedStream`] on the first run that does not
/// follow the grammar; no partial output is returned. A symbol at the end
/// of the stream without a count is malformed, it is not skipped. A run
/// whose expansion cannot be allocated is reported as
/// [`MalformedKind::CountOverflow`].
pub fn decode(stream: &str) -> Result<String> {
    let mut out = String::with_capacity(stream.len());
    let mut parser = RunParser::new(stream);

    loop {
        let offset = parser.offset();
        let run = match parser.next() {
            Some(Ok(run)) => run,
            Some(Err(err)) => {
                tracing::warn!(%err, "rejecting encoded stream");
                return Err(err);
            }
            None => break,
        };

        let reserved = run
            .count()
            .checked_mul(run.symbol().len_utf8())
            .filter(|bytes| out.try_reserve(*bytes).is_ok());
        if reserved.is_none() {
            let err = Error::MalformedStream {
                offset,
                kind: MalformedKind::CountOverflow,
            };
            tracing::warn!(%err, count = run.count(), "run does not fit in memory");
            return Err(err);
        }

        run.expand_into(&mut out);
    }

    Ok(out)
}
