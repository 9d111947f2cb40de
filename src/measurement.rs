use crate::ErrorBox;
use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Sample {
    pub t: f64,
    pub mx: f64,
    pub my: f64,
}

impl Sample {
    pub fn new(t: f64, mx: f64, my: f64) -> Self {
        Self { t, mx, my }
    }
}

/// Whitespace separated tokens pulled line by line from a byte stream.
///
/// Tokens are kept as raw bytes, so input that is not UTF-8 only spoils the token it is in.
pub struct Tokens<R> {
    input: R,
    pending: VecDeque<Vec<u8>>,
    line: usize,
}

impl<R: BufRead> Tokens<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            pending: VecDeque::new(),
            line: 0,
        }
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn next_token(&mut self) -> Result<Option<Vec<u8>>, ErrorBox> {
        while self.pending.is_empty() {
            let mut buf = Vec::new();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                return Ok(None);
            }

            self.line += 1;
            self.pending.extend(
                buf.split(u8::is_ascii_whitespace)
                    .filter(|token| !token.is_empty())
                    .map(<[u8]>::to_vec),
            );
        }

        Ok(self.pending.pop_front())
    }
}

pub fn parse_number(token: &[u8]) -> Option<f64> {
    std::str::from_utf8(token).ok()?.parse().ok()
}

enum Field {
    Number(f64),
    Malformed,
    End,
}

/// Reads `t mx my` triples from a whitespace separated stream.
///
/// Line breaks carry no meaning, a triple may span several lines. The stream ends at the first
/// token that is not a number, the rest of the input is never looked at.
pub struct Reader<R> {
    tokens: Tokens<R>,
    done: bool,
}

impl Reader<BufReader<File>> {
    pub fn open(path: &Path) -> Result<Self, ErrorBox> {
        let file = File::open(path)
            .map_err(|e| format!("Unable to open '{}': {e}", path.display()))?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> Reader<R> {
    pub fn new(input: R) -> Self {
        Self {
            tokens: Tokens::new(input),
            done: false,
        }
    }

    fn next_field(&mut self) -> Result<Field, ErrorBox> {
        let Some(token) = self.tokens.next_token()? else {
            return Ok(Field::End);
        };

        match parse_number(&token) {
            Some(value) => Ok(Field::Number(value)),
            None => {
                log::warn!(
                    "Stopped reading measurements at line {}: '{}' is not a number",
                    self.tokens.line(),
                    String::from_utf8_lossy(&token)
                );
                Ok(Field::Malformed)
            }
        }
    }

    fn next_sample(&mut self) -> Result<Option<Sample>, ErrorBox> {
        let mut values = [0.0; 3];

        for (i, value) in values.iter_mut().enumerate() {
            match self.next_field()? {
                Field::Number(v) => *value = v,
                Field::Malformed => return Ok(None),
                Field::End => {
                    if i > 0 {
                        log::warn!("Ignoring incomplete measurement at end of input");
                    }
                    return Ok(None);
                }
            }
        }

        let [t, mx, my] = values;
        Ok(Some(Sample::new(t, mx, my)))
    }
}

impl<R: BufRead> Iterator for Reader<R> {
    type Item = Result<Sample, ErrorBox>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let next = self.next_sample().transpose();
        if !matches!(next, Some(Ok(_))) {
            self.done = true;
        }

        next
    }
}
