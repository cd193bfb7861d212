//! Character cursor with an unbounded, ordered pushback stack.

use std::io::{self, Read};
use std::str::Chars;

use tracing::warn;

/// Whitespace as the classic `isspace` sees it (includes vertical tab).
pub fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
}

/// Wraps a character source and replays pushed-back characters before
/// resuming it. The last character pushed back is the first one read.
#[derive(Debug)]
pub struct InputCursor<S> {
    source: S,
    pushback: Vec<char>,
    position: usize,
}

impl<S: Iterator<Item = char>> InputCursor<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            pushback: Vec::new(),
            position: 0,
        }
    }

    /// Return `c` to the front of the pending input.
    pub fn push_back(&mut self, c: char) {
        self.pushback.push(c);
        self.position = self.position.saturating_sub(1);
    }

    /// Look at the next character without consuming it.
    pub fn peek(&mut self) -> Option<char> {
        let c = self.next()?;
        self.push_back(c);
        Some(c)
    }

    /// Consume every leading whitespace character; returns how many.
    pub fn skip_space(&mut self) -> usize {
        let mut skipped = 0;
        while let Some(c) = self.next() {
            if !is_space(c) {
                self.push_back(c);
                break;
            }
            skipped += 1;
        }
        skipped
    }

    /// Characters waiting in the pushback stack.
    pub fn pending(&self) -> usize {
        self.pushback.len()
    }

    /// Net number of characters consumed so far.
    pub fn position(&self) -> usize {
        self.position
    }
}

impl<S: Iterator<Item = char>> Iterator for InputCursor<S> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        let c = self.pushback.pop().or_else(|| self.source.next())?;
        self.position += 1;
        Some(c)
    }
}

impl<'a> From<&'a str> for InputCursor<Chars<'a>> {
    fn from(input: &'a str) -> Self {
        Self::new(input.chars())
    }
}

//  Byte streams

/// Maps each byte of a reader to one `char` (Latin-1). An I/O error ends
/// the stream.
#[derive(Debug)]
pub struct ByteChars<R> {
    bytes: io::Bytes<R>,
}

impl<R: Read> Iterator for ByteChars<R> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        match self.bytes.next()? {
            Ok(b) => Some(char::from(b)),
            Err(e) => {
                warn!(error = %e, "input stream failed; treating as end of input");
                None
            }
        }
    }
}

impl<R: Read> InputCursor<ByteChars<R>> {
    /// Cursor over a byte stream such as a locked stdin or a buffered file.
    pub fn from_reader(reader: R) -> Self {
        Self::new(ByteChars {
            bytes: reader.bytes(),
        })
    }
}
