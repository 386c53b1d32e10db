use crate::utils::error::{GenError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DEFAULT_ROWS: usize = 3000;
pub const DEFAULT_COLS: usize = 30;
pub const DEFAULT_WORDS_PER_PHRASE: usize = 3;
pub const DEFAULT_SOURCE_URL: &str =
    "http://svnweb.freebsd.org/csrg/share/dict/words?view=co&content-type=text/plain";
pub const DEFAULT_OUTPUT_PATH: &str = "data.ts";

/// Candidate words, one per line of the fetched body. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    pub fn new(words: Vec<String>) -> Option<Self> {
        if words.iter().all(|w| w.trim().is_empty()) {
            return None;
        }
        Some(Self { words })
    }

    /// Splits a response body on line breaks. Lines are kept as-is, blanks included.
    pub fn from_body(body: &str, source_url: &str) -> Result<Self> {
        Self::new(split_lines(body)).ok_or_else(|| {
            GenError::EmptyWordList {
                source_url: source_url.to_string(),
            }
        })
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn get(&self, index: usize) -> &str {
        &self.words[index]
    }

    #[cfg(test)]
    pub(crate) fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }
}

/// Splits on `\n`, `\r`, `\r\n`, vertical tab, form feed, the file/group/record
/// separators, NEL and the Unicode line/paragraph separators.
/// A trailing boundary does not produce an empty last line.
fn split_lines(body: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = body.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        let end = match c {
            '\r' => match chars.peek() {
                Some(&(j, '\n')) => {
                    chars.next();
                    j + 1
                }
                _ => i + 1,
            },
            '\n' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}'
            | '\u{2029}' => i + c.len_utf8(),
            _ => continue,
        };
        lines.push(body[start..i].to_string());
        start = end;
    }

    if start < body.len() {
        lines.push(body[start..].to_string());
    }
    lines
}

/// The five cell templates, in selection order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Wrapper {
    Bold,
    Italic,
    Plain,
    RedSpan,
    Emphasis,
}

impl Wrapper {
    pub const ALL: [Wrapper; 5] = [
        Wrapper::Bold,
        Wrapper::Italic,
        Wrapper::Plain,
        Wrapper::RedSpan,
        Wrapper::Emphasis,
    ];

    fn delimiters(self) -> (&'static str, &'static str) {
        match self {
            Wrapper::Bold => ("<b>", "</b>"),
            Wrapper::Italic => ("<i>", "</i>"),
            Wrapper::Plain => ("", ""),
            Wrapper::RedSpan => ("<span style='color: red;'>", "</span>"),
            Wrapper::Emphasis => ("<em>", "</em>"),
        }
    }

    pub fn wrap(self, phrase: &str) -> String {
        let (open, close) = self.delimiters();
        format!("{open}{phrase}{close}")
    }

    /// Identifies the wrapper of a cell and returns it with the inner phrase.
    /// Anything without a known tag pair is `Plain`.
    pub fn detect(cell: &str) -> (Wrapper, &str) {
        for wrapper in Self::ALL {
            if wrapper == Wrapper::Plain {
                continue;
            }
            let (open, close) = wrapper.delimiters();
            if let Some(inner) = cell
                .strip_prefix(open)
                .and_then(|rest| rest.strip_suffix(close))
            {
                return (wrapper, inner);
            }
        }
        (Wrapper::Plain, cell)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableShape {
    pub rows: usize,
    pub cols: usize,
}

/// Row-major table of wrapped phrases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pub shape: TableShape,
    pub cells: Vec<Vec<String>>,
}

#[cfg(test)]
impl Grid {
    pub(crate) fn rows(&self) -> &[Vec<String>] {
        &self.cells
    }
}

/// How many cells each wrapper produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WrapperTally {
    counts: BTreeMap<Wrapper, usize>,
}

impl WrapperTally {
    pub fn record(&mut self, wrapper: Wrapper) {
        *self.counts.entry(wrapper).or_insert(0) += 1;
    }

    pub fn count(&self, wrapper: Wrapper) -> usize {
        self.counts.get(&wrapper).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
}

/// The payload written to disk: dimensions plus the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataModule {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<String>>,
}

impl From<Grid> for DataModule {
    fn from(grid: Grid) -> Self {
        Self {
            rows: grid.shape.rows,
            cols: grid.shape.cols,
            data: grid.cells,
        }
    }
}
