use std::fs;
use std::iter::Peekable;
use std::path::Path;
use std::str::Chars;

use crate::error::{Error, Result};
use crate::persist::row;
use crate::types::Record;

/// Reads an inventory file.
///
/// Loads the whole file into memory, then splits it into rows. Quoted fields
/// may contain commas, doubled quotes and line breaks, so a row is not
/// always a single line.
pub struct CsvReader {
    data: String,
}

/// One parsed row and the line it starts on (1-based).
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub line: usize,
    pub fields: Vec<String>,
    /// The file ended inside a quoted field.
    pub unterminated: bool,
}

impl CsvReader {
    pub fn open(path: &Path) -> Result<Self> {
        Ok(CsvReader::new(fs::read_to_string(path)?))
    }

    pub fn new(data: String) -> Self {
        CsvReader { data }
    }

    /// Every non-blank row, header included.
    pub fn rows(&self) -> Rows<'_> {
        Rows {
            chars: self.data.chars().peekable(),
            line: 1,
        }
    }

    /// Decoded data rows, each paired with its line number. The header row
    /// is skipped.
    pub fn records(&self) -> impl Iterator<Item = (usize, Result<Record>)> + '_ {
        self.rows()
            .filter(|row| !is_header(row))
            .map(|row| (row.line, decode_row(&row)))
    }
}

fn is_header(row: &Row) -> bool {
    row.fields
        .first()
        .is_some_and(|first| first.eq_ignore_ascii_case("itemId"))
}

fn decode_row(row: &Row) -> Result<Record> {
    if row.unterminated {
        return Err(Error::Corruption("unterminated quoted field".into()));
    }
    row::decode(&row.fields)
}

/// Iterator over the rows of a CSV document.
pub struct Rows<'a> {
    chars: Peekable<Chars<'a>>,
    line: usize,
}

impl Rows<'_> {
    /// Parse one physical-or-longer row. `None` at end of input.
    fn parse_row(&mut self) -> Option<Row> {
        self.chars.peek()?;

        let line = self.line;
        let mut fields = Vec::new();
        let mut field = String::new();
        let mut quoted = false;
        let mut in_quotes = false;

        loop {
            let Some(c) = self.chars.next() else {
                break;
            };
            if in_quotes {
                match c {
                    '"' if self.chars.peek() == Some(&'"') => {
                        self.chars.next();
                        field.push('"');
                    }
                    '"' => in_quotes = false,
                    '\n' => {
                        self.line += 1;
                        field.push(c);
                    }
                    _ => field.push(c),
                }
                continue;
            }
            match c {
                // opening quote, possibly after padding
                '"' if !quoted && field.trim().is_empty() => {
                    field.clear();
                    quoted = true;
                    in_quotes = true;
                }
                ',' => fields.push(finish_field(&mut field, &mut quoted)),
                '\r' if self.chars.peek() == Some(&'\n') => {}
                '\n' => {
                    self.line += 1;
                    break;
                }
                // padding after a closing quote
                _ if quoted && c.is_whitespace() => {}
                _ => field.push(c),
            }
        }
        fields.push(finish_field(&mut field, &mut quoted));

        Some(Row {
            line,
            fields,
            unterminated: in_quotes,
        })
    }
}

fn finish_field(field: &mut String, quoted: &mut bool) -> String {
    let value = std::mem::take(field);
    let value = if *quoted { value } else { value.trim().to_string() };
    *quoted = false;
    value
}

impl Iterator for Rows<'_> {
    type Item = Row;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let row = self.parse_row()?;
            let blank = row.fields.len() == 1 && row.fields[0].is_empty() && !row.unterminated;
            if !blank {
                return Some(row);
            }
        }
    }
}
