//! Pairwise score tables loaded from delimited text
//!
//! The format is a header row of column symbols followed by one row per
//! symbol: the row symbol, then one integer per column.
//!
//! ```text
//! # optional comment
//! *  A  C  G  T
//! A  2 -1 -1 -1
//! C -1  2 -1 -1
//! G -1 -1  2 -1
//! T -1 -1 -1  2
//! ```
//!
//! Fields may be separated by runs of spaces/tabs, commas or semicolons. The
//! leading corner label is optional; it is recognised because the header then
//! carries one more field than each row has values.

use nom::{
    branch::alt,
    bytes::complete::take_while1,
    character::complete::{digit1, one_of, space0, space1},
    combinator::{all_consuming, map_res, opt, recognize, value},
    multi::separated_list1,
    sequence::{delimited, pair},
    IResult,
};
use seqalign_core::{SeqAlignError, SeqAlignResult};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Dense symbol-by-symbol score table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreTable {
    row_symbols: Vec<u8>,
    col_symbols: Vec<u8>,
    row_index: HashMap<u8, usize>,
    col_index: HashMap<u8, usize>,
    cells: Vec<i32>,
}

impl ScoreTable {
    /// Cell at row symbol `row` and column symbol `col`, if the table has it
    pub fn get(&self, row: u8, col: u8) -> Option<i32> {
        let row = *self.row_index.get(&row)?;
        let col = *self.col_index.get(&col)?;
        Some(self.cells[row * self.col_symbols.len() + col])
    }

    pub fn row_symbols(&self) -> &[u8] {
        &self.row_symbols
    }

    pub fn col_symbols(&self) -> &[u8] {
        &self.col_symbols
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> SeqAlignResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let table = Self::parse(&contents)
            .map_err(|e| match e {
                SeqAlignError::Parse(msg) => {
                    SeqAlignError::Parse(format!("{}: {}", path.display(), msg))
                }
                other => other,
            })?;
        debug!(
            "Loaded score table {} ({} rows x {} columns)",
            path.display(),
            table.row_symbols.len(),
            table.col_symbols.len()
        );
        Ok(table)
    }

    /// A built-in table by name (case-insensitive)
    pub fn builtin(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "blosum62" => Some(Self::blosum62()),
            _ => None,
        }
    }

    /// Built-in table name, or else a path to a table file
    pub fn resolve(name: &str) -> SeqAlignResult<Self> {
        match Self::builtin(name) {
            Some(table) => Ok(table),
            None => Self::from_path(name),
        }
    }

    pub fn parse(text: &str) -> SeqAlignResult<Self> {
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'));

        let (header_line, header) = lines
            .next()
            .ok_or_else(|| SeqAlignError::Parse("score table is empty".to_string()))?;
        let header = split_fields(header_line, header)?;

        let mut rows: Vec<(usize, u8, Vec<i32>)> = Vec::new();
        for (line_no, line) in lines {
            let fields = split_fields(line_no, line)?;
            let (symbol, values) = fields
                .split_first()
                .ok_or_else(|| parse_error(line_no, "empty row"))?;
            let symbol = table_symbol(line_no, symbol)?;
            let values = values
                .iter()
                .map(|field| cell_value(line_no, field))
                .collect::<SeqAlignResult<Vec<i32>>>()?;
            rows.push((line_no, symbol, values));
        }

        let width = match rows.first() {
            Some((_, _, values)) if !values.is_empty() => values.len(),
            Some((line_no, _, _)) => return Err(parse_error(*line_no, "row has no values")),
            None => {
                return Err(SeqAlignError::Parse(
                    "score table has a header but no rows".to_string(),
                ))
            }
        };

        let header = if header.len() == width + 1 {
            &header[1..]
        } else if header.len() == width {
            &header[..]
        } else {
            return Err(parse_error(
                header_line,
                &format!(
                    "header has {} fields but rows have {} values",
                    header.len(),
                    width
                ),
            ));
        };

        let mut col_symbols = Vec::with_capacity(width);
        let mut col_index = HashMap::with_capacity(width);
        for field in header {
            let symbol = table_symbol(header_line, field)?;
            if col_index.insert(symbol, col_symbols.len()).is_some() {
                return Err(parse_error(
                    header_line,
                    &format!("duplicate column symbol {:?}", symbol as char),
                ));
            }
            col_symbols.push(symbol);
        }

        let mut row_symbols = Vec::with_capacity(rows.len());
        let mut row_index = HashMap::with_capacity(rows.len());
        let mut cells = Vec::with_capacity(rows.len() * width);
        for (line_no, symbol, values) in rows {
            if values.len() != width {
                return Err(parse_error(
                    line_no,
                    &format!("expected {} values, found {}", width, values.len()),
                ));
            }
            if row_index.insert(symbol, row_symbols.len()).is_some() {
                return Err(parse_error(
                    line_no,
                    &format!("duplicate row symbol {:?}", symbol as char),
                ));
            }
            row_symbols.push(symbol);
            cells.extend(values);
        }

        Ok(Self {
            row_symbols,
            col_symbols,
            row_index,
            col_index,
            cells,
        })
    }

    /// BLOSUM62 substitution matrix for protein sequences
    pub fn blosum62() -> Self {
        let symbols = BLOSUM62_SYMBOLS.to_vec();
        let index: HashMap<u8, usize> = symbols.iter().enumerate().map(|(i, &s)| (s, i)).collect();
        Self {
            row_symbols: symbols.clone(),
            col_symbols: symbols,
            row_index: index.clone(),
            col_index: index,
            cells: BLOSUM62_SCORES.iter().flatten().copied().collect(),
        }
    }
}

fn parse_error(line_no: usize, msg: &str) -> SeqAlignError {
    SeqAlignError::Parse(format!("line {}: {}", line_no, msg))
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == ',' || c == ';'
}

fn separator(input: &str) -> IResult<&str, ()> {
    alt((
        value((), delimited(space0, one_of(",;"), space0)),
        value((), space1),
    ))(input)
}

fn field(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| !is_separator(c))(input)
}

fn fields(input: &str) -> IResult<&str, Vec<&str>> {
    all_consuming(delimited(space0, separated_list1(separator, field), space0))(input)
}

fn integer(input: &str) -> IResult<&str, i32> {
    map_res(recognize(pair(opt(one_of("+-")), digit1)), |s: &str| {
        s.parse::<i32>()
    })(input)
}

fn split_fields(line_no: usize, line: &str) -> SeqAlignResult<Vec<&str>> {
    fields(line)
        .map(|(_, fields)| fields)
        .map_err(|_| parse_error(line_no, &format!("malformed line {:?}", line)))
}

fn table_symbol(line_no: usize, field: &str) -> SeqAlignResult<u8> {
    match field.as_bytes() {
        [b] if b.is_ascii_graphic() => Ok(*b),
        _ => Err(parse_error(
            line_no,
            &format!("{:?} is not a single symbol", field),
        )),
    }
}

fn cell_value(line_no: usize, field: &str) -> SeqAlignResult<i32> {
    all_consuming(integer)(field)
        .map(|(_, value)| value)
        .map_err(|_| parse_error(line_no, &format!("{:?} is not an integer score", field)))
}

const BLOSUM62_SYMBOLS: &[u8; 24] = b"ARNDCQEGHILKMFPSTWYVBZX*";

#[rustfmt::skip]
const BLOSUM62_SCORES: [[i32; 24]; 24] = [
    [ 4, -1, -2, -2,  0, -1, -1,  0, -2, -1, -1, -1, -1, -2, -1,  1,  0, -3, -2,  0, -2, -1,  0, -4],
    [-1,  5,  0, -2, -3,  1,  0, -2,  0, -3, -2,  2, -1, -3, -2, -1, -1, -3, -2, -3, -1,  0, -1, -4],
    [-2,  0,  6,  1, -3,  0,  0,  0,  1, -3, -3,  0, -2, -3, -2,  1,  0, -4, -2, -3,  3,  0, -1, -4],
    [-2, -2,  1,  6, -3,  0,  2, -1, -1, -3, -4, -1, -3, -3, -1,  0, -1, -4, -3, -3,  4,  1, -1, -4],
    [ 0, -3, -3, -3,  9, -3, -4, -3, -3, -1, -1, -3, -1, -2, -3, -1, -1, -2, -2, -1, -3, -3, -2, -4],
    [-1,  1,  0,  0, -3,  5,  2, -2,  0, -3, -2,  1,  0, -3, -1,  0, -1, -2, -1, -2,  0,  3, -1, -4],
    [-1,  0,  0,  2, -4,  2,  5, -2,  0, -3, -3,  1, -2, -3, -1,  0, -1, -3, -2, -2,  1,  4, -1, -4],
    [ 0, -2,  0, -1, -3, -2, -2,  6, -2, -4, -4, -2, -3, -3, -2,  0, -2, -2, -3, -3, -1, -2, -1, -4],
    [-2,  0,  1, -1, -3,  0,  0, -2,  8, -3, -3, -1, -2, -1, -2, -1, -2, -2,  2, -3,  0,  0, -1, -4],
    [-1, -3, -3, -3, -1, -3, -3, -4, -3,  4,  2, -3,  1,  0, -3, -2, -1, -3, -1,  3, -3, -3, -1, -4],
    [-1, -2, -3, -4, -1, -2, -3, -4, -3,  2,  4, -2,  2,  0, -3, -2, -1, -2, -1,  1, -4, -3, -1, -4],
    [-1,  2,  0, -1, -3,  1,  1, -2, -1, -3, -2,  5, -1, -3, -1,  0, -1, -3, -2, -2,  0,  1, -1, -4],
    [-1, -1, -2, -3, -1,  0, -2, -3, -2,  1,  2, -1,  5,  0, -2, -1, -1, -1, -1,  1, -3, -1, -1, -4],
    [-2, -3, -3, -3, -2, -3, -3, -3, -1,  0,  0, -3,  0,  6, -4, -2, -2,  1,  3, -1, -3, -3, -1, -4],
    [-1, -2, -2, -1, -3, -1, -1, -2, -2, -3, -3, -1, -2, -4,  7, -1, -1, -4, -3, -2, -2, -1, -2, -4],
    [ 1, -1,  1,  0, -1,  0,  0,  0, -1, -2, -2,  0, -1, -2, -1,  4,  1, -3, -2, -2,  0,  0,  0, -4],
    [ 0, -1,  0, -1, -1, -1, -1, -2, -2, -1, -1, -1, -1, -2, -1,  1,  5, -2, -2,  0, -1, -1,  0, -4],
    [-3, -3, -4, -4, -2, -2, -3, -2, -2, -3, -2, -3, -1,  1, -4, -3, -2, 11,  2, -3, -4, -3, -2, -4],
    [-2, -2, -2, -3, -2, -1, -2, -3,  2, -1, -1, -2, -1,  3, -3, -2, -2,  2,  7, -1, -3, -2, -1, -4],
    [ 0, -3, -3, -3, -1, -2, -2, -3, -3,  3,  1, -2,  1, -1, -2, -2,  0, -3, -1,  4, -3, -2, -1, -4],
    [-2, -1,  3,  4, -3,  0,  1, -1,  0, -3, -4,  0, -3, -3, -2,  0, -1, -4, -3, -3,  4,  1, -1, -4],
    [-1,  0,  0,  1, -3,  3,  4, -2,  0, -3, -3,  1, -1, -3, -1,  0, -1, -3, -2, -2,  1,  4, -1, -4],
    [ 0, -1, -1, -1, -2, -1, -1, -1, -1, -1, -1, -1, -1, -1, -2,  0,  0, -2, -1, -1, -1, -1, -1, -4],
    [-4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4,  1],
];
