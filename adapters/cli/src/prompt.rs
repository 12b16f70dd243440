//! Interactive grid acquisition over a line-oriented console.
//!
//! Every answer is confirmed with a Continue / Retry / Cancel prompt, and
//! malformed rows can be retried without restarting the whole grid.

use std::io::{self, BufRead, Write};

use thiserror::Error;

const DIMENSIONS_PROMPT: &str = "Enter dimensions row count and column count separated by a space. ";
const CONFIRM_DIMENSIONS: &str = "Continue (C), Retry (R) Cancel (X)? ";
const CONFIRM_ROW: &str = "Continue (C) Retry (R) Cancel (X)? ";
const RETRY_ROW: &str = "Retry (R) Cancel (X)? ";

/// Errors that end interactive grid acquisition.
#[derive(Debug, Error)]
pub(crate) enum PromptError {
    /// The user picked the cancel option.
    #[error("user terminated")]
    UserTerminated,
    /// A prompt was built without any `(x)` choice markers.
    #[error("prompt {0:?} offers no choices")]
    NoChoices(String),
    /// The announced grid holds more cells than can be addressed.
    #[error("{rows} rows of {columns} columns is too many cells")]
    DimensionsTooLarge {
        /// Number of rows entered.
        rows: usize,
        /// Number of columns entered.
        columns: usize,
    },
    /// Input ended while an answer was still expected.
    #[error("input ended before the grid was complete")]
    UnexpectedEof,
    /// The dimensions line did not hold exactly two counts.
    #[error("expected a row count and a column count, found {0:?}")]
    MalformedDimensions(String),
    /// A value could not be parsed as a number.
    #[error("{0:?} is not a number")]
    InvalidNumber(String),
    /// A row value other than zero or one was entered.
    #[error("column value must be one or zero, found {0}")]
    IllegalCell(u64),
    /// A row held the wrong number of values.
    #[error("expected {expected} values, found {found}")]
    WrongCellCount {
        /// Number of columns announced for the grid.
        expected: usize,
        /// Number of values present on the line.
        found: usize,
    },
    /// Reading from or writing to the console failed.
    #[error("console i/o failed: {0}")]
    Io(#[from] io::Error),
}

/// Line-oriented console that walks the user through entering a grid.
#[derive(Debug)]
pub(crate) struct Console<R, W> {
    input: R,
    output: W,
}

impl<R, W> Console<R, W>
where
    R: BufRead,
    W: Write,
{
    pub(crate) fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Asks for the dimensions, then for every row, confirming each answer.
    pub(crate) fn read_grid(&mut self) -> Result<Vec<Vec<u8>>, PromptError> {
        let (rows, columns) = self.read_dimensions()?;
        let mut grid = Vec::new();
        for _ in 0..rows {
            grid.push(self.read_row(columns)?);
        }
        Ok(grid)
    }

    fn read_dimensions(&mut self) -> Result<(usize, usize), PromptError> {
        loop {
            write!(self.output, "{DIMENSIONS_PROMPT}")?;
            self.output.flush()?;
            let line = self.read_line()?;
            let (rows, columns) = parse_dimensions(&line)?;
            writeln!(
                self.output,
                "You entered {rows} rows and {columns} columns."
            )?;

            match self.choose("", CONFIRM_DIMENSIONS)? {
                'C' => return Ok((rows, columns)),
                'X' => return Err(PromptError::UserTerminated),
                _ => continue,
            }
        }
    }

    fn read_row(&mut self, columns: usize) -> Result<Vec<u8>, PromptError> {
        loop {
            let entries = loop {
                writeln!(
                    self.output,
                    "Enter a {columns} element row containing space separated ones or zeros"
                )?;
                let line = self.read_line()?;
                match parse_row(&line, columns) {
                    Ok(entries) => break entries,
                    Err(error) => {
                        let preamble = format!("Error: \"{error}\" ");
                        if self.choose(&preamble, RETRY_ROW)? == 'X' {
                            return Err(PromptError::UserTerminated);
                        }
                    }
                }
            };

            let echoed: Vec<String> = entries.iter().map(u8::to_string).collect();
            writeln!(self.output, "You entered [{}]", echoed.join(" "))?;

            match self.choose("", CONFIRM_ROW)? {
                'C' => return Ok(entries),
                'X' => return Err(PromptError::UserTerminated),
                _ => continue,
            }
        }
    }

    /// Prints `preamble` followed by `prompt` until the answer is one of the
    /// choices marked in `prompt`.
    fn choose(&mut self, preamble: &str, prompt: &str) -> Result<char, PromptError> {
        let choices = parse_choices(prompt)?;
        write!(self.output, "{preamble}")?;
        loop {
            write!(self.output, "{prompt}")?;
            self.output.flush()?;
            let response = self.read_line()?;
            let response = response.trim();

            let mut chars = response.chars();
            if let (Some(choice), None) = (chars.next(), chars.next()) {
                if choices.contains(&choice) {
                    return Ok(choice);
                }
            }
            writeln!(self.output, "{response:?} invalid choice, try again")?;
        }
    }

    fn read_line(&mut self) -> Result<String, PromptError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::UnexpectedEof);
        }
        Ok(line)
    }
}

/// Extracts the single characters wrapped in parentheses, e.g. `(C)`.
fn parse_choices(prompt: &str) -> Result<Vec<char>, PromptError> {
    let chars: Vec<char> = prompt.chars().collect();
    let choices: Vec<char> = chars
        .windows(3)
        .filter(|window| window[0] == '(' && window[2] == ')')
        .map(|window| window[1])
        .collect();
    if choices.is_empty() {
        return Err(PromptError::NoChoices(prompt.to_owned()));
    }
    Ok(choices)
}

fn parse_dimensions(line: &str) -> Result<(usize, usize), PromptError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let [rows, columns] = fields.as_slice() else {
        return Err(PromptError::MalformedDimensions(line.trim().to_owned()));
    };
    let rows = rows
        .parse::<usize>()
        .map_err(|_| PromptError::InvalidNumber((*rows).to_owned()))?;
    let columns = columns
        .parse::<usize>()
        .map_err(|_| PromptError::InvalidNumber((*columns).to_owned()))?;
    if rows.checked_mul(columns).is_none() {
        return Err(PromptError::DimensionsTooLarge { rows, columns });
    }
    Ok((rows, columns))
}

fn parse_row(line: &str, columns: usize) -> Result<Vec<u8>, PromptError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != columns {
        return Err(PromptError::WrongCellCount {
            expected: columns,
            found: fields.len(),
        });
    }

    fields
        .into_iter()
        .map(|field| {
            let value = field
                .parse::<u64>()
                .map_err(|_| PromptError::InvalidNumber(field.to_owned()))?;
            match value {
                0 | 1 => Ok(value as u8),
                other => Err(PromptError::IllegalCell(other)),
            }
        })
        .collect()
}
