use anyhow::{Context, Result, bail};
use std::io::{BufRead, Write};
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Prints `question` and returns the trimmed answer, failing when input is exhausted.
pub(crate) fn ask(input: &mut impl BufRead, output: &mut impl Write, question: &str) -> Result<String> {
    write!(output, "{}", question)?;
    output.flush()?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("Could not read from input")?;
    if read == 0 {
        bail!("Input ended while waiting for an answer to {:?}", question.trim());
    }
    Ok(line.trim().to_string())
}

/// Asks until the answer is a plain decimal number inside `range`.
pub(crate) fn ask_in_range<T>(
    input: &mut impl BufRead,
    output: &mut impl Write,
    question: &str,
    complaint: &str,
    range: RangeInclusive<T>,
) -> Result<T>
where
    T: FromStr + PartialOrd,
{
    loop {
        let answer = ask(input, output, question)?;
        match parse_in_range(&answer, &range) {
            Some(value) => return Ok(value),
            None => {
                log::trace!("rejected answer {:?}", answer);
                writeln!(output, "{}", complaint)?;
            }
        }
    }
}

/// Only ASCII digits are accepted, no signs or whitespace.
pub(crate) fn parse_in_range<T>(answer: &str, range: &RangeInclusive<T>) -> Option<T>
where
    T: FromStr + PartialOrd,
{
    if answer.is_empty() || !answer.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    answer.parse().ok().filter(|value| range.contains(value))
}
