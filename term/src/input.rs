use anyhow::Result;
use std::io::{BufRead, Write};
use sweeper_core::Coord2;

use crate::prompt::ask_in_range;

/// Asks for a 1-indexed row and column and returns the 0-indexed position.
pub(crate) fn read_move(
    input: &mut impl BufRead,
    output: &mut impl Write,
    (rows, cols): Coord2,
) -> Result<Coord2> {
    let row = ask_in_range(
        input,
        output,
        "Enter a row: ",
        "Invalid row. Try again.",
        1..=rows,
    )?;
    let col = ask_in_range(
        input,
        output,
        "Enter a column: ",
        "Invalid column. Try again.",
        1..=cols,
    )?;
    Ok((row - 1, col - 1))
}
