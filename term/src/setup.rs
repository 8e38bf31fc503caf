use anyhow::Result;
use clap::ValueEnum;
use std::io::{BufRead, Write};
use sweeper_core::{CUSTOM_SIZE_RANGE, Difficulty};

use crate::prompt::{ask, ask_in_range};

/// Preset levels selectable from the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum Level {
    Beginner,
    Intermediate,
    Expert,
}

impl From<Level> for Difficulty {
    fn from(level: Level) -> Self {
        match level {
            Level::Beginner => Difficulty::Beginner,
            Level::Intermediate => Difficulty::Intermediate,
            Level::Expert => Difficulty::Expert,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum MenuChoice {
    Preset(Level),
    Custom,
}

fn parse_menu_choice(answer: &str) -> Option<MenuChoice> {
    match answer.chars().next()?.to_ascii_lowercase() {
        'b' => Some(MenuChoice::Preset(Level::Beginner)),
        'i' => Some(MenuChoice::Preset(Level::Intermediate)),
        'e' => Some(MenuChoice::Preset(Level::Expert)),
        'c' => Some(MenuChoice::Custom),
        _ => None,
    }
}

/// Runs the interactive difficulty menu.
pub(crate) fn choose_difficulty(input: &mut impl BufRead, output: &mut impl Write) -> Result<Difficulty> {
    writeln!(output, "Welcome to Minesweeper")?;

    let choice = loop {
        let answer = ask(input, output, "(B)eginner, (I)ntermediate, (E)xpert, or (C)ustom? ")?;
        if let Some(choice) = parse_menu_choice(&answer) {
            break choice;
        }
    };

    let difficulty = match choice {
        MenuChoice::Preset(level) => level.into(),
        MenuChoice::Custom => ask_custom(input, output)?,
    };
    log::debug!("difficulty: {:?}", difficulty);
    Ok(difficulty)
}

fn ask_custom(input: &mut impl BufRead, output: &mut impl Write) -> Result<Difficulty> {
    let rows = ask_in_range(
        input,
        output,
        "Number of rows? ",
        "Invalid row number",
        CUSTOM_SIZE_RANGE,
    )?;
    let cols = ask_in_range(
        input,
        output,
        "Number of columns? ",
        "Invalid column number",
        CUSTOM_SIZE_RANGE,
    )?;
    let mines = ask_in_range(
        input,
        output,
        "Number of mines? ",
        "Invalid number of mines",
        Difficulty::custom_mines_range((rows, cols)),
    )?;

    Ok(Difficulty::Custom {
        size: (rows, cols),
        mines,
    })
}
