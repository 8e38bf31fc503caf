use anyhow::Result;
use std::io::{BufRead, Write};
use sweeper_core::{Game, GameState, MinefieldGenerator, MoveResult};

use crate::input::read_move;
use crate::render::render;

/// Plays `game` to the end, reading moves from `input` and drawing to `output`.
pub(crate) fn play<G: MinefieldGenerator>(
    game: &mut Game<G>,
    input: &mut impl BufRead,
    output: &mut impl Write,
    color: bool,
) -> Result<GameState> {
    loop {
        write!(output, "{}", render(&game.view(false), color))?;
        let coords = read_move(input, output, game.size())?;
        log::debug!("move at {:?}", coords);

        match game.submit_move(coords)? {
            MoveResult::AlreadyRevealed => {
                writeln!(output, "You've already selected this cell. Try again.")?;
            }
            MoveResult::HitMine => {
                write!(output, "{}", render(&game.view(true), color))?;
                writeln!(output, "You lose")?;
                return Ok(game.state());
            }
            MoveResult::Revealed(_) if game.state() == GameState::Won => {
                write!(output, "{}", render(&game.view(false), color))?;
                writeln!(output, "You win")?;
                return Ok(game.state());
            }
            MoveResult::Revealed(count) => {
                log::debug!("revealed {} cells, {} left", count, game.cells_remaining());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use sweeper_core::{Grid, PresetMinefieldGenerator};

    fn preset(size: (u8, u8), mines: &[(u8, u8)]) -> Game<PresetMinefieldGenerator> {
        Game::from_grid(
            Grid::from_mine_coords(size, mines).unwrap(),
            PresetMinefieldGenerator::default(),
        )
        .unwrap()
    }

    fn run(game: &mut Game<PresetMinefieldGenerator>, moves: &str) -> (Result<GameState>, String) {
        let mut input = Cursor::new(moves.to_string());
        let mut output = Vec::new();
        let state = play(game, &mut input, &mut output, false);
        (state, String::from_utf8(output).unwrap())
    }

    #[test]
    fn losing_game_shows_the_mines() {
        let mut game = preset((3, 3), &[(0, 0), (2, 2)]);

        let (state, output) = run(&mut game, "1\n3\n1\n3\n1\n1\n");

        assert_eq!(state.unwrap(), GameState::Lost);
        assert!(output.contains("You've already selected this cell. Try again."));
        assert!(output.ends_with("1  *  1  .  \n2  H  2  1  \n3  H  H  *  \nYou lose\n"));
    }

    #[test]
    fn winning_game_reports_the_win() {
        let mut game = preset((3, 3), &[(0, 0)]);

        let (state, output) = run(&mut game, "3\n3\n");

        assert_eq!(state.unwrap(), GameState::Won);
        assert!(output.ends_with("1  H  1  .  \n2  1  1  .  \n3  .  .  .  \nYou win\n"));
    }

    #[test]
    fn first_move_on_a_mine_continues_the_game() {
        let mut game = preset((1, 4), &[(0, 3)]);

        let (state, output) = run(&mut game, "1\n4\n1\n2\n");

        assert_eq!(state.unwrap(), GameState::Won);
        assert!(!output.contains("You lose"));
    }

    #[test]
    fn running_out_of_input_is_an_error() {
        let mut game = preset((3, 3), &[(0, 0), (2, 2)]);

        let (state, _) = run(&mut game, "1\n3\n");

        assert!(state.is_err());
        assert_eq!(game.state(), GameState::Playing);
    }
}
