//! Driving the engine from text input.

use crate::config::PresentationConfig;
use crate::render::{render_footer, render_screen};
use anyhow::{Context, Result, bail};
use std::io::{BufRead, Write};
use tictactoe_engine::{BoardState, Move, Outcome, Player, Position, ReplayError, RuleEngine};
use tracing::{debug, info, instrument};

/// Runs an interactive game until it has an outcome.
///
/// Each line of `input` is either a board index or a position label. Rejected
/// input is reported on `output` and the same player is asked again.
///
/// # Errors
///
/// Fails when reading or writing fails, or when `input` ends before the game does.
#[instrument(skip_all)]
pub fn play<R: BufRead, W: Write>(
    config: &PresentationConfig,
    mut input: R,
    output: &mut W,
) -> Result<Outcome> {
    let mut state = BoardState::new();
    let mut line = String::new();

    loop {
        writeln!(output, "{}\n", render_screen(config, &state))?;

        let outcome = RuleEngine::status(&state);
        if outcome.is_terminal() {
            info!(%outcome, moves = state.moves_played(), "Game finished");
            writeln!(output, "{}\n\n{}", outcome, render_footer(config))?;
            return Ok(outcome);
        }

        write!(
            output,
            "Player {}, choose a square (0-8 or a name like 'center'): ",
            state.turn()
        )?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line).context("Failed to read move")? == 0 {
            bail!("Input closed before the game ended");
        }

        match read_move(&state, line.trim()) {
            Ok(next) => state = next,
            Err(err) => {
                debug!(error = %err, "Move rejected");
                writeln!(output, "{}", err)?;
            }
        }
    }
}

/// Interprets one line of input as a move by the player to move.
///
/// Keeps the engine's [`RuleError`](tictactoe_engine::RuleError) or
/// [`ParseError`](tictactoe_engine::ParseError) as the error value.
fn read_move(state: &BoardState, text: &str) -> Result<BoardState> {
    if let Ok(index) = text.parse::<i32>() {
        return Ok(RuleEngine::apply_move(state, index, state.turn())?);
    }
    let position = text.parse::<Position>()?;
    Ok(RuleEngine::apply(state, Move::new(state.turn(), position))?)
}

/// Replays board indices, alternating from X, and prints the final screen.
///
/// # Errors
///
/// Fails with the engine's [`RuleError`](tictactoe_engine::RuleError),
/// wrapped with the move number, on the first rejected index. The board
/// reached so far is printed first.
#[instrument(skip(config, output))]
pub fn replay<W: Write>(
    config: &PresentationConfig,
    indices: &[i32],
    output: &mut W,
) -> Result<Outcome> {
    let (moves, out_of_range) = to_moves(indices);

    let (state, err) = match (RuleEngine::replay(&moves), out_of_range) {
        (Ok(state), None) => {
            let outcome = RuleEngine::status(&state);
            writeln!(
                output,
                "{}\n\n{}\n\n{}",
                render_screen(config, &state),
                outcome,
                render_footer(config)
            )?;
            return Ok(outcome);
        }
        (Ok(state), Some(err)) => (state, err),
        // Every move before the rejected one was accepted.
        (Err(err), _) => (RuleEngine::replay(&moves[..err.index])?, err),
    };

    writeln!(output, "{}\n", render_screen(config, &state))?;
    Err(anyhow::Error::new(err.source).context(format!(
        "Move {} (square {}) rejected",
        err.index, indices[err.index]
    )))
}

/// Turns raw indices into moves, X on even turns and O on odd ones.
///
/// Stops at the first index outside 0-8 and reports it alongside the moves
/// read so far.
fn to_moves(indices: &[i32]) -> (Vec<Move>, Option<ReplayError>) {
    let mut moves = Vec::with_capacity(indices.len());
    for (index, &raw) in indices.iter().enumerate() {
        let player = if index % 2 == 0 { Player::X } else { Player::O };
        match Position::try_from(raw) {
            Ok(position) => moves.push(Move::new(player, position)),
            Err(source) => return (moves, Some(ReplayError { index, source })),
        }
    }
    (moves, None)
}
