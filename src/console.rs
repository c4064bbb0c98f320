//! Interactive play loop and scripted replay over a [`Session`].

use crate::config::GameConfig;
use crate::render::{render_board, render_score, render_turn};
use anyhow::{Context, Result, bail};
use std::io::{BufRead, Write};
use strictly_reversi::{MoveReport, Position, Session};
use tracing::{debug, info, instrument, warn};

/// Input that ends the game loop.
const QUIT: &[&str] = &["quit", "q", "exit"];

/// Board, score and turn (or result) for the current state of `session`.
pub fn describe(session: &Session, show_hints: bool) -> String {
    let snapshot = session.snapshot();
    let mut out = render_board(&snapshot, show_hints);
    out.push_str(&render_score(&snapshot, session.names()));
    out.push('\n');
    match (render_turn(&snapshot, session.names()), session.game_over()) {
        (Some(turn), _) => out.push_str(&turn),
        (None, Some(game_over)) => out.push_str(&game_over.message()),
        (None, None) => {}
    }
    out.push('\n');
    out
}

/// Console front end reading moves line by line.
pub struct Console<R, W> {
    input: R,
    output: W,
    session: Session,
    show_hints: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console for a fresh game.
    #[instrument(skip(config, input, output))]
    pub fn new(config: &GameConfig, input: R, output: W) -> Self {
        Self {
            input,
            output,
            session: Session::new(config.names()),
            show_hints: *config.show_hints(),
        }
    }

    /// Returns the underlying session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Runs games until the players quit or input ends.
    ///
    /// Returns the number of games played to completion.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<usize> {
        let mut finished = 0;
        loop {
            write!(self.output, "\n{}> ", describe(&self.session, self.show_hints))?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                debug!("Input closed");
                return Ok(finished);
            };
            if QUIT.contains(&line.to_ascii_lowercase().as_str()) {
                info!("Players quit");
                return Ok(finished);
            }

            let position = match line.parse::<Position>() {
                Ok(position) => position,
                Err(e) => {
                    writeln!(self.output, "Invalid move: {}", e)?;
                    continue;
                }
            };

            match self.session.submit_move(position) {
                Ok(MoveReport::Applied(_)) => {}
                Ok(MoveReport::Finished { .. }) => {
                    finished += 1;
                    write!(self.output, "\n{}", describe(&self.session, false))?;
                    if !self.ask_restart()? {
                        return Ok(finished);
                    }
                    self.session.restart();
                }
                Err(e) => {
                    writeln!(self.output, "Invalid move: {}", e)?;
                }
            }
        }
    }

    fn ask_restart(&mut self) -> Result<bool> {
        write!(self.output, "Start again? [y/N] ")?;
        self.output.flush()?;
        let answer = self.read_line()?.unwrap_or_default().to_ascii_lowercase();
        Ok(matches!(answer.as_str(), "y" | "yes"))
    }

    /// Next non-empty trimmed line, or `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        loop {
            let mut buf = String::new();
            let read = self
                .input
                .read_line(&mut buf)
                .context("Failed to read line from input")?;
            if read == 0 {
                return Ok(None);
            }
            let line = buf.trim();
            if !line.is_empty() {
                return Ok(Some(line.to_string()));
            }
        }
    }
}

/// Plays `moves` from the opening and returns the resulting session.
///
/// Fails on the first move that cannot be parsed or is rejected.
#[instrument(skip(moves), fields(count = moves.len()))]
pub fn replay(moves: &[String], config: &GameConfig) -> Result<Session> {
    let mut session = Session::new(config.names());
    for (index, text) in moves.iter().enumerate() {
        let position: Position = text
            .parse()
            .with_context(|| format!("Move {} ({}) is not a square", index + 1, text))?;
        if let Err(e) = session.submit_move(position) {
            warn!(index, move_text = %text, error = %e, "Replay stopped");
            bail!("Move {} ({}) rejected: {}", index + 1, text, e);
        }
    }
    info!(moves = moves.len(), over = session.phase().is_over(), "Replay complete");
    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(script: &str) -> (String, usize) {
        let config = GameConfig::default();
        let mut output = Vec::new();
        let finished = {
            let mut console = Console::new(&config, script.as_bytes(), &mut output);
            console.run().unwrap()
        };
        (String::from_utf8(output).unwrap(), finished)
    }

    #[test]
    fn test_quit_immediately() {
        let (out, finished) = run("quit\n");
        assert_eq!(finished, 0);
        assert!(out.contains("Player One (X) to move"));
    }

    #[test]
    fn test_bad_input_is_reported() {
        let (out, _) = run("zz\nd3\n\n");
        assert_eq!(out.matches("Invalid move").count(), 2);
    }

    #[test]
    fn test_replay_reports_failing_move() {
        let moves = vec!["e3".to_string(), "e3".to_string()];
        let err = replay(&moves, &GameConfig::default()).unwrap_err();
        assert!(err.to_string().starts_with("Move 2 (e3) rejected"));
    }
}
