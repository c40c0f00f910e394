#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};

use crate::{
    command::Command,
    game::GameState,
    player::Player,
    ui::{render_board, rules_text, status_line},
    PuzzleConfig,
};

const HELP: &str = "Commands: <id> (board/land), board <id>, land <id>, cross, reset, rules, help, quit";

/// Terminal player reading one command per line.
pub struct CliPlayer<R, W> {
    input: R,
    output: W,
    rules: String,
}

impl CliPlayer<io::StdinLock<'static>, io::Stdout> {
    /// Player bound to the process's stdin and stdout.
    pub fn stdio(config: &PuzzleConfig) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), config)
    }
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn new(input: R, output: W, config: &PuzzleConfig) -> Self {
        Self {
            input,
            output,
            rules: rules_text(config),
        }
    }

    /// Consume the player and hand back its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    fn show(&mut self, state: &GameState) -> io::Result<()> {
        writeln!(self.output)?;
        write!(self.output, "{}", render_board(state))?;
        writeln!(self.output, "{}", status_line(state))?;
        if state.status.is_over() {
            writeln!(self.output, "Type 'reset' to play again or 'quit' to leave.")?;
        }
        Ok(())
    }
}

impl<R: BufRead, W: Write> Player for CliPlayer<R, W> {
    fn next_command(&mut self, state: &GameState) -> anyhow::Result<Option<Command>> {
        self.show(state)?;
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            let line = line.trim();
            match line.to_ascii_lowercase().as_str() {
                "" => continue,
                "quit" | "exit" | "q" => return Ok(None),
                "help" | "?" => writeln!(self.output, "{}", HELP)?,
                "rules" => write!(self.output, "{}", self.rules)?,
                _ => match Command::parse(line) {
                    Some(cmd) => return Ok(Some(cmd)),
                    None => writeln!(self.output, "Unknown command '{}'. {}", line, HELP)?,
                },
            }
        }
    }

    fn handle_result(&mut self, command: &Command, accepted: bool, _state: &GameState) {
        if !accepted {
            let _ = writeln!(self.output, "Can't {} right now.", command);
        }
    }
}
