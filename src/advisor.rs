use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, StartingHand};
use crate::decision::{Action, Decision, make_decision};
use crate::error::ValidationError;
use crate::position::Position;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AdvisorConfig {
    pub no_color: bool,
    /// Table size used when the caller does not give one.
    pub default_players: u32,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            default_players: 6,
        }
    }
}

impl AdvisorConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        serde_json::from_str(&raw).with_context(|| format!("parsing config {}", path.display()))
    }
}

/// One hand's worth of parsed input.
#[derive(Debug, Clone, PartialEq)]
pub struct Situation {
    pub hand: StartingHand,
    pub position: Position,
    pub stack_bb: u32,
    pub player_count: u32,
    pub actions: Vec<String>,
}

impl Situation {
    pub fn decide(&self) -> Decision {
        make_decision(
            &self.hand,
            &self.position,
            self.stack_bb,
            self.player_count,
            self.actions.as_slice(),
        )
    }
}

/// Splits a comma separated action line, dropping blank entries.
pub fn parse_actions(line: &str) -> Vec<String> {
    line.split(',')
        .map(str::trim)
        .filter(|action| !action.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn parse_count(field: &'static str, raw: &str) -> Result<u32, ValidationError> {
    raw.trim()
        .parse()
        .map_err(|_| ValidationError::InvalidNumber {
            field,
            value: raw.trim().to_string(),
        })
}

pub struct Advisor {
    config: AdvisorConfig,
}

enum Prompted {
    Situation(Situation),
    Invalid(ValidationError),
    Closed,
}

impl Advisor {
    pub fn new(config: AdvisorConfig) -> Self {
        Self { config }
    }

    pub fn run(&self) -> Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with(stdin.lock(), stdout.lock())
    }

    /// Prompt loop over arbitrary streams. Returns when the user declines
    /// another hand or the input ends.
    pub fn run_with<R: BufRead, W: Write>(&self, mut input: R, mut output: W) -> Result<()> {
        loop {
            self.print_banner(&mut output)?;
            let situation = match self.prompt_situation(&mut input, &mut output)? {
                Prompted::Situation(situation) => situation,
                Prompted::Invalid(err) => {
                    tracing::warn!(error = %err, "rejected input");
                    writeln!(output, "Error: {err}")?;
                    continue;
                }
                Prompted::Closed => {
                    writeln!(output)?;
                    writeln!(output, "Goodbye!")?;
                    return Ok(());
                }
            };

            let decision = situation.decide();
            self.print_decision(&mut output, &decision)?;

            let again = match read_answer(&mut input, &mut output, "\nAnalyze another hand? (y/n): ")? {
                Some(answer) => answer.to_lowercase(),
                None => return Ok(()),
            };
            if again != "y" {
                return Ok(());
            }
        }
    }

    /// Numbers are checked as soon as they are entered; card codes once the
    /// whole hand has been described.
    fn prompt_situation<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        output: &mut W,
    ) -> Result<Prompted> {
        let Some(first) = read_answer(input, output, "Enter first card (e.g., AH): ")? else {
            return Ok(Prompted::Closed);
        };
        let Some(second) = read_answer(input, output, "Enter second card (e.g., KS): ")? else {
            return Ok(Prompted::Closed);
        };
        let Some(position) = read_answer(
            input,
            output,
            "Enter position (UTG/UTG+1/MP/MP+1/CO/BTN/SB/BB): ",
        )?
        else {
            return Ok(Prompted::Closed);
        };
        let Some(stack) = read_answer(input, output, "Enter stack size in big blinds: ")? else {
            return Ok(Prompted::Closed);
        };
        let stack_bb = match parse_count("Stack size", &stack) {
            Ok(stack_bb) => stack_bb,
            Err(err) => return Ok(Prompted::Invalid(err)),
        };
        let Some(players) = read_answer(input, output, "Enter total players in hand: ")? else {
            return Ok(Prompted::Closed);
        };
        let player_count = match parse_count("Player count", &players) {
            Ok(player_count) => player_count,
            Err(err) => return Ok(Prompted::Invalid(err)),
        };
        let Some(actions) = read_answer(
            input,
            output,
            "Enter opponent actions (e.g., FOLD,CALL,RAISE-5): ",
        )?
        else {
            return Ok(Prompted::Closed);
        };

        let hand = match parse_hand(&first, &second) {
            Ok(hand) => hand,
            Err(err) => return Ok(Prompted::Invalid(err)),
        };
        Ok(Prompted::Situation(Situation {
            hand,
            position: Position::parse(&position.to_uppercase()),
            stack_bb,
            player_count,
            actions: parse_actions(&actions),
        }))
    }

    fn print_banner<W: Write>(&self, output: &mut W) -> io::Result<()> {
        if self.config.no_color {
            writeln!(output, "\n=== POKER STRATEGY ADVISOR ===\n")
        } else {
            writeln!(output, "\n{}\n", "=== POKER STRATEGY ADVISOR ===".bold().cyan())
        }
    }

    pub fn print_decision<W: Write>(&self, output: &mut W, decision: &Decision) -> io::Result<()> {
        let action = describe_action(decision);
        if self.config.no_color {
            writeln!(output, "\n=== RECOMMENDATION ===")?;
            writeln!(output, "Action: {action}")?;
            writeln!(output, "Confidence: {}%", decision.confidence)?;
        } else {
            writeln!(output, "\n{}", "=== RECOMMENDATION ===".bold().magenta())?;
            let styled = match decision.action {
                Action::Raise => action.bold().green().to_string(),
                Action::Call => action.bold().yellow().to_string(),
                Action::Fold => action.bold().red().to_string(),
            };
            writeln!(output, "{} {}", "Action:".bold().white(), styled)?;
            writeln!(
                output,
                "{} {}%",
                "Confidence:".bold().white(),
                decision.confidence
            )?;
        }
        writeln!(output, "\nReasoning:\n{}", decision.reasoning)
    }
}

fn parse_hand(first: &str, second: &str) -> Result<StartingHand, ValidationError> {
    let first: Card = first.parse()?;
    let second: Card = second.parse()?;
    Ok(StartingHand::new(first, second))
}

fn read_answer<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<Option<String>> {
    write!(output, "{prompt}")?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// `RAISE 5BB`, `CALL` or `FOLD`; the size is shown only when non-zero.
pub fn describe_action(decision: &Decision) -> String {
    if decision.amount > 0 {
        format!("{} {}BB", decision.action, decision.amount)
    } else {
        decision.action.to_string()
    }
}
