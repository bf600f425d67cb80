//! Console request source
//!
//! Reads hall calls and drop-offs as lines of space separated integers.
//! Generic over the reader and writer so it can be driven from stdin or
//! from an in-memory buffer.

use std::io::{self, BufRead, Stdout, StdinLock, Write};

use anyhow::{bail, Context, Result};
use log::warn;

use super::car::Car;
use super::config::BuildingConfig;
use super::demand::DemandSource;
use super::types::Demand;

/// How many times a single question is asked before giving up
pub const MAX_PROMPT_ATTEMPTS: usize = 5;

pub struct ConsolePrompt<R, W> {
    input: R,
    output: W,
    max_attempts: usize,
}

impl ConsolePrompt<StdinLock<'static>, Stdout> {
    /// Prompt on stdout, read from stdin
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsolePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            max_attempts: MAX_PROMPT_ATTEMPTS,
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Give back the writer, e.g. to inspect what was printed
    pub fn into_output(self) -> W {
        self.output
    }

    /// Ask for a line of integers, each within `low..=high`
    ///
    /// An empty line is a valid empty sequence. Invalid lines are rejected
    /// and the question is asked again; running out of attempts gives an
    /// empty sequence. Hitting the end of input is an error.
    pub fn prompt_sequence(&mut self, prompt: &str, low: u32, high: u32) -> Result<Vec<u32>> {
        for _ in 0..self.max_attempts {
            writeln!(self.output, "{}", prompt)?;
            self.output.flush()?;

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .context("Failed to read input")?;
            if read == 0 {
                bail!("Input closed while waiting for: {}", prompt);
            }

            match parse_sequence(&line, low, high) {
                Ok(values) => return Ok(values),
                Err(e) => {
                    warn!("Rejected input {:?}: {}", line.trim(), e);
                    writeln!(self.output, "Invalid input: {}. Try again.", e)?;
                }
            }
        }

        warn!(
            "No valid answer to {:?} after {} attempts, treating as no requests",
            prompt, self.max_attempts
        );
        writeln!(self.output, "Too many invalid answers, skipping.")?;
        Ok(Vec::new())
    }

    /// Ask for floors and guest counts as two parallel sequences
    ///
    /// The whole question pair is repeated if the lengths differ or if the
    /// guests add up to more than `guest_limit`. Running out of attempts
    /// gives no requests.
    fn prompt_requests(
        &mut self,
        floors_prompt: &str,
        config: &BuildingConfig,
        guest_limit: Option<u32>,
    ) -> Result<Vec<Demand>> {
        for _ in 0..self.max_attempts {
            let floors = self.prompt_sequence(floors_prompt, 1, config.floors)?;
            let guests =
                self.prompt_sequence("How many guests per request?", 1, u32::MAX)?;

            if floors.len() != guests.len() {
                writeln!(self.output, "Input lengths don't match! Try again.")?;
                continue;
            }

            if let Some(limit) = guest_limit {
                let total: u64 = guests.iter().map(|&g| u64::from(g)).sum();
                if total > u64::from(limit) {
                    writeln!(
                        self.output,
                        "Drop-off quantity exceeds the {} guests aboard! Try again.",
                        limit
                    )?;
                    continue;
                }
            }

            return Ok(floors
                .into_iter()
                .zip(guests)
                .map(|(floor, guests)| Demand::new(floor, guests))
                .collect());
        }

        warn!(
            "No consistent requests after {} attempts, treating as no requests",
            self.max_attempts
        );
        writeln!(self.output, "Too many mismatched answers, skipping.")?;
        Ok(Vec::new())
    }
}

impl<R: BufRead, W: Write> DemandSource for ConsolePrompt<R, W> {
    fn hall_calls(&mut self, config: &BuildingConfig) -> Result<Vec<Demand>> {
        self.prompt_requests("What floor(s) would you like to call pick up?", config, None)
    }

    fn car_calls(&mut self, car: &Car, config: &BuildingConfig) -> Result<Vec<Demand>> {
        write!(self.output, "{}", car)?;
        if car.load() == 0 {
            writeln!(self.output, "Car {} has no guests aboard.", car.id())?;
            return Ok(Vec::new());
        }

        let prompt = format!(
            "What floor(s) would you like to call drop off for car {}?",
            car.id()
        );
        self.prompt_requests(&prompt, config, Some(car.load()))
    }
}

fn parse_sequence(line: &str, low: u32, high: u32) -> Result<Vec<u32>> {
    line.split_whitespace()
        .map(|token| {
            let value: u32 = token
                .parse()
                .with_context(|| format!("{:?} is not a whole number", token))?;
            if !(low..=high).contains(&value) {
                bail!("{} is outside {}..={}", value, low, high);
            }
            Ok(value)
        })
        .collect()
}
