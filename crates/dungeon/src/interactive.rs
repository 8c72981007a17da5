//! Prompt-driven re-run loop
//!
//! Reads `width height rooms [branches]` lines until a valid set arrives,
//! shows the dungeon, then offers to run again with the same parameters,
//! change them, or quit. End of input quits at any prompt.

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};
use dg_core::{DungeonGenerator, GenerationParams, RandomSource};
use tracing::debug;

use crate::render;

const PARAMS_PROMPT: &str = "width height rooms [branches]: ";
const MENU: &str = "[r] run again  [s] change parameters  [other] quit";

/// What the user picked after a dungeon was shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Again,
    Change,
    Quit,
}

impl Choice {
    pub fn parse(line: &str) -> Self {
        match line.trim() {
            "r" | "R" => Choice::Again,
            "s" | "S" => Choice::Change,
            _ => Choice::Quit,
        }
    }
}

/// Parse one parameter line. Branches default to zero.
pub fn parse_params_line(line: &str) -> Result<GenerationParams> {
    let values = line
        .split_whitespace()
        .map(|word| {
            word.parse::<i32>()
                .with_context(|| format!("`{word}` is not a number"))
        })
        .collect::<Result<Vec<_>>>()?;

    match values[..] {
        [width, height, rooms] => Ok(GenerationParams::new(width, height, rooms, 0)),
        [width, height, rooms, branches] => {
            Ok(GenerationParams::new(width, height, rooms, branches))
        }
        _ => bail!("expected 3 or 4 numbers, got {}", values.len()),
    }
}

fn read_line<I: BufRead>(input: &mut I) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

/// Ask until the parameters are usable, reporting every problem each time
fn prompt_params<I: BufRead, W: Write>(
    input: &mut I,
    out: &mut W,
) -> Result<Option<GenerationParams>> {
    loop {
        write!(out, "{PARAMS_PROMPT}")?;
        out.flush()?;
        let Some(line) = read_line(input)? else {
            return Ok(None);
        };

        let params = match parse_params_line(&line) {
            Ok(params) => params,
            Err(err) => {
                writeln!(out, "  {err:#}")?;
                continue;
            }
        };

        let violations = params.violations();
        if violations.is_empty() {
            return Ok(Some(params));
        }
        for violation in violations {
            writeln!(out, "  {violation}")?;
        }
    }
}

pub fn run<I: BufRead, W: Write, R: RandomSource>(
    input: &mut I,
    out: &mut W,
    rng: &mut R,
) -> Result<()> {
    let mut generator = DungeonGenerator::new();

    'params: loop {
        let Some(params) = prompt_params(input, out)? else {
            return Ok(());
        };

        loop {
            let grid = generator.generate(&params, rng)?;
            queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
            render::render(out, grid, &params)?;
            debug!(report = ?generator.report(), "interactive run");

            writeln!(out, "{MENU}")?;
            out.flush()?;
            let choice = read_line(input)?.map_or(Choice::Quit, |line| Choice::parse(&line));
            match choice {
                Choice::Again => continue,
                Choice::Change => continue 'params,
                Choice::Quit => return Ok(()),
            }
        }
    }
}
