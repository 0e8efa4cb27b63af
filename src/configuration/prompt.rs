//! Interactive console setup
//!
//! Asks for the body count, whether masses are random and, if not, one
//! mass per body. Invalid answers are reported and asked again; running
//! out of input is an error.

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};

use super::config::{validate_body_count, validate_manual_mass, BodiesConfig, BodyConfig};

/// Print `question` and read one trimmed line
fn ask<R: BufRead, W: Write>(input: &mut R, out: &mut W, question: &str) -> Result<String> {
    write!(out, "{question}")?;
    out.flush()?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("failed to read from console")?;
    if read == 0 {
        bail!("input ended before the configuration was complete");
    }
    Ok(line.trim().to_string())
}

fn ask_body_count<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<usize> {
    loop {
        let answer = ask(input, out, "Enter number of bodies (2-10): ")?;
        match answer.parse::<usize>() {
            Ok(n) => match validate_body_count(n) {
                Ok(n) => return Ok(n),
                Err(_) => writeln!(out, "Number of bodies must be between 2 and 10!")?,
            },
            Err(_) => writeln!(out, "Please enter an integer!")?,
        }
    }
}

fn ask_random_masses<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<bool> {
    loop {
        let answer = ask(input, out, "Generate random masses? (Y/N): ")?.to_uppercase();
        match answer.as_str() {
            "Y" => return Ok(true),
            "N" => return Ok(false),
            _ => writeln!(out, "Please choose Y (yes) or N (no)!")?,
        }
    }
}

fn ask_mass<R: BufRead, W: Write>(input: &mut R, out: &mut W, index: usize) -> Result<f64> {
    loop {
        let answer = ask(input, out, &format!("Mass of body {} (100-10000): ", index + 1))?;
        match answer.parse::<f64>() {
            Ok(m) => match validate_manual_mass(index, m) {
                Ok(m) => return Ok(m),
                Err(_) => writeln!(out, "Mass must be between 100 and 10000!")?,
            },
            Err(_) => writeln!(out, "Please enter a valid number!")?,
        }
    }
}

/// Collect a validated [`BodiesConfig`] from the console
pub fn prompt_bodies<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<BodiesConfig> {
    writeln!(out, "=== Simulation Configuration ===")?;

    let count = ask_body_count(input, out)?;
    let random_masses = ask_random_masses(input, out)?;

    let mut masses = Vec::new();
    if !random_masses {
        writeln!(out, "\nEnter masses for each body:")?;
        for i in 0..count {
            masses.push(BodyConfig::with_mass(ask_mass(input, out, i)?));
        }
    }

    Ok(BodiesConfig {
        count,
        random_masses,
        masses,
    })
}
