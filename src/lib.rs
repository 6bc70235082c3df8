//! Summary statistics for files containing one chemical formula per line

use std::fmt::{self, Display, Formatter};

// External Crate Imports
use chemform::{Count, ElementTable, Formula, Result};
use rust_decimal::Decimal;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt::layer, prelude::*};

/// Sends logs to `stderr`, showing warnings and above unless `RUST_LOG` asks for something else
pub fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::WARN.into())
        .from_env_lossy();
    tracing_subscriber::registry()
        .with(layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

// Formula Statistics ==================================================================================================

/// A single formula from a batch, along with the line it was read from
#[derive(Clone, Debug)]
pub struct Entry<'a> {
    line: usize,
    formula: Formula<'a>,
    average_mass: Decimal,
}

impl<'a> Entry<'a> {
    fn new(table: &'a ElementTable, line: usize, formula_text: &str) -> Result<Self> {
        let formula = Formula::new(table, formula_text)?;
        let average_mass = formula.average_mass()?;
        Ok(Self {
            line,
            formula,
            average_mass,
        })
    }

    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    #[must_use]
    pub const fn formula(&self) -> &Formula<'a> {
        &self.formula
    }

    #[must_use]
    pub const fn average_mass(&self) -> Decimal {
        self.average_mass
    }

    #[must_use]
    pub fn atom_count(&self) -> Count {
        self.formula.atom_count()
    }
}

impl Display for Entry<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} Da, {} atoms, line {})",
            self.formula,
            self.average_mass.round_dp(4),
            self.atom_count(),
            self.line
        )
    }
}

/// The extremes and averages of a batch of formulae; ties always go to the formula listed first
#[derive(Clone, Debug)]
pub struct BatchReport<'a> {
    pub formula_count: usize,
    pub heaviest: Entry<'a>,
    pub lightest: Entry<'a>,
    pub most_atoms: Entry<'a>,
    pub fewest_atoms: Entry<'a>,
    pub average_mass: Decimal,
    pub average_carbons: Decimal,
}

/// Parses every non-blank line of `text` as a chemical formula and summarises the lot, returning `None` if there
/// weren't any formulae at all
///
/// # Errors
///
/// Returns the first error encountered while parsing a formula or calculating its mass.
pub fn summarize<'a>(table: &'a ElementTable, text: &str) -> Result<Option<BatchReport<'a>>> {
    let entries: Vec<_> = text
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| Entry::new(table, index + 1, line.trim()))
        .collect::<Result<_>>()?;
    debug!(formulae = entries.len(), "parsed batch of formulae");

    // NOTE: `max_by_key()` returns the last of several equal maxima, so the entries are reversed to keep the first
    let heaviest = entries.iter().rev().max_by_key(|e| e.average_mass);
    let lightest = entries.iter().min_by_key(|e| e.average_mass);
    let most_atoms = entries.iter().rev().max_by_key(|e| e.atom_count());
    let fewest_atoms = entries.iter().min_by_key(|e| e.atom_count());
    let (Some(heaviest), Some(lightest), Some(most_atoms), Some(fewest_atoms)) =
        (heaviest, lightest, most_atoms, fewest_atoms)
    else {
        return Ok(None);
    };

    let formula_count = entries.len();
    let total_mass: Decimal = entries.iter().map(Entry::average_mass).sum();
    let total_carbons = entries
        .iter()
        .map(|e| e.formula.count("C"))
        .sum::<std::result::Result<Count, _>>()?;
    let divisor = Decimal::from(formula_count);

    Ok(Some(BatchReport {
        formula_count,
        heaviest: heaviest.clone(),
        lightest: lightest.clone(),
        most_atoms: most_atoms.clone(),
        fewest_atoms: fewest_atoms.clone(),
        average_mass: total_mass / divisor,
        average_carbons: Decimal::from(total_carbons) / divisor,
    }))
}

impl Display for BatchReport<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Formulae:        {}", self.formula_count)?;
        writeln!(f, "Heaviest:        {}", self.heaviest)?;
        writeln!(f, "Lightest:        {}", self.lightest)?;
        writeln!(f, "Most Atoms:      {}", self.most_atoms)?;
        writeln!(f, "Fewest Atoms:    {}", self.fewest_atoms)?;
        writeln!(f, "Average Mass:    {} Da", self.average_mass.round_dp(4))?;
        writeln!(f, "Average Carbons: {}", self.average_carbons.round_dp(2))
    }
}

// Module Tests ========================================================================================================
