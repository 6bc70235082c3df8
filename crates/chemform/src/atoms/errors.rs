use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use crate::AtomicNumber;

// NOTE: Wrapped by `FormulaError` when a lookup fails while parsing
#[derive(Debug, Diagnostic, Clone, Eq, PartialEq, Error)]
pub enum AtomicLookupError {
    #[diagnostic(help("double-check for typos, or add a new entry to the element table"))]
    #[error("the element {0:?} could not be found in the supplied element table")]
    Symbol(String),

    #[diagnostic(help("atomic numbers in this element table run from 1 to {1}"))]
    #[error("no element with the atomic number {0} could be found in the supplied element table")]
    Number(AtomicNumber, usize),
}

impl AtomicLookupError {
    pub(crate) fn symbol(symbol: &str) -> Self {
        Self::Symbol(symbol.to_owned())
    }

    pub(crate) const fn number(atomic_number: AtomicNumber, table_size: usize) -> Self {
        Self::Number(atomic_number, table_size)
    }
}

#[derive(Debug, Diagnostic, Clone, Eq, PartialEq, Error)]
pub enum InvalidAtomError {
    #[error("atomic numbers must be positive integers, but got {0}")]
    NonPositive(AtomicNumber),

    #[diagnostic(help(
        "the number of implicit hydrogens plus the charge of an atom can't be greater than 4"
    ))]
    #[error("an atom with {hydrogens} implicit hydrogen(s) and a charge of {charge} is not allowed")]
    TooManyHydrogens { hydrogens: u32, charge: i32 },
}

// Element Table Errors ================================================================================================

#[derive(Debug, Diagnostic, Clone, Eq, PartialEq, Error)]
#[error("failed to load the element table {file_name:?} (line {line})")]
pub struct ElementTableError {
    file_name: String,
    line: usize,
    #[source_code]
    text: String,
    #[label("{label}")]
    span: SourceSpan,
    label: &'static str,
    #[source]
    #[diagnostic_source]
    kind: ElementTableErrorKind,
}

#[derive(Debug, Diagnostic, Clone, Eq, PartialEq, Error)]
pub enum ElementTableErrorKind {
    #[diagnostic(help(
        "each entry should look like `6 C Carbon 12.0107 12.0`, and comments should start with `//`"
    ))]
    #[error(
        "expected an atomic number, element symbol, name, average mass, and monoisotopic mass separated by spaces"
    )]
    MalformedEntry,

    #[error(
        "expected a single uppercase ASCII letter optionally followed by a lowercase ASCII letter, got {0:?}"
    )]
    InvalidSymbol(String),

    #[diagnostic(help("entries must be listed in order of atomic number, starting from 1"))]
    #[error("expected an entry for atomic number {expected}, but found {found}")]
    OutOfOrder {
        expected: AtomicNumber,
        found: AtomicNumber,
    },

    #[error("the element symbol {0:?} was already used by an earlier entry")]
    DuplicateSymbol(String),

    #[error("the mass {0:?} could not be represented losslessly: {1}")]
    InvalidMass(String, String),

    #[error("masses must be greater than zero, but got {0}")]
    NonPositiveMass(String),

    #[error("the element table doesn't contain any entries")]
    Empty,
}

impl ElementTableErrorKind {
    const fn label(&self) -> &'static str {
        match self {
            Self::MalformedEntry => "malformed entry",
            Self::InvalidSymbol(_) => "invalid symbol",
            Self::OutOfOrder { .. } => "unexpected atomic number",
            Self::DuplicateSymbol(_) => "duplicate symbol",
            Self::InvalidMass(..) | Self::NonPositiveMass(_) => "invalid mass",
            Self::Empty => "no entries",
        }
    }
}

impl ElementTableError {
    pub(crate) fn new(
        file_name: &str,
        text: &str,
        line: usize,
        span: impl Into<SourceSpan>,
        kind: ElementTableErrorKind,
    ) -> Self {
        Self {
            file_name: file_name.to_owned(),
            line,
            text: text.to_owned(),
            span: span.into(),
            label: kind.label(),
            kind,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> &ElementTableErrorKind {
        &self.kind
    }

    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }
}
