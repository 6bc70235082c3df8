use miette::{Diagnostic, SourceSpan};
use nom::{
    IResult,
    error::{ErrorKind, ParseError},
};
use thiserror::Error;

use crate::atoms::errors::AtomicLookupError;

pub type ParseResult<'s, O> = IResult<&'s str, O, FormulaParseError<'s>>;

// NOTE: Public so that other parsers using `formula` as a building block can inspect errors. Most of these only ever
// surface as a `Failure`, since any ordinary `Error` just means the formula ended early
#[derive(Clone, Eq, PartialEq, Debug, Diagnostic, Error)]
pub enum FormulaErrorKind {
    #[diagnostic(transparent)]
    #[error(transparent)]
    UnknownElement(AtomicLookupError),

    #[diagnostic(help("counts must fit in a signed 64-bit integer (at most 9223372036854775807)"))]
    #[error("the count {0} is too large")]
    CountOverflow(String),

    #[diagnostic(help(
        "this is an internal error that you shouldn't ever see! If you have gotten this error, \
        then please report it as a bug!"
    ))]
    #[error("internal `nom` error: {0:?}")]
    NomError(ErrorKind),
}

impl FormulaErrorKind {
    const fn label(&self) -> &'static str {
        match self {
            Self::UnknownElement(_) => "element not found",
            Self::CountOverflow(_) => "count too large",
            Self::NomError(_) => "the region that triggered this bug!",
        }
    }
}

// Intermediate Parser Errors ==========================================================================================

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct FormulaParseError<'s> {
    input: &'s str,
    length: usize,
    kind: FormulaErrorKind,
}

impl<'s> FormulaParseError<'s> {
    pub(crate) const fn new(input: &'s str, length: usize, kind: FormulaErrorKind) -> Self {
        Self {
            input,
            length,
            kind,
        }
    }

    fn into_final_error(self, full_input: &str) -> FormulaError {
        // NOTE: Every error is raised on some suffix of the full input, so the span start is just the length of the
        // prefix that was already consumed
        let start = full_input.len() - self.input.len();
        // NOTE: The additional space is added so that Diagnostic labels can point to the end of an input
        FormulaError {
            formula: format!("{full_input} "),
            span: SourceSpan::from(start..start + self.length),
            label: self.kind.label(),
            kind: self.kind,
        }
    }
}

impl<'s> ParseError<&'s str> for FormulaParseError<'s> {
    fn from_error_kind(input: &'s str, kind: ErrorKind) -> Self {
        Self::new(input, 0, FormulaErrorKind::NomError(kind))
    }

    fn append(_input: &'s str, _kind: ErrorKind, other: Self) -> Self {
        other
    }
}

// Final Parser Errors =================================================================================================

#[derive(Clone, Eq, PartialEq, Debug, Diagnostic, Error)]
#[error("could not parse the chemical formula {:?}", .formula.trim_end())]
pub struct FormulaError {
    #[source_code]
    formula: String,
    #[label("{label}")]
    span: SourceSpan,
    label: &'static str,
    #[source]
    #[diagnostic_source]
    kind: FormulaErrorKind,
}

impl FormulaError {
    pub(crate) fn from_nom(full_input: &str, error: nom::Err<FormulaParseError<'_>>) -> Self {
        match error {
            nom::Err::Error(e) | nom::Err::Failure(e) => e.into_final_error(full_input),
            // NOTE: Only `complete` parsers are used, so this is another should-never-happen bug
            nom::Err::Incomplete(_) => FormulaParseError::new(
                full_input,
                full_input.len(),
                FormulaErrorKind::NomError(ErrorKind::Complete),
            )
            .into_final_error(full_input),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> &FormulaErrorKind {
        &self.kind
    }

    #[must_use]
    pub const fn span(&self) -> SourceSpan {
        self.span
    }
}
