// External Crate Imports
use nom::{
    Parser,
    character::complete::digit1,
    combinator::opt,
    multi::many0,
    sequence::pair,
};

// Local Crate Imports
use super::{
    errors::{FormulaErrorKind, FormulaParseError, ParseResult},
    primitives::element_symbol,
};
use crate::{AtomicNumber, Count, ElementTable};

// Public API ==========================================================================================================

/// Formula = { Element Token } ;
///
/// Parsing stops at the first character that can't start an element token, leaving the rest of the input unconsumed
/// for the caller to inspect. Only unknown elements and oversized counts are hard failures.
pub fn formula<'a, 's>(
    table: &'a ElementTable,
) -> impl FnMut(&'s str) -> ParseResult<'s, Vec<(AtomicNumber, Count)>> {
    many0(element_token(table))
}

// Private Sub-Parsers =================================================================================================

/// Element Token = Element , [ Count ] ;
fn element_token<'a, 's>(
    table: &'a ElementTable,
) -> impl FnMut(&'s str) -> ParseResult<'s, (AtomicNumber, Count)> {
    let optional_count = opt(count).map(|c| c.unwrap_or(1));
    pair(element(table), optional_count)
}

/// Element = Element Symbol ;
fn element<'a, 's>(table: &'a ElementTable) -> impl FnMut(&'s str) -> ParseResult<'s, AtomicNumber> {
    move |i: &'s str| {
        let (rest, symbol) = element_symbol(i)?;
        match table.atomic_number(symbol) {
            Ok(atomic_number) => Ok((rest, atomic_number)),
            Err(e) => Err(nom::Err::Failure(FormulaParseError::new(
                i,
                symbol.len(),
                FormulaErrorKind::UnknownElement(e),
            ))),
        }
    }
}

/// Count = digit , { digit } ;
fn count(i: &str) -> ParseResult<'_, Count> {
    let (rest, digits) = digit1(i)?;
    match digits.parse::<Count>() {
        Ok(count) => Ok((rest, count)),
        Err(_) => Err(nom::Err::Failure(FormulaParseError::new(
            i,
            digits.len(),
            FormulaErrorKind::CountOverflow(digits.to_owned()),
        ))),
    }
}

// Module Tests ========================================================================================================

#[cfg(test)]
mod tests {
    use miette::SourceSpan;
    use once_cell::sync::Lazy;

    use crate::{atoms::errors::AtomicLookupError, parsers::errors::FormulaError};

    use super::*;

    static DB: Lazy<ElementTable> = Lazy::new(ElementTable::default);

    fn failure<O>(input: &str, result: ParseResult<'_, O>) -> (FormulaErrorKind, SourceSpan) {
        let error = result.err().unwrap();
        assert!(matches!(error, nom::Err::Failure(_)));
        let error = FormulaError::from_nom(input, error);
        (error.kind().clone(), error.span())
    }

    #[test]
    fn test_count() {
        assert_eq!(count("1"), Ok(("", 1)));
        assert_eq!(count("42"), Ok(("", 42)));
        assert_eq!(count("0"), Ok(("", 0)));
        assert_eq!(count("007"), Ok(("", 7)));
        assert_eq!(count("3Cl"), Ok(("Cl", 3)));
        assert_eq!(count("4294967296"), Ok(("", 4_294_967_296)));
        assert_eq!(count("9223372036854775807"), Ok(("", Count::MAX)));
        // Not counts at all
        assert!(matches!(count("Cl"), Err(nom::Err::Error(_))));
        assert!(matches!(count("-1"), Err(nom::Err::Error(_))));
        assert!(matches!(count(""), Err(nom::Err::Error(_))));
        // Counts that don't fit are fatal
        let input = "9223372036854775808H";
        assert_eq!(
            failure(input, count(input)),
            (
                FormulaErrorKind::CountOverflow("9223372036854775808".to_owned()),
                SourceSpan::from(0..19)
            )
        );
    }

    #[test]
    fn test_element() {
        let mut element = element(&DB);
        assert_eq!(element("C"), Ok(("", 6)));
        assert_eq!(element("Cl3"), Ok(("3", 17)));
        assert_eq!(element("CH4"), Ok(("H4", 6)));
        assert_eq!(element("Og"), Ok(("", 118)));
        // Lowercase letters and digits can't start an element
        assert!(matches!(element("h"), Err(nom::Err::Error(_))));
        assert!(matches!(element("2H"), Err(nom::Err::Error(_))));
        // Well-formed symbols that aren't in the table are fatal
        assert_eq!(
            failure("Xx", element("Xx")),
            (
                FormulaErrorKind::UnknownElement(AtomicLookupError::symbol("Xx")),
                SourceSpan::from(0..2)
            )
        );
    }

    #[test]
    fn test_element_token() {
        let mut element_token = element_token(&DB);
        assert_eq!(element_token("C2H6O"), Ok(("H6O", (6, 2))));
        assert_eq!(element_token("HCCl3"), Ok(("CCl3", (1, 1))));
        assert_eq!(element_token("Cl3"), Ok(("", (17, 3))));
        assert_eq!(element_token("C0Cl3"), Ok(("Cl3", (6, 0))));
        assert_eq!(element_token("H12"), Ok(("", (1, 12))));
        assert!(matches!(element_token("+H"), Err(nom::Err::Error(_))));
    }

    #[test]
    fn test_formula() {
        let mut formula = formula(&DB);
        assert_eq!(formula("C2H6O"), Ok(("", vec![(6, 2), (1, 6), (8, 1)])));
        assert_eq!(
            formula("CH3CH2OH"),
            Ok(("", vec![(6, 1), (1, 3), (6, 1), (1, 2), (8, 1), (1, 1)]))
        );
        assert_eq!(formula("HCCl3"), Ok(("", vec![(1, 1), (6, 1), (17, 3)])));
        assert_eq!(
            formula("H1C1C0Cl3"),
            Ok(("", vec![(1, 1), (6, 1), (6, 0), (17, 3)]))
        );
        // Parsing stops at the first unrecognised character
        assert_eq!(formula(""), Ok(("", Vec::new())));
        assert_eq!(formula("h2o"), Ok(("h2o", Vec::new())));
        assert_eq!(formula("H2O (water)"), Ok((" (water)", vec![(1, 2), (8, 1)])));
        assert_eq!(formula("NaCl+"), Ok(("+", vec![(11, 1), (17, 1)])));
        // But unknown elements anywhere before that point are fatal
        let input = "CH3Xy2OH";
        assert_eq!(
            failure(input, formula(input)),
            (
                FormulaErrorKind::UnknownElement(AtomicLookupError::symbol("Xy")),
                SourceSpan::from(3..5)
            )
        );
        assert_eq!(
            formula("C99999999999H"),
            Ok(("", vec![(6, 99_999_999_999), (1, 1)]))
        );
        let input = "C99999999999999999999H";
        assert_eq!(
            failure(input, formula(input)),
            (
                FormulaErrorKind::CountOverflow("99999999999999999999".to_owned()),
                SourceSpan::from(1..21)
            )
        );
    }
}
