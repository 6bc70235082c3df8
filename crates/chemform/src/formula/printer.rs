use std::fmt::{self, Display, Formatter};

// External Crate Imports
use itertools::{Either, Itertools};

// Local Crate Imports
use crate::{Count, ElementRef, ElementTable, Formula, atoms::errors::AtomicLookupError};

// Public API ==========================================================================================================

impl Formula<'_> {
    /// Renders this formula in Hill order: carbon first, then hydrogen, then every other element in alphabetical order
    /// of its symbol
    ///
    /// # Errors
    ///
    /// Returns an [`AtomicLookupError`] if this formula contains an atomic number that isn't in its table. The
    /// [`Display`] implementation never fails, and prints such elements as `[#<atomic number>]` instead.
    pub fn render(&self) -> Result<String, AtomicLookupError> {
        for &atomic_number in self.counts.keys() {
            self.table.symbol(atomic_number)?;
        }
        Ok(self.to_string())
    }
}

/// Renders a single element and its count, leaving out counts of 1 and omitting elements with a count of 0 entirely
///
/// # Errors
///
/// Returns an [`AtomicLookupError`] if `element` isn't in the `table`.
pub fn print_pair<'s>(
    table: &ElementTable,
    element: impl Into<ElementRef<'s>>,
    count: Count,
) -> Result<String, AtomicLookupError> {
    let atomic_number = table.atomic_number(element)?;
    let symbol = table.symbol(atomic_number)?;
    Ok(Pair(symbol, count).to_string())
}

impl Display for Formula<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let (known, unknown): (Vec<_>, Vec<_>) =
            self.counts.iter().partition_map(|(&atomic_number, &count)| {
                match self.table.symbol(atomic_number) {
                    Ok(symbol) => Either::Left((symbol, count)),
                    Err(_) => Either::Right((atomic_number, count)),
                }
            });

        let hill_order = known
            .into_iter()
            .sorted_unstable_by_key(|&(symbol, _)| (hill_rank(symbol), symbol));
        for (symbol, count) in hill_order {
            write!(f, "{}", Pair(symbol, count))?;
        }

        for (atomic_number, count) in unknown {
            let placeholder = format!("[{}]", ElementRef::Number(atomic_number));
            write!(f, "{}", Pair(placeholder, count))?;
        }

        Ok(())
    }
}

// Private Helper Types and Functions ==================================================================================

struct Pair<S>(S, Count);

impl<S: Display> Display for Pair<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let Self(symbol, count) = self;
        match count {
            0 => Ok(()),
            1 => write!(f, "{symbol}"),
            count => write!(f, "{symbol}{count}"),
        }
    }
}

const fn hill_rank(symbol: &str) -> u8 {
    match symbol.as_bytes() {
        b"C" => 0,
        b"H" => 1,
        _ => 2,
    }
}

// Module Tests ========================================================================================================

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use once_cell::sync::Lazy;

    use super::*;

    static DB: Lazy<ElementTable> = Lazy::new(ElementTable::default);

    fn render(formula_text: &str) -> String {
        Formula::new(&DB, formula_text).unwrap().render().unwrap()
    }

    #[test]
    fn test_print_pair() {
        assert_eq!(print_pair(&DB, "C", 2), Ok("C2".to_owned()));
        assert_eq!(print_pair(&DB, "Cl", 1), Ok("Cl".to_owned()));
        assert_eq!(print_pair(&DB, "O", 0), Ok(String::new()));
        assert_eq!(print_pair(&DB, 6, 3), Ok("C3".to_owned()));
        assert_eq!(print_pair(&DB, 1, -2), Ok("H-2".to_owned()));
        assert_eq!(print_pair(&DB, 17, 12), Ok("Cl12".to_owned()));
        assert_eq!(
            print_pair(&DB, "Xx", 1),
            Err(AtomicLookupError::Symbol("Xx".to_owned()))
        );
        assert_eq!(
            print_pair(&DB, 0, 1),
            Err(AtomicLookupError::Number(0, 118))
        );
    }

    #[test]
    fn hill_order() {
        assert_eq!(render("C2H6O"), "C2H6O");
        assert_eq!(render("CH3CH2OH"), "C2H6O");
        assert_eq!(render("HCCl3"), "CHCl3");
        assert_eq!(render("H1C1C0Cl3"), "CHCl3");
        assert_eq!(render("OC6H12O5"), "C6H12O6");
        // Hydrogen still comes first without any carbon
        assert_eq!(render("OH2"), "H2O");
        assert_eq!(render("ClH"), "HCl");
        assert_eq!(render("SO4H2"), "H2O4S");
        // Everything else is sorted by symbol, byte by byte
        assert_eq!(render("NaCl"), "ClNa");
        assert_eq!(render("ONCaCBr"), "CBrCaNO");
        assert_eq!(render("KMnO4"), "KMnO4");
        // Zero counts disappear entirely
        assert_eq!(render("C2H6N0O"), "C2H6O");
        assert_eq!(render("H0"), "");
        assert_eq!(render(""), "");
    }

    #[test]
    fn round_trips() {
        for formula_text in ["C2H6O", "CHCl3", "C6H12O6", "H2O", "C9H12ClNO3", "HeNeAr", "C100H202"] {
            let formula = Formula::new(&DB, formula_text).unwrap();
            let rendered = formula.render().unwrap();
            assert_eq!(Formula::new(&DB, &rendered).unwrap(), formula);
        }
    }

    #[test]
    fn unknown_elements() {
        let counts = BTreeMap::from([(6, 2), (1, 6), (250, 2), (200, 1)]);
        let formula = Formula::from_counts(&DB, counts);
        assert_eq!(formula.render(), Err(AtomicLookupError::Number(200, 118)));
        assert_eq!(formula.to_string(), "C2H6[#200][#250]2");
    }
}
