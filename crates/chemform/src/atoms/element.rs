use std::fmt::{self, Display, Formatter};

use rust_decimal::Decimal;

use crate::{AtomicNumber, Element, Massive};

impl Element {
    #[must_use]
    pub const fn atomic_number(&self) -> AtomicNumber {
        self.atomic_number
    }

    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Display for Element {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

impl Massive for Element {
    fn monoisotopic_mass(&self) -> Decimal {
        self.monoisotopic_mass
    }

    fn average_mass(&self) -> Decimal {
        self.average_mass
    }
}

#[cfg(test)]
mod tests {
    use once_cell::sync::Lazy;
    use rust_decimal_macros::dec;

    use crate::ElementTable;

    use super::*;

    static DB: Lazy<ElementTable> = Lazy::new(ElementTable::default);

    #[test]
    fn element_accessors() {
        let oxygen = DB.element("O").unwrap();
        assert_eq!(oxygen.atomic_number(), 8);
        assert_eq!(oxygen.symbol(), "O");
        assert_eq!(oxygen.name(), "Oxygen");
        assert_eq!(oxygen.to_string(), "O");
        let mercury = DB.element(80).unwrap();
        assert_eq!(mercury.symbol(), "Hg");
        assert_eq!(mercury.name(), "Mercury");
        assert_eq!(mercury.to_string(), "Hg");
    }

    #[test]
    fn element_masses() {
        let hydrogen = DB.element("H").unwrap();
        assert_eq!(hydrogen.average_mass(), dec!(1.00794));
        assert_eq!(hydrogen.monoisotopic_mass(), dec!(1.00782503207));
        let nitrogen = DB.element("N").unwrap();
        assert_eq!(nitrogen.average_mass(), dec!(14.0067));
        assert_eq!(nitrogen.monoisotopic_mass(), dec!(14.00307400443));
        // Masses can be reached through references too
        let boxed = Box::new(nitrogen.clone());
        assert_eq!(boxed.average_mass(), dec!(14.0067));
    }
}
