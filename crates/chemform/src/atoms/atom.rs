use std::fmt::{self, Display, Formatter};

// External Crate Imports
use rust_decimal::Decimal;

// Local Crate Imports
use super::errors::InvalidAtomError;
use crate::{Atom, AtomicNumber, Element, ElementRef, ElementTable, Massive, Result};

/// The sum of implicit hydrogens and charge that no atom may exceed
const MAX_HYDROGENS_AND_CHARGE: i64 = 4;

pub(crate) const HYDROGEN: AtomicNumber = 1;

// Public API ==========================================================================================================

impl<'a> Atom<'a> {
    /// Builds an atom of the given element, carrying some implicit hydrogens and a charge
    ///
    /// # Errors
    ///
    /// Returns an [`InvalidAtomError`] if the atomic number isn't positive, or if `hydrogens + charge` is greater than
    /// 4, and an [`AtomicLookupError`](crate::atoms::errors::AtomicLookupError) if the element isn't in the `table`.
    pub fn new<'s>(
        table: &'a ElementTable,
        element: impl Into<ElementRef<'s>>,
        hydrogens: u32,
        charge: i32,
    ) -> Result<Self> {
        let atomic_number = table.atomic_number(element)?;
        if atomic_number < 1 {
            return Err(InvalidAtomError::NonPositive(atomic_number).into());
        }
        if i64::from(hydrogens) + i64::from(charge) > MAX_HYDROGENS_AND_CHARGE {
            return Err(InvalidAtomError::TooManyHydrogens { hydrogens, charge }.into());
        }

        let element = table.element(atomic_number)?;
        let hydrogen = table.element(HYDROGEN)?;
        Ok(Self {
            element,
            hydrogen,
            hydrogens,
            charge,
        })
    }

    #[must_use]
    pub const fn element(&self) -> &'a Element {
        self.element
    }

    #[must_use]
    pub const fn atomic_number(&self) -> AtomicNumber {
        self.element.atomic_number
    }

    #[must_use]
    pub fn symbol(&self) -> &'a str {
        &self.element.symbol
    }

    #[must_use]
    pub const fn hydrogens(&self) -> u32 {
        self.hydrogens
    }

    #[must_use]
    pub const fn charge(&self) -> i32 {
        self.charge
    }
}

// Display and Massive Trait Implementations ===========================================================================

impl Display for Atom<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.element)?;

        match self.hydrogens {
            0 => (),
            1 => write!(f, "{}", self.hydrogen)?,
            n => write!(f, "{}{n}", self.hydrogen)?,
        }

        match self.charge {
            0 => Ok(()),
            1 => write!(f, "+"),
            -1 => write!(f, "-"),
            c if c > 0 => write!(f, "+{c}"),
            c => write!(f, "{c}"),
        }
    }
}

impl Massive for Atom<'_> {
    fn monoisotopic_mass(&self) -> Decimal {
        self.mass(Element::monoisotopic_mass)
    }

    fn average_mass(&self) -> Decimal {
        self.mass(Element::average_mass)
    }
}

// Private Helper Methods ==============================================================================================

impl Atom<'_> {
    fn mass(&self, accessor: impl Fn(&Element) -> Decimal) -> Decimal {
        accessor(self.element) + Decimal::from(self.hydrogens) * accessor(self.hydrogen)
    }
}

// Module Tests ========================================================================================================
