mod printer;

use std::{
    collections::BTreeMap,
    fmt::{self, Debug, Formatter},
    ops::{Add, Sub},
};

// External Crate Imports
use rust_decimal::Decimal;
use tracing::warn;

// Local Crate Imports
use crate::{
    AtomicNumber, Count, Element, ElementRef, ElementTable, Formula, Massive, Result,
    atoms::errors::AtomicLookupError,
    parsers::{errors::FormulaError, formula::formula},
};

pub use printer::print_pair;

// Public API ==========================================================================================================

impl<'a> Formula<'a> {
    /// Parses a chemical formula like `CH3CH2OH`, summing the counts of repeated elements
    ///
    /// Parsing stops quietly at the first character that can't start an element (like a lowercase letter, a space, or
    /// a `+`), so `"H2O (water)"` is read as just `H2O`.
    ///
    /// # Errors
    ///
    /// Returns a [`FormulaError`] if the formula contains an element symbol that isn't in the `table`, or a count too
    /// large to fit in a [`Count`].
    pub fn new(table: &'a ElementTable, formula_text: impl AsRef<str>) -> Result<Self> {
        let formula_text = formula_text.as_ref();
        let mut parser = formula(table);
        let (rest, tokens) =
            parser(formula_text).map_err(|e| FormulaError::from_nom(formula_text, e))?;
        if !rest.is_empty() {
            warn!(
                formula = formula_text,
                ignored = rest,
                "ignoring the unrecognised end of a chemical formula"
            );
        }

        let mut parsed = Self::empty(table);
        for (atomic_number, count) in tokens {
            parsed.add_count(atomic_number, count);
        }
        Ok(parsed)
    }

    #[must_use]
    pub const fn empty(table: &'a ElementTable) -> Self {
        Self {
            table,
            counts: BTreeMap::new(),
        }
    }

    /// Builds a formula from `(element, count)` pairs, summing the counts of repeated elements
    ///
    /// # Errors
    ///
    /// Returns an [`AtomicLookupError`] if any element symbol isn't in the `table`.
    pub fn from_pairs<'s, E: Into<ElementRef<'s>>>(
        table: &'a ElementTable,
        pairs: impl IntoIterator<Item = (E, Count)>,
    ) -> Result<Self> {
        let mut formula = Self::empty(table);
        for (element, count) in pairs {
            formula.add_element(element, count)?;
        }
        Ok(formula)
    }

    /// Wraps an existing mapping from atomic numbers to counts, taking ownership of it
    ///
    /// The mapping is used exactly as given: atomic numbers aren't checked against the `table` and counts may be zero
    /// or negative.
    #[must_use]
    pub const fn from_counts(table: &'a ElementTable, counts: BTreeMap<AtomicNumber, Count>) -> Self {
        Self { table, counts }
    }

    /// Adds `count` atoms of `element`, doing nothing at all if `count` is negative
    ///
    /// # Errors
    ///
    /// Returns an [`AtomicLookupError`] if `element` is a symbol that isn't in the table this formula was built from.
    pub fn add_element<'s>(
        &mut self,
        element: impl Into<ElementRef<'s>>,
        count: Count,
    ) -> Result<&mut Self> {
        if count >= 0 {
            let atomic_number = self.table.atomic_number(element)?;
            self.add_count(atomic_number, count);
        }
        Ok(self)
    }

    /// Folds every element of `other` into this formula, skipping any negative counts
    pub fn merge_in_place(&mut self, other: &Formula<'_>) -> &mut Self {
        for (&atomic_number, &count) in &other.counts {
            self.add_count(atomic_number, count);
        }
        self
    }

    /// Parses `formula_text` and folds it into this formula
    ///
    /// # Errors
    ///
    /// Returns a [`FormulaError`] if `formula_text` can't be parsed, leaving this formula unchanged.
    pub fn merge_str_in_place(&mut self, formula_text: impl AsRef<str>) -> Result<&mut Self> {
        let other = Self::new(self.table, formula_text)?;
        Ok(self.merge_in_place(&other))
    }

    /// Returns a new formula containing the atoms of both `self` and `other`
    ///
    /// Like [`Formula::add_element()`], negative counts in `other` are skipped. Sums saturate at [`Count::MAX`].
    #[must_use]
    pub fn plus(&self, other: &Formula<'_>) -> Self {
        let mut sum = self.clone();
        sum.merge_in_place(other);
        sum
    }

    /// Returns a new formula with the atoms of `other` taken away from `self`
    ///
    /// Subtraction isn't clamped at zero: elements missing from `self` (or present in smaller numbers) end up with
    /// negative counts, so check [`Formula::contains()`] first when that matters. Counts saturate at the bounds of
    /// [`Count`] instead of overflowing.
    #[must_use]
    pub fn minus(&self, other: &Formula<'_>) -> Self {
        let mut difference = self.clone();
        for (&atomic_number, &count) in &other.counts {
            let entry = difference.counts.entry(atomic_number).or_default();
            *entry = entry.saturating_sub(count);
        }
        difference
    }

    /// Checks that every element of `other` is present in `self` with at least the same count
    ///
    /// If this fails for the formulae of two molecules, then `other` can't possibly be a substructure of `self`.
    #[must_use]
    pub fn contains(&self, other: &Formula<'_>) -> bool {
        other.counts.iter().all(|(atomic_number, &required)| {
            self.counts
                .get(atomic_number)
                .is_some_and(|&count| count >= required)
        })
    }

    /// Like [`Formula::contains()`], but parses `other` first
    ///
    /// # Errors
    ///
    /// Returns a [`FormulaError`] if `formula_text` can't be parsed.
    pub fn contains_str(&self, formula_text: impl AsRef<str>) -> Result<bool> {
        let other = Self::new(self.table, formula_text)?;
        Ok(self.contains(&other))
    }

    /// The number of atoms of `element` in this formula, which is 0 for any element that isn't present
    ///
    /// # Errors
    ///
    /// Returns an [`AtomicLookupError`] if `element` is a symbol that isn't in the table this formula was built from.
    pub fn count<'s>(&self, element: impl Into<ElementRef<'s>>) -> Result<Count, AtomicLookupError> {
        let atomic_number = self.table.atomic_number(element)?;
        Ok(self.counts.get(&atomic_number).copied().unwrap_or(0))
    }

    /// Checks if `element` has an entry in this formula, even one with a count of 0
    ///
    /// # Errors
    ///
    /// Returns an [`AtomicLookupError`] if `element` is a symbol that isn't in the table this formula was built from.
    pub fn has_element<'s>(&self, element: impl Into<ElementRef<'s>>) -> Result<bool, AtomicLookupError> {
        let atomic_number = self.table.atomic_number(element)?;
        Ok(self.counts.contains_key(&atomic_number))
    }

    #[must_use]
    pub const fn counts(&self) -> &BTreeMap<AtomicNumber, Count> {
        &self.counts
    }

    #[must_use]
    pub const fn table(&self) -> &'a ElementTable {
        self.table
    }

    /// The total number of atoms in this formula, saturating at the bounds of [`Count`]
    #[must_use]
    pub fn atom_count(&self) -> Count {
        self.counts.values().fold(0, |total, &count| total.saturating_add(count))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// # Errors
    ///
    /// Returns an [`AtomicLookupError`] if this formula contains an atomic number that isn't in its table.
    pub fn monoisotopic_mass(&self) -> Result<Decimal, AtomicLookupError> {
        self.mass(Element::monoisotopic_mass)
    }

    /// # Errors
    ///
    /// Returns an [`AtomicLookupError`] if this formula contains an atomic number that isn't in its table.
    pub fn average_mass(&self) -> Result<Decimal, AtomicLookupError> {
        self.mass(Element::average_mass)
    }
}

// Operator Trait Implementations ======================================================================================

impl<'a> Add for &Formula<'a> {
    type Output = Formula<'a>;

    fn add(self, rhs: Self) -> Self::Output {
        self.plus(rhs)
    }
}

impl<'a> Sub for &Formula<'a> {
    type Output = Formula<'a>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.minus(rhs)
    }
}

// Equality and Debug Trait Implementations ============================================================================

impl PartialEq for Formula<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.counts == other.counts
    }
}

impl Eq for Formula<'_> {}

impl Debug for Formula<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Formula")
            .field("counts", &self.counts)
            .finish_non_exhaustive()
    }
}

// Private Helper Methods ==============================================================================================

impl Formula<'_> {
    fn add_count(&mut self, atomic_number: AtomicNumber, count: Count) {
        if count >= 0 {
            let entry = self.counts.entry(atomic_number).or_default();
            *entry = entry.saturating_add(count);
        }
    }

    fn mass(&self, accessor: impl Fn(&Element) -> Decimal) -> Result<Decimal, AtomicLookupError> {
        self.counts
            .iter()
            .map(|(&atomic_number, &count)| {
                self.table
                    .element(atomic_number)
                    .map(|element| Decimal::from(count) * accessor(element))
            })
            .sum()
    }
}

// Module Tests ========================================================================================================
