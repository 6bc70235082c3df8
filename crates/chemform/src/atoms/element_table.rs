use std::slice;

// External Crate Imports
use ahash::{HashMap, HashMapExt};
use miette::SourceSpan;
use nom::{Offset, combinator::all_consuming};
use rust_decimal::Decimal;
use tracing::debug;

// Local Crate Imports
use super::errors::{AtomicLookupError, ElementTableError, ElementTableErrorKind};
use crate::{
    AtomicNumber, Element, ElementRef, Result,
    parsers::{element_table::entry, primitives::element_symbol},
};

/// The element table compiled into the library, covering hydrogen through oganesson
pub const DEFAULT_TABLE: &str = include_str!("../../element_table.txt");

/// Every known [`Element`], indexed both by atomic number and by symbol
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ElementTable {
    elements: Vec<Element>,
    symbols: HashMap<String, AtomicNumber>,
}

// Public API ==========================================================================================================

impl ElementTable {
    /// Loads a table in which every line is either blank, a `//` comment, or an entry of the form
    /// `<atomic number> <symbol> <name> <average mass> <monoisotopic mass>`
    ///
    /// # Errors
    ///
    /// Returns an [`ElementTableError`] pointing at the first malformed, out-of-order, or duplicated entry, or at the
    /// first mass that isn't a positive decimal number.
    pub fn new(file_name: impl AsRef<str>, text: impl AsRef<str>) -> Result<Self> {
        let (file_name, text) = (file_name.as_ref(), text.as_ref());
        let error = |line: usize, span: SourceSpan, kind: ElementTableErrorKind| {
            ElementTableError::new(file_name, text, line, span, kind)
        };

        let mut elements: Vec<Element> = Vec::new();
        let mut symbols = HashMap::new();
        for (line_index, line) in text.lines().enumerate() {
            let line_number = line_index + 1;
            let entry_text = line.trim();
            if entry_text.is_empty() || entry_text.starts_with("//") {
                continue;
            }
            let span_of = |field: &str| SourceSpan::from((text.offset(field), field.len()));

            let Ok((_, raw)) = entry(line) else {
                let kind = ElementTableErrorKind::MalformedEntry;
                return Err(error(line_number, span_of(entry_text), kind).into());
            };

            let (atomic_number, number_text) = raw.atomic_number;
            let expected = AtomicNumber::try_from(elements.len() + 1).unwrap_or(AtomicNumber::MAX);
            if atomic_number != expected {
                let kind = ElementTableErrorKind::OutOfOrder {
                    expected,
                    found: atomic_number,
                };
                return Err(error(line_number, span_of(number_text), kind).into());
            }

            if all_consuming(element_symbol::<nom::error::Error<_>>)(raw.symbol).is_err() {
                let kind = ElementTableErrorKind::InvalidSymbol(raw.symbol.to_owned());
                return Err(error(line_number, span_of(raw.symbol), kind).into());
            }
            if symbols.contains_key(raw.symbol) {
                let kind = ElementTableErrorKind::DuplicateSymbol(raw.symbol.to_owned());
                return Err(error(line_number, span_of(raw.symbol), kind).into());
            }

            let mut masses = [Decimal::ZERO; 2];
            for (mass, mass_text) in masses
                .iter_mut()
                .zip([raw.average_mass, raw.monoisotopic_mass])
            {
                *mass = parse_mass(mass_text)
                    .map_err(|kind| error(line_number, span_of(mass_text), kind))?;
            }
            let [average_mass, monoisotopic_mass] = masses;

            symbols.insert(raw.symbol.to_owned(), atomic_number);
            elements.push(Element {
                atomic_number,
                symbol: raw.symbol.to_owned(),
                name: raw.name.to_owned(),
                average_mass,
                monoisotopic_mass,
            });
        }

        if elements.is_empty() {
            let kind = ElementTableErrorKind::Empty;
            return Err(error(text.lines().count(), SourceSpan::from((0, 0)), kind).into());
        }

        debug!(
            file_name,
            elements = elements.len(),
            "loaded element table"
        );
        Ok(Self { elements, symbols })
    }

    /// Looks up the full table entry for an element, given either its atomic number or its symbol
    ///
    /// # Errors
    ///
    /// Returns an [`AtomicLookupError`] if the element isn't in this table.
    pub fn element<'s>(
        &self,
        element: impl Into<ElementRef<'s>>,
    ) -> Result<&Element, AtomicLookupError> {
        let atomic_number = self.atomic_number(element)?;
        self.lookup(atomic_number)
    }

    /// Resolves an [`ElementRef`] to an atomic number
    ///
    /// Atomic numbers are passed through as they are, *without* checking that they exist in this table; only symbols
    /// are looked up. Anything that later needs the entry itself (a symbol or a mass) will fail at that point instead.
    ///
    /// # Errors
    ///
    /// Returns an [`AtomicLookupError`] if given a symbol that isn't in this table.
    pub fn atomic_number<'s>(
        &self,
        element: impl Into<ElementRef<'s>>,
    ) -> Result<AtomicNumber, AtomicLookupError> {
        match element.into() {
            ElementRef::Number(atomic_number) => Ok(atomic_number),
            ElementRef::Symbol(symbol) => self
                .symbols
                .get(symbol)
                .copied()
                .ok_or_else(|| AtomicLookupError::symbol(symbol)),
        }
    }

    /// Resolves an [`ElementRef`] to an element symbol, returning symbols unchanged
    ///
    /// # Errors
    ///
    /// Returns an [`AtomicLookupError`] if given an atomic number that isn't in this table.
    pub fn symbol<'r, 's: 'r>(
        &'r self,
        element: impl Into<ElementRef<'s>>,
    ) -> Result<&'r str, AtomicLookupError> {
        match element.into() {
            ElementRef::Number(atomic_number) => {
                self.lookup(atomic_number).map(|e| e.symbol.as_str())
            }
            ElementRef::Symbol(symbol) => Ok(symbol),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterates over every element in order of increasing atomic number
    pub fn iter(&self) -> slice::Iter<'_, Element> {
        self.elements.iter()
    }
}

impl Default for ElementTable {
    fn default() -> Self {
        // SAFETY: The call to `.unwrap()` is safe here since the default table is checked by the tests in this module
        Self::new("element_table.txt", DEFAULT_TABLE).unwrap()
    }
}

impl<'t> IntoIterator for &'t ElementTable {
    type Item = &'t Element;
    type IntoIter = slice::Iter<'t, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// Private Helper Functions ============================================================================================

impl ElementTable {
    fn lookup(&self, atomic_number: AtomicNumber) -> Result<&Element, AtomicLookupError> {
        atomic_number
            .checked_sub(1)
            .and_then(|index| usize::try_from(index).ok())
            .and_then(|index| self.elements.get(index))
            .ok_or_else(|| AtomicLookupError::number(atomic_number, self.len()))
    }
}

fn parse_mass(mass: &str) -> Result<Decimal, ElementTableErrorKind> {
    let parsed = Decimal::from_str_exact(mass)
        .map_err(|e| ElementTableErrorKind::InvalidMass(mass.to_owned(), e.to_string()))?;
    if parsed > Decimal::ZERO {
        Ok(parsed)
    } else {
        Err(ElementTableErrorKind::NonPositiveMass(mass.to_owned()))
    }
}

// Module Tests ========================================================================================================
