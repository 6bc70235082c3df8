//! Atoms, molecular formulae, and molecules as labeled graphs

pub mod atoms;
pub mod errors;
pub mod formula;
pub mod molecule;
pub mod parsers;
#[cfg(test)]
mod testing_tools;

use std::collections::BTreeMap;

// External Crate Imports
use derive_more::{Display, From};
use rust_decimal::Decimal;
use static_assertions::assert_impl_all;

pub use atoms::element_table::ElementTable;
pub use errors::{ChemformError, Result};

// NOTE: For the types in this module, 'a lifetimes indicate references to the ElementTable. None of them can outlive
// the table they were built from, but all of them can be shared freely between threads once built

// Elements ============================================================================================================

pub type AtomicNumber = u32;

pub type Count = i64;

/// A single row of the [`ElementTable`]
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Element {
    atomic_number: AtomicNumber,
    symbol: String,
    name: String,
    average_mass: Decimal,
    monoisotopic_mass: Decimal,
}

/// Either an atomic number or an element symbol; anything accepting one of these accepts both
#[derive(Copy, Clone, Eq, PartialEq, Debug, From)]
pub enum ElementRef<'s> {
    Number(AtomicNumber),
    Symbol(&'s str),
}

// Formulae and Atoms ==================================================================================================

/// A canonical mapping from atomic numbers to counts
#[derive(Clone)]
pub struct Formula<'a> {
    table: &'a ElementTable,
    counts: BTreeMap<AtomicNumber, Count>,
}

/// An element with some implicit hydrogens and a charge
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Atom<'a> {
    element: &'a Element,
    hydrogen: &'a Element,
    hydrogens: u32,
    charge: i32,
}

// Molecules ===========================================================================================================

pub type NodeId = usize;

/// A labeled, undirected graph of atoms and the bonds between them
#[derive(Clone)]
pub struct Molecule<'a> {
    table: &'a ElementTable,
    nodes: Vec<Node<'a>>,
}

#[derive(Clone, Debug)]
struct Node<'a> {
    atom: Atom<'a>,
    neighbors: BTreeMap<NodeId, BondOrder>,
}

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Display)]
pub enum BondOrder {
    #[display("1")]
    Single,
    #[display("2")]
    Double,
    #[display("3")]
    Triple,
}

// =====================================================================================================================

pub trait Massive {
    fn monoisotopic_mass(&self) -> Decimal;
    fn average_mass(&self) -> Decimal;
}

macro_rules! massive_ref_impls {
    ($($ref_type:ty),+ $(,)?) => {
        $(
            impl<T: Massive> Massive for $ref_type {
                fn monoisotopic_mass(&self) -> Decimal {
                    (**self).monoisotopic_mass()
                }

                fn average_mass(&self) -> Decimal {
                    (**self).average_mass()
                }
            }
        )+
    };
}

massive_ref_impls!(&T, &mut T, Box<T>);

// Everything here is a read-only snapshot of the table it borrows
assert_impl_all!(ElementTable: Send, Sync);
assert_impl_all!(Formula<'static>: Send, Sync);
assert_impl_all!(Atom<'static>: Send, Sync);
assert_impl_all!(Molecule<'static>: Send, Sync);
