mod bond_order;
mod paths;

use std::{
    collections::BTreeMap,
    fmt::{self, Debug, Formatter},
};

// External Crate Imports
use rust_decimal::Decimal;
use tracing::trace;

// Local Crate Imports
use crate::{
    Atom, BondOrder, ChemformError, Count, ElementRef, ElementTable, Formula, Massive, Molecule,
    Node, NodeId, Result,
    atoms::{atom::HYDROGEN, errors::AtomicLookupError},
};

// Public API ==========================================================================================================

impl<'a> Molecule<'a> {
    /// Builds a molecule from its atoms and a list of `(node, node, bond order)` edges, where nodes are indices into
    /// `atoms` and bond orders are 1, 2, or 3
    ///
    /// Edges are undirected and assumed to be unique. Every atom's implicit hydrogens belong to it, not to the graph.
    ///
    /// # Errors
    ///
    /// Returns an error if an edge refers to a node that doesn't exist, bonds a node to itself, or has an invalid
    /// bond order.
    pub fn new(
        table: &'a ElementTable,
        atoms: impl IntoIterator<Item = Atom<'a>>,
        edges: impl IntoIterator<Item = (NodeId, NodeId, u8)>,
    ) -> Result<Self> {
        let mut nodes: Vec<_> = atoms
            .into_iter()
            .map(|atom| Node {
                atom,
                neighbors: BTreeMap::new(),
            })
            .collect();

        let order = nodes.len();
        for (u, v, bond_order) in edges {
            for node in [u, v] {
                if node >= order {
                    return Err(ChemformError::node_lookup(node, order).into());
                }
            }
            if u == v {
                return Err(ChemformError::SelfBond { node: u }.into());
            }
            let bond_order = BondOrder::try_from(bond_order)?;
            nodes[u].neighbors.insert(v, bond_order);
            nodes[v].neighbors.insert(u, bond_order);
        }

        let molecule = Self { table, nodes };
        trace!(order = molecule.order(), size = molecule.size(), "built molecule");
        Ok(molecule)
    }

    /// The number of atoms (nodes) in this molecule
    #[must_use]
    pub fn order(&self) -> usize {
        self.nodes.len()
    }

    /// The number of bonds (edges) in this molecule
    #[must_use]
    pub fn size(&self) -> usize {
        self.nodes.iter().map(|n| n.neighbors.len()).sum::<usize>() / 2
    }

    /// # Errors
    ///
    /// Returns [`ChemformError::NodeLookup`] if `node` isn't in this molecule.
    pub fn degree(&self, node: NodeId) -> Result<usize> {
        Ok(self.node(node)?.neighbors.len())
    }

    /// Checks if `node` has no bonds at all
    ///
    /// # Errors
    ///
    /// Returns [`ChemformError::NodeLookup`] if `node` isn't in this molecule.
    pub fn is_isolate(&self, node: NodeId) -> Result<bool> {
        Ok(self.degree(node)? == 0)
    }

    /// Checks if `node` is bonded to exactly one other node
    ///
    /// # Errors
    ///
    /// Returns [`ChemformError::NodeLookup`] if `node` isn't in this molecule.
    pub fn is_terminal(&self, node: NodeId) -> Result<bool> {
        Ok(self.degree(node)? == 1)
    }

    /// # Errors
    ///
    /// Returns [`ChemformError::NodeLookup`] if `node` isn't in this molecule.
    pub fn atom(&self, node: NodeId) -> Result<&Atom<'a>> {
        Ok(&self.node(node)?.atom)
    }

    /// Iterates over the atoms of this molecule, in node order
    pub fn atoms(&self) -> impl Iterator<Item = &Atom<'a>> {
        self.nodes.iter().map(|n| &n.atom)
    }

    /// Iterates over the nodes bonded to `node`, along with the order of each bond
    ///
    /// # Errors
    ///
    /// Returns [`ChemformError::NodeLookup`] if `node` isn't in this molecule.
    pub fn neighbors(&self, node: NodeId) -> Result<impl Iterator<Item = (NodeId, BondOrder)> + '_> {
        let neighbors = &self.node(node)?.neighbors;
        Ok(neighbors.iter().map(|(&n, &b)| (n, b)))
    }

    /// The order of the bond between `u` and `v`, if they're bonded at all
    ///
    /// # Errors
    ///
    /// Returns [`ChemformError::NodeLookup`] if either node isn't in this molecule.
    pub fn bond(&self, u: NodeId, v: NodeId) -> Result<Option<BondOrder>> {
        self.node(v)?;
        Ok(self.node(u)?.neighbors.get(&v).copied())
    }

    /// The molecular formula of this molecule, counting both heavy atoms and implicit hydrogens
    ///
    /// Hydrogen only gets an entry when some atom carries at least one, rather than always being recorded (even as a
    /// count of 0). Stored zeroes count towards [`Formula`] equality, so this keeps the formula of `CO2` equal to the
    /// parsed `"CO2"` instead of `"CH0O2"`.
    #[must_use]
    pub fn formula(&self) -> Formula<'a> {
        let mut counts = BTreeMap::new();
        for atom in self.atoms() {
            *counts.entry(atom.atomic_number()).or_default() += 1;
            if atom.hydrogens() > 0 {
                *counts.entry(HYDROGEN).or_default() += Count::from(atom.hydrogens());
            }
        }
        Formula::from_counts(self.table, counts)
    }

    /// Checks if any atom in this molecule is of the given element
    ///
    /// # Errors
    ///
    /// Returns an [`AtomicLookupError`] if `element` is a symbol that isn't in the table this molecule was built from.
    pub fn has_element<'s>(&self, element: impl Into<ElementRef<'s>>) -> Result<bool, AtomicLookupError> {
        let atomic_number = self.table.atomic_number(element)?;
        Ok(self.atoms().any(|a| a.atomic_number() == atomic_number))
    }

    /// A cheap and simplified substructure check, which does *not* search for isomorphic subgraphs
    ///
    /// Nodes are matched by their ids: every node of `self` must exist in `other` with an equal atom, and every bond
    /// of that node in `other` must also be present in `self`, with the same bond order.
    #[must_use]
    pub fn is_substructure(&self, other: &Molecule<'_>) -> bool {
        self.nodes.iter().enumerate().all(|(id, node)| {
            other.nodes.get(id).is_some_and(|other_node| {
                other_node.atom == node.atom
                    && other_node
                        .neighbors
                        .iter()
                        .all(|(neighbor, bond)| node.neighbors.get(neighbor) == Some(bond))
            })
        })
    }

    /// Compares molecular formulae to check if `other` could possibly be a substructure of `self`
    ///
    /// A `false` here rules `other` out entirely, but a `true` guarantees nothing.
    #[must_use]
    pub fn might_contain(&self, other: &Molecule<'_>) -> bool {
        self.formula().contains(&other.formula())
    }
}

// Massive and Debug Trait Implementations =============================================================================

impl Massive for Molecule<'_> {
    fn monoisotopic_mass(&self) -> Decimal {
        self.atoms().map(Massive::monoisotopic_mass).sum()
    }

    fn average_mass(&self) -> Decimal {
        self.atoms().map(Massive::average_mass).sum()
    }
}

impl Debug for Molecule<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Molecule")
            .field("nodes", &self.nodes)
            .finish_non_exhaustive()
    }
}

// Private Helper Methods ==============================================================================================

impl<'a> Molecule<'a> {
    fn node(&self, node: NodeId) -> Result<&Node<'a>> {
        self.nodes
            .get(node)
            .ok_or_else(|| ChemformError::node_lookup(node, self.order()).into())
    }
}

// Module Tests ========================================================================================================
