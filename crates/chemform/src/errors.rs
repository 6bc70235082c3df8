use miette::Diagnostic;
use thiserror::Error;

use crate::{
    NodeId,
    atoms::errors::{AtomicLookupError, ElementTableError, InvalidAtomError},
    parsers::errors::FormulaError,
};

pub type Result<T, E = Box<ChemformError>> = std::result::Result<T, E>;

#[derive(Debug, Diagnostic, Clone, Eq, PartialEq, Error)]
pub enum ChemformError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    UnknownElement {
        #[from]
        error: AtomicLookupError,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    InvalidAtom {
        #[from]
        error: InvalidAtomError,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Formula {
        #[from]
        error: FormulaError,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    ElementTable {
        #[from]
        error: ElementTableError,
    },

    #[error("the node {node} could not be found in a molecule containing {order} atom(s)")]
    NodeLookup { node: NodeId, order: usize },

    #[diagnostic(help("use 1 for a single bond, 2 for a double bond, or 3 for a triple bond"))]
    #[error("{order} is not a valid bond order")]
    InvalidBondOrder { order: u8 },

    #[error("the node {node} can't be bonded to itself")]
    SelfBond { node: NodeId },
}

impl ChemformError {
    pub(crate) const fn node_lookup(node: NodeId, order: usize) -> Self {
        Self::NodeLookup { node, order }
    }
}

// NOTE: `Box` is a fundamental type, so these conversions let `?` lift every component error straight into the
// crate-wide `Result`
macro_rules! boxed_error_impls {
    ($($error_type:ty),+ $(,)?) => {
        $(
            impl From<$error_type> for Box<ChemformError> {
                fn from(error: $error_type) -> Self {
                    Box::new(error.into())
                }
            }
        )+
    };
}

boxed_error_impls!(
    AtomicLookupError,
    InvalidAtomError,
    FormulaError,
    ElementTableError
);
