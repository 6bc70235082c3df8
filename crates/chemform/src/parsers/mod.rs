pub(crate) mod element_table;
pub mod errors;
pub mod formula;
pub mod primitives;
