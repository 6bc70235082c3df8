pub(crate) mod atom;
mod element;
mod element_ref;
pub mod element_table;
pub mod errors;
