pub mod graph;
pub mod iri_utils;
pub mod vocab;

pub use graph::{Literal, Node, Object, RdfGraph, Triple};
