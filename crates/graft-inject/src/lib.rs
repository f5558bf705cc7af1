//! Cross-representation symbol resolution for the graft injector
//!
//! The injector works over three parallel representations of one program:
//! the shipped (name-mangled) binary, a readable model annotated with the
//! names members had when shipped, and an interface-shaped API overlay that
//! may implement external capability interfaces. This crate turns a
//! reference against the readable or API model into the concrete entity in
//! the shipped binary:
//!
//! - [`bridge::SymbolBridge`] builds and holds the readable↔shipped class
//!   mapping and the extensible name index;
//! - [`resolve`] finds methods and fields by name/signature with
//!   hint-first, deep-inheritance, and full-scan strategies;
//! - [`translate`] maps types and signatures between the three
//!   representations, including the most-derived-implementor walk;
//! - [`emit`] synthesizes the load/return/invoke instruction for a resolved
//!   entity;
//! - [`report`] summarizes the finished mapping for publication.
//!
//! Expected lookup misses are [`ResolveError`]s the caller can act on;
//! inconsistencies in the mapping tables themselves are [`Defect`]s and
//! should end the run.

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod bridge;
pub mod emit;
pub mod error;
pub mod report;
pub mod resolve;
pub mod translate;

pub use bridge::{SymbolBridge, FRAMEWORK_BASE, HOOKS_CLASS};
pub use error::{Defect, ResolveError};
pub use report::MappingReport;
pub use translate::{API_BASE, HOST_API_BASE};
