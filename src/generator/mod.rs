//! The generation core: a pure pipeline from a parsed OpenAPI [`document::Document`]
//! to the three output contexts consumed by the TypeScript emitters.

pub mod classifier;
pub mod contexts;
pub mod defaults;
pub mod document;
pub mod error;
pub mod naming;
pub mod operations;
pub mod orchestrator;
pub mod resolver;
pub mod translator;
pub mod unifier;

#[cfg(test)]
mod tests;
