//! Main module for the Gherkin span classification engine

pub mod classify;
pub mod keyword;
pub mod scan;
pub mod session;
pub mod token;
