//! Mock module - Builds the simulated install tree
//!
//! Provides:
//! - ident: Module and role identifier parsing
//! - fqrn: Role name resolution from metadata
//! - stub: Placeholder module files
//! - link: Self-collection and self-role symlinks
//! - orchestrate: The full mocking pass
//! - env: Environment exports pointing at the tree

pub mod env;
pub mod fqrn;
pub mod ident;
pub mod link;
pub mod orchestrate;
pub mod stub;
