//! Shared test utilities for the signatory workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`git`]: git repository fixtures at three realism levels
//! - [`tree`]: [`TestTree`] builder for project directories

pub mod git;
pub mod tree;

pub use tree::TestTree;
