//! A native solana calculator program.
//!
//! A calculator account keeps a greeting, set once by the owner at
//! creation, and the outcome of the latest arithmetic instruction.
//! Each instruction replaces the `result`, and `divide` also records
//! the `remainder` of the truncating division.

#![forbid(missing_docs, missing_debug_implementations)]

pub mod auth;
pub mod error;
pub mod handler;
pub mod instruction;
pub mod processor;
pub mod state;
pub mod store;

/// An entry point of this program.
#[cfg(not(feature = "no-entrypoint"))]
pub mod entrypoint;

solana_program::declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");
