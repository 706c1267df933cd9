//! # API Route Modules
//!
//! - `certificates` — generation, proof attachment and lookup.
//! - `issuer` — the Blockcerts issuer profile (Blockcerts shape only).
//! - `health` — root banner and probes.

pub mod certificates;
pub mod health;
pub mod issuer;
