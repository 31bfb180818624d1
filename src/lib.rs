#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

//! # Derivation description
//! All arithmetic is done in the cyclic group defined by the safe prime `N`
//! and generator `g`. Registration derives:
//!
//! |      Client                  | Data transfer        |     Server            |
//! |------------------------------|----------------------|-----------------------|
//! | `s = ${0,1}^256`             |                      |                       |
//! | `x = H(s `‖` ":" `‖` pw)`    |                      |                       |
//! | `v = g^x mod N`              | `s`, `v` ->          | store `(s, v)`        |
//!
//! Variables and notations have the following meaning:
//!
//! - `s` — per-account salt, rendered as a decimal string
//! - `pw` — the user's password, discarded after derivation
//! - `H` — one-way hash function, SHA-256 in the default instantiation
//! - `${a,b}^N` — pick randomly from `a` and `b`, `N` times, from a CSPRNG
//! - `‖` — concatenation
//! - `x` — the digest interpreted as a non-negative big integer
//! - `v` — the password verifier, rendered as a decimal string
//!
//! The interactive half of the protocol (ephemeral key exchange, shared
//! secret agreement, mutual proofs) is deliberately not implemented here.

mod errors;
mod utils;

pub mod constants;
pub mod deriver;
pub mod group;

pub use self::{
    deriver::{Registration, VerifierDeriver},
    errors::{Error, Result},
    group::SrpGroup,
    utils::{hash_hex, mod_pow},
};

/// Default deriver instantiation with SHA-256 and OsRng
#[cfg(all(feature = "sha2", feature = "getrandom"))]
pub type Deriver = VerifierDeriver<sha2::Sha256, rand_core::OsRng>;
