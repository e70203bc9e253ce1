//! Core data types for motif complexity scoring.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`Motif`]: The repeated unit of a tandem repeat, validated and immutable
//! - [`MaskedMotif`]: A derived copy of a motif with some positions wildcarded
//! - [`MaskedSymbol`]: A single comparison symbol, literal or wildcard
//!
//! ## Masking
//!
//! The original filter reserved the literal character `M` as its mask marker,
//! which made motifs containing a genuine `M` (an IUPAC ambiguity code for
//! A/C) indistinguishable from masked positions. Here the wildcard is an
//! out-of-alphabet sentinel ([`MaskedSymbol::Wildcard`]), so every input
//! character, `M` included, is an ordinary symbol compared by equality.

pub mod motif;
