// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The four matcher strategies — genus-only, letter, stem, verbatim — each
//! owning a [`crate::types::StrategyIndex`] and a `transform`.
//! [`crate::finder::Finder`] dispatches a normalised query to one (or, on
//! the stem/verbatim fallback path, up to two) of these in a fixed order.

mod genus_only;
mod letter;
mod stem;
mod verbatim;

pub use genus_only::GenusOnlyStrategy;
pub use letter::LetterStrategy;
pub use stem::StemStrategy;
pub use verbatim::VerbatimStrategy;
