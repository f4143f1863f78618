//! Query analysis and expansion module.
//!
//! This module turns raw interest text into the string that gets vectorized:
//! negated words are stripped, matching lexicon keywords pull in related
//! domain terms, and the intent detector flags questions.

pub mod detector;
pub mod expander;
pub mod normalizer;
