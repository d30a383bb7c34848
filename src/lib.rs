//! Word normalization for brand name generation.
//!
//! Seed words go through a chain of list transforms (cleaning, deduplication,
//! stop word and profanity removal, stemming, length filtering, odd sound
//! rejection) chosen and ordered by the caller. See [`normalization`] for the
//! transforms and [`pipeline`] for running them with a run log.

pub mod input;
pub mod lexicon;
pub mod logger;
pub mod models;
pub mod normalization;
pub mod odd_sounds;
pub mod pipeline;
pub mod settings;

pub use normalization::{
    chop_duplicate_ends, chop_duplicate_ends_all, key_words_by_pos_tag, uniquify, Normalizer,
};
pub use settings::NormalizerConfig;
