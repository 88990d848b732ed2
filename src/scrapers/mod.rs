//! Field extraction for the pages the importer understands.
//!
//! | Page | Module | Output |
//! |------|--------|--------|
//! | Category listing | [`listing`] | one [`ListingRecord`](crate::models::ListingRecord) per card |
//! | Single watch page | [`video`] | one [`SingleItemRecord`](crate::models::SingleItemRecord) |
//!
//! Both build on [`rules`], which models first-match-wins fallback chains as
//! ordered lists of [`ExtractionRule`](rules::ExtractionRule)s.
//!
//! Extraction is tolerant by construction: a missing node or attribute turns
//! into `None` for that field only.

pub mod listing;
pub mod rules;
pub mod video;
