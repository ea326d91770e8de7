//! Mortgage title-insurance document analysis.
//!
//! Takes an uploaded title policy document (PDF or scanned image),
//! extracts its text with poppler or Tesseract, pulls six structured
//! fields out of that text through a language-model service, and derives
//! advisory compliance notes from what was found. Every analysis is
//! request-scoped: one payload in, one immutable result out.

pub mod analyzer;
pub mod cli;
pub mod compliance;
pub mod config;
pub mod error;
pub mod extract;
pub mod fields;
pub mod media;
pub mod models;
pub mod server;
