// Matchup AI - comparison page service
//
// This crate provides the HTTP front end and CLI around the comparison
// pipeline: a form-driven preview, single-page download, and bulk
// generation of the downloadable comparison archive.

pub mod config;
pub mod server;

pub use config::*;
