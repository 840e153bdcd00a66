//! Toolset for the AceJobber local-services marketplace demo: a catalog
//! scraper, a catalog projector and an interactive booking assistant. The
//! three commands share no runtime state; they communicate through JSON
//! files on disk.

pub mod api;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod logging;
pub mod services;
