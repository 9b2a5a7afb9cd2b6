//! Version providers for package recipe files.
//!
//! A provider locates the version assignment inside one project-file
//! convention, exposes it through [`providers::VersionProvider::get_version`],
//! and rewrites it in place through
//! [`providers::VersionProvider::set_version`] without touching any other
//! byte of the file.

pub mod providers;
