//! This module serves as a container for the reusable UI pieces shared by the
//! portfolio pages.
//!
//! Each sub-module defines one element: the error page, the site header with
//! its category menu, and the loading indicators.

pub mod error_template;
pub mod header;
pub mod loader;
