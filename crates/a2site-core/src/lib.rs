//! a2site Core Library
//!
//! This crate enables and disables Apache2 sites by running `a2ensite` or
//! `a2dissite`. It reports whether anything changed, using the
//! "already enabled"/"already disabled" messages those tools print.
//!
//! # Example
//!
//! ```no_run
//! use a2site_core::{ConfigManager, SiteRequest, SiteToggler};
//!
//! let settings = ConfigManager::with_defaults().unwrap().load().unwrap();
//! let toggler = SiteToggler::from_settings(&settings);
//!
//! let result = toggler.apply(&SiteRequest::present("000-default")).unwrap();
//! println!("changed={} result={}", result.changed, result.result);
//! ```

pub mod classify;
pub mod config;
pub mod error;
pub mod locator;
pub mod models;
pub mod runner;
pub mod toggler;
pub mod validation;

// Re-export commonly used types
pub use classify::{classify, is_already_in_state};
pub use config::{ConfigManager, Settings};
pub use error::{ConfigError, Result, SiteError, ValidationError};
pub use locator::BinaryLocator;
pub use models::{CommandOutcome, SiteAction, SiteRequest, SiteState, ToggleResult, ToggleStatus};
pub use runner::{CommandRunner, SystemRunner};
pub use toggler::SiteToggler;
pub use validation::{validate_not_empty, validate_request, validate_site_name};
