//! Organize a flat employee roster into management hierarchies and render
//! them as an indented ASCII report with a salary total.
//!
//! The domain layer ([`domain`]) is pure: [`build_hierarchies`] turns
//! manager-pointer records into owned report trees and
//! [`render_summary`] serializes a forest deterministically. The shell
//! ([`roster`], [`cli`]) owns file I/O, JSON-Schema validation, and the
//! command-line surface.

pub mod cli;
pub mod domain;
pub mod errors;
pub mod exitcode;
pub mod roster;
pub mod util;

pub use domain::{build_hierarchies, render_forest, render_node, render_summary};
pub use domain::{Employee, EmployeeNode};
pub use errors::{RosterError, RosterResult};
pub use roster::{decode_roster, read_roster, validate_roster};
