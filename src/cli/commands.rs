use std::process;

use tracing::{debug, instrument};

use crate::cli::args::Cli;
use crate::domain::{build_hierarchies, render_summary};
use crate::errors::{RosterError, RosterResult};
use crate::exitcode;
use crate::roster::{decode_roster, read_roster, validate_roster};

/// Load, validate, and render the roster named on the command line.
///
/// Validation failures are reported on stdout and terminate the process
/// with `DATAERR`; hard errors (unreadable file, malformed JSON) propagate
/// to the caller.
pub fn execute_command(cli: &Cli) -> RosterResult<()> {
    let input_file = cli.input_file.as_deref().ok_or(RosterError::MissingInput)?;
    debug!("input_file: {:?}", input_file);

    let roster = read_roster(input_file)?;

    let validation_errors = validate_roster(&roster);
    if !validation_errors.is_empty() {
        report_validation_errors(&validation_errors);
        process::exit(exitcode::DATAERR);
    }

    let employees = decode_roster(roster)?;
    debug!("loaded {} employee record(s)", employees.len());

    let forest = build_hierarchies(&employees);
    println!("{}", render_summary(&employees, &forest));
    Ok(())
}

#[instrument(level = "debug", skip_all)]
fn report_validation_errors(errors: &[String]) {
    println!("There were errors while validating employee list!");

    for err in errors {
        println!(" - {}", err);
    }

    println!("Please fix these errors and try again.");
}
