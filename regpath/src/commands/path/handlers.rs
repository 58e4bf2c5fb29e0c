use super::*;
use crate::format::{self, OutputFormat};

/// Handle the check subcommand. Exits with status 1 for invalid paths.
pub fn handle_check(ctx: &AppContext, path: &str, fmt: OutputFormat) {
    match check_path(ctx, path) {
        Ok(report) => {
            let valid = report.valid;
            format::print_output(ctx, &report, fmt);
            if !valid {
                std::process::exit(1);
            }
        }
        Err(e) => {
            format::error(ctx, &e);
            std::process::exit(1);
        }
    }
}

/// Handle the components subcommand
pub fn handle_components(ctx: &AppContext, path: &str, fmt: OutputFormat) {
    match list_components(ctx, path) {
        Ok(report) => format::print_output(ctx, &report, fmt),
        Err(e) => {
            format::error(ctx, &e);
            std::process::exit(1);
        }
    }
}

/// Handle the resolve subcommand
pub fn handle_resolve(ctx: &AppContext, path: &str, catalog: Option<&Path>, fmt: OutputFormat) {
    match resolve_path(ctx, path, catalog) {
        Ok(summary) => {
            format::print_output(ctx, &summary, fmt);
            if fmt == OutputFormat::Pretty && summary.has_project && !summary.has_repository {
                format::warning(ctx, "The project does not list this repository");
            }
        }
        Err(e) => {
            format::error(ctx, &e);
            std::process::exit(1);
        }
    }
}
