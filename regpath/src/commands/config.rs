use crate::config;
use crate::context::AppContext;
use crate::format::{self, Formattable, OutputFormat};
use libregpath::Config;
use std::path::Path;

/// Implement Formattable for Config to enable output formatting
impl Formattable for Config {
    fn format_pretty(&self) -> String {
        let pattern = self
            .validation
            .name_pattern
            .as_deref()
            .unwrap_or("(built-in container name rule)");
        let catalog = self
            .catalog
            .path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(none)".to_string());

        format!(
            "[validation]\nmax_nesting_depth = {}\nname_pattern = {}\n\n[catalog]\npath = {}\n",
            self.validation.max_nesting_depth, pattern, catalog
        )
    }
}

/// Handle the config init subcommand
pub fn handle_init(ctx: &AppContext, config_path: &Path) {
    match config::init_config(config_path) {
        Ok(_) => {
            format::success(
                ctx,
                &format!("Initialized config file at: {}", config_path.display()),
            );
        }
        Err(e) => {
            format::error(ctx, &e);
            std::process::exit(1);
        }
    }
}

/// Handle the config show subcommand, printing the effective configuration
pub fn handle_show(ctx: &AppContext, fmt: OutputFormat) {
    format::print_output(ctx, &ctx.config, fmt);
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
