/// Get the version string for regpath and libregpath
pub fn get_version_string() -> String {
    format!(
        "regpath {}\nlibregpath {}",
        env!("CARGO_PKG_VERSION"),
        libregpath::version()
    )
}

/// Print version information to stdout
pub fn print_version() {
    println!("{}", get_version_string());
}

#[cfg(test)]
#[path = "version_tests.rs"]
mod tests;
