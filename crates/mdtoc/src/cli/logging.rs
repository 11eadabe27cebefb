//! Diagnostic logging setup.
//!
//! Log events go to stderr so they never mix with the report lines on stdout.

use std::io;

use tracing_subscriber::EnvFilter;

/// Crates whose debug events `-v` enables.
const CRATES: &[&str] = &["mdtoc", "mdtoc_config", "mdtoc_document", "mdtoc_sweep"];

/// Installs the global subscriber.
///
/// `RUST_LOG` takes precedence; otherwise the level is `warn`, raised to
/// `debug` for the mdtoc crates with `-v` and to `trace` with `-vv`.
pub fn init(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(verbose));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Builds the filter used when `RUST_LOG` is unset.
fn default_filter(verbose: u8) -> EnvFilter {
    EnvFilter::new(directives(verbose))
}

/// Filter directives for a verbosity count.
fn directives(verbose: u8) -> String {
    let level = match verbose {
        0 => return "warn".to_string(),
        1 => "debug",
        _ => "trace",
    };
    let mut parts = vec!["warn".to_string()];
    parts.extend(CRATES.iter().map(|krate| format!("{krate}={level}")));
    parts.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_by_default() {
        assert_eq!(directives(0), "warn");
    }

    #[test]
    fn verbose_enables_crate_debug() {
        let d = directives(1);
        assert!(d.starts_with("warn,"));
        assert!(d.contains("mdtoc_sweep=debug"));
        assert!(d.contains("mdtoc_document=debug"));
    }

    #[test]
    fn very_verbose_enables_trace() {
        assert!(directives(3).contains("mdtoc=trace"));
    }
}
