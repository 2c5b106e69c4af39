//! Log setup for the `rpcforge` binary.
//!
//! The core and adapter crates emit `tracing` events but never install a
//! subscriber; [`init_logging`] is the one place that does. Events go to
//! stderr so a JSON report on stdout can be piped straight into `jq`.
//!
//! `-v`, `-vv` and `-vvv` raise our own targets to INFO, DEBUG and TRACE.
//! `--quiet` drops them to ERROR. Dependencies stay at WARN either way.
//! A valid `RUST_LOG` replaces the whole filter.

use std::io::IsTerminal as _;

use tracing_subscriber::{
    EnvFilter, filter::LevelFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::cli::GlobalArgs;

/// Targets that follow `-v`/`--quiet`.
const OWN_TARGETS: [&str; 3] = ["rpcforge", "rpcforge_core", "rpcforge_adapters"];

/// Install the stderr subscriber. Call once, before the first event.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let level = level_for(args.verbose, args.quiet);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(level));

    // Module paths only help once someone is tracing a patch step.
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_target(level == LevelFilter::TRACE);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("a tracing subscriber is already installed: {e}"))
}

fn level_for(verbose: u8, quiet: bool) -> LevelFilter {
    match (quiet, verbose) {
        (true, _) => LevelFilter::ERROR,
        (false, 0) => LevelFilter::WARN,
        (false, 1) => LevelFilter::INFO,
        (false, 2) => LevelFilter::DEBUG,
        (false, _) => LevelFilter::TRACE,
    }
}

fn own_directives(level: LevelFilter) -> Vec<String> {
    OWN_TARGETS
        .iter()
        .map(|target| format!("{target}={}", level.to_string().to_lowercase()))
        .collect()
}

fn default_filter(level: LevelFilter) -> EnvFilter {
    own_directives(level).iter().fold(
        EnvFilter::default().add_directive(LevelFilter::WARN.into()),
        |filter, directive| match directive.parse() {
            Ok(d) => filter.add_directive(d),
            Err(_) => filter,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_v_raises_one_level() {
        let levels: Vec<_> = (0..=4).map(|v| level_for(v, false)).collect();
        assert_eq!(
            levels,
            [
                LevelFilter::WARN,
                LevelFilter::INFO,
                LevelFilter::DEBUG,
                LevelFilter::TRACE,
                LevelFilter::TRACE
            ]
        );
    }

    #[test]
    fn quiet_wins_over_verbose() {
        assert_eq!(level_for(2, true), LevelFilter::ERROR);
    }

    #[test]
    fn verbosity_reaches_core_and_adapters() {
        let directives = own_directives(LevelFilter::DEBUG);
        assert!(directives.contains(&"rpcforge_core=debug".to_string()));
        assert!(directives.contains(&"rpcforge_adapters=debug".to_string()));
        assert_eq!(directives.len(), OWN_TARGETS.len());
    }

    #[test]
    fn dependencies_stay_at_warn_when_verbose() {
        let rendered = default_filter(LevelFilter::TRACE).to_string().to_lowercase();
        assert!(rendered.contains("rpcforge=trace"));
        assert!(rendered.contains("warn"));
    }
}
