use colored::control::set_override;
use env_logger::{Builder, Target};
use log::LevelFilter;

pub fn init_logging(verbose: bool, no_color: bool) {
    if no_color {
        set_override(false);
    }

    Builder::new()
        .filter_level(level_filter(verbose))
        .format_timestamp(None)
        .target(Target::Stderr)
        .init();
}

fn level_filter(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}
