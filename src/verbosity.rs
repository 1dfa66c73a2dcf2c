use log::{warn, LevelFilter};

/// 0 - 4 map from Error to Trace, negative numbers turn logging off and
/// anything above 4 falls back to Warn.
pub fn level_filter(verbose: i8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Error,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        3 => LevelFilter::Debug,
        4 => LevelFilter::Trace,
        v if v.is_negative() => LevelFilter::Off,
        _ => LevelFilter::Warn,
    }
}

/// Installs the logger at the `--verbose` level. `RUST_LOG`, when set, still
/// refines it per module.
pub fn init_logger(verbose: i8) {
    pretty_env_logger::formatted_builder()
        .filter_level(level_filter(verbose))
        .parse_default_env()
        .init();
    if verbose > 4 {
        warn!("Unsupported Level {}, defaulting to warn", verbose)
    }
}

#[cfg(test)]
mod tests {
    use super::level_filter;
    use log::LevelFilter;

    #[test]
    fn maps_every_level() {
        let levels: Vec<LevelFilter> = (0..=4).map(level_filter).collect();
        assert_eq!(
            levels,
            vec![
                LevelFilter::Error,
                LevelFilter::Warn,
                LevelFilter::Info,
                LevelFilter::Debug,
                LevelFilter::Trace
            ]
        );
    }

    #[test]
    fn out_of_range() {
        assert_eq!(level_filter(-1), LevelFilter::Off);
        assert_eq!(level_filter(i8::MIN), LevelFilter::Off);
        assert_eq!(level_filter(5), LevelFilter::Warn);
        assert_eq!(level_filter(i8::MAX), LevelFilter::Warn);
    }
}
