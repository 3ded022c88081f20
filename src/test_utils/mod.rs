pub mod example_games;

use crate::game::Payoff;

/// Initialize env_logger for tests. Safe to call multiple times.
pub fn init_logger() {
    let _ = env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Trace)
        .is_test(true)
        .try_init();
}

/// Shorthand for an integer payoff.
pub fn int(value: i64) -> Payoff {
    Payoff::from_integer(value.into())
}

/// Shorthand for a rational payoff `numerator / denominator`.
pub fn ratio(numerator: i64, denominator: i64) -> Payoff {
    Payoff::new(numerator.into(), denominator.into())
}

/// Shorthand for a payoff vector of integers.
pub fn payoffs(values: &[i64]) -> Vec<Payoff> {
    values.iter().map(|it| int(*it)).collect()
}
