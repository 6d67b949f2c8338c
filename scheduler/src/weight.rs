//! Priority to load weight conversion.

/// The load weight of a process with priority 0.
pub const NICE_0_LOAD: u64 = 1024;

/// Returns the load weight for `priority`.
///
/// ```text
/// weight = NICE_0_LOAD / (priority + 1)
/// ```
///
/// Priority 0 gets the full [`NICE_0_LOAD`], every larger priority gets a
/// proportionally smaller weight.
pub fn weight(priority: u32) -> f64 {
    NICE_0_LOAD as f64 / (priority as f64 + 1.0)
}

/// Returns the virtual runtime charged for `amount` units of time.
///
/// ```text
/// delta = amount * NICE_0_LOAD / weight(priority)
/// ```
///
/// The result is rounded to the nearest integer, which makes it equal to
/// `amount * (priority + 1)`.
pub fn calc_delta(amount: u64, priority: u32) -> i64 {
    let delta = (amount as f64 * NICE_0_LOAD as f64 / weight(priority)).round();
    delta as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_zero_has_full_weight() {
        assert_eq!(weight(0), NICE_0_LOAD as f64);
        assert_eq!(weight(1), 512.0);
        assert_eq!(weight(3), 256.0);
    }

    #[test]
    fn delta_is_amount_times_priority_plus_one() {
        for priority in 0..40 {
            for amount in [0, 1, 7, 10] {
                assert_eq!(
                    calc_delta(amount, priority),
                    (amount * (priority as u64 + 1)) as i64,
                    "amount {amount} priority {priority}"
                );
            }
        }
    }

    #[test]
    fn lower_priority_number_grows_slower() {
        assert!(calc_delta(1, 0) < calc_delta(1, 1));
        assert!(calc_delta(1, 2) < calc_delta(1, 5));
    }
}
