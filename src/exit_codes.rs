//! Exit code constants for the modelpin CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, invalid config, stale prompt)
//! - 2: Model resolution failure (invalid spec, not found, ambiguous)
//! - 3: Model activation failure

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, invalid configuration or catalog, stale prompt.
pub const USER_ERROR: i32 = 1;

/// A model spec could not be resolved to exactly one model.
pub const RESOLUTION_FAILURE: i32 = 2;

/// The host could not activate the resolved model.
pub const ACTIVATION_FAILURE: i32 = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, RESOLUTION_FAILURE, ACTIVATION_FAILURE];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }
}
