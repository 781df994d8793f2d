//! Environment variable utilities
//!
//! All runtime knobs (`CTL_*`) are read through these helpers.
//!
//! ```ignore
//! use ctlevent_core::env::{env_get, env_get_opt};
//!
//! let card: u32 = env_get("CTL_CARD", 0);
//! let max: Option<u64> = env_get_opt("CTL_MAX_EVENTS");
//! ```

use std::str::FromStr;

/// Variable parsed as `T`, or `default` if unset or unparsable.
#[inline]
pub fn env_get<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    env_get_opt(key).unwrap_or(default)
}

/// Boolean variable.
///
/// "1", "true", "yes", "on" (any case) are true; any other set value is
/// false; unset returns `default`.
#[inline]
pub fn env_get_bool(key: &str, default: bool) -> bool {
    match std::env::var(key) {
        Ok(val) => matches!(val.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "on"),
        Err(_) => default,
    }
}

/// `Some(T)` if set and parsable.
#[inline]
pub fn env_get_opt<T>(key: &str) -> Option<T>
where
    T: FromStr,
{
    std::env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Each test uses its own variable name; the test harness runs them in parallel.

    #[test]
    fn test_env_get_default() {
        let val: u32 = env_get("__CTL_TEST_UNSET_1__", 42);
        assert_eq!(val, 42);
        assert_eq!(env_get_opt::<u32>("__CTL_TEST_UNSET_1__"), None);
    }

    #[test]
    fn test_env_get_parse() {
        std::env::set_var("__CTL_TEST_NUM__", " 250 ");
        let val: i32 = env_get("__CTL_TEST_NUM__", 0);
        assert_eq!(val, 250);
        std::env::remove_var("__CTL_TEST_NUM__");
    }

    #[test]
    fn test_env_get_invalid_falls_back() {
        std::env::set_var("__CTL_TEST_BAD__", "not_a_number");
        let val: u64 = env_get("__CTL_TEST_BAD__", 7);
        assert_eq!(val, 7);
        assert_eq!(env_get_opt::<u64>("__CTL_TEST_BAD__"), None);
        std::env::remove_var("__CTL_TEST_BAD__");
    }

    #[test]
    fn test_env_get_bool() {
        std::env::set_var("__CTL_TEST_BOOL__", "Yes");
        assert!(env_get_bool("__CTL_TEST_BOOL__", false));
        std::env::set_var("__CTL_TEST_BOOL__", "nope");
        assert!(!env_get_bool("__CTL_TEST_BOOL__", true));
        std::env::remove_var("__CTL_TEST_BOOL__");
        assert!(env_get_bool("__CTL_TEST_BOOL__", true));
    }
}
