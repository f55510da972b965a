use std::sync::LazyLock;

use regex::Regex;

pub mod contact;
pub mod delivery;

/// The `local@domain.tld` shape checked on both sides of the submission
/// pipeline. Intentionally loose; deliverability is the delivery API's
/// problem.
pub static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());
