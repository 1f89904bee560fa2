//! Single-value predicates backing the string rules.

use std::sync::LazyLock;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use regex::Regex;
use validator::ValidateEmail;

use crate::catalog::IMAGE_EXTENSIONS;

static ALPHA_SPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[a-z0-9 .\-]+$").expect("valid regex"));

static DECIMAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+(\.[0-9]{1,2})?$").expect("valid regex"));

static ALPHA_NUM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("valid regex"));

static ALPHA_DASH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_\-]+$").expect("valid regex"));

/// Letters, digits, spaces, dots and dashes; at least one character.
pub fn alpha_space(value: &str) -> bool {
    ALPHA_SPACE_RE.is_match(value)
}

/// Non-negative decimal with at most two fraction digits and no sign.
pub fn decimal(value: &str) -> bool {
    DECIMAL_RE.is_match(value)
}

/// Exactly one of `jpg`, `jpeg`, `png`. No case folding.
pub fn image_extension(value: &str) -> bool {
    IMAGE_EXTENSIONS.contains(&value)
}

pub fn alpha_num(value: &str) -> bool {
    ALPHA_NUM_RE.is_match(value)
}

pub fn alpha_dash(value: &str) -> bool {
    ALPHA_DASH_RE.is_match(value)
}

pub fn email(value: &str) -> bool {
    value.to_string().validate_email()
}

/// Standard-alphabet, padded base64 with a non-empty payload.
pub fn base64(value: &str) -> bool {
    !value.is_empty() && STANDARD.decode(value).is_ok()
}
