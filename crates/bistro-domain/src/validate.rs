//! Field format checks shared by signup and party forms.

use std::sync::LazyLock;

use regex::Regex;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static regex"));

static PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("static regex"));

// 2-digit state code, PAN (5 letters, 4 digits, 1 letter), entity number, 'Z', checksum.
static GSTIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{2}[A-Z]{5}[0-9]{4}[A-Z][1-9A-Z]Z[0-9A-Z]$").expect("static regex")
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

/// Ten-digit local mobile number.
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE.is_match(phone)
}

pub fn is_valid_gstin(gstin: &str) -> bool {
    GSTIN.is_match(gstin)
}

/// Lower-case and trim, the stored form of an email address.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
