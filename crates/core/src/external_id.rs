//! Product codes
//!
//! Generated codes look like `PRD-LX2K9Q1C-7F3ZQ0MA`: a fixed prefix, the current Unix time in
//! milliseconds and a random suffix, both base-36 and uppercase.

use jiff::Timestamp;
use rand::Rng;

/// Prefix identifying a generated product code.
pub const EXTERNAL_ID_PREFIX: &str = "PRD";

/// Number of random base-36 characters in a generated code.
pub const RANDOM_SUFFIX_LEN: usize = 8;

const RADIX: u32 = 36;

/// Generate a new product code from the current time plus randomness.
pub fn generate() -> String {
    generate_at(Timestamp::now(), &mut rand::thread_rng())
}

/// Generate a product code for a specific instant with the given randomness source.
pub fn generate_at<R: Rng + ?Sized>(now: Timestamp, rng: &mut R) -> String {
    let millis = u64::try_from(now.as_millisecond()).unwrap_or(0);

    let suffix: String = (0..RANDOM_SUFFIX_LEN)
        .filter_map(|_| char::from_digit(rng.gen_range(0..RADIX), RADIX))
        .collect();

    format!("{EXTERNAL_ID_PREFIX}-{}-{suffix}", base36(millis)).to_uppercase()
}

/// Whether `code` has the shape of a generated product code.
pub fn is_generated(code: &str) -> bool {
    let mut parts = code.split('-');

    let (Some(prefix), Some(time), Some(suffix), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return false;
    };

    let upper_base36 = |part: &str| {
        !part.is_empty()
            && part
                .chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase())
    };

    prefix == EXTERNAL_ID_PREFIX
        && upper_base36(time)
        && upper_base36(suffix)
        && suffix.len() == RANDOM_SUFFIX_LEN
}

fn base36(mut value: u64) -> String {
    let mut digits = Vec::new();

    loop {
        let digit = u32::try_from(value % u64::from(RADIX)).unwrap_or(0);
        digits.extend(char::from_digit(digit, RADIX));
        value /= u64::from(RADIX);

        if value == 0 {
            break;
        }
    }

    digits.iter().rev().collect()
}
