//! Random color generation.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

use rand::Rng;

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";
const HEX_LEN: usize = 6;

/// Random `#RRGGBB` color with uppercase hex digits.
#[must_use]
pub fn random_color() -> String {
    random_color_with(&mut rand::rng())
}

/// [`random_color`] drawing from the supplied generator.
pub fn random_color_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut color = String::with_capacity(HEX_LEN + 1);
    color.push('#');
    for _ in 0..HEX_LEN {
        let idx = rng.random_range(0..HEX_DIGITS.len());
        color.push(char::from(HEX_DIGITS[idx]));
    }
    color
}
