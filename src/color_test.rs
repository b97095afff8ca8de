#![allow(clippy::float_cmp)]

use std::collections::HashSet;

use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;

fn is_upper_hex_color(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].bytes().all(|b| HEX_DIGITS.contains(&b))
}

#[test]
fn random_color_has_hash_and_six_uppercase_hex_digits() {
    for _ in 0..200 {
        let color = random_color();
        assert!(is_upper_hex_color(&color), "unexpected color {color}");
    }
}

#[test]
fn random_color_with_is_deterministic_for_a_seed() {
    let a = random_color_with(&mut StdRng::seed_from_u64(7));
    let b = random_color_with(&mut StdRng::seed_from_u64(7));
    assert_eq!(a, b);
    assert!(is_upper_hex_color(&a));
}

#[test]
fn every_hex_digit_is_reachable_in_every_position() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut seen: Vec<HashSet<u8>> = vec![HashSet::new(); HEX_LEN];
    for _ in 0..2_000 {
        let color = random_color_with(&mut rng);
        for (pos, b) in color.bytes().skip(1).enumerate() {
            seen[pos].insert(b);
        }
    }
    for (pos, digits) in seen.iter().enumerate() {
        assert_eq!(digits.len(), 16, "position {pos} missed digits");
    }
}

#[test]
fn digit_distribution_is_roughly_uniform() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut counts = [0_usize; 16];
    let draws = 4_000;
    for _ in 0..draws {
        let color = random_color_with(&mut rng);
        for b in color.bytes().skip(1) {
            let idx = HEX_DIGITS.iter().position(|d| *d == b).expect("hex digit");
            counts[idx] += 1;
        }
    }
    let expected = draws * HEX_LEN / 16;
    for count in counts {
        assert!(count > expected / 2 && count < expected * 3 / 2, "skewed count {count}");
    }
}
