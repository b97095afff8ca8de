//! Live password-strength meter.
//!
//! SYSTEM CONTEXT
//! ==============
//! Scoring is delegated to an external [`Scorer`] (in the browser, the page's
//! `zxcvbn` function). This module maps the 0–4 score onto a meter value and
//! a fixed label, and re-evaluates on every input event.
//!
//! Targets are passed in explicitly, so any number of password fields on one
//! page can each drive their own meter and label.

#[cfg(test)]
#[path = "password_strength_test.rs"]
mod password_strength_test;

use std::fmt;

use crate::element::{EventSource, FieldEvent, LabelTarget, MeterTarget, TextField};
use crate::error::FormError;
use crate::options::StrengthOptions;

/// Highest score a scorer may return.
pub const MAX_SCORE: u8 = 4;

/// Password strength in the closed range `0..=4`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrengthScore(u8);

impl StrengthScore {
    /// Validate a raw score.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::InvalidScore`] when `raw` exceeds [`MAX_SCORE`].
    pub fn new(raw: u8) -> Result<Self, FormError> {
        if raw > MAX_SCORE {
            return Err(FormError::InvalidScore(raw));
        }
        Ok(Self(raw))
    }

    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }

    #[must_use]
    pub fn label(self) -> StrengthLabel {
        match self.0 {
            0 => StrengthLabel::Worst,
            1 => StrengthLabel::Bad,
            2 => StrengthLabel::Weak,
            3 => StrengthLabel::Good,
            _ => StrengthLabel::Strong,
        }
    }
}

/// Validate a score reported as a JavaScript number.
///
/// # Errors
///
/// Returns [`FormError::Scorer`] for fractional, negative, non-finite, or
/// above-[`MAX_SCORE`] values.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn score_from_f64(raw: f64) -> Result<StrengthScore, FormError> {
    if raw.fract() != 0.0 || !(0.0..=f64::from(MAX_SCORE)).contains(&raw) {
        return Err(FormError::Scorer(format!("score out of range: {raw}")));
    }
    StrengthScore::new(raw as u8)
}

impl TryFrom<u8> for StrengthScore {
    type Error = FormError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

/// Human-readable strength label shown next to the meter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrengthLabel {
    Worst,
    Bad,
    Weak,
    Good,
    Strong,
}

impl StrengthLabel {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Worst => "Worst",
            Self::Bad => "Bad",
            Self::Weak => "Weak",
            Self::Good => "Good",
            Self::Strong => "Strong",
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Estimates password strength.
pub trait Scorer {
    /// Score `password`.
    ///
    /// # Errors
    ///
    /// Implementations return an error when no valid score can be produced.
    fn score(&self, password: &str) -> Result<StrengthScore, FormError>;
}

impl<F> Scorer for F
where
    F: Fn(&str) -> u8,
{
    fn score(&self, password: &str) -> Result<StrengthScore, FormError> {
        StrengthScore::new(self(password))
    }
}

/// Meter and label updated by one password field.
#[derive(Clone, Debug)]
pub struct StrengthTargets<M, L> {
    pub meter: M,
    pub label: L,
}

/// Re-evaluate `field`'s strength on every input event.
///
/// # Errors
///
/// Returns [`FormError::Listener`] if the input listener cannot be registered.
pub fn bind_password_strength<F, M, L, S>(
    field: &F,
    targets: StrengthTargets<M, L>,
    scorer: S,
    _options: &StrengthOptions,
) -> Result<(), FormError>
where
    F: TextField + EventSource + Clone + 'static,
    M: MeterTarget + 'static,
    L: LabelTarget + 'static,
    S: Scorer + 'static,
{
    let handle = field.clone();
    field.listen(
        FieldEvent::Input,
        Box::new(move || {
            update_strength(&handle.value(), &targets, &scorer);
        }),
    )?;
    log::debug!("password strength meter bound");
    Ok(())
}

/// Apply the strength of `text` to `targets`.
///
/// Empty text clears the label and resets the meter. Returns the score that
/// was applied, or `None` when the text was empty or the scorer failed.
pub fn update_strength<M, L, S>(text: &str, targets: &StrengthTargets<M, L>, scorer: &S) -> Option<StrengthScore>
where
    M: MeterTarget,
    L: LabelTarget,
    S: Scorer + ?Sized,
{
    if text.is_empty() {
        targets.meter.set_meter(0.0);
        targets.label.set_label("");
        return None;
    }

    match scorer.score(text) {
        Ok(score) => {
            targets.meter.set_meter(f64::from(score.get()));
            targets.label.set_label(score.label().as_str());
            Some(score)
        }
        Err(e) => {
            log::error!("password scoring failed: {e}");
            None
        }
    }
}
