//! # formkit
//!
//! Form-field enhancement helpers for browser pages: currency input
//! formatting, a live password-strength meter, and a random color helper.
//!
//! The formatting and binding logic is plain Rust over the traits in
//! [`element`]; the `web` feature adds `web-sys` implementations of those
//! traits and `wasm-bindgen` entry points for page scripts.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`number`] | Currency string <-> amount conversion |
//! | [`color`] | Random `#RRGGBB` colors |
//! | [`element`] | UI capabilities consumed by the binders |
//! | [`currency_field`] | Reformat a field as currency on change |
//! | [`password_strength`] | Score a password field on every input |
//! | [`options`] | Binder configuration |
//! | [`error`] | Shared error type |
//! | `web` | Browser adapter (feature `web`) |

pub mod color;
pub mod currency_field;
pub mod element;
pub mod error;
pub mod number;
pub mod options;
pub mod password_strength;
#[cfg(feature = "web")]
pub mod web;

#[cfg(test)]
mod testing;

pub use error::FormError;
