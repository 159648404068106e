//! Camera input: arrow keys mapped to rigid camera pans.
//!
//! # Invariants
//! - Every action moves camera position and target by the same delta, so the
//!   view direction is fixed for the lifetime of the program.
//! - Opposite keys are exact inverses of each other.

pub mod action;

pub use action::{Action, CameraKey, InputError, KeyMap, parse_key_sequence};

pub fn crate_info() -> &'static str {
    "spincube-input v0.1.0"
}
