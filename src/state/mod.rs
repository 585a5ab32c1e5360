pub mod converter;
pub mod diff;
pub mod fingerprint;
pub mod state_model;
pub mod walker;
