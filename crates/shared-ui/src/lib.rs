//! Component library shared by every LawLink screen.

pub mod components;

pub use components::*;
