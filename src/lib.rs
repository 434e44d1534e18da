//! Client-side interaction layer for the Ancient Tech Decoded podcast site.
//!
//! Page behaviour lives in [`state`] as plain structs that compile and test
//! without a browser. [`components`] and [`pages`] render those structs with
//! Yew and wire them to DOM events through [`utils::dom`].

pub mod components;
pub mod config;
pub mod content;
pub mod error;
pub mod pages;
pub mod state;
pub mod utils;

pub use pages::landing::Landing;
