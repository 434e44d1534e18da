//! Page state with no browser dependency. Components own one of these each
//! and render from it; DOM reads are limited to measurements passed in.

pub mod audio;
pub mod grid;
pub mod keyboard;
pub mod modal;
pub mod nav;
pub mod newsletter;
pub mod notification;
pub mod parallax;
pub mod reveal;
pub mod scroll;
