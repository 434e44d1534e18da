pub mod episodes;
pub mod floating_city;
pub mod modal;
pub mod nav;
pub mod newsletter;
pub mod notification;
pub mod reveal;
pub mod tech_grid;
