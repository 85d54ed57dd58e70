//! SeaORM entities for the site's content tables.

pub mod banners;
pub mod statistic;
pub mod users;
pub mod vision_mission;
