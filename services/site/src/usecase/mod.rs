pub mod banner;
pub mod content;
pub mod statistic;
pub mod vision_mission;
