pub mod analytics;
pub mod browse;
pub mod catalog;
pub mod detail;
pub mod discover;
pub mod home;
pub mod recommendations;
