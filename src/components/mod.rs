pub mod app;
pub mod icons;
pub mod post_card;
pub mod pull_to_refresh;
