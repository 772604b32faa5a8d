pub mod dashboard;
pub mod media;
pub mod pages;
pub mod portfolio;
pub mod setup;
