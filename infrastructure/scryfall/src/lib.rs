pub mod client;
pub mod localizer;
