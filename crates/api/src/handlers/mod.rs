pub mod brand;
pub mod client;
pub mod event;
pub mod project;
