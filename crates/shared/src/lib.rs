pub mod dataset;
pub mod models;
pub mod navigation;
pub mod route;
pub mod viewport;
