pub mod api;
pub mod app;
pub mod interop;
pub mod pages;

pub use api::*;
pub use app::*;
