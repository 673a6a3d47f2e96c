pub mod app;
pub mod app_assets;
pub mod components;
pub mod config;
pub mod ids;
pub mod models;
pub mod ops;
pub mod pages;
pub mod state;
pub mod storage;
pub mod view;

pub use app::App;
pub use models::{Filter, Task};
pub use state::TodoStore;
