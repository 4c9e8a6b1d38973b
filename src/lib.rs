pub mod config;
pub mod controller;
pub mod data_source;
pub mod domain;
pub mod error;
pub mod render;
pub mod view_model;

pub use controller::{ListController, LoadOutcome, LoadTicket};
pub use error::{AppError, Result};
pub use view_model::ListViewModel;
