pub mod error;
pub mod io;
pub mod menu;
pub mod model;
pub mod operation;
pub mod transform;

pub use error::{ReportError, Result};
