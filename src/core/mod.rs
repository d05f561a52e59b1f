pub mod archiver;

pub use crate::domain::model::{ArchiveReport, PlannedCopy};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
