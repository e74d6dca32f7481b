pub mod engine;
pub mod lightbox;
pub mod loader;
pub mod locale;
pub mod pipeline;

pub use crate::domain::model::{PageData, Project, Resume, StringTable};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
