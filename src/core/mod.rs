pub mod controller;
pub mod render;
pub mod sample_data;
pub mod site;

pub use crate::domain::model::{Experience, Profile, Project, RecordKind, Skill, SortSpec};
pub use crate::domain::ports::{ConfigProvider, DataProvider, Storage};
pub use crate::utils::error::Result;
