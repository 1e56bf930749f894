pub mod etl;
pub mod pipeline;
pub mod transform;

pub use crate::domain::model::{ColourRanking, PersonRecord, RecordSet, Summary};
pub use crate::domain::ports::{ConfigProvider, Pipeline};
pub use crate::utils::error::Result;
