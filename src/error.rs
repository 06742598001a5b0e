use thiserror::Error;

pub type TimelineResult<T> = Result<T, TimelineError>;

#[derive(Debug, Error)]
pub enum TimelineError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid time range: start={start}, end={end} (start must be < end)")]
    InvalidTimeRange { start: i64, end: i64 },

    #[error("duplicate resource id `{id}`")]
    DuplicateResource { id: String },

    #[error("duplicate consumption id `{id}`")]
    DuplicateConsumption { id: String },

    #[error("consumption `{consumption_id}` references unknown resource `{resource_id}`")]
    UnknownResource {
        consumption_id: String,
        resource_id: String,
    },

    #[error("consumption `{id}` has start_time={start} >= end_time={end}")]
    InvalidInterval { id: String, start: i64, end: i64 },

    #[error("invalid generator options: {0}")]
    InvalidGeneratorOptions(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("render backend failure: {0}")]
    Render(String),
}
