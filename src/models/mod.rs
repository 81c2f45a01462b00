pub mod common;
pub mod surveys;

pub use common::{ApiResponse, ErrorCode};

// 程序启动时间
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
