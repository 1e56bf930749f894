use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Fetch failed with HTTP status {status}")]
    FetchFailed { status: u16 },

    #[error("Submit failed with HTTP status {status}")]
    SubmitFailed { status: u16 },

    #[error("Malformed payload: {reason}")]
    MalformedPayload { reason: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl EtlError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::ApiError(_) | EtlError::FetchFailed { .. } | EtlError::SubmitFailed { .. } => {
                ErrorCategory::Network
            }
            EtlError::SerializationError(_) | EtlError::MalformedPayload { .. } => {
                ErrorCategory::Data
            }
            EtlError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            EtlError::ApiError(e) => format!("無法連接 API: {}", e),
            EtlError::FetchFailed { status } => {
                format!("取得資料失敗 (HTTP {}), 不會提交任何結果", status)
            }
            EtlError::SubmitFailed { status } => format!("提交結果失敗 (HTTP {})", status),
            EtlError::SerializationError(_) | EtlError::MalformedPayload { .. } => {
                "伺服器回傳的資料格式不正確".to_string()
            }
            EtlError::InvalidConfigValueError { field, .. } => {
                format!("配置項 {} 無效", field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check network connectivity and that the endpoint is up, then rerun",
            ErrorCategory::Data => "Inspect the raw response; the server contract may have changed",
            ErrorCategory::Configuration => "Fix the flagged CLI argument and rerun",
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;
