use std::fmt;

#[derive(Debug, Clone)]
pub enum QuicklinkError {
    Config(String),
    FileOperation(String),
    InvalidArgument(String),
    InvalidOwnerId(String),
    TokenExhausted(String),
}

impl QuicklinkError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            QuicklinkError::Config(_) => "E001",
            QuicklinkError::FileOperation(_) => "E002",
            QuicklinkError::InvalidArgument(_) => "E003",
            QuicklinkError::InvalidOwnerId(_) => "E004",
            QuicklinkError::TokenExhausted(_) => "E005",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            QuicklinkError::Config(_) => "Configuration Error",
            QuicklinkError::FileOperation(_) => "File Operation Error",
            QuicklinkError::InvalidArgument(_) => "Invalid Argument",
            QuicklinkError::InvalidOwnerId(_) => "Invalid Owner Id",
            QuicklinkError::TokenExhausted(_) => "Short Token Space Exhausted",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            QuicklinkError::Config(msg) => msg,
            QuicklinkError::FileOperation(msg) => msg,
            QuicklinkError::InvalidArgument(msg) => msg,
            QuicklinkError::InvalidOwnerId(msg) => msg,
            QuicklinkError::TokenExhausted(msg) => msg,
        }
    }

    /// 格式化为彩色输出（用于终端）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for QuicklinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for QuicklinkError {}

// 便捷的构造函数
impl QuicklinkError {
    pub fn config<T: Into<String>>(msg: T) -> Self {
        QuicklinkError::Config(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        QuicklinkError::FileOperation(msg.into())
    }

    pub fn invalid_argument<T: Into<String>>(msg: T) -> Self {
        QuicklinkError::InvalidArgument(msg.into())
    }

    pub fn invalid_owner_id<T: Into<String>>(msg: T) -> Self {
        QuicklinkError::InvalidOwnerId(msg.into())
    }

    pub fn token_exhausted<T: Into<String>>(msg: T) -> Self {
        QuicklinkError::TokenExhausted(msg.into())
    }
}

impl From<config::ConfigError> for QuicklinkError {
    fn from(err: config::ConfigError) -> Self {
        QuicklinkError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for QuicklinkError {
    fn from(err: toml::ser::Error) -> Self {
        QuicklinkError::Config(err.to_string())
    }
}

impl From<std::io::Error> for QuicklinkError {
    fn from(err: std::io::Error) -> Self {
        QuicklinkError::FileOperation(err.to_string())
    }
}

impl From<uuid::Error> for QuicklinkError {
    fn from(err: uuid::Error) -> Self {
        QuicklinkError::InvalidOwnerId(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, QuicklinkError>;
