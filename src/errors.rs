//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_counsel_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum CounselError {
            $($variant(String),)*
        }

        impl CounselError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(CounselError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(CounselError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(CounselError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl CounselError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        CounselError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_counsel_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    Validation("E004", "Validation Error"),
    NotFound("E005", "Resource Not Found"),
    Serialization("E006", "Serialization Error"),
    Export("E007", "Report Export Error"),
}

impl CounselError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for CounselError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CounselError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for CounselError {
    fn from(err: sea_orm::DbErr) -> Self {
        CounselError::DatabaseOperation(err.to_string())
    }
}

impl From<serde_json::Error> for CounselError {
    fn from(err: serde_json::Error) -> Self {
        CounselError::Serialization(err.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for CounselError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        CounselError::Export(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CounselError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(CounselError::database_config("test").code(), "E001");
        assert_eq!(CounselError::database_operation("test").code(), "E003");
        assert_eq!(CounselError::not_found("test").code(), "E005");
        assert_eq!(CounselError::export("test").code(), "E007");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            CounselError::database_connection("test").error_type(),
            "Database Connection Error"
        );
        assert_eq!(
            CounselError::export("test").error_type(),
            "Report Export Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = CounselError::not_found("distribution d1");
        assert_eq!(err.message(), "distribution d1");
    }

    #[test]
    fn test_from_serde_json() {
        let err: CounselError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert_eq!(err.code(), "E006");
    }

    #[test]
    fn test_format_simple() {
        let err = CounselError::validation("Invalid distribution id");
        let formatted = err.format_simple();
        assert!(formatted.contains("Validation Error"));
        assert!(formatted.contains("Invalid distribution id"));
    }
}
