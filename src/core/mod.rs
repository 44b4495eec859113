pub mod error;
pub mod types;

// 错误和结果类型
pub use error::{ConfigError, ErrorKind, ExtractError, ExtractResult, TreeError};

// 核心数据类型
pub use types::{Span, ToSpan};
