//! 自定义断言辅助模块
//!
//! 提供测试中的常用断言函数

use sqlsegment::core::{ErrorKind, ExtractError};

/// 断言结果成功，返回内部值
pub fn assert_ok<T, E: std::fmt::Debug>(result: Result<T, E>) -> T {
    result.expect("operation should succeed")
}

/// 断言结果失败并匹配错误消息
pub fn assert_err_with<T: std::fmt::Debug, E: std::fmt::Display>(
    result: Result<T, E>,
    expected_msg: &str,
) {
    let err = result.expect_err("operation should fail");
    let err_str = err.to_string();
    assert!(
        err_str.contains(expected_msg),
        "error should contain '{}', got '{}'",
        expected_msg,
        err_str
    );
}

/// Asserts extraction failed with an error of `kind` and returns the error.
pub fn assert_err_kind<T: std::fmt::Debug>(
    result: Result<T, ExtractError>,
    kind: ErrorKind,
) -> ExtractError {
    let err = result.expect_err("extraction should fail");
    assert_eq!(err.kind(), kind, "unexpected error: {}", err);
    err
}

/// 断言 Option 是 Some 并返回内部值
pub fn assert_some<T>(opt: &Option<T>) -> &T {
    opt.as_ref().expect("value should be Some")
}

/// 断言 Option 是 None
pub fn assert_none<T>(opt: &Option<T>) {
    assert!(opt.is_none(), "value should be None");
}
