use thiserror::Error;

/// 统一的错误类型
#[derive(Error, Debug)]
pub enum Error {
    /// tokio-postgres 错误
    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] tokio_postgres::Error),

    /// deadpool-postgres 连接池错误
    #[error("Pool error: {0}")]
    Pool(#[from] deadpool_postgres::PoolError),

    /// deadpool-postgres 连接池创建错误
    #[error("Create pool error: {0}")]
    CreatePool(#[from] deadpool::managed::CreatePoolError<deadpool_postgres::ConfigError>),

    /// URL 解析错误
    #[error("URL parse error: {0}")]
    UrlParse(String),

    /// 缺少必需的环境变量
    #[error("missing environment variable {0}")]
    MissingEnv(&'static str),

    /// 环境变量的值无效
    #[error("invalid value {value:?} for environment variable {key}")]
    InvalidEnv { key: &'static str, value: String },
}

/// 错误分类
///
/// 调用方可以据此决定是否向上传播、重试或忽略。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// 违反约束（唯一、非空、检查、外键），SQLSTATE 23 类
    Constraint,
    /// 无法获取连接、连接已关闭或连接异常（SQLSTATE 08 类）
    Connection,
    /// 其他语句执行失败
    Execution,
    /// 连接池或配置构建失败
    Configuration,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Postgres(e) => classify_postgres(e),
            Error::Pool(_) => ErrorKind::Connection,
            Error::CreatePool(_)
            | Error::UrlParse(_)
            | Error::MissingEnv(_)
            | Error::InvalidEnv { .. } => ErrorKind::Configuration,
        }
    }
}

fn classify_postgres(e: &tokio_postgres::Error) -> ErrorKind {
    if e.is_closed() {
        return ErrorKind::Connection;
    }
    match e.code().map(|state| state.code()) {
        Some(code) if code.starts_with("23") => ErrorKind::Constraint,
        Some(code) if code.starts_with("08") => ErrorKind::Connection,
        _ => ErrorKind::Execution,
    }
}
