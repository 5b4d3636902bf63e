//! 执行器抽象层
//!
//! 提供统一的数据库执行接口，连接池、单个连接以及测试替身都实现同一个 trait

use crate::Error;
use async_trait::async_trait;
use tokio_postgres::{types::FromSql, types::ToSql};

/// 统一的数据库执行器 trait
///
/// 语句与参数分开传递，参数由驱动绑定，从不拼接进 SQL 文本。
#[async_trait]
pub trait Executor: Send + Sync {
    /// 执行一个返回标量值的 SQL 语句
    ///
    /// # Arguments
    ///
    /// * `query` - 带有 `$1`, `$2`... 占位符的 SQL 语句
    /// * `params` - 按占位符顺序绑定的参数
    ///
    /// # Returns
    ///
    /// 返回唯一一行的第一列；没有行或多于一行时返回错误
    async fn query_scalar<T>(
        &self,
        query: &str,
        params: &[&(dyn ToSql + Sync)],
    ) -> Result<T, Error>
    where
        T: for<'r> FromSql<'r>;
}

/// 为 `deadpool_postgres::Client` 实现 `Executor` trait
///
/// 使用 deadpool 的语句缓存，同一连接上重复的 INSERT 只 prepare 一次。
#[async_trait]
impl Executor for deadpool_postgres::Client {
    async fn query_scalar<T>(&self, query: &str, params: &[&(dyn ToSql + Sync)]) -> Result<T, Error>
    where
        T: for<'r> FromSql<'r>,
    {
        let stmt = self.prepare_cached(query).await?;
        let row = self.query_one(&stmt, params).await?;
        row.try_get(0).map_err(Error::from)
    }
}
