//! 通过 `deadpool-postgres` 连接池向 PostgreSQL 写入用户记录
//!
//! ```no_run
//! use user_inserter::{insert_user, DatabaseConfig};
//!
//! # async fn example() -> Result<(), user_inserter::Error> {
//! let pool = DatabaseConfig::from_env()?.connect()?;
//! insert_user(&pool, "Alice", "alice@example.com").await;
//! pool.close();
//! # Ok(())
//! # }
//! ```

mod config;
mod conn;
mod error;
mod executor;
mod user;

pub use config::{DEFAULT_POOL_SIZE, DatabaseConfig};
pub use conn::{Connection, PooledConnection};
pub use error::{Error, ErrorKind};
pub use executor::Executor;
pub use user::{INSERT_USER_SQL, InsertResult, NewUser, UserId, insert_user};
