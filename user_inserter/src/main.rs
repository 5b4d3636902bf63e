use user_inserter::{DatabaseConfig, Error, insert_user};

mod tracing_setup;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // .env is optional; variables already in the environment win
    dotenvy::dotenv().ok();
    if let Err(err) = tracing_setup::init_tracing() {
        eprintln!("failed to initialise tracing: {err}");
    }

    let pool = DatabaseConfig::from_env()?.connect()?;

    insert_user(&pool, "홍길동", "hong@example.com").await;

    pool.close();
    Ok(())
}
