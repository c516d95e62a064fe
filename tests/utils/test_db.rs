/// Isolated test database utility that creates and cleans up temporary databases
/// Each test gets its own database that is dropped when the `TestDb` goes out of scope
///
/// This uses TEST_DATABASE_URL from the environment to connect to the test database server.
use diesel::r2d2::{self, ConnectionManager};
use diesel::{sql_query, Connection, PgConnection, RunQueryDsl};
use diesel_migrations::MigrationHarness;
use futures::future::BoxFuture;
use movie_reviews::shared::infrastructure::database::MIGRATIONS;
use movie_reviews::shared::Database;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::thread;

static TEST_DB_COUNTER: AtomicU32 = AtomicU32::new(0);

pub type TestPool = r2d2::Pool<ConnectionManager<PgConnection>>;

/// Isolated test database that automatically cleans up on drop
///
/// # Example
/// ```rust,ignore
/// #[tokio::test]
/// #[ignore]
/// async fn test_something() {
///     let test_db = TestDb::new();
///     test_db
///         .run_test(|database| {
///             Box::pin(async move {
///                 let (movies, reviews) = build_db_services(database);
///                 // Test...
///             })
///         })
///         .await;
/// }
/// ```
pub struct TestDb {
    server_url: String,
    name: String,
    pool: TestPool,
}

impl TestDb {
    /// Creates a new isolated test database named `movie_reviews_test_{pid}_{counter}`
    pub fn new() -> Self {
        dotenvy::dotenv().ok();

        let name = format!(
            "movie_reviews_test_{}_{}",
            std::process::id(),
            TEST_DB_COUNTER.fetch_add(1, Ordering::SeqCst)
        );

        let server_url = std::env::var("TEST_DATABASE_URL")
            .expect("TEST_DATABASE_URL must be set in .env for database tests");

        let mut conn = PgConnection::establish(&server_url)
            .expect("Failed to connect to test database server");

        sql_query(format!("CREATE DATABASE {}", name))
            .execute(&mut conn)
            .unwrap_or_else(|e| panic!("Failed to create test database {}: {}", name, e));

        // Replace the database name in the URL (everything after the last '/')
        let last_slash = server_url
            .rfind('/')
            .unwrap_or_else(|| panic!("Invalid TEST_DATABASE_URL format: {}", server_url));
        let isolated_url = format!("{}/{}", &server_url[..last_slash], name);

        let manager = ConnectionManager::<PgConnection>::new(isolated_url);
        let pool = r2d2::Pool::builder()
            .max_size(5)
            .test_on_check_out(true)
            .build(manager)
            .expect("Failed to build test database connection pool");

        Self {
            server_url,
            name,
            pool,
        }
    }

    /// Migrate the isolated database, then run `test` against it
    pub async fn run_test(&self, test: impl Fn(Arc<Database>) -> BoxFuture<'static, ()>) {
        {
            let conn = &mut self
                .pool
                .get()
                .expect("Unable to connect to the test database");
            conn.run_pending_migrations(MIGRATIONS)
                .expect("Unable to migrate the test database");
        }

        test(Arc::new(Database::from_pool(self.pool.clone()))).await;
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Drop for TestDb {
    /// Terminates open connections and drops the database.
    /// A panicking test leaves its database behind for inspection.
    fn drop(&mut self) {
        if thread::panicking() {
            eprintln!(
                "TestDb leaking database '{}' due to panic - preserved for debugging",
                self.name
            );
            return;
        }

        let mut conn = match PgConnection::establish(&self.server_url) {
            Ok(conn) => conn,
            Err(e) => {
                eprintln!("Failed to connect for cleanup of '{}': {}", self.name, e);
                return;
            }
        };

        if let Err(e) = sql_query(format!(
            "SELECT pg_terminate_backend(pid) FROM pg_stat_activity WHERE datname = '{}'",
            self.name
        ))
        .execute(&mut conn)
        {
            eprintln!("Failed to terminate connections for '{}': {}", self.name, e);
        }

        match sql_query(format!("DROP DATABASE IF EXISTS {}", self.name)).execute(&mut conn) {
            Ok(_) => log::debug!("Cleaned up test database: {}", self.name),
            Err(e) => eprintln!("Failed to drop test database '{}': {}", self.name, e),
        }
    }
}
