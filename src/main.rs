#[tokio::main]
async fn main() -> anyhow::Result<()> {
    movie_reviews::run().await
}
