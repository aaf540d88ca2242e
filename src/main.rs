#[tokio::main]
async fn main() {
    resto_reviews_be::start_server().await;
}
