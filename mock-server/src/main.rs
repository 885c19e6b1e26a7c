use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    let password = std::env::var("VOIDGATE_PASSWORD").unwrap_or_else(|_| "changeme".to_string());
    let listener = TcpListener::bind("127.0.0.1:5000").await?;
    println!("mock voidgate listening on http://127.0.0.1:5000");
    mock_server::run(listener, password).await
}
