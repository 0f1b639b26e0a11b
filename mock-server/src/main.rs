use env_logger::Env;
use log::info;
use mock_server::MockGateway;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("trace")).init();
    info!("Starting Mock Server");
    MockGateway::listen("127.0.0.1:3000").await;
}
