#[cfg(test)]
mod credentials;
#[cfg(test)]
mod operations;
#[cfg(test)]
mod timeout;

#[cfg(test)]
mod support {
    use debitech_soap::{Api, ClientConfig, Credentials};
    use env_logger::Env;
    use mock_server::MockGateway;
    use mock_server::mock_gateway::SERVICE_PATH;
    use std::net::SocketAddr;
    use std::sync::OnceLock;
    use std::time::Duration;

    static GATEWAY: OnceLock<SocketAddr> = OnceLock::new();

    pub fn config() -> ClientConfig {
        let _ = env_logger::Builder::from_env(Env::default().default_filter_or("trace"))
            .is_test(true)
            .try_init();

        let address = GATEWAY.get_or_init(MockGateway::spawn);
        ClientConfig {
            endpoint: format!("http://{address}{SERVICE_PATH}"),
            timeout: Duration::from_secs(1),
            wiredump: true,
            ..ClientConfig::default()
        }
    }

    pub fn api(merchant: &str, username: &str, password: &str) -> Api {
        Api::with_config(Credentials::new(merchant, username, password), config()).unwrap()
    }
}
