use tokio::runtime::{Builder, Runtime};
use wiremock::MockServer;
use crate::config::Config;

/// Starts a mock server on a current thread runtime.
/// The mock server serves from its own thread, so the blocking client can be used
/// from the test thread as long as it is called outside `block_on`.
pub fn mock_server() -> (Runtime, MockServer) {
    let rt = Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("tokio runtime should build");
    let server = rt.block_on(MockServer::start());

    (rt, server)
}

/// Configuration pointing both upstream services at the given host
pub fn config_for(host: &str) -> Config {
    let mut config = Config::default();
    config.geocoding.host = host.to_string();
    config.weather.host = host.to_string();
    config.general.request_timeout = Some(5);

    config
}

/// Returns a host where nothing listens
pub fn dead_host() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind should succeed");
    let addr = listener.local_addr().expect("local addr should exist");
    drop(listener);

    format!("http://{}", addr)
}
