use eucl_core::{ClientSettings, DeviceType};

/// Helper for testing against the EUCL API using wiremock.
///
/// Returns settings pointing at the mock server. Warning: when using
/// `Mock::expect` ensure `server` is not dropped before the test completes.
pub async fn start_api_mock(mocks: Vec<wiremock::Mock>) -> (wiremock::MockServer, ClientSettings) {
    let server = wiremock::MockServer::start().await;

    for mock in mocks {
        server.register(mock).await;
    }

    let settings = ClientSettings {
        api_url: server.uri(),
        user_agent: "test-agent".to_string(),
        device_type: DeviceType::Sdk,
    };

    (server, settings)
}
