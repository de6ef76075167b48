use std::io::Write;

use dummyapi::{status_code, DummyApi, DummyApiConfig};
use tracing::info;

use crate::cli::Command;
use crate::error::CliError;

/// Run one command and write its status lines to `out`.
///
/// Returns the process exit code. The demo always exits 0; single commands
/// exit with their operation's status.
pub async fn run<W: Write>(
    command: Command,
    config: DummyApiConfig,
    out: &mut W,
) -> Result<i32, CliError> {
    match command {
        Command::Probe => {
            let api = DummyApi::from_config(config)?;
            let status = api.test_connection().await;
            writeln!(out, "[+] Test api key connection status:  {status}")?;
            Ok(if status.is_connected() { 0 } else { 1 })
        }

        Command::Users => {
            let api = DummyApi::from_config(config)?;
            let code = status_code(&api.collect_all_users().await);
            writeln!(out, "[+] Users evidence collection status:  {code}")?;
            Ok(code)
        }

        Command::Posts => {
            let api = DummyApi::from_config(config)?;
            let code = status_code(&api.collect_posts_and_comments().await);
            writeln!(out, "[+] Posts evidence collection status:  {code}")?;
            Ok(code)
        }

        Command::Demo => run_demo(config, out).await,
    }
}

/// Probe with the key and with a deliberately corrupted copy, then run both
/// collection flows with the real key.
async fn run_demo<W: Write>(config: DummyApiConfig, out: &mut W) -> Result<i32, CliError> {
    let mut corrupted = config.clone();
    corrupted.app_id.push('0');

    let api = DummyApi::from_config(config)?;
    let invalid_api = DummyApi::from_config(corrupted)?;

    let valid_status = api.test_connection().await;
    let invalid_status = invalid_api.test_connection().await;
    info!(
        valid = valid_status.is_connected(),
        invalid = invalid_status.is_connected(),
        "connection probes finished"
    );

    let users_status = status_code(&api.collect_all_users().await);
    let posts_status = status_code(&api.collect_posts_and_comments().await);

    writeln!(out, "[+] Test valid api key connection status:  {valid_status}")?;
    writeln!(out, "[+] Test non-valid api key connection status:  {invalid_status}")?;
    writeln!(out, "[+] Users evidence collection status:  {users_status}")?;
    writeln!(out, "[+] Posts evidence collection status:  {posts_status}")?;

    Ok(0)
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    const KEY: &str = "6526ab1c2a4b3f0b5c8d9e01";

    async fn mock_service() -> MockServer {
        let server = MockServer::start().await;

        // With the real key: one user and one post, then empty pages.
        Mock::given(method("GET"))
            .and(path("/user"))
            .and(header("app-id", KEY))
            .and(query_param("page", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/user"))
            .and(header("app-id", KEY))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"data": [{"id": "u1"}]})),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/post"))
            .and(header("app-id", KEY))
            .and(query_param("page", "0"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"data": [{"id": "p1"}]})),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/post"))
            .and(header("app-id", KEY))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/post/p1/comment"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"data": [{"id": "c1"}]})),
            )
            .mount(&server)
            .await;
        // Anything else, including the corrupted key, is rejected.
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(403).set_body_json(json!({"error": "APP_ID_NOT_EXIST"})),
            )
            .mount(&server)
            .await;

        server
    }

    fn config(server: &MockServer, dir: &std::path::Path) -> DummyApiConfig {
        let mut config = DummyApiConfig::new(KEY);
        config.base_url = server.uri();
        config.output_dir = dir.to_path_buf();
        config
    }

    #[tokio::test]
    async fn test_demo_reports_all_four_statuses() {
        let server = mock_service().await;
        let dir = tempfile::tempdir().unwrap();
        let mut out = Vec::new();

        let code = run(Command::Demo, config(&server, dir.path()), &mut out)
            .await
            .unwrap();

        assert_eq!(code, 0);
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[0],
            "[+] Test valid api key connection status:  <Response [200]>"
        );
        assert!(lines[1]
            .starts_with("[+] Test non-valid api key connection status:  HTTP error 403"));
        assert_eq!(lines[2], "[+] Users evidence collection status:  0");
        assert_eq!(lines[3], "[+] Posts evidence collection status:  0");
        assert!(dir.path().join(dummyapi::USERS_FILE).exists());
        assert!(dir.path().join(dummyapi::POSTS_WITH_COMMENTS_FILE).exists());
    }

    #[tokio::test]
    async fn test_single_command_exit_codes() {
        let server = mock_service().await;
        let dir = tempfile::tempdir().unwrap();

        let mut bad = config(&server, dir.path());
        bad.app_id = "wrong".into();

        let probe = run(Command::Probe, bad.clone(), &mut Vec::new()).await.unwrap();
        let posts = run(Command::Posts, bad, &mut Vec::new()).await.unwrap();
        let users = run(Command::Users, config(&server, dir.path()), &mut Vec::new())
            .await
            .unwrap();

        assert_eq!(probe, 1);
        assert_eq!(posts, 1);
        assert_eq!(users, 0);
    }
}
