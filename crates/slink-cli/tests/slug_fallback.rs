use assert_cmd::prelude::*;
use predicates::prelude::*;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn slug_prints_the_server_suggestion_verbatim() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/slug/"))
        .and(query_param("length", "6"))
        .respond_with(ResponseTemplate::new(200).set_body_string("abc123"))
        .expect(1)
        .mount(&server)
        .await;

    assert_cmd::Command::cargo_bin("slink")?
        .args(["slug", "--server", &server.uri()])
        .assert()
        .success()
        .stdout("abc123\n");
    Ok(())
}

#[tokio::test]
async fn slug_falls_back_locally_when_the_server_errors() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/slug/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("generator exploded"))
        .expect(1)
        .mount(&server)
        .await;

    // Still succeeds: the slug comes from the local generator instead
    assert_cmd::Command::cargo_bin("slink")?
        .args(["slug", "--server", &server.uri()])
        .assert()
        .success()
        .stdout(predicate::str::is_match("^[0-9a-z]{6}\n$")?);
    Ok(())
}

#[tokio::test]
async fn slug_falls_back_locally_when_the_server_is_unreachable() -> anyhow::Result<()> {
    // Port 9 is discard; nothing is listening there
    assert_cmd::Command::cargo_bin("slink")?
        .args(["slug", "--length", "8", "--server", "http://127.0.0.1:9"])
        .assert()
        .success()
        .stdout(predicate::str::is_match("^[0-9a-z]{8}\n$")?);
    Ok(())
}

#[tokio::test]
async fn requested_length_is_forwarded_to_the_server() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/slug/"))
        .and(query_param("length", "12"))
        .respond_with(ResponseTemplate::new(200).set_body_string("123456789abc"))
        .expect(1)
        .mount(&server)
        .await;

    assert_cmd::Command::cargo_bin("slink")?
        .args(["slug", "--length", "12", "--server", &server.uri()])
        .assert()
        .success()
        .stdout("123456789abc\n");
    Ok(())
}

#[tokio::test]
async fn zero_length_is_rejected_before_any_request() -> anyhow::Result<()> {
    assert_cmd::Command::cargo_bin("slink")?
        .args(["slug", "--length", "0", "--server", "http://127.0.0.1:9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
    Ok(())
}
