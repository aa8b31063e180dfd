use assert_cmd::prelude::*;
use predicates::prelude::*;
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn listing(count: u64, slugs: &[&str]) -> Value {
    let results: Vec<Value> = slugs
        .iter()
        .map(|slug| json!({"slug": slug, "url": format!("https://example.com/{slug}")}))
        .collect();
    json!({"count": count, "results": results, "previous": null, "next": null})
}

async fn mount_page(server: &MockServer, page: u32, body: Value) {
    Mock::given(method("GET"))
        .and(path("/api/urls/"))
        .and(query_param("page", page.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn browse_renders_the_first_page_and_quits() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    mount_page(&server, 1, listing(2, &["docs", "blog"])).await;

    assert_cmd::Command::cargo_bin("slink")?
        .args(["browse", "--server", &server.uri()])
        .write_stdin("q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("docs -> https://example.com/docs"))
        .stdout(predicate::str::contains("Page 1 of 1"));
    Ok(())
}

#[tokio::test]
async fn browse_navigates_forward_through_pages() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    mount_page(&server, 1, listing(60, &["a1"])).await;
    mount_page(&server, 2, listing(60, &["b1"])).await;

    assert_cmd::Command::cargo_bin("slink")?
        .args(["browse", "--server", &server.uri()])
        .write_stdin("n\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("a1 -> https://example.com/a1"))
        .stdout(predicate::str::contains("b1 -> https://example.com/b1"))
        .stdout(predicate::str::contains("Page 2 of 2"));
    Ok(())
}

#[tokio::test]
async fn browse_jumps_to_a_named_page() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    mount_page(&server, 1, listing(150, &["a1"])).await;
    mount_page(&server, 3, listing(150, &["c1"])).await;

    assert_cmd::Command::cargo_bin("slink")?
        .args(["browse", "--server", &server.uri()])
        .write_stdin("3\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("c1 -> https://example.com/c1"))
        .stdout(predicate::str::contains("Page 3 of 3"));
    Ok(())
}

#[tokio::test]
async fn browse_explains_unknown_commands() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    mount_page(&server, 1, listing(1, &["docs"])).await;

    assert_cmd::Command::cargo_bin("slink")?
        .args(["browse", "--server", &server.uri()])
        .write_stdin("wat\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Commands: n(ext), p(rev)"));
    Ok(())
}

#[tokio::test]
async fn browse_exits_at_end_of_input() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    mount_page(&server, 1, listing(1, &["docs"])).await;

    assert_cmd::Command::cargo_bin("slink")?
        .args(["browse", "--server", &server.uri()])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Page 1 of 1"));
    Ok(())
}
