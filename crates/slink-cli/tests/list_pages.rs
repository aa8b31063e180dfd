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
async fn list_defaults_to_json_when_piped() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    mount_page(&server, 1, listing(2, &["docs", "blog"])).await;

    let out = assert_cmd::Command::cargo_bin("slink")?
        .args(["list", "--server", &server.uri()])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let v: Value = serde_json::from_slice(&out)?;
    let arr = v.as_array().cloned().unwrap_or_default();
    assert_eq!(arr.len(), 2, "expected both mappings in the array");
    assert_eq!(arr[0]["slug"], "docs");
    assert_eq!(arr[0]["url"], "https://example.com/docs");
    Ok(())
}

#[tokio::test]
async fn list_text_shows_mappings_and_a_page_footer() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    mount_page(&server, 1, listing(2, &["docs", "blog"])).await;

    assert_cmd::Command::cargo_bin("slink")?
        .args(["list", "--format", "text", "--server", &server.uri()])
        .assert()
        .success()
        .stdout(predicate::str::contains("docs -> https://example.com/docs"))
        .stdout(predicate::str::contains("Page 1 of 1"));
    Ok(())
}

#[tokio::test]
async fn list_jsonl_emits_one_mapping_per_line() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    mount_page(&server, 1, listing(2, &["docs", "blog"])).await;

    let out = assert_cmd::Command::cargo_bin("slink")?
        .args(["list", "--format", "jsonl", "--server", &server.uri()])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let lines: Vec<Value> = String::from_utf8(out)?
        .lines()
        .map(serde_json::from_str)
        .collect::<Result<_, _>>()?;
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1]["slug"], "blog");
    Ok(())
}

#[tokio::test]
async fn list_reaches_later_pages() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    mount_page(&server, 1, listing(60, &["a1"])).await;
    mount_page(&server, 2, listing(60, &["b1"])).await;

    assert_cmd::Command::cargo_bin("slink")?
        .args([
            "list",
            "--page",
            "2",
            "--format",
            "text",
            "--server",
            &server.uri(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("b1 -> https://example.com/b1"))
        .stdout(predicate::str::contains("Page 2 of 2"));
    Ok(())
}

#[tokio::test]
async fn out_of_range_pages_fall_back_to_the_first_page() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    mount_page(&server, 1, listing(2, &["docs"])).await;

    assert_cmd::Command::cargo_bin("slink")?
        .args([
            "list",
            "--page",
            "9",
            "--format",
            "text",
            "--server",
            &server.uri(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Page 1 of 1"));
    Ok(())
}

#[tokio::test]
async fn server_failures_surface_the_fixed_message() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/urls/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("listing exploded"))
        .mount(&server)
        .await;

    assert_cmd::Command::cargo_bin("slink")?
        .args(["list", "--server", &server.uri()])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Failed to fetch your URLs due to an unexpected error.",
        ));
    Ok(())
}

#[tokio::test]
async fn an_empty_collection_renders_a_hint() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    mount_page(&server, 1, listing(0, &[])).await;

    assert_cmd::Command::cargo_bin("slink")?
        .args(["list", "--format", "text", "--server", &server.uri()])
        .assert()
        .success()
        .stdout(predicate::str::contains("No short links yet."))
        .stdout(predicate::str::contains("Page 1 of 1"));
    Ok(())
}
