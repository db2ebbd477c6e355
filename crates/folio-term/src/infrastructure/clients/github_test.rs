use anyhow::Result;

use super::GithubApi;
use crate::domain::models::ProfileSource;

#[tokio::test]
async fn it_reads_profile_counters() -> Result<()> {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/users/octocat")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"login":"octocat","public_repos":8,"followers":9001,"following":9,"bio":null}"#,
        )
        .create_async()
        .await;

    let api = GithubApi::new(&server.url())?;
    let stats = api.fetch_stats("octocat").await?;

    assert_eq!(stats.public_repos, 8);
    assert_eq!(stats.followers, 9001);
    assert_eq!(stats.following, 9);
    mock.assert_async().await;

    Ok(())
}

#[tokio::test]
async fn it_fails_on_error_status() -> Result<()> {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/users/octocat")
        .with_status(403)
        .with_body(r#"{"message":"API rate limit exceeded"}"#)
        .create_async()
        .await;

    let api = GithubApi::new(&format!("{}/", server.url()))?;
    let res = api.fetch_stats("octocat").await;

    assert!(res.is_err());
    assert!(res.unwrap_err().to_string().contains("403"));

    Ok(())
}

#[tokio::test]
async fn it_fails_on_malformed_body() -> Result<()> {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/users/octocat")
        .with_status(200)
        .with_body("not json")
        .create_async()
        .await;

    let api = GithubApi::new(&server.url())?;
    assert!(api.fetch_stats("octocat").await.is_err());

    Ok(())
}

#[tokio::test]
async fn it_rejects_an_empty_user() -> Result<()> {
    let api = GithubApi::new("http://127.0.0.1:9")?;
    assert!(api.fetch_stats("").await.is_err());

    Ok(())
}
