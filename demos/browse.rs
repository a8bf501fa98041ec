use lichess_explorer::{Explorer, LichessClient};
use tracing_subscriber::EnvFilter;

/// Follows the explorer's own links against the live API and writes each
/// rendered page to `pages/`. Pass a username to look up, e.g.
/// `cargo run --example browse -- hikaru`.
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let username = std::env::args().nth(1).unwrap_or_else(|| "magnuscarlsen".to_string());
    let explorer = Explorer::new(LichessClient::new());

    let profile_target = format!(
        "/profile?username={}",
        url::form_urlencoded::byte_serialize(username.as_bytes()).collect::<String>()
    );
    let visits = [
        ("index", "/"),
        ("profile", profile_target.as_str()),
        ("leaderboards", "/leaderboards?tab=bullet"),
        ("tournaments", "/tournaments?status=finished"),
    ];

    std::fs::create_dir_all("pages").unwrap();
    for (name, target) in visits {
        let html = explorer.navigate(target).await.unwrap();
        std::fs::write(format!("pages/{name}.html"), html.into_string()).unwrap();
    }

    if let Some(error) = explorer.leaderboards().state().error() {
        println!("leaderboards failed: {error}");
    }
    println!("Wrote {} pages to pages/", visits.len());
}
