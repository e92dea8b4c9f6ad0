use std::process::{Child, Command, Stdio};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::OnceLock;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use reqwest::StatusCode;

/// Request/response header carrying the session token.
pub const SESSION_TOKEN_HEADER: &str = "x-auth";

static SERVER: OnceLock<Option<TestServer>> = OnceLock::new();

pub struct TestServer {
    pub base_url: String,
    #[allow(dead_code)]
    child: Child,
}

impl TestServer {
    fn spawn() -> Result<Self> {
        // Pick an unused port for isolation
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        // Spawn the already-built binary to keep start fast during tests;
        // inherit the environment so the server sees DATABASE_URL
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_todo-api-rust"));
        cmd.env("TODO_API_PORT", port.to_string())
            .env("TODO_TOKEN_SECRET", "integration-test-secret")
            .env("SECURITY_BCRYPT_COST", "4")
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        let child = cmd.spawn().context("failed to spawn server binary")?;

        Ok(Self { base_url, child })
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let client = reqwest::Client::new();
        let deadline = Instant::now() + timeout;
        loop {
            if Instant::now() > deadline {
                break;
            }
            let url = format!("{}/health", self.base_url);
            if let Ok(resp) = client.get(&url).send().await {
                if resp.status() == StatusCode::OK {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(150)).await;
        }
        anyhow::bail!(
            "server did not become ready on {} within {:?}",
            self.base_url,
            timeout
        )
    }
}

/// The shared test server, or `None` when DATABASE_URL is not configured —
/// integration tests skip themselves in that case.
pub async fn server() -> Result<Option<&'static TestServer>> {
    let server = SERVER.get_or_init(|| {
        if std::env::var("DATABASE_URL").is_err() {
            eprintln!("skipping integration tests: DATABASE_URL is not set");
            return None;
        }
        Some(TestServer::spawn().expect("failed to spawn server binary"))
    });

    match server {
        Some(s) => {
            s.wait_ready(Duration::from_secs(10)).await?;
            Ok(Some(s))
        }
        None => Ok(None),
    }
}

/// Fresh email per call so test runs never collide on the unique constraint.
pub fn unique_email(tag: &str) -> String {
    static COUNTER: AtomicU32 = AtomicU32::new(0);
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .subsec_nanos();
    format!("{}-{}-{}-{}@example.com", tag, std::process::id(), nanos, n)
}

/// Register a user and return (email, session token).
pub async fn register_user(base_url: &str, tag: &str) -> Result<(String, String)> {
    let email = unique_email(tag);
    let res = reqwest::Client::new()
        .post(format!("{}/users", base_url))
        .json(&serde_json::json!({ "email": email, "password": "pass123" }))
        .send()
        .await?;

    anyhow::ensure!(
        res.status() == StatusCode::CREATED,
        "registration failed with {}",
        res.status()
    );

    let token = res
        .headers()
        .get(SESSION_TOKEN_HEADER)
        .context("registration response missing session token header")?
        .to_str()?
        .to_string();

    Ok((email, token))
}
