//! Fetch a URL with retries from the command line.
//!
//! ```sh
//! cargo run --example basic -- https://example.com
//! ```

use std::time::Duration;
use steadfast::http::HttpTransport;
use steadfast::{Executor, Outcome, Request, RetryPolicy};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "https://example.com".to_string());

    let executor = Executor::new(HttpTransport::new()?);
    let policy = RetryPolicy::builder()
        .max_attempts(3)
        .base_delay(Duration::from_millis(500))
        .timeout(Duration::from_secs(10))
        .build();

    match executor.execute(&Request::new("GET", url), &policy).await? {
        Outcome::Success(response) => {
            println!("status: {}", response.status);
            println!("{}", response.text()?);
        }
        Outcome::Exhausted {
            last_error,
            attempts,
        } => {
            eprintln!("giving up after {} attempt(s): {}", attempts, last_error);
            std::process::exit(1);
        }
    }

    Ok(())
}
