use std::env;

use anyhow::Result;
use serde_json::Value;
use tosspayments::{Requester, TossPayments};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    // Reads TOSS_PAYMENTS_SECRET_KEY and the optional endpoint overrides.
    let toss = TossPayments::from_env()?;

    // Path relative to the endpoint, e.g. `/api/test`.
    let path = env::args().nth(1).unwrap_or_else(|| "/api/test".to_string());

    match toss
        .requester()
        .get_async::<Value>(&path)
        .await
    {
        Ok(resp) => println!("{resp:#}"),
        Err(err) if err.is_api_error() => {
            println!(
                "Toss Payments answered {:?}: {}",
                err.status_code(),
                err.response_body().unwrap_or_default()
            );
        }
        Err(err) => return Err(err.into()),
    }

    Ok(())
}
