//! Query schools for a province with credentials from the environment.
//!
//! ```shell
//! export SEEWO_APP_ID=your-app-id
//! export SEEWO_SECRET=your-secret
//! cargo run --example schools
//! ```

use seewo::{Client, Config, MisRemote};
use seewo_core::{Context, OsEnv};
use seewo_http_send_reqwest::ReqwestHttpSend;

#[tokio::main]
async fn main() -> seewo_core::Result<()> {
    env_logger::init();

    let ctx = Context::new()
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv);

    let config = Config::default().from_env(&ctx);
    let client = Client::from_config(ctx, config)?;

    let mis = MisRemote::new(client);
    let resp = mis.schools_by_province("440000").await?;

    println!("status: {}", resp.status());
    println!("body: {}", String::from_utf8_lossy(resp.body()));

    Ok(())
}
