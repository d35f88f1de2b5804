#![allow(dead_code, clippy::similar_names)]
#![warn(clippy::shadow_reuse, clippy::shadow_same, clippy::builtin_type_shadow)]
mod config;
mod flight_control;
mod http_handler;
mod keychain;
mod logger;

use crate::config::SentinelConfig;
use crate::http_handler::{ServerError, bind, serve};
use crate::keychain::Keychain;

#[tokio::main(flavor = "multi_thread", worker_threads = 4)]
async fn main() {
    let config = SentinelConfig::from_env();
    let keychain = Keychain::new(&config);
    info!(
        "Vehicle initialized at {}, alert history holds {} entries",
        keychain.f_cont().read().await.status().position(),
        config.alert_history()
    );

    let shutdown = keychain.shutdown();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Could not listen for ctrl-c: {e}");
            return;
        }
        info!("Received ctrl-c, stopping");
        shutdown.cancel();
    });

    if let Err(e) = run(&config, keychain).await {
        fatal!("Server failed on {}: {e:?}", config.bind_addr());
    }
}

async fn run(config: &SentinelConfig, keychain: Keychain) -> Result<(), ServerError> {
    let listener = bind(config.bind_addr()).await?;
    serve(keychain, listener).await
}
