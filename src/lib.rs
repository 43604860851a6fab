mod cli;
pub mod db;
pub mod model;
pub mod services;
pub mod utils;

use dotenv::dotenv;
use db::store::FileStore;
use utils::config::{Configuration, self};
use utils::context::ServiceContext;
use utils::errors::LockboxError;
use tracing_subscriber::{prelude::__tracing_subscriber_SubscriberExt, Registry, util::SubscriberInitExt};

const APP_NAME: &str = "Lockbox";

///
/// Entry point to start the app.
///
pub fn lib_main() -> Result<(), LockboxError> {

    // Load any local dev settings as environment variables from a .env file.
    dotenv().ok();

    // Default log level to INFO if it's not specified.
    config::default_env("RUST_LOG", "INFO");

    init_tracing();

    // Load the service configuration into struct.
    let config = Configuration::from_env()?;

    tracing::info!("{}\n{}", BANNER, config.fmt_console()?);

    // The credential store is read once at start-up and written back after
    // every mutating operation.
    let store = FileStore::new(&config.users_file);

    let ctx = ServiceContext::new(config, Box::new(store))?;

    tracing::info!("{} ready", APP_NAME);

    cli::run(&ctx)
}

///
/// Initialise tracing to the console, filtered by RUST_LOG.
///
fn init_tracing() {
    if let Err(err) = Registry::default()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_test_writer().with_ansi(true))
        .try_init() {
            tracing::info!("Tracing already initialised: {}", err.to_string()); // Allowed error here - tests call this fn repeatedly.
    }
}

const BANNER: &str = r#"
.____                  __   ___.
|    |    ____   ____ |  | _\_ |__   _______  ___
|    |   /  _ \_/ ___\|  |/ /| __ \ /  _ \  \/  /
|    |__(  <_> )  \___|    < | \_\ (  <_> >    <
|_______ \____/ \___  >__|_ \|___  /\____/__/\_ \
        \/          \/     \/    \/            \/
"#;
