//  src/db/connector.rs

use std::time::Duration;

use mongodb::{bson::doc, options::ClientOptions, Client};
use tokio::time::timeout;

use crate::{config::settings::Settings, utils::errors::DbError};

// Lets the driver's own server-selection error surface before the outer bound fires.
const DRIVER_GRACE: Duration = Duration::from_millis(250);

/// Opens a fresh client against `settings.mongodb_endpoint` and pings it.
///
/// The caller owns the returned client and must `shutdown()` it once done.
pub async fn connect(settings: &Settings) -> Result<Client, DbError> {
    let mut options = ClientOptions::parse(&settings.mongodb_endpoint)
        .await
        .map_err(DbError::Connect)?;
    options.direct_connection = Some(true);
    options.connect_timeout = Some(settings.db_timeout);
    options.server_selection_timeout = Some(settings.db_timeout);

    let client = Client::with_options(options).map_err(DbError::Connect)?;

    let ping = {
        let admin = client.database("admin");
        timeout(settings.db_timeout + DRIVER_GRACE, async move {
            admin.run_command(doc! { "ping": 1 }).await
        })
        .await
    };

    match ping {
        Ok(Ok(_)) => Ok(client),
        Ok(Err(e)) => {
            client.shutdown().await;
            Err(DbError::Ping(e))
        }
        Err(_) => {
            client.shutdown().await;
            Err(DbError::Timeout { op: "ping" })
        }
    }
}
