//! TMS list client binary.

use serde_json::Value;
use tms_lists::{Config, Error, ItemId, ListClient, ListQuery, RequestDigest};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = "\
usage:
  tms-lists read   <list> <select> [expand] [filter]
  tms-lists create <list> <json>
  tms-lists update <list> <item-id> <json>
  tms-lists delete <list> <item-id>

<list> is gradesheets, personnel, courses, gradesheet-templates or a list GUID.
Mutations read the request digest from TMS_REQUEST_DIGEST.";

enum Command {
    Read {
        list: String,
        query: ListQuery,
    },
    Create {
        list: String,
        payload: Value,
    },
    Update {
        list: String,
        item: ItemId,
        payload: Value,
    },
    Delete {
        list: String,
        item: ItemId,
    },
}

impl Command {
    fn parse(args: &[String]) -> Result<Self, Error> {
        let arg = |i: usize, what: &str| {
            args.get(i)
                .cloned()
                .ok_or_else(|| Error::InvalidInput(format!("missing <{what}>")))
        };
        let item =
            |i: usize| -> Result<ItemId, Error> { Ok(arg(i, "item-id")?.parse::<ItemId>()?) };
        let json = |i: usize| -> Result<Value, Error> {
            serde_json::from_str(&arg(i, "json")?)
                .map_err(|e| Error::InvalidInput(format!("payload is not JSON: {e}")))
        };

        match args.first().map(String::as_str) {
            Some("read") => {
                let list = arg(1, "list")?;
                let mut query = ListQuery::new(arg(2, "select")?);
                if let Some(expand) = args.get(3) {
                    query = query.expand(expand.as_str());
                }
                if let Some(filter) = args.get(4) {
                    query = query.filter(filter.as_str());
                }
                Ok(Command::Read { list, query })
            }
            Some("create") => Ok(Command::Create {
                list: arg(1, "list")?,
                payload: json(2)?,
            }),
            Some("update") => Ok(Command::Update {
                list: arg(1, "list")?,
                item: item(2)?,
                payload: json(3)?,
            }),
            Some("delete") => Ok(Command::Delete {
                list: arg(1, "list")?,
                item: item(2)?,
            }),
            Some(other) => Err(Error::InvalidInput(format!("unknown command: {other}"))),
            None => Err(Error::InvalidInput("no command given".into())),
        }
    }
}

fn digest() -> Result<RequestDigest, Error> {
    std::env::var("TMS_REQUEST_DIGEST")
        .ok()
        .filter(|d| !d.is_empty())
        .map(RequestDigest::new)
        .ok_or_else(|| Error::Config("TMS_REQUEST_DIGEST is not set".into()))
}

async fn run(config: Config, command: Command) -> Result<Value, Error> {
    let client = ListClient::new(&config)?;
    match command {
        Command::Read { list, query } => {
            let list = config.lists.lookup(&list)?;
            let rows = client.read(&list, &query).fetch().await?;
            info!(%list, rows = rows.len(), "Read complete");
            Ok(Value::Array(rows))
        }
        Command::Create { list, payload } => {
            let list = config.lists.lookup(&list)?;
            client.create(&list, &payload, &digest()?).await
        }
        Command::Update {
            list,
            item,
            payload,
        } => {
            let list = config.lists.lookup(&list)?;
            client.update(&list, item, &payload, &digest()?).await?;
            Ok(serde_json::json!({ "updated": item.get() }))
        }
        Command::Delete { list, item } => {
            let list = config.lists.lookup(&list)?;
            client.delete(&list, item, &digest()?).await?;
            Ok(serde_json::json!({ "deleted": item.get() }))
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = match Command::parse(&args) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("{e}\n\n{USAGE}");
            std::process::exit(2);
        }
    };

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "FATAL: config error, fix TMS_* env vars or tms.toml");
            std::process::exit(1);
        }
    };

    let configured = config.lists.configured();
    if configured.is_empty() {
        warn!("No list GUIDs configured; only raw GUIDs will resolve");
    }
    info!(api = %config.api_url, lists = configured.len(), "Configuration loaded");

    match run(config, command).await {
        Ok(output) => match serde_json::to_string_pretty(&output) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                error!(error = %e, "Failed to render output");
                std::process::exit(1);
            }
        },
        Err(e) => {
            error!(error = %e, "Request failed");
            std::process::exit(1);
        }
    }
}
