//! Terminal entry point.

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};

use stockboard_dashboard::input::{HELP, Input};
use stockboard_dashboard::{Dashboard, DashboardConfig, DashboardSession, seed};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = DashboardConfig::from_env().context("invalid dashboard configuration")?;
    stockboard_observability::init_with(config.log_format);

    let source = config.seed_source();
    let outcome =
        seed::load(&source).with_context(|| format!("failed to load inventory from {source}"))?;
    if !outcome.rejected.is_empty() {
        tracing::warn!(
            rejected = outcome.rejected.len(),
            "some product records were skipped"
        );
    }

    let session = DashboardSession::start(Dashboard::new(outcome.view_model), &config);
    println!("{}", session.render().await);
    println!("{HELP}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("failed to read input")? {
        match Input::parse(&line) {
            Input::Quit => break,
            Input::Help => {
                println!("{HELP}");
                continue;
            }
            Input::Invalid(reason) => {
                println!("{reason}");
                continue;
            }
            Input::Show => {}
            Input::Search(query) => {
                session.search(query).await;
            }
            Input::Action(action) => {
                if let Err(err) = session.perform(action).await {
                    tracing::debug!(error = %err, "action failure shown as banner");
                }
            }
        }
        println!("{}", session.render().await);
    }

    session.shutdown().await;
    Ok(())
}
