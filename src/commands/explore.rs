use std::io;

use anyhow::{Context, Result};
use clap::Args;
use dialoguer::{Input, theme::ColorfulTheme};
use reqwest::Client;
use tracing::info;
use url::Url;

use crate::{
    config::{self, Config},
    constants::{self, AKM_KEY_PORTAL_URL, DEFAULT_API_BASE_URL},
    explorer::{self, Explorer},
};

#[derive(Debug, Clone, Args)]
pub struct ExploreCommand {
    #[arg(
        long,
        value_parser = Url::parse,
        default_value = DEFAULT_API_BASE_URL,
        help = "AKM API base URL"
    )]
    pub base_url: Url,
}

impl Default for ExploreCommand {
    fn default() -> Self {
        Self {
            base_url: constants::default_api_base_url(),
        }
    }
}

impl ExploreCommand {
    pub async fn execute(self) -> Result<()> {
        info!("Starting interactive session against {}", self.base_url);

        let credentials = match config::load().await.ok().filter(|c| c.is_complete()) {
            Some(config) => config,
            None => prompt_credentials()?,
        };

        let http = Client::new();
        let stdout = io::stdout();
        let mut out = stdout.lock();

        let api = explorer::authenticate(
            http,
            self.base_url,
            &credentials.client_id,
            &credentials.client_secret,
            &mut out,
        )
        .await?;

        let stdin = io::stdin();
        Explorer::new(stdin.lock(), out, api).run().await
    }
}

fn prompt_credentials() -> Result<Config> {
    println!("You do not have your client id and secret configured.");
    println!("You can enter the id and secret acquired from {AKM_KEY_PORTAL_URL}");
    println!("with `akm configure` if you want to avoid being asked for them every time.");

    let theme = ColorfulTheme::default();

    let client_id = Input::<String>::with_theme(&theme)
        .with_prompt("please enter your client id")
        .interact_text()
        .context("Failed to read client id")?;

    let client_secret = Input::<String>::with_theme(&theme)
        .with_prompt("please enter your client secret")
        .interact_text()
        .context("Failed to read client secret")?;

    Ok(Config {
        client_id,
        client_secret,
    })
}
