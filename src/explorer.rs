use std::io::{BufRead, Write};

use anyhow::{Context, Result, bail};
use reqwest::Client;
use tracing::info;
use url::Url;

use crate::api::{self, ApiClient, ApiError};
use crate::api::types::scalar_to_string;
use crate::constants::DELIMITER_WIDTH;

/// Exchange credentials for a bearer token and build the API client.
///
/// A rejected exchange prints the raw response body and fails; the caller is
/// expected to terminate the process. There is no retry.
pub async fn authenticate<W: Write>(
    http: Client,
    base: Url,
    client_id: &str,
    client_secret: &str,
    out: &mut W,
) -> Result<ApiClient> {
    match api::auth::request_token(&http, &base, client_id, client_secret).await {
        Ok(token) => Ok(ApiClient::new(http, base, token)),
        Err(ApiError::Status { body, .. }) => {
            writeln!(out, "{body}")?;
            bail!("Cannot get token with given client id and secret. Aborting......")
        }
        Err(e) => Err(e).context("Token request failed"),
    }
}

/// Menu-driven read-eval loop over the AKM API.
///
/// Input and output are injected so a test harness can script a session; the
/// binary wires up locked stdin/stdout. Strictly sequential: every prompt and
/// every request blocks until resolved.
pub struct Explorer<R, W> {
    input: R,
    out: W,
    api: ApiClient,
}

impl<R: BufRead, W: Write> Explorer<R, W> {
    pub fn new(input: R, out: W, api: ApiClient) -> Self {
        Self { input, out, api }
    }

    /// Run the menu loop until a terminal transition.
    ///
    /// Returns `Ok(())` on the exit option, end-of-input, or an empty
    /// selection. An unrecognized selection is fatal and returns an error,
    /// unlike handler-level request failures which keep the loop alive.
    pub async fn run(&mut self) -> Result<()> {
        let mut selection = self.instruction()?;
        loop {
            let Some(choice) = selection else {
                return Ok(());
            };
            if choice.is_empty() {
                return Ok(());
            }

            match choice.as_str() {
                "1" => self.search_companies().await?,
                "2" => self.list_metrics().await?,
                "3" => self.list_entities().await?,
                "4" => self.list_queries().await?,
                "5" => self.show_time_series().await?,
                "6" => self.search_forecasts().await?,
                "7" => self.show_forecast().await?,
                "8" => self.show_forecast_history().await?,
                "9" => self.show_forecast_snapshot().await?,
                "10" => {
                    writeln!(self.out, "Goodbye!")?;
                    return Ok(());
                }
                other => {
                    writeln!(self.out, "Function not implemented")?;
                    bail!("unrecognized menu selection: {other}");
                }
            }

            writeln!(self.out, "Do you want to do anything else?\n")?;
            selection = self.instruction()?;
        }
    }

    /// Print the menu and read one selection. `None` means end-of-input.
    fn instruction(&mut self) -> Result<Option<String>> {
        writeln!(self.out, "Select function:")?;
        writeln!(self.out, "Search for company by company name -- 1")?;
        writeln!(self.out, "Search for metrics by company id -- 2")?;
        writeln!(self.out, "Search for entities by company id & metric id -- 3")?;
        writeln!(
            self.out,
            "Search for queries by company id, metric id, and entity id -- 4"
        )?;
        writeln!(
            self.out,
            "Search for time series data by metric id, entity id, metric periodicity, and country name (optional) -- 5"
        )?;
        writeln!(self.out, "Search for forecasts by company name -- 6")?;
        writeln!(
            self.out,
            "Search for forecast by company id, metric id, and entity id -- 7"
        )?;
        writeln!(
            self.out,
            "Search for forecast history by company id, metric id, and entity id -- 8"
        )?;
        writeln!(
            self.out,
            "Search for forecast snapshot by company id, metric id, and entity id -- 9"
        )?;
        writeln!(self.out, "Exit -- 10")?;
        write!(self.out, "Type in number: ")?;
        self.out.flush()?;
        self.read_line()
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let bytes = self
            .input
            .read_line(&mut line)
            .context("Failed to read input")?;
        if bytes == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn prompt(&mut self, message: &str) -> Result<String> {
        write!(self.out, "{message}")?;
        self.out.flush()?;
        Ok(self.read_line()?.unwrap_or_default())
    }

    fn delimiter(&mut self) -> Result<()> {
        writeln!(self.out, "{}", "-".repeat(DELIMITER_WIDTH))?;
        Ok(())
    }

    /// A non-success status prints the raw body and keeps the loop alive;
    /// anything else (transport failure) is fatal.
    fn print_failure(&mut self, err: ApiError) -> Result<()> {
        match err {
            ApiError::Status { body, .. } => {
                writeln!(self.out, "{body}")?;
                Ok(())
            }
            other => Err(other).context("Request failed"),
        }
    }

    async fn search_companies(&mut self) -> Result<()> {
        let company_name =
            self.prompt("Please choose company name of the company you want to search: ")?;
        writeln!(
            self.out,
            "Using company name: {company_name} to retrieve company id"
        )?;
        info!("Searching companies matching '{}'", company_name);

        match self.api.search_companies(&company_name).await {
            Ok(found) => {
                self.delimiter()?;
                for company in found.results {
                    writeln!(
                        self.out,
                        "{} [{}]",
                        company.company_name,
                        scalar_to_string(&company.company_id)
                    )?;
                }
                self.delimiter()?;
            }
            Err(e) => self.print_failure(e)?,
        }
        Ok(())
    }

    async fn list_metrics(&mut self) -> Result<()> {
        let company_id =
            self.prompt("Please choose company id of the company you want to search: ")?;
        writeln!(
            self.out,
            "Using company id: {company_id} to retrieve metric id"
        )?;

        match self.api.company_metrics(&company_id).await {
            Ok(found) => {
                self.delimiter()?;
                for metric in found.results {
                    writeln!(
                        self.out,
                        "{} [{}] -- {}",
                        metric.metric_name,
                        scalar_to_string(&metric.metric_id),
                        metric.metric_description
                    )?;
                }
                self.delimiter()?;
            }
            Err(e) => self.print_failure(e)?,
        }
        Ok(())
    }

    async fn list_entities(&mut self) -> Result<()> {
        let company_id =
            self.prompt("Please choose company id of the company you want to search: ")?;
        let metric_id =
            self.prompt("Please choose metric id of the metric you want to search: ")?;
        writeln!(
            self.out,
            "Using company id: {company_id} & metric id: {metric_id} to retrieve entity id"
        )?;

        match self.api.metric_entities(&company_id, &metric_id).await {
            Ok(found) => {
                self.delimiter()?;
                for entity in found.results {
                    writeln!(
                        self.out,
                        "{} [{}]",
                        entity.entity_name,
                        scalar_to_string(&entity.entity_id)
                    )?;
                }
                self.delimiter()?;
            }
            Err(e) => self.print_failure(e)?,
        }
        Ok(())
    }

    async fn list_queries(&mut self) -> Result<()> {
        let (company_id, metric_id, entity_id) = self.prompt_id_triple()?;
        writeln!(
            self.out,
            "Using company id: {company_id}, metric id: {metric_id}, & entity id: {entity_id} to retrieve queries"
        )?;

        match self
            .api
            .entity_queries(&company_id, &metric_id, &entity_id)
            .await
        {
            Ok(found) => {
                self.delimiter()?;
                for query in found.queries {
                    writeln!(self.out, "{}", serde_json::to_string_pretty(&query)?)?;
                }
                self.delimiter()?;
            }
            Err(e) => self.print_failure(e)?,
        }
        Ok(())
    }

    async fn show_time_series(&mut self) -> Result<()> {
        let metric_id =
            self.prompt("Please choose metric id of the metric you want to search: ")?;
        let entity_id =
            self.prompt("Please choose entity id of the entity you want to search: ")?;
        let metric_periodicity =
            title_case(&self.prompt("Please choose metric periodicity you want to search: ")?);
        let country_name =
            self.prompt("Please choose country you want to search (can leave empty if none): ")?;

        match country_name.is_empty() {
            true => writeln!(
                self.out,
                "Using metric id: {metric_id}, & entity id: {entity_id}"
            )?,
            false => writeln!(
                self.out,
                "Using metric id: {metric_id}, & entity id: {entity_id} and country name: {country_name}"
            )?,
        }

        let country = (!country_name.is_empty()).then_some(country_name.as_str());
        match self
            .api
            .time_series(&metric_id, &entity_id, &metric_periodicity, country)
            .await
        {
            Ok(found) => {
                self.delimiter()?;
                for point in found.data {
                    writeln!(self.out, "{}", serde_json::to_string_pretty(&point)?)?;
                }
                self.delimiter()?;
            }
            Err(e) => self.print_failure(e)?,
        }
        Ok(())
    }

    async fn search_forecasts(&mut self) -> Result<()> {
        let company_name =
            self.prompt("Please choose company name of the company you want to search: ")?;
        writeln!(
            self.out,
            "Using company name: {company_name} to get forecasts"
        )?;

        match self.api.search_forecasts(&company_name).await {
            Ok(found) => {
                self.delimiter()?;
                for result in found.results {
                    writeln!(self.out, "{}", serde_json::to_string_pretty(&result)?)?;
                }
                self.delimiter()?;
            }
            Err(e) => self.print_failure(e)?,
        }
        Ok(())
    }

    async fn show_forecast(&mut self) -> Result<()> {
        let (company_id, metric_id, entity_id) = self.prompt_id_triple()?;
        writeln!(
            self.out,
            "Using company id: {company_id}, metric id: {metric_id}, & entity id: {entity_id} to retrieve forecast"
        )?;

        match self.api.forecast(&company_id, &metric_id, &entity_id).await {
            Ok(found) => {
                self.delimiter()?;
                writeln!(
                    self.out,
                    "forecast_metric_name: {}",
                    found.forecast_metric_name
                )?;
                for point in found.data {
                    writeln!(self.out, "{}", serde_json::to_string_pretty(&point)?)?;
                }
                self.delimiter()?;
            }
            Err(e) => self.print_failure(e)?,
        }
        Ok(())
    }

    async fn show_forecast_history(&mut self) -> Result<()> {
        let (company_id, metric_id, entity_id) = self.prompt_id_triple()?;
        writeln!(
            self.out,
            "Using company id: {company_id}, metric id: {metric_id}, & entity id: {entity_id} to retrieve forecast"
        )?;

        match self
            .api
            .forecast_history(&company_id, &metric_id, &entity_id)
            .await
        {
            Ok(found) => {
                self.delimiter()?;
                writeln!(self.out, "description: {}", found.description)?;
                for point in found.data {
                    writeln!(self.out, "{}", serde_json::to_string_pretty(&point)?)?;
                }
                self.delimiter()?;
            }
            Err(e) => self.print_failure(e)?,
        }
        Ok(())
    }

    async fn show_forecast_snapshot(&mut self) -> Result<()> {
        let (company_id, metric_id, entity_id) = self.prompt_id_triple()?;
        let data_through = self.prompt(
            "Filter by data_through, give all data which data_through greater than giving date. (Format: YYYY-MM-DD  Default: None) ",
        )?;
        writeln!(
            self.out,
            "Using company id: {company_id}, metric id: {metric_id}, & entity id: {entity_id} to retrieve forecast"
        )?;

        let data_through = (!data_through.is_empty()).then_some(data_through.as_str());
        match self
            .api
            .forecast_snapshot(&company_id, &metric_id, &entity_id, data_through)
            .await
        {
            Ok(snapshot) => {
                self.delimiter()?;
                writeln!(self.out, "{}", serde_json::to_string_pretty(&snapshot)?)?;
                self.delimiter()?;
            }
            Err(e) => self.print_failure(e)?,
        }
        Ok(())
    }

    fn prompt_id_triple(&mut self) -> Result<(String, String, String)> {
        let company_id =
            self.prompt("Please choose company id of the company you want to search: ")?;
        let metric_id =
            self.prompt("Please choose metric id of the metric you want to search: ")?;
        let entity_id =
            self.prompt("Please choose entity id of the entity you want to search: ")?;
        Ok((company_id, metric_id, entity_id))
    }
}

/// Capitalize the first letter of each word, matching how the original
/// service expects periodicity values ("Monthly", "Quarterly").
fn title_case(value: &str) -> String {
    value
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
