/**
 * Cocktail API Client
 *
 * Thin wrapper around `reqwest::Client` for the public cocktail API's
 * `filter.php` endpoint. The response is reshaped into a `DrinkMap`
 * keyed by drink name.
 *
 * # Upstream Format
 *
 * ```json
 * {"drinks": [{"strDrink": "Mojito", "strDrinkThumb": "...", "idDrink": "11000"}]}
 * ```
 *
 * `"drinks": null` (or a missing key) is treated as no drinks. There is no
 * retry; the client has a request timeout.
 */

use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

use crate::shared::{Drink, DrinkMap};

/// Failures talking to the cocktail API
#[derive(Debug, Error)]
pub enum DrinksError {
    /// Network failure, timeout, or undecodable body
    #[error("Cocktail API request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Non-2xx answer
    #[error("Cocktail API returned status {0}")]
    Status(reqwest::StatusCode),
}

#[derive(Debug, Deserialize)]
struct FilterResponse {
    #[serde(default)]
    drinks: Option<Vec<UpstreamDrink>>,
}

#[derive(Debug, Deserialize)]
struct UpstreamDrink {
    #[serde(rename = "strDrink")]
    name: String,
    #[serde(rename = "idDrink")]
    id: String,
}

impl FilterResponse {
    /// Later entries with the same name overwrite earlier ones.
    fn into_drink_map(self) -> DrinkMap {
        self.drinks
            .unwrap_or_default()
            .into_iter()
            .map(|drink| {
                (
                    drink.name.clone(),
                    Drink {
                        name: drink.name,
                        id: drink.id,
                    },
                )
            })
            .collect()
    }
}

/// Upstream filter value for the alcoholic flag
pub fn alcoholic_filter(alcoholic: bool) -> &'static str {
    if alcoholic {
        "Alcoholic"
    } else {
        "Non_Alcoholic"
    }
}

/// Client for the cocktail API
#[derive(Clone, Debug)]
pub struct DrinksClient {
    http: reqwest::Client,
    base_url: Arc<str>,
}

impl DrinksClient {
    /// Build a client for `base_url` (e.g. `https://www.thecocktaildb.com/api/json/v1/1`)
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        let base_url: String = base_url.into();

        Ok(Self {
            http,
            base_url: Arc::from(base_url.trim_end_matches('/')),
        })
    }

    /// Fetch drinks filtered by the alcoholic flag, keyed by name
    pub async fn fetch_drinks(&self, alcoholic: bool) -> Result<DrinkMap, DrinksError> {
        let url = format!("{}/filter.php", self.base_url);
        let filter = alcoholic_filter(alcoholic);

        tracing::debug!("Fetching drinks from {} (a={})", url, filter);
        let response = self.http.get(&url).query(&[("a", filter)]).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Cocktail API answered {} for a={}", status, filter);
            return Err(DrinksError::Status(status));
        }

        let payload: FilterResponse = response.json().await?;
        let drinks = payload.into_drink_map();
        tracing::debug!("Fetched {} drinks (a={})", drinks.len(), filter);
        Ok(drinks)
    }
}
