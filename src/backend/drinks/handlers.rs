/**
 * Drinks Handlers
 *
 * - `GET /drinks?Alcoholic=<bool>` - CSV download (`drinks.csv`)
 * - `GET /drinks_json?Alcoholic=<bool>` - JSON mapping `name -> {name, id}`
 *
 * `Alcoholic` accepts `true/false`, `1/0`, `yes/no`, `on/off`, `t/f`,
 * `y/n`, case-insensitive.
 */

use aide::generate::GenContext;
use aide::openapi::{MediaType, Operation, Response as ApiResponse};
use aide::OperationOutput;
use axum::{
    extract::State,
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    response::{IntoResponse, Response},
    Json,
};
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer};

use crate::backend::drinks::client::DrinksClient;
use crate::backend::drinks::export::{drinks_to_csv, CSV_FILE_NAME};
use crate::backend::error::BackendError;
use crate::backend::extract::Query;
use crate::shared::DrinkMap;

/// Query string for both drinks endpoints
#[derive(Debug, Deserialize, JsonSchema)]
pub struct DrinksQuery {
    #[serde(rename = "Alcoholic", deserialize_with = "lenient_bool")]
    #[schemars(with = "String")]
    pub alcoholic: bool,
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_bool(&raw).ok_or_else(|| {
        serde::de::Error::custom(format!("'{}' is not a valid boolean", raw))
    })
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" | "t" | "y" => Some(true),
        "false" | "0" | "no" | "off" | "f" | "n" => Some(false),
        _ => None,
    }
}

const CSV_CONTENT_TYPE: &str = "text/csv; charset=utf-8";

/// CSV bytes sent as a `drinks.csv` attachment
pub struct CsvDownload(pub Vec<u8>);

impl IntoResponse for CsvDownload {
    fn into_response(self) -> Response {
        (
            [
                (CONTENT_TYPE, CSV_CONTENT_TYPE.to_string()),
                (
                    CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", CSV_FILE_NAME),
                ),
            ],
            self.0,
        )
            .into_response()
    }
}

impl OperationOutput for CsvDownload {
    type Inner = Vec<u8>;

    fn operation_response(_ctx: &mut GenContext, _operation: &mut Operation) -> Option<ApiResponse> {
        Some(ApiResponse {
            description: format!("`{}` attachment with `name` and `id` columns", CSV_FILE_NAME),
            content: [("text/csv".to_string(), MediaType::default())].into(),
            ..Default::default()
        })
    }

    fn inferred_responses(
        ctx: &mut GenContext,
        operation: &mut Operation,
    ) -> Vec<(Option<u16>, ApiResponse)> {
        Self::operation_response(ctx, operation)
            .map(|res| vec![(Some(200), res)])
            .unwrap_or_default()
    }
}

/// Drinks as a downloadable CSV file
pub async fn get_drinks_csv(
    State(client): State<DrinksClient>,
    Query(query): Query<DrinksQuery>,
) -> Result<CsvDownload, BackendError> {
    let drinks = client.fetch_drinks(query.alcoholic).await?;
    Ok(CsvDownload(drinks_to_csv(&drinks)?))
}

/// Drinks as a JSON mapping keyed by name
pub async fn get_drinks_json(
    State(client): State<DrinksClient>,
    Query(query): Query<DrinksQuery>,
) -> Result<Json<DrinkMap>, BackendError> {
    let drinks = client.fetch_drinks(query.alcoholic).await?;
    Ok(Json(drinks))
}
