use gloo::net::http::Request;
use shared::{
    bookings_url, AppConfig, BookingLoadError, BookingsResponse, Catalog, CatalogFile,
    CatalogLoadError, ViewMonth,
};

use crate::services::date_utils::now_millis;

/// Client for the static catalog and the spreadsheet booking endpoint
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    booking_endpoint: String,
    catalog_path: String,
}

impl ApiClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            booking_endpoint: config.booking_endpoint.clone(),
            catalog_path: config.catalog_path.clone(),
        }
    }

    /// Fetch and process the unit catalog
    pub async fn get_catalog(&self) -> Result<Catalog, CatalogLoadError> {
        let response = Request::get(&self.catalog_path)
            .send()
            .await
            .map_err(|e| CatalogLoadError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(CatalogLoadError::HttpStatus(response.status()));
        }

        let file = response
            .json::<CatalogFile>()
            .await
            .map_err(|e| CatalogLoadError::Parse(e.to_string()))?;
        Ok(Catalog::from_file(file))
    }

    /// Fetch one month of bookings. The `success` flag is checked by the store.
    pub async fn get_bookings(&self, view: ViewMonth) -> Result<BookingsResponse, BookingLoadError> {
        let url = bookings_url(&self.booking_endpoint, view, now_millis());

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| BookingLoadError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(BookingLoadError::HttpStatus(response.status()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| BookingLoadError::Network(e.to_string()))?;
        BookingsResponse::from_json(&body)
    }
}
