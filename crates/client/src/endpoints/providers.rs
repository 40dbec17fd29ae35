use gobarber_core::{
    errors::{BookError, BookResult},
    models::provider::{AvailabilitySlot, DayAvailabilityQuery, Provider},
};

use crate::HttpApi;

pub async fn list_providers(api: &HttpApi) -> BookResult<Vec<Provider>> {
    api.send(api.get("providers")).await
}

pub async fn day_availability(
    api: &HttpApi,
    provider_id: &str,
    query: DayAvailabilityQuery,
) -> BookResult<Vec<AvailabilitySlot>> {
    let url = api
        .config()
        .resource_url(&["providers", provider_id, "day-availability"])
        .map_err(BookError::Transport)?;

    api.send(api.get_url(url).query(&query)).await
}
