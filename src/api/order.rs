//! Order endpoints.

use crate::models::{Order, OrderCreateRequest, OrderFilter, OrderUpdateRequest, Page};

use super::{api_path, client, decode, require_meta, to_query_string, ApiError};

pub async fn list_orders(filter: &OrderFilter) -> Result<Page<Order>, ApiError> {
    let query = to_query_string(filter)?;
    let url = format!("{}?{}", api_path("/order"), query);
    let response = client().get(&url).send().await?;
    let (data, meta) = decode::<Vec<Order>>(response).await?;
    Ok(Page {
        data,
        meta: require_meta(meta)?,
    })
}

pub async fn get_order(id: u64) -> Result<Order, ApiError> {
    let url = format!("{}/{}", api_path("/order"), id);
    let response = client().get(&url).send().await?;
    decode::<Order>(response).await.map(|(order, _)| order)
}

pub async fn create_order(body: &OrderCreateRequest) -> Result<Order, ApiError> {
    let response = client().post(api_path("/order")).json(body).send().await?;
    decode::<Order>(response).await.map(|(order, _)| order)
}

pub async fn update_order(id: u64, body: &OrderUpdateRequest) -> Result<Order, ApiError> {
    let url = format!("{}/{}", api_path("/order"), id);
    let response = client().patch(&url).json(body).send().await?;
    decode::<Order>(response).await.map(|(order, _)| order)
}
