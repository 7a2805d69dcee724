//! Item endpoints.

use crate::models::{Item, ItemCreateRequest, ItemFilter, ItemUpdateRequest, Page};

use super::{api_path, client, decode, require_meta, to_query_string, ApiError};

pub async fn list_items(filter: &ItemFilter) -> Result<Page<Item>, ApiError> {
    let query = to_query_string(filter)?;
    let url = format!("{}?{}", api_path("/item"), query);
    let response = client().get(&url).send().await?;
    let (data, meta) = decode::<Vec<Item>>(response).await?;
    Ok(Page {
        data,
        meta: require_meta(meta)?,
    })
}

pub async fn get_item(id: u64) -> Result<Item, ApiError> {
    let url = format!("{}/{}", api_path("/item"), id);
    let response = client().get(&url).send().await?;
    decode::<Item>(response).await.map(|(item, _)| item)
}

pub async fn create_item(body: &ItemCreateRequest) -> Result<Item, ApiError> {
    let response = client().post(api_path("/item")).json(body).send().await?;
    decode::<Item>(response).await.map(|(item, _)| item)
}

pub async fn update_item(id: u64, body: &ItemUpdateRequest) -> Result<Item, ApiError> {
    let url = format!("{}/{}", api_path("/item"), id);
    let response = client().patch(&url).json(body).send().await?;
    decode::<Item>(response).await.map(|(item, _)| item)
}
