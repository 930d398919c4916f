use std::sync::Arc;

use super::model::{AddMarkerRequest, AddMarkerResponse, Marker, MarkerDetail, MarkerSummary};
use super::store::MarkerStore;

#[derive(Clone)]
pub struct MarkerService {
    store: Arc<dyn MarkerStore>,
}

impl MarkerService {
    pub fn new(store: Arc<dyn MarkerStore>) -> Self {
        Self { store }
    }

    pub async fn get_all_markers_simple(&self) -> Result<Vec<MarkerSummary>, sqlx::Error> {
        let markers = self.store.list_summaries().await?;
        tracing::debug!("Loaded {} markers", markers.len());
        Ok(markers)
    }

    /// 保存失败不会返回错误，而是转换成 `success = false` 的响应
    pub async fn add_marker(&self, req: AddMarkerRequest) -> AddMarkerResponse {
        let mut marker = Marker::from(req);

        match self.store.insert(&mut marker).await {
            Ok(rows) if rows > 0 => {
                tracing::info!("Marker saved: id={:?}, title={}", marker.id, marker.title);
                AddMarkerResponse::saved(marker.id)
            }
            Ok(_) => {
                tracing::warn!("Marker insert wrote no rows: title={}", marker.title);
                AddMarkerResponse::not_saved()
            }
            Err(err) => {
                tracing::error!("保存标记错误: {:?}", err);
                AddMarkerResponse::failed(err)
            }
        }
    }

    pub async fn get_marker(&self, id: i64) -> Result<Option<MarkerDetail>, sqlx::Error> {
        Ok(self.store.find_by_id(id).await?.map(MarkerDetail::from))
    }
}
