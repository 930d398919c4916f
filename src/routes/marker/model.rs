use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const ADD_SUCCESS_MESSAGE: &str = "마커가 성공적으로 저장되었습니다.";
pub const ADD_FAILURE_MESSAGE: &str = "마커 저장에 실패했습니다.";
pub const ADD_ERROR_MESSAGE_PREFIX: &str = "마커 저장 중 오류가 발생했습니다: ";

/// 经纬度坐标，不做范围校验
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// `map_markers` 表中的一行
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Marker {
    pub id: Option<i64>,
    pub title: String,
    pub latitude: f64,
    pub longitude: f64,
    pub address: Option<String>,
    pub road_address: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Marker {
    pub fn latlng(&self) -> LatLng {
        LatLng {
            lat: self.latitude,
            lng: self.longitude,
        }
    }
}

// 列表接口只返回标题和坐标
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerSummary {
    pub title: String,
    pub latlng: LatLng,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddMarkerRequest {
    pub title: String,
    pub latlng: LatLng,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub road_address: Option<String>,
}

impl From<AddMarkerRequest> for Marker {
    fn from(req: AddMarkerRequest) -> Self {
        Self {
            id: None,
            title: req.title,
            latitude: req.latlng.lat,
            longitude: req.latlng.lng,
            address: req.address,
            road_address: req.road_address,
            created_at: None,
            updated_at: None,
        }
    }
}

/// 保存结果只通过 `success` 表示，HTTP 状态码始终为 200
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddMarkerResponse {
    pub success: bool,
    pub message: String,
    pub id: Option<i64>,
}

impl AddMarkerResponse {
    pub fn saved(id: Option<i64>) -> Self {
        Self {
            success: true,
            message: ADD_SUCCESS_MESSAGE.into(),
            id,
        }
    }

    pub fn not_saved() -> Self {
        Self {
            success: false,
            message: ADD_FAILURE_MESSAGE.into(),
            id: None,
        }
    }

    pub fn failed(err: impl std::fmt::Display) -> Self {
        Self {
            success: false,
            message: format!("{}{}", ADD_ERROR_MESSAGE_PREFIX, err),
            id: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerDetail {
    pub id: Option<i64>,
    pub title: String,
    pub latlng: LatLng,
    pub address: Option<String>,
    pub road_address: Option<String>,
}

impl From<Marker> for MarkerDetail {
    fn from(marker: Marker) -> Self {
        Self {
            latlng: marker.latlng(),
            id: marker.id,
            title: marker.title,
            address: marker.address,
            road_address: marker.road_address,
        }
    }
}
