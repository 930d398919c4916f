use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use super::model::{LatLng, Marker, MarkerSummary};

/// 对 `map_markers` 表的访问。错误原样返回，不重试。
#[async_trait]
pub trait MarkerStore: Send + Sync {
    async fn list_summaries(&self) -> Result<Vec<MarkerSummary>, sqlx::Error>;

    /// 返回写入的行数（0 或 1），成功时把生成的 id 和时间戳写回 `marker`
    async fn insert(&self, marker: &mut Marker) -> Result<u64, sqlx::Error>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Marker>, sqlx::Error>;
}

#[derive(Clone)]
pub struct PgMarkerStore {
    pool: PgPool,
}

impl PgMarkerStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// 定义原始数据结构，用于从数据库查询
#[derive(sqlx::FromRow)]
struct RawSummary {
    title: String,
    latitude: f64,
    longitude: f64,
}

#[async_trait]
impl MarkerStore for PgMarkerStore {
    async fn list_summaries(&self) -> Result<Vec<MarkerSummary>, sqlx::Error> {
        let rows = sqlx::query_as::<_, RawSummary>(
            r#"
            SELECT title, latitude, longitude
            FROM map_markers
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| MarkerSummary {
                title: row.title,
                latlng: LatLng {
                    lat: row.latitude,
                    lng: row.longitude,
                },
            })
            .collect())
    }

    async fn insert(&self, marker: &mut Marker) -> Result<u64, sqlx::Error> {
        let inserted = sqlx::query_as::<_, (i64, DateTime<Utc>, DateTime<Utc>)>(
            r#"
            INSERT INTO map_markers
                (title, latitude, longitude, address, road_address, created_at, updated_at)
            VALUES
                ($1, $2, $3, $4, $5, NOW(), NOW())
            RETURNING id, created_at, updated_at
            "#,
        )
        .bind(&marker.title)
        .bind(marker.latitude)
        .bind(marker.longitude)
        .bind(marker.address.as_deref())
        .bind(marker.road_address.as_deref())
        .fetch_optional(&self.pool)
        .await?;

        match inserted {
            Some((id, created_at, updated_at)) => {
                marker.id = Some(id);
                marker.created_at = Some(created_at);
                marker.updated_at = Some(updated_at);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Marker>, sqlx::Error> {
        sqlx::query_as::<_, Marker>(
            r#"
            SELECT id, title, latitude, longitude, address, road_address, created_at, updated_at
            FROM map_markers
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }
}
