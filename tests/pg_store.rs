use map_backend::routes::marker::{
    MarkerStore, PgMarkerStore,
    model::{LatLng, Marker},
};
use sqlx::postgres::PgPoolOptions;

// 需要可用的 Postgres：DATABASE_URL=postgres://... cargo test -- --ignored
async fn fresh_store() -> Option<PgMarkerStore> {
    let Ok(url) = std::env::var("DATABASE_URL") else {
        eprintln!("DATABASE_URL not set, skipping");
        return None;
    };
    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&url)
        .await
        .unwrap();

    sqlx::raw_sql(include_str!("../sql/map_markers.sql"))
        .execute(&pool)
        .await
        .unwrap();
    sqlx::query("TRUNCATE map_markers RESTART IDENTITY")
        .execute(&pool)
        .await
        .unwrap();

    Some(PgMarkerStore::new(pool))
}

fn marker(title: &str, lat: f64, lng: f64, road_address: Option<&str>) -> Marker {
    Marker {
        id: None,
        title: title.into(),
        latitude: lat,
        longitude: lng,
        address: Some("Seoul".into()),
        road_address: road_address.map(String::from),
        created_at: None,
        updated_at: None,
    }
}

// 三个阶段共用一张表，放在同一个测试里顺序执行
#[tokio::test]
#[ignore] // 需要 Postgres
async fn pg_store_round_trip() {
    let Some(store) = fresh_store().await else {
        return;
    };

    assert!(store.list_summaries().await.unwrap().is_empty());

    let mut cafe = marker("Cafe", 37.5, 127.0, Some("Teheran-ro"));
    let mut park = marker("Park", 35.1, 129.0, None);
    assert_eq!(store.insert(&mut cafe).await.unwrap(), 1);
    assert_eq!(store.insert(&mut park).await.unwrap(), 1);

    let (cafe_id, park_id) = (cafe.id.unwrap(), park.id.unwrap());
    assert!(cafe_id < park_id);
    assert!(cafe.created_at.is_some() && cafe.updated_at.is_some());
    assert!(park.created_at.is_some() && park.updated_at.is_some());

    let summaries = store.list_summaries().await.unwrap();
    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].title, "Cafe");
    assert_eq!(summaries[0].latlng, LatLng { lat: 37.5, lng: 127.0 });
    assert_eq!(summaries[1].title, "Park");
    assert_eq!(summaries[1].latlng, LatLng { lat: 35.1, lng: 129.0 });

    let found = store.find_by_id(cafe_id).await.unwrap().unwrap();
    assert_eq!(found.id, Some(cafe_id));
    assert_eq!(found.title, "Cafe");
    assert_eq!(found.address.as_deref(), Some("Seoul"));
    assert_eq!(found.road_address.as_deref(), Some("Teheran-ro"));
    assert_eq!(found.created_at, cafe.created_at);

    let found = store.find_by_id(park_id).await.unwrap().unwrap();
    assert_eq!(found.road_address, None);

    assert!(store.find_by_id(park_id + 100).await.unwrap().is_none());
}
