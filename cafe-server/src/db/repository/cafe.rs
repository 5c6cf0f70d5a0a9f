//! Cafe Repository
//!
//! Every write runs in its own transaction.

use super::{RepoError, RepoResult};
use shared::models::{Cafe, CafeCreate};
use sqlx::SqlitePool;

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Cafe>> {
    let cafes = sqlx::query_as::<_, Cafe>(
        "SELECT id, name, map_url, img_url, location, seats, has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price FROM cafe ORDER BY id",
    )
    .fetch_all(pool)
    .await?;
    Ok(cafes)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Cafe>> {
    let cafe = sqlx::query_as::<_, Cafe>(
        "SELECT id, name, map_url, img_url, location, seats, has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price FROM cafe WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(cafe)
}

pub async fn get_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Cafe> {
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Cafe {id} not found")))
}

/// Exact match on the stored location; callers title-case their input
pub async fn find_by_location(pool: &SqlitePool, location: &str) -> RepoResult<Vec<Cafe>> {
    let cafes = sqlx::query_as::<_, Cafe>(
        "SELECT id, name, map_url, img_url, location, seats, has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price FROM cafe WHERE location = ? ORDER BY id",
    )
    .bind(location)
    .fetch_all(pool)
    .await?;
    Ok(cafes)
}

pub async fn count(pool: &SqlitePool) -> RepoResult<i64> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM cafe")
        .fetch_one(pool)
        .await?;
    Ok(count)
}

pub async fn insert(pool: &SqlitePool, data: &CafeCreate) -> RepoResult<Cafe> {
    let mut tx = pool.begin().await?;

    let cafe = sqlx::query_as::<_, Cafe>(
        "INSERT INTO cafe (name, map_url, img_url, location, seats, has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10) RETURNING id, name, map_url, img_url, location, seats, has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price",
    )
    .bind(&data.name)
    .bind(&data.map_url)
    .bind(&data.img_url)
    .bind(&data.location)
    .bind(&data.seats)
    .bind(data.has_toilet)
    .bind(data.has_wifi)
    .bind(data.has_sockets)
    .bind(data.can_take_calls)
    .bind(&data.coffee_price)
    .fetch_one(&mut *tx)
    .await
    .map_err(|e| match RepoError::from(e) {
        RepoError::Duplicate(_) => {
            RepoError::Duplicate(format!("A cafe named '{}' already exists.", data.name))
        }
        other => other,
    })?;

    tx.commit().await?;
    Ok(cafe)
}

/// Overwrite `coffee_price`; no other column is touched
pub async fn update_price(
    pool: &SqlitePool,
    id: i64,
    new_price: Option<&str>,
) -> RepoResult<Cafe> {
    let mut tx = pool.begin().await?;

    let cafe = sqlx::query_as::<_, Cafe>(
        "UPDATE cafe SET coffee_price = ?1 WHERE id = ?2 RETURNING id, name, map_url, img_url, location, seats, has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price",
    )
    .bind(new_price)
    .bind(id)
    .fetch_optional(&mut *tx)
    .await?
    .ok_or_else(|| RepoError::NotFound(format!("Cafe {id} not found")))?;

    tx.commit().await?;
    Ok(cafe)
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    let mut tx = pool.begin().await?;

    let rows = sqlx::query("DELETE FROM cafe WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Cafe {id} not found")));
    }

    tx.commit().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;

    async fn test_pool() -> SqlitePool {
        DbService::in_memory().await.unwrap().pool
    }

    fn cafe_create(name: &str, location: &str) -> CafeCreate {
        CafeCreate {
            name: name.to_string(),
            map_url: format!("https://maps.example/{name}"),
            img_url: format!("https://img.example/{name}.jpg"),
            location: location.to_string(),
            seats: "20-30".to_string(),
            has_toilet: true,
            has_wifi: false,
            has_sockets: true,
            can_take_calls: false,
            coffee_price: Some("£2.50".to_string()),
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_id() {
        let pool = test_pool().await;
        let cafe = insert(&pool, &cafe_create("Costa", "Paris")).await.unwrap();
        assert!(cafe.id > 0);
        assert_eq!(cafe.name, "Costa");
        assert_eq!(cafe.coffee_price.as_deref(), Some("£2.50"));
        assert!(cafe.has_toilet);
        assert!(!cafe.has_wifi);
    }

    #[tokio::test]
    async fn test_insert_duplicate_name_leaves_table_unchanged() {
        let pool = test_pool().await;
        insert(&pool, &cafe_create("Costa", "Paris")).await.unwrap();

        let err = insert(&pool, &cafe_create("Costa", "London")).await.unwrap_err();
        assert!(matches!(err, RepoError::Duplicate(ref msg) if msg.contains("Costa")));
        assert_eq!(count(&pool).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_find_all_in_insertion_order() {
        let pool = test_pool().await;
        for name in ["B", "A", "C"] {
            insert(&pool, &cafe_create(name, "Paris")).await.unwrap();
        }
        let names: Vec<_> = find_all(&pool)
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, ["B", "A", "C"]);
    }

    #[tokio::test]
    async fn test_find_by_location_exact_match() {
        let pool = test_pool().await;
        insert(&pool, &cafe_create("One", "London")).await.unwrap();
        insert(&pool, &cafe_create("Two", "Paris")).await.unwrap();
        insert(&pool, &cafe_create("Three", "London")).await.unwrap();

        let london = find_by_location(&pool, "London").await.unwrap();
        assert_eq!(london.len(), 2);
        assert!(london.iter().all(|c| c.location == "London"));

        assert!(find_by_location(&pool, "london").await.unwrap().is_empty());
        assert!(find_by_location(&pool, "Berlin").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_by_id_not_found() {
        let pool = test_pool().await;
        let err = get_by_id(&pool, 42).await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_update_price_only_touches_price() {
        let pool = test_pool().await;
        let before = insert(&pool, &cafe_create("Costa", "Paris")).await.unwrap();

        let after = update_price(&pool, before.id, Some("£3.10")).await.unwrap();
        assert_eq!(after.coffee_price.as_deref(), Some("£3.10"));
        assert_eq!(
            Cafe {
                coffee_price: before.coffee_price.clone(),
                ..after.clone()
            },
            before
        );
        assert_eq!(get_by_id(&pool, before.id).await.unwrap(), after);
    }

    #[tokio::test]
    async fn test_update_price_clears_with_none() {
        let pool = test_pool().await;
        let cafe = insert(&pool, &cafe_create("Costa", "Paris")).await.unwrap();
        let updated = update_price(&pool, cafe.id, None).await.unwrap();
        assert_eq!(updated.coffee_price, None);
    }

    #[tokio::test]
    async fn test_update_price_missing_id() {
        let pool = test_pool().await;
        let err = update_price(&pool, 99, Some("£1")).await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete() {
        let pool = test_pool().await;
        let cafe = insert(&pool, &cafe_create("Costa", "Paris")).await.unwrap();

        delete(&pool, cafe.id).await.unwrap();
        assert_eq!(find_by_id(&pool, cafe.id).await.unwrap(), None);

        let err = delete(&pool, cafe.id).await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_delete() {
        let pool = test_pool().await;
        let first = insert(&pool, &cafe_create("A", "Paris")).await.unwrap();
        let second = insert(&pool, &cafe_create("B", "Paris")).await.unwrap();
        delete(&pool, second.id).await.unwrap();

        let third = insert(&pool, &cafe_create("C", "Paris")).await.unwrap();
        assert!(third.id > second.id);
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn test_not_null_maps_to_validation() {
        let pool = test_pool().await;
        let err: RepoError = sqlx::query("INSERT INTO cafe (name) VALUES ('Bare')")
            .execute(&pool)
            .await
            .unwrap_err()
            .into();
        assert!(matches!(err, RepoError::Validation(_)));
    }
}
