// src/db/db_storage.rs
// DOCUMENTATION: PostgreSQL storage engine
// PURPOSE: One table per entity kind; staged changes committed in a transaction

use crate::models::{Amenity, City, Entity, Kind, Place, Record, Review, State, User};
use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgConnection, PgPool};

use super::storage::{creation_order, Change, Storage, StorageError};

/// Table definitions, applied idempotently by `reload`
const SCHEMA: &str = include_str!("schema.sql");

pub struct DbStorage {
    pool: PgPool,
}

impl DbStorage {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn all_of_kind(&self, kind: Kind) -> Result<Vec<Record>, StorageError> {
        match kind {
            Kind::Amenity => fetch_all::<Amenity>(&self.pool).await,
            Kind::City => fetch_all::<City>(&self.pool).await,
            Kind::Place => fetch_all::<Place>(&self.pool).await,
            Kind::Review => fetch_all::<Review>(&self.pool).await,
            Kind::State => fetch_all::<State>(&self.pool).await,
            Kind::User => fetch_all::<User>(&self.pool).await,
        }
    }

    async fn count_of_kind(&self, kind: Kind) -> Result<usize, StorageError> {
        let sql = format!("SELECT COUNT(*) FROM {}", kind.plural());
        let (count,): (i64,) = sqlx::query_as(&sql).fetch_one(&self.pool).await?;
        Ok(count as usize)
    }
}

async fn fetch_all<E>(pool: &PgPool) -> Result<Vec<Record>, StorageError>
where
    E: Entity + for<'r> FromRow<'r, PgRow> + Unpin,
{
    let sql = format!("SELECT * FROM {} ORDER BY created_at, id", E::KIND.plural());
    let rows = sqlx::query_as::<_, E>(&sql).fetch_all(pool).await?;
    Ok(rows.into_iter().map(Entity::into_record).collect())
}

async fn fetch_one<E>(pool: &PgPool, id: &str) -> Result<Option<Record>, StorageError>
where
    E: Entity + for<'r> FromRow<'r, PgRow> + Unpin,
{
    let sql = format!("SELECT * FROM {} WHERE id = $1", E::KIND.plural());
    let row = sqlx::query_as::<_, E>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row.map(Entity::into_record))
}

/// Insert or overwrite the row for `record`
/// DOCUMENTATION: Foreign keys and `created_at` are never part of the
/// conflict update, so a stored row keeps its parent and creation time
async fn upsert(conn: &mut PgConnection, record: &Record) -> Result<(), sqlx::Error> {
    let base = record.base();
    match record {
        Record::Amenity(amenity) => {
            sqlx::query(
                r#"
                INSERT INTO amenities (id, created_at, updated_at, name)
                VALUES ($1, $2, $3, $4)
                ON CONFLICT (id) DO UPDATE
                SET updated_at = EXCLUDED.updated_at, name = EXCLUDED.name
                "#,
            )
            .bind(&base.id)
            .bind(base.created_at)
            .bind(base.updated_at)
            .bind(&amenity.name)
            .execute(&mut *conn)
            .await?;
        }
        Record::City(city) => {
            sqlx::query(
                r#"
                INSERT INTO cities (id, created_at, updated_at, state_id, name)
                VALUES ($1, $2, $3, $4, $5)
                ON CONFLICT (id) DO UPDATE
                SET updated_at = EXCLUDED.updated_at, name = EXCLUDED.name
                "#,
            )
            .bind(&base.id)
            .bind(base.created_at)
            .bind(base.updated_at)
            .bind(&city.state_id)
            .bind(&city.name)
            .execute(&mut *conn)
            .await?;
        }
        Record::Place(place) => {
            sqlx::query(
                r#"
                INSERT INTO places (
                    id, created_at, updated_at, city_id, user_id, name, description,
                    number_rooms, number_bathrooms, max_guest, price_by_night,
                    latitude, longitude
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
                ON CONFLICT (id) DO UPDATE
                SET
                    updated_at = EXCLUDED.updated_at,
                    name = EXCLUDED.name,
                    description = EXCLUDED.description,
                    number_rooms = EXCLUDED.number_rooms,
                    number_bathrooms = EXCLUDED.number_bathrooms,
                    max_guest = EXCLUDED.max_guest,
                    price_by_night = EXCLUDED.price_by_night,
                    latitude = EXCLUDED.latitude,
                    longitude = EXCLUDED.longitude
                "#,
            )
            .bind(&base.id) // $1
            .bind(base.created_at) // $2
            .bind(base.updated_at) // $3
            .bind(&place.city_id) // $4
            .bind(&place.user_id) // $5
            .bind(&place.name) // $6
            .bind(&place.description) // $7
            .bind(place.number_rooms) // $8
            .bind(place.number_bathrooms) // $9
            .bind(place.max_guest) // $10
            .bind(place.price_by_night) // $11
            .bind(place.latitude) // $12
            .bind(place.longitude) // $13
            .execute(&mut *conn)
            .await?;
        }
        Record::Review(review) => {
            sqlx::query(
                r#"
                INSERT INTO reviews (id, created_at, updated_at, place_id, user_id, text)
                VALUES ($1, $2, $3, $4, $5, $6)
                ON CONFLICT (id) DO UPDATE
                SET updated_at = EXCLUDED.updated_at, text = EXCLUDED.text
                "#,
            )
            .bind(&base.id)
            .bind(base.created_at)
            .bind(base.updated_at)
            .bind(&review.place_id)
            .bind(&review.user_id)
            .bind(&review.text)
            .execute(&mut *conn)
            .await?;
        }
        Record::State(state) => {
            sqlx::query(
                r#"
                INSERT INTO states (id, created_at, updated_at, name)
                VALUES ($1, $2, $3, $4)
                ON CONFLICT (id) DO UPDATE
                SET updated_at = EXCLUDED.updated_at, name = EXCLUDED.name
                "#,
            )
            .bind(&base.id)
            .bind(base.created_at)
            .bind(base.updated_at)
            .bind(&state.name)
            .execute(&mut *conn)
            .await?;
        }
        Record::User(user) => {
            sqlx::query(
                r#"
                INSERT INTO users (
                    id, created_at, updated_at, email, password, first_name, last_name
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                ON CONFLICT (id) DO UPDATE
                SET
                    updated_at = EXCLUDED.updated_at,
                    password = EXCLUDED.password,
                    first_name = EXCLUDED.first_name,
                    last_name = EXCLUDED.last_name
                "#,
            )
            .bind(&base.id)
            .bind(base.created_at)
            .bind(base.updated_at)
            .bind(&user.email)
            .bind(&user.password)
            .bind(&user.first_name)
            .bind(&user.last_name)
            .execute(&mut *conn)
            .await?;
        }
    }
    Ok(())
}

#[async_trait]
impl Storage for DbStorage {
    async fn all(&self, kind: Option<Kind>) -> Result<Vec<Record>, StorageError> {
        match kind {
            Some(kind) => self.all_of_kind(kind).await,
            None => {
                let mut records = Vec::new();
                for kind in Kind::ALL {
                    records.extend(self.all_of_kind(kind).await?);
                }
                records.sort_by(creation_order);
                Ok(records)
            }
        }
    }

    async fn get(&self, kind: Kind, id: &str) -> Result<Option<Record>, StorageError> {
        match kind {
            Kind::Amenity => fetch_one::<Amenity>(&self.pool, id).await,
            Kind::City => fetch_one::<City>(&self.pool, id).await,
            Kind::Place => fetch_one::<Place>(&self.pool, id).await,
            Kind::Review => fetch_one::<Review>(&self.pool, id).await,
            Kind::State => fetch_one::<State>(&self.pool, id).await,
            Kind::User => fetch_one::<User>(&self.pool, id).await,
        }
    }

    async fn count(&self, kind: Option<Kind>) -> Result<usize, StorageError> {
        match kind {
            Some(kind) => self.count_of_kind(kind).await,
            None => {
                let mut total = 0;
                for kind in Kind::ALL {
                    total += self.count_of_kind(kind).await?;
                }
                Ok(total)
            }
        }
    }

    async fn commit(&self, changes: Vec<Change>) -> Result<(), StorageError> {
        let mut tx = self.pool.begin().await?;

        for change in &changes {
            match change {
                Change::Upsert(record) => upsert(&mut *tx, record).await?,
                Change::Update(record) => {
                    let sql = format!(
                        "SELECT id FROM {} WHERE id = $1 FOR UPDATE",
                        record.kind().plural()
                    );
                    let stored: Option<(String,)> = sqlx::query_as(&sql)
                        .bind(record.id())
                        .fetch_optional(&mut *tx)
                        .await?;
                    match stored {
                        Some(_) => upsert(&mut *tx, record).await?,
                        None => log::debug!("Skipping update of deleted {}", record.key()),
                    }
                }
                Change::Delete(kind, id) => {
                    let sql = format!("DELETE FROM {} WHERE id = $1", kind.plural());
                    sqlx::query(&sql).bind(id).execute(&mut *tx).await?;
                }
            }
        }

        tx.commit().await?;
        log::debug!("Committed {} changes", changes.len());
        Ok(())
    }

    async fn reload(&self) -> Result<(), StorageError> {
        for statement in SCHEMA
            .split(';')
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            sqlx::query(statement).execute(&self.pool).await?;
        }
        log::info!("Database schema verified");
        Ok(())
    }

    async fn close(&self) -> Result<(), StorageError> {
        self.pool.close().await;
        log::info!("Database pool closed");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "db"
    }
}
