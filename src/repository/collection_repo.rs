//! Ordered Collection Repository
//!
//! One SQLite-backed implementation shared by every content collection
//! (testimonials, FAQ, services, specialties, photos, credentials, contact
//! buttons). The original site repeated this manager per entity type; here
//! it is generic over `CollectionRecord`.
//!
//! Reorder and delete renumber the whole collection inside a single
//! transaction, so a partial failure can never leave mixed positions behind.

use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use rusqlite::{params, Connection};
use tokio::sync::Mutex;

use crate::domain::{ordering, DomainError, DomainResult, Entity, Ordered};

use super::traits::{CollectionRecord, Repository};

/// SQLite implementation of an ordered content collection
pub struct CollectionRepository<T: CollectionRecord> {
    pub(super) conn: Arc<Mutex<Option<Connection>>>,
    _record: PhantomData<T>,
}

impl<T: CollectionRecord> CollectionRepository<T> {
    pub fn new(conn: Arc<Mutex<Option<Connection>>>) -> Self {
        Self {
            conn,
            _record: PhantomData,
        }
    }

    /// Active items only, in display order (the public read)
    pub async fn list_active(&self) -> DomainResult<Vec<T>> {
        let guard = self.conn.lock().await;
        let conn = guard
            .as_ref()
            .ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        let mut stmt = conn
            .prepare(&format!(
                "SELECT id, position, is_active, data FROM {} WHERE is_active = 1 ORDER BY position, id",
                T::TABLE
            ))
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let mut rows = stmt
            .query([])
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let mut records = Vec::new();
        while let Ok(Some(row)) = rows.next() {
            records.push(row_to_record::<T>(row)?);
        }
        Ok(records)
    }

    /// Flip the active flag without touching ordering
    pub async fn set_active(&self, id: u32, active: bool) -> DomainResult<()> {
        let guard = self.conn.lock().await;
        let conn = guard
            .as_ref()
            .ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        let affected = conn
            .execute(
                &format!(
                    "UPDATE {} SET is_active = ?, updated_at = ? WHERE id = ?",
                    T::TABLE
                ),
                params![
                    if active { 1 } else { 0 },
                    chrono::Utc::now().timestamp_millis(),
                    id
                ],
            )
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        if affected == 0 {
            return Err(DomainError::NotFound(format!("{} {} not found", T::TABLE, id)));
        }
        Ok(())
    }

    /// Move one item to `target_index` and renumber the whole collection,
    /// all inside a single transaction.
    pub async fn reorder(&self, id: u32, target_index: usize) -> DomainResult<()> {
        let mut guard = self.conn.lock().await;
        let conn = guard
            .as_mut()
            .ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        let tx = conn
            .transaction()
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let mut ids = load_ids(&tx, T::TABLE)?;
        let from = ids
            .iter()
            .position(|&x| x == id)
            .ok_or_else(|| DomainError::NotFound(format!("{} {} not found", T::TABLE, id)))?;

        ordering::move_entry(&mut ids, from, target_index);
        write_positions(&tx, T::TABLE, &ids)?;

        tx.commit().map_err(|e| DomainError::Internal(e.to_string()))?;
        tracing::debug!(table = T::TABLE, id, target_index, "collection reordered");
        Ok(())
    }
}

#[async_trait]
impl<T: CollectionRecord> Repository<T> for CollectionRepository<T> {
    async fn create(&self, entity: &T) -> DomainResult<T> {
        let guard = self.conn.lock().await;
        let conn = guard
            .as_ref()
            .ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        // New items append at the end
        let count: i64 = conn
            .query_row(&format!("SELECT COUNT(*) FROM {}", T::TABLE), [], |row| {
                row.get(0)
            })
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let mut record = entity.clone();
        record.set_position(ordering::next_position(count as usize));

        let data = serde_json::to_string(&record)
            .map_err(|e| DomainError::Internal(e.to_string()))?;
        let now = chrono::Utc::now().timestamp_millis();

        conn.execute(
            &format!(
                "INSERT INTO {} (position, is_active, data, created_at, updated_at) VALUES (?, ?, ?, ?, ?)",
                T::TABLE
            ),
            params![
                record.position(),
                if record.is_active() { 1 } else { 0 },
                data,
                now,
                now
            ],
        )
        .map_err(|e| DomainError::Internal(e.to_string()))?;

        record.set_id(conn.last_insert_rowid() as u32);
        Ok(record)
    }

    async fn find_by_id(&self, id: u32) -> DomainResult<Option<T>> {
        let guard = self.conn.lock().await;
        let conn = guard
            .as_ref()
            .ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        let mut stmt = conn
            .prepare(&format!(
                "SELECT id, position, is_active, data FROM {} WHERE id = ?",
                T::TABLE
            ))
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let mut rows = stmt
            .query(params![id])
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        if let Ok(Some(row)) = rows.next() {
            Ok(Some(row_to_record::<T>(row)?))
        } else {
            Ok(None)
        }
    }

    async fn list(&self) -> DomainResult<Vec<T>> {
        let guard = self.conn.lock().await;
        let conn = guard
            .as_ref()
            .ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        let mut stmt = conn
            .prepare(&format!(
                "SELECT id, position, is_active, data FROM {} ORDER BY position, id",
                T::TABLE
            ))
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let mut rows = stmt
            .query([])
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let mut records = Vec::new();
        while let Ok(Some(row)) = rows.next() {
            records.push(row_to_record::<T>(row)?);
        }
        Ok(records)
    }

    async fn update(&self, entity: &T) -> DomainResult<T> {
        let guard = self.conn.lock().await;
        let conn = guard
            .as_ref()
            .ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        let data = serde_json::to_string(entity)
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let affected = conn
            .execute(
                &format!(
                    "UPDATE {} SET position = ?, is_active = ?, data = ?, updated_at = ? WHERE id = ?",
                    T::TABLE
                ),
                params![
                    entity.position(),
                    if entity.is_active() { 1 } else { 0 },
                    data,
                    chrono::Utc::now().timestamp_millis(),
                    entity.id()
                ],
            )
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        if affected == 0 {
            return Err(DomainError::NotFound(format!(
                "{} {} not found",
                T::TABLE,
                entity.id()
            )));
        }
        Ok(entity.clone())
    }

    async fn delete(&self, id: u32) -> DomainResult<()> {
        let mut guard = self.conn.lock().await;
        let conn = guard
            .as_mut()
            .ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        let tx = conn
            .transaction()
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let affected = tx
            .execute(&format!("DELETE FROM {} WHERE id = ?", T::TABLE), params![id])
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        if affected == 0 {
            // Dropping the transaction rolls it back
            return Err(DomainError::NotFound(format!("{} {} not found", T::TABLE, id)));
        }

        // Compact survivors back to contiguous positions before committing
        let ids = load_ids(&tx, T::TABLE)?;
        write_positions(&tx, T::TABLE, &ids)?;

        tx.commit().map_err(|e| DomainError::Internal(e.to_string()))?;
        Ok(())
    }
}

/// Convert a database row to a record. The id/position/is_active columns are
/// the source of truth and overwrite whatever the JSON payload carries.
fn row_to_record<T: CollectionRecord>(row: &rusqlite::Row) -> DomainResult<T> {
    let id: u32 = row.get(0).map_err(|e| DomainError::Internal(e.to_string()))?;
    let position: i32 = row.get(1).map_err(|e| DomainError::Internal(e.to_string()))?;
    let active: i32 = row.get::<_, i32>(2).unwrap_or(1);
    let data: String = row.get(3).map_err(|e| DomainError::Internal(e.to_string()))?;

    let mut record: T = serde_json::from_str(&data)
        .map_err(|e| DomainError::Internal(format!("Corrupt row in {}: {}", T::TABLE, e)))?;
    record.set_id(id);
    record.set_position(position);
    record.set_active(active != 0);
    Ok(record)
}

/// Ids in display order (position, then id as the stable tie-break)
fn load_ids(conn: &Connection, table: &str) -> DomainResult<Vec<u32>> {
    let mut stmt = conn
        .prepare(&format!("SELECT id FROM {} ORDER BY position, id", table))
        .map_err(|e| DomainError::Internal(e.to_string()))?;

    let mut rows = stmt
        .query([])
        .map_err(|e| DomainError::Internal(e.to_string()))?;

    let mut ids = Vec::new();
    while let Ok(Some(row)) = rows.next() {
        let id: u32 = row.get(0).map_err(|e| DomainError::Internal(e.to_string()))?;
        ids.push(id);
    }
    Ok(ids)
}

/// Rewrite every row's position to its index in `ids`
fn write_positions(conn: &Connection, table: &str, ids: &[u32]) -> DomainResult<()> {
    let now = chrono::Utc::now().timestamp_millis();
    for (new_pos, id) in ids.iter().enumerate() {
        conn.execute(
            &format!("UPDATE {} SET position = ?, updated_at = ? WHERE id = ?", table),
            params![new_pos as i32, now, *id],
        )
        .map_err(|e| DomainError::Internal(e.to_string()))?;
    }
    Ok(())
}
