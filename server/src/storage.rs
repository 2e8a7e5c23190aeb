use async_trait::async_trait;
use matrix_engine::Shape;
use sqlx::{Row, SqlitePool};

use crate::models::{NewOperation, OperationRecord};

/// Where executed operations are remembered.
///
/// The engine knows nothing about this; the gRPC service records through it
/// after a successful call and never waits on the write.
#[async_trait]
pub trait HistoryStore: Send + Sync {
    async fn record(&self, entry: NewOperation) -> Result<i64, sqlx::Error>;

    /// Most recent entries first.
    async fn recent(&self, limit: u32) -> Result<Vec<OperationRecord>, sqlx::Error>;
}

pub struct Storage {
    pool: SqlitePool,
}

impl Storage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HistoryStore for Storage {
    async fn record(&self, entry: NewOperation) -> Result<i64, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO operations (operation, a_rows, a_cols, b_rows, b_cols, elapsed_ms, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?) RETURNING id",
        )
        .bind(&entry.operation)
        .bind(entry.a_shape.rows as i64)
        .bind(entry.a_shape.cols as i64)
        .bind(entry.b_shape.map(|s| s.rows as i64))
        .bind(entry.b_shape.map(|s| s.cols as i64))
        .bind(entry.elapsed_ms)
        .bind(entry.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.get("id"))
    }

    async fn recent(&self, limit: u32) -> Result<Vec<OperationRecord>, sqlx::Error> {
        let rows = sqlx::query(
            "SELECT id, operation, a_rows, a_cols, b_rows, b_cols, elapsed_ms, created_at
             FROM operations ORDER BY id DESC LIMIT ?",
        )
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let b_rows: Option<i64> = row.get("b_rows");
                let b_cols: Option<i64> = row.get("b_cols");
                OperationRecord {
                    id: row.get("id"),
                    operation: row.get("operation"),
                    a_shape: shape(row.get("a_rows"), row.get("a_cols")),
                    b_shape: b_rows.zip(b_cols).map(|(r, c)| shape(r, c)),
                    elapsed_ms: row.get("elapsed_ms"),
                    created_at: row.get("created_at"),
                }
            })
            .collect())
    }
}

fn shape(rows: i64, cols: i64) -> Shape {
    Shape::new(rows as usize, cols as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;

    #[tokio::test]
    async fn records_and_lists_newest_first() {
        let pool = db::init_pool("sqlite::memory:").await.unwrap();
        let storage = Storage::new(pool);

        let first = storage
            .record(NewOperation::new("determinant", Shape::new(3, 3), None, 0.25))
            .await
            .unwrap();
        let second = storage
            .record(NewOperation::new(
                "multiply",
                Shape::new(2, 3),
                Some(Shape::new(3, 4)),
                1.5,
            ))
            .await
            .unwrap();
        assert!(second > first);

        let recent = storage.recent(10).await.unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].operation, "multiply");
        assert_eq!(recent[0].b_shape, Some(Shape::new(3, 4)));
        assert_eq!(recent[1].operation, "determinant");
        assert_eq!(recent[1].a_shape, Shape::new(3, 3));
        assert_eq!(recent[1].b_shape, None);

        assert_eq!(storage.recent(1).await.unwrap().len(), 1);
    }
}
