//! Repository for the `projects` table.

use sqlx::SqlitePool;

use crate::models::project::Project;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "slug, title, description, image";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a project, or overwrite title, description and image of the
    /// row that already holds its slug.
    pub async fn upsert(pool: &SqlitePool, project: &Project) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO projects (slug, title, description, image)
             VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT(slug) DO UPDATE SET
                title = excluded.title,
                description = excluded.description,
                image = excluded.image",
        )
        .bind(&project.slug)
        .bind(&project.title)
        .bind(&project.description)
        .bind(&project.image)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Find a project by slug.
    pub async fn find_by_slug(
        pool: &SqlitePool,
        slug: &str,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE slug = ?1");
        sqlx::query_as::<_, Project>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List all projects in insertion order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY rowid ASC");
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// List every slug currently in use.
    pub async fn list_slugs(pool: &SqlitePool) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>("SELECT slug FROM projects")
            .fetch_all(pool)
            .await
    }

    /// Permanently delete a project. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, slug: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE slug = ?1")
            .bind(slug)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
