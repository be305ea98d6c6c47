//! Live integration tests for folio-db using `#[sqlx::test]`.
//!
//! Each test gets a fresh, fully-migrated Postgres database spun up by the
//! sqlx test harness. The `migrations` path is relative to the crate root
//! (`crates/folio-db/`), so `"../../migrations"` resolves to the workspace
//! migration directory.

use folio_core::ImageColumn;
use folio_db::{get_profile, list_projects, list_technologies};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn insert_project(pool: &sqlx::PgPool, title: &str, tags: &str, image: Option<&[u8]>) -> i32 {
    sqlx::query_scalar::<_, i32>(
        "INSERT INTO projects (title, description, tags, image, code_url) \
         VALUES ($1, $2, $3, $4, $5) RETURNING id",
    )
    .bind(title)
    .bind(format!("{title} description"))
    .bind(tags)
    .bind(image)
    .bind(format!("https://git.example.com/{title}"))
    .fetch_one(pool)
    .await
    .unwrap_or_else(|e| panic!("insert_project failed for '{title}': {e}"))
}

// ---------------------------------------------------------------------------
// profile
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn get_profile_empty_table_returns_none(pool: sqlx::PgPool) {
    let profile = get_profile(&pool).await.expect("query");
    assert!(profile.is_none());
}

#[sqlx::test(migrations = "../../migrations")]
async fn get_profile_reads_bytes_image_and_resume(pool: sqlx::PgPool) {
    sqlx::query(
        "INSERT INTO profile (first_name, last_name, skills, email, resume, image) \
         VALUES ('Ada', 'Lovelace', 'Rust, SQL', 'ada@example.com', $1, $2)",
    )
    .bind(b"%PDF-1.7".as_slice())
    .bind([0xFF_u8, 0xD8, 0xFF].as_slice())
    .execute(&pool)
    .await
    .expect("insert profile");

    let profile = get_profile(&pool).await.expect("query").expect("profile row");
    assert_eq!(profile.first_name.as_deref(), Some("Ada"));
    assert_eq!(profile.skills.as_deref(), Some("Rust, SQL"));
    assert!(profile.bio.is_none());
    assert_eq!(profile.resume.as_deref(), Some(&b"%PDF-1.7"[..]));
    assert_eq!(profile.image, ImageColumn::Bytes(vec![0xFF, 0xD8, 0xFF]));
}

#[sqlx::test(migrations = "../../migrations")]
async fn get_profile_picks_lowest_id(pool: sqlx::PgPool) {
    sqlx::query("INSERT INTO profile (first_name) VALUES ('First'), ('Second')")
        .execute(&pool)
        .await
        .expect("insert profiles");

    let profile = get_profile(&pool).await.expect("query").expect("profile row");
    assert_eq!(profile.first_name.as_deref(), Some("First"));
}

#[sqlx::test(migrations = "../../migrations")]
async fn get_profile_reads_text_image_column(pool: sqlx::PgPool) {
    sqlx::query("ALTER TABLE profile ALTER COLUMN image TYPE TEXT USING NULL")
        .execute(&pool)
        .await
        .expect("alter column");
    sqlx::query("INSERT INTO profile (first_name, image) VALUES ('Ada', 'data:image/png;base64,AAAA')")
        .execute(&pool)
        .await
        .expect("insert profile");

    let profile = get_profile(&pool).await.expect("query").expect("profile row");
    assert_eq!(
        profile.image,
        ImageColumn::Encoded("data:image/png;base64,AAAA".to_string())
    );
    assert!(profile.resume.is_none());
}

// ---------------------------------------------------------------------------
// projects
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn list_projects_empty_table(pool: sqlx::PgPool) {
    let projects = list_projects(&pool).await.expect("query");
    assert!(projects.is_empty());
}

#[sqlx::test(migrations = "../../migrations")]
async fn list_projects_returns_rows_in_id_order(pool: sqlx::PgPool) {
    let first = insert_project(&pool, "alpha", "Rust, Axum", Some(&[1, 2, 3])).await;
    let second = insert_project(&pool, "beta", "Go", None).await;

    let projects = list_projects(&pool).await.expect("query");
    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0].id, first);
    assert_eq!(projects[0].tags, "Rust, Axum");
    assert_eq!(projects[0].image, ImageColumn::Bytes(vec![1, 2, 3]));
    assert_eq!(projects[0].code_url.as_deref(), Some("https://git.example.com/alpha"));
    assert!(projects[0].demo_url.is_none());
    assert_eq!(projects[1].id, second);
    assert_eq!(projects[1].image, ImageColumn::Absent);
}

#[sqlx::test(migrations = "../../migrations")]
async fn list_projects_reads_text_image_column(pool: sqlx::PgPool) {
    sqlx::query("ALTER TABLE projects ALTER COLUMN image TYPE TEXT USING NULL")
        .execute(&pool)
        .await
        .expect("alter column");
    sqlx::query("INSERT INTO projects (title, image) VALUES ('gamma', 'https://cdn.example.com/g.jpg')")
        .execute(&pool)
        .await
        .expect("insert project");

    let projects = list_projects(&pool).await.expect("query");
    assert_eq!(
        projects[0].image,
        ImageColumn::Encoded("https://cdn.example.com/g.jpg".to_string())
    );
    assert_eq!(projects[0].description, "");
}

#[sqlx::test(migrations = "../../migrations")]
async fn list_projects_reads_null_text_columns_as_empty(pool: sqlx::PgPool) {
    sqlx::query(
        "ALTER TABLE projects \
         ALTER COLUMN title DROP NOT NULL, \
         ALTER COLUMN description DROP NOT NULL, \
         ALTER COLUMN tags DROP NOT NULL",
    )
    .execute(&pool)
    .await
    .expect("relax columns");
    insert_project(&pool, "alpha", "Rust", None).await;
    sqlx::query("INSERT INTO projects (title, description, tags) VALUES (NULL, NULL, NULL)")
        .execute(&pool)
        .await
        .expect("insert legacy row");

    let projects = list_projects(&pool).await.expect("query");
    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0].title, "alpha");
    assert_eq!(projects[0].tags, "Rust");
    assert_eq!(projects[1].title, "");
    assert_eq!(projects[1].description, "");
    assert_eq!(projects[1].tags, "");
}

// ---------------------------------------------------------------------------
// technologies
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn list_technologies_passes_rows_through(pool: sqlx::PgPool) {
    sqlx::query(
        "INSERT INTO technologies (name, category) VALUES ('Rust', 'language'), ('Postgres', NULL)",
    )
    .execute(&pool)
    .await
    .expect("insert technologies");

    let technologies = list_technologies(&pool).await.expect("query");
    assert_eq!(technologies.len(), 2);
    assert_eq!(technologies[0]["name"], "Rust");
    assert_eq!(technologies[0]["category"], "language");
    assert!(technologies[1]["category"].is_null());
    assert!(technologies[1]["icon"].is_null());
}

#[sqlx::test(migrations = "../../migrations")]
async fn health_check_succeeds_on_live_pool(pool: sqlx::PgPool) {
    folio_db::health_check(&pool).await.expect("health check");
}
