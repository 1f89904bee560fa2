use sqlx::PgPool;

const CATALOG_TABLES: [&str; 4] = ["cards", "images", "subtypes", "users"];

/// Every catalog table carries timestamptz `created_at`, `updated_at`, and `deleted_at`.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_all_tables_have_timestamps(pool: PgPool) {
    for table in CATALOG_TABLES {
        for col in ["created_at", "updated_at", "deleted_at"] {
            let result: Option<(String,)> = sqlx::query_as(
                "SELECT data_type
                 FROM information_schema.columns
                 WHERE table_schema = 'public'
                   AND table_name::text = $1
                   AND column_name::text = $2",
            )
            .bind(table)
            .bind(col)
            .fetch_optional(&pool)
            .await
            .unwrap();

            let (data_type,) =
                result.unwrap_or_else(|| panic!("Table {table} is missing column {col}"));
            assert_eq!(
                data_type, "timestamp with time zone",
                "Table {table}.{col} should be timestamptz, got {data_type}"
            );
        }
    }
}

/// Every catalog table has an `updated_at` trigger.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_all_tables_have_updated_at_trigger(pool: PgPool) {
    for table in CATALOG_TABLES {
        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*)
             FROM information_schema.triggers
             WHERE event_object_table::text = $1
               AND trigger_name::text = 'trg_' || $1 || '_updated_at'",
        )
        .bind(table)
        .fetch_one(&pool)
        .await
        .unwrap();
        assert_eq!(count, 1, "Table {table} is missing its updated_at trigger");
    }
}

/// Card foreign keys have supporting indexes.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_card_fk_columns_are_indexed(pool: PgPool) {
    for index in ["idx_cards_subtype_id", "idx_cards_image_id"] {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM pg_indexes WHERE indexname = $1")
                .bind(index)
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_eq!(count, 1, "Missing index {index}");
    }
}
