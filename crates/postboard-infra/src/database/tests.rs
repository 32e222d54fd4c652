use chrono::Utc;
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, Value};
use uuid::Uuid;

use postboard_core::domain::{NewPost, Pagination, Post, PostChanges};
use postboard_core::ports::{BaseRepository, PostRepository};

use crate::database::entity::post;
use crate::database::postgres_repo::PostgresPostRepository;

fn model(id: Uuid, creator: Uuid, title: &str) -> post::Model {
    let now = Utc::now();
    post::Model {
        id,
        title: title.to_owned(),
        content: "Content".to_owned(),
        image_path: "http://localhost:8080/images/cover.png-1.png".to_owned(),
        creator,
        created_at: now.into(),
        updated_at: now.into(),
    }
}

fn exec(rows_affected: u64) -> MockExecResult {
    MockExecResult {
        last_insert_id: 0,
        rows_affected,
    }
}

#[tokio::test]
async fn test_find_post_by_id() {
    let post_id = Uuid::new_v4();
    let creator = Uuid::new_v4();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![model(post_id, creator, "Test Post")]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let result: Option<Post> = repo.find_by_id(post_id).await.unwrap();

    let post = result.expect("post should be found");
    assert_eq!(post.title, "Test Post");
    assert_eq!(post.id, post_id);
    assert_eq!(post.creator, creator);
}

#[tokio::test]
async fn test_find_missing_post() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![Vec::<post::Model>::new()])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let result: Option<Post> = repo.find_by_id(Uuid::new_v4()).await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_insert_returns_stored_post() {
    let creator = Uuid::new_v4();
    let stored_id = Uuid::new_v4();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![model(stored_id, creator, "Fresh")]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let post = repo
        .insert(NewPost {
            title: "Fresh".to_owned(),
            content: "Content".to_owned(),
            image_path: "http://localhost:8080/images/cover.png-1.png".to_owned(),
            creator,
        })
        .await
        .unwrap();

    assert_eq!(post.id, stored_id);
    assert_eq!(post.creator, creator);
}

#[tokio::test]
async fn test_find_page_applies_offset_and_limit() {
    let creator = Uuid::new_v4();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![
            model(Uuid::new_v4(), creator, "c"),
            model(Uuid::new_v4(), creator, "d"),
        ]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let posts = repo.find_page(Pagination::new(2, 2)).await.unwrap();
    assert_eq!(posts.len(), 2);

    let log = format!("{:?}", repo.db.into_transaction_log());
    assert!(log.contains("OFFSET"));
    assert!(log.contains("LIMIT"));
    assert!(log.contains("ORDER BY"));
}

#[tokio::test]
async fn test_find_page_binds_values_that_fit_postgres_bigint() {
    let cases = [
        ("9223372036854775808", "1"),
        ("4611686018427387904", "3"),
        ("18446744073709551615", "18446744073709551615"),
    ];

    for (page_size, page) in cases {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<post::Model>::new()])
            .into_connection();
        let repo = PostgresPostRepository::new(db);

        let pagination = Pagination::from_query(Some(page_size), Some(page));
        assert!(pagination.is_some());
        repo.find_page(pagination).await.unwrap();

        let log = repo.db.into_transaction_log();
        let bound: Vec<u64> = log
            .iter()
            .flat_map(|txn| txn.statements())
            .filter_map(|stmt| stmt.values.as_ref())
            .flat_map(|values| values.0.iter())
            .filter_map(|value| match value {
                Value::BigUnsigned(Some(n)) => Some(*n),
                _ => None,
            })
            .collect();

        assert_eq!(bound.len(), 2, "{} / {}", page_size, page);
        for n in bound {
            assert!(i64::try_from(n).is_ok(), "{} does not fit in i64", n);
        }
    }
}

#[tokio::test]
async fn test_delete_is_scoped_to_creator() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![exec(0)])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let removed = repo
        .delete_owned(Uuid::new_v4(), Uuid::new_v4())
        .await
        .unwrap();
    assert_eq!(removed, 0);

    let log = format!("{:?}", repo.db.into_transaction_log());
    assert!(log.contains("DELETE FROM"));
    assert!(log.contains("creator"));
}

#[tokio::test]
async fn test_replace_is_scoped_to_creator() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![exec(1)])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let modified = repo
        .replace_owned(
            Uuid::new_v4(),
            Uuid::new_v4(),
            PostChanges {
                title: "New".to_owned(),
                content: "Body".to_owned(),
                image_path: "http://localhost:8080/images/x.png-2.png".to_owned(),
            },
        )
        .await
        .unwrap();
    assert_eq!(modified, 1);

    let log = format!("{:?}", repo.db.into_transaction_log());
    assert!(log.contains("UPDATE"));
    assert!(log.contains("creator"));
    assert!(!log.contains("created_at"));
}
