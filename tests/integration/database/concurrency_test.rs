//! Concurrent writers against a file-backed database
//!
//! Every request here runs on its own pooled connection, so these tests
//! fail if a read-modify-write can lose an update or bounce off the lock.

use devconnect::backend::auth::users::{create_user, User};
use devconnect::backend::posts::service::{add_comment, create_post, get_post, like_post};
use devconnect::backend::posts::types::{CommentRequest, CreatePostRequest};
use devconnect::backend::profile::service::{add_experience, my_profile, upsert_profile};
use devconnect::backend::profile::{ExperienceRequest, ProfileRequest};
use pretty_assertions::assert_eq;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::common::database::FileDatabase;

async fn author(pool: &SqlitePool) -> User {
    create_user(pool, "Ada".into(), "ada@example.com".into(), "h".into(), "//ada".into())
        .await
        .unwrap()
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_likes_all_stored() {
    let db = FileDatabase::new().await;
    let user = author(db.pool()).await;
    let post = create_post(db.pool(), user.id, CreatePostRequest { text: "Hello".into() })
        .await
        .unwrap();
    let id = post.id.to_string();

    let likers: Vec<Uuid> = (0..10).map(|_| Uuid::new_v4()).collect();
    let tasks: Vec<_> = likers
        .iter()
        .map(|&liker| {
            let pool = db.pool().clone();
            let id = id.clone();
            tokio::spawn(async move { like_post(&pool, &id, liker).await })
        })
        .collect();

    for task in tasks {
        let result = task.await.unwrap();
        assert!(result.is_ok(), "like failed: {:?}", result.err());
    }

    let stored = get_post(db.pool(), &id).await.unwrap();
    assert_eq!(stored.likes.len(), 10);
    for liker in likers {
        assert!(stored.likes.iter().any(|like| like.user == liker));
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_comments_all_stored() {
    let db = FileDatabase::new().await;
    let user = author(db.pool()).await;
    let post = create_post(db.pool(), user.id, CreatePostRequest { text: "Hello".into() })
        .await
        .unwrap();
    let id = post.id.to_string();

    let tasks: Vec<_> = (0..8)
        .map(|n| {
            let pool = db.pool().clone();
            let id = id.clone();
            let user_id = user.id;
            tokio::spawn(async move {
                add_comment(&pool, &id, user_id, CommentRequest { text: format!("comment {n}") }).await
            })
        })
        .collect();

    for task in tasks {
        assert!(task.await.unwrap().is_ok());
    }

    let stored = get_post(db.pool(), &id).await.unwrap();
    assert_eq!(stored.comments.len(), 8);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_upsert_racing_experience_keeps_entries() {
    let db = FileDatabase::new().await;
    let user = author(db.pool()).await;
    let request = |status: &str| ProfileRequest {
        status: status.into(),
        skills: "rust".into(),
        ..Default::default()
    };
    upsert_profile(db.pool(), user.id, request("Developer")).await.unwrap();

    let mut tasks = Vec::new();
    for n in 0..5 {
        let pool = db.pool().clone();
        let user_id = user.id;
        tasks.push(tokio::spawn(async move {
            add_experience(
                &pool,
                user_id,
                ExperienceRequest {
                    title: format!("Engineer {n}"),
                    company: "Acme".into(),
                    from: "2020-01-01".into(),
                    ..Default::default()
                },
            )
            .await
            .map(|_| ())
        }));

        let pool = db.pool().clone();
        let status = format!("Status {n}");
        tasks.push(tokio::spawn(async move {
            upsert_profile(&pool, user_id, request(&status)).await.map(|_| ())
        }));
    }

    for task in tasks {
        let result = task.await.unwrap();
        assert!(result.is_ok(), "write failed: {:?}", result.err());
    }

    let view = my_profile(db.pool(), user.id).await.unwrap();
    assert_eq!(view.profile.experience.len(), 5);
    assert!(view.profile.status.starts_with("Status"));
}
