//! Property-based tests for post listing order

use chrono::{Duration, TimeZone, Utc};
use devconnect::backend::posts::db::{insert_post, list_posts};
use devconnect::shared::Post;
use proptest::prelude::*;
use uuid::Uuid;

use crate::common::database::create_test_pool;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn test_list_is_newest_first_for_any_insertion_order(
        offsets in prop::collection::vec(0i64..1_000_000, 1..12)
    ) {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let listed = runtime.block_on(async {
            let pool = create_test_pool().await;
            let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
            let owner = Uuid::new_v4();

            for offset in &offsets {
                let mut post = Post::new(owner, format!("post {offset}"), "Ada".into(), "//a".into());
                post.date = base + Duration::milliseconds(*offset);
                insert_post(&pool, &post).await.unwrap();
            }

            list_posts(&pool).await.unwrap()
        });

        prop_assert_eq!(listed.len(), offsets.len());
        for pair in listed.windows(2) {
            prop_assert!(pair[0].date >= pair[1].date);
        }
    }
}
