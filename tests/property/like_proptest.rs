//! Property-based tests for the like sequence
//!
//! Random like/unlike sequences over a small user pool are checked against a
//! plain set model.

use std::collections::HashSet;

use devconnect::shared::{Post, SharedError};
use proptest::prelude::*;
use uuid::Uuid;

#[derive(Debug, Clone, Copy)]
enum Op {
    Like(usize),
    Unlike(usize),
}

fn op_strategy(users: usize) -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..users).prop_map(Op::Like),
        (0..users).prop_map(Op::Unlike),
    ]
}

fn empty_post() -> Post {
    Post::new(Uuid::new_v4(), "text".into(), "Ada".into(), "//avatar".into())
}

proptest! {
    #[test]
    fn test_like_sequence_matches_set_model(ops in prop::collection::vec(op_strategy(4), 0..40)) {
        let users: Vec<Uuid> = (0..4).map(|_| Uuid::new_v4()).collect();
        let mut post = empty_post();
        let mut model: HashSet<Uuid> = HashSet::new();

        for op in ops {
            match op {
                Op::Like(i) => {
                    let result = post.like(users[i]);
                    if model.insert(users[i]) {
                        prop_assert!(result.is_ok());
                        prop_assert_eq!(post.likes[0].user, users[i]);
                    } else {
                        prop_assert_eq!(result, Err(SharedError::AlreadyLiked));
                    }
                }
                Op::Unlike(i) => {
                    let result = post.unlike(users[i]);
                    if model.remove(&users[i]) {
                        prop_assert!(result.is_ok());
                    } else {
                        prop_assert_eq!(result, Err(SharedError::NotLiked));
                    }
                }
            }

            let liked: HashSet<Uuid> = post.likes.iter().map(|like| like.user).collect();
            prop_assert_eq!(liked.len(), post.likes.len(), "a user appears twice");
            prop_assert_eq!(&liked, &model);
        }
    }

    #[test]
    fn test_like_then_unlike_restores_sequence(prior in prop::collection::vec(any::<u128>(), 0..8)) {
        let mut post = empty_post();
        for seed in prior.iter().collect::<HashSet<_>>() {
            post.like(Uuid::from_u128(*seed)).unwrap();
        }
        let before = post.likes.clone();
        let newcomer = Uuid::new_v4();

        post.like(newcomer).unwrap();
        post.unlike(newcomer).unwrap();

        prop_assert_eq!(post.likes, before);
    }
}
