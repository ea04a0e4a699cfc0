//! Behaviour every `Store` backend must share.
//!
//! Each check takes a fresh, empty store.

#![allow(dead_code)]

use ootd_domain::{Actor, Category, LikeOutcome, NewPost, NewUser, PostId, Role, User, UserId};
use ootd_server::db::{Store, StoreError};

pub async fn add_user(store: &dyn Store, name: &str, role: Role) -> User {
    store
        .insert_user(&NewUser {
            username: name.to_string(),
            email: format!("{}@example.com", name),
            password_hash: "not-a-real-hash".to_string(),
            profile_pic: Some(format!("{}.png", name)),
            role,
        })
        .await
        .unwrap()
}

pub async fn add_post(
    store: &dyn Store,
    owner: UserId,
    category: &Category,
    image: &str,
) -> PostId {
    store
        .insert_post(&NewPost {
            owner,
            image: image.to_string(),
            description: format!("look {}", image),
            category: category.id,
        })
        .await
        .unwrap()
}

pub async fn categories_listed_as_inserted(store: &dyn Store) {
    let mut inserted = Vec::new();
    for name in ["Casual", "Formal", "Street"] {
        inserted.push(store.insert_category(name).await.unwrap());
    }

    let mut listed = store.list_categories().await.unwrap();
    listed.sort_by_key(|c| c.id);
    inserted.sort_by_key(|c| c.id);
    assert_eq!(listed, inserted);
}

pub async fn duplicate_category_is_rejected(store: &dyn Store) {
    store.insert_category("Casual").await.unwrap();
    let err = store.insert_category("Casual").await.unwrap_err();
    assert!(matches!(err, StoreError::Duplicate("category")));
}

pub async fn category_listing_is_exact_and_newest_first(store: &dyn Store) {
    let anna = add_user(store, "anna", Role::Member).await;
    let casual = store.insert_category("Casual").await.unwrap();
    let formal = store.insert_category("Formal").await.unwrap();

    let first = add_post(store, anna.user_id, &casual, "a.jpg").await;
    let other = add_post(store, anna.user_id, &formal, "b.jpg").await;
    let second = add_post(store, anna.user_id, &casual, "c.jpg").await;

    let posts = store.list_posts_by_category(casual.id).await.unwrap();
    let ids: Vec<PostId> = posts.iter().map(|p| p.post_id).collect();
    assert_eq!(ids, vec![second, first]);
    assert!(!ids.contains(&other));
    assert!(posts.iter().all(|p| p.category == casual));
    assert!(posts.iter().all(|p| p.liked.is_none()));
    assert!(posts[0].upload_time >= posts[1].upload_time);

    let empty = store.list_posts_by_category(9_999).await.unwrap();
    assert!(empty.is_empty());
}

pub async fn feed_flags_likes_per_viewer(store: &dyn Store) {
    let anna = add_user(store, "anna", Role::Member).await;
    let liker = add_user(store, "liker", Role::Member).await;
    let lurker = add_user(store, "lurker", Role::Member).await;
    let casual = store.insert_category("Casual").await.unwrap();
    let post = add_post(store, anna.user_id, &casual, "a.jpg").await;

    store.toggle_like(liker.user_id, post).await.unwrap();

    let as_liker = store.list_posts(Some(liker.user_id)).await.unwrap();
    let as_lurker = store.list_posts(Some(lurker.user_id)).await.unwrap();
    let anonymous = store.list_posts(None).await.unwrap();

    assert_eq!(as_liker[0].post_id, post);
    assert_eq!(as_liker[0].liked, Some(true));
    assert_eq!(as_lurker[0].liked, Some(false));
    assert_eq!(anonymous[0].liked, Some(false));
    assert_eq!(as_liker[0].likes, 1);
    assert_eq!(as_lurker[0].likes, 1);
    assert_eq!(as_liker[0].owner.username, "anna");
    assert_eq!(as_liker[0].owner.profile_pic.as_deref(), Some("anna.png"));
}

pub async fn feed_is_newest_first(store: &dyn Store) {
    let anna = add_user(store, "anna", Role::Member).await;
    let casual = store.insert_category("Casual").await.unwrap();
    let mut ids = Vec::new();
    for image in ["1.jpg", "2.jpg", "3.jpg"] {
        ids.push(add_post(store, anna.user_id, &casual, image).await);
    }
    ids.reverse();

    let feed: Vec<PostId> = store
        .list_posts(Some(anna.user_id))
        .await
        .unwrap()
        .iter()
        .map(|p| p.post_id)
        .collect();
    assert_eq!(feed, ids);
}

pub async fn double_toggle_restores_count(store: &dyn Store) {
    let anna = add_user(store, "anna", Role::Member).await;
    let bob = add_user(store, "bob", Role::Member).await;
    let casual = store.insert_category("Casual").await.unwrap();
    let post = add_post(store, anna.user_id, &casual, "a.jpg").await;

    store.toggle_like(anna.user_id, post).await.unwrap();
    let before = store.count_likes(post).await.unwrap();
    assert_eq!(before, 1);

    let first = store.toggle_like(bob.user_id, post).await.unwrap();
    assert_eq!(first.outcome, LikeOutcome::Liked);
    assert_eq!(first.total, 2);

    let second = store.toggle_like(bob.user_id, post).await.unwrap();
    assert_eq!(second.outcome, LikeOutcome::Unliked);
    assert_eq!(second.total, before);

    let third = store.toggle_like(bob.user_id, post).await.unwrap();
    assert_eq!(third.outcome, LikeOutcome::Liked);
}

pub async fn toggle_on_missing_post_fails(store: &dyn Store) {
    let anna = add_user(store, "anna", Role::Member).await;
    let err = store.toggle_like(anna.user_id, 4_242).await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound("post")));
}

pub async fn delete_removes_likes_then_post(store: &dyn Store) {
    let anna = add_user(store, "anna", Role::Member).await;
    let bob = add_user(store, "bob", Role::Member).await;
    let casual = store.insert_category("Casual").await.unwrap();
    let post = add_post(store, anna.user_id, &casual, "a.jpg").await;
    store.toggle_like(anna.user_id, post).await.unwrap();
    store.toggle_like(bob.user_id, post).await.unwrap();

    let outcome = store
        .delete_post(post, Actor::new(anna.user_id, Role::Member))
        .await
        .unwrap();

    assert!(outcome.post_removed);
    assert_eq!(outcome.likes_removed, 2);
    assert_eq!(store.count_likes(post).await.unwrap(), 0);
    assert!(store.get_post(post).await.unwrap().is_none());
}

pub async fn stranger_cannot_delete(store: &dyn Store) {
    let anna = add_user(store, "anna", Role::Member).await;
    let bob = add_user(store, "bob", Role::Member).await;
    let casual = store.insert_category("Casual").await.unwrap();
    let post = add_post(store, anna.user_id, &casual, "a.jpg").await;
    store.toggle_like(bob.user_id, post).await.unwrap();

    let outcome = store
        .delete_post(post, Actor::new(bob.user_id, Role::Member))
        .await
        .unwrap();

    assert!(!outcome.post_removed);
    assert_eq!(outcome.likes_removed, 0);
    let kept = store.get_post(post).await.unwrap().expect("post kept");
    assert_eq!(kept.likes, 1);
}

pub async fn admin_can_delete_any_post(store: &dyn Store) {
    let anna = add_user(store, "anna", Role::Member).await;
    let admin = add_user(store, "admin", Role::Admin).await;
    let casual = store.insert_category("Casual").await.unwrap();
    let post = add_post(store, anna.user_id, &casual, "a.jpg").await;

    let outcome = store
        .delete_post(post, Actor::new(admin.user_id, Role::Admin))
        .await
        .unwrap();

    assert!(outcome.post_removed);
    assert!(store.get_post(post).await.unwrap().is_none());
}

pub async fn deleting_missing_post_changes_nothing(store: &dyn Store) {
    let admin = add_user(store, "admin", Role::Admin).await;
    let outcome = store
        .delete_post(777, Actor::new(admin.user_id, Role::Admin))
        .await
        .unwrap();
    assert!(!outcome.post_removed);
}

pub async fn insert_post_requires_known_references(store: &dyn Store) {
    let anna = add_user(store, "anna", Role::Member).await;
    let casual = store.insert_category("Casual").await.unwrap();

    let err = store
        .insert_post(&NewPost {
            owner: anna.user_id,
            image: "a.jpg".to_string(),
            description: String::new(),
            category: casual.id + 100,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::NotFound("category")));

    let err = store
        .insert_post(&NewPost {
            owner: anna.user_id + 100,
            image: "a.jpg".to_string(),
            description: String::new(),
            category: casual.id,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::NotFound("user")));
}

pub async fn users_are_unique_and_findable(store: &dyn Store) {
    let anna = add_user(store, "anna", Role::Member).await;

    let err = store
        .insert_user(&NewUser {
            username: "anna".to_string(),
            email: "other@example.com".to_string(),
            password_hash: "x".to_string(),
            profile_pic: None,
            role: Role::Member,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Duplicate("username")));

    let err = store
        .insert_user(&NewUser {
            username: "anna2".to_string(),
            email: "anna@example.com".to_string(),
            password_hash: "x".to_string(),
            profile_pic: None,
            role: Role::Member,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Duplicate("email")));

    let found = store.find_credentials("anna").await.unwrap().unwrap();
    assert_eq!(found.user, anna);
    assert_eq!(found.password_hash, "not-a-real-hash");
    assert!(store.find_credentials("nobody").await.unwrap().is_none());
}

pub async fn emails_are_unique_regardless_of_case(store: &dyn Store) {
    add_user(store, "anna", Role::Member).await;

    let err = store
        .insert_user(&NewUser {
            username: "anna2".to_string(),
            email: "Anna@Example.com".to_string(),
            password_hash: "x".to_string(),
            profile_pic: None,
            role: Role::Member,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Duplicate("email")));
}

pub async fn store_answers_ping(store: &dyn Store) {
    store.ping().await.unwrap();
}

/// Category "Casual", one post, like it, unlike it.
pub async fn casual_outfit_scenario(store: &dyn Store) {
    let owner = add_user(store, "owner", Role::Member).await;
    let viewer = add_user(store, "viewer", Role::Member).await;
    let casual = store.insert_category("Casual").await.unwrap();

    let post_id = store
        .insert_post(&NewPost {
            owner: owner.user_id,
            image: "a.jpg".to_string(),
            description: "outfit".to_string(),
            category: casual.id,
        })
        .await
        .unwrap();

    let post = store.get_post(post_id).await.unwrap().expect("post exists");
    assert_eq!(post.category.name, "Casual");
    assert_eq!(post.likes, 0);
    assert_eq!(post.description, "outfit");
    assert_eq!(post.owner.user_id, owner.user_id);

    let liked = store.toggle_like(viewer.user_id, post_id).await.unwrap();
    assert_eq!(liked.as_pair(), (1, 1));

    let unliked = store.toggle_like(viewer.user_id, post_id).await.unwrap();
    assert_eq!(unliked.as_pair(), (0, 0));
}

pub async fn concurrent_toggles_apply_one_after_another(store: &dyn Store) {
    let anna = add_user(store, "anna", Role::Member).await;
    let casual = store.insert_category("Casual").await.unwrap();
    let post = add_post(store, anna.user_id, &casual, "a.jpg").await;
    let mut fans = Vec::new();
    for name in ["fan1", "fan2", "fan3", "fan4"] {
        fans.push(add_user(store, name, Role::Member).await.user_id);
    }

    let (a, b, c, d) = tokio::join!(
        store.toggle_like(fans[0], post),
        store.toggle_like(fans[1], post),
        store.toggle_like(fans[2], post),
        store.toggle_like(fans[3], post),
    );
    for toggle in [a, b, c, d] {
        assert_eq!(toggle.unwrap().outcome, LikeOutcome::Liked);
    }
    assert_eq!(store.count_likes(post).await.unwrap(), 4);

    // Same pair twice at once: one unlike, one like, in some order.
    let (x, y) = tokio::join!(
        store.toggle_like(fans[0], post),
        store.toggle_like(fans[0], post),
    );
    let (x, y) = (x.unwrap(), y.unwrap());
    assert_ne!(x.outcome, y.outcome);
    assert_eq!(store.count_likes(post).await.unwrap(), 4);
}
