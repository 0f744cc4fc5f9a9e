mod common;

use link_shortener::domain::LinkError;
use link_shortener::domain::repositories::LinkStore;
use link_shortener::infrastructure::persistence::MemoryLinkStore;
use link_shortener::utils::slug_generator::SLUG_ALPHABET;
use std::sync::Arc;

#[tokio::test]
async fn test_create_allocates_five_char_slug() {
    let (service, store) = common::create_test_service();

    let link = service.create("https://www.google.com").await.unwrap();

    assert_eq!(link.slug.len(), 5);
    assert!(link.slug.bytes().all(|b| SLUG_ALPHABET.contains(&b)));
    assert_eq!(link.url, "https://www.google.com");

    let stored = store.find(&link.slug).await.unwrap();
    assert_eq!(stored.created_at, link.created_at);
}

#[tokio::test]
async fn test_create_then_resolve() {
    let (service, _store) = common::create_test_service();

    let link = service.create("https://www.google.com").await.unwrap();
    let url = service.resolve(&link.slug).await.unwrap();

    assert_eq!(url, "https://www.google.com");
}

#[tokio::test]
async fn test_resolve_unknown_slug() {
    let (service, _store) = common::create_test_service();

    let result = service.resolve("doesnotexist").await;

    assert!(matches!(result, Err(LinkError::NotFound)));
}

#[tokio::test]
async fn test_create_rejects_invalid_url() {
    let (service, store) = common::create_test_service();

    for url in ["", "google.com", "https://"] {
        let result = service.create(url).await;
        assert!(
            matches!(result, Err(LinkError::InvalidInput(_))),
            "expected InvalidInput for {:?}",
            url
        );
    }

    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_list_returns_first_links_in_insertion_order() {
    let (service, store) = common::create_test_service();
    common::create_test_link(&store, "aaaaa", "https://www.google.com").await;
    common::create_test_link(&store, "bbbbb", "https://www.facebook.com").await;
    common::create_test_link(&store, "ccccc", "https://www.twitter.com").await;

    let links = service.list(2, 0).await.unwrap();

    let slugs: Vec<_> = links.iter().map(|l| l.slug.as_str()).collect();
    assert_eq!(slugs, vec!["aaaaa", "bbbbb"]);
}

#[tokio::test]
async fn test_list_skip_past_end_is_empty() {
    let (service, store) = common::create_test_service();
    common::create_test_link(&store, "aaaaa", "https://www.google.com").await;

    let links = service.list(10, 5).await.unwrap();

    assert!(links.is_empty());
}

#[tokio::test]
async fn test_delete_then_resolve_is_not_found() {
    let (service, store) = common::create_test_service();
    common::create_test_link(&store, "b4zoo", "https://www.google.com").await;

    service.delete("b4zoo").await.unwrap();

    assert!(matches!(
        service.resolve("b4zoo").await,
        Err(LinkError::NotFound)
    ));
    assert!(matches!(
        service.delete("b4zoo").await,
        Err(LinkError::NotFound)
    ));
}

#[tokio::test]
async fn test_cache_is_filled_on_create_and_evicted_on_delete() {
    let cache = Arc::new(MemoryLinkStore::new());
    let (service, store) = common::create_test_service_with_cache(cache.clone());

    let link = service.create("https://www.google.com").await.unwrap();
    assert_eq!(cache.find(&link.slug).await.unwrap().url, link.url);
    assert_eq!(store.len().await, 1);

    service.delete(&link.slug).await.unwrap();
    assert!(matches!(
        cache.find(&link.slug).await,
        Err(LinkError::NotFound)
    ));
}

#[tokio::test]
async fn test_resolve_served_from_cache() {
    let cache = Arc::new(MemoryLinkStore::new());
    common::create_test_link(&cache, "cached", "https://cached.example").await;
    let (service, store) = common::create_test_service_with_cache(cache);

    let url = service.resolve("cached").await.unwrap();

    assert_eq!(url, "https://cached.example");
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_concurrent_creates_get_distinct_slugs() {
    let (service, store) = common::create_test_service();
    let service = Arc::new(service);

    let handles: Vec<_> = (0..20)
        .map(|i| {
            let service = service.clone();
            tokio::spawn(async move { service.create(&format!("https://example.com/{}", i)).await })
        })
        .collect();

    let mut slugs = Vec::new();
    for handle in handles {
        slugs.push(handle.await.unwrap().unwrap().slug);
    }
    slugs.sort();
    slugs.dedup();

    assert_eq!(slugs.len(), 20);
    assert_eq!(store.len().await, 20);
}
