use super::*;

/// Tests loading when no file exists.
///
/// Expected: None
#[tokio::test]
async fn load_returns_none_without_file() {
    let test = TestBuilder::new().build().await.unwrap();
    let cache = MessageIdCache::new(&test.message_id_path);

    assert_eq!(cache.load().await, None);
}

/// Tests loading a previously saved id.
///
/// Expected: Some(saved id)
#[tokio::test]
async fn load_returns_saved_id() {
    let test = TestBuilder::new()
        .with_saved_message_id(1465977472125374999)
        .build()
        .await
        .unwrap();
    let cache = MessageIdCache::new(&test.message_id_path);

    assert_eq!(
        cache.load().await,
        Some(MessageId::new(1465977472125374999))
    );
}

/// Tests loading tolerates surrounding whitespace.
///
/// Expected: Some(id)
#[tokio::test]
async fn load_trims_whitespace() {
    let test = TestBuilder::new()
        .with_cache_contents("  123456789\n")
        .build()
        .await
        .unwrap();
    let cache = MessageIdCache::new(&test.message_id_path);

    assert_eq!(cache.load().await, Some(MessageId::new(123456789)));
}

/// Tests loading unparsable content.
///
/// Verifies that garbage, negative, and zero values are treated as no saved id
/// rather than surfacing an error.
///
/// Expected: None for each
#[tokio::test]
async fn load_returns_none_for_invalid_contents() {
    for contents in ["not-a-number", "-5", "0", ""] {
        let test = TestBuilder::new()
            .with_cache_contents(contents)
            .build()
            .await
            .unwrap();
        let cache = MessageIdCache::new(&test.message_id_path);

        assert_eq!(cache.load().await, None, "contents {:?}", contents);
    }
}

/// Tests that save overwrites prior content.
///
/// Expected: file holds only the decimal form of the new id
#[tokio::test]
async fn save_overwrites_previous_id() {
    let test = TestBuilder::new()
        .with_saved_message_id(111)
        .build()
        .await
        .unwrap();
    let cache = MessageIdCache::new(&test.message_id_path);

    cache.save(MessageId::new(222)).await.unwrap();

    assert_eq!(test.read_cache().await.as_deref(), Some("222"));
    assert_eq!(cache.load().await, Some(MessageId::new(222)));
}

/// Tests saving to a path whose directory does not exist.
///
/// Verifies the failure is returned to the caller instead of panicking, and a
/// later load still reports no saved id.
///
/// Expected: Err from save, None from load
#[tokio::test]
async fn save_reports_unwritable_path() {
    let test = TestBuilder::new().with_unwritable_cache().build().await.unwrap();
    let cache = MessageIdCache::new(&test.message_id_path);

    assert!(cache.save(MessageId::new(333)).await.is_err());
    assert_eq!(cache.load().await, None);
}
