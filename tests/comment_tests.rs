//! Comment thread tests.
//!
//! Covers content validation, newest-first listing with author profiles,
//! comment-triggered notifications, and edit/delete permissions.

use tcg_decks::{
    Card, CardCatalog, CardId, CardSelection, CommentError, CommentStore, CommentThreads, DeckId,
    DeckService, EnergySelection, EnergyType, EventId, MemoryStores, NotificationKind,
    NotificationStore, TargetRef, User, UserId, UserStore,
};

fn setup() -> (MemoryStores, DeckId) {
    let mut catalog = CardCatalog::new();
    for id in 1..=2 {
        catalog.register(Card::new(
            CardId::new(id),
            format!("Card {id}"),
            format!("Card {id}"),
            EnergyType::Grass,
        ));
    }
    let stores = MemoryStores::new(catalog);

    UserStore::create(
        &stores,
        User::new(UserId::new(1), "owner").with_avatar("https://cdn.example/owner.png"),
    )
    .unwrap();
    UserStore::create(&stores, User::new(UserId::new(2), "guest")).unwrap();

    let deck_service = DeckService::new(stores.catalog(), &stores, &stores);
    let deck = deck_service
        .create(
            UserId::new(1),
            &tcg_decks::DeckPayload {
                name: "Grass".into(),
                description: String::new(),
                is_public: true,
                main_energy: vec![EnergyType::Grass],
                tags: vec![],
                cards: vec![
                    CardSelection { card_id: CardId::new(1), count: 4 },
                    CardSelection { card_id: CardId::new(2), count: 4 },
                ],
                energy: vec![EnergySelection { energy: EnergyType::Grass, count: 52 }],
            },
        )
        .unwrap();

    (stores, deck.id)
}

fn threads(stores: &MemoryStores) -> CommentThreads<'_> {
    CommentThreads::new(stores, stores, stores, stores)
}

/// Whitespace-only content is rejected before anything is persisted.
#[test]
fn test_whitespace_comment_rejected_before_persistence() {
    let (stores, deck) = setup();
    let threads = threads(&stores);

    let err = threads
        .submit(UserId::new(2), TargetRef::Deck(deck), "   ")
        .unwrap_err();
    assert!(matches!(err, CommentError::EmptyContent));

    assert!(stores.find_for_target(TargetRef::Deck(deck)).unwrap().is_empty());
    assert!(stores.find_for_user(UserId::new(1)).unwrap().is_empty());
}

/// Content is stored trimmed.
#[test]
fn test_content_is_trimmed() {
    let (stores, deck) = setup();
    let comment = threads(&stores)
        .submit(UserId::new(2), TargetRef::Deck(deck), "  solid list  ")
        .unwrap();
    assert_eq!(comment.content, "solid list");
}

/// Commenting on someone else's deck notifies the owner; commenting on
/// your own does not.
#[test]
fn test_comment_notification_crosses_users_only() {
    let (stores, deck) = setup();
    let threads = threads(&stores);

    threads
        .submit(UserId::new(2), TargetRef::Deck(deck), "nice curve")
        .unwrap();

    let owner_inbox = stores.find_for_user(UserId::new(1)).unwrap();
    assert_eq!(owner_inbox.len(), 1);
    assert_eq!(owner_inbox[0].kind, NotificationKind::Comment);
    assert_eq!(owner_inbox[0].triggered_by, Some(UserId::new(2)));

    threads
        .submit(UserId::new(1), TargetRef::Deck(deck), "thanks!")
        .unwrap();
    assert_eq!(stores.find_for_user(UserId::new(1)).unwrap().len(), 1);
}

/// Threads list newest-first with author username and avatar joined.
#[test]
fn test_thread_is_newest_first_with_profiles() {
    let (stores, deck) = setup();
    let threads = threads(&stores);
    let target = TargetRef::Deck(deck);

    threads.submit(UserId::new(1), target, "first").unwrap();
    threads.submit(UserId::new(2), target, "second").unwrap();

    let thread = threads.thread(target).unwrap();
    assert_eq!(thread.len(), 2);
    assert_eq!(thread[0].comment.content, "second");
    assert_eq!(thread[0].author_name, "guest");
    assert_eq!(thread[1].author_name, "owner");
    assert_eq!(
        thread[1].author_avatar.as_deref(),
        Some("https://cdn.example/owner.png")
    );
}

/// Comments whose author account is gone still render, marked deleted.
#[test]
fn test_thread_tolerates_missing_author() {
    let (stores, deck) = setup();
    let threads = threads(&stores);
    let target = TargetRef::Deck(deck);

    // UserId 9 has no profile record.
    threads.submit(UserId::new(9), target, "drive-by").unwrap();

    let thread = threads.thread(target).unwrap();
    assert_eq!(thread[0].author_name, "[deleted]");
    assert!(thread[0].author_avatar.is_none());
}

/// Commenting on a missing target is a not-found condition, and nothing
/// is persisted.
#[test]
fn test_missing_target_is_not_found() {
    let (stores, _) = setup();
    let threads = threads(&stores);
    let target = TargetRef::Deck(DeckId::new(999));

    assert!(matches!(
        threads.submit(UserId::new(2), target, "hello?"),
        Err(CommentError::TargetNotFound(_))
    ));
    assert!(stores.find_for_target(target).unwrap().is_empty());
}

/// Events resolve their owner through the same path as decks.
#[test]
fn test_event_comment_notifies_event_owner() {
    let (stores, _) = setup();
    stores.set_event_owner(EventId::new(5), UserId::new(1)).unwrap();

    threads(&stores)
        .submit(UserId::new(2), TargetRef::Event(EventId::new(5)), "see you there")
        .unwrap();

    let inbox = stores.find_for_user(UserId::new(1)).unwrap();
    assert_eq!(inbox.len(), 1);
    assert_eq!(inbox[0].kind, NotificationKind::Comment);
}

/// Edits are author-only and re-run the content rules.
#[test]
fn test_edit_rules() {
    let (stores, deck) = setup();
    let threads = threads(&stores);

    let comment = threads
        .submit(UserId::new(2), TargetRef::Deck(deck), "original")
        .unwrap();

    assert!(matches!(
        threads.edit(UserId::new(1), comment.id, "hijacked"),
        Err(CommentError::NotAuthor { .. })
    ));
    assert!(matches!(
        threads.edit(UserId::new(2), comment.id, "   "),
        Err(CommentError::EmptyContent)
    ));

    let edited = threads.edit(UserId::new(2), comment.id, "revised").unwrap();
    assert_eq!(edited.content, "revised");
    assert!(edited.updated_at >= edited.created_at);
}

/// Deletes are author-or-admin.
#[test]
fn test_delete_permissions() {
    let (stores, deck) = setup();
    let threads = threads(&stores);

    UserStore::create(&stores, User::new(UserId::new(3), "mod").admin()).unwrap();

    let comment = threads
        .submit(UserId::new(2), TargetRef::Deck(deck), "to be removed")
        .unwrap();

    assert!(matches!(
        threads.delete(UserId::new(1), comment.id),
        Err(CommentError::NotAuthor { .. })
    ));

    threads.delete(UserId::new(3), comment.id).unwrap();
    assert!(CommentStore::find(&stores, comment.id).unwrap().is_none());
}
