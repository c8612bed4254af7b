//! Command semantics of the collection store.

use gallery_model::{Item, ItemId, ItemSnapshot};
use gallery_store::{CollectionState, CollectionStore, Command, Outcome, reduce};

fn item(id: u64, title: &str, url: &str) -> Item {
    Item::new(ItemId::new(id), title, url, url)
}

fn snapshot(id: u64, title: &str, url: &str) -> ItemSnapshot {
    ItemSnapshot {
        id: ItemId::new(id),
        title: title.to_string(),
        url: url.to_string(),
        thumbnail_url: url.to_string(),
    }
}

#[test]
fn change_add_remove_scenario() {
    let mut store = CollectionStore::new();
    store.set_items(vec![item(1, "A", "http://a")]);
    store.select(ItemId::new(1));

    assert_eq!(store.change_item("A2", "http://a", None), Outcome::Applied);
    let expected = Item {
        id: ItemId::new(1),
        title: "A2".to_string(),
        url: "http://a".to_string(),
        thumbnail_url: "http://a".to_string(),
        fallback: Some(snapshot(1, "A", "http://a")),
    };
    assert_eq!(store.items(), &[expected]);

    assert_eq!(store.add_image(ItemId::new(1), "blob://x"), Outcome::Applied);
    let added = &store.items()[0];
    assert_eq!(added.url, "blob://x");
    assert_eq!(added.thumbnail_url, "http://a");
    assert_eq!(added.fallback, Some(snapshot(1, "A", "http://a")));

    assert_eq!(store.remove_image(ItemId::new(1)), Outcome::Applied);
    assert_eq!(store.items(), &[item(1, "A", "http://a")]);
}

#[test]
fn remove_right_after_add_restores_item() {
    let original = item(5, "five", "http://five");
    let state = CollectionState::new(vec![item(4, "four", "http://four"), original.clone()]);

    let added = reduce(
        &state,
        Command::Add {
            item_id: ItemId::new(5),
            image_url: "blob://5".to_string(),
        },
    )
    .state;
    let reverted = reduce(
        &added,
        Command::Remove {
            item_id: ItemId::new(5),
        },
    )
    .state;

    assert_eq!(reverted.items[1], original);
    assert_eq!(reverted, state);
}

#[test]
fn repeated_add_keeps_first_fallback() {
    let state = CollectionState::new(vec![item(1, "A", "http://a")]);
    let once = reduce(
        &state,
        Command::Add {
            item_id: ItemId::new(1),
            image_url: "blob://1".to_string(),
        },
    )
    .state;
    let twice = reduce(
        &once,
        Command::Add {
            item_id: ItemId::new(1),
            image_url: "blob://2".to_string(),
        },
    )
    .state;
    assert_eq!(twice.items[0].url, "blob://2");

    let reverted = reduce(
        &twice,
        Command::Remove {
            item_id: ItemId::new(1),
        },
    )
    .state;
    assert_eq!(reverted.items[0], item(1, "A", "http://a"));
}

#[test]
fn missing_targets_leave_state_untouched() {
    let state = reduce(
        &CollectionState::new(vec![item(1, "A", "http://a")]),
        Command::Select { id: ItemId::new(99) },
    )
    .state;

    let commands = [
        Command::Change {
            title: "X".to_string(),
            url: "http://x".to_string(),
            image_url: None,
        },
        Command::Add {
            item_id: ItemId::new(99),
            image_url: "blob://x".to_string(),
        },
        Command::Remove {
            item_id: ItemId::new(99),
        },
    ];
    for command in commands {
        let transition = reduce(&state, command);
        assert_eq!(
            transition.outcome,
            Outcome::TargetMissing {
                id: Some(ItemId::new(99))
            }
        );
        assert_eq!(transition.state, state);
    }
}

#[test]
fn present_targets_are_applied() {
    let state = reduce(
        &CollectionState::new(vec![item(1, "A", "http://a"), item(2, "B", "http://b")]),
        Command::Select { id: ItemId::new(2) },
    )
    .state;

    let changed = reduce(
        &state,
        Command::Change {
            title: "B2".to_string(),
            url: "http://b2".to_string(),
            image_url: None,
        },
    );
    assert_eq!(changed.outcome, Outcome::Applied);
    assert_eq!(changed.state.items[0], state.items[0]);
    assert_eq!(changed.state.items[1].title, "B2");
    assert_eq!(changed.state.items[1].thumbnail_url, "http://b2");
}

#[test]
fn select_does_not_validate_id() {
    let state = CollectionState::default();
    let transition = reduce(&state, Command::Select { id: ItemId::new(7) });
    assert_eq!(transition.outcome, Outcome::Applied);
    assert_eq!(transition.state.selected_id, Some(ItemId::new(7)));
    assert!(transition.state.selected_item().is_none());
}
