use gallery_model::{Item, ItemId};
use gallery_store::{CollectionState, Command, reduce};
use gallery_validate::{EditForm, Field, Issue};

fn state_with_selection(selected: u64) -> CollectionState {
    let state = CollectionState::new(vec![
        Item::new(ItemId::new(1), "Sunset", "http://photos/1", "http://photos/1"),
        Item::new(ItemId::new(2), "Harbor", "http://photos/2", "http://photos/2"),
    ]);
    reduce(
        &state,
        Command::Select {
            id: ItemId::new(selected),
        },
    )
    .state
}

#[test]
fn valid_form_builds_change_and_resets() {
    let state = state_with_selection(1);
    let mut form = EditForm::new()
        .with_id("1")
        .with_title("Sunrise")
        .with_url("http://photos/1");

    let command = form.submit(&state).expect("valid form");

    assert_eq!(
        command,
        Command::Change {
            title: "Sunrise".to_string(),
            url: "http://photos/1".to_string(),
            image_url: None,
        }
    );
    assert_eq!(form.title.value(), "");
}

#[test]
fn invalid_fields_are_all_reported() {
    let state = state_with_selection(1);
    let mut form = EditForm::new().with_id("2").with_title(" ").with_url("nope");

    let err = form.submit(&state).unwrap_err();

    assert_eq!(
        err.issues,
        vec![
            Issue::IdMismatch {
                selected: ItemId::new(1)
            },
            Issue::TitleEmpty,
            Issue::InvalidUrl,
        ]
    );
    assert_eq!(
        err.to_string(),
        "edit rejected: Id can't be change. Current card has Id: 1; \
         Title should not be empty; Please enter a valid URL"
    );
}

#[test]
fn duplicates_of_other_items_are_blocked() {
    let state = state_with_selection(1);
    let form = EditForm::new()
        .with_id("1")
        .with_title("harbor")
        .with_url("HTTP://PHOTOS/2");

    let issues = form.validate(&state);

    assert_eq!(issues, vec![Issue::DuplicateTitle, Issue::DuplicateUrl]);
    assert_eq!(issues[0].field(), Field::Title);
}

#[test]
fn visible_issues_wait_for_blur() {
    let state = state_with_selection(1);
    let mut form = EditForm::new().with_id("1").with_url("http://photos/9");
    assert!(form.visible_issues(&state).is_empty());

    form.title.blur();
    assert_eq!(form.visible_issues(&state), vec![Issue::TitleEmpty]);
}

#[test]
fn picked_image_flows_into_change() {
    let state = state_with_selection(2);
    let mut form = EditForm::new()
        .with_id("2")
        .with_title("Harbor at night")
        .with_url("http://photos/2b");

    let add = form.attach_image(&state, "blob://picked").unwrap();
    assert_eq!(
        add,
        Command::Add {
            item_id: ItemId::new(2),
            image_url: "blob://picked".to_string(),
        }
    );

    let change = form.submit(&state).unwrap();
    assert!(matches!(
        change,
        Command::Change { image_url: Some(ref image), .. } if image == "blob://picked"
    ));
    assert!(form.selected_file.is_none());
}

#[test]
fn revert_only_when_fallback_exists() {
    let state = state_with_selection(1);
    let form = EditForm::new();
    assert_eq!(form.revert_image(&state).unwrap(), None);

    let added = reduce(
        &state,
        Command::Add {
            item_id: ItemId::new(1),
            image_url: "blob://x".to_string(),
        },
    )
    .state;
    assert_eq!(
        form.revert_image(&added).unwrap(),
        Some(Command::Remove {
            item_id: ItemId::new(1)
        })
    );
}

#[test]
fn nothing_selected_blocks_every_action() {
    let state = CollectionState::new(vec![]);
    let mut form = EditForm::new().with_title("t").with_url("http://t");

    assert_eq!(form.validate(&state), vec![Issue::NothingSelected]);
    assert_eq!(
        form.attach_image(&state, "blob://x").unwrap_err().issues,
        vec![Issue::NothingSelected]
    );

    let dangling = reduce(&state, Command::Select { id: ItemId::new(4) }).state;
    assert_eq!(
        form.revert_image(&dangling).unwrap_err().issues,
        vec![Issue::UnknownItem { id: ItemId::new(4) }]
    );
}

#[test]
fn preset_file_is_sent_once() {
    let state = state_with_selection(1);
    let mut form = EditForm::new()
        .with_id("1")
        .with_title("Sunset again")
        .with_url("http://photos/1b")
        .with_selected_file(Some("blob://preset".to_string()));

    let first = form.submit(&state).unwrap();
    assert!(matches!(
        first,
        Command::Change { image_url: Some(ref image), .. } if image == "blob://preset"
    ));

    let mut form = form
        .with_id("1")
        .with_title("Sunset again")
        .with_url("http://photos/1b");
    let second = form.submit(&state).unwrap();
    assert!(matches!(second, Command::Change { image_url: None, .. }));
}
