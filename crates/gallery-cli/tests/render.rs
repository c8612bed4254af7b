use gallery_cli::render::{page_footer, page_table};
use gallery_model::{Item, ItemId};
use gallery_page::{PageCursor, PageSize};

#[test]
fn footer_hidden_without_items() {
    let cursor = PageCursor::default();
    assert_eq!(page_footer(&cursor, 0), None);
}

#[test]
fn footer_reports_clamped_page() {
    let mut cursor = PageCursor::new(PageSize::new(30).unwrap());
    cursor.jump(500, 5000);
    assert_eq!(
        page_footer(&cursor, 5000).as_deref(),
        Some("Page 167 of 167 (5000 items)")
    );
}

#[test]
fn table_has_one_row_per_visible_item() {
    let items: Vec<Item> = (1..=4)
        .map(|id| Item::new(ItemId::new(id), format!("t{id}"), "http://u", "http://t"))
        .collect();
    let mut cursor = PageCursor::new(PageSize::new(3).unwrap());
    cursor.jump(2, items.len());

    let table = page_table(cursor.current(&items));

    assert_eq!(table.row_count(), 1);
    assert!(table.to_string().contains("t4"));
}
