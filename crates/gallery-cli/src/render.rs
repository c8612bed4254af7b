//! Page rendering for the terminal.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ColumnConstraint, ContentArrangement, Table, Width};

use gallery_model::Item;
use gallery_page::PageCursor;

pub fn page_table(items: &[Item]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Id"),
        header_cell("Title"),
        header_cell("Url"),
        header_cell("Thumbnail"),
        header_cell("Edited"),
    ]);
    apply_table_style(&mut table);
    for item in items {
        table.add_row(vec![
            Cell::new(item.id).fg(Color::Blue).add_attribute(Attribute::Bold),
            Cell::new(&item.title),
            Cell::new(&item.url),
            dim_cell(&item.thumbnail_url),
            edited_cell(item),
        ]);
    }
    table
}

/// `Page X of Y (N items)`, or `None` when there is nothing to paginate.
pub fn page_footer(cursor: &PageCursor, total_items: usize) -> Option<String> {
    if !cursor.has_controls(total_items) {
        return None;
    }
    Some(format!(
        "Page {} of {} ({} items)",
        cursor.current_page(),
        cursor.page_count(total_items),
        total_items
    ))
}

pub fn print_page(items: &[Item], cursor: &PageCursor) {
    let visible = cursor.current(items);
    match page_footer(cursor, items.len()) {
        Some(footer) => {
            println!("{}", page_table(visible));
            println!("{footer}");
        }
        None => println!("No items"),
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
    if table.column_count() >= 5 {
        table.set_constraints(vec![
            ColumnConstraint::LowerBoundary(Width::Fixed(4)),
            ColumnConstraint::UpperBoundary(Width::Percentage(40)),
            ColumnConstraint::UpperBoundary(Width::Percentage(25)),
            ColumnConstraint::UpperBoundary(Width::Percentage(25)),
            ColumnConstraint::LowerBoundary(Width::Fixed(6)),
        ]);
    }
}

fn edited_cell(item: &Item) -> Cell {
    if item.has_fallback() {
        Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell("-")
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
