use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use bbz_editor::edition_page_title;
use bbz_model::{Edition, FormState, RelationshipEndpoint};

pub fn print_summary(edition: &Edition, state: &FormState) {
    println!("{} ({})", edition_page_title(Some(edition)), edition.bbid);
    if let Some(date) = state
        .edition_section
        .as_ref()
        .and_then(|section| section.release_date.as_ref())
        .filter(|date| date.has_year())
    {
        println!("Released: {}-{}-{}", date.year, date.month, date.day);
    }
    println!();
    println!("Aliases:");
    println!("{}", alias_table(state));
    println!();
    println!("Identifiers:");
    println!("{}", identifier_table(state));
    println!();
    println!("Relationships:");
    println!("{}", relationship_table(state));
}

fn alias_table(state: &FormState) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Key"),
        header_cell("Name"),
        header_cell("Sort name"),
        header_cell("Language"),
        header_cell("Primary"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Center);

    let name = &state.name_section;
    table.add_row(vec![
        Cell::new("default")
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold),
        Cell::new(&name.name).add_attribute(Attribute::Bold),
        Cell::new(&name.sort_name),
        optional_cell(name.language),
        flag_cell(name.primary.unwrap_or(false)),
    ]);
    for (key, row) in &state.alias_editor {
        table.add_row(vec![
            Cell::new(key),
            Cell::new(&row.name),
            Cell::new(&row.sort_name),
            optional_cell(row.language),
            flag_cell(row.primary),
        ]);
    }
    table
}

fn identifier_table(state: &FormState) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Key"),
        header_cell("Type"),
        header_cell("Value"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (key, row) in &state.identifier_editor {
        table.add_row(vec![
            Cell::new(key),
            optional_cell(row.identifier_type),
            Cell::new(&row.value),
        ]);
    }
    table
}

fn relationship_table(state: &FormState) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Row"),
        header_cell("Type"),
        header_cell("Source"),
        header_cell("Target"),
    ]);
    apply_table_style(&mut table);
    for (key, row) in &state.relationship_section.relationships {
        let label = if row.relationship_type.label.is_empty() {
            row.relationship_type.id.to_string()
        } else {
            format!("{} ({})", row.relationship_type.label, row.relationship_type.id)
        };
        table.add_row(vec![
            Cell::new(key),
            Cell::new(label),
            endpoint_cell(&row.source_entity),
            endpoint_cell(&row.target_entity),
        ]);
    }
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn endpoint_cell(endpoint: &RelationshipEndpoint) -> Cell {
    match &endpoint.bbid {
        Some(bbid) => {
            let name = endpoint
                .default_alias
                .as_ref()
                .map_or(bbid.as_str(), |alias| alias.name.as_str());
            Cell::new(format!("{} {}", endpoint.entity_type, name))
        }
        None => Cell::new(format!("{} (new)", endpoint.entity_type)).fg(Color::Green),
    }
}

fn optional_cell(value: Option<i64>) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => dim_cell("-"),
    }
}

fn flag_cell(value: bool) -> Cell {
    if value {
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

#[cfg(test)]
mod tests {
    use super::*;
    use bbz_model::{AliasRow, EntityType, RelationshipRow, RelationshipType, RowKey};

    #[test]
    fn alias_table_lists_name_section_first() {
        let mut state = FormState::default();
        state.name_section.name = "Dune".to_string();
        state.alias_editor.insert(
            RowKey::Persisted(12),
            AliasRow {
                id: Some(12),
                name: "Duna".to_string(),
                sort_name: "Duna".to_string(),
                language: Some(153),
                primary: false,
                default: false,
            },
        );

        let rendered = alias_table(&state).to_string();
        let dune = rendered.find("Dune").expect("default alias row");
        let duna = rendered.find("Duna").expect("editor alias row");
        assert!(dune < duna);
        assert!(rendered.contains("153"));
    }

    #[test]
    fn unsaved_endpoint_is_marked_new() {
        let mut state = FormState::default();
        state.relationship_section.relationships.insert(
            RowKey::New(0),
            RelationshipRow {
                attribute_set_id: None,
                relationship_type: RelationshipType::with_id(10),
                row_id: RowKey::New(0),
                source_entity: RelationshipEndpoint::unsaved(EntityType::Edition),
                target_entity: RelationshipEndpoint {
                    bbid: Some("w-1".to_string()),
                    entity_type: EntityType::Work,
                    default_alias: None,
                    disambiguation: None,
                },
            },
        );

        let rendered = relationship_table(&state).to_string();
        assert!(rendered.contains("n0"));
        assert!(rendered.contains("Edition (new)"));
        assert!(rendered.contains("Work w-1"));
    }
}
