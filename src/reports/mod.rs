use afterburner::api::AnnotatedLine;
use afterburner::hints::overrides::OverrideEntry;
use afterburner::hints::{parse_override_pattern, Hint, OverrideSlot};
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use strum::IntoEnumIterator;

const COLS: usize = 20;

fn hint_color(hint: Hint) -> Option<Color> {
    match hint {
        Hint::None => None,
        Hint::Magic => Some(Color::Cyan),
        Hint::SkipMagic => Some(Color::Magenta),
    }
}

fn hint_marker(hint: Hint) -> &'static str {
    match hint {
        Hint::None => "",
        Hint::Magic => "#",
        Hint::SkipMagic => "$",
    }
}

fn char_cell(c: char, hint: Hint) -> Cell {
    let label = match c {
        ' ' => "␣".to_string(),
        '\t' => "⇥".to_string(),
        c => c.to_string(),
    };
    let cell = Cell::new(label).set_alignment(CellAlignment::Center);
    match hint_color(hint) {
        Some(color) => cell.bg(color).fg(Color::Black).add_attribute(Attribute::Bold),
        None => cell,
    }
}

/// Text row over marker row, wrapped every `COLS` characters.
pub fn print_line_hints(line: &AnnotatedLine) {
    println!("\nLine {}: {}", line.line + 1, line.text);
    if line.text.is_empty() {
        return;
    }

    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    let chars: Vec<char> = line.text.chars().collect();
    for (chunk_chars, chunk_hints) in chars.chunks(COLS).zip(line.hints.chunks(COLS)) {
        let text_row: Vec<Cell> = chunk_chars
            .iter()
            .zip(chunk_hints)
            .map(|(&c, &h)| char_cell(c, h))
            .collect();
        let marker_row: Vec<Cell> = chunk_hints
            .iter()
            .map(|&h| Cell::new(hint_marker(h)).set_alignment(CellAlignment::Center))
            .collect();
        table.add_row(text_row);
        table.add_row(marker_row);
    }
    println!("{}", table);
}

pub fn print_hint_summary(lines: &[AnnotatedLine]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Hint").add_attribute(Attribute::Bold),
        Cell::new("Marker"),
        Cell::new("Count"),
    ]);

    for hint in Hint::iter() {
        let count: usize = lines.iter().map(|l| l.count(hint)).sum();
        let mut name = Cell::new(hint.to_string());
        if let Some(color) = hint_color(hint) {
            name = name.fg(color);
        }
        table.add_row(vec![
            name,
            Cell::new(hint_marker(hint)).set_alignment(CellAlignment::Center),
            Cell::new(count).set_alignment(CellAlignment::Right),
        ]);
    }

    println!("\n{}", table);
}

pub fn print_override_table(entries: &[OverrideEntry]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Word").add_attribute(Attribute::Bold),
        Cell::new("Pattern"),
        Cell::new("Magic").fg(Color::Cyan),
        Cell::new("Skip").fg(Color::Magenta),
    ]);

    for entry in entries {
        let slots = parse_override_pattern(&entry.pattern);
        let count = |target: Hint| {
            slots
                .iter()
                .filter(|s| s.forced() == Some(target))
                .count()
        };
        table.add_row(vec![
            Cell::new(&entry.word),
            Cell::new(&entry.pattern),
            Cell::new(count(Hint::Magic)).set_alignment(CellAlignment::Right),
            Cell::new(count(Hint::SkipMagic)).set_alignment(CellAlignment::Right),
        ]);
    }

    println!("{}", table);
    println!("{} word overrides", entries.len());
}

pub fn print_override_slots(word: &str, slots: &[OverrideSlot]) {
    println!("\nOverride: {}", word);
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    let letters: Vec<Cell> = word
        .chars()
        .zip(slots)
        .map(|(c, slot)| char_cell(c, slot.forced().unwrap_or_default()))
        .collect();
    let names: Vec<Cell> = slots
        .iter()
        .map(|slot| match slot.forced() {
            Some(hint) => Cell::new(hint.to_string()),
            None => Cell::new("rules"),
        })
        .collect();

    table.add_row(letters);
    table.add_row(names);
    println!("{}", table);
}
