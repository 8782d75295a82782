/// Standard output utilities for consistent command formatting
use colored::*;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color as TableColor, ContentArrangement, Table};
use seqalign_bio::alignment::{AlignmentResult, DpMatrix, TraceMode, GAP};
use seqalign_bio::Sequence;

/// Aligned columns per printed block
const BLOCK_WIDTH: usize = 60;

/// Display a section header
pub fn section_header(title: &str) {
    println!("\n{}", title.bold().cyan());
}

/// Tree structure item
pub fn tree_item(is_last: bool, label: &str, value: Option<&str>) {
    let prefix = if is_last { "└─" } else { "├─" };
    if let Some(val) = value {
        println!("{} {}: {}", prefix.dimmed(), label, val);
    } else {
        println!("{} {}", prefix.dimmed(), label);
    }
}

/// Create a standard table with our preferred styling
pub fn create_standard_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Create a standard header cell
pub fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .add_attribute(Attribute::Bold)
        .fg(TableColor::Cyan)
}

pub fn mode_title(mode: TraceMode) -> &'static str {
    match mode {
        TraceMode::Global => "Global alignment",
        TraceMode::Local => "Local alignment",
    }
}

/// Print an alignment's score, statistics and the aligned rows
pub fn print_alignment(result: &AlignmentResult) {
    section_header(mode_title(result.mode));

    let stats = &result.stats;
    tree_item(false, "Score", Some(&result.score.to_string()));
    tree_item(
        false,
        "Identity",
        Some(&format!(
            "{:.1}% ({}/{})",
            stats.identity * 100.0,
            stats.matches,
            stats.length
        )),
    );
    tree_item(false, "Mismatches", Some(&stats.mismatches.to_string()));
    tree_item(false, "Gaps", Some(&stats.gaps.to_string()));
    tree_item(
        true,
        "Cells",
        Some(&format!(
            "({}, {}) → ({}, {})",
            result.start.row, result.start.col, result.end.row, result.end.col
        )),
    );

    if result.is_empty() {
        println!("\n  {}", "(empty alignment)".dimmed());
        return;
    }

    for block in alignment_blocks(result) {
        println!();
        for line in block {
            println!("  {}", line);
        }
    }
}

/// Aligned rows split into blocks of [`BLOCK_WIDTH`] columns, each block
/// being the `A`, midline and `B` lines
pub fn alignment_blocks(result: &AlignmentResult) -> Vec<[String; 3]> {
    let rows = [
        result.aligned_a.as_bytes(),
        result.midline.as_bytes(),
        result.aligned_b.as_bytes(),
    ];
    // Offsets of the first symbol of each sequence in the current block
    let mut pos_a = result.start.row;
    let mut pos_b = result.start.col;
    let mut blocks = Vec::new();

    for start in (0..result.len()).step_by(BLOCK_WIDTH) {
        let end = (start + BLOCK_WIDTH).min(result.len());
        let chunk = |row: &[u8]| -> String { row[start..end].iter().map(|&b| b as char).collect() };
        let a = chunk(rows[0]);
        let b = chunk(rows[2]);

        blocks.push([
            format!("A {:>6} {}", pos_a + 1, a),
            format!("  {:>6} {}", "", chunk(rows[1])),
            format!("B {:>6} {}", pos_b + 1, b),
        ]);

        pos_a += symbols_in(&a);
        pos_b += symbols_in(&b);
    }
    blocks
}

fn symbols_in(row: &str) -> usize {
    row.bytes().filter(|&b| b != GAP).count()
}

/// Render a filled matrix as a table of scores with the move that produced
/// each cell. The reported cell is highlighted.
pub fn matrix_table(matrix: &DpMatrix, a: &Sequence, b: &Sequence) -> Table {
    let mut table = create_standard_table();

    let mut header = vec![header_cell(""), header_cell("-")];
    header.extend(
        b.as_bytes()
            .iter()
            .map(|&symbol| header_cell(&(symbol as char).to_string())),
    );
    table.set_header(header);

    let scores = matrix.scores();
    let directions = matrix.directions();
    for row in 0..matrix.rows() {
        let label = if row == 0 { GAP } else { a.as_bytes()[row - 1] };
        let mut cells = vec![header_cell(&(label as char).to_string())];

        for col in 0..matrix.cols() {
            let text = format!("{} {}", scores[(row, col)], directions[(row, col)].arrow());
            let mut cell = Cell::new(text).set_alignment(CellAlignment::Right);
            if (row, col) == (matrix.end().row, matrix.end().col) {
                cell = cell.add_attribute(Attribute::Bold).fg(TableColor::Green);
            }
            cells.push(cell);
        }
        table.add_row(cells);
    }
    table
}
