use crate::cli::output::{matrix_table, print_alignment, section_header, tree_item};
use crate::cli::settings::{self, ScoringOverrides};
use anyhow::Result;
use clap::{Args, ValueEnum};
use seqalign_bio::alignment::DpMatrix;
use seqalign_bio::{AlignmentEngine, Sequence};
use seqalign_core::{Config, OutputFormat};
use serde_json::json;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum AlignMode {
    /// Global similarity score only
    Similarity,
    /// Minimum edit cost only
    EditDistance,
    /// Needleman-Wunsch alignment
    #[value(name = "alignment:global", alias = "global")]
    Global,
    /// Smith-Waterman alignment
    #[value(name = "alignment:local", alias = "local")]
    Local,
    /// All of the above
    #[default]
    Summary,
}

#[derive(Args)]
pub struct AlignArgs {
    /// First sequence (matrix rows)
    #[arg(value_name = "SEQ_A")]
    pub seq_a: String,

    /// Second sequence (matrix columns)
    #[arg(value_name = "SEQ_B")]
    pub seq_b: String,

    /// What to compute
    #[arg(short, long, value_enum, default_value_t = AlignMode::Summary)]
    pub mode: AlignMode,

    #[command(flatten)]
    pub scoring: ScoringOverrides,

    /// Output format (defaults to the config file's [output] format)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Also print the filled DP matrices
    #[arg(long)]
    pub show_matrix: bool,
}

pub fn run(args: AlignArgs, config: &Config) -> Result<()> {
    let engine = AlignmentEngine::new(
        settings::similarity_scoring(&config.scoring, &args.scoring)?,
        settings::cost_scoring(&config.edit_cost),
    );
    let a = Sequence::new("sequence A", args.seq_a.as_bytes())?;
    let b = Sequence::new("sequence B", args.seq_b.as_bytes())?;
    let format = args.format.unwrap_or(config.output.format);

    info!("Aligning {} x {} ({:?})", a.len(), b.len(), args.mode);

    match format {
        OutputFormat::Json => print_json(&engine, args.mode, &a, &b, args.show_matrix),
        OutputFormat::Text => print_text(&engine, args.mode, &a, &b, args.show_matrix),
    }
}

fn print_text(
    engine: &AlignmentEngine,
    mode: AlignMode,
    a: &Sequence,
    b: &Sequence,
    show_matrix: bool,
) -> Result<()> {
    match mode {
        AlignMode::Similarity => {
            println!("Similarity score: {}", engine.similarity(a, b)?);
        }
        AlignMode::EditDistance => {
            println!("Edit distance: {}", engine.edit_distance(a, b)?);
        }
        AlignMode::Global => print_alignment(&engine.global_alignment(a, b)?),
        AlignMode::Local => print_alignment(&engine.local_alignment(a, b)?),
        AlignMode::Summary => {
            let summary = engine.summary(a, b)?;
            section_header("Summary");
            tree_item(false, "Length A", Some(&a.len().to_string()));
            tree_item(false, "Length B", Some(&b.len().to_string()));
            tree_item(false, "Similarity score", Some(&summary.similarity.to_string()));
            tree_item(true, "Edit distance", Some(&summary.edit_distance.to_string()));
            print_alignment(&summary.global);
            print_alignment(&summary.local);
        }
    }

    if show_matrix {
        for (kind, matrix) in matrices(engine, mode, a, b)? {
            section_header(kind.title());
            println!("{}", matrix_table(&matrix, a, b));
        }
    }
    Ok(())
}

fn print_json(
    engine: &AlignmentEngine,
    mode: AlignMode,
    a: &Sequence,
    b: &Sequence,
    show_matrix: bool,
) -> Result<()> {
    let mut value = match mode {
        AlignMode::Similarity => json!({ "similarity": engine.similarity(a, b)? }),
        AlignMode::EditDistance => json!({ "edit_distance": engine.edit_distance(a, b)? }),
        AlignMode::Global => serde_json::to_value(engine.global_alignment(a, b)?)?,
        AlignMode::Local => serde_json::to_value(engine.local_alignment(a, b)?)?,
        AlignMode::Summary => serde_json::to_value(engine.summary(a, b)?)?,
    };

    if show_matrix {
        let rendered: serde_json::Map<String, serde_json::Value> = matrices(engine, mode, a, b)?
            .into_iter()
            .map(|(kind, matrix)| {
                let scores: Vec<&[i32]> =
                    (0..matrix.rows()).map(|row| matrix.scores().row(row)).collect();
                let directions: Vec<String> = (0..matrix.rows())
                    .map(|row| {
                        matrix
                            .directions()
                            .row(row)
                            .iter()
                            .map(|d| d.arrow())
                            .collect()
                    })
                    .collect();
                (
                    kind.key().to_string(),
                    json!({ "scores": scores, "directions": directions }),
                )
            })
            .collect();
        if let Some(object) = value.as_object_mut() {
            object.insert("matrices".to_string(), serde_json::Value::Object(rendered));
        }
    }

    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MatrixKind {
    Global,
    EditCost,
    Local,
}

impl MatrixKind {
    fn title(self) -> &'static str {
        match self {
            MatrixKind::Global => "Global matrix",
            MatrixKind::EditCost => "Edit cost matrix",
            MatrixKind::Local => "Local matrix",
        }
    }

    fn key(self) -> &'static str {
        match self {
            MatrixKind::Global => "global",
            MatrixKind::EditCost => "edit_distance",
            MatrixKind::Local => "local",
        }
    }
}

/// Matrices behind a mode's output
fn matrices(
    engine: &AlignmentEngine,
    mode: AlignMode,
    a: &Sequence,
    b: &Sequence,
) -> Result<Vec<(MatrixKind, DpMatrix)>> {
    let kinds: &[MatrixKind] = match mode {
        AlignMode::Similarity | AlignMode::Global => &[MatrixKind::Global],
        AlignMode::EditDistance => &[MatrixKind::EditCost],
        AlignMode::Local => &[MatrixKind::Local],
        AlignMode::Summary => &[MatrixKind::Global, MatrixKind::EditCost, MatrixKind::Local],
    };

    kinds
        .iter()
        .map(|&kind| {
            let matrix = match kind {
                MatrixKind::Global => engine.global_matrix(a, b)?,
                MatrixKind::EditCost => engine.edit_matrix(a, b)?,
                MatrixKind::Local => engine.local_matrix(a, b)?,
            };
            Ok((kind, matrix))
        })
        .collect()
}
