use crate::cli::output::{section_header, tree_item};
use anyhow::Result;
use clap::Args;
use seqalign_bio::translate;
use seqalign_core::{Config, OutputFormat};

#[derive(Args)]
pub struct TranslateArgs {
    /// RNA or DNA sequence (T is read as U)
    #[arg(value_name = "SEQ")]
    pub sequence: String,

    /// Output format (defaults to the config file's [output] format)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

pub fn run(args: TranslateArgs, config: &Config) -> Result<()> {
    let translation = translate(&args.sequence)?;

    match args.format.unwrap_or(config.output.format) {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&translation)?),
        OutputFormat::Text => {
            section_header("Translation");
            tree_item(false, "Protein", Some(&translation.protein));
            tree_item(false, "Length", Some(&translation.protein.len().to_string()));
            tree_item(false, "Start codon", Some(&translation.start.to_string()));
            tree_item(true, "Stop codon", Some(&translation.stop.to_string()));
        }
    }
    Ok(())
}
