//! Criterion evaluation for sequence variants.

pub mod consequence;
pub mod criteria;
pub mod nmd;
pub mod pvs1;

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};

use crate::common::{self, GenomeRelease};
use crate::defs::facts::VariantFacts;
use crate::defs::gene::GeneContext;
use crate::defs::variant::{SequenceVariant, Variant};
use crate::predictors::{EvalInput, Registry};

/// Command line arguments for `seqvars predict`.
#[derive(Debug, clap::Parser)]
pub struct Args {
    /// Genome release of the input coordinates.
    #[arg(long, value_enum, default_value_t = GenomeRelease::Grch38)]
    pub genome_release: GenomeRelease,
    /// Path to the JSON document with variant, gene context, and facts.
    #[arg(long)]
    pub path_input: String,
    /// Path to write the criterion results to (stdout if absent).
    #[arg(long)]
    pub path_output: Option<String>,
}

/// Input document for `seqvars predict`.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct PredictInput {
    /// The resolved sequence variant.
    pub variant: SequenceVariant,
    /// Gene and transcript context.
    pub gene_context: GeneContext,
    /// External facts about the variant.
    #[serde(default)]
    pub facts: VariantFacts,
}

/// Run the `seqvars predict` command.
pub fn run(common: &common::Args, args: &Args) -> Result<(), anyhow::Error> {
    tracing::info!("args_common = {:?}", &common);
    tracing::info!("args = {:?}", &args);
    tracing::info!(
        "evaluating on genome release {}",
        args.genome_release.name()
    );

    let input: PredictInput = serde_json::from_reader(BufReader::new(File::open(
        &args.path_input,
    )?))?;
    tracing::info!(
        "evaluating {} in gene {}",
        &input.variant,
        &input.gene_context.gene_symbol
    );

    let registry = Registry::new()?;
    let predictor = registry.resolve(&input.gene_context.gene_symbol);
    tracing::debug!("resolved predictor panel {}", predictor.panel);

    let variant = Variant::Seqvar(input.variant);
    let results = predictor.evaluate_all(&EvalInput {
        variant: &variant,
        ctx: &input.gene_context,
        facts: &input.facts,
    });

    if let Some(path_output) = &args.path_output {
        let mut writer = BufWriter::new(File::create(path_output)?);
        serde_json::to_writer_pretty(&mut writer, &results)?;
        writer.flush()?;
    } else {
        println!("{}", serde_json::to_string_pretty(&results)?);
    }

    tracing::info!("all done, have a nice day");
    Ok(())
}
