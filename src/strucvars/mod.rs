//! Criterion evaluation for structural variants.

pub mod consequence;
pub mod criteria;
pub mod pvs1;

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};

use crate::common::{self, GenomeRelease};
use crate::defs::facts::VariantFacts;
use crate::defs::gene::GeneContext;
use crate::defs::variant::{StructuralVariant, Variant};
use crate::predictors::{EvalInput, Registry};

/// Command line arguments for `strucvars predict`.
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

/// Input document for `strucvars predict`.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct PredictInput {
    /// The resolved structural variant.
    pub variant: StructuralVariant,
    /// Gene and transcript context.
    pub gene_context: GeneContext,
    /// External facts about the variant.
    #[serde(default)]
    pub facts: VariantFacts,
}

/// Run the `strucvars predict` command.
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

    let variant = Variant::Strucvar(input.variant);
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

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use crate::defs::variant::{SvType, TandemStatus};

    #[test]
    fn predict_input_deserialization() -> Result<(), anyhow::Error> {
        let json = r#"{
            "variant": {
                "sv_type": "Dup",
                "chrom": "X",
                "start": 100,
                "stop": 200,
                "transcript_ids": ["NM_004992.4"],
                "tandem_status": "Proven"
            },
            "gene_context": {
                "gene_symbol": "MECP2",
                "hgnc_id": "HGNC:6990"
            }
        }"#;
        let input: super::PredictInput = serde_json::from_str(json)?;
        assert_eq!(SvType::Dup, input.variant.sv_type);
        assert_eq!(TandemStatus::Proven, input.variant.tandem_status);
        assert_eq!("MECP2", input.gene_context.gene_symbol);

        Ok(())
    }
}
