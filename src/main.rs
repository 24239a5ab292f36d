mod args;
mod config;
mod reader;
mod writer;

use etl::models::PartyTables;
use etl::{Mart, PipelineInput, PipelineOptions, Result};

use std::{fs, path::Path};

use serde::Serialize;

fn main() -> Result {
    config::configure_app()?;

    log::debug!("Application configured. Beginning process...");

    let args = args::parse_args()?;
    log::debug!("Found data dir {:?}, output dir {:?}", args.data_dir, args.output_dir);

    let input = read_input(&args.data_dir)?;

    let mart = etl::run(input, PipelineOptions::default());
    log::info!("Pipeline complete: {} payment facts", mart.facts.len());

    write_mart(&args.output_dir, &mart)?;

    log::debug!("Application finished successfully!");

    Ok(())
}

/// Read each message-category directory into its parsed document stream
fn read_input(data_dir: &Path) -> Result<PipelineInput> {
    let input = PipelineInput {
        initiation: reader::read_documents(&data_dir.join("ISO20022_pain001"))?,
        settlement: reader::read_documents(&data_dir.join("ISO20022_pacs008"))?,
        status: reader::read_documents(&data_dir.join("ISO20022_pacs002"))?,
        statement: reader::read_documents(&data_dir.join("ISO20022_camt054"))?,
    };

    log::info!(
        "Read {} initiation, {} settlement, {} status, {} statement documents",
        input.initiation.len(),
        input.settlement.len(),
        input.status.len(),
        input.statement.len()
    );

    Ok(input)
}

/// Write every output table of the run as a CSV file under the output dir
fn write_mart(output_dir: &Path, mart: &Mart) -> Result {
    fs::create_dir_all(output_dir)?;

    write_table(output_dir, "FactPayments.csv", &mart.facts)?;

    match &mart.parties {
        PartyTables::Merged(parties) => {
            write_table(output_dir, "DimParty.csv", parties)?;
        }
        PartyTables::Split { debtors, creditors } => {
            write_table(output_dir, "DimPartyDebtor.csv", debtors)?;
            write_table(output_dir, "DimPartyCreditor.csv", creditors)?;
        }
    }

    write_table(output_dir, "DimStatus.csv", &mart.status_dimension)?;
    write_table(output_dir, "DimCurrency.csv", &mart.currency_dimension)?;
    write_table(output_dir, "DimPurpose.csv", &mart.purpose_dimension)?;
    write_table(output_dir, "DimTime.csv", &mart.time_dimension)?;

    Ok(())
}

fn write_table<S: Serialize>(output_dir: &Path, name: &str, rows: &[S]) -> Result {
    let rendered = writer::render_table(rows)?;

    let path = output_dir.join(name);
    fs::write(&path, rendered)?;

    log::info!("Wrote {} rows to {path:?}", rows.len());

    Ok(())
}
