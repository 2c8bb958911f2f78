//! Promo code commands

use clap::{Args, Subcommand};
use clear_core::model::PromoCodeForm;
use clear_core::ops::promo_code_ops::SCHOLARSHIP_CODE_LENGTH;
use clear_core::ops::{
    generate_promo_code, promo_code_form_from_stored, scholarship_code, split_promo_code_update,
};
use clear_core::ClearConfig;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct PromoCodeArgs {
    #[command(subcommand)]
    pub command: PromoCodeCommand,
}

#[derive(Debug, Subcommand)]
pub enum PromoCodeCommand {
    /// Split an edit into the column update and metadata writes
    Split(SplitArgs),
    /// Print a random promo code
    Generate(GenerateArgs),
    /// Print create variables for a single-use 100% scholarship code
    Scholarship(ScholarshipArgs),
}

#[derive(Debug, Args)]
pub struct SplitArgs {
    #[arg(long)]
    pub id: String,

    pub original: PathBuf,

    pub edited: PathBuf,
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    #[arg(long, default_value_t = SCHOLARSHIP_CODE_LENGTH)]
    pub length: usize,
}

#[derive(Debug, Args)]
pub struct ScholarshipArgs {
    #[arg(long)]
    pub event: String,
}

pub fn execute(
    args: PromoCodeArgs,
    config: &ClearConfig,
) -> Result<String, Box<dyn std::error::Error>> {
    match args.command {
        PromoCodeCommand::Split(split_args) => execute_split(split_args, config),
        PromoCodeCommand::Generate(generate_args) => {
            Ok(generate_promo_code(generate_args.length, &mut rand::rng())?)
        }
        PromoCodeCommand::Scholarship(scholarship_args) => {
            let vars = scholarship_code(&scholarship_args.event, &mut rand::rng())?;
            Ok(serde_json::to_string_pretty(&vars)?)
        }
    }
}

fn read_form(path: &std::path::Path) -> Result<PromoCodeForm, Box<dyn std::error::Error>> {
    Ok(promo_code_form_from_stored(super::read_record(path)?)?)
}

fn execute_split(
    args: SplitArgs,
    config: &ClearConfig,
) -> Result<String, Box<dyn std::error::Error>> {
    let original = read_form(&args.original)?;
    let edited = read_form(&args.edited)?;
    let split = split_promo_code_update(&args.id, &original, &edited, config.equality)?;
    Ok(serde_json::to_string_pretty(&split)?)
}
