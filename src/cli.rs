use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "claimfill",
    version,
    about = "Claim-document extraction and appraisal form filling"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Fields(FieldsArgs),
    Extract(ExtractArgs),
    Fill(FillArgs),
}

#[derive(Args, Debug, Clone)]
pub struct FieldsArgs {
    #[arg(long)]
    pub template_path: PathBuf,
}

#[derive(Args, Debug, Clone)]
pub struct ExtractArgs {
    #[arg(long)]
    pub input: PathBuf,

    #[arg(long, value_enum, default_value_t = TemplateVariant::Generic)]
    pub variant: TemplateVariant,

    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct FillArgs {
    #[arg(long)]
    pub input: PathBuf,

    #[arg(long, value_enum)]
    pub variant: TemplateVariant,

    #[arg(long, default_value = "templates")]
    pub template_dir: PathBuf,

    #[arg(long)]
    pub template_path: Option<PathBuf>,

    #[arg(long)]
    pub output: Option<PathBuf>,

    #[arg(long)]
    pub report_path: Option<PathBuf>,
}

/// Supported template layouts. Unknown identifiers never reach the mapper;
/// clap rejects them at parse time.
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum TemplateVariant {
    Generic,
    Ontario,
    Atlantic,
    Alberta,
}

impl TemplateVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Generic => "generic",
            Self::Ontario => "ontario",
            Self::Atlantic => "atlantic",
            Self::Alberta => "alberta",
        }
    }

    pub fn template_filename(self) -> &'static str {
        match self {
            Self::Generic => "vehicle_generic.pdf",
            Self::Ontario => "vehicle_ontario.pdf",
            Self::Atlantic => "aviva_atlantic.pdf",
            Self::Alberta => "aviva_alberta.pdf",
        }
    }

    /// Pages of claim text consumed per variant: the generic layout prints
    /// everything on the first page, the insurer layouts span two.
    pub fn page_count(self) -> usize {
        match self {
            Self::Generic => 1,
            Self::Ontario | Self::Atlantic | Self::Alberta => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unrecognized_variant_identifier_is_rejected_at_parse_time() {
        let result = Cli::try_parse_from([
            "claimfill", "fill", "--input", "claim.pdf", "--variant", "quebec",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn each_supported_variant_identifier_parses_to_its_variant() {
        for (identifier, expected) in [
            ("generic", TemplateVariant::Generic),
            ("ontario", TemplateVariant::Ontario),
            ("atlantic", TemplateVariant::Atlantic),
            ("alberta", TemplateVariant::Alberta),
        ] {
            let cli = Cli::try_parse_from([
                "claimfill", "fill", "--input", "claim.pdf", "--variant", identifier,
            ])
            .expect("known variant parses");

            match cli.command {
                Commands::Fill(args) => assert_eq!(args.variant, expected),
                other => panic!("expected fill command, got {other:?}"),
            }
        }
    }
}
