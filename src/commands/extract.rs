use std::fs;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::cli::ExtractArgs;
use crate::{extract, normalize, pdf_text};

pub fn run(args: ExtractArgs) -> Result<()> {
    let bytes = fs::read(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;

    let text = pdf_text::document_text(&bytes, args.variant.page_count())?;
    let raw = extract::extract_fields(&text);
    let missing = extract::missing_fields(&raw);
    let record = normalize::normalize(&raw);

    if !missing.is_empty() {
        warn!(
            missing = ?missing,
            "expected fields did not match any pattern"
        );
    }

    if args.json {
        let rendered = serde_json::to_string_pretty(&record)
            .context("failed to serialize canonical record")?;
        println!("{rendered}");
        return Ok(());
    }

    info!(
        claim_number = %record.claim_number,
        policy_number = %record.policy_number,
        company_name = %record.company_name,
        date_of_loss = %record.date_of_loss,
        owner_name = %record.owner_name,
        owner_address = %record.owner_address,
        city = %record.city,
        state_prefix = %record.state_prefix,
        post_code = %record.post_code,
        phone_number = %record.phone_number,
        vin = %record.vin,
        make = %record.make,
        model_year = %record.model_year,
        color = %record.color,
        mileage = %record.mileage,
        license_plate = %record.license_plate,
        assignment_sent_date = %record.assignment_sent_date,
        adjuster_email = %record.adjuster_email,
        formatted_date = %record.formatted_date,
        "canonical record"
    );

    Ok(())
}
