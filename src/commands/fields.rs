use anyhow::Result;
use tracing::{info, warn};

use crate::cli::FieldsArgs;
use crate::fill;

pub fn run(args: FieldsArgs) -> Result<()> {
    let fields = fill::template_fields(&args.template_path)?;

    if fields.is_empty() {
        warn!(
            path = %args.template_path.display(),
            "template contains no named form fields"
        );
        return Ok(());
    }

    for field in &fields {
        info!(
            name = %field.name,
            field_type = %field.field_type,
            value = %field.value,
            "form field"
        );
    }

    info!(
        path = %args.template_path.display(),
        field_count = fields.len(),
        "template inspected"
    );

    Ok(())
}
