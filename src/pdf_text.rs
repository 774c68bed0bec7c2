use lopdf::Document;

use crate::error::PipelineError;

/// Extracts plain text from the first `max_pages` pages of an uploaded
/// document, joined with a newline. How many pages to read is the caller's
/// decision; the variant determines it.
pub fn document_text(bytes: &[u8], max_pages: usize) -> Result<String, PipelineError> {
    let document = Document::load_mem(bytes).map_err(PipelineError::bad_document)?;

    let page_numbers: Vec<u32> = document
        .get_pages()
        .keys()
        .copied()
        .take(max_pages)
        .collect();
    if page_numbers.is_empty() {
        return Err(PipelineError::bad_document("document has no pages"));
    }

    let mut pages = Vec::with_capacity(page_numbers.len());
    for page_number in page_numbers {
        let text = document
            .extract_text(&[page_number])
            .map_err(PipelineError::bad_document)?;
        pages.push(text.trim_end().to_string());
    }

    Ok(pages.join("\n"))
}
