use std::path::Path;

use crate::error::{Result, VitaeError};
use crate::models::DocumentFormat;

use super::TextProvider;

/// DOCX backend over the in-process OOXML parser.
///
/// Output layout: every top-level paragraph in document order, newline
/// separated (empty paragraphs kept, preserving blank lines); then every
/// table in document order, one row per line with cells tab-separated.
pub struct DocxProvider;

impl TextProvider for DocxProvider {
    fn name(&self) -> &'static str {
        "docx-rs"
    }

    fn is_available(&self) -> bool {
        true
    }

    fn extract(&self, _path: &Path, bytes: &[u8]) -> Result<String> {
        let docx = docx_rs::read_docx(bytes).map_err(|e| VitaeError::Extraction {
            format: DocumentFormat::Docx,
            message: format!("DOCX parse error: {e}"),
        })?;

        let mut paragraphs: Vec<String> = Vec::new();
        let mut tables: Vec<String> = Vec::new();

        for child in &docx.document.children {
            match child {
                docx_rs::DocumentChild::Paragraph(paragraph) => {
                    paragraphs.push(paragraph_text(paragraph));
                }
                docx_rs::DocumentChild::Table(table) => {
                    let rows = table_text(table);
                    if !rows.is_empty() {
                        tables.push(rows);
                    }
                }
                _ => {}
            }
        }

        let mut text = paragraphs.join("\n");
        for table in tables {
            if !text.is_empty() {
                text.push('\n');
            }
            text.push_str(&table);
        }

        Ok(text)
    }
}

fn paragraph_text(paragraph: &docx_rs::Paragraph) -> String {
    let mut content = String::new();
    for child in &paragraph.children {
        if let docx_rs::ParagraphChild::Run(run) = child {
            for run_child in &run.children {
                if let docx_rs::RunChild::Text(text) = run_child {
                    content.push_str(&text.text);
                }
            }
        }
    }
    content
}

fn table_text(table: &docx_rs::Table) -> String {
    let mut rows: Vec<String> = Vec::new();

    for table_child in &table.rows {
        let docx_rs::TableChild::TableRow(row) = table_child;
        let mut cells: Vec<String> = Vec::new();
        for row_child in &row.cells {
            let docx_rs::TableRowChild::TableCell(cell) = row_child;
            // A cell can hold several paragraphs; they stay newline-joined
            // inside the cell.
            let mut cell_text = String::new();
            for content in &cell.children {
                if let docx_rs::TableCellContent::Paragraph(paragraph) = content {
                    if !cell_text.is_empty() {
                        cell_text.push('\n');
                    }
                    cell_text.push_str(&paragraph_text(paragraph));
                }
            }
            cells.push(cell_text);
        }
        rows.push(cells.join("\t"));
    }

    rows.join("\n")
}
