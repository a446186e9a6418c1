use std::io::Cursor;

use docdigest::application::ports::{FileLoader, FileLoaderError};
use docdigest::domain::{ContentType, Document};
use docdigest::infrastructure::text_processing::DocxAdapter;
use docx_rs::{Docx, Paragraph, Run, Table, TableCell, TableRow};

fn build_docx(docx: Docx) -> Vec<u8> {
    let mut buffer = Vec::new();
    docx.build().pack(Cursor::new(&mut buffer)).unwrap();
    buffer
}

fn paragraph(text: &str) -> Paragraph {
    Paragraph::new().add_run(Run::new().add_text(text))
}

#[tokio::test]
async fn given_docx_with_paragraphs_when_extracting_then_joins_with_spaces() {
    let data = build_docx(
        Docx::new()
            .add_paragraph(paragraph("First paragraph."))
            .add_paragraph(paragraph("Second paragraph.")),
    );
    let document = Document::new(
        "doc.docx".to_string(),
        ContentType::WordprocessingMl,
        data.len() as u64,
    );

    let text = DocxAdapter::new().extract_text(&data, &document).await.unwrap();

    assert_eq!(text, "First paragraph. Second paragraph.");
}

#[test]
fn given_docx_with_table_when_extracting_paragraphs_then_includes_cell_text() {
    let data = build_docx(
        Docx::new()
            .add_paragraph(paragraph("Intro"))
            .add_table(Table::new(vec![TableRow::new(vec![
                TableCell::new().add_paragraph(paragraph("left")),
                TableCell::new().add_paragraph(paragraph("right")),
            ])])),
    );

    let paragraphs = DocxAdapter::extract_paragraphs(&data).unwrap();

    assert_eq!(paragraphs, ["Intro", "left", "right"]);
}

#[tokio::test]
async fn given_legacy_doc_bytes_when_extracting_then_returns_extraction_error() {
    let document = Document::new("old.doc".to_string(), ContentType::MsWord, 8);

    let result = DocxAdapter::new()
        .extract_text(b"\xD0\xCF\x11\xE0\xA1\xB1\x1A\xE1", &document)
        .await;

    assert!(matches!(result, Err(FileLoaderError::ExtractionFailed(_))));
}

#[tokio::test]
async fn given_text_document_when_extracting_as_word_then_rejects_content_type() {
    let document = Document::new("a.txt".to_string(), ContentType::Text, 1);

    let result = DocxAdapter::new().extract_text(b"a", &document).await;

    assert!(matches!(
        result,
        Err(FileLoaderError::UnsupportedContentType(_))
    ));
}
