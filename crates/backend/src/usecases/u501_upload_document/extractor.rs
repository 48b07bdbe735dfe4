//! Plain-text extraction from PDF and DOCX documents.

use anyhow::{Context, Result};
use contracts::usecases::u501_upload_document::DocumentKind;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::{Cursor, Read};

/// Extracts the text of one document format
pub trait TextExtractor {
    fn extract_text(&self, bytes: &[u8]) -> Result<String>;
}

pub struct PdfExtractor;

pub struct DocxExtractor;

/// Pick the extractor for a document kind
pub fn extractor_for(kind: DocumentKind) -> &'static dyn TextExtractor {
    match kind {
        DocumentKind::Pdf => &PdfExtractor,
        DocumentKind::Docx => &DocxExtractor,
    }
}

impl TextExtractor for PdfExtractor {
    /// Pages with text are joined, each followed by a blank line.
    fn extract_text(&self, bytes: &[u8]) -> Result<String> {
        let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)
            .map_err(|e| anyhow::anyhow!("{}", e))
            .context("PDF text extraction failed")?;

        let mut text = String::new();
        for page in &pages {
            let page = page.trim();
            if !page.is_empty() {
                text.push_str(page);
                text.push_str("\n\n");
            }
        }
        Ok(text)
    }
}

impl TextExtractor for DocxExtractor {
    /// One line per paragraph that contains visible text.
    fn extract_text(&self, bytes: &[u8]) -> Result<String> {
        let mut archive =
            zip::ZipArchive::new(Cursor::new(bytes)).context("not a DOCX (zip) container")?;
        let mut xml = String::new();
        archive
            .by_name("word/document.xml")
            .context("word/document.xml is missing")?
            .read_to_string(&mut xml)
            .context("word/document.xml is not valid UTF-8")?;

        paragraphs_text(&xml)
    }
}

fn paragraphs_text(document_xml: &str) -> Result<String> {
    let mut reader = Reader::from_str(document_xml);
    let mut text = String::new();
    // Открытые абзацы, внутренний последним (текстовые поля вкладывают w:p в w:p)
    let mut open: Vec<String> = Vec::new();
    let mut run_depth = 0usize;
    let mut in_text = false;

    loop {
        match reader
            .read_event()
            .context("word/document.xml is not well-formed")?
        {
            Event::Start(e) => match e.name().as_ref() {
                b"w:p" => {
                    if let Some(outer) = open.last_mut() {
                        flush_line(&mut text, outer);
                    }
                    open.push(String::new());
                }
                b"w:r" => run_depth += 1,
                b"w:t" => in_text = true,
                name if run_depth > 0 => push_break(&mut open, name),
                _ => {}
            },
            Event::Empty(e) if run_depth > 0 => push_break(&mut open, e.name().as_ref()),
            Event::End(e) => match e.name().as_ref() {
                b"w:p" => {
                    if let Some(mut line) = open.pop() {
                        flush_line(&mut text, &mut line);
                    }
                }
                b"w:r" => run_depth = run_depth.saturating_sub(1),
                b"w:t" => in_text = false,
                _ => {}
            },
            Event::Text(e) if in_text => {
                let content = e.unescape().context("bad entity in word/document.xml")?;
                if let Some(line) = open.last_mut() {
                    line.push_str(&content);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(text)
}

/// Tab and line breaks inside a run, with or without attributes
fn push_break(open: &mut [String], name: &[u8]) {
    let Some(line) = open.last_mut() else {
        return;
    };
    match name {
        b"w:tab" => line.push('\t'),
        b"w:br" | b"w:cr" => line.push('\n'),
        _ => {}
    }
}

fn flush_line(text: &mut String, line: &mut String) {
    if !line.trim().is_empty() {
        text.push_str(line);
        text.push('\n');
    }
    line.clear();
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::io::Write;

    pub(crate) fn build_docx(body: &str) -> Vec<u8> {
        let xml = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{}</w:body></w:document>"#,
            body
        );
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file(
                "word/document.xml",
                zip::write::SimpleFileOptions::default(),
            )
            .unwrap();
        writer.write_all(xml.as_bytes()).unwrap();
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn test_docx_paragraphs() {
        let docx = build_docx(
            r#"<w:p><w:pPr><w:pStyle w:val="Title"/></w:pPr><w:r><w:t>Quiz 1</w:t></w:r></w:p>
<w:p/>
<w:p w:rsidR="00A1"><w:r><w:t xml:space="preserve">Q1: </w:t></w:r><w:r><w:t>2 &lt; 3?</w:t></w:r></w:p>
<w:p><w:r><w:t>   </w:t></w:r></w:p>
<w:p><w:r><w:t>A</w:t><w:tab/><w:t>B</w:t></w:r></w:p>"#,
        );

        let text = DocxExtractor.extract_text(&docx).unwrap();
        assert_eq!(text, "Quiz 1\nQ1: 2 < 3?\nA\tB\n");
    }

    #[test]
    fn test_docx_without_document_xml() {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("readme.txt", zip::write::SimpleFileOptions::default())
            .unwrap();
        writer.write_all(b"hi").unwrap();
        let bytes = writer.finish().unwrap().into_inner();

        let err = DocxExtractor.extract_text(&bytes).unwrap_err();
        assert!(format!("{:#}", err).contains("word/document.xml"));
    }

    #[test]
    fn test_docx_garbage() {
        assert!(DocxExtractor.extract_text(b"plain text, not a zip").is_err());
    }

    #[test]
    fn test_docx_entities() {
        let docx = build_docx("<w:p><w:r><w:t>Tom &amp; Jerry: &quot;&#65;&#x42;&quot;</w:t></w:r></w:p>");
        assert_eq!(DocxExtractor.extract_text(&docx).unwrap(), "Tom & Jerry: \"AB\"\n");
    }

    #[test]
    fn test_docx_text_box_keeps_surrounding_text() {
        let docx = build_docx(
            r#"<w:p><w:r><w:t>Before</w:t></w:r><w:r><w:pict><v:shape><v:textbox><w:txbxContent><w:p><w:r><w:t>Box</w:t></w:r></w:p></w:txbxContent></v:textbox></v:shape></w:pict></w:r><w:r><w:t>After</w:t></w:r></w:p>"#,
        );

        let text = DocxExtractor.extract_text(&docx).unwrap();
        assert_eq!(text, "Before\nBox\nAfter\n");
    }

    #[test]
    fn test_docx_breaks_with_attributes() {
        let docx = build_docx(
            r#"<w:p><w:r><w:t>Q1</w:t><w:br w:type="textWrapping"/><w:t>A) 4</w:t><w:cr/><w:t>B) 5</w:t></w:r></w:p>"#,
        );

        let text = DocxExtractor.extract_text(&docx).unwrap();
        assert_eq!(text, "Q1\nA) 4\nB) 5\n");
    }

    #[test]
    fn test_docx_tab_stops_are_not_text() {
        let docx = build_docx(
            r#"<w:p><w:pPr><w:tabs><w:tab w:val="left" w:pos="720"/></w:tabs></w:pPr><w:r><w:t>A</w:t><w:tab/><w:t>B</w:t></w:r></w:p>"#,
        );

        assert_eq!(DocxExtractor.extract_text(&docx).unwrap(), "A\tB\n");
    }

    #[test]
    fn test_docx_malformed_xml() {
        let docx = build_docx("<w:p><w:r><w:t>open</w:r></w:p>");
        assert!(DocxExtractor.extract_text(&docx).is_err());
    }

    /// PDF with one line of Courier text per page
    fn build_pdf(pages: &[&str]) -> Vec<u8> {
        use lopdf::content::{Content, Operation};
        use lopdf::{dictionary, Document, Object, Stream};

        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids: Vec<Object> = Vec::new();
        for line in pages {
            let content = Content {
                operations: vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 24.into()]),
                    Operation::new("Td", vec![100.into(), 600.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*line)]),
                    Operation::new("ET", vec![]),
                ],
            };
            let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
                "Resources" => resources_id,
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).unwrap();
        bytes
    }

    #[test]
    fn test_pdf_pages_are_separated() {
        let pdf = build_pdf(&["Alpha", "Omega"]);

        let text = PdfExtractor.extract_text(&pdf).unwrap();

        let first = text.find("Alpha").expect("first page text");
        let second = text.find("Omega").expect("second page text");
        assert!(first < second);
        assert!(text[first..second].contains("\n\n"), "text: {:?}", text);
        assert!(text.ends_with("Omega\n\n"), "text: {:?}", text);
    }

    #[test]
    fn test_extractor_for() {
        let docx = build_docx("<w:p><w:r><w:t>x</w:t></w:r></w:p>");
        assert_eq!(
            extractor_for(DocumentKind::Docx).extract_text(&docx).unwrap(),
            "x\n"
        );
    }
}
