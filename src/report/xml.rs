use std::path::Path;

use serde::Serialize;

use crate::error::ReportError;
use crate::report::document::Document;

/// Standard declaration prefixed to every serialized report.
pub const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

/// Parse a string as a checkstyle document.
pub fn parse_document(data: &str) -> Result<Document, quick_xml::DeError> {
    quick_xml::de::from_str(data)
}

/// Read and parse one input report.
///
/// Both read and parse failures are fatal for the whole run and identify the
/// offending path.
pub fn read_document(path: &Path) -> Result<Document, ReportError> {
    let data = std::fs::read_to_string(path).map_err(|source| ReportError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    parse_document(&data).map_err(|source| ReportError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Serialize a document back to the wire format, prefixed with the XML
/// declaration.
pub fn render(document: &Document) -> Result<String, quick_xml::SeError> {
    let mut body = String::new();
    let mut serializer = quick_xml::se::Serializer::new(&mut body);
    serializer.indent(' ', 2);
    document.serialize(serializer)?;
    Ok(format!("{XML_DECLARATION}{body}\n"))
}
