//! Bill-of-materials POM rendering.

use jarbom_core::{JarBomError, ResolvedCoordinate, Result};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

pub const BOM_GROUP_ID: &str = "sailpoint";
pub const BOM_ARTIFACT_ID: &str = "iiq-bom";
pub const WEBAPP_ARTIFACT_ID: &str = "iiq-webapp";

const POM_NAMESPACE: &str = "http://maven.apache.org/POM/4.0.0";
const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";
const SCHEMA_LOCATION: &str =
    "http://maven.apache.org/POM/4.0.0 http://maven.apache.org/xsd/maven-4.0.0.xsd";

fn pom_err<E>(err: E) -> JarBomError
where
    E: std::error::Error + Send + Sync + 'static,
{
    JarBomError::PomWrite(std::io::Error::other(err))
}

struct PomWriter {
    writer: Writer<Vec<u8>>,
}

impl PomWriter {
    fn new() -> Self {
        Self {
            writer: Writer::new_with_indent(Vec::new(), b' ', 2),
        }
    }

    fn event(&mut self, event: Event<'_>) -> Result<()> {
        self.writer.write_event(event).map_err(pom_err)
    }

    fn start(&mut self, start: BytesStart<'_>) -> Result<()> {
        self.event(Event::Start(start))
    }

    fn end(&mut self, tag: &str) -> Result<()> {
        self.event(Event::End(BytesEnd::new(tag)))
    }

    fn element(&mut self, tag: &str, text: &str) -> Result<()> {
        self.start(BytesStart::new(tag))?;
        self.event(Event::Text(BytesText::new(text)))?;
        self.end(tag)
    }

    fn dependency(&mut self, coordinate: &ResolvedCoordinate) -> Result<()> {
        self.start(BytesStart::new("dependency"))?;
        if let Some(group_id) = coordinate.group_id() {
            self.element("groupId", group_id)?;
        }
        self.element("artifactId", &coordinate.artifact_id)?;
        self.element("version", &coordinate.version)?;
        self.element("type", "jar")?;
        self.end("dependency")
    }

    fn finish(self) -> Result<String> {
        String::from_utf8(self.writer.into_inner()).map_err(pom_err)
    }
}

/// Renders the BOM for already sorted coordinates.
///
/// Each coordinate becomes a jar dependency, followed by the
/// `iiq-webapp` war at `version`.
pub fn render_bom(coordinates: &[ResolvedCoordinate], version: &str) -> Result<String> {
    let mut pom = PomWriter::new();

    pom.event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    pom.start(BytesStart::new("project").with_attributes([
        ("xmlns", POM_NAMESPACE),
        ("xmlns:xsi", XSI_NAMESPACE),
        ("xsi:schemaLocation", SCHEMA_LOCATION),
    ]))?;

    pom.element("modelVersion", "4.0.0")?;
    pom.element("groupId", BOM_GROUP_ID)?;
    pom.element("artifactId", BOM_ARTIFACT_ID)?;
    pom.element("version", version)?;
    pom.element("packaging", "pom")?;
    pom.element("name", "IIQ BOM")?;
    pom.element("description", "IdentityIQ Bill of Material")?;

    pom.start(BytesStart::new("dependencies"))?;
    for coordinate in coordinates {
        pom.dependency(coordinate)?;
    }

    pom.start(BytesStart::new("dependency"))?;
    pom.element("groupId", BOM_GROUP_ID)?;
    pom.element("artifactId", WEBAPP_ARTIFACT_ID)?;
    pom.element("type", "war")?;
    pom.element("version", version)?;
    pom.end("dependency")?;

    pom.end("dependencies")?;
    pom.end("project")?;

    pom.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use jarbom_core::CoordinateSource;

    fn coord(group: Option<&str>, artifact: &str, version: &str) -> ResolvedCoordinate {
        ResolvedCoordinate::new(
            CoordinateSource::Public,
            group.map(String::from),
            artifact,
            version,
        )
    }

    fn position(haystack: &str, needle: &str) -> usize {
        haystack
            .find(needle)
            .unwrap_or_else(|| panic!("{needle} not found in:\n{haystack}"))
    }

    #[test]
    fn test_header() {
        let pom = render_bom(&[], "8.4").unwrap();
        assert!(pom.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(pom.contains(r#"xmlns="http://maven.apache.org/POM/4.0.0""#));
        assert!(pom.contains("<modelVersion>4.0.0</modelVersion>"));
        assert!(pom.contains("<groupId>sailpoint</groupId>"));
        assert!(pom.contains("<artifactId>iiq-bom</artifactId>"));
        assert!(pom.contains("<version>8.4</version>"));
        assert!(pom.contains("<packaging>pom</packaging>"));
        assert!(pom.trim_end().ends_with("</project>"));
    }

    #[test]
    fn test_dependencies_in_order_then_webapp() {
        let coordinates = vec![coord(Some("x"), "a", "1"), coord(None, "b", "2")];
        let pom = render_bom(&coordinates, "8.4").unwrap();

        let a = position(&pom, "<artifactId>a</artifactId>");
        let b = position(&pom, "<artifactId>b</artifactId>");
        let webapp = position(&pom, "<artifactId>iiq-webapp</artifactId>");
        assert!(a < b && b < webapp);

        assert!(pom.contains("<groupId>x</groupId>"));
        assert!(pom.contains("<type>war</type>"));
        assert_eq!(pom.matches("<type>jar</type>").count(), 2);
        assert_eq!(pom.matches("<dependency>").count(), 3);
    }

    #[test]
    fn test_absent_group_is_omitted() {
        let pom = render_bom(&[coord(None, "b.jar", "2")], "8.4").unwrap();
        let start = position(&pom, "<dependencies>");
        let end = position(&pom, "<artifactId>b.jar</artifactId>");
        let dependency_head = &pom[start..end];
        assert!(!dependency_head.contains("<groupId>"));
    }

    #[test]
    fn test_text_is_escaped() {
        let pom = render_bom(&[coord(Some("a&b"), "x<y", "1")], "8.4").unwrap();
        assert!(pom.contains("<groupId>a&amp;b</groupId>"));
        assert!(pom.contains("<artifactId>x&lt;y</artifactId>"));
    }
}
