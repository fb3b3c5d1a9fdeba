//! Resolved Maven coordinates and their provenance.

use std::cmp::Ordering;
use std::fmt;

/// Placeholder groupId the vendor assigns to jars with no known upstream identity.
pub const DEFAULT_VENDOR_GROUP: &str = "sailpoint";

/// Where a coordinate came from.
///
/// Variants are declared in the same order as their labels so that the
/// derived ordering matches a plain string comparison of the labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CoordinateSource {
    /// Synthesised from the file name and fallback version.
    Unresolved,
    /// Public index (Maven Central).
    Public,
    /// Private registry (Nexus).
    Private,
}

impl CoordinateSource {
    /// Short label printed in the single-jar output line.
    pub fn label(self) -> &'static str {
        match self {
            Self::Unresolved => "",
            Self::Public => "central",
            Self::Private => "nexus",
        }
    }
}

impl fmt::Display for CoordinateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A Maven coordinate resolved for one jar.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedCoordinate {
    pub source: CoordinateSource,
    pub group_id: Option<String>,
    pub artifact_id: String,
    pub version: String,
}

impl ResolvedCoordinate {
    pub fn new(
        source: CoordinateSource,
        group_id: Option<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            source,
            group_id,
            artifact_id: artifact_id.into(),
            version: version.into(),
        }
    }

    /// Builds a coordinate from optional registry fields.
    ///
    /// Returns `None` when `artifact_id` or `version` is missing.
    pub fn from_parts(
        source: CoordinateSource,
        group_id: Option<String>,
        artifact_id: Option<String>,
        version: Option<String>,
    ) -> Option<Self> {
        Some(Self::new(source, group_id, artifact_id?, version?))
    }

    /// Fallback coordinate for a jar no registry recognised.
    pub fn unresolved(file_name: impl Into<String>, version: impl Into<String>) -> Self {
        Self::new(CoordinateSource::Unresolved, None, file_name, version)
    }

    pub fn group_id(&self) -> Option<&str> {
        self.group_id.as_deref()
    }

    /// Whether the groupId equals `vendor_group`. An absent groupId never does.
    pub fn is_vendor_group(&self, vendor_group: &str) -> bool {
        self.group_id() == Some(vendor_group)
    }
}

impl fmt::Display for ResolvedCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(group_id) = &self.group_id {
            write!(f, "{group_id}:")?;
        }
        write!(f, "{}:{}", self.artifact_id, self.version)
    }
}

// Absent groupIds sort after every present one.
fn cmp_nulls_last(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

impl Ord for ResolvedCoordinate {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_nulls_last(self.group_id(), other.group_id())
            .then_with(|| self.artifact_id.cmp(&other.artifact_id))
            .then_with(|| self.version.cmp(&other.version))
            .then_with(|| self.source.cmp(&other.source))
    }
}

impl PartialOrd for ResolvedCoordinate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
