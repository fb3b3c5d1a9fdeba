//! Single-jar output line.

use jarbom_core::ResolvedCoordinate;

/// Formats `repo,groupId,artifactId,version`; an absent groupId is an empty field.
pub fn coordinate_line(coordinate: &ResolvedCoordinate) -> String {
    format!(
        "{},{},{},{}",
        coordinate.source.label(),
        coordinate.group_id().unwrap_or_default(),
        coordinate.artifact_id,
        coordinate.version
    )
}
