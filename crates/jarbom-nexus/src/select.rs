//! Choosing one coordinate among several assets with the same digest.

use jarbom_core::ResolvedCoordinate;

/// Picks the preferred coordinate from valid candidates in registry order.
///
/// The first candidate is kept unless it carries `vendor_group`, in which
/// case the next candidate outside that group replaces it. Among several
/// non-vendor candidates the first one wins.
pub fn select_preferred<I>(candidates: I, vendor_group: &str) -> Option<ResolvedCoordinate>
where
    I: IntoIterator<Item = ResolvedCoordinate>,
{
    candidates.into_iter().fold(None, |kept, candidate| match kept {
        Some(current)
            if current.is_vendor_group(vendor_group)
                && !candidate.is_vendor_group(vendor_group) =>
        {
            Some(candidate)
        }
        Some(current) => Some(current),
        None => Some(candidate),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use jarbom_core::{CoordinateSource, DEFAULT_VENDOR_GROUP};

    fn nexus(group: Option<&str>, artifact: &str) -> ResolvedCoordinate {
        ResolvedCoordinate::new(
            CoordinateSource::Private,
            group.map(String::from),
            artifact,
            "1.0",
        )
    }

    fn select(candidates: Vec<ResolvedCoordinate>) -> Option<ResolvedCoordinate> {
        select_preferred(candidates, DEFAULT_VENDOR_GROUP)
    }

    #[test]
    fn test_empty() {
        assert!(select(vec![]).is_none());
    }

    #[test]
    fn test_vendor_first_is_replaced() {
        let winner = select(vec![
            nexus(Some("sailpoint"), "a"),
            nexus(Some("other-vendor"), "b"),
        ])
        .unwrap();
        assert_eq!(winner.group_id(), Some("other-vendor"));
    }

    #[test]
    fn test_non_vendor_first_is_kept() {
        let winner = select(vec![
            nexus(Some("other-vendor"), "b"),
            nexus(Some("sailpoint"), "a"),
        ])
        .unwrap();
        assert_eq!(winner.group_id(), Some("other-vendor"));
    }

    #[test]
    fn test_first_non_vendor_wins() {
        let winner = select(vec![
            nexus(Some("sailpoint"), "a"),
            nexus(Some("first"), "b"),
            nexus(Some("second"), "c"),
        ])
        .unwrap();
        assert_eq!(winner.group_id(), Some("first"));
    }

    #[test]
    fn test_only_vendor_keeps_first() {
        let winner = select(vec![
            nexus(Some("sailpoint"), "a"),
            nexus(Some("sailpoint"), "b"),
        ])
        .unwrap();
        assert_eq!(winner.artifact_id, "a");
    }

    #[test]
    fn test_vendor_replaced_by_absent_group() {
        let winner = select(vec![nexus(Some("sailpoint"), "a"), nexus(None, "b")]).unwrap();
        assert_eq!(winner.group_id, None);
        assert_eq!(winner.artifact_id, "b");
    }

    #[test]
    fn test_absent_group_is_kept() {
        let winner = select(vec![nexus(None, "a"), nexus(Some("acme"), "b")]).unwrap();
        assert_eq!(winner.artifact_id, "a");
    }

    #[test]
    fn test_custom_vendor_group() {
        let winner = select_preferred(
            vec![nexus(Some("acme"), "a"), nexus(Some("sailpoint"), "b")],
            "acme",
        )
        .unwrap();
        assert_eq!(winner.artifact_id, "b");
    }
}
