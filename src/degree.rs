//! Programme route kinds
//!
//! Programme pages live under `/programs/{segment}` where the segment names a
//! kind of award. The mapping between route fragments and [`DegreeKind`] is
//! total in both directions: unknown fragments fall back to
//! [`DegreeKind::Bachelor`], the most common programme type.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Kind of programme a `/programs/...` route belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DegreeKind {
    /// Undergraduate degree (default)
    #[default]
    Bachelor,
    /// Postgraduate taught degree
    Master,
    /// Doctoral degree
    PhD,
    /// Diploma programme
    Diploma,
    /// Certificate programme
    Certificate,
    /// Short training course
    Training,
}

impl DegreeKind {
    /// Order in which route fragments are tested when a kind has to be
    /// inferred from an arbitrary path. `Bachelor` is the fallback and is not
    /// listed.
    pub const INFERENCE_ORDER: [DegreeKind; 5] = [
        DegreeKind::PhD,
        DegreeKind::Master,
        DegreeKind::Diploma,
        DegreeKind::Certificate,
        DegreeKind::Training,
    ];

    /// Every kind, in display order.
    pub const ALL: [DegreeKind; 6] = [
        DegreeKind::Bachelor,
        DegreeKind::Master,
        DegreeKind::PhD,
        DegreeKind::Diploma,
        DegreeKind::Certificate,
        DegreeKind::Training,
    ];

    /// Route segment used under `/programs/`.
    pub fn route_segment(self) -> &'static str {
        match self {
            DegreeKind::Bachelor => "bachelor-degree",
            DegreeKind::Master => "master-degree",
            DegreeKind::PhD => "ph.d-degree",
            DegreeKind::Diploma => "diploma",
            DegreeKind::Certificate => "certificates",
            DegreeKind::Training => "trainings",
        }
    }

    /// Breadcrumb label for the kind's listing page.
    pub fn label(self) -> &'static str {
        match self {
            DegreeKind::Bachelor => "Bachelor Degree",
            DegreeKind::Master => "Master Degree",
            DegreeKind::PhD => "PhD Degree",
            DegreeKind::Diploma => "Diploma",
            DegreeKind::Certificate => "Certificates",
            DegreeKind::Training => "Trainings",
        }
    }

    /// Listing page for this kind, e.g. `/programs/master-degree`.
    pub fn listing_path(self) -> String {
        format!("/programs/{}", self.route_segment())
    }

    /// Exact lookup of a route segment.
    pub fn from_segment(segment: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.route_segment() == segment)
    }

    /// Exact lookup with the bachelor fallback.
    pub fn from_segment_or_default(segment: &str) -> Self {
        Self::from_segment(segment).unwrap_or_default()
    }

    /// Infer a kind from any path by substring search over
    /// [`INFERENCE_ORDER`](Self::INFERENCE_ORDER).
    pub fn infer_from_path(path: &str) -> Self {
        Self::INFERENCE_ORDER
            .into_iter()
            .find(|kind| path.contains(kind.route_segment()))
            .unwrap_or_default()
    }

    /// Whether this kind is one of the three degree levels grouped under
    /// "Degree Programmes".
    pub fn is_degree(self) -> bool {
        matches!(
            self,
            DegreeKind::Bachelor | DegreeKind::Master | DegreeKind::PhD
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_round_trip() {
        for kind in DegreeKind::ALL {
            assert_eq!(DegreeKind::from_segment(kind.route_segment()), Some(kind));
        }
    }

    #[test]
    fn test_unknown_segment_falls_back_to_bachelor() {
        assert_eq!(DegreeKind::from_segment("apprenticeships"), None);
        assert_eq!(
            DegreeKind::from_segment_or_default("apprenticeships"),
            DegreeKind::Bachelor
        );
    }

    #[test]
    fn test_infer_from_path() {
        assert_eq!(
            DegreeKind::infer_from_path("/programs/ph.d-degree/physics"),
            DegreeKind::PhD
        );
        assert_eq!(
            DegreeKind::infer_from_path("/programs/master-degree/ai"),
            DegreeKind::Master
        );
        assert_eq!(
            DegreeKind::infer_from_path("/programs/certificates/first-aid"),
            DegreeKind::Certificate
        );
        assert_eq!(
            DegreeKind::infer_from_path("/programs/trainings/welding"),
            DegreeKind::Training
        );
        assert_eq!(
            DegreeKind::infer_from_path("/programs/bachelor-degree/law"),
            DegreeKind::Bachelor
        );
        assert_eq!(DegreeKind::infer_from_path("/elsewhere"), DegreeKind::Bachelor);
    }

    #[test]
    fn test_inference_precedence() {
        // A path mentioning two fragments resolves to the earlier one in the order.
        assert_eq!(
            DegreeKind::infer_from_path("/programs/diploma/to-master-degree-bridge"),
            DegreeKind::Master
        );
    }

    #[test]
    fn test_degree_grouping() {
        assert!(DegreeKind::Bachelor.is_degree());
        assert!(DegreeKind::PhD.is_degree());
        assert!(!DegreeKind::Diploma.is_degree());
        assert!(!DegreeKind::Training.is_degree());
    }

    #[test]
    fn test_listing_path() {
        assert_eq!(DegreeKind::Master.listing_path(), "/programs/master-degree");
    }
}
