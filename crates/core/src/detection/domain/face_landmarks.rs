//! Named facial landmark point lists.
//!
//! Feature names follow the 68-point convention (chin, eyebrows, nose,
//! eyes, lips). Detectors with fewer keypoints fill only the features they
//! can see.

use std::collections::BTreeMap;

use crate::shared::geometry::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LandmarkFeature {
    Chin,
    LeftEyebrow,
    RightEyebrow,
    NoseBridge,
    NoseTip,
    LeftEye,
    RightEye,
    TopLip,
    BottomLip,
}

/// Landmark point lists for one face, keyed by feature.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FaceLandmarks {
    features: BTreeMap<LandmarkFeature, Vec<Point>>,
}

impl FaceLandmarks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, feature: LandmarkFeature, points: Vec<Point>) -> Self {
        self.insert(feature, points);
        self
    }

    /// Replaces the point list for `feature`. Empty lists are not stored.
    pub fn insert(&mut self, feature: LandmarkFeature, points: Vec<Point>) {
        if points.is_empty() {
            self.features.remove(&feature);
        } else {
            self.features.insert(feature, points);
        }
    }

    pub fn get(&self, feature: LandmarkFeature) -> Option<&[Point]> {
        self.features.get(&feature).map(Vec::as_slice)
    }

    /// Floored midpoint of the first left-eye point and the last right-eye
    /// point. `None` when either eye is missing.
    pub fn eye_midpoint(&self) -> Option<Point> {
        let left = self.get(LandmarkFeature::LeftEye)?.first()?;
        let right = self.get(LandmarkFeature::RightEye)?.last()?;
        Some(Point::floored_midpoint(*left, *right))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn six_point_eyes() -> FaceLandmarks {
        FaceLandmarks::new()
            .with(
                LandmarkFeature::LeftEye,
                vec![
                    Point::new(100, 120), // outer corner
                    Point::new(110, 115),
                    Point::new(120, 115),
                    Point::new(130, 120),
                    Point::new(120, 125),
                    Point::new(110, 125),
                ],
            )
            .with(
                LandmarkFeature::RightEye,
                vec![
                    Point::new(170, 120),
                    Point::new(180, 115),
                    Point::new(190, 115),
                    Point::new(200, 120),
                    Point::new(190, 125),
                    Point::new(181, 125), // last
                ],
            )
    }

    #[test]
    fn test_eye_midpoint_uses_first_left_and_last_right() {
        // ((100 + 181) // 2, (120 + 125) // 2) = (140, 122)
        assert_eq!(six_point_eyes().eye_midpoint(), Some(Point::new(140, 122)));
    }

    #[test]
    fn test_eye_midpoint_single_point_eyes() {
        let lm = FaceLandmarks::new()
            .with(LandmarkFeature::LeftEye, vec![Point::new(40, 50)])
            .with(LandmarkFeature::RightEye, vec![Point::new(81, 53)]);
        assert_eq!(lm.eye_midpoint(), Some(Point::new(60, 51)));
    }

    #[rstest]
    #[case::no_left_eye(LandmarkFeature::LeftEye)]
    #[case::no_right_eye(LandmarkFeature::RightEye)]
    fn test_eye_midpoint_missing_eye_is_none(#[case] missing: LandmarkFeature) {
        let mut lm = six_point_eyes();
        lm.insert(missing, vec![]);
        assert_eq!(lm.get(missing), None);
        assert_eq!(lm.eye_midpoint(), None);
    }

    #[test]
    fn test_eye_midpoint_ignores_other_features() {
        let lm = six_point_eyes().with(LandmarkFeature::NoseTip, vec![Point::new(0, 0)]);
        assert_eq!(lm.eye_midpoint(), six_point_eyes().eye_midpoint());
    }
}
