use eframe::egui::Pos2;
use itertools::Itertools;

/// A projected polyline with its cumulative arc length, so partial draws are cheap per frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartPath {
    points: Vec<Pos2>,
    // cumulative[i] = length from points[0] to points[i]
    cumulative: Vec<f32>,
}

impl ChartPath {
    pub fn new(points: Vec<Pos2>) -> Self {
        let mut cumulative = Vec::with_capacity(points.len());
        if !points.is_empty() {
            cumulative.push(0.0);
            cumulative.extend(points.iter().tuple_windows().scan(0.0f32, |acc, (a, b)| {
                *acc += a.distance(*b);
                Some(*acc)
            }));
        }
        Self { points, cumulative }
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn total_length(&self) -> f32 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }

    /// The leading `fraction` of the path by length. 0 yields nothing, 1 or more yields the
    /// whole path, anything between ends on an interpolated point inside the current segment.
    pub fn trim(&self, fraction: f32) -> Vec<Pos2> {
        if self.points.is_empty() || fraction.is_nan() || fraction <= 0.0 {
            return Vec::new();
        }
        if fraction >= 1.0 {
            return self.points.clone();
        }
        let total = self.total_length();
        if total <= f32::EPSILON {
            return self.points[..1].to_vec();
        }

        let target = total * fraction;
        let end = self
            .cumulative
            .partition_point(|&len| len < target)
            .clamp(1, self.points.len() - 1);
        let (from, to) = (self.points[end - 1], self.points[end]);
        let segment = self.cumulative[end] - self.cumulative[end - 1];
        let t = if segment > 0.0 {
            ((target - self.cumulative[end - 1]) / segment).clamp(0.0, 1.0)
        } else {
            1.0
        };

        let mut out = Vec::with_capacity(end + 1);
        out.extend_from_slice(&self.points[..end]);
        out.push(from.lerp(to, t));
        out
    }
}

/// One-shot form of [`ChartPath::trim`] for callers without a cached path.
pub fn progressive_trim(path: &[Pos2], fraction: f32) -> Vec<Pos2> {
    ChartPath::new(path.to_vec()).trim(fraction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::pos2;
    use proptest::prelude::*;

    fn polyline_length(points: &[Pos2]) -> f32 {
        points.iter().tuple_windows().map(|(a, b)| a.distance(*b)).sum()
    }

    fn l_shape() -> Vec<Pos2> {
        // 30 across then 10 down: total 40
        vec![pos2(0.0, 0.0), pos2(30.0, 0.0), pos2(30.0, 10.0)]
    }

    #[test]
    fn cumulative_length() {
        let path = ChartPath::new(l_shape());
        assert_eq!(path.total_length(), 40.0);
        assert_eq!(ChartPath::default().total_length(), 0.0);
    }

    #[test]
    fn zero_fraction_is_empty() {
        assert!(progressive_trim(&l_shape(), 0.0).is_empty());
        assert!(progressive_trim(&l_shape(), -0.5).is_empty());
    }

    #[test]
    fn full_fraction_is_whole_path() {
        assert_eq!(progressive_trim(&l_shape(), 1.0), l_shape());
        assert_eq!(progressive_trim(&l_shape(), 3.0), l_shape());
    }

    #[test]
    fn partial_fraction_interpolates_inside_segment() {
        let early = progressive_trim(&l_shape(), 0.375);
        assert_eq!(early, vec![pos2(0.0, 0.0), pos2(15.0, 0.0)]);

        let most = progressive_trim(&l_shape(), 0.875);
        assert_eq!(most, vec![pos2(0.0, 0.0), pos2(30.0, 0.0), pos2(30.0, 5.0)]);
    }

    #[test]
    fn exact_vertex_boundary() {
        let at_corner = progressive_trim(&l_shape(), 0.75);
        assert_eq!(at_corner, vec![pos2(0.0, 0.0), pos2(30.0, 0.0)]);
    }

    #[test]
    fn degenerate_paths() {
        assert!(progressive_trim(&[], 0.5).is_empty());
        let dot = vec![pos2(4.0, 4.0)];
        assert_eq!(progressive_trim(&dot, 0.5), dot);
        let stacked = vec![pos2(1.0, 1.0), pos2(1.0, 1.0)];
        assert_eq!(progressive_trim(&stacked, 0.5), vec![pos2(1.0, 1.0)]);
    }

    proptest! {
        #[test]
        fn trimmed_length_tracks_fraction(
            coords in proptest::collection::vec((0.0f32..500.0, 0.0f32..200.0), 2..40),
            fraction in 0.01f32..0.99,
        ) {
            let points: Vec<Pos2> = coords.into_iter().map(|(x, y)| pos2(x, y)).collect();
            let path = ChartPath::new(points.clone());
            let total = path.total_length();
            prop_assume!(total > 1.0);

            let trimmed = path.trim(fraction);
            prop_assert!(!trimmed.is_empty());
            prop_assert_eq!(trimmed[0], points[0]);
            prop_assert!(trimmed.len() <= points.len() + 1);
            let drawn = polyline_length(&trimmed);
            prop_assert!((drawn - total * fraction).abs() <= total * 1e-3 + 1e-2);
        }

        #[test]
        fn longer_fraction_never_shorter(
            coords in proptest::collection::vec((0.0f32..500.0, 0.0f32..200.0), 2..20),
            a in 0.0f32..1.0,
            b in 0.0f32..1.0,
        ) {
            let points: Vec<Pos2> = coords.into_iter().map(|(x, y)| pos2(x, y)).collect();
            let path = ChartPath::new(points);
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(polyline_length(&path.trim(lo)) <= polyline_length(&path.trim(hi)) + 1e-2);
        }
    }
}
