use na::Point2;
use planecut3d::clip::PointWelder;
use planecut3d::math::Real;

/// Random points close to multiples of `tolerance`, far from the welding bucket boundaries.
fn grid_points(seed: u64, num_points: usize, tolerance: Real) -> Vec<Point2<Real>> {
    let mut rng = oorandom::Rand32::new(seed);
    let mut coord = || {
        let cell = rng.rand_range(0..40) as Real - 20.0;
        let offset = (rng.rand_float() as Real - 0.5) * 0.6;
        (cell + offset) * tolerance
    };

    (0..num_points)
        .map(|_| {
            let x = coord();
            let y = coord();
            Point2::new(x, y)
        })
        .collect()
}

#[test]
fn welding_is_idempotent() {
    for seed in 0..10 {
        let welder = PointWelder::new(0.125);
        let points = grid_points(seed, 500, welder.tolerance());
        let welded = welder.weld(&points);
        assert!(welded.len() <= points.len());

        let rewelded = welder.weld(&welded.points);
        assert_eq!(rewelded.points, welded.points);
        assert_eq!(
            rewelded.indices,
            (0..welded.len() as u32).collect::<Vec<_>>()
        );
    }
}

#[test]
fn welding_is_monotonic_for_odd_tolerance_multiples() {
    // Buckets of tolerance `3 * eps` are exact unions of buckets of tolerance `eps`, so
    // increasing the tolerance this way can only merge more points.
    for seed in 0..10 {
        let eps = 0.125;
        let points = grid_points(seed, 300, eps);

        let mut last_len = points.len();
        for factor in [1.0, 3.0, 9.0, 27.0] {
            let len = PointWelder::new(eps * factor).weld(&points).len();
            assert!(len <= last_len, "{} welded points after {}", len, last_len);
            last_len = len;
        }
    }
}

#[test]
fn welding_is_bucket_exact() {
    let tolerance = 0.1;
    let welder = PointWelder::new(tolerance);

    // 0.09 apart, in the same bucket: merged.
    let same_bucket = [Point2::new(-0.045, 0.0), Point2::new(0.045, 0.0)];
    let welded = welder.weld(&same_bucket);
    assert_eq!(welded.len(), 1);
    assert_eq!(welded.indices, vec![0, 0]);

    // Only 0.01 apart, but on each side of the boundary at 0.05: kept distinct.
    let straddling = [Point2::new(0.045, 0.0), Point2::new(0.055, 0.0)];
    let welded = welder.weld(&straddling);
    assert_eq!(welded.len(), 2);
    assert_eq!(welder.count_near_misses(&welded.points), 1);

    // 0.11 apart: never merged.
    let far = [Point2::new(0.0, 0.0), Point2::new(0.11, 0.0)];
    assert_eq!(welder.weld(&far).len(), 2);
}
