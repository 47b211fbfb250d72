use symmat::index::{forward, inverse, n_entries};
use symmat::{GenericSymmetricMatrix, NamedMatrix, SymmetricError, SymmetricResult};

#[test]
fn distance_matrix() -> SymmetricResult<()> {
    // Pairwise distances between points in a line, without the (always zero) diagonal
    let points = [0.0, 1.5, 4.0, 10.0, 11.0];
    let n = points.len();
    let m = GenericSymmetricMatrix::<f64>::from_fn(n, false, |x, y| {
        let d: f64 = points[x] - points[y];
        d.abs()
    })?;
    assert_eq!(m.n_entries(), 10);

    for x in 0..n {
        for y in 0..n {
            if x == y {
                assert_eq!(
                    m.get(x, y),
                    Err(SymmetricError::DiagonalAccessDisallowed { index: x })
                );
            } else {
                assert_eq!(m.get(x, y)?, (points[x] - points[y]).abs());
            }
        }
    }

    // Find the closest pair by walking the raw storage and mapping back
    let (closest, _) = m
        .as_slice()
        .iter()
        .enumerate()
        .fold((0, f64::MAX), |(bi, bd), (i, d)| {
            if *d < bd {
                (i, *d)
            } else {
                (bi, bd)
            }
        });
    assert_eq!(inverse(closest, n, false)?, (3, 4));
    Ok(())
}

#[test]
fn correlation_by_name() -> SymmetricResult<()> {
    let names = ["temperature", "humidity", "pressure", "wind"];
    let mut m = NamedMatrix::new(names, true)?;
    for name in names {
        m.set(name, name, 1.)?;
    }
    m.set("humidity", "temperature", -0.4)?;
    m.set("wind", "pressure", 0.25)?;

    assert_eq!(m.get("temperature", "humidity")?, -0.4);
    assert_eq!(m.get("pressure", "wind")?, 0.25);
    assert_eq!(m.get("wind", "temperature")?, 0.);

    let i = m.get_offset("pressure", "wind")?;
    assert_eq!(m.labels_at(i)?, ("pressure", "wind"));
    assert_eq!(i, forward(2, 3, names.len(), true)?);

    assert_eq!(
        m.get("rain", "wind"),
        Err(SymmetricError::UnknownVariable("rain".to_string()))
    );
    Ok(())
}

#[test]
fn large_round_trip() -> SymmetricResult<()> {
    let n = 22184;
    for with_diagonal in [true, false] {
        let total = n_entries(n, with_diagonal)?;
        // A spread of offsets through the whole storage
        let step = total / 9973;
        for i in (0..total).step_by(step) {
            let (x, y) = inverse(i, n, with_diagonal)?;
            assert_eq!(forward(y, x, n, with_diagonal)?, i);
        }
    }
    Ok(())
}
