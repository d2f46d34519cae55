mod hulls {
  use convexity::algorithms::convex_hull::*;
  use convexity::algorithms::HullAlgorithm;
  use convexity::data::*;

  use rand::{Rng, SeedableRng};

  fn square() -> Vec<Point<f64>> {
    vec![
      Point::new([0.0, 0.0]),
      Point::new([10.0, 0.0]),
      Point::new([10.0, 10.0]),
      Point::new([0.0, 10.0]),
    ]
  }

  fn random_points(seed: u64, n: usize) -> Vec<Point<f64>> {
    let mut rng = rand::rngs::SmallRng::seed_from_u64(seed);
    (0..n)
      .map(|_| Point::new([rng.gen_range(-100..100) as f64, rng.gen_range(-100..100) as f64]))
      .collect()
  }

  #[test]
  fn square_is_its_own_hull() {
    let square = square();
    assert_eq!(gift_wrapping::convex_hull(&square), square);
    assert_eq!(graham_scan::convex_hull(&square), square);
    assert_eq!(chan::convex_hull(&square), square);
  }

  #[test]
  fn square_with_interior_points() {
    let mut input = square();
    input.extend([Point::new([5.0, 5.0]), Point::new([2.0, 7.0]), Point::new([9.0, 1.0])]);
    let square = square();
    assert_eq!(gift_wrapping::convex_hull(&input), square);
    assert_eq!(graham_scan::convex_hull(&input), square);
  }

  #[test]
  fn brute_force_edges_cover_the_square() {
    let square = square();
    let edges = brute_force::convex_hull(&square);
    assert_eq!(edges.len(), 8);
    for pt in square.iter() {
      assert_eq!(edges.iter().filter(|e| *e == pt).count(), 2);
    }
  }

  #[test]
  fn triangle_membership() {
    let triangle = vec![
      Point::new([0.0, 0.0]),
      Point::new([10.0, 0.0]),
      Point::new([5.0, 10.0]),
    ];
    for algo in HullAlgorithm::ALL {
      let hull = algo.run(&triangle);
      for pt in triangle.iter() {
        assert!(hull.contains(pt), "{} dropped {:?}", algo, pt);
      }
    }
  }

  // Sorting by (y, x) without angles can lose a corner.
  #[test]
  fn quick_elimination_can_drop_a_corner() {
    let triangle = vec![
      Point::new([10.0, 0.0]),
      Point::new([0.0, 5.0]),
      Point::new([5.0, 10.0]),
    ];
    let hull = quick_elimination::convex_hull(&triangle);
    assert!(!hull.contains(&Point::new([0.0, 5.0])));
  }

  #[test]
  fn small_inputs_are_identity() {
    let two = vec![Point::new([1.0, 2.0]), Point::new([1.0, 2.0])];
    for algo in HullAlgorithm::ALL {
      assert_eq!(algo.run(&two), two);
      assert_eq!(algo.run(&two[..1]), two[..1].to_vec());
    }
  }

  #[test]
  fn outputs_come_from_the_input() {
    for seed in 0..20 {
      let input = random_points(seed, 50);
      for algo in HullAlgorithm::ALL {
        for pt in algo.run(&input).iter() {
          assert!(input.contains(pt), "{} invented {:?}", algo, pt);
        }
      }
    }
  }

  #[test]
  fn caller_slice_is_untouched() {
    let input = random_points(7, 40);
    let copy = input.clone();
    for algo in HullAlgorithm::ALL {
      let _ = algo.run(&input);
      assert_eq!(input, copy, "{} reordered its input", algo);
    }
  }
}

mod intersection {
  use convexity::algorithms::*;
  use convexity::data::*;
  use convexity::io::parse_points;
  use convexity::*;

  #[test]
  fn reference_segments() {
    let a: DirectedEdge<f64> = ((0.0, 0.0), (10.0, 10.0)).into();
    let b: DirectedEdge<f64> = ((0.0, 10.0), (10.0, 0.0)).into();
    let c: DirectedEdge<f64> = ((0.0, 0.0), (1.0, 0.0)).into();
    let d: DirectedEdge<f64> = ((0.0, 5.0), (1.0, 5.0)).into();
    assert!(segments_intersect(&a, &b));
    assert!(!segments_intersect(&c, &d));
  }

  #[test]
  fn convex_polygon_is_simple() -> Result<(), Error> {
    let hexagon = parse_points("0 0\n4 -2\n8 0\n8 4\n4 6\n0 4\n")?;
    for policy in IntersectionPolicy::ALL {
      assert_eq!(policy.checked_run(&hexagon)?, None, "{}", policy);
    }
    Ok(())
  }

  #[test]
  fn bowtie_crosses() -> Result<(), Error> {
    let bowtie = parse_points("0 0\n10 10\n10 0\n0 10\n")?;
    for policy in IntersectionPolicy::ALL {
      let crossing = policy.checked_run(&bowtie)?.unwrap();
      assert_eq!((crossing.first_index, crossing.second_index), (0, 2));
      assert_eq!(crossing.edges()[1], ((10.0, 0.0), (0.0, 10.0)).into());
    }
    Ok(())
  }

  #[test]
  fn hull_of_parabola_is_simple() {
    // Every point of a parabola is a hull vertex, and no three are colinear.
    let pts: Vec<Point<f64>> = (-10..10)
      .map(|i| Point::new([f64::from(i), f64::from(i * i)]))
      .collect();
    let hull = HullAlgorithm::JarvisMarch.run(&pts);
    assert_eq!(hull.len(), pts.len());
    for policy in IntersectionPolicy::ALL {
      assert!(policy.run(&hull).is_none());
    }
  }

  #[test]
  fn too_few_points() {
    let triangle = vec![Point::new([0, 0]), Point::new([1, 0]), Point::new([0, 1])];
    assert_eq!(
      IntersectionPolicy::BruteForce.checked_run(&triangle),
      Err(Error::InsufficientVertices)
    );
  }
}
