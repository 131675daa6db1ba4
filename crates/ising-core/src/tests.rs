//! Unit tests for ising-core primitives.

#[cfg(test)]
mod lattice {
    use crate::{EngineRng, IsingError, Lattice, DOWN, UP};

    #[test]
    fn random_cells_are_plus_or_minus_one() {
        let mut rng = EngineRng::new(1);
        for size in [1, 2, 5, 16] {
            let l = Lattice::random(size, &mut rng).unwrap();
            assert_eq!(l.len(), size * size);
            assert!(l.spins().iter().all(|&s| s == UP || s == DOWN));
        }
    }

    #[test]
    fn random_lattice_uses_both_values() {
        let mut rng = EngineRng::new(2);
        let l = Lattice::random(20, &mut rng).unwrap();
        assert!(l.spins().contains(&UP));
        assert!(l.spins().contains(&DOWN));
    }

    #[test]
    fn same_seed_same_lattice() {
        let a = Lattice::random(8, &mut EngineRng::new(99)).unwrap();
        let b = Lattice::random(8, &mut EngineRng::new(99)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn uniform_magnetization() {
        let l = Lattice::uniform(4, UP).unwrap();
        assert_eq!(l.magnetization(), 16);
        let l = Lattice::uniform(3, DOWN).unwrap();
        assert_eq!(l.magnetization(), -9);
    }

    #[test]
    fn from_rows_wrong_row_count_is_shape_mismatch() {
        let rows = vec![vec![1, 1, 1]; 2];
        let err = Lattice::from_rows(3, &rows).unwrap_err();
        assert_eq!(err, IsingError::ShapeMismatch { expected: 3, rows: 2, cols: 3 });
    }

    #[test]
    fn from_rows_ragged_is_shape_mismatch() {
        let rows = vec![vec![1, 1], vec![1]];
        let err = Lattice::from_rows(2, &rows).unwrap_err();
        assert!(matches!(err, IsingError::ShapeMismatch { expected: 2, cols: 1, .. }));
    }

    #[test]
    fn from_rows_rejects_zero_spin() {
        let rows = vec![vec![1, 0], vec![1, 1]];
        let err = Lattice::from_rows(2, &rows).unwrap_err();
        assert!(matches!(err, IsingError::InvalidArgument(_)));
    }

    #[test]
    fn zero_size_rejected() {
        assert!(Lattice::uniform(0, UP).is_err());
    }

    #[test]
    fn rows_round_trip() {
        let rows = vec![vec![1, -1, 1], vec![-1, -1, 1], vec![1, 1, 1]];
        let l = Lattice::from_rows(3, &rows).unwrap();
        assert_eq!(l.rows(), rows);
        assert_eq!(l.get(1, 0), -1);
        assert_eq!(l.get(2, 2), 1);
    }

    #[test]
    fn flip_negates_one_cell() {
        let mut l = Lattice::uniform(3, UP).unwrap();
        assert_eq!(l.flip(1, 2), DOWN);
        assert_eq!(l.get(1, 2), DOWN);
        assert_eq!(l.magnetization(), 9 - 2);
        assert_eq!(l.flip(1, 2), UP);
        assert_eq!(l.magnetization(), 9);
    }

    #[test]
    fn expect_size_reports_mismatch() {
        let l = Lattice::uniform(3, UP).unwrap();
        assert!(l.expect_size(3).is_ok());
        assert_eq!(
            l.expect_size(4).unwrap_err(),
            IsingError::ShapeMismatch { expected: 4, rows: 3, cols: 3 },
        );
    }

    #[test]
    fn display_uses_plus_minus() {
        let l = Lattice::from_rows(2, &[vec![1, -1], vec![-1, 1]]).unwrap();
        assert_eq!(l.to_string(), "+-\n-+\n");
    }
}

#[cfg(test)]
mod neighbors {
    use crate::{Direction, NeighborTable};

    #[test]
    fn interior_neighbors() {
        let t = NeighborTable::new(4);
        assert_eq!(t.coords(1, 1), [(2, 1), (0, 1), (1, 2), (1, 0)]);
    }

    #[test]
    fn corner_wraps_around() {
        let t = NeighborTable::new(4);
        assert_eq!(t.coords(0, 0), [(1, 0), (3, 0), (0, 1), (0, 3)]);
        assert_eq!(t.coords(3, 3), [(0, 3), (2, 3), (3, 0), (3, 2)]);
    }

    #[test]
    fn flat_indices_match_coords() {
        let t = NeighborTable::new(5);
        for i in 0..5 {
            for j in 0..5 {
                let flat = t.of_index(i * 5 + j);
                let coords = t.coords(i, j);
                for (k, (ni, nj)) in flat.iter().zip(coords) {
                    assert_eq!(*k, ni * 5 + nj);
                }
            }
        }
    }

    #[test]
    fn neighbor_relation_is_symmetric() {
        let t = NeighborTable::new(6);
        for i in 0..6 {
            for j in 0..6 {
                let (ri, rj) = t.neighbor(i, j, Direction::Right);
                assert_eq!(t.neighbor(ri, rj, Direction::Left), (i, j));
                let (di, dj) = t.neighbor(i, j, Direction::Down);
                assert_eq!(t.neighbor(di, dj, Direction::Up), (i, j));
            }
        }
    }

    #[test]
    fn size_one_is_its_own_neighbor() {
        let t = NeighborTable::new(1);
        assert_eq!(t.coords(0, 0), [(0, 0); 4]);
    }
}

#[cfg(test)]
mod patterns {
    use crate::{EngineRng, IsingError, Lattice, Orientation, Pattern, checkerboard, domain_wall};

    #[test]
    fn vertical_domain_wall_negates_right_columns() {
        let l = domain_wall(4, Orientation::Vertical).unwrap();
        let mut expected = Lattice::uniform(4, 1).unwrap().rows();
        for row in &mut expected {
            row[2] = -1;
            row[3] = -1;
        }
        assert_eq!(l.rows(), expected);
    }

    #[test]
    fn horizontal_domain_wall_negates_bottom_rows() {
        let l = domain_wall(4, Orientation::Horizontal).unwrap();
        assert_eq!(
            l.rows(),
            vec![vec![1, 1, 1, 1], vec![1, 1, 1, 1], vec![-1, -1, -1, -1], vec![-1, -1, -1, -1]],
        );
    }

    #[test]
    fn checkerboard_of_four() {
        let l = checkerboard(4).unwrap();
        assert_eq!(
            l.rows(),
            vec![
                vec![1, -1, 1, -1],
                vec![-1, 1, -1, 1],
                vec![1, -1, 1, -1],
                vec![-1, 1, -1, 1],
            ],
        );
        assert_eq!(l.magnetization(), 0);
    }

    #[test]
    fn checkerboard_odd_size_is_invalid() {
        assert!(matches!(checkerboard(3), Err(IsingError::InvalidArgument(_))));
    }

    #[test]
    fn orientation_parsing() {
        assert_eq!("vertical".parse::<Orientation>().unwrap(), Orientation::Vertical);
        assert_eq!("Horizontal".parse::<Orientation>().unwrap(), Orientation::Horizontal);
        assert!(matches!(
            "diagonal".parse::<Orientation>(),
            Err(IsingError::InvalidArgument(_)),
        ));
    }

    #[test]
    fn pattern_names_round_trip() {
        for p in [
            Pattern::Random,
            Pattern::AllUp,
            Pattern::AllDown,
            Pattern::DomainWall(Orientation::Vertical),
            Pattern::DomainWall(Orientation::Horizontal),
            Pattern::Checkerboard,
        ] {
            assert_eq!(p.to_string().parse::<Pattern>().unwrap(), p);
        }
        assert!("stripes".parse::<Pattern>().is_err());
        assert!("domain-wall-diagonal".parse::<Pattern>().is_err());
    }

    #[test]
    fn pattern_build_checks_size() {
        let mut rng = EngineRng::new(3);
        assert_eq!(Pattern::AllDown.build(3, &mut rng).unwrap().magnetization(), -9);
        assert!(Pattern::Checkerboard.build(5, &mut rng).is_err());
        assert_eq!(Pattern::Random.build(6, &mut rng).unwrap().size(), 6);
    }
}

#[cfg(test)]
mod params {
    use crate::{IsingError, Lattice, ParameterSet};

    #[test]
    fn defaults() {
        let p = ParameterSet::builder(2.0).build().unwrap();
        assert_eq!(p.size(), 100);
        assert_eq!(p.steps(), 1000);
        assert_eq!(p.burn_in(), 100);
        assert!(p.initial().is_none());
        assert!(p.persist().is_none());
        assert!(p.seed().is_none());
        assert_eq!(p.prefix(), "ising_T2.000");
    }

    #[test]
    fn non_positive_temperature_rejected() {
        for t in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = ParameterSet::builder(t).build().unwrap_err();
            assert!(matches!(err, IsingError::InvalidArgument(_)), "T = {t}");
        }
    }

    #[test]
    fn initial_lattice_size_must_match() {
        let lattice = Lattice::uniform(3, 1).unwrap();
        let err = ParameterSet::builder(1.0).size(4).initial(lattice).build().unwrap_err();
        assert!(matches!(err, IsingError::ShapeMismatch { expected: 4, .. }));
    }

    #[test]
    fn persist_uses_prefix() {
        let p = ParameterSet::builder(1.5)
            .size(8)
            .persist_to("out")
            .build()
            .unwrap();
        let persist = p.persist().unwrap();
        assert_eq!(persist.directory, std::path::PathBuf::from("out"));
        assert_eq!(persist.prefix, "ising_T1.500");

        let p = ParameterSet::builder(1.5).persist_to("out").prefix("run").build().unwrap();
        assert_eq!(p.persist().unwrap().prefix, "run");
    }

    #[test]
    fn at_temperature_keeps_template_fields() {
        let template = ParameterSet::builder(1.0)
            .size(6)
            .steps(40)
            .burn_in(4)
            .persist_to("tasks")
            .prefix("custom")
            .seed(9)
            .build()
            .unwrap();
        let p = template.at_temperature(2.5).build().unwrap();
        assert_eq!(p.temperature(), 2.5);
        assert_eq!((p.size(), p.steps(), p.burn_in(), p.seed()), (6, 40, 4, Some(9)));
        assert_eq!(p.prefix(), "ising_T2.500");
        assert_eq!(p.persist().unwrap().directory, std::path::PathBuf::from("tasks"));
    }

    #[test]
    fn empty_prefix_rejected() {
        assert!(ParameterSet::builder(1.0).prefix("").build().is_err());
    }
}

#[cfg(test)]
mod config {
    use crate::{SweepConfig, T_CRITICAL};

    #[test]
    fn default_is_valid() {
        SweepConfig::default().validate().unwrap();
    }

    #[test]
    fn critical_temperature_matches_onsager() {
        let onsager = 2.0 / (1.0 + 2f64.sqrt()).ln();
        assert!((T_CRITICAL - onsager).abs() < 1e-12);
    }

    #[test]
    fn rejects_bad_ranges() {
        let bad = [
            SweepConfig { t_min: 0.0, ..Default::default() },
            SweepConfig { t_max: 0.5, ..Default::default() },
            SweepConfig { num_points: 3, ..Default::default() },
            SweepConfig { size: 0, ..Default::default() },
            SweepConfig { num_threads: Some(0), ..Default::default() },
            SweepConfig { batch_size: Some(0), ..Default::default() },
        ];
        for cfg in bad {
            assert!(cfg.validate().is_err(), "{cfg:?}");
        }
    }
}

#[cfg(test)]
mod rng {
    use crate::{EngineRng, SweepRng};

    #[test]
    fn unit_in_half_open_interval() {
        let mut rng = EngineRng::new(5);
        for _ in 0..1_000 {
            let u = rng.unit();
            assert!((0.0..1.0).contains(&u));
        }
    }

    #[test]
    fn task_seeds_differ_and_are_stable() {
        let a = SweepRng::new(42);
        let b = SweepRng::new(42);
        assert_eq!(a.task_seed(3), b.task_seed(3));
        assert_ne!(a.task_seed(0), a.task_seed(1));
        assert_ne!(a.task_seed(0), 42);
    }

    #[test]
    fn children_produce_different_streams() {
        let s = SweepRng::new(7);
        let mut r0 = s.child(0);
        let mut r1 = s.child(1);
        let v0: Vec<usize> = (0..16).map(|_| r0.index(1_000)).collect();
        let v1: Vec<usize> = (0..16).map(|_| r1.index(1_000)).collect();
        assert_ne!(v0, v1);
    }
}
