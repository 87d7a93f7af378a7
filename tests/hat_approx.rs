use hat_approx::{hat, ApproxConfig, ApproxError, HatApproxNet, Matrix};
use rand::{rngs::StdRng, SeedableRng};

#[test]
fn hat_scenarios() {
    assert_eq!(hat(0.0), 1.0);
    assert_eq!(hat(0.5), 0.5);
    assert_eq!(hat(1.0), 0.0);
    assert_eq!(hat(2.0), 0.0);
    assert_eq!(hat(-0.5), 0.5);
}

#[test]
fn default_width_network_at_point_three() {
    let net = HatApproxNet::new(8).unwrap();
    let first = net.predict(0.3);
    assert!(first.is_finite());
    assert!(first > -1.0 && first < 1.0);
    assert_eq!(first.to_bits(), net.predict(0.3).to_bits());
}

#[test]
fn forward_keeps_batch_shape() {
    let net = HatApproxNet::with_rng(8, &mut StdRng::seed_from_u64(0)).unwrap();
    let xs = [-2.0, -1.0, -0.3, 0.0, 0.3, 1.0, 2.0];
    let out = net.forward(&Matrix::column(&xs)).unwrap();
    assert_eq!((out.rows, out.cols), (xs.len(), 1));
    for y in out.first_column() {
        assert!(y.is_finite() && y > -1.0 && y < 1.0);
    }
    assert_eq!(out.first_column(), net.predict_batch(&xs));
}

#[test]
fn any_width_stays_inside_tanh_range() {
    for hidden_dim in [1, 2, 3, 8, 32] {
        let net = HatApproxNet::new(hidden_dim).unwrap();
        for x in [-1e6, -10.0, -1.0, 0.0, 0.3, 1.0, 10.0, 1e6] {
            let y = net.predict(x);
            assert!(y.is_finite() && y > -1.0 && y < 1.0, "h={hidden_dim} x={x} y={y}");
        }
    }
}

#[test]
fn shape_errors_surface() {
    let net = HatApproxNet::default();
    assert!(matches!(
        net.forward(&Matrix::zeros(2, 4)),
        Err(ApproxError::ShapeMismatch { expected: 1, found: 4 })
    ));
    assert!(matches!(HatApproxNet::new(0), Err(ApproxError::InvalidHiddenDim(0))));
}

#[test]
fn config_file_builds_reproducible_network() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("approx.json");
    std::fs::write(&path, r#"{ "hidden_dim": 5, "seed": 2024 }"#).unwrap();

    let config = ApproxConfig::load_json(&path).unwrap();
    let a = HatApproxNet::from_config(&config).unwrap();
    let b = HatApproxNet::from_config(&config).unwrap();
    assert_eq!(a.hidden_dim(), 5);
    assert_eq!(a.predict(0.3), b.predict(0.3));
}

#[test]
fn concurrent_readers_agree() {
    let net = HatApproxNet::with_rng(8, &mut StdRng::seed_from_u64(1)).unwrap();
    let expected = net.predict(0.3);
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4).map(|_| s.spawn(|| net.predict(0.3))).collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), expected);
        }
    });
}
