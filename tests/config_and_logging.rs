//! Integration tests for fill configuration and logging helpers.

use redeem_linalg::config::{Fill, Real, DEFAULT_SEED};
use redeem_linalg::math::Matrix;
use redeem_linalg::utils::logging::{init_test_logging, summarize};

// ---------------------------------------------------------------------------
// Fill parsing & serialization
// ---------------------------------------------------------------------------

#[test]
fn fill_parses_known_names() {
    assert_eq!("zero".parse::<Fill>().unwrap(), Fill::Zero);
    assert_eq!("DIAGONAL".parse::<Fill>().unwrap(), Fill::Diagonal);
    assert_eq!(
        "random".parse::<Fill>().unwrap(),
        Fill::Random { seed: DEFAULT_SEED }
    );
}

#[test]
fn fill_unknown_name_lists_choices() {
    let err = "lu".parse::<Fill>().unwrap_err();
    assert!(err.contains("zero, diagonal, random"));
}

#[test]
fn fill_deserializes_from_json() -> anyhow::Result<()> {
    let fill: Fill = serde_json::from_str(r#"{"kind": "random", "seed": 9}"#)?;
    assert_eq!(fill, Fill::Random { seed: 9 });

    let fill: Fill = serde_json::from_str(r#"{"kind": "constant", "value": 1.5}"#)?;
    assert_eq!(fill, Fill::Constant { value: 1.5 });

    let fill: Fill = serde_json::from_str(r#"{"kind": "diagonal"}"#)?;
    assert_eq!(fill, Fill::Diagonal);
    Ok(())
}

#[test]
fn fill_serializes_with_kind_tag() -> anyhow::Result<()> {
    let json = serde_json::to_string(&Fill::Random { seed: 3 })?;
    assert!(json.contains(r#""kind":"random""#));
    assert!(json.contains(r#""seed":3"#));
    Ok(())
}

#[test]
fn fill_rejects_unknown_kind() {
    assert!(serde_json::from_str::<Fill>(r#"{"kind": "cholesky"}"#).is_err());
}

// ---------------------------------------------------------------------------
// Fill application
// ---------------------------------------------------------------------------

#[test]
fn fill_apply_overwrites_matrix() {
    let mut m = Matrix::<Real, 3, 3>::from_fn(|_, _| 5.0);
    Fill::Diagonal.apply(&mut m.as_view_mut());
    assert_eq!(m, Matrix::identity());

    Fill::default().apply(&mut m.as_view_mut());
    assert_eq!(m, Matrix::zeros());
}

#[test]
fn fill_build_random_matches_seed() {
    let a: Matrix<Real, 2, 5> = Fill::Random { seed: 77 }.build();
    let b: Matrix<Real, 2, 5> = Fill::Random { seed: 77 }.build();
    assert_eq!(a, b);
}

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------

#[test]
fn summary_renders_in_log_line() {
    init_test_logging();
    let m = Matrix::<Real, 2, 2>::identity();
    let line = summarize(m.as_view(), 2, None, None).to_string();
    log::debug!("{}", line);
    assert!(line.starts_with("matrix(2x2, ["));
    assert!(line.contains("1.00e0, 0.00e0"));
}
