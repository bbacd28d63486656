#![cfg(feature = "serde")]

use inverse_cache::prelude::*;
use nalgebra::DMatrix;

#[test]
fn test_serialization() {
    let mut cell = CacheCell::new(DMatrix::from_row_slice(2, 2, &[4., 3., 3., 2.]));
    cached_inverse(&mut cell).unwrap();

    let json = serde_json::to_string_pretty(&cell).unwrap();
    let mut restored: CacheCell<f64> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.matrix(), cell.matrix());
    assert!(!restored.has_cached_inverse());

    let (inverse, status) =
        cached_inverse_traced(&mut restored, &SolveOptions::default()).unwrap();
    assert_eq!(status, CacheStatus::Miss);
    assert_eq!(Some(&inverse), cell.cached_inverse());
}

#[test]
fn test_forged_inverse_is_ignored() {
    let matrix = DMatrix::from_row_slice(2, 2, &[4., 3., 3., 2.]);
    let bogus = DMatrix::from_element(1, 1, 7.);
    let json = serde_json::json!({
        "matrix": serde_json::to_value(&matrix).unwrap(),
        "inverse": serde_json::to_value(Some(&bogus)).unwrap(),
    });
    let mut restored: CacheCell<f64> = serde_json::from_value(json).unwrap();
    assert!(!restored.has_cached_inverse());
    let inverse = cached_inverse(&mut restored).unwrap();
    assert_eq!(inverse.shape(), (2, 2));
}

#[test]
fn test_options_serialization() {
    let options = SolveOptions::<f64>::default().with_tolerance(1e-8);
    let json = serde_json::to_string(&options).unwrap();
    let restored: SolveOptions<f64> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, options);
}
