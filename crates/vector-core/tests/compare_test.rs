use vector_core::Vector;

#[test]
fn test_equal() {
    let v1 = Vector::new(10.0, 5.0, 18.0);
    let mut v2 = Vector::new(10.0, 5.0, 1.0);
    assert_ne!(v1, v2);
    v2.z = 18.0;
    assert_eq!(v1, v2);
}

#[test]
fn test_equality_is_exact() {
    let v1 = Vector::new(0.1 + 0.2, 0.0, 0.0);
    let v2 = Vector::new(0.3, 0.0, 0.0);
    assert!(v1 != v2);
}
