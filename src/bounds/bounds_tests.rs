use super::*;
use crate::symbolic::Expr;

#[test]
fn frustum_bounds_equality_is_structural() {
    let a = FrustumBounds::new(1.0_f64, 1.0, 1.0, 1.0, 0.1, 100.0);
    let b = FrustumBounds::new(1.0_f64, 1.0, 1.0, 1.0, 0.1, 100.0);
    let c = FrustumBounds::new(1.0_f64, 2.0, 1.0, 1.0, 0.1, 100.0);

    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn frustum_fov_bounds_equality_is_structural() {
    let a = FrustumFovBounds::new(
        Expr::symbol("aspect"),
        Expr::symbol("vfov"),
        Expr::symbol("n"),
        Expr::symbol("f"),
    );

    assert_eq!(a, a.clone());
    assert_ne!(
        a,
        FrustumFovBounds::new(
            Expr::symbol("aspect"),
            Expr::symbol("vfov"),
            Expr::symbol("n"),
            Expr::symbol("g"),
        )
    );
}

#[test]
fn ndc_bounds_display_renders_interval_product() {
    let ndc = NdcBounds::new(-1, 1, -1, 1, 0, 1);

    assert_eq!(format!("{}", ndc), "[-1, 1] x [-1, 1] x [0, 1]");
}

#[test]
fn ndc_bounds_display_renders_symbolic_intervals() {
    let ndc = NdcBounds::new(
        Expr::symbol("h_min"),
        Expr::symbol("h_max"),
        Expr::symbol("v_min"),
        Expr::symbol("v_max"),
        Expr::from(1),
        Expr::from(0),
    );

    assert_eq!(
        format!("{}", ndc),
        "[h_min, h_max] x [v_min, v_max] x [1, 0]"
    );
}
