//! Derive projection matrices for Vulkan-style conventions (depth range
//! [0, 1]) and evaluate one of them at a concrete camera setup.

use std::collections::HashMap;

use {
    anyhow::Result,
    symproj::{
        logging, perspective, perspective_fov, Expr, FrustumBounds, FrustumFovBounds,
        NdcBounds,
    },
};

fn main() -> Result<()> {
    logging::setup()?;

    // Vulkan: depth spans [0, 1] instead of [-1, 1].
    let ndc = NdcBounds::new(
        Expr::from(-1),
        Expr::from(1),
        Expr::from(-1),
        Expr::from(1),
        Expr::from(0),
        Expr::from(1),
    );

    let frustum = FrustumBounds::new(
        Expr::symbol("l"),
        Expr::symbol("r"),
        Expr::symbol("b"),
        Expr::symbol("t"),
        Expr::symbol("n"),
        Expr::symbol("f"),
    );
    let symbolic = perspective(&frustum, &ndc);
    log::info!("perspective onto {}:{}", ndc, symbolic);

    // Substitute a concrete camera into the symbolic depth entries.
    let bindings = HashMap::from([
        ("l".to_string(), 0.1),
        ("r".to_string(), 0.1),
        ("b".to_string(), 0.1),
        ("t".to_string(), 0.1),
        ("n".to_string(), 0.1),
        ("f".to_string(), 100.0),
    ]);
    log::info!(
        "depth entries at near=0.1 far=100: scale {} offset {}",
        symbolic[(2, 2)].eval(&bindings)?,
        symbolic[(2, 3)].eval(&bindings)?,
    );

    // The same derivation runs directly over floats.
    let numeric = perspective_fov(
        &FrustumFovBounds::new(
            16.0_f64 / 9.0,
            std::f64::consts::FRAC_PI_2,
            0.1,
            100.0,
        ),
        &NdcBounds::new(-1.0_f64, 1.0, -1.0, 1.0, 0.0, 1.0),
    );
    log::info!("perspective (field-of-view form) at a concrete camera:{}", numeric);

    Ok(())
}
