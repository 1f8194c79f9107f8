//! Derive the three projection matrices for OpenGL-style conventions and
//! print them with free symbols left in place.

use {
    anyhow::Result,
    symproj::{
        logging, orthographic, perspective, perspective_fov, Expr, FrustumBounds,
        FrustumFovBounds, NdcBounds,
    },
};

fn main() -> Result<()> {
    logging::setup()?;

    // OpenGL: every axis of the view volume spans [-1, 1].
    let ndc = NdcBounds::new(
        Expr::from(-1),
        Expr::from(1),
        Expr::from(-1),
        Expr::from(1),
        Expr::from(-1),
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
    log::info!(
        "perspective onto {}:{}",
        ndc,
        perspective(&frustum, &ndc)
    );

    let fov_frustum = FrustumFovBounds::new(
        Expr::symbol("aspect"),
        Expr::symbol("theta_vfov"),
        Expr::symbol("n"),
        Expr::symbol("f"),
    );
    log::info!(
        "perspective (field-of-view form) onto {}:{}",
        ndc,
        perspective_fov(&fov_frustum, &ndc)
    );

    log::info!(
        "orthographic onto {}:{}",
        ndc,
        orthographic(&frustum, &ndc)
    );

    Ok(())
}
