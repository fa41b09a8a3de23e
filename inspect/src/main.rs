mod config;

use {
    color_eyre::Report,
    config::{ConeConfig, Config},
    geometry_lite::{
        try_decompose, Angle, CameraCone, CameraConeParameters, Euler,
        Matrix4Ext as _, TransformComponents,
    },
    nalgebra::{Matrix4, Vector3},
    std::path::PathBuf,
    tracing_subscriber::{
        layer::SubscriberExt as _, util::SubscriberInitExt as _, EnvFilter,
    },
};

fn main() -> Result<(), Report> {
    color_eyre::install()?;
    install_tracing();

    let config = match std::env::args_os().nth(1) {
        Some(path) => Config::load(&PathBuf::from(path))?,
        None => Config::load_default()?,
    };

    if config.transforms.is_empty() && config.cone.is_none() {
        tracing::warn!("Nothing to inspect");
    }

    for entry in &config.transforms {
        inspect(&entry.name, &entry.matrix());
    }

    if let Some(cone) = &config.cone {
        inspect_cone(cone);
    }

    Ok(())
}

fn install_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_error::ErrorLayer::default())
        .init();
}

fn inspect_cone(cone: &ConeConfig) {
    // Deserialized axis is not necessarily normalized.
    let p = cone.parameters;
    let parameters = CameraConeParameters::new(
        p.center_a,
        p.radius_a,
        p.radius_b,
        p.axis,
        p.distance,
    );

    let steps = cone.steps.max(1);
    let step = Angle::from_degrees(360.0) / steps as f32;

    for i in 0..steps {
        let camera = CameraCone::new(parameters, step * i as f32, cone.height);
        let name = format!(
            "cone at {:.1} degrees",
            camera.rotation.degrees()
        );
        inspect(&name, &camera.camera_transform());
    }
}

#[tracing::instrument(skip(matrix))]
fn inspect(name: &str, matrix: &Matrix4<f32>) {
    tracing::debug!("Matrix\n{}", matrix.formatted());

    match try_decompose(matrix) {
        Ok(components) => report(&components),
        Err(err) => tracing::warn!("Not decomposable: {}", err),
    }
}

fn report(components: &TransformComponents) {
    let p = &components.perspective;
    tracing::info!(
        "translate {}, scale {}, skew ({:.4}, {:.4}, {:.4})",
        xyz(&components.translate),
        xyz(&components.scale),
        components.skew.xy,
        components.skew.xz,
        components.skew.yz,
    );

    if p.xyz() != Vector3::zeros() || p.w != 1.0 {
        tracing::info!(
            "perspective ({:.4}, {:.4}, {:.4}, {:.4})",
            p.x,
            p.y,
            p.z,
            p.w
        );
    }

    let euler = Euler::from(components.rotation);
    tracing::info!(
        "rotation {:.2} degrees, roll {:.2}, pitch {:.2}, yaw {:.2}",
        Angle::from_radians(components.rotation.angle()).degrees(),
        Angle::from_radians(euler.roll).degrees(),
        Angle::from_radians(euler.pitch).degrees(),
        Angle::from_radians(euler.yaw).degrees(),
    );
}

fn xyz(v: &Vector3<f32>) -> String {
    format!("({:.4}, {:.4}, {:.4})", v.x, v.y, v.z)
}
