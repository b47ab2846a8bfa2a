//! # splot demo
//!
//! Writes a gnuplot script visualizing a quaternion rotation.

use anyhow::Context;
use clap::Parser;
use splot_demo::{build_rotation_scene, CliArgs, DemoConfig};
use splot_script::{ScriptConfig, ScriptExporter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "splot_demo=info,splot_script=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = CliArgs::parse();
    let config = DemoConfig::try_from(args)?;

    tracing::info!(
        "Quaternion {:?}, trajectory step {} rad",
        config.quaternion,
        config.step
    );

    let scene = build_rotation_scene(&config);
    tracing::info!("Built scene with {} primitives", scene.len());

    let exporter = ScriptExporter::new(ScriptConfig {
        interactive_pause: config.pause,
        ..ScriptConfig::default()
    });
    exporter
        .write_file(&scene, &config.output)
        .with_context(|| format!("Failed to write {}", config.output.display()))?;

    tracing::info!("Wrote {}", config.output.display());
    Ok(())
}
