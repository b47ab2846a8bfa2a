//! # splot demo
//!
//! Sample program that draws a quaternion rotation: the coordinate axes,
//! unit circles in the three coordinate planes, the rotation axis, a vector
//! `v0`, its image `v1`, and the path `v0` sweeps on its way to `v1`.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p splot-demo -- --quaternion 1,2,3,0.3 --output quaternion.plt
//! gnuplot quaternion.plt
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]

pub mod rotation;

use std::path::PathBuf;

use anyhow::bail;
use clap::Parser;
use splot_core::geometry::{normalize, ORIGIN};
use splot_core::Scene;

use crate::rotation::{angle, axis, from_axis_angle, normalize_quat, rotate, Quat};

/// Command-line arguments for splot-demo.
#[derive(Debug, Clone, Parser)]
#[command(name = "splot-demo")]
#[command(about = "Write a gnuplot script visualizing a quaternion rotation")]
#[command(version)]
pub struct CliArgs {
    /// Output script path
    #[arg(long, short, env = "SPLOT_OUTPUT", default_value = "quaternion.plt")]
    pub output: PathBuf,

    /// Quaternion as x,y,z,w (normalized before use)
    #[arg(
        long,
        value_delimiter = ',',
        allow_negative_numbers = true,
        default_values_t = [1.0, 2.0, 3.0, 0.3]
    )]
    pub quaternion: Vec<f32>,

    /// Angle step of the trajectory, in radians
    #[arg(long, default_value = "0.1")]
    pub step: f32,

    /// Do not wait for a key press after plotting
    #[arg(long)]
    pub no_pause: bool,
}

/// Demo configuration.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    /// Output script path.
    pub output: PathBuf,
    /// Rotation to visualize (not necessarily normalized).
    pub quaternion: Quat,
    /// Angle step of the trajectory, in radians.
    pub step: f32,
    /// Emit the interactive pause directive.
    pub pause: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("quaternion.plt"),
            quaternion: [1.0, 2.0, 3.0, 0.3],
            step: 0.1,
            pause: true,
        }
    }
}

impl TryFrom<CliArgs> for DemoConfig {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> anyhow::Result<Self> {
        let quaternion: Quat = match args.quaternion.as_slice() {
            &[x, y, z, w] => [x, y, z, w],
            other => bail!("--quaternion needs 4 components, got {}", other.len()),
        };
        if !(args.step >= MIN_STEP && args.step.is_finite()) {
            bail!("--step must be a number of at least {MIN_STEP}, got {}", args.step);
        }
        Ok(Self {
            output: args.output,
            quaternion,
            step: args.step,
            pause: !args.no_pause,
        })
    }
}

/// Smallest trajectory step accepted from the command line.
pub const MIN_STEP: f32 = 1e-4;

/// Upper bound on trajectory segments, whatever the configured step.
pub const MAX_TRAJECTORY_STEPS: u32 = 1 << 16;

/// Initial vector that gets rotated.
const V0: [f32; 3] = [1.0, 0.0, 0.0];

/// Build the rotation scene.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn build_rotation_scene(config: &DemoConfig) -> Scene {
    let q = normalize_quat(config.quaternion);
    let mut scene = Scene::new();

    scene.title(format!(
        "Quaternion {:.6}i + {:.6}j + {:.6}k + {:.6}",
        q[0], q[1], q[2], q[3]
    ));
    scene.width(1);

    // Axes
    scene
        .line([-1.2, 0.0, 0.0], [1.2, 0.0, 0.0])
        .color("#FF80C0")
        .filled_head();
    scene
        .line([0.0, -1.2, 0.0], [0.0, 1.2, 0.0])
        .color("#C0FF80")
        .filled_head();
    scene
        .line([0.0, 0.0, -1.2], [0.0, 0.0, 1.2])
        .color("#80C0FF")
        .filled_head();

    // Unit circles in the YZ, ZX and XY planes
    scene.break_path().std_color(0).no_head();
    scene.circle(ORIGIN, [1.0, 0.0, 0.0], 1.0);
    scene.circle(ORIGIN, [0.0, 1.0, 0.0], 1.0);
    scene.circle(ORIGIN, [0.0, 0.0, 1.0], 1.0);

    let rotation_axis = normalize(axis(q));
    scene
        .line(ORIGIN, rotation_axis)
        .color("purple")
        .label("axis")
        .no_head()
        .width(2);

    let v0 = normalize(V0);
    scene
        .line(ORIGIN, v0)
        .color("black")
        .label("v0")
        .filled_head()
        .width(2);
    let v1 = rotate(q, v0);
    scene
        .line(ORIGIN, v1)
        .color("black")
        .label("v1")
        .filled_head()
        .width(2);

    // Path of v0 under a growing rotation about the same axis
    let max_angle = angle(q);
    let steps = ((max_angle / config.step) as u32).clamp(1, MAX_TRAJECTORY_STEPS);
    let delta = max_angle / steps as f32;
    for i in 0..=steps {
        let v = rotate(from_axis_angle(axis(q), delta * i as f32), v0);
        if i == 0 {
            scene.move_to(v).color("red").no_head();
        } else {
            scene.line_to(v);
        }
    }

    tracing::debug!("Rotation scene: {} primitives", scene.len());
    scene
}
