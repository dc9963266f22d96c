use rand::Rng;
use rand_distr::StandardNormal;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, EnumVariantNames};

use crate::{camera::Camera, integrators::Whitted, math::Vec3, scene::Scene};

#[derive(Copy, Clone, Debug, PartialEq, Deserialize, Serialize, Display, EnumString, EnumVariantNames)]
pub enum SamplingMode {
    /// One sample at the pixel center
    Plain,
    /// Uniform sub-pixel grid
    Grid,
    /// Sub-pixel grid with gaussian perturbation
    Jittered,
    /// Recursive quad subdivision where neighboring colors disagree
    Adaptive,
}

#[derive(Copy, Clone, Debug, Deserialize, Serialize)]
pub struct SamplerSettings {
    pub mode: SamplingMode,
    /// Sub-pixel grid dimension for the supersampling modes
    pub samples: u32,
    /// Subdivision limit for `Adaptive`
    pub adaptive_depth: u32,
    /// Color difference that triggers adaptive subdivision
    pub adaptive_threshold: f32,
}

impl Default for SamplerSettings {
    fn default() -> Self {
        Self {
            mode: SamplingMode::Plain,
            samples: 3,
            adaptive_depth: 3,
            adaptive_threshold: 0.1,
        }
    }
}

/// Resolves the color of the pixel at (x, y) with the active strategy.
/// Every sample is an already clamped primary ray trace, the combined color
/// needs no further clamping. Also returns the number of rays traced.
pub fn sample_pixel(
    whitted: &Whitted,
    scene: &Scene,
    camera: &Camera,
    x: usize,
    y: usize,
    width: usize,
    height: usize,
    settings: SamplerSettings,
    rng: &mut Pcg32,
) -> (Vec3<f32>, usize) {
    match settings.mode {
        SamplingMode::Plain => {
            let color = whitted.trace(
                scene,
                camera,
                ((x as f32) + 0.5) / (width as f32),
                ((y as f32) + 0.5) / (height as f32),
            );
            (color, 1)
        }
        SamplingMode::Grid => grid(whitted, scene, camera, x, y, width, height, settings, None),
        SamplingMode::Jittered => grid(
            whitted,
            scene,
            camera,
            x,
            y,
            width,
            height,
            settings,
            Some(rng),
        ),
        SamplingMode::Adaptive => {
            let mut ray_count = 0;
            let color = adaptive_quad(
                whitted,
                scene,
                camera,
                (x as f32, y as f32),
                ((x as f32) + 1.0, (y as f32) + 1.0),
                width,
                height,
                0,
                settings,
                &mut ray_count,
            );
            (color, ray_count)
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn grid(
    whitted: &Whitted,
    scene: &Scene,
    camera: &Camera,
    x: usize,
    y: usize,
    width: usize,
    height: usize,
    settings: SamplerSettings,
    jitter_rng: Option<&mut Pcg32>,
) -> (Vec3<f32>, usize) {
    let samples = settings.samples.max(1);
    let sub_x = 1.0 / ((width as f32) * (samples as f32));
    let sub_y = 1.0 / ((height as f32) * (samples as f32));
    let x0 = (x as f32) / (width as f32);
    let y0 = (y as f32) / (height as f32);

    let mut rng = jitter_rng;
    let mut color = Vec3::zeros();
    for sample_x in 0..samples {
        for sample_y in 0..samples {
            let (dx, dy) = match &mut rng {
                Some(rng) => {
                    // N(0,1) clamped to three standard deviations and scaled
                    // down to keep the sample inside its cell
                    let jx: f32 = rng.sample(StandardNormal);
                    let jy: f32 = rng.sample(StandardNormal);
                    (
                        (sample_x as f32) + 0.5 + jx.clamp(-3.0, 3.0) / 6.0,
                        (sample_y as f32) + 0.5 + jy.clamp(-3.0, 3.0) / 6.0,
                    )
                }
                None => ((sample_x as f32) + 0.5, (sample_y as f32) + 0.5),
            };
            color += whitted.trace(scene, camera, x0 + dx * sub_x, y0 + dy * sub_y);
        }
    }

    let sample_count = (samples * samples) as usize;
    (color / (sample_count as f32), sample_count)
}

/// Averages the four quadrants of the footprint between the two pixel-space
/// corners, subdividing a quadrant when its corner color strays too far
/// from the center color.
#[allow(clippy::too_many_arguments)]
fn adaptive_quad(
    whitted: &Whitted,
    scene: &Scene,
    camera: &Camera,
    (x_min, y_min): (f32, f32),
    (x_max, y_max): (f32, f32),
    width: usize,
    height: usize,
    depth: u32,
    settings: SamplerSettings,
    ray_count: &mut usize,
) -> Vec3<f32> {
    let trace_at = |px: f32, py: f32| {
        whitted.trace(scene, camera, px / (width as f32), py / (height as f32))
    };

    let x_mid = x_min + (x_max - x_min) / 2.0;
    let y_mid = y_min + (y_max - y_min) / 2.0;

    let corners = [
        (x_min, y_min),
        (x_max, y_min),
        (x_min, y_max),
        (x_max, y_max),
    ];
    let corner_colors = corners.map(|(px, py)| trace_at(px, py));
    let center_color = trace_at(x_mid, y_mid);
    *ray_count += 5;

    let quadrants = [
        ((x_min, y_min), (x_mid, y_mid)),
        ((x_mid, y_min), (x_max, y_mid)),
        ((x_min, y_mid), (x_mid, y_max)),
        ((x_mid, y_mid), (x_max, y_max)),
    ];

    let rgb_magnitude = 3.0_f32.sqrt();
    let mut color = Vec3::zeros();
    for (corner_color, (q_min, q_max)) in corner_colors.iter().zip(quadrants) {
        let difference = (center_color - *corner_color).len() / rgb_magnitude;
        if difference > settings.adaptive_threshold && depth < settings.adaptive_depth {
            color += adaptive_quad(
                whitted,
                scene,
                camera,
                q_min,
                q_max,
                width,
                height,
                depth + 1,
                settings,
                ray_count,
            );
        } else {
            color += (center_color + *corner_color) / 2.0;
        }
    }

    color / 4.0
}
