use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
    thread,
    time::Instant,
};

use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::{
    camera::Camera,
    film::Film,
    halla_debug, halla_info,
    integrators::{Whitted, WhittedParams},
    sampling::{self, SamplerSettings},
    scene::Scene,
};

#[derive(Copy, Clone, Debug, Deserialize, Serialize)]
pub struct RenderSettings {
    /// Worker count, 0 uses all logical cores
    pub threads: usize,
    /// Reflection and refraction recursion limit
    pub max_depth: u32,
    /// Sample the scene's environment map on misses
    pub environment: bool,
    pub sampler: SamplerSettings,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            threads: 0,
            max_depth: 3,
            environment: true,
            sampler: SamplerSettings::default(),
        }
    }
}

#[derive(Copy, Clone)]
pub struct RenderResult {
    pub secs: f32,
    pub ray_count: usize,
}

/// Renders a full image pass into `film`. Workers pull pixel indices off a
/// shared counter, so writes never overlap. Blocks until every pixel is
/// done, there is no mid-pass cancellation.
pub fn render(
    scene: &Arc<Scene>,
    camera: &Camera,
    film: &Arc<Mutex<Film>>,
    settings: RenderSettings,
) -> RenderResult {
    let render_start = Instant::now();

    let (width, height) = {
        let film = film.lock().unwrap();
        (film.width(), film.height())
    };
    let pixel_count = width * height;

    let thread_count = if settings.threads == 0 {
        num_cpus::get()
    } else {
        settings.threads
    };
    let next_pixel = Arc::new(AtomicUsize::new(0));
    let seed: u64 = rand::thread_rng().gen();

    halla_debug!(
        "render: Launching {} workers over {} pixels",
        thread_count,
        pixel_count
    );

    let workers: Vec<_> = (0..thread_count)
        .map(|worker_id| {
            let scene = Arc::clone(scene);
            let film = Arc::clone(film);
            let camera = camera.clone();
            let next_pixel = Arc::clone(&next_pixel);

            thread::spawn(move || {
                // Pcg streams keep workers decorrelated under the shared seed
                let mut rng = Pcg32::new(seed, worker_id as u64);
                let whitted = Whitted::new(WhittedParams {
                    max_depth: settings.max_depth,
                    environment: settings.environment,
                });

                let mut ray_count = 0;
                loop {
                    let index = next_pixel.fetch_add(1, Ordering::Relaxed);
                    if index >= pixel_count {
                        break;
                    }
                    let x = index % width;
                    let y = index / width;

                    let (color, rays) = sampling::sample_pixel(
                        &whitted,
                        &scene,
                        &camera,
                        x,
                        y,
                        width,
                        height,
                        settings.sampler,
                        &mut rng,
                    );
                    ray_count += rays;

                    film.lock().unwrap().set_pixel(x, y, color);
                }
                ray_count
            })
        })
        .collect();

    let mut ray_count = 0;
    for worker in workers {
        ray_count += worker.join().unwrap();
    }

    film.lock().unwrap().set_ready(true);

    let secs = (render_start.elapsed().as_micros() as f32) * 1e-6;
    halla_info!("render: {} rays in {:.2}s", ray_count, secs);

    RenderResult { secs, ray_count }
}
