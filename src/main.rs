use std::sync::{Arc, Mutex};

use halla::{
    camera::Camera,
    expect,
    film::{Film, FilmSettings},
    halla_info,
    renderer::{self, RenderResult, RenderSettings},
    scene::Scene,
};

fn setup_logger() -> Result<(), fern::InitError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}][{}:{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.level(),
                record.target(),
                record.line().unwrap_or(0),
                message
            ))
        })
        .level(log::LevelFilter::Info)
        .chain(std::io::stdout())
        .chain(std::fs::File::create("halla.log")?)
        .apply()?;
    Ok(())
}

fn main() {
    if let Err(why) = setup_logger() {
        panic!("{}", why);
    };

    let (scene, camera_params) = Scene::demo();
    let scene = Arc::new(scene);

    let film_settings = FilmSettings::default();
    let film = Arc::new(Mutex::new(Film::new(film_settings)));
    let camera = Camera::new(camera_params, film_settings.aspect_ratio());

    let RenderResult { secs, ray_count } =
        renderer::render(&scene, &camera, &film, RenderSettings::default());
    halla_info!("Render finished in {:.2}s with {} rays", secs, ray_count);

    let film = film.lock().unwrap();
    expect!(
        image::save_buffer(
            "render.png",
            film.pixels(),
            film.width() as u32,
            film.height() as u32,
            image::ColorType::Rgb8,
        ),
        "Failed to write render.png"
    );
    halla_info!("Wrote render.png");
}
