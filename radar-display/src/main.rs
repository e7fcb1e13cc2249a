use clap::Parser;
use log::{error, info, warn};
use piston_window::{EventLoop, PistonWindow, WindowSettings};
use plotters::drawing::IntoDrawingArea;
use plotters_piston::{draw_piston_window, PistonBackend};
use radar_data::ScanState;
use radar_display::{render, Args, Config, Geometry, Scene};
use radar_driver::RadarLink;
use std::error::Error;
use std::process::ExitCode;

fn run(config: &Config) -> Result<(), Box<dyn Error>> {
    let port_name = &config.serial.port;
    let mut link = match RadarLink::open(port_name, config.serial.baud_rate) {
        Ok(link) => link,
        Err(e) => return Err(format!("Failed to open \"{}\". Error: {}", port_name, e).into()),
    };
    info!(
        "Listening on {}",
        link.name().unwrap_or_else(|| port_name.clone())
    );

    let mut window: PistonWindow = WindowSettings::new(
        config.display.title.as_str(),
        [config.display.width, config.display.height],
    )
    .exit_on_esc(true)
    .resizable(false)
    .build()?;
    window.set_max_fps(config.display.fps);

    let geometry = Geometry::new(&config.display);
    let mut state = ScanState::new(config.radar.max_distance_cm);
    let mut n_readings = 0;
    let mut render_warned = false;

    loop {
        let summary = link
            .poll(&mut state)
            .map_err(|e| format!("Lost connection to \"{}\". Error: {}", port_name, e))?;
        n_readings += summary.accepted;

        let scene = Scene::build(&state, &geometry, config);
        let draw = |b: PistonBackend| {
            if let Err(e) = render(&b.into_drawing_area(), &scene) {
                if !render_warned {
                    warn!("Failed to draw frame: {}", e);
                    render_warned = true;
                }
            }
            Ok(())
        };
        if draw_piston_window(&mut window, draw).is_none() {
            break;
        }
    }

    info!(
        "Window closed after {} readings over {} angles",
        n_readings,
        state.len()
    );
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = match args.load_config() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    info!("Radar display starting");
    info!("  Port: {} @ {} baud", config.serial.port, config.serial.baud_rate);
    info!("  Range: {} cm", config.radar.max_distance_cm);
    info!("  Frame rate: {} fps", config.display.fps);

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
