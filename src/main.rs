use cube_viewer::WindowSettings;
use tracing_subscriber::EnvFilter;

const CONTROLS: &str = "\
Controls:
  R   - Start rotation
  T   - Stop rotation
  +   - Zoom in
  -   - Zoom out
  ESC - Exit";

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "cube-viewer starting");
    println!("{CONTROLS}");

    cube_viewer::run(WindowSettings::default())
}
