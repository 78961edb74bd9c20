/// pt3d Terminal Viewer
///
/// Renders a mesh file (plain-text `v`/`f` format) or the built-in unit
/// cube in the terminal. Controls:
///   - W/S: Move along the look direction
///   - A/D: Turn
///   - Arrow Keys: Slide up/down/left/right
///   - Q/ESC: Quit
use clap::Parser;
use pt3d_core::{load_mesh, Mesh};
use pt3d_terminal::TerminalApp;
use std::io;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "pt3d-terminal", about = "Painter's-algorithm terminal 3D viewer")]
struct Args {
    /// Mesh file in plain-text v/f format (defaults to the built-in cube)
    mesh: Option<PathBuf>,

    /// Freeze the world-transform spin
    #[arg(long)]
    still: bool,

    /// Vertical field of view in degrees
    #[arg(long, default_value_t = 90.0)]
    fov: f32,
}

fn main() -> io::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mesh = match &args.mesh {
        Some(path) => match load_mesh(path) {
            Ok(mesh) => {
                log::info!("loaded {}: {} triangles", path.display(), mesh.triangles.len());
                mesh
            }
            Err(err) => {
                // No scene, nothing to render.
                eprintln!("fatal: {err}");
                process::exit(1);
            }
        },
        None => Mesh::unit_cube(),
    };

    let mut app = TerminalApp::with_fov(mesh, args.fov.to_radians())?;
    if args.still {
        app.set_spin(false);
    }
    app.run()
}
