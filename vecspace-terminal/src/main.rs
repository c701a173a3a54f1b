/// vecspace terminal viewer - wireframe cube
///
/// Controls:
///   - Mouse: Move the cube across the screen
///   - W/S: Move the cube along the depth axis
///   - Q/ESC: Quit
use std::io;
use vecspace_core::Mesh;
use vecspace_terminal::{init_logging, terminal_config, TerminalApp};

fn main() -> io::Result<()> {
    init_logging();

    let config = terminal_config();
    log::info!(
        "Starting {} v{} with {:?}",
        config.title,
        env!("CARGO_PKG_VERSION"),
        config
    );

    let app = TerminalApp::new(vec![Mesh::cube()], config);
    app.run()
}
