/// cubeview terminal viewer
///
/// Renders the six-faced cube with the terminal ASCII rasterizer.
/// Controls:
///   - Left mouse drag: Rotate the cube
///   - Scroll wheel: Scale the cube
///   - Arrow Keys: Nudge the rotation
///   - R: Reset
///   - Q/ESC: Quit
///
/// Logs go to stderr; filter with `RUST_LOG` and redirect with `2>file`.

use std::io;
use cubeview_terminal::{config::USAGE, TerminalApp, ViewerConfig};
use tracing_subscriber::EnvFilter;

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cubeview=info".into()),
        )
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        println!("{}", USAGE);
        return Ok(());
    }

    let config = ViewerConfig::from_args(args)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    tracing::info!(?config, "starting terminal viewer");

    let mut app = TerminalApp::new(config)?;
    app.run()?;

    println!("Thank you for using cubeview!");
    Ok(())
}
