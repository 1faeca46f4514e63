use std::fs;
use std::process::ExitCode;

use anyhow::Context;

use velo_engine::logging::init_logging;
use velo_screens::{render_screen, Fonts, ScreenKind};

fn main() -> ExitCode {
    init_logging("info");

    let fonts = match Fonts::load() {
        Ok(fonts) => fonts,
        Err(err) => {
            log::error!("font setup failed: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut failures = 0u32;
    for kind in ScreenKind::ALL {
        match generate(kind, &fonts) {
            Ok(()) => log::info!("wrote {}", kind.file_name()),
            // One broken screen must not stop the rest of the set.
            Err(err) => {
                log::error!("{kind:?}: {err:#}");
                failures += 1;
            }
        }
    }

    if failures > 0 { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}

fn generate(kind: ScreenKind, fonts: &Fonts) -> anyhow::Result<()> {
    let png = render_screen(kind, fonts).with_context(|| format!("rendering {kind:?}"))?;
    fs::write(kind.file_name(), png).with_context(|| format!("writing {}", kind.file_name()))?;
    Ok(())
}
