//! Demo showing the platform services API

use cf_core::cf_println;
use cf_platform::{PlatformServices, SystemServices, TempKind};
use std::io::Write;

fn main() -> anyhow::Result<()> {
    cf_core::tracing_init::init()?;
    let mut services = SystemServices::new();

    cf_println!("=== Context Free Platform Demo ===");
    cf_println!("Memory probe: {}", services.memory_probe_name());
    cf_println!("Physical memory: {} bytes", services.physical_memory());
    cf_println!("Temp directory: {}", services.temp_file_directory().display());

    // Scratch file round trip
    let mut file = services
        .temp_file_for_write(TempKind::Image)
        .ok_or_else(|| anyhow::anyhow!("could not create a scratch file"))?;
    file.write_all(b"scratch")?;
    file.flush()?;
    let path = file.path().to_path_buf();
    drop(file);
    cf_println!("Created: {}", path.display());
    cf_println!("Scratch files on disk: {}", services.find_temp_files().len());
    cf_println!("Delete status: {}", services.delete_temp_file(&path));

    // Filename normalization
    for name in ["cafe\u{301}.cfdg", "\u{FB01}eld.cfdg", "\u{FF34}ree.cfdg"] {
        let wide = services.normalize(name.as_bytes())?;
        cf_println!("{:?} -> {:?}", name, wide);
    }

    for step in 1..=3 {
        services.clear_and_cr();
        eprint!("Rendering step {}/3", step);
    }
    services.clear_and_cr();
    cf_println!("Done");

    Ok(())
}
