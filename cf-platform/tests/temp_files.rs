use anyhow::Result;
use cf_platform::{PlatformConfig, PlatformServices, SystemServices, TempKind, TEMP_PREFIX_ALL};
use std::collections::HashSet;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::thread;
use tempfile::TempDir;

/// Scratch directory fixture with services pointed at it
struct ScratchFixture {
    dir: TempDir,
}

impl ScratchFixture {
    fn new() -> Result<Self> {
        Ok(Self { dir: TempDir::new()? })
    }

    fn services(&self) -> SystemServices {
        SystemServices::with_config(PlatformConfig::default().with_temp_dir(self.dir.path()))
    }

    fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }
}

#[test]
fn test_image_scenario_matches_documented_pattern() -> Result<()> {
    let fixture = ScratchFixture::new()?;
    let services = fixture.services();

    let file = services
        .temp_file_for_write(TempKind::Image)
        .expect("temp file");
    let name = file.path().file_name().unwrap().to_string_lossy().into_owned();

    assert_eq!(file.path().parent(), Some(fixture.dir.path()));
    assert!(name.starts_with("cf_"));
    assert!(name.ends_with(".tmp"));
    assert_eq!(name.len(), "cf_XXXXXX.tmp".len());
    assert_eq!(fs::metadata(file.path())?.len(), 0);
    Ok(())
}

#[test]
fn test_every_kind_is_writable() -> Result<()> {
    let fixture = ScratchFixture::new()?;
    let services = fixture.services();

    for kind in TempKind::ALL {
        let mut file = services.temp_file_for_write(kind).expect("temp file");
        writeln!(file, "startshape Tree")?;
        file.flush()?;
        assert_eq!(fs::read_to_string(file.path())?, "startshape Tree\n");
    }
    Ok(())
}

#[test]
fn test_concurrent_creation_never_collides() -> Result<()> {
    let fixture = ScratchFixture::new()?;
    let dir = fixture.path();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let dir = dir.clone();
            thread::spawn(move || {
                let services =
                    SystemServices::with_config(PlatformConfig::default().with_temp_dir(dir));
                (0..50)
                    .map(|_| {
                        services
                            .temp_file_for_write(TempKind::Image)
                            .expect("temp file")
                            .path()
                            .to_path_buf()
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut names = HashSet::new();
    for handle in handles {
        for name in handle.join().expect("worker thread") {
            assert!(names.insert(name), "duplicate temp file name");
        }
    }

    assert_eq!(names.len(), 400);
    assert_eq!(fixture.services().find_temp_files().len(), 400);
    Ok(())
}

#[test]
fn test_deleted_file_is_not_enumerated() -> Result<()> {
    let fixture = ScratchFixture::new()?;
    let services = fixture.services();

    let keep = services.temp_file_for_write(TempKind::Movie).unwrap().path().to_path_buf();
    let gone = services.temp_file_for_write(TempKind::Expansion).unwrap().path().to_path_buf();

    assert_eq!(services.delete_temp_file(&gone), 0);

    let found = services.find_temp_files();
    assert!(found.contains(&keep));
    assert!(!found.contains(&gone));
    Ok(())
}

#[test]
fn test_enumeration_skips_unrelated_files() -> Result<()> {
    let fixture = ScratchFixture::new()?;
    let services = fixture.services();
    fs::write(fixture.dir.path().join("render.png"), b"png")?;
    fs::write(fixture.dir.path().join("cf.tmp"), b"no underscore")?;
    fs::create_dir(fixture.dir.path().join("sessions"))?;

    services.temp_file_for_write(TempKind::Image).unwrap();

    let found = services.find_temp_files();
    assert_eq!(found.len(), 1);
    for path in &found {
        assert!(path.starts_with(fixture.dir.path()));
        let name = path.file_name().unwrap().to_string_lossy();
        assert!(name.starts_with(TEMP_PREFIX_ALL));
    }
    Ok(())
}

#[test]
fn test_delete_missing_file_is_non_fatal() -> Result<()> {
    let fixture = ScratchFixture::new()?;
    let services = fixture.services();

    assert_ne!(services.delete_temp_file(&fixture.dir.path().join("cf_nothere.tmp")), 0);
    Ok(())
}
