use argh::FromArgs;
use std::path::PathBuf;

use groundcal::setting::{read_ground_setting, write_ground_setting};

#[derive(FromArgs)]
/// Measure the ground footprint stored in a camera ground setting
struct Args {
    /// path to the ground setting file (.yaml, .yml or .json)
    #[argh(option)]
    setting_path: PathBuf,

    /// store the measurement back into the setting file
    #[argh(switch)]
    write: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let mut setting = read_ground_setting(&args.setting_path)?;
    log::info!(
        "camera at {} cm, yaw {} pitch {} roll {}, {} ground points",
        setting.camera_height,
        setting.yaw_angle,
        setting.pitch_angle,
        setting.roll_angle,
        setting.ground_coords.len()
    );

    let measurement = setting.measure()?;
    if measurement.is_empty() {
        log::warn!("no usable ground footprint within the selected points");
    }
    println!("Ground width: {:.3} m", measurement.width);
    println!("Ground depth: {:.3} m", measurement.depth);

    if let Some(previous) = setting.measurement() {
        println!(
            "Stored measurement: {:.3} m x {:.3} m",
            previous.width, previous.depth
        );
    }

    if args.write {
        setting.apply_measurement(measurement);
        write_ground_setting(&args.setting_path, &setting)?;
        log::info!("measurement saved to {}", args.setting_path.display());
    }

    Ok(())
}
