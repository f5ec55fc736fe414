use blur_meter::config::meter::{load_config, OutputConfig, RuntimeConfig};
use blur_meter::image::io::{load_rgba_image, save_grayscale_f32, write_json_file};
use blur_meter::image::ImageF32;
use blur_meter::{grayscale, laplacian, Calibration, DetailedResult, MeterParams, SharpnessMeter};
use std::env;
use std::path::{Path, PathBuf};

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config = parse_args()?;

    let rgba = load_rgba_image(&config.input_path)?;
    let image = rgba.as_view();

    let meter = SharpnessMeter::new(MeterParams {
        calibration: config.calibration,
    });
    let detailed = meter
        .evaluate_with_diagnostics(image.clone())
        .map_err(|e| e.to_string())?;

    print_text_summary(&detailed);

    if let Some(path) = &config.output.json_out {
        write_json_file(path, &detailed)?;
        println!("JSON report written to {}", path.display());
    }

    if let Some(dir) = &config.output.debug_dir {
        save_debug_artifacts(dir, &image)?;
        println!("Debug artifacts written to {}", dir.display());
    }

    Ok(())
}

fn parse_args() -> Result<RuntimeConfig, String> {
    let mut args = env::args().skip(1);
    let usage = "usage: blur_demo <image> | blur_demo --config <config.json>";
    match args.next().as_deref() {
        Some("--config") => {
            let path = args.next().ok_or(usage)?;
            load_config(Path::new(&path))
        }
        Some(input) => Ok(RuntimeConfig {
            input_path: PathBuf::from(input),
            output: OutputConfig::default(),
            calibration: Calibration::default(),
        }),
        None => Err(usage.to_string()),
    }
}

fn print_text_summary(detailed: &DetailedResult) {
    println!("Sharpness summary");
    println!("  score: {}", detailed.result.score);
    println!("  variance: {:.3}", detailed.result.variance);
    println!(
        "  input: {}x{} ({} interior px)",
        detailed.input.width, detailed.input.height, detailed.stats.count
    );
    println!("  interior mean: {:.3}", detailed.stats.mean);
    let t = &detailed.timings;
    println!(
        "  timings_ms: grayscale {:.3} | laplacian {:.3} | variance {:.3} | total {:.3}",
        t.grayscale_ms, t.laplacian_ms, t.variance_ms, t.total_ms
    );
}

fn save_debug_artifacts(
    dir: &Path,
    image: &blur_meter::image::ImageRgba8<'_>,
) -> Result<(), String> {
    let lum = grayscale::luminance(image);
    save_grayscale_f32(&lum, &dir.join("luminance.png"))?;

    let resp = laplacian::laplacian(&lum);
    let mut magnitude = ImageF32::new(resp.w, resp.h);
    for (dst, &v) in magnitude.data.iter_mut().zip(resp.data.iter()) {
        *dst = v.abs();
    }
    save_grayscale_f32(&magnitude, &dir.join("laplacian_abs.png"))
}
