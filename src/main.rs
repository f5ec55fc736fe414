use blur_meter::{evaluate_sharpness, MeterError};

fn main() -> Result<(), MeterError> {
    // Demo stub: scores a synthetic horizontal luminance ramp
    let w = 640usize;
    let h = 480usize;
    let mut pixels = vec![0u8; w * h * 4];
    for y in 0..h {
        for x in 0..w {
            let v = (x * 255 / (w - 1)) as u8;
            let i = (y * w + x) * 4;
            pixels[i] = v;
            pixels[i + 1] = v;
            pixels[i + 2] = v;
            pixels[i + 3] = 255;
        }
    }

    let res = evaluate_sharpness(&pixels, w, h, None)?;
    println!("score={} variance={:.3}", res.score, res.variance);
    Ok(())
}
