#[macro_use]
extern crate log;

use std::time::Instant;

use dialoguer::{theme::ColorfulTheme, Select};
use lin_reg::fit_predict;
use metrics::r_squared;
use nalgebra::{DMatrix, DVector};
use nanorand::{Rng, WyRand};
use reg_plot::{scatter, scatter_line, Figure, LineStyle, ScatterStyle};

const NUM_SAMPLES: usize = 200;
const SEED: u64 = 0;
const SLOPE: f64 = 2.0;
const INTERCEPT: f64 = 1.0;
const NOISE_SCALE: f64 = 3.0;

pub(crate) fn main() {
    pretty_env_logger::init();

    let datasets = vec!["exact line", "noisy line", "constant"];
    let d = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Select dataset")
        .items(&datasets)
        .default(1)
        .interact()
        .unwrap();

    let mut rng = WyRand::new_seed(SEED);
    // Deliberately unordered, the overlay sorts by x
    let xs: Vec<f64> = (0..NUM_SAMPLES).map(|_| rng.generate::<f64>() * 10.0).collect();
    let ys: Vec<f64> = match d {
        0 => xs.iter().map(|x| SLOPE * x + INTERCEPT).collect(),
        1 => xs
            .iter()
            .map(|x| SLOPE * x + INTERCEPT + (rng.generate::<f64>() * 2.0 - 1.0) * NOISE_SCALE)
            .collect(),
        2 => vec![INTERCEPT; NUM_SAMPLES],
        _ => panic!("invalid dataset selection"),
    };
    info!("got {} datapoints", ys.len());

    let features = DMatrix::from_column_slice(NUM_SAMPLES, 1, &xs);
    let targets = DVector::from_vec(ys.clone());

    let t0 = Instant::now();
    let predictions = fit_predict(&features, &targets).unwrap();
    info!("fitting done in: {}μs", t0.elapsed().as_micros());

    let r2 = r_squared(&targets, &predictions).unwrap();
    info!("r_squared: {}", r2);

    let mut figure =
        Figure::new((1080, 1080)).with_caption(format!("{} (R² = {:.4})", datasets[d], r2));
    scatter(
        &mut figure,
        &xs,
        &ys,
        Some(ScatterStyle {
            alpha: 0.6,
            ..Default::default()
        }),
        Some("observations"),
    )
    .unwrap();
    scatter_line(
        &mut figure,
        &xs,
        &predictions,
        Some(LineStyle {
            width: 3,
            ..Default::default()
        }),
        Some("least squares fit"),
        true,
    )
    .unwrap();

    std::fs::create_dir_all("img").unwrap();
    let filename = format!("img/line_fit_{}.png", datasets[d].replace(' ', "_"));
    figure.save_png(&filename).unwrap();
}
