#[macro_use]
extern crate clap;

use std::fmt::Debug;
use std::path::Path;
use std::process::exit;
use std::str::FromStr;

use clap::ArgMatches;
use ndarray::{ArrayView1, Axis};
use num_traits::Float;

use apclust::{AffinityPropagation, ApConfig, Clustering, Distance, Euclidean, Preference};

use crate::ops::{display_results, from_file};

mod ops;

fn main() {
    let matches = clap_app!(apclust =>
        (version: "0.1.0")
        (about: "Affinity propagation clustering over tab-delimited data")
        (@arg INPUT: -i --input +takes_value +required "Path to tab-delimited input file")
        (@arg PRECALC: -x --precalculated "Input is a precalculated n x n distance matrix")
        (@arg MAX_ITER: -m --max_iter +takes_value "Total iterations to run, default=100")
        (@arg DAMPING: -d --damping +takes_value "Damping factor in range [0, 1), default=0.9")
        (@arg PREF: -p --preference +takes_value "Preference policy: median/min/max/average/constant, default=median")
        (@arg CONST: -c --constant +takes_value +allow_hyphen_values "Preference value when policy is constant, default=-1")
        (@arg NOISE: -n --noise "Perturb similarities with random noise to break ties")
        (@arg SCALE: -s --noise_scale +takes_value "Upper bound of the noise draw, default=1e-8")
        (@arg SEED: -e --seed +takes_value +allow_hyphen_values "Random seed, negative for non-reproducible, default=-1")
        (@arg PRECISION: -r --precision +takes_value "Set f32 or f64 precision, default=f32")
    )
    .get_matches();

    let input_file = matches.value_of("INPUT").unwrap().to_string();
    if !Path::new(&input_file).exists() {
        eprintln!("Unable to locate input file {}", input_file);
        exit(1);
    }
    match matches.value_of("PRECISION").unwrap_or("f32") {
        "f64" => run::<f64>(&matches, &input_file),
        _ => run::<f32>(&matches, &input_file),
    };
}

fn run<F>(matches: &ArgMatches, input_file: &str)
where
    F: Float + Default + FromStr,
    <F as FromStr>::Err: Debug,
{
    let max_iterations = matches
        .value_of("MAX_ITER")
        .unwrap_or("100")
        .parse::<usize>()
        .unwrap_or_else(|_| {
            eprintln!("Unable to parse max_iter");
            exit(1);
        });
    let damping = matches
        .value_of("DAMPING")
        .unwrap_or("0.9")
        .parse::<f64>()
        .unwrap_or_else(|_| {
            eprintln!("Unable to parse damping");
            exit(1);
        });
    if !(0. ..1.).contains(&damping) {
        eprintln!("Damping must be in range [0, 1)");
        exit(2);
    }
    let constant = matches
        .value_of("CONST")
        .unwrap_or("-1")
        .parse::<f64>()
        .unwrap_or_else(|_| {
            eprintln!("Unable to parse constant preference");
            exit(1);
        });
    let preference = Preference::parse(
        matches.value_of("PREF").unwrap_or("median"),
        F::from(constant).unwrap(),
    )
    .unwrap_or_else(|e| {
        eprintln!("{}", e);
        exit(2);
    });
    let noise_scale = matches
        .value_of("SCALE")
        .unwrap_or("1e-8")
        .parse::<f64>()
        .unwrap_or_else(|_| {
            eprintln!("Unable to parse noise_scale");
            exit(1);
        });
    let random_seed = matches
        .value_of("SEED")
        .unwrap_or("-1")
        .parse::<i64>()
        .unwrap_or_else(|_| {
            eprintln!("Unable to parse seed");
            exit(1);
        });

    let config = ApConfig {
        max_iterations,
        damping: F::from(damping).unwrap(),
        preference,
        random_noise: matches.is_present("NOISE"),
        noise_scale: F::from(noise_scale).unwrap(),
        random_seed,
    };
    let ap = AffinityPropagation::new(config);

    let is_precalculated = matches.is_present("PRECALC");
    let (data, ids) = from_file::<F>(Path::new(input_file).to_path_buf(), "\t", is_precalculated)
        .unwrap_or_else(|e| {
            eprintln!("{}", e.message);
            exit(1);
        });
    let labels = if is_precalculated {
        ap.cluster_matrix(&data)
    } else {
        let metric = Euclidean::default();
        let rows: Vec<ArrayView1<F>> = data.axis_iter(Axis(0)).collect();
        ap.cluster_items(&rows, |a, b| metric.distance(a, b))
    };
    display_results(&labels, &ids);
}
