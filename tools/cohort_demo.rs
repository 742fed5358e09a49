//! Synthetic Cohort Demo
//!
//! Generates random patient measurement records, scores them with the
//! trained model, and prints a score-distribution summary.

use class_ii_predictor::{AppConfig, Measurements, MolarClass, Scorer};
use rand::Rng;
use tracing::{info, warn};

/// Measurement generator producing records in plausible clinical ranges
struct CohortGenerator {
    rng: rand::rngs::ThreadRng,
    class_ii_share: f64,
}

impl CohortGenerator {
    fn new(class_ii_share: f64) -> Self {
        Self {
            rng: rand::thread_rng(),
            class_ii_share,
        }
    }

    fn generate(&mut self) -> Measurements {
        let molar_class = if self.rng.gen_bool(self.class_ii_share) {
            MolarClass::ClassII
        } else {
            MolarClass::ClassI
        };

        Measurements::new(
            self.rng.gen_range(0.5..9.0),   // overjet, mm
            self.rng.gen_range(0.55..0.75), // post/ant ratio
            self.rng.gen_range(31.0..46.0), // U6-6 width, mm
            self.rng.gen_range(75.0..95.0), // art-pog, mm
            self.rng.gen_range(0.0..6.0),   // leeway space, mm
            molar_class,
        )
    }
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("cohort_demo=info".parse()?),
        )
        .init();

    info!("Starting Synthetic Cohort Demo");

    // Parse arguments
    let args: Vec<String> = std::env::args().collect();
    let count: u64 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(100);
    let class_ii_share: f64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(0.5);

    info!(
        count = count,
        class_ii_share = class_ii_share,
        "Configuration loaded"
    );

    let config = match AppConfig::load() {
        Ok(config) => {
            info!("Model parameters loaded from config/config.toml");
            config
        }
        Err(e) => {
            warn!(error = %e, "Failed to load configuration, using trained defaults");
            AppConfig::default()
        }
    };

    let scorer = Scorer::new(&config)?;

    // Walk through one intake-default record first
    let sample = Measurements::default();
    let prediction = scorer.predict(&sample);

    info!(
        "Sample record:\n{}",
        serde_json::to_string_pretty(&sample)?
    );
    info!(
        "Predicted probability of Class II at T3: {}",
        prediction.percent()
    );
    info!("Standardized features:\n{}", scorer.scaled_table(&sample));

    // Score a synthetic cohort
    let mut generator = CohortGenerator::new(class_ii_share);
    let mut buckets = [0u64; 10];
    let mut probability_sum = 0.0;
    let mut class_ii_count = 0u64;

    for _ in 0..count {
        let measurements = generator.generate();
        if measurements.molar_class == MolarClass::ClassII {
            class_ii_count += 1;
        }

        let prediction = scorer.predict(&measurements);
        probability_sum += prediction.probability;

        let bucket = ((prediction.probability * 10.0) as usize).min(9);
        buckets[bucket] += 1;
    }

    let mean = probability_sum / count.max(1) as f64;
    info!(
        "Scored {} records ({} Class II at T2), mean probability {:.3}",
        count, class_ii_count, mean
    );

    info!("Probability distribution:");
    for (i, &n) in buckets.iter().enumerate() {
        let pct = if count > 0 {
            n as f64 / count as f64 * 100.0
        } else {
            0.0
        };
        let bar: String = "█".repeat(((pct / 2.0) as usize).min(40));
        info!(
            "  {:.1}-{:.1}: {:>6} ({:>5.1}%) {}",
            i as f64 / 10.0,
            (i + 1) as f64 / 10.0,
            n,
            pct,
            bar
        );
    }

    Ok(())
}
