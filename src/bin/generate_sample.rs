//! Writes a deterministic `car_prices.csv` so the dashboard can be exercised
//! without downloading the real dataset. State codes are lowercase and a
//! small fraction of rows has gaps, to exercise the loader's cleaning path.

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    // (make, models, typical price level)
    let makes: Vec<(&str, Vec<&str>, f64)> = vec![
        ("Ford", vec!["Fusion", "Focus", "Escape", "F-150"], 16_000.0),
        ("Kia", vec!["Optima", "Sorento", "Soul"], 13_000.0),
        ("Chevrolet", vec!["Cruze", "Malibu", "Impala"], 14_000.0),
        ("Toyota", vec!["Camry", "Corolla", "RAV4"], 17_000.0),
        ("BMW", vec!["3 Series", "5 Series", "X5"], 28_000.0),
        ("Nissan", vec!["Altima", "Sentra", "Rogue"], 13_500.0),
        ("Honda", vec!["Accord", "Civic", "CR-V"], 16_500.0),
        ("Hyundai", vec!["Sonata", "Elantra"], 12_500.0),
        ("Dodge", vec!["Charger", "Durango"], 15_000.0),
        ("Jeep", vec!["Wrangler", "Grand Cherokee"], 21_000.0),
        ("Mazda", vec!["Mazda3", "CX-5"], 14_500.0),
        ("Subaru", vec!["Outback", "Impreza"], 17_500.0),
    ];
    let states = [
        "ca", "tx", "fl", "ny", "pa", "oh", "il", "ga", "nc", "mi", "nj", "wa", "az", "tn",
        "mo", "md", "co", "mn", "wi", "nv", "ut", "on", // one non-US code, as in the source
    ];
    let transmissions = ["automatic", "automatic", "automatic", "manual"];
    let years: Vec<i32> = (2008..=2015).collect();

    let mut writer = csv::Writer::from_path("car_prices.csv")
        .expect("creating car_prices.csv");
    writer
        .write_record([
            "year",
            "make",
            "model",
            "trim",
            "transmission",
            "vin",
            "state",
            "odometer",
            "sellingprice",
        ])
        .expect("writing header");

    for i in 0..5000u32 {
        let (make, models, price_level) = rng.pick(&makes);
        let model = *rng.pick(models);
        let year = *rng.pick(&years);
        let state = *rng.pick(&states);
        let transmission = *rng.pick(&transmissions);

        // Older cars: lower price, higher odometer.
        let age = (2015 - year) as f64;
        let price = rng.gauss(price_level * (1.0 - 0.07 * age), price_level * 0.15);
        let price = price.max(500.0).round();
        let odometer = rng.gauss(12_000.0 * (age + 1.0), 8_000.0).max(100.0).round();

        // Roughly 2% of rows get a gap in a used column.
        let (transmission, odometer_field) = if rng.next_f64() < 0.02 {
            if rng.next_f64() < 0.5 {
                ("", odometer.to_string())
            } else {
                (transmission, String::new())
            }
        } else {
            (transmission, odometer.to_string())
        };

        writer
            .write_record([
                year.to_string(),
                (*make).to_string(),
                model.to_string(),
                "Base".to_string(),
                transmission.to_string(),
                format!("vin{i:05}"),
                state.to_string(),
                odometer_field,
                price.to_string(),
            ])
            .expect("writing row");
    }

    writer.flush().expect("flushing car_prices.csv");
    println!("Wrote car_prices.csv (5000 rows)");
}
