use anyhow::{Context, Result};

use salary_insights::FIELD_NAMES;

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

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[(self.next_u64() % items.len() as u64) as usize]
    }
}

const ROWS: usize = 500;

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    let years = ["2020", "2021", "2022", "2023"];
    let levels = ["EN", "MI", "SE", "EX"];
    let employment = ["FT", "PT", "CT", "FL"];
    let titles = [
        "Data Scientist",
        "Data Engineer",
        "Data Analyst",
        "Machine Learning Engineer",
        "Research Scientist",
        "Analytics Manager",
    ];
    let countries = ["US", "GB", "DE", "CA", "IN", "FR"];
    let sizes = ["S", "M", "L"];
    let remote = ["0", "50", "100"];
    // (code, units per USD)
    let currencies = [("USD", 1.0), ("EUR", 0.92), ("GBP", 0.79), ("INR", 83.0)];

    let output_path = "salaries.csv";
    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("creating {output_path}"))?;
    writer.write_record(FIELD_NAMES)?;

    let mut invalid = 0;
    for i in 0..ROWS {
        let level = rng.pick(&levels);
        let base = match level {
            "EN" => 60_000.0,
            "MI" => 90_000.0,
            "SE" => 140_000.0,
            _ => 190_000.0,
        };
        let usd = (base * (0.7 + 0.6 * rng.next_f64())).round();
        let (currency, rate) = currencies[(rng.next_u64() % currencies.len() as u64) as usize];

        // Every 50th row fails the validity gate.
        let (year, usd_cell) = match i % 50 {
            17 => {
                invalid += 1;
                (String::new(), usd.to_string())
            }
            33 => {
                invalid += 1;
                (rng.pick(&years).to_string(), "0".to_string())
            }
            _ => (rng.pick(&years).to_string(), usd.to_string()),
        };

        let salary_cell = (usd * rate).round().to_string();
        let country = rng.pick(&countries);
        writer.write_record([
            year.as_str(),
            level,
            rng.pick(&employment),
            rng.pick(&titles),
            salary_cell.as_str(),
            currency,
            usd_cell.as_str(),
            country,
            rng.pick(&remote),
            country,
            rng.pick(&sizes),
        ])?;
    }
    writer.flush().context("flushing CSV writer")?;

    println!("Wrote {ROWS} rows ({invalid} deliberately invalid) to {output_path}");
    Ok(())
}
