use std::fs::File;
use std::sync::Arc;

use arrow::array::Int64Array;
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

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

    // Fifty years of roughly exponential growth in publication volume,
    // with multiplicative noise, the shape of a maturing research field.
    let first_year: i64 = 1975;
    let last_year: i64 = 2024;

    let rows: Vec<(i64, i64)> = (first_year..=last_year)
        .map(|year| {
            let t = (year - first_year) as f64;
            let trend = 12.0 * (0.085 * t).exp();
            let count = rng.gauss(trend, trend * 0.15).max(0.0).round() as i64;
            (year, count)
        })
        .collect();

    write_csv("sample_publications.csv", &rows);
    write_json("sample_publications.json", &rows);
    write_parquet("sample_publications.parquet", &rows);

    println!(
        "Wrote {} years ({first_year}–{last_year}) to sample_publications.{{csv,json,parquet}}",
        rows.len()
    );
}

fn write_csv(path: &str, rows: &[(i64, i64)]) {
    let mut writer = csv::Writer::from_path(path).expect("Failed to create CSV file");
    writer
        .write_record(["Year", "Count"])
        .expect("Failed to write CSV header");
    for &(year, count) in rows {
        writer
            .write_record([year.to_string(), count.to_string()])
            .expect("Failed to write CSV row");
    }
    writer.flush().expect("Failed to flush CSV");
}

fn write_json(path: &str, rows: &[(i64, i64)]) {
    let records: Vec<serde_json::Value> = rows
        .iter()
        .map(|&(year, count)| serde_json::json!({ "Year": year, "Count": count }))
        .collect();
    let text = serde_json::to_string_pretty(&records).expect("Failed to serialize JSON");
    std::fs::write(path, text).expect("Failed to write JSON file");
}

fn write_parquet(path: &str, rows: &[(i64, i64)]) {
    let year_array = Int64Array::from(rows.iter().map(|&(y, _)| y).collect::<Vec<_>>());
    let count_array = Int64Array::from(rows.iter().map(|&(_, c)| c).collect::<Vec<_>>());

    let schema = Arc::new(Schema::new(vec![
        Field::new("Year", DataType::Int64, false),
        Field::new("Count", DataType::Int64, false),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![Arc::new(year_array), Arc::new(count_array)],
    )
    .expect("Failed to create RecordBatch");

    let file = File::create(path).expect("Failed to create output file");
    let mut writer = ArrowWriter::try_new(file, schema, None).expect("Failed to create writer");
    writer.write(&batch).expect("Failed to write batch");
    writer.close().expect("Failed to close writer");
}
