use serde_json::{json, Value};

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
}

fn main() -> anyhow::Result<()> {
    let output_path = std::env::args().nth(1).unwrap_or_else(|| "data.json".to_string());
    let mut rng = SimpleRng::new(42);

    // (product, category, base price)
    let products = [
        ("Laptop", "Electronics", 1200.0),
        ("Headphones", "Electronics", 150.0),
        ("Monitor", "Electronics", 300.0),
        ("Desk", "Furniture", 350.0),
        ("Office Chair", "Furniture", 220.0),
        ("Bookshelf", "Furniture", 180.0),
        ("Notebook", "Stationery", 4.5),
        ("Fountain Pen", "Stationery", 35.0),
    ];
    let regions = ["North", "South", "East", "West"];

    let mut rows: Vec<Value> = Vec::new();
    for (product, category, price) in products {
        for region in regions {
            let units = 1 + (rng.next_f64() * 40.0) as u32;
            let sales = (price * units as f64 * 100.0).round() / 100.0;

            // Some sources ship amounts as text; keep a few to exercise coercion.
            let sales = if rng.next_f64() < 0.25 {
                json!(sales.to_string())
            } else {
                json!(sales)
            };

            rows.push(json!({
                "product": product,
                "category": category,
                "region": region,
                "sales": sales,
            }));
        }
    }

    let text = serde_json::to_string_pretty(&rows)?;
    std::fs::write(&output_path, text)?;

    println!("Wrote {} sales records to {output_path}", rows.len());
    Ok(())
}
