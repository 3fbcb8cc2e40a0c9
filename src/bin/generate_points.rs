use std::fs::File;
use std::io::{BufWriter, Write};

use anyhow::{Context, Result};

/// Semi-axes of the spheroid the points are drawn from.
const SEMI_AXES: [f64; 3] = [0.25, 0.25, 0.15];
const POINT_COUNT: usize = 5000;

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

    /// Uniform in `[-1, 1)`.
    fn next_signed(&mut self) -> f64 {
        let unit = (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64;
        unit * 2.0 - 1.0
    }

    /// Rejection-sample a point inside the unit ball.
    fn in_unit_ball(&mut self) -> [f64; 3] {
        loop {
            let p = [self.next_signed(), self.next_signed(), self.next_signed()];
            if p.iter().map(|c| c * c).sum::<f64>() <= 1.0 {
                return p;
            }
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let mut rng = SimpleRng::new(42);

    let output_path = "position.txt";
    let file = File::create(output_path).context("creating output file")?;
    let mut out = BufWriter::new(file);

    // Fourth column is the point index; the viewer ignores it.
    for i in 0..POINT_COUNT {
        let [u, v, w] = rng.in_unit_ball();
        writeln!(
            out,
            "{:.6} {:.6} {:.6} {i}",
            u * SEMI_AXES[0],
            v * SEMI_AXES[1],
            w * SEMI_AXES[2]
        )
        .context("writing point")?;
    }
    out.flush().context("flushing output file")?;

    log::info!("Wrote {POINT_COUNT} points to {output_path}");
    println!("Wrote {POINT_COUNT} points inside a spheroid to {output_path}");
    Ok(())
}
