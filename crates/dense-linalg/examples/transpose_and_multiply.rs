use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

use dense_linalg::{find_projection, Axis, DenseMatrix, DenseVector, LinalgConfig};

fn main() -> Result<()> {
    env_logger::init();

    let config = LinalgConfig::from_env().context("failed to read linear algebra config")?;
    println!("Config: {:?}", config);

    let a = DenseMatrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]])?;
    println!("A ({:?}):\n{}", a.orientation(), a);

    // Transposing only relabels the storage.
    let at = a.clone().transposed();
    println!("A^T ({:?}):\n{}", at.orientation(), at);

    let gram = a.try_mul(&at)?;
    println!("A * A^T:\n{}", gram);

    let mut rng = StdRng::seed_from_u64(42);
    let b = DenseMatrix::random(3, 3, -1.0, 1.0, &mut rng)
        .to_orientation(config.default_orientation);
    let ab = a.try_mul(&b)?;
    println!("A * B (B random, {:?}):\n{}", b.orientation(), ab);

    // Grow the matrix a row at a time.
    let mut m = config.zeros(0, 3);
    for i in 0..4 {
        let row: DenseVector = (0..3).map(|c| (i * 3 + c) as f64).collect();
        m.add_row(&row)?;
    }
    println!("Grown to {:?}:\n{}", m.shape(), m);

    let v = DenseVector::from([3.0, 4.0]);
    let onto = DenseVector::from([1.0, 0.0]);
    let proj = find_projection(&v, &onto)?;
    println!("|v| = {}, proj of {} onto {} = {}", v.magnitude(), v, onto, proj);

    let outer = DenseMatrix::outer(&v, &onto);
    let product = &DenseMatrix::from_vector(&v, Axis::Column)
        * &DenseMatrix::from_vector(&onto, Axis::Row);
    println!(
        "outer product agrees with column * row: {}",
        config.matrices_equal(&outer, &product)
    );

    Ok(())
}
