fn main() {
    use ndarray_goodsize::*;
    use std::time::Instant;

    let factors = FactorSet::default();

    let now = Instant::now();
    let table = SmoothTable::build_complete(&DEFAULT_MAX_EXPONENTS).unwrap();
    println!(
        "Built table: {} entries below {} in {} ms",
        table.len(),
        table.ceiling(),
        now.elapsed().as_millis()
    );

    let queries: Vec<u64> = (10_000..200_000).step_by(7).collect();

    let now = Instant::now();
    let walked: Vec<u64> = queries
        .iter()
        .map(|&q| {
            nearest_smooth(q, SearchDirection::Ascending, &factors)
                .unwrap()
                .get()
        })
        .collect();
    println!(
        "Factorization search, {} queries: {} ms",
        queries.len(),
        now.elapsed().as_millis()
    );

    let now = Instant::now();
    let looked_up: Vec<u64> = queries
        .iter()
        .map(|&q| table.lookup_larger(q).unwrap())
        .collect();
    println!(
        "Table lookup, {} queries: {} ms",
        queries.len(),
        now.elapsed().as_millis()
    );

    assert_eq!(walked, looked_up);

    // the artifact consumed by downstream lookup callers
    let fragment = rust_source_fragment("SMOOTH_SIZES", table.prefix(DEFAULT_TABLE_LEN).unwrap());
    println!("Emitted fragment: {} bytes", fragment.len());
}
