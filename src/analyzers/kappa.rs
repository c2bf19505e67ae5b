use std::collections::BTreeSet;
use anyhow::Result;

/// Cohen's Kappa between two aligned label sequences.
///
/// Unweighted: `1 - Σ_{a≠b} observed / Σ_{a≠b} expected`, where expected counts
/// come from the outer product of the two raters' marginals.
/// Returns NaN when expected disagreement is zero (one shared label only).
pub fn cohen_kappa<S: AsRef<str>>(first: &[S], second: &[S]) -> Result<f64> {
    if first.len() != second.len() {
        anyhow::bail!(
            "label sequences differ in length: {} vs {}",
            first.len(),
            second.len()
        );
    }
    if first.is_empty() {
        anyhow::bail!("cannot compute agreement on zero aligned labels");
    }

    let labels: Vec<&str> = first
        .iter()
        .chain(second.iter())
        .map(|s| s.as_ref())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    let index = |label: &str| labels.binary_search(&label).unwrap_or_default();

    let k = labels.len();
    let mut confusion = vec![vec![0usize; k]; k];
    for (a, b) in first.iter().zip(second.iter()) {
        confusion[index(a.as_ref())][index(b.as_ref())] += 1;
    }

    let n = first.len() as f64;
    let row_sums: Vec<f64> = confusion
        .iter()
        .map(|row| row.iter().sum::<usize>() as f64)
        .collect();
    let col_sums: Vec<f64> = (0..k)
        .map(|j| confusion.iter().map(|row| row[j]).sum::<usize>() as f64)
        .collect();

    let mut observed_disagreement = 0.0;
    let mut expected_disagreement = 0.0;
    for i in 0..k {
        for j in 0..k {
            if i == j {
                continue;
            }
            observed_disagreement += confusion[i][j] as f64;
            expected_disagreement += row_sums[i] * col_sums[j] / n;
        }
    }

    if expected_disagreement == 0.0 {
        return Ok(f64::NAN);
    }

    Ok(1.0 - observed_disagreement / expected_disagreement)
}
