use super::dataset::TrainingRow;
use crate::error::TrainingError;
use crate::model::{FEATURE_ARITY, RegressionArtifact};

/// Intercept plus one coefficient per feature.
const DIM: usize = FEATURE_ARITY + 1;

const PIVOT_EPSILON: f64 = 1e-10;

/// Ordinary least squares over the four route features, solved through
/// the normal equations.
///
/// # Errors
///
/// [`TrainingError::InvalidData`] when the samples are degenerate
/// (e.g. a constant column making the system singular).
pub fn fit_linear_regression(rows: &[TrainingRow]) -> Result<RegressionArtifact, TrainingError> {
    let mut normal = [[0.0; DIM]; DIM];
    let mut rhs = [0.0; DIM];

    for row in rows {
        let features = row.features();
        let mut design = [1.0; DIM];
        design[1..].copy_from_slice(&features);

        for i in 0..DIM {
            for j in 0..DIM {
                normal[i][j] += design[i] * design[j];
            }
            rhs[i] += design[i] * row.target_speed;
        }
    }

    let solution = solve(normal, rhs).ok_or_else(|| {
        TrainingError::InvalidData(
            "degenerate training data: features are linearly dependent".to_string(),
        )
    })?;

    let mut weights = [0.0; FEATURE_ARITY];
    weights.copy_from_slice(&solution[1..]);
    Ok(RegressionArtifact::new(weights, solution[0]))
}

/// Gaussian elimination with partial pivoting. Returns `None` for a
/// singular system.
fn solve(mut a: [[f64; DIM]; DIM], mut b: [f64; DIM]) -> Option<[f64; DIM]> {
    for col in 0..DIM {
        let pivot = (col..DIM).max_by(|&i, &j| {
            a[i][col]
                .abs()
                .partial_cmp(&a[j][col].abs())
                .unwrap_or(std::cmp::Ordering::Equal)
        })?;
        if a[pivot][col].abs() < PIVOT_EPSILON {
            return None;
        }
        a.swap(col, pivot);
        b.swap(col, pivot);

        for row in (col + 1)..DIM {
            let factor = a[row][col] / a[col][col];
            for k in col..DIM {
                a[row][k] -= factor * a[col][k];
            }
            b[row] -= factor * b[col];
        }
    }

    let mut x = [0.0; DIM];
    for row in (0..DIM).rev() {
        let mut sum = b[row];
        for k in (row + 1)..DIM {
            sum -= a[row][k] * x[k];
        }
        x[row] = sum / a[row][row];
    }
    Some(x)
}
