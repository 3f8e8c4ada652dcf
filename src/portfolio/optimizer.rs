//! # Mean-Variance Optimizer
//!
//! $$
//! \max_{\mathbf{w}\ge 0,\ \mathbf{1}^\top\mathbf{w}=1}
//! \ \mathbf{w}^\top\mu - \gamma\,\mathbf{w}^\top\Sigma\,\mathbf{w}
//! $$
//!
//! Long-only, fully-invested quadratic program solved with the Clarabel
//! interior-point solver. On non-convergence or infeasibility the solve
//! fails hard and no weights are produced.

use clarabel::algebra::*;
use clarabel::solver::*;
use ndarray::Array1;
use ndarray::Array2;
use tracing::debug;

use super::types::PortfolioResult;
use crate::error::MarkowitzError;
use crate::error::Result;

pub(crate) fn validate_inputs(mu: &Array1<f64>, sigma: &Array2<f64>) -> Result<()> {
  let n = mu.len();
  if n == 0 {
    return Err(MarkowitzError::invalid_input("empty return vector"));
  }
  if sigma.nrows() != n || sigma.ncols() != n {
    return Err(MarkowitzError::invalid_input(format!(
      "covariance matrix is {}x{}, expected {n}x{n}",
      sigma.nrows(),
      sigma.ncols()
    )));
  }
  if mu.iter().any(|v| !v.is_finite()) || sigma.iter().any(|v| !v.is_finite()) {
    return Err(MarkowitzError::invalid_input(
      "non-finite entries in return vector or covariance matrix",
    ));
  }

  // The quadratic form is only convex for a symmetric PSD matrix; anything
  // else would let the solver report success on a meaningless problem.
  let scale = (0..n)
    .map(|i| sigma[(i, i)].abs())
    .fold(1.0_f64, f64::max);
  for i in 0..n {
    for j in (i + 1)..n {
      if (sigma[(i, j)] - sigma[(j, i)]).abs() > 1e-8 * scale {
        return Err(MarkowitzError::invalid_input(
          "covariance matrix is not symmetric",
        ));
      }
    }
  }

  let sigma_na = nalgebra::DMatrix::from_fn(n, n, |i, j| sigma[(i, j)]);
  let min_eig = sigma_na
    .symmetric_eigenvalues()
    .iter()
    .cloned()
    .fold(f64::INFINITY, f64::min);
  if min_eig < -1e-8 * scale {
    return Err(MarkowitzError::optimization_failed(format!(
      "covariance matrix is not positive semidefinite (eigenvalue {min_eig:.3e})"
    )));
  }

  Ok(())
}

/// Dense column-major matrix to Clarabel CSC, dropping exact zeros.
fn to_csc(dense: &Array2<f64>) -> CscMatrix<f64> {
  let (m, n) = (dense.nrows(), dense.ncols());
  let mut data = Vec::new();
  let mut indices = Vec::new();
  let mut indptr = vec![0];

  for j in 0..n {
    for i in 0..m {
      let val = dense[(i, j)];
      if val.abs() > 1e-12 {
        data.push(val);
        indices.push(i);
      }
    }
    indptr.push(data.len());
  }

  CscMatrix::new(m, n, indptr, indices, data)
}

/// Solve `min ½wᵀPw + qᵀw  s.t.  Σw = 1, w ≥ 0` for the long-only simplex.
pub(crate) fn solve_simplex_qp(p: &Array2<f64>, q: &[f64]) -> Result<Array1<f64>> {
  let n = q.len();
  let p_csc = to_csc(p);

  // Budget row (zero cone) stacked on the negated identity (nonnegative
  // cone), column by column.
  let mut a_data = Vec::with_capacity(2 * n);
  let mut a_indices = Vec::with_capacity(2 * n);
  let mut a_indptr = vec![0];
  for j in 0..n {
    a_data.push(1.0);
    a_indices.push(0);
    a_data.push(-1.0);
    a_indices.push(1 + j);
    a_indptr.push(a_data.len());
  }
  let a = CscMatrix::new(1 + n, n, a_indptr, a_indices, a_data);

  let mut b = vec![1.0];
  b.extend(std::iter::repeat(0.0).take(n));

  let cones = [ZeroConeT(1), NonnegativeConeT(n)];

  let settings = DefaultSettingsBuilder::default()
    .verbose(false)
    .max_iter(200)
    .build()
    .map_err(|e| MarkowitzError::optimization_failed(format!("solver settings: {e}")))?;

  let mut solver = DefaultSolver::new(&p_csc, q, &a, &b, &cones, settings)
    .map_err(|e| MarkowitzError::optimization_failed(format!("solver setup: {e:?}")))?;
  solver.solve();

  if !matches!(solver.solution.status, SolverStatus::Solved) {
    return Err(MarkowitzError::optimization_failed(format!(
      "solver status {:?}",
      solver.solution.status
    )));
  }

  // Clamp numerical dust and renormalize onto the simplex.
  let mut w: Array1<f64> = solver.solution.x.iter().map(|&x| x.max(0.0)).collect();
  let total = w.sum();
  if total <= 1e-8 || !total.is_finite() {
    return Err(MarkowitzError::optimization_failed(
      "degenerate solution: weights do not sum to a positive value",
    ));
  }
  w.mapv_inplace(|x| x / total);

  Ok(w)
}

pub(crate) fn realized_return(w: &Array1<f64>, mu: &Array1<f64>) -> f64 {
  w.dot(mu)
}

pub(crate) fn realized_volatility(w: &Array1<f64>, sigma: &Array2<f64>) -> f64 {
  w.dot(&sigma.dot(w)).max(0.0).sqrt()
}

/// Maximize `wᵀμ − γ·wᵀΣw` over the long-only simplex.
///
/// `γ ≥ 0` trades expected return against variance; `γ = 0` degenerates to
/// picking the best-return vertex.
pub fn optimize(mu: &Array1<f64>, sigma: &Array2<f64>, gamma: f64) -> Result<PortfolioResult> {
  validate_inputs(mu, sigma)?;
  if !gamma.is_finite() || gamma < 0.0 {
    return Err(MarkowitzError::invalid_input(format!(
      "risk aversion must be finite and non-negative, got {gamma}"
    )));
  }

  // Clarabel minimizes ½wᵀPw + qᵀw, so P = 2γΣ and q = −μ.
  let p = sigma * (2.0 * gamma);
  let q: Vec<f64> = mu.iter().map(|&v| -v).collect();

  let w = solve_simplex_qp(&p, &q)?;
  let expected_return = realized_return(&w, mu);
  let volatility = realized_volatility(&w, sigma);
  debug!(gamma, expected_return, volatility, "mean-variance solve done");

  Ok(PortfolioResult {
    weights: w,
    expected_return,
    volatility,
  })
}
