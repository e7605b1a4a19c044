//! Derivative-free minimization via the Nelder-Mead simplex method.
//!
//! Used by the smoothing models and ARIMA to pick parameters that minimize
//! an in-sample error criterion. The search is deterministic: the initial
//! simplex is built from fixed coordinate steps, so repeated runs on the
//! same objective converge identically.

/// Configuration for the simplex search.
#[derive(Debug, Clone)]
pub struct NelderMeadConfig {
    /// Maximum number of iterations.
    pub max_iter: usize,
    /// Convergence tolerance on the objective spread across the simplex.
    pub tolerance: f64,
    /// Relative step used to build the initial simplex.
    pub initial_step: f64,
}

impl Default for NelderMeadConfig {
    fn default() -> Self {
        Self {
            max_iter: 500,
            tolerance: 1e-8,
            initial_step: 0.1,
        }
    }
}

/// Result of a simplex search.
#[derive(Debug, Clone)]
pub struct NelderMeadResult {
    /// Best point found.
    pub optimal_point: Vec<f64>,
    /// Objective value at the best point.
    pub optimal_value: f64,
    /// Iterations performed.
    pub iterations: usize,
}

const REFLECT: f64 = 1.0;
const EXPAND: f64 = 2.0;
const CONTRACT: f64 = 0.5;
const SHRINK: f64 = 0.5;

/// Minimize `objective` starting from `initial`, optionally clamping every
/// candidate point to per-coordinate `bounds`.
pub fn nelder_mead<F>(
    mut objective: F,
    initial: &[f64],
    bounds: Option<&[(f64, f64)]>,
    config: NelderMeadConfig,
) -> NelderMeadResult
where
    F: FnMut(&[f64]) -> f64,
{
    let n = initial.len();
    let clamp = |point: &mut [f64]| {
        if let Some(bounds) = bounds {
            for (value, (lo, hi)) in point.iter_mut().zip(bounds) {
                *value = value.clamp(*lo, *hi);
            }
        }
    };

    // Initial simplex: the start point plus one vertex stepped per coordinate.
    let mut simplex: Vec<Vec<f64>> = Vec::with_capacity(n + 1);
    simplex.push(initial.to_vec());
    for i in 0..n {
        let mut vertex = initial.to_vec();
        let step = if vertex[i].abs() > 1e-12 {
            vertex[i].abs() * config.initial_step
        } else {
            config.initial_step
        };
        vertex[i] += step;
        simplex.push(vertex);
    }
    for vertex in &mut simplex {
        clamp(vertex);
    }

    let mut values: Vec<f64> = simplex.iter().map(|p| objective(p)).collect();
    let mut iterations = 0;

    while iterations < config.max_iter {
        iterations += 1;

        // Keep the simplex ordered best-to-worst.
        let mut order: Vec<usize> = (0..=n).collect();
        order.sort_by(|&a, &b| {
            values[a]
                .partial_cmp(&values[b])
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        let reordered: Vec<Vec<f64>> = order.iter().map(|&i| simplex[i].clone()).collect();
        let reordered_values: Vec<f64> = order.iter().map(|&i| values[i]).collect();
        simplex = reordered;
        values = reordered_values;

        if (values[n] - values[0]).abs() <= config.tolerance {
            break;
        }

        // Centroid of all vertices except the worst.
        let mut centroid = vec![0.0; n];
        for vertex in simplex.iter().take(n) {
            for (c, v) in centroid.iter_mut().zip(vertex) {
                *c += v / n as f64;
            }
        }

        let worst = simplex[n].clone();
        let mut reflected: Vec<f64> = centroid
            .iter()
            .zip(&worst)
            .map(|(c, w)| c + REFLECT * (c - w))
            .collect();
        clamp(&mut reflected);
        let f_reflected = objective(&reflected);

        if f_reflected < values[0] {
            // Try expanding further along the reflection direction.
            let mut expanded: Vec<f64> = centroid
                .iter()
                .zip(&reflected)
                .map(|(c, r)| c + EXPAND * (r - c))
                .collect();
            clamp(&mut expanded);
            let f_expanded = objective(&expanded);
            if f_expanded < f_reflected {
                simplex[n] = expanded;
                values[n] = f_expanded;
            } else {
                simplex[n] = reflected;
                values[n] = f_reflected;
            }
        } else if f_reflected < values[n - 1] {
            simplex[n] = reflected;
            values[n] = f_reflected;
        } else {
            // Contract toward the centroid.
            let mut contracted: Vec<f64> = centroid
                .iter()
                .zip(&worst)
                .map(|(c, w)| c + CONTRACT * (w - c))
                .collect();
            clamp(&mut contracted);
            let f_contracted = objective(&contracted);
            if f_contracted < values[n] {
                simplex[n] = contracted;
                values[n] = f_contracted;
            } else {
                // Shrink everything toward the best vertex.
                let best = simplex[0].clone();
                for (vertex, value) in simplex.iter_mut().zip(values.iter_mut()).skip(1) {
                    for (v, b) in vertex.iter_mut().zip(&best) {
                        *v = b + SHRINK * (*v - b);
                    }
                    clamp(vertex);
                    *value = objective(vertex);
                }
            }
        }
    }

    let mut best = 0;
    for i in 1..=n {
        if values[i] < values[best] {
            best = i;
        }
    }

    NelderMeadResult {
        optimal_point: simplex[best].clone(),
        optimal_value: values[best],
        iterations,
    }
}
