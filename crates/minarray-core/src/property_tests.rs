//! Property-based tests for array operations
//!
//! Engine results are compared against reference computations on plain
//! nested vectors, across random shapes and values.

#[cfg(test)]
mod tests {
    use crate::{Array, ElementType};
    use proptest::prelude::*;

    // Small matrices with entries bounded so f64 sums stay exact
    fn matrix_strategy() -> impl Strategy<Value = (usize, usize, Vec<i64>)> {
        (1usize..7, 1usize..7).prop_flat_map(|(rows, cols)| {
            (
                Just(rows),
                Just(cols),
                prop::collection::vec(-1000i64..1000, rows * cols),
            )
        })
    }

    fn dtype_strategy() -> impl Strategy<Value = ElementType> {
        prop::sample::select(ElementType::ALL.to_vec())
    }

    fn build(values: &[i64], rows: usize, cols: usize, dtype: ElementType) -> Array {
        let as_f64: Vec<f64> = values.iter().map(|&v| v as f64).collect();
        Array::from_f64(&as_f64, &[rows, cols], dtype).unwrap()
    }

    fn transpose_ref(values: &[i64], rows: usize, cols: usize) -> Vec<i64> {
        (0..cols)
            .flat_map(|j| (0..rows).map(move |i| values[i * cols + j]))
            .collect()
    }

    fn as_f64(values: &[i64]) -> Vec<f64> {
        values.iter().map(|&v| v as f64).collect()
    }

    proptest! {
        #[test]
        fn prop_ravel_roundtrip(
            (rows, cols, values) in matrix_strategy(),
            dtype in dtype_strategy(),
        ) {
            let a = build(&values, rows, cols, dtype);
            prop_assert_eq!(a.to_f64_vec(), as_f64(&values));
        }

        #[test]
        fn prop_double_transpose_is_identity((rows, cols, values) in matrix_strategy()) {
            let mut a = build(&values, rows, cols, ElementType::Int64);
            let layout = a.layout();
            a.transpose(&[1, 0]).unwrap();
            a.transpose(&[1, 0]).unwrap();
            prop_assert_eq!(a.layout(), layout);
            prop_assert_eq!(a.to_vec::<i64>().unwrap(), values);
        }

        #[test]
        fn prop_ravel_of_transpose_is_matrix_transpose(
            (rows, cols, values) in matrix_strategy(),
            dtype in dtype_strategy(),
        ) {
            let mut a = build(&values, rows, cols, dtype);
            a.transpose(&[1, 0]).unwrap();
            prop_assert_eq!(a.to_f64_vec(), as_f64(&transpose_ref(&values, rows, cols)));
        }

        #[test]
        fn prop_sum_of_transpose_swaps_axes(
            (rows, cols, values) in matrix_strategy(),
            axis in 0usize..2,
        ) {
            let a = build(&values, rows, cols, ElementType::Int64);
            let mut t = a.copy();
            t.transpose(&[1, 0]).unwrap();
            let direct = a.sum(axis).unwrap();
            let swapped = t.sum(1 - axis).unwrap();
            prop_assert_eq!(direct.to_vec::<i64>().unwrap(), swapped.to_vec::<i64>().unwrap());
        }

        #[test]
        fn prop_sum_matches_reference(
            (rows, cols, values) in matrix_strategy(),
            dtype in dtype_strategy(),
        ) {
            let a = build(&values, rows, cols, dtype);
            let col_sums: Vec<f64> = (0..cols)
                .map(|j| (0..rows).map(|i| values[i * cols + j]).sum::<i64>() as f64)
                .collect();
            let row_sums: Vec<f64> = (0..rows)
                .map(|i| values[i * cols..(i + 1) * cols].iter().sum::<i64>() as f64)
                .collect();
            prop_assert_eq!(a.sum(0).unwrap().to_f64_vec(), col_sums);
            prop_assert_eq!(a.sum(1).unwrap().to_f64_vec(), row_sums);
        }

        #[test]
        fn prop_dot_matches_naive(
            (m, n, p) in (1usize..6, 1usize..6, 1usize..6),
            seed in prop::collection::vec(-50i64..50, 72),
            dtype in dtype_strategy(),
        ) {
            let lhs = &seed[..m * n];
            let rhs = &seed[36..36 + n * p];
            let a = build(lhs, m, n, dtype);
            let b = build(rhs, n, p, dtype);
            let cell = |i: usize, j: usize| {
                (0..n).map(|k| lhs[i * n + k] * rhs[k * p + j]).sum::<i64>() as f64
            };
            let expected: Vec<f64> = (0..m)
                .flat_map(|i| (0..p).map(move |j| (i, j)))
                .map(|(i, j)| cell(i, j))
                .collect();
            let c = a.dot(&b).unwrap();
            prop_assert_eq!(c.shape(), &[m, p]);
            prop_assert_eq!(c.to_f64_vec(), expected);
        }

        #[test]
        fn prop_operands_restored(
            (rows, cols, values) in matrix_strategy(),
            transposed in any::<bool>(),
        ) {
            let mut a = build(&values, rows, cols, ElementType::Float64);
            if transposed {
                a.transpose(&[1, 0]).unwrap();
            }
            let layout = a.layout();
            let bytes = a.as_bytes().to_vec();
            let ones = Array::ones(&[a.shape()[1], 2], ElementType::Float64).unwrap();

            let _ = a.sum(0).unwrap();
            let _ = a.sum(1).unwrap();
            let _ = a.dot(&ones).unwrap();
            let _ = a.dot(&a);
            let _ = a.to_string();

            prop_assert_eq!(a.layout(), layout);
            prop_assert_eq!(a.as_bytes(), bytes.as_slice());
        }
    }
}
