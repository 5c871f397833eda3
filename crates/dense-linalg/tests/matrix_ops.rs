//! Integration tests for DenseMatrix construction, element access, row/column
//! operations, transposition and multiplication.

use dense_linalg::{Axis, DenseMatrix, DenseVector, LinalgError, Orientation};

const BOTH: [Orientation; 2] = [Orientation::RowMajor, Orientation::ColumnMajor];

fn sample() -> DenseMatrix {
    DenseMatrix::from_rows(&[[4.0, 5.0, 7.0], [3.0, 7.0, 2.0], [9.0, 3.0, 1.0]]).unwrap()
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

#[test]
fn default_matrix_is_0_by_0() {
    let m = DenseMatrix::new();
    assert_eq!(m.num_rows(), 0);
    assert_eq!(m.num_cols(), 0);
    assert!(m.is_empty());
}

#[test]
fn zeros_defaults_to_column_major() {
    let m = DenseMatrix::zeros(3, 2);
    assert_eq!(m.shape(), (3, 2));
    assert_eq!(m.orientation(), Orientation::ColumnMajor);
    for r in 0..3 {
        for c in 0..2 {
            assert_eq!(m.value_at(r, c), 0.0);
        }
    }
}

#[test]
fn from_rows_places_values() {
    let m = DenseMatrix::from_rows(&[[4.0, 5.0], [6.0, 7.0]]).unwrap();
    assert_eq!(m.value_at(0, 0), 4.0);
    assert_eq!(m.value_at(0, 1), 5.0);
    assert_eq!(m.value_at(1, 0), 6.0);
    assert_eq!(m.value_at(1, 1), 7.0);
}

#[test]
fn from_rows_rejects_ragged_table() {
    let table = vec![vec![1.0, 2.0], vec![3.0]];
    assert_eq!(
        DenseMatrix::from_rows(&table),
        Err(LinalgError::RaggedRows {
            row: 1,
            expected: 2,
            found: 1
        })
    );
}

#[test]
fn from_rows_of_empty_table_is_empty() {
    let table: Vec<Vec<f64>> = Vec::new();
    let m = DenseMatrix::from_rows(&table).unwrap();
    assert_eq!(m.shape(), (0, 0));
}

#[test]
fn identity_is_identity() {
    let m = DenseMatrix::identity(3);
    assert!(m.equals(&[[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]));
}

#[test]
fn single_vector_matrices() {
    let v = DenseVector::from([1.0, 2.0, 3.0]);

    let row = DenseMatrix::from_vector(&v, Axis::Row);
    assert_eq!(row.shape(), (1, 3));
    assert_eq!(row.orientation(), Orientation::RowMajor);
    assert!(row.equals(&[[1.0, 2.0, 3.0]]));

    let col = DenseMatrix::from_vector(&v, Axis::Column);
    assert_eq!(col.shape(), (3, 1));
    assert_eq!(col.orientation(), Orientation::ColumnMajor);
    assert!(col.equals(&[[1.0], [2.0], [3.0]]));
}

#[test]
fn outer_product() {
    let col = DenseVector::from([1.0, 2.0]);
    let row = DenseVector::from([3.0, 4.0, 5.0]);
    let m = DenseMatrix::outer(&col, &row);
    assert_eq!(m.shape(), (2, 3));
    assert!(m.equals(&[[3.0, 4.0, 5.0], [6.0, 8.0, 10.0]]));
}

#[test]
fn to_orientation_preserves_values() {
    let m = sample();
    for o in BOTH {
        let relaid = m.to_orientation(o);
        assert_eq!(relaid.orientation(), o);
        assert_eq!(relaid, m);
    }
}

// ---------------------------------------------------------------------------
// Element access & equality
// ---------------------------------------------------------------------------

#[test]
fn equals_compares_against_table() {
    let m = sample();
    assert!(m.equals(&[[4.0, 5.0, 7.0], [3.0, 7.0, 2.0], [9.0, 3.0, 1.0]]));
    assert!(!m.equals(&[[4.0, 5.0, 7.0], [3.0, 7.0, 2.0]]));
    assert!(!m.equals(&[[4.0, 5.0, 7.0], [3.0, 7.0, 2.0], [9.0, 3.0, 1.5]]));
}

#[test]
fn value_at_out_of_bounds_is_nan() {
    let m = DenseMatrix::zeros(2, 2);
    assert!(m.value_at(2, 0).is_nan());
    assert!(m.value_at(0, 2).is_nan());
    assert_eq!(m.get(2, 0), None);
}

#[test]
fn set_value_at_in_both_orientations() {
    for o in BOTH {
        let mut m = DenseMatrix::zeros_with_orientation(2, 3, o);
        m.set_value_at(1, 2, 8.5).unwrap();
        m[(0, 1)] = -1.0;
        assert_eq!(m.value_at(1, 2), 8.5);
        assert_eq!(m[(0, 1)], -1.0);
        assert_eq!(
            m.set_value_at(2, 0, 1.0),
            Err(LinalgError::CellOutOfBounds {
                row: 2,
                col: 0,
                rows: 2,
                cols: 3
            })
        );
    }
}

#[test]
fn matrix_equality_ignores_orientation() {
    let a = sample();
    let mut b = sample().to_orientation(Orientation::RowMajor);
    assert_eq!(a, b);
    b[(2, 2)] = 100.0;
    assert_ne!(a, b);
}

// ---------------------------------------------------------------------------
// Row & column operations
// ---------------------------------------------------------------------------

#[test]
fn swap_rows_in_both_orientations() {
    for o in BOTH {
        let mut m = sample().to_orientation(o);
        m.swap_rows(0, 2).unwrap();
        assert!(m.equals(&[[9.0, 3.0, 1.0], [3.0, 7.0, 2.0], [4.0, 5.0, 7.0]]));
    }
}

#[test]
fn swap_cols_in_both_orientations() {
    for o in BOTH {
        let mut m = sample().to_orientation(o);
        m.swap_cols(0, 1).unwrap();
        assert!(m.equals(&[[5.0, 4.0, 7.0], [7.0, 3.0, 2.0], [3.0, 9.0, 1.0]]));
    }
}

#[test]
fn swap_out_of_bounds_leaves_matrix_unchanged() {
    let mut m = sample();
    assert_eq!(
        m.swap_rows(0, 3),
        Err(LinalgError::IndexOutOfBounds { index: 3, bound: 3 })
    );
    assert!(m.swap_cols(5, 0).is_err());
    assert_eq!(m, sample());
}

#[test]
fn swap_respects_operation_sizes() {
    let mut m = sample();
    m.set_operation_cols(2).unwrap();
    m.swap_rows(0, 1).unwrap();
    assert!(m.equals(&[[3.0, 7.0, 7.0], [4.0, 5.0, 2.0], [9.0, 3.0, 1.0]]));

    m.set_operation_rows(2).unwrap();
    assert!(m.swap_rows(0, 2).is_err());
}

#[test]
fn scale_row_in_both_orientations() {
    for o in BOTH {
        let mut m = sample().to_orientation(o);
        m.scale_row(1, 2.0).unwrap();
        assert!(m.equals(&[[4.0, 5.0, 7.0], [6.0, 14.0, 4.0], [9.0, 3.0, 1.0]]));
        assert!(m.scale_row(3, 2.0).is_err());
    }
}

#[test]
fn scale_col_in_both_orientations() {
    for o in BOTH {
        let mut m = sample().to_orientation(o);
        m.scale_col(2, -1.0).unwrap();
        assert!(m.equals(&[[4.0, 5.0, -7.0], [3.0, 7.0, -2.0], [9.0, 3.0, -1.0]]));
    }
}

#[test]
fn add_scaled_row_in_both_orientations() {
    for o in BOTH {
        let mut m = sample().to_orientation(o);
        m.add_scaled_row(2, 0, -2.0).unwrap();
        assert!(m.equals(&[[4.0, 5.0, 7.0], [3.0, 7.0, 2.0], [1.0, -7.0, -13.0]]));
        // Row 0 is a valid index.
        m.add_scaled_row(0, 1, 1.0).unwrap();
        assert!(m.equals(&[[7.0, 12.0, 9.0], [3.0, 7.0, 2.0], [1.0, -7.0, -13.0]]));
    }
}

#[test]
fn add_scaled_row_checks_both_indices() {
    let mut m = sample();
    assert!(m.add_scaled_row(3, 0, 1.0).is_err());
    assert!(m.add_scaled_row(0, 3, 1.0).is_err());
    assert_eq!(m, sample());
}

#[test]
fn row_and_col_copies() {
    for o in BOTH {
        let m = sample().to_orientation(o);
        assert_eq!(m.row(1), [3.0, 7.0, 2.0]);
        assert_eq!(m.col(2), [7.0, 2.0, 1.0]);
    }
}

// ---------------------------------------------------------------------------
// Adding rows & columns
// ---------------------------------------------------------------------------

#[test]
fn add_row_appends_at_bottom() {
    for o in BOTH {
        let mut m = DenseMatrix::from_rows(&[[7.8, 4.5], [3.6, -2.0]])
            .unwrap()
            .to_orientation(o);
        m.add_row(&DenseVector::from([-6.5, 12.0])).unwrap();
        assert_eq!(m.shape(), (3, 2));
        assert!(m.equals(&[[7.8, 4.5], [3.6, -2.0], [-6.5, 12.0]]));
    }
}

#[test]
fn add_col_appends_at_right() {
    for o in BOTH {
        let mut m = DenseMatrix::from_rows(&[[7.8, 4.5], [3.6, -2.0]])
            .unwrap()
            .to_orientation(o);
        m.add_col(&DenseVector::from([1.0, 2.0])).unwrap();
        m.add_col(&DenseVector::from([3.0, 4.0])).unwrap();
        assert_eq!(m.shape(), (2, 4));
        assert!(m.equals(&[[7.8, 4.5, 1.0, 3.0], [3.6, -2.0, 2.0, 4.0]]));
    }
}

#[test]
fn add_line_with_wrong_length_fails() {
    let mut m = DenseMatrix::zeros(2, 3);
    assert_eq!(
        m.add_row(&DenseVector::from([1.0, 2.0])),
        Err(LinalgError::SizeMismatch {
            expected: 3,
            found: 2
        })
    );
    assert!(m.add_col(&DenseVector::from([1.0, 2.0, 3.0])).is_err());
    assert_eq!(m.shape(), (2, 3));
}

#[test]
fn empty_matrix_adopts_first_line() {
    let mut m = DenseMatrix::new();
    m.add_row(&DenseVector::from([1.0, 2.0, 3.0])).unwrap();
    m.add_row(&DenseVector::from([4.0, 5.0, 6.0])).unwrap();
    assert!(m.equals(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]));

    let mut m = DenseMatrix::zeros_with_orientation(0, 0, Orientation::RowMajor);
    m.add_col(&DenseVector::from([1.0, 2.0])).unwrap();
    assert!(m.equals(&[[1.0], [2.0]]));
}

#[test]
fn many_rows_grow_storage() {
    let mut m = DenseMatrix::zeros_with_orientation(0, 2, Orientation::RowMajor);
    for i in 0..40 {
        m.add_row(&DenseVector::from([i as f64, -(i as f64)])).unwrap();
    }
    assert_eq!(m.shape(), (40, 2));
    assert_eq!(m.value_at(39, 1), -39.0);
}

// ---------------------------------------------------------------------------
// Transposition
// ---------------------------------------------------------------------------

#[test]
fn transpose_swaps_shape_and_values() {
    let mut m = DenseMatrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
    m.transpose();
    assert_eq!(m.shape(), (3, 2));
    assert!(m.equals(&[[1.0, 4.0], [2.0, 5.0], [3.0, 6.0]]));
}

#[test]
fn double_transpose_restores_matrix() {
    let original = sample();
    let mut m = original.clone();
    m.transpose().transpose();
    assert_eq!(m.orientation(), original.orientation());
    for r in 0..3 {
        for c in 0..3 {
            assert_eq!(m.value_at(r, c), original.value_at(r, c));
        }
    }
}

#[test]
fn operations_after_transpose_use_new_labels() {
    let mut m = DenseMatrix::from_rows(&[[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]])
        .unwrap()
        .transposed();
    m.add_row(&DenseVector::from([7.0, 8.0, 9.0])).unwrap();
    m.swap_cols(0, 2).unwrap();
    assert!(m.equals(&[[5.0, 3.0, 1.0], [6.0, 4.0, 2.0], [9.0, 8.0, 7.0]]));
}

// ---------------------------------------------------------------------------
// Multiplication
// ---------------------------------------------------------------------------

#[test]
fn identity_times_matrix() {
    let a = DenseMatrix::from_rows(&[[1.0, 0.0], [0.0, 1.0]]).unwrap();
    let b = DenseMatrix::from_rows(&[[0.0, 5.0], [3.0, 0.0]]).unwrap();
    let c = &a * &b;
    assert_eq!(c.value_at(0, 0), 0.0);
    assert_eq!(c.value_at(0, 1), 5.0);
    assert_eq!(c.value_at(1, 0), 3.0);
    assert_eq!(c.value_at(1, 1), 0.0);
}

#[test]
fn mismatched_product_is_empty() {
    let a = DenseMatrix::zeros(2, 3);
    let b = DenseMatrix::zeros(2, 2);
    let c = &a * &b;
    assert_eq!(c.shape(), (0, 0));
    assert_eq!(
        a.try_mul(&b),
        Err(LinalgError::DimensionMismatch {
            left_cols: 3,
            right_rows: 2
        })
    );
}

#[test]
fn rectangular_product() {
    let a = DenseMatrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
    let b = DenseMatrix::from_rows(&[[1.0], [0.0], [-1.0]]).unwrap();
    let c = a * b;
    assert_eq!(c.shape(), (2, 1));
    assert!(c.equals(&[[-2.0], [-2.0]]));
}

#[test]
fn product_with_transposed_operand() {
    let a = DenseMatrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    let at = a.clone().transposed();
    let gram = &at * &a;
    assert!(gram.equals(&[[10.0, 14.0], [14.0, 20.0]]));
}

#[test]
fn outer_product_matches_column_times_row() {
    let col = DenseVector::from([1.0, -2.0, 0.5]);
    let row = DenseVector::from([4.0, 3.0]);
    let expected = &DenseMatrix::from_vector(&col, Axis::Column)
        * &DenseMatrix::from_vector(&row, Axis::Row);
    assert_eq!(DenseMatrix::outer(&col, &row), expected);
}
