//! Property tests for shape normalization and rotation.

use proptest::prelude::*;
use tui_blicblock::core::{normalize, rotate, ShapeMask};

fn arb_mask() -> impl Strategy<Value = ShapeMask> {
    (1usize..6, 1usize..6).prop_flat_map(|(rows, cols)| {
        prop::collection::vec(prop::collection::vec(0u8..2, cols), rows)
            .prop_map(|rows| ShapeMask::from_rows(&rows).unwrap())
    })
}

proptest! {
    #[test]
    fn normalize_is_idempotent(mask in arb_mask()) {
        let once = normalize(&mask);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn normalize_keeps_every_set_cell(mask in arb_mask()) {
        let normalized = normalize(&mask);
        prop_assert_eq!(normalized.cell_count(), mask.cell_count());
        for (row, col) in normalized.cells() {
            prop_assert!(mask.get(row, col));
        }
    }

    #[test]
    fn normalized_mask_has_no_trailing_blank_edge(mask in arb_mask()) {
        let n = normalize(&mask);
        if n.is_blank() {
            prop_assert_eq!(n, ShapeMask::empty());
        } else {
            prop_assert!((0..n.cols()).any(|c| n.get(n.rows() - 1, c)));
            prop_assert!((0..n.rows()).any(|r| n.get(r, n.cols() - 1)));
        }
    }

    #[test]
    fn four_turns_are_identity(mask in arb_mask()) {
        prop_assert_eq!(rotate(&mask, 4), mask.clone());
        prop_assert_eq!(rotate(&mask, 0), mask);
    }

    #[test]
    fn rotation_swaps_dimensions_and_keeps_cells(mask in arb_mask(), times in 0usize..8) {
        let turned = rotate(&mask, times);
        if times % 2 == 1 {
            prop_assert_eq!((turned.rows(), turned.cols()), (mask.cols(), mask.rows()));
        } else {
            prop_assert_eq!((turned.rows(), turned.cols()), (mask.rows(), mask.cols()));
        }
        prop_assert_eq!(turned.cell_count(), mask.cell_count());
    }

    #[test]
    fn turns_compose(mask in arb_mask(), a in 0usize..4, b in 0usize..4) {
        prop_assert_eq!(rotate(&rotate(&mask, a), b), rotate(&mask, a + b));
    }
}

#[test]
fn quarter_turn_follows_the_index_transform() {
    // new[i][j] = old[j][cols - 1 - i]
    let l = ShapeMask::from_rows(&[[1u8, 0], [1, 0], [1, 1]]).unwrap();
    assert_eq!(rotate(&l, 1).to_rows(), vec![vec![0, 0, 1], vec![1, 1, 1]]);
}

#[test]
fn normalize_strips_trailing_rows_and_columns() {
    let framed = ShapeMask::from_rows(&[
        [0u8, 1, 0, 0],
        [0, 1, 0, 0],
        [0, 1, 1, 0],
        [0, 0, 0, 0],
    ])
    .unwrap();
    assert_eq!(
        normalize(&framed).to_rows(),
        vec![vec![0, 1, 0], vec![0, 1, 0], vec![0, 1, 1]]
    );
}

#[test]
fn blank_mask_normalizes_to_canonical_empty() {
    let blank = ShapeMask::from_rows(&[[0u8, 0], [0, 0]]).unwrap();
    assert_eq!(normalize(&blank), ShapeMask::empty());
}
