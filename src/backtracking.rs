//! Backtracking exercises: N-Queens and Tower of Hanoi.

use tracing::instrument;

/// All N-Queens placements as one column index per row.
///
/// `n = 4` yields exactly two boards; `n = 2` and `n = 3` yield none.
/// `n = 0` yields the single empty placement.
#[instrument(level = "debug")]
pub fn solve_n_queens(n: usize) -> Vec<Vec<usize>> {
    let mut solutions = Vec::new();
    let mut columns = Vec::with_capacity(n);
    place_queen(n, &mut columns, &mut solutions);
    solutions
}

/// Number of distinct N-Queens placements.
pub fn count_n_queens(n: usize) -> usize {
    solve_n_queens(n).len()
}

fn place_queen(n: usize, columns: &mut Vec<usize>, solutions: &mut Vec<Vec<usize>>) {
    let row = columns.len();
    if row == n {
        solutions.push(columns.clone());
        return;
    }

    for col in 0..n {
        if is_safe(columns, row, col) {
            columns.push(col);
            place_queen(n, columns, solutions);
            columns.pop();
        }
    }
}

/// A queen at (row, col) is safe when no earlier queen shares its column
/// or either diagonal.
fn is_safe(columns: &[usize], row: usize, col: usize) -> bool {
    columns.iter().enumerate().all(|(placed_row, &placed_col)| {
        placed_col != col && placed_row.abs_diff(row) != placed_col.abs_diff(col)
    })
}

/// Minimal number of moves to solve Tower of Hanoi with `n` disks: 2^n - 1.
pub fn hanoi_moves(n: u32) -> u64 {
    debug_assert!(n < 64, "move count overflows u64 beyond 63 disks");
    (1u64 << n) - 1
}

/// The explicit Hanoi move sequence, each move as (from peg, to peg).
#[instrument(level = "debug")]
pub fn hanoi_sequence(n: u32) -> Vec<(char, char)> {
    let mut moves = Vec::new();
    move_disks(n, 'A', 'C', 'B', &mut moves);
    moves
}

fn move_disks(n: u32, from: char, to: char, via: char, moves: &mut Vec<(char, char)>) {
    if n == 0 {
        return;
    }
    move_disks(n - 1, from, via, to, moves);
    moves.push((from, to));
    move_disks(n - 1, via, to, from, moves);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_four_queens_when_solving_then_two_solutions_found() {
        let solutions = solve_n_queens(4);
        assert_eq!(solutions.len(), 2);
        assert!(solutions.contains(&vec![1, 3, 0, 2]));
        assert!(solutions.contains(&vec![2, 0, 3, 1]));
    }

    #[test]
    fn given_unsolvable_sizes_when_solving_then_no_solutions() {
        assert_eq!(count_n_queens(2), 0);
        assert_eq!(count_n_queens(3), 0);
    }

    #[test]
    fn given_zero_queens_when_solving_then_one_empty_placement() {
        assert_eq!(solve_n_queens(0), vec![Vec::<usize>::new()]);
    }

    #[test]
    fn given_disk_counts_when_counting_moves_then_powers_of_two_minus_one() {
        assert_eq!(hanoi_moves(0), 0);
        assert_eq!(hanoi_moves(3), 7);
        assert_eq!(hanoi_moves(10), 1023);
    }

    #[test]
    fn given_three_disks_when_listing_moves_then_sequence_has_seven_entries() {
        let moves = hanoi_sequence(3);
        assert_eq!(moves.len(), 7);
        assert_eq!(moves[0], ('A', 'C'));
        assert_eq!(moves[3], ('A', 'C'));
    }
}
