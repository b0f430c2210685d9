use gridsearch_core::{Move, Point};

/// Turn a move list into the cells it passes through, starting with `start`.
///
/// The result has `moves.len() + 1` entries.
pub fn reconstruct(start: Point, moves: &[Move]) -> Vec<Point> {
    let mut out = Vec::with_capacity(moves.len() + 1);
    let mut p = start;
    out.push(p);
    for mv in moves {
        p = mv.apply(p);
        out.push(p);
    }
    out
}

/// Space-separated move labels, e.g. `"DOWN DOWN RIGHT"`.
pub fn format_moves(moves: &[Move]) -> String {
    moves
        .iter()
        .map(|m| m.label())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn applies_deltas_cumulatively() {
        let moves = [Move::Down, Move::Down, Move::Right, Move::Up, Move::Left];
        let cells = reconstruct(Point::new(1, 1), &moves);
        assert_eq!(
            cells,
            vec![
                Point::new(1, 1),
                Point::new(1, 2),
                Point::new(1, 3),
                Point::new(2, 3),
                Point::new(2, 2),
                Point::new(1, 2),
            ]
        );
    }

    #[test]
    fn empty_path_is_just_the_start() {
        assert_eq!(reconstruct(Point::new(4, 2), &[]), vec![Point::new(4, 2)]);
        assert_eq!(format_moves(&[]), "");
    }

    #[test]
    fn formats_labels() {
        assert_eq!(format_moves(&[Move::Up, Move::Right]), "UP RIGHT");
    }
}
