use crate::path::Path;

/// Length of the shortest path in `paths`, or `None` if there are none.
pub fn shortest_len(paths: &[Path]) -> Option<usize> {
    paths.iter().map(|p| p.len()).min()
}

/// All entries of `paths` whose length is the minimum, in input order.
///
/// Returns an empty list when `paths` is empty.
pub fn fastest_paths(paths: &[Path]) -> Vec<&Path> {
    let Some(min) = shortest_len(paths) else {
        return Vec::new();
    };
    paths.iter().filter(|p| p.len() == min).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Direction::*;

    #[test]
    fn keeps_every_minimal_entry() {
        let paths = vec![
            Path::from(vec![Right, Down, Down]),
            Path::from(vec![Down, Right]),
            Path::from(vec![Right, Down]),
        ];
        let fastest = fastest_paths(&paths);
        assert_eq!(fastest, vec![&paths[1], &paths[2]]);
        assert_eq!(shortest_len(&paths), Some(2));
    }

    #[test]
    fn empty_input() {
        assert!(fastest_paths(&[]).is_empty());
        assert_eq!(shortest_len(&[]), None);
    }

    #[test]
    fn results_point_into_input() {
        let paths = vec![Path::from(vec![Up]), Path::from(vec![Up])];
        let fastest = fastest_paths(&paths);
        assert_eq!(fastest.len(), 2);
        assert!(std::ptr::eq(fastest[0], &paths[0]));
        assert!(std::ptr::eq(fastest[1], &paths[1]));
    }
}
