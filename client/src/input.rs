//! Producing matrices on the caller side: CSV text and random fill.

use matrix_engine::MAX_DIMENSION;
use rand::Rng;

use crate::Error;

/// Parses comma-separated rows of numbers.
///
/// Blank lines are skipped and cells are trimmed. Every row must have the
/// same number of cells, and neither dimension may exceed
/// [`MAX_DIMENSION`]. Row and column numbers in errors are 1-based.
pub fn parse_csv(content: &str) -> Result<Vec<Vec<f64>>, Error> {
    let lines: Vec<&str> = content
        .trim()
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect();
    if lines.is_empty() {
        return Err(Error::Csv("CSV file is empty".to_string()));
    }

    let mut matrix = Vec::with_capacity(lines.len());
    let mut col_count = None;

    for (i, line) in lines.iter().enumerate() {
        let cells: Vec<&str> = line.split(',').map(str::trim).collect();

        let expected = *col_count.get_or_insert(cells.len());
        if cells.len() != expected {
            return Err(Error::Csv(format!(
                "Row {} has {} columns, expected {}",
                i + 1,
                cells.len(),
                expected
            )));
        }

        let row = cells
            .iter()
            .enumerate()
            .map(|(j, cell)| {
                cell.parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite())
                    .ok_or_else(|| {
                        Error::Csv(format!(
                            "Invalid number \"{}\" at row {}, column {}",
                            cell,
                            i + 1,
                            j + 1
                        ))
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        matrix.push(row);
    }

    if matrix.len() > MAX_DIMENSION || col_count.unwrap_or(0) > MAX_DIMENSION {
        return Err(Error::Csv(format!(
            "Matrix dimensions exceed maximum of {0}×{0}",
            MAX_DIMENSION
        )));
    }

    Ok(matrix)
}

/// A `rows`×`cols` matrix of whole numbers in `0..10`.
pub fn random_matrix(rows: usize, cols: usize, rng: &mut impl Rng) -> Vec<Vec<f64>> {
    (0..rows)
        .map(|_| (0..cols).map(|_| rng.gen_range(0..10) as f64).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn csv_error(content: &str) -> String {
        match parse_csv(content) {
            Err(Error::Csv(msg)) => msg,
            other => panic!("expected a CSV error, got {:?}", other),
        }
    }

    #[test]
    fn parses_rows_and_skips_blank_lines() {
        let m = parse_csv("1,2,3\n\n 4 , 5.5 ,-6\r\n7,8,9e1\n").unwrap();
        assert_eq!(
            m,
            vec![
                vec![1.0, 2.0, 3.0],
                vec![4.0, 5.5, -6.0],
                vec![7.0, 8.0, 90.0]
            ]
        );
    }

    #[test]
    fn rejects_empty_input() {
        assert_eq!(csv_error("  \n\n"), "CSV file is empty");
    }

    #[test]
    fn rejects_ragged_rows() {
        assert_eq!(csv_error("1,2\n3\n"), "Row 2 has 1 columns, expected 2");
    }

    #[test]
    fn rejects_non_numbers() {
        assert_eq!(
            csv_error("1,2\n3,x\n"),
            "Invalid number \"x\" at row 2, column 2"
        );
        assert_eq!(
            csv_error("1,inf\n"),
            "Invalid number \"inf\" at row 1, column 2"
        );
    }

    #[test]
    fn rejects_oversized_input() {
        let wide = vec!["1"; MAX_DIMENSION + 1].join(",");
        assert_eq!(
            csv_error(&wide),
            format!("Matrix dimensions exceed maximum of {0}×{0}", MAX_DIMENSION)
        );
    }

    #[test]
    fn random_matrix_has_requested_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        let m = random_matrix(3, 5, &mut rng);
        assert_eq!(m.len(), 3);
        assert!(m.iter().all(|row| row.len() == 5));
        assert!(
            m.iter()
                .flatten()
                .all(|&v| (0.0..10.0).contains(&v) && v.fract() == 0.0)
        );
    }
}
