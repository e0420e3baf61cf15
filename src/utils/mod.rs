//! Persistence and interop helpers

pub mod formats;
pub mod text;

pub use formats::{from_dense, from_sprs, to_dense, to_sprs};

/// Computes an exclusive prefix sum (scan) for a vector
pub fn exclusive_scan(input: &[usize]) -> Vec<usize> {
    let mut result = Vec::with_capacity(input.len() + 1);
    let mut sum = 0;

    result.push(0);

    for &val in input {
        sum += val;
        result.push(sum);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exclusive_scan() {
        assert_eq!(exclusive_scan(&[2, 0, 1]), vec![0, 2, 2, 3]);
        assert_eq!(exclusive_scan(&[]), vec![0]);
    }
}
