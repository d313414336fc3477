use index_sieve::prelude::*;

#[test]
fn two_dimensional_prefix_through_degree_three() {
    let scheme = GradedLexEnumerator::new(2).expect("valid dimension");
    let expected: [[usize; 2]; 10] = [
        [0, 0],
        [1, 0],
        [0, 1],
        [2, 0],
        [1, 1],
        [0, 2],
        [3, 0],
        [2, 1],
        [1, 2],
        [0, 3],
    ];
    for (rank, degrees) in expected.iter().enumerate() {
        assert_eq!(scheme.at(rank), MultiIndex::from(*degrees), "rank {rank}");
    }
}

#[test]
fn one_dimensional_ranks_are_the_degrees() -> Result<(), EnumError> {
    let scheme = GradedLexEnumerator::new(1)?;
    for rank in 0..50 {
        assert_eq!(scheme.at(rank), MultiIndex::from([rank]));
        assert_eq!(scheme.rank_of(&MultiIndex::from([rank]))?, rank);
    }
    Ok(())
}

#[test]
fn last_index_of_each_stratum_concentrates_in_final_dimension() {
    // Within a degree block the leading components decrease, so the block
    // closes on [0, ..., 0, s].
    for dimension in [2usize, 3, 4] {
        let scheme = GradedLexEnumerator::new(dimension).expect("valid dimension");
        for degree in 1..6 {
            let last_rank = scheme.cumulated_cardinal(degree) - 1;
            let mut expected = vec![0usize; dimension];
            expected[dimension - 1] = degree;
            assert_eq!(scheme.at(last_rank), MultiIndex::from(expected));
        }
    }
}

#[test]
fn first_index_of_each_stratum_concentrates_in_leading_dimension() {
    for dimension in [2usize, 3, 4] {
        let scheme = GradedLexEnumerator::new(dimension).expect("valid dimension");
        for degree in 1..6 {
            let first_rank = scheme.cumulated_cardinal(degree - 1);
            let mut expected = vec![0usize; dimension];
            expected[0] = degree;
            assert_eq!(scheme.at(first_rank), MultiIndex::from(expected));
        }
    }
}

#[test]
fn stratum_counts_follow_composition_formula() {
    // dimension 5: C(s + 4, 4) compositions of s into 5 parts
    let scheme = GradedLexEnumerator::new(5).expect("valid dimension");
    assert_eq!(scheme.stratum_cardinal(0), 1);
    assert_eq!(scheme.stratum_cardinal(1), 5);
    assert_eq!(scheme.stratum_cardinal(2), 15);
    assert_eq!(scheme.stratum_cardinal(3), 35);
    assert_eq!(scheme.cumulated_cardinal(3), 56);
}

#[test]
fn basis_size_and_max_degree_queries_agree() {
    let scheme = GradedLexEnumerator::new(3).expect("valid dimension");
    for max_degree in 0..8 {
        let size = scheme.basis_size_from_total_degree(max_degree);
        assert_eq!(scheme.max_degree_cardinal(max_degree), size);
        assert_eq!(scheme.max_degree_stratum_index(max_degree), max_degree);
        assert_eq!(scheme.cumulated_cardinal(max_degree), size);
    }
}

#[test]
fn set_dimension_switches_the_lattice() -> Result<(), EnumError> {
    let mut scheme = GradedLexEnumerator::new(2)?;
    assert_eq!(scheme.at(3), MultiIndex::from([2, 0]));
    scheme.set_dimension(3)?;
    assert_eq!(scheme.dimension(), 3);
    assert_eq!(scheme.at(3), MultiIndex::from([0, 0, 1]));
    assert_eq!(scheme.set_dimension(0), Err(EnumError::ZeroDimension));
    Ok(())
}
