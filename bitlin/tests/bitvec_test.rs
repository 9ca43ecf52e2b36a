use bitlin::BitVec;
use proptest::prelude::*;

prop_compose! {
    fn equal_length_bools(max_length: usize)
        (length in 0..max_length)
        (left in prop::collection::vec(any::<bool>(), length), right in prop::collection::vec(any::<bool>(), length))
        -> (Vec<bool>, Vec<bool>) {
        (left, right)
    }
}

proptest! {
    #[test]
    fn from_iter_round_trips(bits in prop::collection::vec(any::<bool>(), 0..200)) {
        let vector = BitVec::from_iter(bits.clone());
        prop_assert_eq!(vector.len(), bits.len());
        for (index, &bit) in bits.iter().enumerate() {
            prop_assert_eq!(vector.index(index), bit);
        }
        prop_assert_eq!(vector.weight(), bits.iter().filter(|&&bit| bit).count());
        prop_assert_eq!(vector.parity(), vector.weight() % 2 == 1);
    }

    #[test]
    fn dot_is_the_parity_of_the_pointwise_and((left_bits, right_bits) in equal_length_bools(200)) {
        let left = BitVec::from_iter(left_bits.clone());
        let right = BitVec::from_iter(right_bits.clone());
        let expected = left_bits
            .iter()
            .zip(&right_bits)
            .filter(|(&a, &b)| a && b)
            .count() % 2 == 1;
        prop_assert_eq!(left.dot(&right), expected);
        prop_assert_eq!(right.dot(&left), expected);
    }

    #[test]
    fn xor_assign_is_pointwise((left_bits, right_bits) in equal_length_bools(200)) {
        let mut left = BitVec::from_iter(left_bits.clone());
        let right = BitVec::from_iter(right_bits.clone());
        left ^= &right;
        for (index, (&a, &b)) in left_bits.iter().zip(&right_bits).enumerate() {
            prop_assert_eq!(left.index(index), a ^ b);
        }
    }

    #[test]
    fn support_lists_the_one_positions(bits in prop::collection::vec(any::<bool>(), 0..200)) {
        let vector = BitVec::from_iter(bits.clone());
        let expected: Vec<usize> = bits
            .iter()
            .enumerate()
            .filter_map(|(index, &bit)| bit.then_some(index))
            .collect();
        prop_assert_eq!(vector.support().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn assign_index_round_trips(length in 1..200usize, raw_index in 0..200usize) {
        let index = raw_index % length;
        let mut vector = BitVec::zeros(length);
        vector.assign_index(index, true);
        prop_assert!(vector.index(index));
        prop_assert!(vector.is_unit(index));
        vector.assign_index(index, false);
        prop_assert!(vector.is_zero());
    }
}
