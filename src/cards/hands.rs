use super::hand::Hand;

/// Combinatorial iterator over all n-card hands from a deck.
///
/// Generates all C(k, n) combinations of n cards from the k available cards
/// (those not blocked by the mask). Uses bit-twiddling to generate successive
/// permutations without storing them in memory.
///
/// # Construction
///
/// Created from `(n, mask)` where `n` is the hand size and `mask` is a [`Hand`]
/// of cards to exclude (already dealt cards).
///
/// # Performance
///
/// - Memory: O(1), only the current state is stored
/// - Time per `.next()`: O(1) amortized via Gosper's hack
/// - Deterministic ascending ordering for reproducible iteration
pub struct HandIterator {
    next: u64,
    mask: u64,
}

impl HandIterator {
    /// Total number of combinations this iterator yields from a fresh start.
    ///
    /// Computes C(available, hand_size) using the multiplicative formula.
    pub fn combinations(&self) -> u64 {
        let n = (52 - Hand::from(self.mask).size()) as u64;
        let k = Hand::from(self.next).size() as u64;
        choose(n, k)
    }
    /// Tests whether iteration is complete.
    fn exhausted(&self) -> bool {
        if self.next == 0 {
            true
        } else {
            (64 - 52) > self.next.leading_zeros()
        }
    }
    /// Gosper's hack for next bit permutation with same popcount.
    ///
    /// See: https://graphics.stanford.edu/~seander/bithacks.html#NextBitPermutation
    fn permute(&self) -> u64 {
        let  x = /* 000_100                       */ self.next;
        let  a = /* 000_111 <- 000_100 || 000_110 */ x | (x - 1);
        let  b = /* 001_000 <-                    */ a + 1;
        let  c = /* 111_000 <-                    */ !   a;
        let  d = /* 001_000 <- 111_000 && 001_000 */ c & b;
        let  e = /* 000_111 <-                    */ d - 1;
        let  f = /*         << xxx                */ 1 + x.trailing_zeros();
        let  g = /* 000_000 <-                    */ e >> f;
        let  h = /* 001_000 <- 001_000 || 000_000 */ b | g;
        h
    }
    fn look(&self) -> Hand {
        Hand::from(self.next)
    }
    fn advance(&mut self) {
        loop {
            self.next = self.permute();
            if self.next & self.mask == 0 || self.exhausted() {
                break;
            }
        }
    }
}

impl Iterator for HandIterator {
    type Item = Hand;
    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted() {
            None
        } else {
            let last = self.look();
            self.advance();
            Some(last)
        }
    }
}

/// size and mask are immutable and must be decided at construction
impl From<(usize, Hand)> for HandIterator {
    fn from((n, mask): (usize, Hand)) -> Self {
        debug_assert!(n < 64);
        let mut this = Self {
            next: (1 << n) - 1,
            mask: u64::from(mask),
        };
        while this.next & this.mask > 0 && !this.exhausted() {
            this.next = this.permute();
        }
        this
    }
}

/// binomial coefficient, saturating at u64::MAX
pub fn choose(n: u64, k: u64) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    (0..k)
        .try_fold(1u128, |x, i| {
            let x = x * (n - i) as u128 / (i + 1) as u128;
            (x <= u64::MAX as u128).then_some(x)
        })
        .map(|x| x as u64)
        .unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn n_choose_0() {
        let iter = HandIterator::from((0, Hand::empty()));
        assert_eq!(iter.count(), 0);
    }
    #[test]
    fn n_choose_1() {
        let iter = HandIterator::from((1, Hand::empty()));
        assert_eq!(iter.count(), 52);
    }
    #[test]
    fn n_choose_2() {
        let iter = HandIterator::from((2, Hand::empty()));
        assert_eq!(iter.count(), 1326);
    }
    #[test]
    fn n_choose_2_mask_4() {
        let mask = Hand::from(0xF);
        let iter = HandIterator::from((2, mask));
        assert_eq!(iter.combinations(), 1128);
        assert_eq!(iter.count(), 1128);
    }
    #[test]
    fn n_choose_5_mask_4() {
        let mask = Hand::from(0xF000);
        let iter = HandIterator::from((5, mask));
        assert_eq!(iter.combinations(), 1_712_304);
    }
    #[test]
    fn choose_3() {
        let mut iter = HandIterator::from((3, Hand::empty()));
        assert!(iter.next() == Some(Hand::from(0b00111)));
        assert!(iter.next() == Some(Hand::from(0b01011)));
        assert!(iter.next() == Some(Hand::from(0b01101)));
        assert!(iter.next() == Some(Hand::from(0b01110)));
        assert!(iter.next() == Some(Hand::from(0b10011)));
    }
    #[test]
    fn choose_3_from_5() {
        let mask = Hand::from(0b_________________1111_00_1).complement();
        let mut iter = HandIterator::from((3, mask));
        assert!(iter.next() == Some(Hand::from(0b0011_00_1)));
        assert!(iter.next() == Some(Hand::from(0b0101_00_1)));
        assert!(iter.next() == Some(Hand::from(0b0110_00_1)));
        assert!(iter.next() == Some(Hand::from(0b0111_00_0)));
        assert!(iter.next() == Some(Hand::from(0b1001_00_1)));
        assert!(iter.next() == Some(Hand::from(0b1010_00_1)));
        assert!(iter.next() == Some(Hand::from(0b1011_00_0)));
        assert!(iter.next() == Some(Hand::from(0b1100_00_1)));
        assert!(iter.next() == Some(Hand::from(0b1101_00_0)));
        assert!(iter.next() == Some(Hand::from(0b1110_00_0)));
        assert!(iter.next() == None);
    }
    #[test]
    fn binomials() {
        assert_eq!(choose(48, 5), 1_712_304);
        assert_eq!(choose(52, 2), 1326);
        assert_eq!(choose(3, 5), 0);
        assert_eq!(choose(7, 0), 1);
    }
}
