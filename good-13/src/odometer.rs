/// Lazily walks every digit sequence of a fixed width over `0..base`, in
/// lexicographic order, rightmost position turning fastest.
#[derive(Debug, Clone)]
pub struct Odometer {
    base: u32,
    digits: Vec<u32>,
    exhausted: bool,
}

impl Odometer {
    pub fn new(base: u32, width: usize) -> Self {
        Self {
            base,
            digits: vec![0; width],
            exhausted: base == 0,
        }
    }

    /// Rewinds to the all-zero sequence.
    pub fn reset(&mut self) {
        self.digits.fill(0);
        self.exhausted = self.base == 0;
    }

    pub fn width(&self) -> usize {
        self.digits.len()
    }

    fn advance(&mut self) {
        for digit in self.digits.iter_mut().rev() {
            *digit += 1;
            if *digit < self.base {
                return;
            }
            *digit = 0;
        }
        // every position rolled over
        self.exhausted = true;
    }
}

impl Iterator for Odometer {
    type Item = Vec<u32>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let current = self.digits.clone();
        self.advance();
        Some(current)
    }
}
