use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceSample {
    pub timestamp_ms: i64,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PriceHistory {
    samples: VecDeque<PriceSample>,
    cap: usize,
}

impl PriceHistory {
    pub fn new(cap: usize) -> Self {
        assert!(cap > 0, "cap must be greater than zero");

        Self {
            samples: VecDeque::with_capacity(cap),
            cap,
        }
    }

    pub fn push(&mut self, sample: PriceSample) {
        self.samples.push_back(sample);
        while self.samples.len() > self.cap {
            self.samples.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn cap(&self) -> usize {
        self.cap
    }

    pub fn latest(&self) -> Option<&PriceSample> {
        self.samples.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PriceSample> {
        self.samples.iter()
    }
}
