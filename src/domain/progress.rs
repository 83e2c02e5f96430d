use log::info;

/// Track progress of the chronological rating pass
pub struct RatingProgress {
    total: usize,
    processed: usize,
    rounds: usize,
}

impl RatingProgress {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            processed: 0,
            rounds: 0,
        }
    }

    pub fn record_tournament(&mut self, rounds: usize) {
        self.processed += 1;
        self.rounds += rounds;
        self.log_progress();
    }

    pub fn processed(&self) -> usize {
        self.processed
    }

    pub fn rounds(&self) -> usize {
        self.rounds
    }

    fn log_progress(&self) {
        if should_log(self.processed, self.total) {
            info!(
                "  → Rated {}/{} tournaments ({} rounds)",
                self.processed, self.total, self.rounds
            );
        }
    }
}

fn should_log(current: usize, total: usize) -> bool {
    is_milestone(current) || is_complete(current, total)
}

fn is_milestone(count: usize) -> bool {
    count % 10 == 0
}

fn is_complete(current: usize, total: usize) -> bool {
    current == total
}
