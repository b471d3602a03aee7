use crate::cards::Rank;

/// Whether five ranks run in sequence, and the rank the run counts as topped by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    pub top_rank: Option<Rank>,
}

impl StraightInfo {
    /// Detect a straight from five ranks in any order.
    /// The wheel (A-2-3-4-5) is sequential with Five as its top rank.
    pub fn detect(ranks: &[Rank; 5]) -> Self {
        let mut asc = *ranks;
        asc.sort_unstable();

        let consecutive = asc.windows(2).all(|w| w[1].value() == w[0].value() + 1);
        if consecutive {
            return StraightInfo { top_rank: Some(asc[4]) };
        }

        if asc == [Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Ace] {
            return StraightInfo { top_rank: Some(Rank::Five) };
        }

        StraightInfo { top_rank: None }
    }

    pub fn is_straight(&self) -> bool {
        self.top_rank.is_some()
    }

    pub fn is_wheel(&self) -> bool {
        self.top_rank == Some(Rank::Five)
    }
}
