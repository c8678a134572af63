use log::info;
use rayon::prelude::*;

use crate::deal::Deal;
use crate::solver::core::Solver;

/// Tally of solvable deals over a card range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurveyReport {
    pub deals: usize,
    pub solvable: usize,
}

impl SurveyReport {
    pub fn solvable_ratio(&self) -> f64 {
        if self.deals == 0 {
            0.0
        } else {
            self.solvable as f64 / self.deals as f64
        }
    }
}

impl Solver {
    /// Check every ordered deal with cards in `min..=max`. An empty range
    /// yields an empty report.
    pub fn survey(&self, min: u32, max: u32) -> SurveyReport {
        let mut deals = Vec::new();
        for a in min..=max {
            for b in min..=max {
                for c in min..=max {
                    for d in min..=max {
                        deals.push(Deal::new([a, b, c, d]));
                    }
                }
            }
        }

        info!("Surveying {} deals with cards {}..={}", deals.len(), min, max);

        let solvable = deals
            .par_iter()
            .filter(|deal| self.is_reachable(deal))
            .count();

        SurveyReport {
            deals: deals.len(),
            solvable,
        }
    }
}
