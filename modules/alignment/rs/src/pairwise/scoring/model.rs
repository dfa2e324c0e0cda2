use derive_getters::Dissolve;
use derive_more::Constructor;
use eyre::{eyre, Result};

use super::gaps::Affine;
use super::symbols::Equality;
use super::{compose, Delegate, Score};

/// Match / mismatch / affine gap scores of a fully global alignment.
///
/// Scores carry no sign constraints: bonuses are positive, penalties are negative,
/// and the engine maximizes the total.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash, Dissolve, Constructor)]
pub struct ScoreModel<S: Score> {
    pub match_score: S,
    pub mismatch_score: S,

    pub gap_open: S,
    pub gap_extend: S,
}

impl<S: Score> Default for ScoreModel<S> {
    fn default() -> Self {
        let three = S::one() + S::one() + S::one();
        ScoreModel {
            match_score: three,
            mismatch_score: S::zero() - (three + three),
            gap_open: S::zero() - (three + S::one() + S::one()),
            gap_extend: S::zero() - (S::one() + S::one()),
        }
    }
}

impl<S: Score> ScoreModel<S> {
    /// Convert all scores to another score type, failing if any of them doesn't fit.
    pub fn cast<T: Score>(&self) -> Result<ScoreModel<T>> {
        let convert = |name: &str, value: S| {
            num::cast::<S, T>(value)
                .ok_or_else(|| eyre!("{name} score {value} doesn't fit the target score type"))
        };
        Ok(ScoreModel {
            match_score: convert("Match", self.match_score)?,
            mismatch_score: convert("Mismatch", self.mismatch_score)?,
            gap_open: convert("Gap open", self.gap_open)?,
            gap_extend: convert("Gap extend", self.gap_extend)?,
        })
    }

    /// Composable scoring scheme for sequences of `Symbol`.
    pub fn scheme<Symbol: PartialEq>(
        &self,
    ) -> Delegate<S, Symbol, Equality<S, Symbol>, Affine<S>> {
        compose(
            Equality::new(self.match_score, self.mismatch_score),
            Affine::new(self.gap_open, self.gap_extend),
        )
    }
}
