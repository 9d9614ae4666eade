use std::collections::HashSet;
use std::fmt;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use vocab_core::model::{ItemId, WordBuilderItem};

use super::{ActivityProgress, AnswerOutcome, ItemState};
use crate::error::ActivityError;
use crate::sampler;

/// Extra tiles mixed in under `Difficulty::Challenge`.
const CHALLENGE_TILE_COUNT: usize = 3;

//
// ─── DIFFICULTY ────────────────────────────────────────────────────────────────
//

/// Tile-bank difficulty for the word builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    /// Only the target word's own parts are offered.
    #[default]
    Normal,
    /// Three decoy parts drawn from the whole master pool are mixed in. The
    /// draw does not avoid the target's own parts, so a decoy can duplicate
    /// a needed tile.
    Challenge,
}

//
// ─── WORD BUILDER ACTIVITY ─────────────────────────────────────────────────────
//

/// Completion-tracked word-construction game.
///
/// The tile bank is recomposed and reshuffled only when its composition
/// changes (a new item, a difficulty switch, a reset). Submitting, clearing
/// and retrying leave the order alone so tiles never jump around mid-word.
#[derive(Clone)]
pub struct WordBuilderActivity {
    items: Vec<WordBuilderItem>,
    master_parts: Vec<String>,
    completed: HashSet<ItemId>,
    state: ItemState,
    difficulty: Difficulty,
    build: Vec<String>,
    tiles: Vec<String>,
    rng: StdRng,
}

impl WordBuilderActivity {
    /// Creates the activity over a working set. `master_parts` is the
    /// flattened part list of the whole master pool, used for challenge
    /// decoys.
    #[must_use]
    pub fn new(items: Vec<WordBuilderItem>, master_parts: Vec<String>, rng: StdRng) -> Self {
        let mut activity = Self {
            items,
            master_parts,
            completed: HashSet::new(),
            state: ItemState::Unanswered,
            difficulty: Difficulty::default(),
            build: Vec::new(),
            tiles: Vec::new(),
            rng,
        };
        activity.rebuild_tiles();
        activity
    }

    // Accessors
    #[must_use]
    pub fn items(&self) -> &[WordBuilderItem] {
        &self.items
    }

    /// First incomplete item of the working set, if any.
    #[must_use]
    pub fn current_item(&self) -> Option<&WordBuilderItem> {
        self.items
            .iter()
            .find(|item| !self.completed.contains(&item.id()))
    }

    #[must_use]
    pub fn item_state(&self) -> ItemState {
        self.state
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// The shuffled tile bank for the current item. Empty once the activity
    /// is complete.
    #[must_use]
    pub fn tiles(&self) -> &[String] {
        &self.tiles
    }

    /// Tiles tapped so far, in tap order.
    #[must_use]
    pub fn build(&self) -> &[String] {
        &self.build
    }

    /// The in-progress word, tiles concatenated in tap order.
    #[must_use]
    pub fn built_word(&self) -> String {
        self.build.concat()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.current_item().is_none()
    }

    #[must_use]
    pub fn progress(&self) -> ActivityProgress {
        let total = self.items.len();
        let completed = self.completed.len();
        ActivityProgress {
            total,
            completed,
            remaining: total.saturating_sub(completed),
            is_complete: self.is_complete(),
        }
    }

    /// Switches difficulty, recomposing the tile bank and discarding the
    /// in-progress build. Re-selecting the active difficulty changes
    /// nothing, so the cached bank survives.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        if self.difficulty == difficulty {
            return;
        }
        self.difficulty = difficulty;
        self.build.clear();
        self.rebuild_tiles();
    }

    /// Appends a tile to the build.
    ///
    /// # Errors
    ///
    /// Returns `ActivityError::Complete` when every item is done,
    /// `ActivityError::AlreadyAnswered` after a correct answer, and
    /// `ActivityError::UnknownTile` when the tile is not in the current
    /// bank.
    pub fn append_tile(&mut self, tile: &str) -> Result<(), ActivityError> {
        if self.current_item().is_none() {
            return Err(ActivityError::Complete);
        }
        if self.state.is_correct() {
            return Err(ActivityError::AlreadyAnswered);
        }
        if !self.tiles.iter().any(|offered| offered == tile) {
            return Err(ActivityError::UnknownTile(tile.to_owned()));
        }
        self.build.push(tile.to_owned());
        Ok(())
    }

    /// Discards the in-progress build. Does nothing once the current item
    /// is answered correctly.
    pub fn clear_build(&mut self) {
        if self.state.is_correct() {
            return;
        }
        self.build.clear();
    }

    /// Checks the assembled word against the target. A wrong build is
    /// discarded so the learner starts the next attempt clean.
    ///
    /// # Errors
    ///
    /// Returns `ActivityError::Complete` when every item is done,
    /// `ActivityError::AlreadyAnswered` after a correct answer, and
    /// `ActivityError::BlankAnswer` when no tiles have been tapped.
    pub fn submit_build(&mut self) -> Result<AnswerOutcome, ActivityError> {
        let Some(item) = self.current_item() else {
            return Err(ActivityError::Complete);
        };
        if self.state.is_correct() {
            return Err(ActivityError::AlreadyAnswered);
        }
        if self.build.is_empty() {
            return Err(ActivityError::BlankAnswer);
        }

        let correct = item.matches_build(&self.build.concat());
        if correct {
            self.state = ItemState::Correct;
            Ok(AnswerOutcome::Correct)
        } else {
            self.state = ItemState::Retry;
            self.build.clear();
            Ok(AnswerOutcome::Incorrect)
        }
    }

    /// Moves past the current item once it is answered correctly. Returns
    /// false, changing nothing, when the item is not correct yet or the
    /// activity is already complete.
    pub fn advance(&mut self) -> bool {
        if !self.state.is_correct() {
            return false;
        }
        let Some(id) = self.current_item().map(WordBuilderItem::id) else {
            return false;
        };
        self.completed.insert(id);
        self.state = ItemState::Unanswered;
        self.build.clear();
        self.rebuild_tiles();
        true
    }

    /// Forgets all completions and answer state, keeping the working set
    /// and difficulty.
    pub fn reset(&mut self) {
        self.completed.clear();
        self.state = ItemState::Unanswered;
        self.build.clear();
        self.rebuild_tiles();
    }

    /// Recomposes the tile bank for the current item: the item's own parts,
    /// plus decoys under challenge. The shuffle is seeded from the item id
    /// and tile count, so a given composition always lands in the same
    /// order no matter how the activity got there.
    fn rebuild_tiles(&mut self) {
        let (id, mut tiles) = match self.current_item() {
            None => {
                self.tiles.clear();
                return;
            }
            Some(item) => (item.id(), item.parts().to_vec()),
        };

        if self.difficulty == Difficulty::Challenge {
            let decoys = sampler::sample(&self.master_parts, CHALLENGE_TILE_COUNT, &mut self.rng);
            tiles.extend(decoys);
        }

        let seed = u64::from(id.value()) + u64::try_from(tiles.len()).unwrap_or(u64::MAX);
        tiles.as_mut_slice().shuffle(&mut StdRng::seed_from_u64(seed));
        self.tiles = tiles;
    }
}

impl fmt::Debug for WordBuilderActivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WordBuilderActivity")
            .field("items_len", &self.items.len())
            .field("completed", &self.completed.len())
            .field("state", &self.state)
            .field("difficulty", &self.difficulty)
            .field("build", &self.build)
            .field("tiles", &self.tiles)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
