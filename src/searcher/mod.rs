//! The move-choosing engine: a depth-adaptive best-effort path search.
//!
//! Every side picks, at every node, the continuations that are best for
//! itself. Captures and checks stretch the line deeper, quiet moves shorten
//! it, always within `[min_depth, max_depth]`. At the frontier moves are
//! scored by what they capture, without being played.

mod path;


pub use path::Path;

use log::{debug, info, trace, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
#[cfg(feature = "instrumentation")]
use tracing::instrument;

use crate::board::color::Color;
use crate::board::Board;
use crate::chess_move::{Move, ScopedMove};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SearchConfig {
    /// Every line is analyzed at least this many plies deep.
    pub min_depth: u8,
    /// No line is analyzed deeper than this. A value below `min_depth` is
    /// raised to it by `Searcher::new`.
    pub max_depth: u8,
    /// Awarded to the mover for giving check.
    pub check_bonus: i32,
    /// Awarded for reaching checkmate or stalemate.
    pub terminal_bonus: i32,
    pub seed: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_depth: 3,
            max_depth: 7,
            check_bonus: 10,
            terminal_bonus: 10000,
            seed: 2,
        }
    }
}

/// Counters for the last `choose_move` call.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct SearchStats {
    /// Positions whose moves were generated.
    pub nodes: usize,
    /// The deepest ply any line reached, frontier moves included.
    pub deepest_ply: u8,
}

pub struct Searcher {
    config: SearchConfig,
    rng: StdRng,
    stats: SearchStats,
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl Searcher {
    pub fn new(mut config: SearchConfig) -> Self {
        if config.max_depth < config.min_depth {
            warn!(
                "max depth {} is below min depth {}, searching at {}",
                config.max_depth, config.min_depth, config.min_depth
            );
            config.max_depth = config.min_depth;
        }
        Self {
            rng: StdRng::seed_from_u64(config.seed),
            config,
            stats: SearchStats::default(),
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Picks a move for `color`. The analysis runs on a copy, so `board` is
    /// never touched; since copies keep piece ids the returned move applies
    /// to `board` as is. Returns `None` when `color` has no legal move.
    #[cfg_attr(feature = "instrumentation", instrument(skip_all))]
    pub fn choose_move(&mut self, color: Color, board: &Board) -> Option<Move> {
        self.stats = SearchStats::default();
        debug!("searching for {} (min depth {})", color, self.config.min_depth);

        let mut analysis = board.clone();
        let paths = self.best_effort_paths(
            0,
            self.config.min_depth,
            Path::new(),
            color,
            &mut analysis,
        );

        debug!(
            "searched {} positions, deepest line {} plies",
            self.stats.nodes, self.stats.deepest_ply
        );

        let best_score = paths.iter().map(|p| p.score_for(color)).max()?;
        let shortest = paths
            .iter()
            .filter(|p| p.score_for(color) == best_score)
            .map(|p| p.length())
            .min()?;
        let candidates: Vec<&Path> = paths
            .iter()
            .filter(|p| p.score_for(color) == best_score && p.length() == shortest)
            .collect();

        let chosen = candidates[self.rng.gen_range(0..candidates.len())];
        info!("{} chose {}", color, chosen);
        chosen.first_move()
    }

    /// The lines in which both sides play their best from here on.
    fn best_effort_paths(
        &mut self,
        level: u8,
        depth_bound: u8,
        path: Path,
        player: Color,
        board: &mut Board,
    ) -> Vec<Path> {
        self.stats.nodes += 1;

        let moves = board.all_legal_moves(player);
        if moves.is_empty() {
            // checkmate or stalemate, decided by the caller
            return Vec::new();
        }

        // the frontier looks one ply further without playing the moves
        if level + 1 >= depth_bound {
            self.stats.deepest_ply = self.stats.deepest_ply.max(level + 1);
            self.frontier_paths(&moves, path, player, board)
        } else {
            self.interior_paths(&moves, level, depth_bound, path, player, board)
        }
    }

    fn frontier_paths(
        &self,
        moves: &[Move],
        path: Path,
        player: Color,
        board: &Board,
    ) -> Vec<Path> {
        let extended: Vec<Path> = moves
            .iter()
            .map(|&mv| {
                let mut next = path;
                next.add_move(mv);
                if let Some(captured) = board.piece_at(mv.to_coordinate()) {
                    next.add_score(player, captured.score());
                }
                next
            })
            .collect();

        best_scored(extended, player)
    }

    fn interior_paths(
        &mut self,
        moves: &[Move],
        level: u8,
        depth_bound: u8,
        path: Path,
        player: Color,
        board: &mut Board,
    ) -> Vec<Path> {
        let opponent = player.opponent();
        let mut collected = Vec::new();

        for &mv in moves {
            let captured = board.piece_at(mv.to_coordinate()).map(|p| p.score());

            let mut scoped = ScopedMove::new(board, mv);
            let mut next = path;
            next.add_move(mv);

            let check = scoped.is_under_check(opponent);
            if check {
                next.add_score(player, self.config.check_bonus);
            }

            let next_bound = self.next_depth_bound(depth_bound, captured.is_some() || check);
            let mut replies = self.best_effort_paths(level + 1, next_bound, next, opponent, &mut scoped);

            if replies.is_empty() {
                self.score_terminal(&mut scoped, &mut next, player);
                collected.push(next);
                continue;
            }

            if let Some(score) = captured {
                // earlier gains weigh slightly more than later ones
                for reply in replies.iter_mut() {
                    reply.add_score(player, score - level as i32);
                }
            }
            collected.append(&mut replies);
        }

        best_scored(collected, player)
    }

    /// The opponent of `player` cannot move after `path`.
    fn score_terminal(&self, board: &mut Board, path: &mut Path, player: Color) {
        let opponent = player.opponent();
        let bonus = self.config.terminal_bonus;

        if board.is_under_check(opponent) {
            debug!("{} can checkmate: {}", player, path);
            path.add_score(player, bonus);
        } else if board.material(player) > board.material(opponent) {
            trace!("{} is ahead and avoids stalemate: {}", player, path);
            path.add_score(opponent, bonus);
        } else {
            trace!("{} is behind and welcomes stalemate: {}", player, path);
            path.add_score(player, bonus);
        }
    }

    fn next_depth_bound(&self, depth_bound: u8, forcing: bool) -> u8 {
        let bound = if forcing {
            depth_bound.saturating_add(1)
        } else {
            depth_bound.saturating_sub(1)
        };
        bound.clamp(self.config.min_depth, self.config.max_depth)
    }
}

/// Keeps every path tied for the best score from `player`'s point of view.
fn best_scored(paths: Vec<Path>, player: Color) -> Vec<Path> {
    let best = match paths.iter().map(|p| p.score_for(player)).max() {
        Some(best) => best,
        None => return paths,
    };
    paths
        .into_iter()
        .filter(|p| p.score_for(player) == best)
        .collect()
}

/// One-shot convenience wrapper around a default `Searcher`.
pub fn choose_move(color: Color, board: &Board) -> Option<Move> {
    Searcher::default().choose_move(color, board)
}
