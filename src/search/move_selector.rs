//! Single-ply move selection: take an immediate mate if one exists, otherwise
//! pick uniformly among the moves whose resulting material score is best for
//! the side to move.

use rand::prelude::IndexedRandom;
use rand::Rng;
use tracing::{debug, info};

use crate::errors::SelectionError;
use crate::game_state::board::Board;
use crate::game_state::chess_types::Score;
use crate::search::board_scoring::{BoardScorer, MaterialScorer};

/// Starting point of the best-score scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreakSentinel {
    /// Start from the score of the position before any move, with every legal
    /// move provisionally tied-best. A move is only dropped once some other
    /// move strictly beats that pre-move score.
    #[default]
    PreMoveBaseline,
    /// Start from the first candidate's post-move score, so ties are computed
    /// purely among moved positions.
    FirstCandidate,
}

/// Output of the best-score scan.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedMoves<M> {
    /// Score of the unmoved position.
    pub baseline: Score,
    pub best_score: Score,
    /// Tied-best moves; never empty.
    pub moves: Vec<M>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DecisionReason<M> {
    /// `chosen` is the first of these immediately mating moves.
    Checkmate { mating_moves: Vec<M> },
    /// `chosen` was drawn uniformly from `ranked.moves`.
    Material { ranked: RankedMoves<M> },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Decision<M> {
    pub chosen: M,
    pub reason: DecisionReason<M>,
}

#[derive(Debug, Clone, Copy)]
pub struct MoveSelector<S: BoardScorer = MaterialScorer> {
    scorer: S,
    sentinel: TieBreakSentinel,
    prefer_mates: bool,
}

impl<S: BoardScorer> MoveSelector<S> {
    pub fn new(scorer: S) -> Self {
        Self {
            scorer,
            sentinel: TieBreakSentinel::default(),
            prefer_mates: true,
        }
    }

    pub fn with_sentinel(mut self, sentinel: TieBreakSentinel) -> Self {
        self.sentinel = sentinel;
        self
    }

    /// When disabled, `decide` skips the checkmate scan and ranks by score only.
    pub fn with_mate_preference(mut self, prefer_mates: bool) -> Self {
        self.prefer_mates = prefer_mates;
        self
    }

    /// Legal moves that leave the opponent checkmated, in enumeration order.
    pub fn find_mating_moves<B: Board>(&self, board: &B) -> Vec<B::Move> {
        board
            .legal_moves()
            .into_iter()
            .filter(|mv| board.apply(mv).is_checkmate())
            .collect()
    }

    pub fn best_moves<B: Board>(&self, board: &B) -> Result<Vec<B::Move>, SelectionError> {
        Ok(self.rank_moves(board)?.moves)
    }

    /// Score every legal move and keep the ones tied for the mover's best.
    ///
    /// Comparison is strict in the mover's favour: a better score resets the
    /// list, an equal score appends to it.
    pub fn rank_moves<B: Board>(&self, board: &B) -> Result<RankedMoves<B::Move>, SelectionError> {
        let legal_moves = board.legal_moves();
        if legal_moves.is_empty() {
            return Err(SelectionError::NoLegalMoves);
        }

        let mover = board.side_to_move();
        let baseline = self.scorer.score(board);
        debug!(?mover, baseline, legal_moves = legal_moves.len(), "ranking moves");

        let (mut best_score, mut best_moves, remaining) = match self.sentinel {
            TieBreakSentinel::PreMoveBaseline => (baseline, legal_moves.clone(), &legal_moves[..]),
            TieBreakSentinel::FirstCandidate => {
                let first = &legal_moves[0];
                let first_score = self.scorer.score(&board.apply(first));
                (first_score, vec![first.clone()], &legal_moves[1..])
            }
        };

        for mv in remaining {
            let score = self.scorer.score(&board.apply(mv));
            debug!(?mv, score, best_score, "scored candidate");

            if mover.prefers(score, best_score) {
                best_score = score;
                best_moves.clear();
                best_moves.push(mv.clone());
            } else if score == best_score {
                best_moves.push(mv.clone());
            }
        }

        info!(best_score, best_moves = ?best_moves, "best moves");

        Ok(RankedMoves {
            baseline,
            best_score,
            moves: best_moves,
        })
    }

    /// Choose a move and report why it was chosen.
    pub fn decide<B, R>(&self, board: &B, rng: &mut R) -> Result<Decision<B::Move>, SelectionError>
    where
        B: Board,
        R: Rng + ?Sized,
    {
        if self.prefer_mates {
            let mating_moves = self.find_mating_moves(board);
            if let Some(first) = mating_moves.first().cloned() {
                info!(chosen = ?first, mates = mating_moves.len(), "immediate mate available");
                return Ok(Decision {
                    chosen: first,
                    reason: DecisionReason::Checkmate { mating_moves },
                });
            }
        }

        let ranked = self.rank_moves(board)?;
        let chosen = ranked
            .moves
            .as_slice()
            .choose(rng)
            .cloned()
            .ok_or(SelectionError::NoLegalMoves)?;

        Ok(Decision {
            chosen,
            reason: DecisionReason::Material { ranked },
        })
    }

    pub fn select<B, R>(&self, board: &B, rng: &mut R) -> Result<B::Move, SelectionError>
    where
        B: Board,
        R: Rng + ?Sized,
    {
        Ok(self.decide(board, rng)?.chosen)
    }
}

/// Immediately mating moves from `board`, in enumeration order.
pub fn find_mating_moves<B: Board>(board: &B) -> Vec<B::Move> {
    MoveSelector::new(MaterialScorer).find_mating_moves(board)
}

/// Every legal move tied for the best material score, using the pre-move
/// baseline as the starting sentinel. Errors on a terminal position.
pub fn best_moves<B: Board>(board: &B) -> Result<Vec<B::Move>, SelectionError> {
    MoveSelector::new(MaterialScorer).best_moves(board)
}

/// First mating move if any, else a uniform draw from [`best_moves`].
pub fn select<B, R>(board: &B, rng: &mut R) -> Result<B::Move, SelectionError>
where
    B: Board,
    R: Rng + ?Sized,
{
    MoveSelector::new(MaterialScorer).select(board, rng)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::game_state::chess_board::ChessBoard;
    use crate::game_state::chess_types::{PieceKind, Side};
    use crate::search::board_scoring::evaluate;
    use crate::search::synthetic_board::SyntheticBoard;
    use crate::utils::long_algebraic::move_to_long_algebraic;

    fn board_after(fen: &str, first_move: &str) -> ChessBoard {
        ChessBoard::from_fen(fen)
            .and_then(|board| board.play_uci(first_move))
            .expect("puzzle setup should be legal")
    }

    fn names(moves: &[shakmaty::Move]) -> Vec<String> {
        moves.iter().map(move_to_long_algebraic).collect()
    }

    fn kings() -> Vec<(PieceKind, Side)> {
        vec![(PieceKind::King, Side::First), (PieceKind::King, Side::Second)]
    }

    fn with(extra: &[(PieceKind, Side)]) -> Vec<(PieceKind, Side)> {
        let mut pieces = kings();
        pieces.extend_from_slice(extra);
        pieces
    }

    const MATE_IN_ONE: &[(&str, &str, &str)] = &[
        ("3b4/pp2kprp/8/1Bp5/4R3/1P6/P4PPP/1K6 b - - 0 22", "e7f8", "e4e8"),
        ("q2Q3k/1p4p1/3R1N1p/6r1/8/7P/PP3PP1/6K1 b - - 8 44", "a8d8", "d6d8"),
        ("3r4/pB3R2/1p2p3/8/kP4b1/2P1B3/P4P2/4K3 w - - 1 29", "b7e4", "d8d1"),
    ];

    // One move + hanging piece puzzles: exactly one capture wins material.
    const HANGING_PIECE: &[(&str, &str, &str)] = &[
        ("r1b1k2r/ppppqppp/2n2n2/2b1p3/2P1P3/3P1NP1/PP3PBP/RNBQK2R b KQkq - 0 6", "c5f2", "e1f2"),
        ("rnbqk2r/pp3ppp/4pn2/2bp4/8/2P2NP1/PP2PPBP/RNBQK2R b KQkq - 1 6", "c5f2", "e1f2"),
        ("r2qkbnr/ppp3pp/2np4/4p3/2B1PpbP/2NP1N2/PPP2PP1/R1BQK2R w KQkq - 3 7", "c4f7", "e8f7"),
        ("rnbq1rk1/pp2nppp/3b4/3p4/3p1P2/3B1N2/PPP3PP/RNBQ1RK1 w - - 0 9", "d3h7", "g8h7"),
        ("5nk1/6b1/3p4/3Pp1Q1/P5b1/8/4q1P1/2B2RK1 w - - 0 37", "f1f8", "g8f8"),
        ("5rk1/5p1p/3n2p1/8/1R3KP1/1N5r/P4P2/4R3 b - - 0 31", "h3f3", "f4f3"),
        ("5r1k/1p1q2pp/p2p4/5rP1/5P1P/P1P1P3/1P4Q1/R1B4K b - - 0 24", "f5d5", "g2d5"),
        ("8/8/5k2/5p2/5Kp1/3B3r/8/6R1 w - - 4 45", "g1f1", "h3d3"),
        ("2Q5/5ppk/5n1p/4p3/2P1q3/7P/6PK/8 b - - 0 35", "e4c4", "c8c4"),
        ("r2r2k1/5ppp/p1RNp1b1/1p6/1P6/P4P2/5KPP/3R4 b - - 2 23", "g6c2", "c6c2"),
        ("5r1k/6p1/1R3p1p/1p5n/P3N3/3P4/1r4PP/5R1K b - - 0 28", "b5a4", "b6b2"),
    ];

    #[test]
    fn back_rank_mate_is_found_and_selected() {
        let board = board_after("3b4/pp2kprp/8/1Bp5/4R3/1P6/P4PPP/1K6 b - - 0 22", "e7f8");

        let mates = names(&find_mating_moves(&board));
        assert!(mates.iter().any(|m| m == "e4e8"), "mates: {mates:?}");

        let mut rng = StdRng::seed_from_u64(7);
        let chosen = select(&board, &mut rng).expect("position has legal moves");
        assert_eq!(move_to_long_algebraic(&chosen), "e4e8");
    }

    #[test]
    fn mate_in_one_puzzles_select_the_mate() {
        for &(fen, first_move, expected) in MATE_IN_ONE {
            let board = board_after(fen, first_move);
            let mates = find_mating_moves(&board);
            assert!(names(&mates).iter().any(|m| m == expected), "{fen}");

            for seed in 0..4 {
                let mut rng = StdRng::seed_from_u64(seed);
                let chosen = select(&board, &mut rng).expect("position has legal moves");
                assert_eq!(move_to_long_algebraic(&chosen), expected, "{fen} seed {seed}");
            }
        }
    }

    #[test]
    fn hanging_piece_puzzles_have_a_single_best_capture() {
        for &(fen, first_move, expected) in HANGING_PIECE {
            let board = board_after(fen, first_move);
            let best = best_moves(&board).expect("position has legal moves");
            assert_eq!(names(&best), vec![expected.to_owned()], "{fen}");
        }
    }

    #[test]
    fn best_moves_is_exactly_the_extremal_set() {
        for &(fen, first_move, _) in HANGING_PIECE {
            let board = board_after(fen, first_move);
            let mover = board.side_to_move();

            let scored: Vec<(shakmaty::Move, Score)> = board
                .legal_moves()
                .into_iter()
                .map(|mv| {
                    let score = evaluate(&board.apply(&mv));
                    (mv, score)
                })
                .collect();
            let extremal = match mover {
                Side::First => scored.iter().map(|(_, s)| *s).max(),
                Side::Second => scored.iter().map(|(_, s)| *s).min(),
            }
            .expect("puzzle has legal moves");

            let expected: HashSet<String> = scored
                .iter()
                .filter(|(_, s)| *s == extremal)
                .map(|(mv, _)| move_to_long_algebraic(mv))
                .collect();
            let actual: HashSet<String> = names(&best_moves(&board).expect("legal moves exist"))
                .into_iter()
                .collect();

            assert_eq!(actual, expected, "{fen}");
        }
    }

    #[test]
    fn quiet_start_keeps_every_move_in_the_running() {
        let board = ChessBoard::new_game();
        let legal: HashSet<String> = names(&board.legal_moves()).into_iter().collect();
        let best = best_moves(&board).expect("start has legal moves");
        let best_set: HashSet<String> = names(&best).into_iter().collect();

        assert!(!best.is_empty());
        assert_eq!(best_set, legal);
    }

    #[test]
    fn terminal_position_fails_loudly() {
        let board = ChessBoard::new_game()
            .play_uci_sequence(["f2f3", "e7e5", "g2g4", "d8h4"])
            .expect("fool's mate line is legal");

        assert!(find_mating_moves(&board).is_empty());
        assert_eq!(best_moves(&board), Err(SelectionError::NoLegalMoves));

        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(select(&board, &mut rng), Err(SelectionError::NoLegalMoves));
    }

    #[test]
    fn mate_beats_a_richer_capture() {
        // "grab" wins a queen, "mate" wins nothing but ends the game.
        let board = SyntheticBoard::leaf(Side::First, with(&[(PieceKind::Queen, Side::Second)]))
            .with_move("grab", SyntheticBoard::leaf(Side::Second, kings()))
            .with_move(
                "mate",
                SyntheticBoard::leaf(Side::Second, with(&[(PieceKind::Queen, Side::Second)])).mated(),
            );

        assert_eq!(best_moves(&board), Ok(vec!["grab"]));
        assert_eq!(find_mating_moves(&board), vec!["mate"]);

        for seed in 0..8 {
            let mut rng = StdRng::seed_from_u64(seed);
            assert_eq!(select(&board, &mut rng), Ok("mate"));
        }
    }

    #[test]
    fn first_mating_move_wins_in_enumeration_order() {
        let board = SyntheticBoard::leaf(Side::First, kings())
            .with_move("quiet", SyntheticBoard::leaf(Side::Second, kings()))
            .with_move("mate_a", SyntheticBoard::leaf(Side::Second, kings()).mated())
            .with_move("mate_b", SyntheticBoard::leaf(Side::Second, kings()).mated());

        assert_eq!(find_mating_moves(&board), vec!["mate_a", "mate_b"]);
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(select(&board, &mut rng), Ok("mate_a"));
    }

    #[test]
    fn mate_preference_can_be_disabled() {
        let board = SyntheticBoard::leaf(Side::First, with(&[(PieceKind::Queen, Side::Second)]))
            .with_move("grab", SyntheticBoard::leaf(Side::Second, kings()))
            .with_move(
                "mate",
                SyntheticBoard::leaf(Side::Second, with(&[(PieceKind::Queen, Side::Second)])).mated(),
            );
        let selector = MoveSelector::new(MaterialScorer).with_mate_preference(false);

        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(selector.select(&board, &mut rng), Ok("grab"));
    }

    #[test]
    fn second_side_prefers_lower_scores() {
        let board = SyntheticBoard::leaf(Side::Second, with(&[(PieceKind::Rook, Side::First), (PieceKind::Knight, Side::First)]))
            .with_move("take_knight", SyntheticBoard::leaf(Side::First, with(&[(PieceKind::Rook, Side::First)])))
            .with_move("take_rook", SyntheticBoard::leaf(Side::First, with(&[(PieceKind::Knight, Side::First)])))
            .with_move("also_rook", SyntheticBoard::leaf(Side::First, with(&[(PieceKind::Knight, Side::First)])));

        assert_eq!(best_moves(&board), Ok(vec!["take_rook", "also_rook"]));

        let mirrored = board.mirrored();
        assert_eq!(mirrored.side_to_move(), Side::First);
        assert_eq!(best_moves(&mirrored), Ok(vec!["take_rook", "also_rook"]));
    }

    #[test]
    fn baseline_sentinel_keeps_all_moves_when_nothing_improves() {
        // Both moves lose material relative to the unmoved position.
        let board = SyntheticBoard::leaf(Side::First, with(&[(PieceKind::Rook, Side::First), (PieceKind::Pawn, Side::First)]))
            .with_move("lose_pawn", SyntheticBoard::leaf(Side::Second, with(&[(PieceKind::Rook, Side::First)])))
            .with_move("lose_rook", SyntheticBoard::leaf(Side::Second, with(&[(PieceKind::Pawn, Side::First)])));

        let ranked = MoveSelector::new(MaterialScorer).rank_moves(&board).expect("legal moves exist");
        assert_eq!(ranked.baseline, 600);
        assert_eq!(ranked.best_score, 600);
        assert_eq!(ranked.moves, vec!["lose_pawn", "lose_rook"]);

        let first_candidate = MoveSelector::new(MaterialScorer)
            .with_sentinel(TieBreakSentinel::FirstCandidate)
            .rank_moves(&board)
            .expect("legal moves exist");
        assert_eq!(first_candidate.best_score, 500);
        assert_eq!(first_candidate.moves, vec!["lose_pawn"]);
    }

    #[test]
    fn baseline_ties_are_appended_after_the_provisional_list() {
        let board = SyntheticBoard::leaf(Side::First, kings())
            .with_move("a", SyntheticBoard::leaf(Side::Second, kings()))
            .with_move("b", SyntheticBoard::leaf(Side::Second, kings()));

        let best = best_moves(&board).expect("legal moves exist");
        assert_eq!(best, vec!["a", "b", "a", "b"]);

        let first_candidate = MoveSelector::new(MaterialScorer)
            .with_sentinel(TieBreakSentinel::FirstCandidate)
            .best_moves(&board)
            .expect("legal moves exist");
        assert_eq!(first_candidate, vec!["a", "b"]);
    }

    #[test]
    fn seeded_selection_is_reproducible_and_stays_in_best_set() {
        let board = ChessBoard::new_game();
        let best: HashSet<String> = names(&best_moves(&board).expect("legal moves exist"))
            .into_iter()
            .collect();

        let draw = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            move_to_long_algebraic(&select(&board, &mut rng).expect("legal moves exist"))
        };

        for seed in 0..16 {
            let chosen = draw(seed);
            assert_eq!(chosen, draw(seed));
            assert!(best.contains(&chosen));
        }
    }

    #[test]
    fn decision_reports_ranking() {
        let board = board_after(HANGING_PIECE[0].0, HANGING_PIECE[0].1);
        let mut rng = StdRng::seed_from_u64(11);
        let decision = MoveSelector::new(MaterialScorer)
            .decide(&board, &mut rng)
            .expect("legal moves exist");

        assert_eq!(move_to_long_algebraic(&decision.chosen), "e1f2");
        match decision.reason {
            DecisionReason::Material { ranked } => {
                assert_eq!(ranked.best_score, ranked.baseline + 350);
                assert_eq!(ranked.moves.len(), 1);
            }
            other => panic!("expected a material decision, got {other:?}"),
        }
    }
}
