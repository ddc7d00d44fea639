use crate::game::{Board, Move, Player};

/// A node of the game tree: a board snapshot, the player who moves next,
/// the move that produced the snapshot, and the expanded children. Each
/// node exclusively owns its children, so the tree has no shared or cyclic
/// structure.
#[derive(Debug)]
pub struct GameState {
    player_to_move: Player,
    board: Board,
    last_move: Option<Move>,
    children: Vec<GameState>,
    value: Option<i64>,
}

impl GameState {
    /// A fresh, unexpanded node. `last_move` is `None` for a root created
    /// directly from a live board.
    pub fn new(player_to_move: Player, board: Board, last_move: Option<Move>) -> Self {
        GameState {
            player_to_move,
            board,
            last_move,
            children: Vec::new(),
            value: None,
        }
    }

    pub fn player_to_move(&self) -> Player {
        self.player_to_move
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    pub fn children(&self) -> &[GameState] {
        &self.children
    }

    /// The node's minimax value, once evaluation has visited it.
    pub fn value(&self) -> Option<i64> {
        self.value
    }

    pub(crate) fn children_mut(&mut self) -> &mut [GameState] {
        &mut self.children
    }

    pub(crate) fn set_value(&mut self, value: i64) {
        debug_assert!(self.value.is_none(), "minimax value assigned twice");
        self.value = Some(value);
    }

    /// Expand this node one level: one child per legal move of the player to
    /// move, in ascending column order. A board that already has a winner is
    /// left childless, so a won position is a leaf at any depth.
    pub fn initialize_children(&mut self) {
        if self.board.winner().is_some() {
            return;
        }
        let player = self.player_to_move;
        let board = self.board;
        self.children = board
            .legal_moves(player)
            .into_iter()
            .map(|mv| {
                // legal_moves only yields playable columns
                let next = board.apply(mv).unwrap();
                GameState::new(player.opponent(), next, Some(mv))
            })
            .collect();
    }

    /// Expand the tree below this node to `depth` further plies. Runs in
    /// exponential time with respect to depth; depths beyond about 6 take a
    /// very long time.
    pub fn build_tree(&mut self, depth: u32) {
        if depth == 0 {
            return;
        }
        self.initialize_children();
        for child in &mut self.children {
            child.build_tree(depth - 1);
        }
    }
}
