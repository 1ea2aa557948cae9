use super::*;
use crate::board::color::Color;
use crate::board::move_guard::MoveGuard;
use crate::evaluate::piece_values::board_material_score;
use crate::evaluate::{classify, is_position_valid};
use crate::move_generator::generate_moves;
use crate::{checkmate_move, chess_position, std_move};
use common::square::*;

/// Plain minimax with the same skipping rules as the search, without pruning.
fn minimax(board: &mut Board, depth: i32) -> i32 {
    if depth <= 0 {
        return board_material_score(board);
    }

    let color = board.turn();
    let candidates = generate_moves(board, color);
    if candidates.is_empty() && classify(board).is_game_over() {
        return board_material_score(board);
    }

    let maximize = color.maximize_score();
    let mut best = if maximize { i32::MIN } else { i32::MAX };

    for chess_move in candidates {
        let mut guard = MoveGuard::apply(board, &chess_move);
        if classify(&mut guard).is_game_over() {
            continue;
        }
        let score = minimax(&mut guard, depth - 1);
        best = if maximize {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}

fn pruned_score(board: &mut Board, depth: i32) -> i32 {
    let mut context = SearchContext::new(depth as u8, usize::MAX);
    let root = context.tree().root();
    context
        .alpha_beta(board, root, depth, i32::MIN, i32::MAX)
        .score
}

#[test]
fn test_find_mate_in_1_white() {
    let board = chess_position! {
        .......k
        ......pp
        ........
        ........
        ........
        ........
        ........
        R.....K.
    };
    println!("Testing board:\n{}", board);

    let chess_move = best_move(&board, 3, DEFAULT_NODE_BUDGET);
    assert_eq!(
        chess_move,
        Some(checkmate_move!(std_move!(Color::White, A1, A8)))
    );
}

#[test]
fn test_find_mate_in_1_black() {
    let mut board = chess_position! {
        r.....k.
        ........
        ........
        ........
        ........
        ........
        ......PP
        .......K
    };
    board.set_turn(Color::Black);
    println!("Testing board:\n{}", board);

    let chess_move = best_move(&board, 3, DEFAULT_NODE_BUDGET);
    assert_eq!(
        chess_move,
        Some(checkmate_move!(std_move!(Color::Black, A8, A1)))
    );
}

#[test]
fn test_takes_hanging_queen() {
    let board = chess_position! {
        q......k
        ........
        ........
        ........
        ........
        ........
        ........
        R...K...
    };
    println!("Testing board:\n{}", board);

    let mut context = SearchContext::new(2, DEFAULT_NODE_BUDGET);
    let chess_move = context.best_move(&board);

    assert_eq!(chess_move, Some(std_move!(Color::White, A1, A8, 9)));
    assert_eq!(context.stats().last_score, Some(5));
    assert_eq!(
        context.stats().best_line.first(),
        Some(&std_move!(Color::White, A1, A8, 9))
    );
}

#[test]
fn test_black_minimizes() {
    let mut board = chess_position! {
        r...k...
        ........
        ........
        ........
        ........
        ........
        ........
        Q......K
    };
    board.set_turn(Color::Black);

    let chess_move = best_move(&board, 2, DEFAULT_NODE_BUDGET);
    assert_eq!(chess_move, Some(std_move!(Color::Black, A8, A1, 9)));
}

#[test]
fn test_no_move_when_stalemated_or_mated() {
    let mut stalemate = chess_position! {
        k.......
        ........
        .Q......
        ........
        ........
        ........
        ........
        .......K
    };
    stalemate.set_turn(Color::Black);
    assert_eq!(best_move(&stalemate, 3, DEFAULT_NODE_BUDGET), None);

    let mut checkmate = chess_position! {
        .......k
        ......Q.
        .....K..
        ........
        ........
        ........
        ........
        ........
    };
    checkmate.set_turn(Color::Black);
    assert_eq!(best_move(&checkmate, 3, DEFAULT_NODE_BUDGET), None);
}

#[test]
fn test_best_move_is_legal_and_valid() {
    let board = chess_position! {
        r...k..r
        ppp..ppp
        ..n..q..
        ...pp...
        .b..P...
        ..NP.N..
        PPPB.PPP
        R..QKB.R
    };

    let chess_move = best_move(&board, 3, 20_000).unwrap();
    assert_eq!(chess_move.player(), Color::White);

    let mut after = board.clone();
    after.apply_move(&chess_move);
    assert!(is_position_valid(&after));
}

#[test]
fn test_alpha_beta_matches_minimax() {
    let positions = vec![
        Board::default(),
        chess_position! {
            r...k..r
            ppp..ppp
            ..n..q..
            ...pp...
            .b..P...
            ..NP.N..
            PPPB.PPP
            R..QKB.R
        },
        chess_position! {
            ....k...
            ...r....
            ..n.....
            ...P....
            ......Q.
            ........
            .....PPP
            ......K.
        },
    ];

    for position in positions {
        println!("Testing board:\n{}", position);
        for depth in 1..=3 {
            let mut board = position.clone();
            let expected = minimax(&mut board.clone(), depth);
            assert_eq!(
                pruned_score(&mut board, depth),
                expected,
                "depth {} disagrees",
                depth
            );
            assert_eq!(board, position);
        }
    }
}

#[test]
fn test_alpha_beta_restores_board() {
    let mut board = Board::default();
    let before = board.clone();

    let mut context = SearchContext::new(3, usize::MAX);
    let root = context.tree().root();
    context.alpha_beta(&mut board, root, 3, i32::MIN, i32::MAX);

    assert_eq!(board, before);
}

#[test]
fn test_search_tree_records_nodes() {
    let mut board = Board::default();
    let mut context = SearchContext::new(2, usize::MAX);
    let root = context.tree().root();
    let result = context.alpha_beta(&mut board, root, 2, i32::MIN, i32::MAX);

    let tree = context.tree();
    assert_eq!(result.score, 0);
    assert_eq!(context.searched_position_count(), tree.len() - 1);

    let root_children = &tree.get(root).children;
    assert_eq!(root_children.len(), 20);
    for &child in root_children.iter() {
        let node = tree.get(child);
        assert_eq!(node.depth, 0);
        assert_eq!(node.parent, Some(root));
        assert!(node.last_analyzed.is_some());
        for &reply in node.children.iter() {
            assert_eq!(tree.get(reply).depth, 1);
        }
    }

    // every white move after the first is refuted by black's first reply
    let pruned = root_children[1..]
        .iter()
        .flat_map(move |&child| tree.get(child).children.iter())
        .filter(move |&&reply| tree.get(reply).terminated_search)
        .count();
    assert_eq!(pruned, 19);

    // the best node is a reply to the first white move
    assert_eq!(tree.root_child(result.node), Some(root_children[0]));
}

#[test]
fn test_node_budget_stops_root_search() {
    let board = Board::default();
    let mut context = SearchContext::new(4, 0);

    let chess_move = context.best_move(&board);
    assert_eq!(chess_move, Some(std_move!(Color::White, B1, C3)));

    let stats = context.stats();
    assert_eq!(stats.root_moves_available, 20);
    assert_eq!(stats.root_moves_searched, 1);
    // the 20 black replies to Nc3, each one a leaf once the budget is spent
    assert_eq!(stats.searched_position_count, 20);
    assert_eq!(context.tree().len(), 1, "tree is freed after the search");
}

#[test]
fn test_depth_one_search_counts_no_nodes() {
    let mut context = SearchContext::new(1, DEFAULT_NODE_BUDGET);
    let chess_move = context.best_move(&Board::default());

    assert!(chess_move.is_some());
    let stats = context.stats();
    assert_eq!(stats.root_moves_searched, 20);
    assert_eq!(stats.searched_position_count, 0);
}

#[test]
fn test_deep_search_with_small_budget() {
    assert!(best_move(&Board::default(), 140, 400).is_some());
    assert!(best_move(&Board::default(), u8::MAX, 400).is_some());

    let mut board = Board::default();
    let before = board.clone();
    let mut context = SearchContext::new(140, 400);
    let root = context.tree().root();
    context.alpha_beta(&mut board, root, 140, i32::MIN, i32::MAX);

    assert_eq!(board, before);
    let deepest = context.tree().iter().map(|node| node.depth).max();
    assert!(deepest >= Some(127), "deepest node: {:?}", deepest);
}

#[test]
fn test_alpha_beta_stops_when_no_moves_remain() {
    let mut stalemate = chess_position! {
        k.......
        ........
        .Q......
        ........
        ........
        ........
        ........
        .......K
    };
    stalemate.set_turn(Color::Black);

    let mut context = SearchContext::new(3, usize::MAX);
    let root = context.tree().root();
    let result = context.alpha_beta(&mut stalemate, root, 3, i32::MIN, i32::MAX);

    assert_eq!(result.score, board_material_score(&stalemate));
    assert_eq!(result.node, root);
    assert_eq!(context.searched_position_count(), 0);
}

#[test]
fn test_alpha_beta_expands_mated_side_with_pseudo_legal_moves() {
    // black is mated but still has pawn pushes that expose its king
    let mut board = chess_position! {
        R......k
        ......pp
        ........
        ........
        ........
        ........
        ........
        ......K.
    };
    board.set_turn(Color::Black);

    let mut context = SearchContext::new(2, usize::MAX);
    let root = context.tree().root();
    context.alpha_beta(&mut board, root, 2, i32::MIN, i32::MAX);

    assert!(!context.tree().get(root).children.is_empty());
    assert_eq!(context.searched_position_count(), context.tree().len() - 1);
}

#[test]
fn test_depth_one_scores_captures_only() {
    let board = chess_position! {
        ....k...
        ........
        ........
        ...r....
        ..N.....
        ........
        ........
        ....K...
    };

    let mut context = SearchContext::new(1, DEFAULT_NODE_BUDGET);
    let chess_move = context.best_move(&board);

    assert_eq!(chess_move, Some(std_move!(Color::White, C4, D6, 5)));
    assert_eq!(context.stats().last_score, Some(3));
}
