// Busca recursiva fork/join sobre cópias independentes do tabuleiro.
//
// Cada nível abaixo da profundidade máxima lança uma tarefa por lance candidato
// e espera por todas antes de agregar. Nenhuma tarefa partilha tabuleiros;
// o único estado partilhado é o contador de nós.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use log::{debug, trace, warn};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::core::*;
use crate::error::EngineError;
use super::config::{SearchConfig, SearchMode, MAX_SEARCH_DEPTH};
use super::evaluation::{net_score, ScoreWeights};

/// Resultado de uma busca a partir da raiz.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult {
    /// `None` quando o jogador não tem lances legais.
    pub best_move: Option<Move>,
    pub score: i32,
    pub stats: SearchStats,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SearchStats {
    pub nodes: u64,
    pub elapsed: Duration,
}

/// Parâmetros fixos durante uma busca, partilhados (só leitura) por todas as tarefas.
struct SearchContext<'a> {
    player: Player,
    max_depth: u8,
    weights: &'a ScoreWeights,
    mode: SearchMode,
    nodes: AtomicU64,
}

/// Motor de busca com um pool de threads próprio, reutilizado entre buscas.
pub struct SearchEngine {
    config: SearchConfig,
    pool: ThreadPool,
}

impl SearchEngine {
    pub fn new(config: SearchConfig) -> Result<Self, EngineError> {
        config.validate()?;
        let pool = ThreadPoolBuilder::new()
            .num_threads(config.threads)
            .thread_name(|i| format!("damas-search-{}", i))
            .build()?;
        debug!("search pool ready: {} threads, depth {}", config.threads, config.max_depth);
        Ok(SearchEngine { config, pool })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Busca com a profundidade configurada.
    pub fn search<R: Rng + ?Sized>(&self, board: &Board, player: Player, rng: &mut R) -> SearchResult {
        self.search_best_move(board, player, self.config.max_depth, rng)
    }

    /// Busca com uma profundidade explícita, limitada a `MAX_SEARCH_DEPTH`.
    pub fn search_best_move<R: Rng + ?Sized>(
        &self,
        board: &Board,
        player: Player,
        max_depth: u8,
        rng: &mut R,
    ) -> SearchResult {
        let seed = rng.gen();
        let weights = &self.config.weights;
        let mode = self.config.mode;
        self.pool.install(|| run_search(board, player, max_depth, weights, mode, seed))
    }
}

/// Busca paralela no pool global do rayon, com os pesos por omissão.
/// A profundidade é limitada a `MAX_SEARCH_DEPTH`.
pub fn search_best_move<R: Rng + ?Sized>(
    board: &Board,
    player: Player,
    max_depth: u8,
    rng: &mut R,
) -> SearchResult {
    let weights = ScoreWeights::default();
    run_search(board, player, max_depth, &weights, SearchMode::Parallel, rng.gen())
}

fn run_search(
    board: &Board,
    player: Player,
    max_depth: u8,
    weights: &ScoreWeights,
    mode: SearchMode,
    seed: u64,
) -> SearchResult {
    let start = Instant::now();
    if max_depth > MAX_SEARCH_DEPTH {
        warn!("search depth {} above the limit, using {}", max_depth, MAX_SEARCH_DEPTH);
    }
    let max_depth = max_depth.min(MAX_SEARCH_DEPTH);
    let ctx = SearchContext { player, max_depth, weights, mode, nodes: AtomicU64::new(0) };

    let (best_move, score) = search_node(&ctx, board, 0, seed);

    let stats = SearchStats { nodes: ctx.nodes.load(Ordering::Relaxed), elapsed: start.elapsed() };
    match best_move {
        Some(mv) => debug!(
            "search done: {} score {} nodes {} time {}ms",
            mv,
            score,
            stats.nodes,
            stats.elapsed.as_millis()
        ),
        None => debug!("search done: {} has no legal moves (score {})", player, score),
    }

    SearchResult { best_move, score, stats }
}

/// Avalia um nó: devolve o lance escolhido e a melhor pontuação líquida alcançável.
///
/// O adversário nunca responde: todos os níveis jogam pelo mesmo jogador.
/// Cada filho recebe uma semente própria, tirada antes do fork, por isso o
/// resultado não depende da ordem em que as threads terminam.
fn search_node(ctx: &SearchContext<'_>, board: &Board, depth: u8, seed: u64) -> (Option<Move>, i32) {
    ctx.nodes.fetch_add(1, Ordering::Relaxed);
    let mut rng = StdRng::seed_from_u64(seed);

    let all_moves = board.legal_moves(ctx.player);
    if all_moves.is_empty() {
        return (None, net_score(board, ctx.player, ctx.weights));
    }

    let child_seeds: Vec<u64> = all_moves.iter().map(|_| rng.gen()).collect();
    let expand = depth < ctx.max_depth;

    let evaluate = |i: usize| -> i32 {
        let child = board.apply(&all_moves[i]);
        let mut current = net_score(&child, ctx.player, ctx.weights);
        if expand {
            let (_, child_net) = search_node(ctx, &child, depth + 1, child_seeds[i]);
            // Penaliza caminhos longos: entre resultados iguais, preferir chegar mais cedo.
            current += child_net - depth as i32;
        }
        current
    };

    let scores: Vec<i32> = if expand && ctx.mode == SearchMode::Parallel {
        (0..all_moves.len()).into_par_iter().map(evaluate).collect()
    } else {
        (0..all_moves.len()).map(evaluate).collect()
    };

    let mut net = -((board.rows() * board.cols()) as i32);
    let mut best: Vec<usize> = Vec::new();
    for (i, &current) in scores.iter().enumerate() {
        if current > net {
            net = current;
            best.clear();
            best.push(i);
        } else if current == net {
            best.push(i);
        }
    }

    let selected = match best.choose(&mut rng) {
        Some(&i) => Some(all_moves[i]),
        None => {
            trace!("no move beats the floor at depth {}, picking any legal move", depth);
            all_moves.choose(&mut rng).copied()
        }
    };

    (selected, net)
}
