//! Evaluation functions: node scoring for priority frontiers.

use aima_kernel::{Heuristic, Node};

/// Scores a node; priority frontiers expand the lowest score first.
pub trait EvaluationFunction<S, A> {
    fn f(&self, node: &Node<S, A>) -> f64;
}

/// `f(n) = g(n)`: uniform-cost search.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathCostEvaluation;

impl<S, A> EvaluationFunction<S, A> for PathCostEvaluation {
    fn f(&self, node: &Node<S, A>) -> f64 {
        node.path_cost
    }
}

/// `f(n) = h(n)`: greedy best-first search.
#[derive(Debug, Clone, Copy)]
pub struct GreedyEvaluation<'h, H> {
    pub heuristic: &'h H,
}

impl<S, A, H: Heuristic<S>> EvaluationFunction<S, A> for GreedyEvaluation<'_, H> {
    fn f(&self, node: &Node<S, A>) -> f64 {
        self.heuristic.h(&node.state)
    }
}

/// `f(n) = g(n) + h(n)`: A* search.
#[derive(Debug, Clone, Copy)]
pub struct AStarEvaluation<'h, H> {
    pub heuristic: &'h H,
}

impl<S, A, H: Heuristic<S>> EvaluationFunction<S, A> for AStarEvaluation<'_, H> {
    fn f(&self, node: &Node<S, A>) -> f64 {
        node.path_cost + self.heuristic.h(&node.state)
    }
}
