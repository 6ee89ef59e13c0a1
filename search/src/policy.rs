//! Search policy types.

use crate::error::SearchError;

/// Duplicate-state discipline for queue-based search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueMode {
    /// No explored set. Cheap, but revisits states and may loop on cycles.
    Tree,
    /// Explored set plus cost-aware frontier de-duplication.
    Graph,
}

/// When a node's state is tested against the goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalTest {
    /// When the node is popped for expansion.
    OnExpansion,
    /// When the node is generated. Saves one expansion layer for
    /// breadth-first search; unsound for cost-ordered frontiers.
    OnGeneration,
}

/// Frontier ordering family, used to validate a policy against a strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontierKind {
    Fifo,
    Lifo,
    /// Ordered by an evaluation function (UCS, greedy, A*).
    Priority,
}

/// Queue-search configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchPolicy {
    pub mode: QueueMode,
    pub goal_test: GoalTest,
    /// Upper bound on iterative deepening. `None` means unbounded.
    pub max_depth: Option<u32>,
}

impl SearchPolicy {
    /// Graph search, goal tested on expansion.
    #[must_use]
    pub fn graph() -> Self {
        Self::default()
    }

    /// Tree search, goal tested on expansion.
    #[must_use]
    pub fn tree() -> Self {
        Self {
            mode: QueueMode::Tree,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_goal_test(mut self, goal_test: GoalTest) -> Self {
        self.goal_test = goal_test;
        self
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Validate that this policy is sound for a `strategy` using `frontier`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::UnsupportedPolicyMode`] if goal testing at
    /// generation time is combined with a priority frontier: the first goal
    /// generated is not necessarily the cheapest one.
    pub fn validate_for(&self, strategy: &str, frontier: FrontierKind) -> Result<(), SearchError> {
        if frontier == FrontierKind::Priority && self.goal_test == GoalTest::OnGeneration {
            return Err(SearchError::UnsupportedPolicyMode {
                detail: format!(
                    "{strategy} orders its frontier by evaluation; goal test on generation is not supported"
                ),
            });
        }
        Ok(())
    }

    /// JSON echo of the policy for run reports.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "goal_test": match self.goal_test {
                GoalTest::OnExpansion => "on_expansion",
                GoalTest::OnGeneration => "on_generation",
            },
            "max_depth": self.max_depth,
            "mode": match self.mode {
                QueueMode::Tree => "tree",
                QueueMode::Graph => "graph",
            },
        })
    }
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            mode: QueueMode::Graph,
            goal_test: GoalTest::OnExpansion,
            max_depth: None,
        }
    }
}
