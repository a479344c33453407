use crate::searcher::{NodeState, OpenEntry, Searcher, UNREACHABLE};
use crate::traits::AstarGraph;

impl<G: AstarGraph> Searcher<G> {
    /// Compute the cheapest path from `start` to `goal` using A*.
    ///
    /// Arrival is tested by key equality. Returns the full path (including
    /// both endpoints) or `None` if the goal is unreachable — an empty open
    /// set before arrival is a normal outcome, not an error.
    pub fn astar_path(&mut self, graph: &G, start: G::Node, goal: G::Node) -> Option<Vec<G::Node>> {
        let goal_key = graph.key(&goal);
        self.astar_path_by(graph, start, goal, |n| graph.key(n) == goal_key)
    }

    /// A* with an explicit arrival predicate instead of key equality.
    ///
    /// `goal` is still used to direct the heuristic; `at_goal` decides when
    /// the search is done (e.g. "any cell on this edge").
    pub fn astar_path_by(
        &mut self,
        graph: &G,
        start: G::Node,
        goal: G::Node,
        mut at_goal: impl FnMut(&G::Node) -> bool,
    ) -> Option<Vec<G::Node>> {
        self.nodes.clear();
        self.open.clear();

        let start_key = graph.key(&start);
        let start_f = graph.estimate(&start, &goal);
        self.nodes.insert(
            start_key.clone(),
            NodeState {
                node: start,
                g: 0,
                f: start_f,
                parent: None,
                open: true,
            },
        );
        self.open.push(OpenEntry {
            key: start_key,
            f: start_f,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut expanded: usize = 0;

        let found = loop {
            let Some(current) = self.open.pop() else {
                break None;
            };

            let Some(state) = self.nodes.get_mut(&current.key) else {
                // Every heap entry is inserted together with its node state.
                unreachable!("open-set entry without node state");
            };

            // Skip stale heap entries superseded by a cheaper rediscovery.
            if !state.open || current.f > state.f {
                continue;
            }

            let current_node = state.node.clone();
            if at_goal(&current_node) {
                break Some(current.key);
            }

            state.open = false;
            let current_g = state.g;
            expanded += 1;

            nbuf.clear();
            graph.neighbors(&current_node, &mut nbuf);

            for n in nbuf.iter() {
                // Saturating: an UNREACHABLE edge or estimate never wraps,
                // it simply never improves on any known score.
                let tentative = current_g.saturating_add(graph.cost(&current_node, n));
                let nk = graph.key(n);
                let known = self.nodes.get(&nk).map_or(UNREACHABLE, |s| s.g);
                if tentative >= known {
                    continue;
                }

                let f = tentative.saturating_add(graph.estimate(n, &goal));
                self.nodes.insert(
                    nk.clone(),
                    NodeState {
                        node: n.clone(),
                        g: tentative,
                        f,
                        parent: Some(current.key.clone()),
                        open: true,
                    },
                );
                self.open.push(OpenEntry { key: nk, f });
            }
        };

        self.nbuf = nbuf;

        let Some(goal_key) = found else {
            log::trace!("astar: open set exhausted after {expanded} expansions");
            return None;
        };
        log::trace!("astar: goal reached after {expanded} expansions");

        // Reconstruct by walking parents back to the start.
        let mut path = Vec::new();
        let mut key = goal_key;
        loop {
            let state = &self.nodes[&key];
            path.push(state.node.clone());
            match &state.parent {
                Some(parent) => key = parent.clone(),
                None => break,
            }
        }
        path.reverse();
        Some(path)
    }
}
